//! Dataset loading.
//!
//! The dataset is a static JSON document shaped as `{ "emojis": [...] }`. It
//! can come from a local file, an HTTP(S) URL, or the sample compiled into the
//! binary. Loading never fails outward: a broken source yields an empty
//! dataset and a logged error, so the UI can still render its empty state.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::{Dataset, EmojiDocument};
use crate::error::{FinderError, FinderResult};

/// Sample dataset shipped with the binary.
pub const BUNDLED_DATASET: &str = include_str!("../../assets/emoji_data.json");

/// File name of a generated dataset in the data directory.
pub const DATASET_FILE_NAME: &str = "emoji_data.json";

/// Where the dataset document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Bundled,
    File(PathBuf),
    Url(String),
}

impl DatasetSource {
    /// Interpret a user-supplied location.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.eq_ignore_ascii_case("bundled") {
            Self::Bundled
        } else if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }

    /// Pick the source for this session: explicit setting, then a generated
    /// dataset in the data directory, then the bundled sample.
    pub fn resolve(configured: Option<&str>) -> Self {
        Self::resolve_with(configured, default_dataset_path())
    }

    /// [`DatasetSource::resolve`] with an explicit generated-dataset location.
    pub fn resolve_with(configured: Option<&str>, generated: Option<PathBuf>) -> Self {
        if let Some(location) = configured.filter(|l| !l.trim().is_empty()) {
            return Self::parse(location);
        }

        match generated {
            Some(path) if path.exists() => Self::File(path),
            _ => Self::Bundled,
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => write!(f, "bundled sample"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{}", url),
        }
    }
}

/// `<data_dir>/unicode-finder/emoji_data.json`
pub fn default_dataset_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("unicode-finder").join(DATASET_FILE_NAME))
}

/// Parse a dataset document.
pub fn parse_document(bytes: &[u8]) -> FinderResult<Dataset> {
    let doc: EmojiDocument = serde_json::from_slice(bytes)?;
    Ok(doc.into())
}

/// Read and parse the document behind `source`.
pub async fn fetch(source: &DatasetSource) -> FinderResult<Dataset> {
    match source {
        DatasetSource::Bundled => parse_document(BUNDLED_DATASET.as_bytes()),
        DatasetSource::File(path) => fetch_file(path).await,
        DatasetSource::Url(url) => {
            let response = reqwest::get(url).await?.error_for_status()?;
            let body = response.bytes().await?;
            parse_document(&body)
        }
    }
}

async fn fetch_file(path: &Path) -> FinderResult<Dataset> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        FinderError::Dataset(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_document(&bytes)
}

/// Loading flag exposed to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded,
}

/// Identifies one load request; only the latest one may publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestId(u64);

/// Owns the published dataset and the load bookkeeping.
#[derive(Debug, Default)]
pub struct DatasetLoader {
    latest: u64,
    state: LoadState,
    dataset: Dataset,
    last_error: Option<String>,
}

impl DatasetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request. Any earlier request still in flight becomes stale.
    pub fn begin(&mut self) -> RequestId {
        self.latest += 1;
        self.state = LoadState::Pending;
        RequestId(self.latest)
    }

    /// Publish the outcome of `id`. Returns false if the response was stale.
    pub fn finish(&mut self, id: RequestId, result: FinderResult<Dataset>) -> bool {
        if id.0 != self.latest {
            tracing::debug!(request = id.0, latest = self.latest, "Ignoring stale dataset response");
            return false;
        }

        match result {
            Ok(dataset) => {
                tracing::info!(count = dataset.len(), "Emoji dataset loaded");
                self.dataset = dataset;
                self.last_error = None;
            }
            Err(e) => {
                tracing::error!("Error loading emoji data: {}", e);
                self.dataset = Dataset::empty();
                self.last_error = Some(e.to_string());
            }
        }

        self.state = LoadState::Loaded;
        true
    }

    /// Run one full request against `source`.
    pub async fn load(&mut self, source: &DatasetSource) -> &Dataset {
        let id = self.begin();
        let result = fetch(source).await;
        self.finish(id, result);
        &self.dataset
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Pending
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Message of the most recent failure, cleared by a successful load
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EmojiRecord;
    use tempfile::TempDir;

    const DOC: &str = r#"{
        "emojis": [
            {"character": "😀", "codePoint": "1F600", "name": "grinning face", "keywords": ["happy", "smile"]},
            {"character": "🐶", "codePoint": "1F436", "name": "dog face", "keywords": ["animal", "pet"]}
        ]
    }"#;

    #[test]
    fn test_parse_source() {
        assert_eq!(DatasetSource::parse("bundled"), DatasetSource::Bundled);
        assert_eq!(
            DatasetSource::parse("https://example.com/emoji_data.json"),
            DatasetSource::Url("https://example.com/emoji_data.json".to_string())
        );
        assert_eq!(
            DatasetSource::parse(" ./emoji_data.json "),
            DatasetSource::File(PathBuf::from("./emoji_data.json"))
        );
    }

    #[test]
    fn test_resolve_prefers_configured() {
        assert_eq!(
            DatasetSource::resolve(Some("/tmp/custom.json")),
            DatasetSource::File(PathBuf::from("/tmp/custom.json"))
        );
    }

    #[test]
    fn test_resolve_falls_back_to_generated_then_bundled() {
        let temp_dir = TempDir::new().unwrap();
        let generated = temp_dir.path().join(DATASET_FILE_NAME);

        assert_eq!(
            DatasetSource::resolve_with(None, Some(generated.clone())),
            DatasetSource::Bundled
        );
        assert_eq!(DatasetSource::resolve_with(Some("  "), None), DatasetSource::Bundled);

        std::fs::write(&generated, DOC).unwrap();
        assert_eq!(
            DatasetSource::resolve_with(None, Some(generated.clone())),
            DatasetSource::File(generated.clone())
        );
        assert_eq!(
            DatasetSource::resolve_with(Some("bundled"), Some(generated)),
            DatasetSource::Bundled
        );
    }

    #[test]
    fn test_parse_document() {
        let dataset = parse_document(DOC.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset[1].name, "dog face");
    }

    #[test]
    fn test_parse_document_wrong_shape() {
        assert!(parse_document(br#"{"items": []}"#).is_err());
        assert!(parse_document(b"not json").is_err());
        assert!(parse_document(r#"{"emojis": [{"character": "😀"}]}"#.as_bytes()).is_err());
    }

    #[test]
    fn test_bundled_sample_parses() {
        let dataset = parse_document(BUNDLED_DATASET.as_bytes()).unwrap();
        assert!(!dataset.is_empty());
        assert!(dataset.iter().any(|r| r.character == "🐶"));
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut loader = DatasetLoader::new();
        let first = loader.begin();
        let second = loader.begin();
        assert!(first < second);

        let stale = Dataset::new(vec![EmojiRecord::new("🐢", "U+1F422", "turtle", &[])]);
        assert!(!loader.finish(first, Ok(stale)));
        assert!(loader.is_loading());
        assert!(loader.dataset().is_empty());

        assert!(loader.finish(second, parse_document(DOC.as_bytes())));
        assert_eq!(loader.state(), LoadState::Loaded);
        assert_eq!(loader.dataset().len(), 2);
    }

    #[test]
    fn test_failure_publishes_empty_dataset() {
        let mut loader = DatasetLoader::new();
        let id = loader.begin();
        assert!(loader.finish(id, parse_document(DOC.as_bytes())));

        let id = loader.begin();
        let failed = loader.finish(id, Err(FinderError::Dataset("boom".to_string())));
        assert!(failed);
        assert_eq!(loader.state(), LoadState::Loaded);
        assert!(loader.dataset().is_empty());
        assert_eq!(loader.last_error(), Some("Dataset error: boom"));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DATASET_FILE_NAME);
        std::fs::write(&path, DOC).unwrap();

        let mut loader = DatasetLoader::new();
        let dataset = loader.load(&DatasetSource::File(path)).await;
        assert_eq!(dataset.len(), 2);
        assert!(!loader.is_loading());
        assert!(loader.last_error().is_none());
    }

    #[tokio::test]
    async fn test_load_missing_file_degrades_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let mut loader = DatasetLoader::new();

        let dataset = loader
            .load(&DatasetSource::File(temp_dir.path().join("missing.json")))
            .await;
        assert!(dataset.is_empty());
        assert_eq!(loader.state(), LoadState::Loaded);
        assert!(loader.last_error().is_some());
    }

    /// Serve one canned HTTP response per connection on a local port.
    async fn serve(status: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let mut request = [0u8; 1024];
                let _ = stream.read(&mut request).await;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        format!("http://{}/emoji_data.json", addr)
    }

    #[tokio::test]
    async fn test_load_from_url() {
        let url = serve("200 OK", DOC).await;
        let source = DatasetSource::parse(&url);
        assert!(matches!(source, DatasetSource::Url(_)));

        let mut loader = DatasetLoader::new();
        let dataset = loader.load(&source).await;
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset[0].character, "😀");
        assert!(loader.last_error().is_none());
    }

    #[tokio::test]
    async fn test_load_http_error_degrades_to_empty() {
        let url = serve("404 Not Found", "missing").await;

        let mut loader = DatasetLoader::new();
        let dataset = loader.load(&DatasetSource::Url(url)).await;
        assert!(dataset.is_empty());
        assert_eq!(loader.state(), LoadState::Loaded);
        assert!(loader.last_error().is_some());
    }

    #[tokio::test]
    async fn test_fetch_bundled() {
        let dataset = fetch(&DatasetSource::Bundled).await.unwrap();
        assert_eq!(dataset.len(), parse_document(BUNDLED_DATASET.as_bytes()).unwrap().len());
    }
}
