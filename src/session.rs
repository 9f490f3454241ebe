//! Finder session: the event-driven state behind both front-ends.
//!
//! All transitions happen on one logical event queue. The owner feeds events
//! (load completion, keystrokes, timer ticks, clipboard results) and reads the
//! visible subset back; nothing in here blocks or spawns.

use std::time::Duration;

use tokio::time::Instant;

use crate::config::Config;
use crate::core::{Dataset, DebouncePolicy, Debouncer, EmojiRecord, FilterPipeline};
use crate::error::FinderResult;
use crate::services::loader::{DatasetLoader, LoadState, RequestId};
use crate::services::notify::{copied_message, Toast, ToastQueue, DEFAULT_TOAST_DURATION};

pub struct Session {
    loader: DatasetLoader,

    // Search state
    raw_query: String,
    committed_query: String,
    debouncer: Debouncer<String>,
    pipeline: FilterPipeline,
    selected_index: usize,

    // Notifications
    toasts: ToastQueue,
    copied_duration: Duration,
    // Most recently copied character and when its "Copied!" mark lapses
    last_copied: Option<(String, Instant)>,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self::with_policy(
            config.search.debounce_policy(),
            config.notifications.copied_duration(),
        )
    }

    pub fn with_policy(policy: DebouncePolicy, copied_duration: Duration) -> Self {
        let mut session = Self {
            loader: DatasetLoader::new(),
            raw_query: String::new(),
            committed_query: String::new(),
            debouncer: Debouncer::new(policy),
            pipeline: FilterPipeline::new(),
            selected_index: 0,
            toasts: ToastQueue::default(),
            copied_duration,
            last_copied: None,
        };
        session.refresh();
        session
    }

    // --- Dataset ---

    /// Start a dataset request; the caller performs the fetch.
    pub fn begin_load(&mut self) -> RequestId {
        self.loader.begin()
    }

    /// Publish a finished request. Returns false for a stale response.
    pub fn finish_load(&mut self, id: RequestId, result: FinderResult<Dataset>) -> bool {
        if !self.loader.finish(id, result) {
            return false;
        }
        self.refresh();
        true
    }

    pub fn load_state(&self) -> LoadState {
        self.loader.state()
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.loader.last_error()
    }

    pub fn dataset(&self) -> &Dataset {
        self.loader.dataset()
    }

    // --- Query ---

    /// A keystroke-level change. Returns when the session next wants a tick.
    pub fn input(&mut self, raw: String, now: Instant) -> Instant {
        self.raw_query = raw.clone();
        self.debouncer.push(raw, now)
    }

    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    pub fn committed_query(&self) -> &str {
        &self.committed_query
    }

    /// Earliest instant at which [`Session::tick`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.debouncer.deadline(),
            self.toasts.next_expiry(),
            self.last_copied.as_ref().map(|(_, until)| *until),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Commit a due query and expire old toasts. Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let committed = match self.debouncer.poll(now) {
            Some(query) => self.commit(query),
            None => false,
        };
        let pruned = self.toasts.prune(now);
        let unmarked = self
            .last_copied
            .as_ref()
            .is_some_and(|(_, until)| *until <= now);
        if unmarked {
            self.last_copied = None;
        }
        committed || pruned || unmarked
    }

    /// Push the pending query through immediately (Enter).
    pub fn commit_now(&mut self) -> bool {
        match self.debouncer.flush() {
            Some(query) => self.commit(query),
            None => false,
        }
    }

    /// Reset to the blank query, dropping any pending input (Escape).
    pub fn clear_query(&mut self) -> bool {
        self.raw_query.clear();
        self.debouncer.cancel();
        self.commit(String::new())
    }

    fn commit(&mut self, query: String) -> bool {
        if query == self.committed_query {
            return false;
        }

        tracing::debug!(query = %query, "Committed search query");
        self.committed_query = query;
        self.selected_index = 0;
        self.refresh()
    }

    fn refresh(&mut self) -> bool {
        let changed = self
            .pipeline
            .refresh(self.loader.dataset(), &self.committed_query);
        if self.selected_index >= self.pipeline.len() {
            self.selected_index = 0;
        }
        changed
    }

    // --- Results ---

    /// Records matching the committed query, in dataset order
    pub fn visible(&self) -> impl Iterator<Item = &EmojiRecord> + '_ {
        self.pipeline.records()
    }

    pub fn visible_len(&self) -> usize {
        self.pipeline.len()
    }

    /// Loaded and nothing matches
    pub fn shows_empty_state(&self) -> bool {
        !self.is_loading() && self.pipeline.is_empty()
    }

    /// How many times the visible subset was recomputed
    pub fn recomputations(&self) -> u64 {
        self.pipeline.recomputations()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected(&self) -> Option<&EmojiRecord> {
        self.pipeline.get(self.selected_index)
    }

    pub fn select(&mut self, position: usize) {
        if position < self.pipeline.len() {
            self.selected_index = position;
        }
    }

    pub fn select_next(&mut self) {
        let len = self.pipeline.len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.pipeline.len();
        if len > 0 {
            self.selected_index = if self.selected_index == 0 {
                len - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    // --- Clipboard ---

    /// Character to copy for the result at `position`.
    pub fn copy_target(&self, position: usize) -> Option<String> {
        self.pipeline.get(position).map(|r| r.character.clone())
    }

    /// Clipboard write finished. Success shows a toast, failure is only logged.
    pub fn finish_copy(&mut self, result: FinderResult<String>, now: Instant) {
        match result {
            Ok(character) => {
                tracing::info!(character = %character, "Copied emoji to clipboard");
                self.toasts
                    .push(&copied_message(&character), self.copied_duration, now);
                self.last_copied = Some((character, now + self.copied_duration));
            }
            Err(e) => tracing::error!("Failed to copy: {}", e),
        }
    }

    pub fn toasts(&self, now: Instant) -> impl Iterator<Item = &Toast> + '_ {
        self.toasts.active(now)
    }

    /// The character copied last, while its confirmation is still showing
    pub fn copied_character(&self, now: Instant) -> Option<&str> {
        match &self.last_copied {
            Some((character, until)) if *until > now => Some(character.as_str()),
            _ => None,
        }
    }
}

/// The single timer a front-end keeps armed to call [`Session::tick`].
///
/// A new timer is only needed when the session wants to wake up earlier than
/// the one already armed; a later deadline is picked up when that one fires.
#[derive(Debug, Default)]
pub struct WakeupTimer {
    armed: Option<Instant>,
}

impl WakeupTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the instant to arm a timer for, or `None` if the armed one suffices.
    pub fn arm(&mut self, deadline: Option<Instant>) -> Option<Instant> {
        let deadline = deadline?;
        if self.armed.is_some_and(|armed| armed <= deadline) {
            return None;
        }
        self.armed = Some(deadline);
        Some(deadline)
    }

    /// A timer armed for `at` went off.
    pub fn fired(&mut self, at: Instant) {
        if self.armed == Some(at) {
            self.armed = None;
        }
    }

    pub fn armed(&self) -> Option<Instant> {
        self.armed
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_policy(DebouncePolicy::default(), DEFAULT_TOAST_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinderError;

    const MS: Duration = Duration::from_millis(1);

    fn scenario() -> Dataset {
        Dataset::new(vec![
            EmojiRecord::new("😀", "1F600", "grinning face", &["happy", "smile"]),
            EmojiRecord::new("🐶", "1F436", "dog face", &["animal", "pet"]),
        ])
    }

    fn loaded() -> Session {
        let mut session = Session::default();
        let id = session.begin_load();
        assert!(session.finish_load(id, Ok(scenario())));
        session
    }

    fn visible_chars(session: &Session) -> Vec<&str> {
        session.visible().map(|r| r.character.as_str()).collect()
    }

    #[test]
    fn test_starts_pending_and_empty() {
        let session = Session::default();
        assert!(session.is_loading());
        assert_eq!(session.visible_len(), 0);
        assert!(!session.shows_empty_state());
    }

    #[test]
    fn test_load_shows_everything() {
        let session = loaded();
        assert_eq!(session.load_state(), LoadState::Loaded);
        assert_eq!(visible_chars(&session), vec!["😀", "🐶"]);
    }

    #[test]
    fn test_failed_load_shows_empty_state() {
        let mut session = Session::default();
        let id = session.begin_load();
        session.finish_load(id, Err(FinderError::Dataset("offline".to_string())));

        assert!(session.shows_empty_state());
        assert!(session.load_error().is_some());
        assert!(session.dataset().is_empty());
    }

    #[test]
    fn test_stale_load_ignored() {
        let mut session = Session::default();
        let first = session.begin_load();
        let second = session.begin_load();

        assert!(session.finish_load(second, Ok(scenario())));
        assert!(!session.finish_load(first, Ok(Dataset::empty())));
        assert_eq!(session.visible_len(), 2);
    }

    #[test]
    fn test_query_commits_after_delay() {
        let mut session = loaded();
        let t0 = Instant::now();

        let deadline = session.input("smile".to_string(), t0);
        assert_eq!(deadline, t0 + 500 * MS);
        assert_eq!(session.raw_query(), "smile");
        assert_eq!(session.committed_query(), "");
        assert_eq!(session.visible_len(), 2);

        assert!(!session.tick(t0 + 499 * MS));
        assert!(session.tick(t0 + 500 * MS));
        assert_eq!(session.committed_query(), "smile");
        assert_eq!(visible_chars(&session), vec!["😀"]);
    }

    #[test]
    fn test_scenario_queries() {
        let mut session = loaded();
        let cases: [(&str, Vec<&str>); 5] = [
            ("smile", vec!["😀"]),
            ("face", vec!["😀", "🐶"]),
            ("happy dog", vec![]),
            ("", vec!["😀", "🐶"]),
            ("🐶", vec!["🐶"]),
        ];

        for (query, expected) in cases {
            session.input(query.to_string(), Instant::now());
            session.commit_now();
            assert_eq!(visible_chars(&session), expected, "query {:?}", query);
        }
    }

    #[test]
    fn test_recommitting_same_query_does_not_recompute() {
        let mut session = loaded();
        let t0 = Instant::now();
        let before = session.recomputations();

        session.input("d".to_string(), t0);
        session.input("".to_string(), t0 + 100 * MS);
        assert!(!session.tick(t0 + 600 * MS));
        assert_eq!(session.recomputations(), before);
    }

    #[test]
    fn test_sustained_typing_refreshes_before_quiet() {
        let mut session = loaded();
        let t0 = Instant::now();
        let query = "grinning face smile";
        let mut refreshed_while_typing = false;

        for (i, end) in (1..=query.len()).enumerate() {
            let now = t0 + (i as u32 * 100) * MS;
            session.input(query[..end].to_string(), now);
            refreshed_while_typing |= session.tick(now);
        }

        assert!(refreshed_while_typing);
        assert_ne!(session.committed_query(), query);
    }

    #[test]
    fn test_clear_query_cancels_pending() {
        let mut session = loaded();
        let t0 = Instant::now();

        session.input("dog".to_string(), t0);
        session.commit_now();
        assert_eq!(session.visible_len(), 1);

        session.input("dogs".to_string(), t0 + 100 * MS);
        assert!(session.clear_query());
        assert_eq!(session.raw_query(), "");
        assert!(!session.tick(t0 + 5000 * MS));
        assert_eq!(session.visible_len(), 2);
    }

    #[test]
    fn test_selection_wraps() {
        let mut session = loaded();
        assert_eq!(session.selected_index(), 0);

        session.select_previous();
        assert_eq!(session.selected_index(), 1);
        session.select_next();
        assert_eq!(session.selected_index(), 0);

        session.select(1);
        assert_eq!(session.selected().map(|r| r.name.as_str()), Some("dog face"));
        session.select(9);
        assert_eq!(session.selected_index(), 1);
    }

    #[test]
    fn test_copy_success_shows_toast_until_expiry() {
        let mut session = loaded();
        let t0 = Instant::now();

        let character = session.copy_target(1).unwrap();
        session.finish_copy(Ok(character), t0);

        let messages: Vec<&str> = session.toasts(t0).map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["Copied 🐶!"]);
        assert_eq!(session.next_deadline(), Some(t0 + 2000 * MS));

        assert!(session.tick(t0 + 2000 * MS));
        assert_eq!(session.toasts(t0 + 2000 * MS).count(), 0);
        assert_eq!(session.next_deadline(), None);
    }

    #[test]
    fn test_only_last_copy_is_marked() {
        let mut session = loaded();
        let t0 = Instant::now();

        session.finish_copy(Ok("😀".to_string()), t0);
        session.finish_copy(Ok("🐶".to_string()), t0 + 100 * MS);

        assert_eq!(session.toasts(t0 + 100 * MS).count(), 2);
        assert_eq!(session.copied_character(t0 + 100 * MS), Some("🐶"));

        assert!(session.tick(t0 + 2000 * MS));
        assert_eq!(session.copied_character(t0 + 2000 * MS), Some("🐶"));
        assert!(session.tick(t0 + 2100 * MS));
        assert_eq!(session.copied_character(t0 + 2100 * MS), None);
        assert_eq!(session.next_deadline(), None);
    }

    #[test]
    fn test_configured_timing_is_used() {
        let mut config = Config::default();
        config.search.debounce_ms = 200;
        config.search.max_wait_ms = 300;
        config.notifications.copied_duration_ms = 750;

        let mut session = Session::new(&config);
        let id = session.begin_load();
        session.finish_load(id, Ok(scenario()));
        let t0 = Instant::now();

        assert_eq!(session.input("d".to_string(), t0), t0 + 200 * MS);
        assert_eq!(session.input("do".to_string(), t0 + 150 * MS), t0 + 300 * MS);
        assert!(session.tick(t0 + 300 * MS));
        assert_eq!(session.committed_query(), "do");

        session.finish_copy(Ok("🐶".to_string()), t0);
        assert_eq!(session.next_deadline(), Some(t0 + 750 * MS));
    }

    #[test]
    fn test_wakeup_timer_arms_once_per_deadline() {
        let mut session = loaded();
        let mut timer = WakeupTimer::new();
        let t0 = Instant::now();

        // A burst of keystrokes arms exactly one timer
        let first = session.input("d".to_string(), t0);
        assert_eq!(timer.arm(session.next_deadline()), Some(first));
        for (i, text) in ["do", "dog"].iter().enumerate() {
            session.input(text.to_string(), t0 + (i as u32 + 1) * 100 * MS);
            assert_eq!(timer.arm(session.next_deadline()), None);
        }

        // It fires early; the pushed-back deadline is armed next
        timer.fired(first);
        assert!(!session.tick(first));
        assert_eq!(timer.arm(session.next_deadline()), Some(t0 + 700 * MS));

        // An earlier deadline re-arms, a stale firing leaves it armed
        assert_eq!(timer.arm(Some(t0 + 650 * MS)), Some(t0 + 650 * MS));
        timer.fired(t0 + 700 * MS);
        assert_eq!(timer.armed(), Some(t0 + 650 * MS));

        assert_eq!(timer.arm(None), None);
    }

    #[test]
    fn test_copy_failure_is_silent() {
        let mut session = loaded();
        let t0 = Instant::now();

        session.finish_copy(Err(FinderError::Clipboard("denied".to_string())), t0);
        assert_eq!(session.toasts(t0).count(), 0);
        assert!(session.copy_target(7).is_none());
    }
}
