//! Core engine module - platform-agnostic search logic.
//!
//! Nothing in here touches the clipboard, the network or a UI framework:
//! - Emoji records and the immutable dataset
//! - Query tokenizer
//! - Record matcher
//! - Memoized filter pipeline
//! - Debounce policy for keystroke input

pub mod debounce;
pub mod filter;
pub mod matcher;
pub mod query;
pub mod record;

pub use debounce::{DebouncePolicy, Debouncer};
pub use filter::{filter, filter_indices, FilterPipeline};
pub use matcher::Query;
pub use query::tokenize;
pub use record::{Dataset, EmojiDocument, EmojiRecord};
