//! Unicode Finder - search emojis by name, keyword, or character.
//!
//! Loads a static emoji dataset once, filters it as the user types, and copies
//! the chosen glyph to the clipboard.
//!
//! # Architecture
//!
//! The library is organized into these main modules:
//!
//! - [`core`] - Records, query tokenizer, matcher, memoized filter, debounce policy
//! - [`services`] - Dataset loading and generation, clipboard, notifications
//! - [`session`] - Event-driven state shared by the front-ends
//! - [`config`] - Configuration loading and management
//! - [`cli`] - Terminal front-end
//! - [`ui`] - iced desktop front-end (feature `iced-ui`)
//!
//! # Example
//!
//! ```
//! use unicode_finder::core::{filter, Dataset, EmojiRecord};
//!
//! let dataset = Dataset::new(vec![
//!     EmojiRecord::new("😀", "U+1F600", "grinning face", &["happy", "smile"]),
//!     EmojiRecord::new("🐶", "U+1F436", "dog face", &["animal", "pet"]),
//! ]);
//!
//! let found = filter(&dataset, "smile");
//! assert_eq!(found[0].character, "😀");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod services;
pub mod session;
pub mod ui;

mod error;

// Re-export commonly used types for convenience
pub use config::Config;
pub use core::{Dataset, EmojiRecord, FilterPipeline, Query};
pub use error::{FinderError, FinderResult};
pub use session::Session;
