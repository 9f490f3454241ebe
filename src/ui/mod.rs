//! iced-based desktop UI for Unicode Finder.
//!
//! A search box over a grid of emoji cards; clicking a card copies it.

#[cfg(feature = "iced-ui")]
pub mod app;
#[cfg(feature = "iced-ui")]
pub mod style;
#[cfg(feature = "iced-ui")]
pub mod theme;

#[cfg(feature = "iced-ui")]
pub use app::FinderApp;
