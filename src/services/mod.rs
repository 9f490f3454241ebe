//! Services around the search core: loading, copying, notifying, generating.

pub mod clipboard;
pub mod generate;
pub mod loader;
pub mod notify;

pub use clipboard::{copy_with_notice, ArboardClipboard, ClipboardAccess};
pub use loader::{DatasetLoader, DatasetSource, LoadState, RequestId};
pub use notify::{DesktopNotifier, Notifier, Toast, ToastQueue};
