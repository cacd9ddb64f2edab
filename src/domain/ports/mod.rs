//! Trait seams between views and the outside world.
//!
//! - [`ShortenerApi`] - The shortening backend, addressed over HTTP in production
//! - [`Clipboard`] - Where copied short URLs go
//! - [`Confirmer`] - Interactive yes/no prompt for irreversible actions
//!
//! Mock implementations are generated with `mockall` for unit tests.

pub mod clipboard;
pub mod confirmer;
pub mod shortener_api;

pub use clipboard::{Clipboard, ClipboardError};
pub use confirmer::Confirmer;
pub use shortener_api::ShortenerApi;

#[cfg(test)]
pub use clipboard::MockClipboard;
#[cfg(test)]
pub use confirmer::MockConfirmer;
#[cfg(test)]
pub use shortener_api::MockShortenerApi;
