//! Clipboard adapters.

mod osc52;

pub use osc52::{Osc52Clipboard, osc52_sequence};
