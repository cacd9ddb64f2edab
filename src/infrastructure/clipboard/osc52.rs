//! Terminal clipboard using the OSC 52 escape sequence.
//!
//! Most modern terminal emulators (and tmux with `set-clipboard on`) copy the
//! base64 payload of `ESC ] 52 ; c ; <payload> BEL` into the system clipboard.

use std::io::{IsTerminal, Write};

use async_trait::async_trait;
use base64::Engine as _;

use crate::domain::ports::{Clipboard, ClipboardError};

/// Builds the OSC 52 sequence that places `text` on the clipboard.
pub fn osc52_sequence(text: &str) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(text);
    format!("\x1b]52;c;{payload}\x07")
}

/// Clipboard that writes OSC 52 sequences to stdout.
///
/// Rejected when stdout is not attached to a terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Osc52Clipboard;

#[async_trait]
impl Clipboard for Osc52Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut stdout = std::io::stdout();
        if !stdout.is_terminal() {
            return Err(ClipboardError::Unavailable(
                "stdout is not a terminal".to_string(),
            ));
        }

        stdout.write_all(osc52_sequence(text).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_wraps_base64_payload() {
        assert_eq!(
            osc52_sequence("http://localhost:5000/abc123"),
            "\x1b]52;c;aHR0cDovL2xvY2FsaG9zdDo1MDAwL2FiYzEyMw==\x07"
        );
    }

    #[test]
    fn test_sequence_for_empty_text() {
        assert_eq!(osc52_sequence(""), "\x1b]52;c;\x07");
    }
}
