//! Port for interactive confirmation.

/// Asks the user to confirm an irreversible action.
///
/// Returns `false` when the user declines or cannot be asked.
#[cfg_attr(test, mockall::automock)]
pub trait Confirmer: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}
