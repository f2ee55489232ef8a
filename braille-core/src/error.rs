//! Recoverable user-input conditions.
//!
//! Nothing here is fatal: every failed operation leaves the session
//! exactly as it was, and the condition is surfaced to the user through
//! the notification layer. Unknown dot combinations are deliberately not
//! in this taxonomy; they resolve to the `?` sentinel letter instead.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Letter composition attempted with no pressed dots.
    #[error("select at least one dot")]
    EmptySelection,
    /// Card creation attempted with no composed letters.
    #[error("compose a word first")]
    EmptyWord,
    /// Edit-only operation attempted in play mode.
    #[error("switch to edit mode first")]
    ModePermissionDenied,
    /// Card dropped on a zone expecting a different word.
    #[error("that is not the right answer")]
    MatchMismatch,
    /// Wrong credential submitted at the teacher gate.
    #[error("incorrect password")]
    AccessDenied,
}
