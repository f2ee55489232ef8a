/// Presentation-layer constants.
/// How long a message stays visible before the auto-hide fires (ms).
pub const MESSAGE_HIDE_MS: i32 = 3000;
/// Fallback teacher key used when the host page defines no
/// `window.__TEACHER_KEY`.
pub const DEFAULT_TEACHER_KEY: &str = "maestra123";
