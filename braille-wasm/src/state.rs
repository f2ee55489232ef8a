use web_sys::{Document, HtmlElement, Window};

use braille_core::Session;

/// Global application state stored behind an `Rc<RefCell<_>>` so it can be
/// shared across the WASM callbacks.
pub struct State {
    pub window: Window,
    pub document: Document,
    /// Six-dot editing grid.
    pub grid: HtmlElement,
    /// Strip showing the in-progress word.
    pub word_strip: HtmlElement,
    /// Staging area holding unplaced cards.
    pub tray: HtmlElement,
    /// Free-form board carrying the dropzones.
    pub board: HtmlElement,
    pub message_box: HtmlElement,
    pub session: Session,
    /// UI language: "en" or "es".
    pub lang: String,
}
