//! Message-box notifier: the sole surfacing mechanism for operation
//! outcomes and recoverable errors.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use braille_core::ActionError;

use crate::constants::MESSAGE_HIDE_MS;
use crate::state::State;

/// Severity of a user-facing notification; styled via a CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    fn class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Show a bilingual message in the shared message box and schedule the
/// auto-hide. A later message reuses the box; an earlier hide timer that
/// is still pending will hide it early.
pub fn show_message(s: &State, severity: Severity, en: &str, es: &str) {
    let text = if s.lang == "es" { es } else { en };
    s.message_box.set_inner_text(text);
    s.message_box
        .set_class_name(&format!("message-box {}", severity.class()));
    let _ = s.message_box.style().set_property("display", "block");

    let message_box = s.message_box.clone();
    let hide = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let _ = message_box.style().set_property("display", "none");
    }));
    let _ = s
        .window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            hide.as_ref().unchecked_ref(),
            MESSAGE_HIDE_MS,
        );
    hide.forget();
}

/// Bilingual text for a failed operation.
pub fn error_text(err: &ActionError) -> (&'static str, &'static str) {
    match err {
        ActionError::EmptySelection => ("Select at least one dot", "Selecciona al menos un punto"),
        ActionError::EmptyWord => ("Compose a word first", "Primero crea una palabra"),
        ActionError::ModePermissionDenied => (
            "Switch to edit mode first",
            "Primero cambia a Modo Edición",
        ),
        ActionError::MatchMismatch => (
            "Try again, that is not the right answer",
            "Inténtalo de nuevo, esa no es la respuesta correcta",
        ),
        ActionError::AccessDenied => ("Incorrect password", "Contraseña incorrecta"),
    }
}

pub fn report_error(s: &State, err: &ActionError) {
    let (en, es) = error_text(err);
    show_message(s, Severity::Error, en, es);
}
