//! Core engine for the Braille word-matching board.
//!
//! A teacher composes words from six-dot Braille cells, packages them as
//! draggable cards and places answer zones on a free-form board; students
//! drag cards onto the matching zone. This crate holds everything with
//! algorithmic content (the dot codec, the card and dropzone models, the
//! anchor-preserving resize math, the pointer gesture state machine) and
//! knows nothing about the DOM. The browser side (`braille-wasm`) renders
//! these models and routes raw events back into [`Session`].

pub mod codec;
pub mod constants;
pub mod error;
pub mod gesture;
pub mod geometry;
pub mod mode;
pub mod model;
pub mod session;

pub use codec::{CELL_DOT_ORDER, DotSet, UNKNOWN_LETTER, encode, glyph};
pub use error::ActionError;
pub use gesture::Gesture;
pub use geometry::{Handle, Rect, resize};
pub use mode::{AccessGate, Mode, SharedSecretGate};
pub use model::{Card, CardId, CardLetter, Dropzone, ZoneId, ZoneStatus};
pub use session::{DropOutcome, Session};
