//! Pointer gesture state machine.
//!
//! Exactly one gesture is active at any instant. Entry into a non-idle
//! state captures the anchor data needed for the whole interaction at the
//! press instant; release always returns to [`Gesture::Idle`], whatever
//! the pointer is over.

use crate::geometry::{Handle, Rect};
use crate::model::{CardId, ZoneId};

/// One continuous press→move→release interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// A card travels under the native drag-transfer protocol; movement
    /// visuals belong to the environment, only the drop is ours.
    DraggingCard { card: CardId },
    /// Zone body grabbed; `grab` is the pointer offset from the zone's
    /// origin at press time, preserved so the zone does not jump.
    DraggingDropzone { zone: ZoneId, grab: (f64, f64) },
    /// Handle grabbed; geometry is recomputed from the press-time
    /// rectangle and pointer position on every move.
    ResizingDropzone {
        zone: ZoneId,
        handle: Handle,
        start: Rect,
        press: (f64, f64),
    },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Zone being moved or resized, if any.
    pub fn active_zone(&self) -> Option<ZoneId> {
        match *self {
            Self::DraggingDropzone { zone, .. } | Self::ResizingDropzone { zone, .. } => Some(zone),
            _ => None,
        }
    }
}
