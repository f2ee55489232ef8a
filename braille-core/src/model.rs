//! Card and dropzone data models.

use serde::{Deserialize, Serialize};

use crate::codec::DotSet;
use crate::geometry::Rect;

/// Identity of a card. A zone's occupant and a tray card with the same id
/// are the same entity, never a copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

/// Identity of a dropzone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub u32);

/// One composed unit of a word: the resolved letter plus the cell that
/// produced it, kept so the glyph can be re-rendered anywhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLetter {
    pub letter: char,
    pub dots: DotSet,
}

/// A draggable card holding one completed word and its Braille rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    /// The letters concatenated, including any `?` sentinels.
    pub word: String,
    /// One cell per letter, in word order.
    pub glyphs: Vec<DotSet>,
    /// Set when the card lands correctly in play mode; terminal.
    pub locked: bool,
}

impl Card {
    pub fn draggable(&self) -> bool {
        !self.locked
    }
}

/// Occupancy state of a dropzone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneStatus {
    #[default]
    Empty,
    /// Holds a card as an answer-key assignment made in edit mode.
    FilledEdit,
    /// Holds a correctly matched card; play-mode concept only.
    FilledCorrect,
}

/// A positioned, resizable answer region on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dropzone {
    pub id: ZoneId,
    pub rect: Rect,
    /// Empty string means unassigned.
    pub expected_word: String,
    pub occupant: Option<CardId>,
    pub status: ZoneStatus,
}

impl Dropzone {
    pub fn assigned(&self) -> bool {
        !self.expected_word.is_empty()
    }
}
