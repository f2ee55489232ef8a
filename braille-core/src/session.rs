//! Session context: the single place all board state lives.
//!
//! A [`Session`] owns the editing grid's pressed dots, the in-progress
//! word, every card and dropzone, the active pointer gesture and the
//! current mode. Every operation is synchronous and total: it either
//! fully succeeds or returns an [`ActionError`] leaving the session
//! untouched, so the browser layer can surface either arm as a message
//! without ever seeing partial state.

use crate::codec::{self, DotSet};
use crate::constants::DEFAULT_ZONE_SIZE;
use crate::error::ActionError;
use crate::gesture::Gesture;
use crate::geometry::{self, Handle, Rect};
use crate::mode::{AccessGate, Mode};
use crate::model::{Card, CardId, CardLetter, Dropzone, ZoneId, ZoneStatus};

/// What a successful drop meant, which depends on the mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// Edit mode: the zone now expects this word as its answer.
    Assigned { word: String },
    /// Play mode: the answer matched and the card is locked in place.
    Matched { word: String },
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    mode: Mode,
    active_dots: DotSet,
    word: Vec<CardLetter>,
    cards: Vec<Card>,
    zones: Vec<Dropzone>,
    gesture: Gesture,
    next_card_id: u32,
    next_zone_id: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn active_dots(&self) -> &DotSet {
        &self.active_dots
    }

    /// Letters composed so far for the next card.
    pub fn word(&self) -> &[CardLetter] {
        &self.word
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn zones(&self) -> &[Dropzone] {
        &self.zones
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn zone(&self, id: ZoneId) -> Option<&Dropzone> {
        self.zones.iter().find(|z| z.id == id)
    }

    fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    fn zone_mut(&mut self, id: ZoneId) -> Option<&mut Dropzone> {
        self.zones.iter_mut().find(|z| z.id == id)
    }

    /// Cards not currently sitting in any zone, in creation order.
    pub fn tray_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards
            .iter()
            .filter(|c| !self.zones.iter().any(|z| z.occupant == Some(c.id)))
    }

    fn require_edit(&self) -> Result<(), ActionError> {
        if self.mode == Mode::Edit {
            Ok(())
        } else {
            Err(ActionError::ModePermissionDenied)
        }
    }

    // --- Letter and card composition -------------------------------------

    /// Flip one dot on the editing grid; returns the new pressed state.
    pub fn toggle_dot(&mut self, idx: u8) -> Result<bool, ActionError> {
        self.require_edit()?;
        Ok(self.active_dots.toggle(idx))
    }

    /// Commit the pressed dots as the next letter of the in-progress word
    /// and clear the grid. Unknown combinations become the `?` sentinel.
    pub fn compose_letter(&mut self) -> Result<CardLetter, ActionError> {
        self.require_edit()?;
        if self.active_dots.is_empty() {
            return Err(ActionError::EmptySelection);
        }
        let dots = std::mem::take(&mut self.active_dots);
        let entry = CardLetter {
            letter: codec::encode(&dots),
            dots,
        };
        self.word.push(entry.clone());
        Ok(entry)
    }

    /// Reset the grid and the in-progress word.
    pub fn clear_word(&mut self) {
        self.word.clear();
        self.active_dots.clear();
    }

    /// Turn the in-progress word into a new draggable card, consuming the
    /// word. A second call without composing again fails with
    /// [`ActionError::EmptyWord`].
    pub fn build_card(&mut self) -> Result<CardId, ActionError> {
        self.require_edit()?;
        if self.word.is_empty() {
            return Err(ActionError::EmptyWord);
        }
        let letters = std::mem::take(&mut self.word);
        self.active_dots.clear();
        let id = CardId(self.next_card_id);
        self.next_card_id += 1;
        self.cards.push(Card {
            id,
            word: letters.iter().map(|l| l.letter).collect(),
            glyphs: letters.into_iter().map(|l| l.dots).collect(),
            locked: false,
        });
        Ok(id)
    }

    /// Remove a card wherever it is; idempotent. A zone that held it
    /// becomes empty again (its assigned answer survives).
    pub fn delete_card(&mut self, id: CardId) {
        self.vacate_holder_of(id);
        self.cards.retain(|c| c.id != id);
    }

    // --- Dropzones --------------------------------------------------------

    pub fn create_dropzone(&mut self, x: f64, y: f64) -> Result<ZoneId, ActionError> {
        self.require_edit()?;
        let id = ZoneId(self.next_zone_id);
        self.next_zone_id += 1;
        self.zones.push(Dropzone {
            id,
            rect: Rect::new(x, y, DEFAULT_ZONE_SIZE, DEFAULT_ZONE_SIZE),
            expected_word: String::new(),
            occupant: None,
            status: ZoneStatus::Empty,
        });
        Ok(id)
    }

    /// Remove a zone; idempotent. Returns the occupant released back to
    /// the tray, if there was one.
    pub fn delete_dropzone(&mut self, id: ZoneId) -> Result<Option<CardId>, ActionError> {
        self.require_edit()?;
        let mut released = None;
        if let Some(pos) = self.zones.iter().position(|z| z.id == id) {
            released = self.zones.remove(pos).occupant;
        }
        Ok(released)
    }

    // --- Drop protocol ----------------------------------------------------

    /// Drop the card the current gesture is carrying onto a zone. Returns
    /// `Ok(None)` when no card drag is active or the zone is gone; such a
    /// drop does nothing.
    pub fn drop_dragged_card(
        &mut self,
        zone_id: ZoneId,
    ) -> Result<Option<DropOutcome>, ActionError> {
        let Some(card_id) = self.dragged_card() else {
            return Ok(None);
        };
        self.drop_card(zone_id, card_id)
    }

    /// Drop a specific card onto a zone; dispatches on the current mode.
    pub fn drop_card(
        &mut self,
        zone_id: ZoneId,
        card_id: CardId,
    ) -> Result<Option<DropOutcome>, ActionError> {
        match self.mode {
            Mode::Edit => self.assign_answer(zone_id, card_id),
            Mode::Play => self.attempt_match(zone_id, card_id),
        }
    }

    /// Edit mode: make `card`'s word the zone's expected answer and show
    /// the card inside the zone. Re-assigning overwrites the answer and
    /// releases the previous occupant back to the tray.
    pub fn assign_answer(
        &mut self,
        zone_id: ZoneId,
        card_id: CardId,
    ) -> Result<Option<DropOutcome>, ActionError> {
        self.require_edit()?;
        let Some(word) = self.card(card_id).map(|c| c.word.clone()) else {
            return Ok(None);
        };
        if self.zone(zone_id).is_none() {
            return Ok(None);
        }
        self.vacate_holder_of(card_id);
        if let Some(zone) = self.zone_mut(zone_id) {
            zone.expected_word = word.clone();
            zone.occupant = Some(card_id);
            zone.status = ZoneStatus::FilledEdit;
        }
        Ok(Some(DropOutcome::Assigned { word }))
    }

    /// Play mode: check the card against the zone's expected word. On a
    /// match the card moves into the zone and locks; on a mismatch (or an
    /// already occupied zone) nothing changes and the student may retry.
    pub fn attempt_match(
        &mut self,
        zone_id: ZoneId,
        card_id: CardId,
    ) -> Result<Option<DropOutcome>, ActionError> {
        if self.mode != Mode::Play {
            return Err(ActionError::ModePermissionDenied);
        }
        let Some(word) = self.card(card_id).map(|c| c.word.clone()) else {
            return Ok(None);
        };
        let Some(zone) = self.zone(zone_id) else {
            return Ok(None);
        };
        if zone.occupant.is_some_and(|occ| occ != card_id) || word != zone.expected_word {
            return Err(ActionError::MatchMismatch);
        }
        self.vacate_holder_of(card_id);
        if let Some(card) = self.card_mut(card_id) {
            card.locked = true;
        }
        if let Some(zone) = self.zone_mut(zone_id) {
            zone.occupant = Some(card_id);
            zone.status = ZoneStatus::FilledCorrect;
        }
        Ok(Some(DropOutcome::Matched { word }))
    }

    fn vacate_holder_of(&mut self, card_id: CardId) {
        for z in &mut self.zones {
            if z.occupant == Some(card_id) {
                z.occupant = None;
                z.status = ZoneStatus::Empty;
            }
        }
    }

    // --- Gestures ---------------------------------------------------------

    /// Start carrying a card under the native transfer protocol. Refused
    /// (returns `false`) for locked cards or while another gesture runs.
    pub fn begin_card_drag(&mut self, id: CardId) -> bool {
        if !self.gesture.is_idle() {
            return false;
        }
        match self.card(id) {
            Some(c) if c.draggable() => {
                self.gesture = Gesture::DraggingCard { card: id };
                true
            }
            _ => false,
        }
    }

    /// Card carried by the active gesture, if it is a card drag.
    pub fn dragged_card(&self) -> Option<CardId> {
        match self.gesture {
            Gesture::DraggingCard { card } => Some(card),
            _ => None,
        }
    }

    /// Grab a zone's body at pointer position `(px, py)`; the offset from
    /// the zone's origin is captured for the whole gesture.
    pub fn begin_zone_drag(&mut self, id: ZoneId, px: f64, py: f64) -> Result<(), ActionError> {
        self.require_edit()?;
        if !self.gesture.is_idle() {
            return Ok(());
        }
        if let Some(z) = self.zone(id) {
            self.gesture = Gesture::DraggingDropzone {
                zone: id,
                grab: (px - z.rect.x, py - z.rect.y),
            };
        }
        Ok(())
    }

    /// Grab a resize handle; the zone's press-time rectangle anchors all
    /// later geometry.
    pub fn begin_zone_resize(
        &mut self,
        id: ZoneId,
        handle: Handle,
        px: f64,
        py: f64,
    ) -> Result<(), ActionError> {
        self.require_edit()?;
        if !self.gesture.is_idle() {
            return Ok(());
        }
        if let Some(z) = self.zone(id) {
            self.gesture = Gesture::ResizingDropzone {
                zone: id,
                handle,
                start: z.rect,
                press: (px, py),
            };
        }
        Ok(())
    }

    /// Apply the pointer position to the active zone gesture. Geometry is
    /// recomputed and written immediately on every call; returns the zone
    /// that changed so the caller can sync its visual.
    pub fn pointer_moved(&mut self, px: f64, py: f64) -> Option<ZoneId> {
        match self.gesture {
            Gesture::DraggingDropzone { zone, grab } => {
                if let Some(z) = self.zone_mut(zone) {
                    z.rect.x = px - grab.0;
                    z.rect.y = py - grab.1;
                }
                Some(zone)
            }
            Gesture::ResizingDropzone {
                zone,
                handle,
                start,
                press,
            } => {
                if let Some(z) = self.zone_mut(zone) {
                    z.rect = geometry::resize(start, handle, px - press.0, py - press.1);
                }
                Some(zone)
            }
            _ => None,
        }
    }

    /// Release ends whatever gesture is active, unconditionally.
    pub fn end_gesture(&mut self) {
        self.gesture = Gesture::Idle;
    }

    // --- Mode -------------------------------------------------------------

    /// Switch modes. Entering edit clears every play-mode correctness
    /// marker (assigned answers and placed cards survive); entering play
    /// only changes what is permitted.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.gesture = Gesture::Idle;
        if mode == Mode::Edit {
            for z in &mut self.zones {
                if z.status == ZoneStatus::FilledCorrect {
                    z.status = ZoneStatus::FilledEdit;
                }
            }
        }
    }

    /// Ask the gate for edit access with a submitted credential.
    pub fn unlock_edit(
        &mut self,
        gate: &dyn AccessGate,
        submitted: &str,
    ) -> Result<(), ActionError> {
        if gate.verify(submitted) {
            self.set_mode(Mode::Edit);
            Ok(())
        } else {
            Err(ActionError::AccessDenied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_in_play_mode_and_idle() {
        let s = Session::new();
        assert_eq!(s.mode(), Mode::Play);
        assert!(s.gesture().is_idle());
        assert!(s.cards().is_empty());
        assert!(s.zones().is_empty());
    }

    #[test]
    fn edit_only_operations_fail_in_play_mode() {
        let mut s = Session::new();
        assert_eq!(s.toggle_dot(1), Err(ActionError::ModePermissionDenied));
        assert_eq!(
            s.create_dropzone(0.0, 0.0),
            Err(ActionError::ModePermissionDenied)
        );
        assert_eq!(s.compose_letter(), Err(ActionError::ModePermissionDenied));
        assert_eq!(s.build_card(), Err(ActionError::ModePermissionDenied));
    }
}
