//! DOM construction and re-rendering from the core models.
//!
//! Rendering is clear-and-rebuild: after any discrete mutation the
//! affected container is repainted from the session, which keeps the DOM
//! a pure function of the model. Continuous zone gestures bypass the full
//! repaint and only restyle the active element (see `apply_zone_geometry`).

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use braille_core::{CELL_DOT_ORDER, Card, DotSet, Dropzone, Handle, Rect, ZoneStatus, glyph};

use crate::state::State;

/// Build the 2×3 cell for one glyph, dots in physical reading order.
pub fn braille_cell(document: &Document, dots: &DotSet) -> Result<Element, JsValue> {
    let cell = document.create_element("div")?;
    cell.set_class_name("braille-letter");
    for filled in glyph(dots) {
        let dot = document.create_element("div")?;
        dot.set_class_name(if filled {
            "braille-dot filled"
        } else {
            "braille-dot"
        });
        cell.append_child(&dot)?;
    }
    Ok(cell)
}

fn letter_element(document: &Document, letter: char, dots: &DotSet) -> Result<Element, JsValue> {
    let el = document.create_element("div")?;
    el.set_class_name("letter-small");
    el.append_child(&braille_cell(document, dots)?.into())?;
    let text = document.create_element("span")?;
    text.set_text_content(Some(&letter.to_string()));
    el.append_child(&text)?;
    Ok(el)
}

fn delete_button(document: &Document) -> Result<Element, JsValue> {
    let del = document.create_element("div")?;
    del.set_class_name("delete-btn");
    del.set_text_content(Some("×"));
    Ok(del)
}

/// Build a card: the Braille word row, the plain-text word and a delete
/// control. Locked cards refuse the native drag.
pub fn card_element(document: &Document, card: &Card) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = document.create_element("div")?.dyn_into()?;
    el.set_class_name(if card.locked { "card locked" } else { "card" });
    el.set_attribute("data-card-id", &card.id.0.to_string())?;
    el.set_draggable(card.draggable());

    let word_row = document.create_element("div")?;
    word_row.set_class_name("braille-word");
    for dots in &card.glyphs {
        word_row.append_child(&braille_cell(document, dots)?.into())?;
    }
    el.append_child(&word_row)?;

    let text = document.create_element("div")?;
    text.set_text_content(Some(&card.word));
    el.append_child(&text)?;
    el.append_child(&delete_button(document)?.into())?;
    Ok(el)
}

fn zone_class(zone: &Dropzone) -> &'static str {
    match zone.status {
        ZoneStatus::Empty => "dropzone",
        ZoneStatus::FilledEdit => "dropzone filled",
        ZoneStatus::FilledCorrect => "dropzone filled correct",
    }
}

/// Write a zone's rectangle into the element's inline style.
pub fn apply_zone_geometry(el: &HtmlElement, rect: &Rect) -> Result<(), JsValue> {
    let style = el.style();
    style.set_property("left", &format!("{}px", rect.x))?;
    style.set_property("top", &format!("{}px", rect.y))?;
    style.set_property("width", &format!("{}px", rect.w))?;
    style.set_property("height", &format!("{}px", rect.h))?;
    Ok(())
}

/// Build a dropzone: delete control plus the eight directional resize
/// handles. Handle and delete visibility per mode is CSS-driven through
/// the `play-mode` class on `<body>`.
pub fn dropzone_element(document: &Document, zone: &Dropzone) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = document.create_element("div")?.dyn_into()?;
    el.set_class_name(zone_class(zone));
    el.set_attribute("data-zone-id", &zone.id.0.to_string())?;
    apply_zone_geometry(&el, &zone.rect)?;
    el.append_child(&delete_button(document)?.into())?;
    for handle in Handle::ALL {
        let r = document.create_element("div")?;
        r.set_class_name(&format!("dropzone-resizer resizer-{}", handle.direction()));
        r.set_attribute("data-direction", handle.direction())?;
        el.append_child(&r)?;
    }
    Ok(el)
}

/// Rebuild the editing grid from the pressed dots.
pub fn render_grid(s: &State) -> Result<(), JsValue> {
    s.grid.set_inner_html("");
    for idx in CELL_DOT_ORDER {
        let dot = s.document.create_element("div")?;
        dot.set_class_name(if s.session.active_dots().contains(idx) {
            "dot active"
        } else {
            "dot"
        });
        dot.set_attribute("data-id", &idx.to_string())?;
        s.grid.append_child(&dot)?;
    }
    Ok(())
}

/// Rebuild the in-progress word strip.
pub fn render_word(s: &State) -> Result<(), JsValue> {
    s.word_strip.set_inner_html("");
    for l in s.session.word() {
        s.word_strip
            .append_child(&letter_element(&s.document, l.letter, &l.dots)?.into())?;
    }
    Ok(())
}

/// Rebuild the staging tray from the unplaced cards.
pub fn render_tray(s: &State) -> Result<(), JsValue> {
    s.tray.set_inner_html("");
    for card in s.session.tray_cards() {
        s.tray.append_child(&card_element(&s.document, card)?.into())?;
    }
    Ok(())
}

/// Rebuild the board: every dropzone with its occupant nested inside.
/// The board's background image lives in CSS and is untouched.
pub fn render_board(s: &State) -> Result<(), JsValue> {
    s.board.set_inner_html("");
    for zone in s.session.zones() {
        let el = dropzone_element(&s.document, zone)?;
        if let Some(occupant) = zone.occupant.and_then(|id| s.session.card(id)) {
            el.append_child(&card_element(&s.document, occupant)?.into())?;
        }
        s.board.append_child(&el)?;
    }
    Ok(())
}

pub fn render_all(s: &State) -> Result<(), JsValue> {
    render_grid(s)?;
    render_word(s)?;
    render_tray(s)?;
    render_board(s)
}
