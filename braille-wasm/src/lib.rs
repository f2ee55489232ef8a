//! Browser front end for the Braille word-matching board.
//!
//! Renders the models of `braille-core` into the host page and routes raw
//! pointer, drag and click events back into the session. The host page
//! provides the skeleton elements by id: `braille-grid`, `current-word`,
//! `cards-container`, `game-area`, `message-box`, the buttons
//! `addLetterBtn`, `clearWordBtn`, `createCardBtn`, `createDropzoneBtn`,
//! `uploadImageBtn` (with its hidden `background-image-input`),
//! `playModeBtn`, `editModeBtn`, `teacherAccessBtn`, and optionally a
//! `langSel` language selector. Teacher-only controls and zone handles
//! are hidden in play mode through the `play-mode` class this module
//! keeps on `<body>`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DragEvent, HtmlElement, MouseEvent};

use braille_core::{CardId, DropOutcome, Handle, Mode, Session, ZoneId};

mod access;
mod constants;
mod dom;
mod message;
mod state;
mod upload;
mod utils;

use message::{Severity, report_error, show_message};
use state::State;
use utils::{board_coords, closest_from_target, id_attr};

fn get_el(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} is not an HtmlElement")))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let state = Rc::new(RefCell::new(State {
        grid: get_el(&document, "braille-grid")?,
        word_strip: get_el(&document, "current-word")?,
        tray: get_el(&document, "cards-container")?,
        board: get_el(&document, "game-area")?,
        message_box: get_el(&document, "message-box")?,
        window,
        document,
        session: Session::new(),
        lang: "es".to_string(),
    }));

    attach_ui(state.clone())?;
    {
        let mut s = state.borrow_mut();
        switch_mode(&mut s, Mode::Play);
        dom::render_all(&s)?;
    }
    Ok(())
}

fn apply_mode_visuals(s: &State) {
    if let Some(body) = s.document.body() {
        let _ = match s.session.mode() {
            Mode::Edit => body.class_list().remove_1("play-mode"),
            Mode::Play => body.class_list().add_1("play-mode"),
        };
    }
}

/// Switch modes, refresh the affected visuals and announce the change.
fn switch_mode(s: &mut State, mode: Mode) {
    s.session.set_mode(mode);
    apply_mode_visuals(s);
    let _ = dom::render_board(s);
    match mode {
        Mode::Edit => show_message(s, Severity::Info, "Edit mode enabled", "Modo Edición activado"),
        Mode::Play => show_message(s, Severity::Info, "Play mode enabled", "Modo Juego activado"),
    }
}

/// Wire a click handler to a button by id; missing buttons are skipped so
/// hosts can omit affordances they do not use.
fn wire_click<F>(
    state: &Rc<RefCell<State>>,
    id: &str,
    teacher_only: bool,
    mut f: F,
) -> Result<(), JsValue>
where
    F: FnMut(&mut State) + 'static,
{
    let doc = state.borrow().document.clone();
    let Some(btn) = doc.get_element_by_id(id) else {
        return Ok(());
    };
    let btn: HtmlElement = btn
        .dyn_into()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an element")))?;
    if teacher_only {
        btn.class_list().add_1("teacher-only")?;
    }
    let st = state.clone();
    let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let mut s = st.borrow_mut();
        f(&mut s);
    }));
    btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
    onclick.forget();
    Ok(())
}

/// Attach drag-source handlers to a container holding cards; used for the
/// tray and the board so cards stay draggable after being placed.
fn wire_drag_sources(state: &Rc<RefCell<State>>, container: &HtmlElement) -> Result<(), JsValue> {
    {
        let st = state.clone();
        let ondragstart = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
            let Some(card_el) = closest_from_target(&e, ".card") else {
                return;
            };
            let Some(id) = id_attr(&card_el, "data-card-id") else {
                return;
            };
            let mut s = st.borrow_mut();
            if !s.session.begin_card_drag(CardId(id)) {
                // locked card or busy gesture: refuse the native drag
                e.prevent_default();
                return;
            }
            if let Some(dt) = e.data_transfer() {
                dt.set_effect_allowed("move");
                if let Some(card) = s.session.card(CardId(id)) {
                    let _ = dt.set_data("text/plain", &card.word);
                }
            }
            let _ = card_el.class_list().add_1("dragging");
        }));
        container
            .add_event_listener_with_callback("dragstart", ondragstart.as_ref().unchecked_ref())?;
        ondragstart.forget();
    }
    {
        let st = state.clone();
        let ondragend = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
            st.borrow_mut().session.end_gesture();
            if let Some(card_el) = closest_from_target(&e, ".card") {
                let _ = card_el.class_list().remove_1("dragging");
            }
        }));
        container
            .add_event_listener_with_callback("dragend", ondragend.as_ref().unchecked_ref())?;
        ondragend.forget();
    }
    Ok(())
}

/// Delete-control clicks inside a container; cards are checked before
/// zones because an occupant card nests inside its zone.
fn wire_delete_clicks(state: &Rc<RefCell<State>>, container: &HtmlElement) -> Result<(), JsValue> {
    let st = state.clone();
    let onclick = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
        let Some(del) = closest_from_target(&e, ".delete-btn") else {
            return;
        };
        let mut s = st.borrow_mut();
        if let Some(card_el) = del.closest(".card").ok().flatten() {
            if let Some(id) = id_attr(&card_el, "data-card-id") {
                s.session.delete_card(CardId(id));
                let _ = dom::render_tray(&s);
                let _ = dom::render_board(&s);
            }
        } else if let Some(zone_el) = del.closest(".dropzone").ok().flatten() {
            if let Some(id) = id_attr(&zone_el, "data-zone-id") {
                match s.session.delete_dropzone(ZoneId(id)) {
                    Ok(_released) => {
                        let _ = dom::render_tray(&s);
                        let _ = dom::render_board(&s);
                    }
                    Err(err) => report_error(&s, &err),
                }
            }
        }
    }));
    container.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
    onclick.forget();
    Ok(())
}

fn attach_ui(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let (document, board, tray, grid) = {
        let s = state.borrow();
        (
            s.document.clone(),
            s.board.clone(),
            s.tray.clone(),
            s.grid.clone(),
        )
    };

    upload::attach_background_input(state.clone())?;

    // Editing grid: toggle dots (edit-only; play mode gets the error toast)
    {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let Some(dot) = closest_from_target(&e, ".dot") else {
                return;
            };
            let Some(idx) = dot.get_attribute("data-id").and_then(|v| v.parse::<u8>().ok())
            else {
                return;
            };
            let mut s = st.borrow_mut();
            match s.session.toggle_dot(idx) {
                Ok(_) => {
                    let _ = dom::render_grid(&s);
                }
                Err(err) => report_error(&s, &err),
            }
        }));
        grid.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    wire_click(&state, "addLetterBtn", true, |s| {
        match s.session.compose_letter() {
            Ok(letter) => {
                let _ = dom::render_grid(s);
                let _ = dom::render_word(s);
                show_message(
                    s,
                    Severity::Info,
                    &format!("Letter added: {}", letter.letter),
                    &format!("Letra añadida: {}", letter.letter),
                );
            }
            Err(err) => report_error(s, &err),
        }
    })?;

    wire_click(&state, "clearWordBtn", true, |s| {
        s.session.clear_word();
        let _ = dom::render_grid(s);
        let _ = dom::render_word(s);
    })?;

    wire_click(&state, "createCardBtn", true, |s| {
        match s.session.build_card() {
            Ok(id) => {
                let word = s
                    .session
                    .card(id)
                    .map(|c| c.word.clone())
                    .unwrap_or_default();
                let _ = dom::render_grid(s);
                let _ = dom::render_word(s);
                let _ = dom::render_tray(s);
                show_message(
                    s,
                    Severity::Success,
                    &format!("Card created for: {word}"),
                    &format!("Tarjeta creada para: {word}"),
                );
            }
            Err(err) => report_error(s, &err),
        }
    })?;

    wire_click(&state, "createDropzoneBtn", true, |s| {
        let (x, y) = braille_core::constants::DEFAULT_ZONE_POS;
        match s.session.create_dropzone(x, y) {
            Ok(_) => {
                let _ = dom::render_board(s);
                show_message(
                    s,
                    Severity::Info,
                    "Dropzone created",
                    "Zona de arrastre creada",
                );
            }
            Err(err) => report_error(s, &err),
        }
    })?;

    wire_click(&state, "editModeBtn", true, |s| switch_mode(s, Mode::Edit))?;
    wire_click(&state, "playModeBtn", true, |s| switch_mode(s, Mode::Play))?;

    wire_click(&state, "teacherAccessBtn", false, |s| {
        let prompt = if s.lang == "es" {
            "Introduce la contraseña para el acceso de maestras:"
        } else {
            "Enter the teacher access password:"
        };
        let submitted = s
            .window
            .prompt_with_message(prompt)
            .ok()
            .flatten()
            .unwrap_or_default();
        let gate = access::configured_gate(&s.window);
        match s.session.unlock_edit(&gate, &submitted) {
            Ok(()) => {
                apply_mode_visuals(s);
                let _ = dom::render_board(s);
                show_message(
                    s,
                    Severity::Success,
                    "Teacher access granted",
                    "Acceso de maestras concedido",
                );
            }
            Err(err) => report_error(s, &err),
        }
    })?;

    // Optional language selector, mirroring the message catalog
    if let Some(sel) = document.get_element_by_id("langSel") {
        let sel: HtmlElement = sel
            .dyn_into()
            .map_err(|_| JsValue::from_str("#langSel is not an element"))?;
        let st = state.clone();
        let onchange = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            if let Some(input) = s.document.get_element_by_id("langSel")
                && let Ok(sel) = input.dyn_into::<web_sys::HtmlSelectElement>()
            {
                let v = sel.value();
                s.lang = if v.to_lowercase().starts_with("es") {
                    "es".to_string()
                } else {
                    "en".to_string()
                };
            }
        }));
        sel.set_onchange(Some(onchange.as_ref().unchecked_ref()));
        onchange.forget();
    }

    // Cards start native drags from the tray or from inside a zone
    wire_drag_sources(&state, &tray)?;
    wire_drag_sources(&state, &board)?;
    wire_delete_clicks(&state, &tray)?;
    wire_delete_clicks(&state, &board)?;

    // Board: accept card drops on zones
    {
        let ondragover = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
            e.prevent_default();
            if closest_from_target(&e, ".dropzone").is_some()
                && let Some(dt) = e.data_transfer()
            {
                dt.set_drop_effect("move");
            }
        }));
        board.add_event_listener_with_callback("dragover", ondragover.as_ref().unchecked_ref())?;
        ondragover.forget();
    }
    {
        let st = state.clone();
        let ondrop = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
            e.prevent_default();
            let Some(zone_el) = closest_from_target(&e, ".dropzone") else {
                return;
            };
            let Some(id) = id_attr(&zone_el, "data-zone-id") else {
                return;
            };
            let mut s = st.borrow_mut();
            let outcome = s.session.drop_dragged_card(ZoneId(id));
            // the source element may be re-rendered away before its
            // dragend fires, so end the gesture here as well
            s.session.end_gesture();
            match outcome {
                Ok(Some(DropOutcome::Assigned { word })) => {
                    let _ = dom::render_tray(&s);
                    let _ = dom::render_board(&s);
                    show_message(
                        &s,
                        Severity::Info,
                        &format!("Dropzone assigned to: \"{word}\""),
                        &format!("Zona de arrastre asignada a: \"{word}\""),
                    );
                }
                Ok(Some(DropOutcome::Matched { .. })) => {
                    let _ = dom::render_tray(&s);
                    let _ = dom::render_board(&s);
                    show_message(&s, Severity::Success, "Correct!", "¡Correcto!");
                }
                Ok(None) => {}
                Err(err) => report_error(&s, &err),
            }
        }));
        board.add_event_listener_with_callback("drop", ondrop.as_ref().unchecked_ref())?;
        ondrop.forget();
    }

    // Board: zone move/resize gestures (edit mode)
    {
        let st = state.clone();
        let onmousedown = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut s = st.borrow_mut();
            if let Some(resizer) = closest_from_target(&e, ".dropzone-resizer") {
                let Some(handle) = resizer
                    .get_attribute("data-direction")
                    .and_then(|d| Handle::from_direction(&d))
                else {
                    return;
                };
                let Some(zone_el) = resizer.closest(".dropzone").ok().flatten() else {
                    return;
                };
                let Some(id) = id_attr(&zone_el, "data-zone-id") else {
                    return;
                };
                let (px, py) = board_coords(&e, &s.board);
                if let Err(err) = s.session.begin_zone_resize(ZoneId(id), handle, px, py) {
                    report_error(&s, &err);
                }
                return;
            }
            if closest_from_target(&e, ".delete-btn").is_some()
                || closest_from_target(&e, ".card").is_some()
            {
                // deletes are click-handled; card presses belong to the
                // native drag protocol
                return;
            }
            if let Some(zone_el) = closest_from_target(&e, ".dropzone") {
                let Some(id) = id_attr(&zone_el, "data-zone-id") else {
                    return;
                };
                let (px, py) = board_coords(&e, &s.board);
                if let Err(err) = s.session.begin_zone_drag(ZoneId(id), px, py) {
                    report_error(&s, &err);
                }
            }
        }));
        board.add_event_listener_with_callback("mousedown", onmousedown.as_ref().unchecked_ref())?;
        onmousedown.forget();
    }

    // Document-wide pointer tracking while a zone gesture is active
    {
        let st = state.clone();
        let onmousemove = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut s = st.borrow_mut();
            if s.session.gesture().is_idle() {
                return;
            }
            let (px, py) = board_coords(&e, &s.board);
            if let Some(zone_id) = s.session.pointer_moved(px, py)
                && let Some(zone) = s.session.zone(zone_id)
                && let Ok(Some(el)) = s
                    .board
                    .query_selector(&format!("[data-zone-id=\"{}\"]", zone_id.0))
                && let Ok(el) = el.dyn_into::<HtmlElement>()
            {
                let _ = dom::apply_zone_geometry(&el, &zone.rect);
            }
        }));
        document
            .add_event_listener_with_callback("mousemove", onmousemove.as_ref().unchecked_ref())?;
        onmousemove.forget();
    }
    {
        let st = state.clone();
        let onmouseup = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_e: MouseEvent| {
            st.borrow_mut().session.end_gesture();
        }));
        document.add_event_listener_with_callback("mouseup", onmouseup.as_ref().unchecked_ref())?;
        onmouseup.forget();
    }

    Ok(())
}
