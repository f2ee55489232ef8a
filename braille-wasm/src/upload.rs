use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, FileReader, HtmlElement, HtmlInputElement};

use crate::state::State;
use crate::utils::log;

// Wires the hidden file input that loads a board background image. The
// selected file is read as a data URL and applied as the board's CSS
// background; dropzone and card state are unaffected.
pub fn attach_background_input(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();
    let Some(input) = doc.get_element_by_id("background-image-input") else {
        return Ok(());
    };
    let input: HtmlInputElement = input
        .dyn_into()
        .map_err(|_| JsValue::from_str("background-image-input is not an <input>"))?;

    let st = state.clone();
    let input_for_closure = input.clone();
    let onchange = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_e: Event| {
        let Some(files) = input_for_closure.files() else {
            log("No file list on input");
            return;
        };
        let Some(file) = files.item(0) else {
            log("No file selected");
            return;
        };
        let Ok(reader) = FileReader::new() else {
            return;
        };
        let st2 = st.clone();
        // Clone the FileReader for use inside the onload closure
        let reader_for_closure = reader.clone();
        let onload = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_ev: Event| {
            let Ok(result) = reader_for_closure.result() else {
                return;
            };
            let Some(url) = result.as_string() else {
                log("Selected file did not produce a data URL");
                return;
            };
            let s = st2.borrow();
            let _ = s
                .board
                .style()
                .set_property("background-image", &format!("url({url})"));
            let _ = s.board.style().set_property("border", "none");
        }));
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        if let Err(e) = reader.read_as_data_url(&file) {
            log(&format!("Failed to read file: {:?}", e));
        }
        onload.forget();
    }));
    input.set_onchange(Some(onchange.as_ref().unchecked_ref()));
    onchange.forget();

    // The visible button forwards its click to the hidden input.
    if let Some(btn) = doc.get_element_by_id("uploadImageBtn") {
        let btn: HtmlElement = btn
            .dyn_into()
            .map_err(|_| JsValue::from_str("uploadImageBtn is not an element"))?;
        btn.class_list().add_1("teacher-only")?;
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            input.click();
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }
    Ok(())
}
