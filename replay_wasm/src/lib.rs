// Browser frontend. The page creates the board widget, then calls `open_replay` and wires the
// navigation buttons to the methods of the returned `WebReplay`.

extern crate console_error_panic_hook;
extern crate wasm_bindgen;

extern crate chess_replay;

mod js_decoder;
mod web_display;
mod web_document;
pub mod web_error_handling;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use chess_replay::{
    DecodeAdapter, NavigationCommand, ReplayConfig, ReplayController, start_replay,
};

use crate::js_decoder::JsDecodingService;
use crate::web_display::{BoardWidget, WebDisplay, WebMessages};
use crate::web_document::{web_document, web_window};
use crate::web_error_handling::JsResult;


const PROGRESS_ELEMENT_ID: &str = "progress";
const OUTPUT_ELEMENT_ID: &str = "output";
const MAIN_ELEMENT_ID: &str = "main";
const NO_DECODER_WARNING_ELEMENT_ID: &str = "no-wasm-warning";

#[wasm_bindgen]
pub struct WebReplay {
    controller: ReplayController,
}

#[wasm_bindgen]
impl WebReplay {
    pub fn to_start(&mut self) -> bool { self.controller.to_start() }
    pub fn previous(&mut self) -> bool { self.controller.previous() }
    pub fn next(&mut self) -> bool { self.controller.next() }
    pub fn to_end(&mut self) -> bool { self.controller.to_end() }
    pub fn go_to(&mut self, index: usize) -> bool { self.controller.go_to(index) }

    // Accepts "to-start", "previous", "next", "to-end", e.g. from a button's data attribute.
    pub fn navigate(&mut self, command: &str) -> JsResult<bool> {
        let command = command
            .parse::<NavigationCommand>()
            .map_err(|_| rust_error!("Unknown navigation command: {}", command))?;
        Ok(self.controller.apply(command))
    }

    pub fn index(&self) -> usize { self.controller.index() }
    pub fn num_moves(&self) -> usize { self.controller.num_moves() }
    pub fn current_fen(&self) -> String { self.controller.position().to_string() }
}

// Decodes the game from the page URL (`game` query parameter or the built-in default) and shows
// its starting position. `location_search` is `window.location.search`.
#[wasm_bindgen]
pub async fn open_replay(board: BoardWidget, location_search: String) -> JsResult<WebReplay> {
    let document = web_document()?;
    let progress = document.get_existing_element_by_id(PROGRESS_ELEMENT_ID)?;
    let output = document.get_existing_element_by_id(OUTPUT_ELEMENT_ID)?;
    let adapter = DecodeAdapter::new(Rc::new(JsDecodingService));

    if let Err(err) = adapter.init_gate().wait().await {
        let text = format!("Couldn't initialise decoder: {err}");
        web_window()?.alert_with_message(&text)?;
        return Err(rust_error!("{}", text));
    }
    // The page warns about missing decoder support by default. Getting here means it works.
    document.set_displayed(NO_DECODER_WARNING_ELEMENT_ID, false)?;
    document.set_displayed(MAIN_ELEMENT_ID, true)?;

    let display = Rc::new(RefCell::new(WebDisplay::new(board, progress)));
    let mut messages = WebMessages::new(web_document()?, output);
    let config = ReplayConfig::from_query(&location_search);
    let controller = start_replay(&adapter, &config, display, &mut messages)
        .await
        .map_err(|err| rust_error!("{}", err))?;
    Ok(WebReplay { controller })
}
