use wasm_bindgen::prelude::*;

use chess_replay::display::{DisplaySink, MessageLog, progress_label};
use chess_replay::Position;

use crate::web_document::WebDocument;


#[wasm_bindgen]
extern "C" {
    // Chessboard widget created by the page (e.g. cm-chessboard in view-only mode).
    pub type BoardWidget;

    #[wasm_bindgen(method, js_name = setPosition)]
    fn set_position(this: &BoardWidget, fen: &str);
}

pub struct WebDisplay {
    board: BoardWidget,
    progress: web_sys::Element,
}

impl WebDisplay {
    pub fn new(board: BoardWidget, progress: web_sys::Element) -> Self {
        WebDisplay { board, progress }
    }
}

impl DisplaySink for WebDisplay {
    fn set_position(&mut self, fen: &Position) { self.board.set_position(fen.as_str()); }
    fn set_progress(&mut self, played: usize, total: usize) {
        self.progress.set_text_content(Some(&progress_label(played, total)));
    }
}

// Message panel: newest message on top.
pub struct WebMessages {
    document: WebDocument,
    output: web_sys::Element,
}

impl WebMessages {
    pub fn new(document: WebDocument, output: web_sys::Element) -> Self {
        WebMessages { document, output }
    }
}

impl MessageLog for WebMessages {
    fn show_message(&mut self, text: &str) {
        web_sys::console::log_1(&JsValue::from_str(text));
        // Best effort: the message is already in the browser console.
        let shown = self.document.create_element("div").and_then(|entry| {
            entry.set_text_content(Some(text));
            self.output.prepend_with_node_1(&entry)
        });
        if let Err(err) = shown {
            web_sys::console::warn_2(&JsValue::from_str("Cannot show message:"), &err);
        }
    }
}
