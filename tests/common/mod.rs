// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use std::cell::RefCell;
use std::rc::Rc;

use chess_replay::display::progress_text;
use chess_replay::{DisplaySink, MessageLog, Position};


// Remembers everything it was asked to show.
#[derive(Default, Debug)]
pub struct RecordingDisplay {
    pub positions: Vec<String>,
    pub progress: Vec<String>,
}

impl RecordingDisplay {
    #[allow(dead_code)]
    pub fn shared() -> Rc<RefCell<RecordingDisplay>> { Rc::new(RefCell::new(Self::default())) }

    #[allow(dead_code)]
    pub fn current_position(&self) -> Option<&str> { self.positions.last().map(|p| p.as_str()) }

    #[allow(dead_code)]
    pub fn current_progress(&self) -> Option<&str> { self.progress.last().map(|p| p.as_str()) }
}

impl DisplaySink for RecordingDisplay {
    fn set_position(&mut self, fen: &Position) { self.positions.push(fen.to_string()); }
    fn set_progress(&mut self, played: usize, total: usize) {
        self.progress.push(progress_text(played, total));
    }
}

#[derive(Default, Debug)]
pub struct RecordingMessages {
    pub messages: Vec<String>,
}

impl MessageLog for RecordingMessages {
    fn show_message(&mut self, text: &str) { self.messages.push(text.to_owned()); }
}
