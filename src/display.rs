// Rendering collaborators. The core only knows these two capabilities; everything about
// how a board actually looks belongs to the frontends.

use std::cell::RefCell;
use std::rc::Rc;

use crate::record::Position;
use crate::replay::{ReplayController, SubscriptionId};


pub trait DisplaySink {
    // Must be idempotent: the same position may be set several times in a row.
    fn set_position(&mut self, fen: &Position);
    fn set_progress(&mut self, played: usize, total: usize);
}

// User-visible message panel. Newest messages are expected to be shown first.
pub trait MessageLog {
    fn show_message(&mut self, text: &str);
}

pub fn progress_text(played: usize, total: usize) -> String { format!("{played}/{total}") }

pub fn progress_label(played: usize, total: usize) -> String {
    format!("moves played: {}", progress_text(played, total))
}

// The sink immediately receives the current position and then follows every cursor change.
pub fn attach_display(
    controller: &mut ReplayController, sink: Rc<RefCell<dyn DisplaySink>>,
) -> SubscriptionId {
    controller.subscribe(move |update| {
        let mut sink = sink.borrow_mut();
        sink.set_position(update.position);
        sink.set_progress(update.index, update.num_moves);
    })
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_util::sample_game_record;

    #[derive(Default)]
    struct RecordingSink {
        positions: Vec<String>,
        progress: Vec<String>,
    }

    impl DisplaySink for RecordingSink {
        fn set_position(&mut self, fen: &Position) { self.positions.push(fen.to_string()); }
        fn set_progress(&mut self, played: usize, total: usize) {
            self.progress.push(progress_text(played, total));
        }
    }

    #[test]
    fn labels() {
        assert_eq!(progress_text(1, 3), "1/3");
        assert_eq!(progress_label(0, 9), "moves played: 0/9");
    }

    #[test]
    fn sink_follows_controller() {
        let mut controller = ReplayController::new(sample_game_record(2)).unwrap();
        let sink = Rc::new(RefCell::new(RecordingSink::default()));
        attach_display(&mut controller, sink.clone());
        controller.to_end();
        controller.next();
        controller.previous();
        let sink = sink.borrow();
        assert_eq!(sink.positions, vec!["fen-0", "fen-2", "fen-1"]);
        assert_eq!(sink.progress, vec!["0/2", "2/2", "1/2"]);
    }
}
