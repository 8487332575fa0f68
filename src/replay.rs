use std::cmp;

use strum::{Display, EnumIter, EnumString};

use crate::error::ReplayError;
use crate::internal_error_message;
use crate::record::{GameRecord, Move, Position};


// What observers are told after each cursor change.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ReplayUpdate<'a> {
    pub index: usize,
    pub position: &'a Position,
    pub last_move: Option<&'a Move>,
    pub num_moves: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum NavigationCommand {
    ToStart,
    Previous,
    Next,
    ToEnd,
}

#[derive(Default, Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub struct SubscriptionId(usize);

type Observer = Box<dyn FnMut(&ReplayUpdate<'_>)>;

// Cursor over a decoded game.
//
// Invariant: `index < record.num_positions()`. Navigation past either end is clamped and does
// nothing, in particular it doesn't notify anybody. Each actual change is delivered to every
// observer exactly once, in registration order.
pub struct ReplayController {
    record: GameRecord,
    index: usize,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription_id: SubscriptionId,
}

impl std::fmt::Debug for ReplayController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplayController")
            .field("record", &self.record)
            .field("index", &self.index)
            .field("num_observers", &self.observers.len())
            .field("next_subscription_id", &self.next_subscription_id)
            .finish()
    }
}

impl ReplayController {
    pub fn new(record: GameRecord) -> Result<Self, ReplayError> {
        if record.num_positions() == 0 {
            return Err(ReplayError::InvalidRecord);
        }
        Ok(ReplayController {
            record,
            index: 0,
            observers: Vec::new(),
            next_subscription_id: SubscriptionId::default(),
        })
    }

    pub fn record(&self) -> &GameRecord { &self.record }
    pub fn index(&self) -> usize { self.index }
    pub fn num_moves(&self) -> usize { self.record.num_moves() }
    pub fn last_index(&self) -> usize { self.record.num_positions() - 1 }

    pub fn position(&self) -> &Position {
        match self.record.position(self.index) {
            Some(position) => position,
            None => {
                panic!("{}", internal_error_message!("replay index {} out of range", self.index))
            }
        }
    }

    pub fn current_update(&self) -> ReplayUpdate<'_> {
        ReplayUpdate {
            index: self.index,
            position: self.position(),
            last_move: self.record.move_leading_to(self.index),
            num_moves: self.record.num_moves(),
        }
    }

    // Registers an observer and immediately calls it with the current state, so that a freshly
    // attached view doesn't need a separate initialization path.
    pub fn subscribe(
        &mut self, observer: impl FnMut(&ReplayUpdate<'_>) + 'static,
    ) -> SubscriptionId {
        let subscription_id = self.next_subscription_id;
        self.next_subscription_id.0 += 1;
        let mut observer: Observer = Box::new(observer);
        observer(&self.current_update());
        self.observers.push((subscription_id, observer));
        subscription_id
    }

    pub fn unsubscribe(&mut self, subscription_id: SubscriptionId) {
        self.observers.retain(|(id, _)| *id != subscription_id);
    }

    // All navigation functions return whether the cursor moved.
    pub fn to_start(&mut self) -> bool { self.set_index(0) }
    pub fn to_end(&mut self) -> bool { self.set_index(self.last_index()) }
    pub fn next(&mut self) -> bool { self.set_index(cmp::min(self.index + 1, self.last_index())) }
    pub fn previous(&mut self) -> bool { self.set_index(self.index.saturating_sub(1)) }
    pub fn go_to(&mut self, index: usize) -> bool {
        self.set_index(cmp::min(index, self.last_index()))
    }

    pub fn apply(&mut self, command: NavigationCommand) -> bool {
        match command {
            NavigationCommand::ToStart => self.to_start(),
            NavigationCommand::Previous => self.previous(),
            NavigationCommand::Next => self.next(),
            NavigationCommand::ToEnd => self.to_end(),
        }
    }

    fn set_index(&mut self, index: usize) -> bool {
        debug_assert!(index <= self.last_index());
        if index == self.index {
            return false;
        }
        self.index = index;
        let update = ReplayUpdate {
            index,
            position: &self.record.positions()[index],
            last_move: self.record.move_leading_to(index),
            num_moves: self.record.num_moves(),
        };
        for (_, observer) in self.observers.iter_mut() {
            observer(&update);
        }
        true
    }
}


#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_util::sample_game_record;

    fn recording(controller: &mut ReplayController) -> (SubscriptionId, Rc<RefCell<Vec<usize>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let id = controller.subscribe({
            let seen = Rc::clone(&seen);
            move |update| seen.borrow_mut().push(update.index)
        });
        (id, seen)
    }

    #[test]
    fn empty_record_is_rejected() {
        let record = GameRecord::new_unchecked(vec![], vec![]);
        assert!(matches!(ReplayController::new(record), Err(ReplayError::InvalidRecord)));
    }

    #[test]
    fn zero_move_game_is_fine() {
        let mut controller = ReplayController::new(GameRecord::placeholder()).unwrap();
        let (_, seen) = recording(&mut controller);
        assert!(!controller.next());
        assert!(!controller.to_end());
        assert!(!controller.previous());
        assert_eq!(controller.position(), &Position::starting());
        assert_eq!(*seen.borrow(), vec![0]);
    }

    #[test]
    fn navigation_clamps_and_notifies_only_on_change() {
        let mut controller = ReplayController::new(sample_game_record(2)).unwrap();
        let (_, seen) = recording(&mut controller);
        assert!(!controller.previous());
        assert!(controller.next());
        assert!(controller.next());
        assert!(!controller.next());
        assert!(!controller.next());
        assert!(controller.to_start());
        assert!(!controller.to_start());
        assert_eq!(*seen.borrow(), vec![0, 1, 2, 0]);
    }

    #[test]
    fn go_to_clamps() {
        let mut controller = ReplayController::new(sample_game_record(4)).unwrap();
        assert!(controller.go_to(2));
        assert_eq!(controller.index(), 2);
        assert!(controller.go_to(100));
        assert_eq!(controller.index(), 4);
        assert!(!controller.go_to(4));
    }

    #[test]
    fn update_carries_position_and_last_move() {
        let mut controller = ReplayController::new(sample_game_record(3)).unwrap();
        let updates = Rc::new(RefCell::new(Vec::new()));
        controller.subscribe({
            let updates = Rc::clone(&updates);
            move |update| {
                updates.borrow_mut().push((
                    update.position.to_string(),
                    update.last_move.map(|m| m.to_string()),
                    update.num_moves,
                ))
            }
        });
        controller.next();
        assert_eq!(*updates.borrow(), vec![
            ("fen-0".to_owned(), None, 3),
            ("fen-1".to_owned(), Some("move-1".to_owned()), 3),
        ]);
    }

    #[test]
    fn unsubscribed_observer_is_not_called() {
        let mut controller = ReplayController::new(sample_game_record(3)).unwrap();
        let (first_id, first) = recording(&mut controller);
        let (_, second) = recording(&mut controller);
        controller.next();
        controller.unsubscribe(first_id);
        controller.next();
        assert_eq!(*first.borrow(), vec![0, 1]);
        assert_eq!(*second.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn commands() {
        let mut controller = ReplayController::new(sample_game_record(3)).unwrap();
        assert!(controller.apply("to-end".parse().unwrap()));
        assert_eq!(controller.index(), 3);
        assert!(controller.apply(NavigationCommand::Previous));
        assert_eq!(controller.index(), 2);
        assert_eq!(NavigationCommand::ToStart.to_string(), "to-start");
        assert!("sideways".parse::<NavigationCommand>().is_err());
    }
}
