// Exhaustive checks over all short navigation sequences.

use std::cell::RefCell;
use std::rc::Rc;

use itertools::Itertools;
use strum::IntoEnumIterator;

use chess_replay::test_util::sample_game_record;
use chess_replay::{NavigationCommand, ReplayController};


const MAX_SEQUENCE_LEN: usize = 6;

fn all_sequences() -> impl Iterator<Item = Vec<NavigationCommand>> {
    (1..=MAX_SEQUENCE_LEN).flat_map(|len| {
        std::iter::repeat_n(NavigationCommand::iter(), len).multi_cartesian_product()
    })
}

fn controller_with_counter(num_moves: usize) -> (ReplayController, Rc<RefCell<Vec<usize>>>) {
    let mut controller = ReplayController::new(sample_game_record(num_moves)).unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));
    controller.subscribe({
        let seen = Rc::clone(&seen);
        move |update| seen.borrow_mut().push(update.index)
    });
    seen.borrow_mut().clear();
    (controller, seen)
}

#[test]
fn index_stays_in_range_and_notifications_match_changes() {
    for num_moves in [0, 1, 2, 5] {
        for sequence in all_sequences() {
            let (mut controller, seen) = controller_with_counter(num_moves);
            let mut expected = Vec::new();
            for &command in &sequence {
                let before = controller.index();
                let changed = controller.apply(command);
                let after = controller.index();
                assert!(after <= num_moves, "{sequence:?} left index {after} of {num_moves}");
                assert_eq!(changed, before != after, "{sequence:?}");
                if changed {
                    expected.push(after);
                }
            }
            assert_eq!(*seen.borrow(), expected, "{sequence:?}");
        }
    }
}

#[test]
fn bounds_are_sticky() {
    for num_moves in [0, 1, 7] {
        let (mut controller, seen) = controller_with_counter(num_moves);
        controller.to_end();
        let notifications = seen.borrow().len();
        for _ in 0..10 {
            assert!(!controller.next());
        }
        assert_eq!(controller.index(), num_moves);
        assert_eq!(seen.borrow().len(), notifications);

        controller.to_start();
        let notifications = seen.borrow().len();
        for _ in 0..10 {
            assert!(!controller.previous());
        }
        assert_eq!(controller.index(), 0);
        assert_eq!(seen.borrow().len(), notifications);
    }
}

#[test]
fn every_observer_sees_every_change_in_order() {
    let mut controller = ReplayController::new(sample_game_record(4)).unwrap();
    let observers = (0..3)
        .map(|_| {
            let seen = Rc::new(RefCell::new(Vec::new()));
            controller.subscribe({
                let seen = Rc::clone(&seen);
                move |update| seen.borrow_mut().push(update.index)
            });
            seen
        })
        .collect_vec();
    controller.next();
    controller.next();
    controller.next();
    controller.to_start();
    controller.to_start();
    controller.to_end();
    for seen in observers {
        assert_eq!(*seen.borrow(), vec![0, 1, 2, 3, 0, 4]);
    }
}
