//! Property tests over random move sequences.

use grid_tictactoe::{Cell, Coord, GameEngine, GameStatus, Mark, rules};
use proptest::prelude::*;

fn moves() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((-2i64..8, -2i64..8), 0..64)
}

proptest! {
    #[test]
    fn rejected_moves_leave_state_unchanged(size in 0usize..6, plays in moves()) {
        let mut engine = GameEngine::new(size);
        for (row, column) in plays {
            let before = engine.state().clone();
            if engine.play(row, column).is_err() {
                prop_assert_eq!(engine.state(), &before);
            }
        }
    }

    #[test]
    fn accepted_moves_follow_the_rules(size in 0usize..6, plays in moves()) {
        let mut engine = GameEngine::new(size);
        for (row, column) in plays {
            let before = engine.state().clone();
            let Ok(status) = engine.play(row, column) else {
                continue;
            };
            let coord = Coord::new(row as usize, column as usize);
            let after = engine.state();

            prop_assert_eq!(before.status(), GameStatus::InProgress);
            prop_assert_eq!(before.board().get(coord), Some(Cell::Empty));
            prop_assert_eq!(
                after.board().get(coord),
                Some(Cell::Occupied(before.current_mark()))
            );
            prop_assert_eq!(after.board().empty_count() + 1, before.board().empty_count());

            if status.is_terminal() {
                prop_assert_eq!(after.current_mark(), before.current_mark());
            } else {
                prop_assert_eq!(after.current_mark(), before.current_mark().opponent());
            }

            // Earlier marks never change.
            for (old, new) in before.board().cells().iter().zip(after.board().cells()) {
                if *old != Cell::Empty {
                    prop_assert_eq!(old, new);
                }
            }
        }
    }

    #[test]
    fn status_matches_board(size in 0usize..6, plays in moves()) {
        let mut engine = GameEngine::new(size);
        for (row, column) in plays {
            let _ = engine.play(row, column);
        }
        let snapshot = engine.snapshot();
        match *snapshot.status() {
            GameStatus::WonBy(mark) => prop_assert_eq!(*snapshot.winner(), Some(mark)),
            GameStatus::Tie => {
                prop_assert!(rules::is_tie(snapshot.board()));
                prop_assert_eq!(*snapshot.winner(), None);
            }
            GameStatus::InProgress => {
                prop_assert_eq!(*snapshot.winner(), None);
                if size > 0 {
                    prop_assert!(snapshot.board().empty_count() > 0);
                }
            }
        }
    }

    #[test]
    fn reset_restores_fresh_game(size in 0usize..6, plays in moves()) {
        let mut engine = GameEngine::new(size);
        for (row, column) in plays {
            let _ = engine.play(row, column);
        }
        engine.reset();
        let snapshot = engine.snapshot();
        prop_assert_eq!(snapshot.size(), size);
        prop_assert_eq!(*snapshot.current_mark(), Mark::X);
        prop_assert_eq!(*snapshot.status(), GameStatus::InProgress);
        prop_assert_eq!(snapshot.board().empty_count(), size * size);
    }
}
