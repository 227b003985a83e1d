use super::*;
use chess_rules::{Color, Game, Position};
use std::panic::{catch_unwind, AssertUnwindSafe};

#[test]
fn dropping_the_guard_takes_the_move_back() {
    let mut game = Game::new();
    let e4 = Move::new(12, 28);
    {
        let guard = MoveGuard::apply(&mut game, e4);
        assert_eq!(guard.side_to_move(), Color::Black);
        assert!(guard.piece_at(28).is_some());
        assert_eq!(guard.played(), e4);
    }
    assert_eq!(game.position(), &Position::startpos());
    assert_eq!(game.ply_count(), 0);
}

#[test]
fn nested_guards_unwind_in_order() {
    let mut game = Game::new();
    {
        let mut outer = MoveGuard::apply(&mut game, Move::new(12, 28));
        let inner = MoveGuard::apply(&mut *outer, Move::new(52, 36));
        assert_eq!(inner.ply_count(), 2);
    }
    assert_eq!(game.position(), &Position::startpos());
}

#[test]
fn panic_inside_a_guarded_scope_still_undoes() {
    let mut game = Game::new();
    let result = catch_unwind(AssertUnwindSafe(|| {
        let _guard = MoveGuard::apply(&mut game, Move::new(6, 21));
        panic!("subtree blew up");
    }));
    assert!(result.is_err());
    assert_eq!(game.position(), &Position::startpos());
}
