use super::*;
use crate::types::{coord_to_sq, PieceKind};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn game(fen: &str) -> Game {
    Game::from_fen(fen).expect("valid FEN")
}

#[test]
fn apply_then_undo_restores_position() {
    let mut g = Game::new();
    let before = g.position().clone();
    let before_moves = g.legal_moves();

    for mv in g.legal_moves() {
        g.apply(mv);
        assert_eq!(g.undo(), Some(mv));
        assert_eq!(g.position(), &before);
    }
    assert_eq!(g.legal_moves(), before_moves);
    assert_eq!(g.ply_count(), 0);
}

#[test]
fn undo_on_empty_history_returns_none() {
    let mut g = Game::new();
    assert_eq!(g.undo(), None);
    assert_eq!(g.position(), &Position::startpos());
}

#[test]
fn random_playouts_unwind_to_the_start() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..20 {
        let mut g = Game::new();
        let start = g.position().clone();
        let mut snapshots = Vec::new();

        for _ in 0..60 {
            let moves = g.legal_moves();
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            snapshots.push((g.position().clone(), g.is_game_over()));
            g.apply(mv);
        }

        while let Some((snapshot, over)) = snapshots.pop() {
            g.undo();
            assert_eq!(g.position(), &snapshot);
            assert_eq!(g.is_game_over(), over);
        }
        assert_eq!(g.position(), &start);
    }
}

#[test]
fn scholars_mate_is_checkmate() {
    let g = game("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    assert!(g.is_checkmate());
    assert!(!g.is_stalemate());
    assert!(g.is_game_over());
    assert_eq!(g.result(), "1-0");
}

#[test]
fn stalemate_is_not_checkmate() {
    let g = game("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(g.is_stalemate());
    assert!(!g.is_checkmate());
    assert!(g.legal_moves().is_empty());
    assert_eq!(g.result(), "1/2-1/2");
}

#[test]
fn seventy_five_move_rule() {
    assert!(game("8/8/8/4k3/8/4K3/8/R7 w - - 150 90").is_seventy_five_move_draw());
    assert!(!game("8/8/8/4k3/8/4K3/8/R7 w - - 149 90").is_seventy_five_move_draw());

    // Mate on the 150th ply is still mate.
    let mate = game("R5k1/5ppp/8/8/8/8/8/6K1 b - - 150 100");
    assert!(mate.is_checkmate());
    assert!(!mate.is_seventy_five_move_draw());
    assert_eq!(mate.result(), "1-0");

    // With no legal move the clock rule does not apply; it is plain stalemate.
    let stalemate = game("k7/2K5/1Q6/8/8/8/8/8 b - - 150 100");
    assert!(stalemate.is_stalemate());
    assert!(!stalemate.is_seventy_five_move_draw());
    assert_eq!(stalemate.result(), "1/2-1/2");
}

#[test]
fn start_position_is_not_over() {
    let g = Game::new();
    assert!(!g.is_game_over());
    assert_eq!(g.result(), "*");
    assert_eq!(g.side_to_move(), Color::White);
    assert_eq!(
        g.piece_at(coord_to_sq("e1").unwrap()),
        Some(Piece::new(Color::White, PieceKind::King))
    );
}

#[test]
fn history_records_moves_in_order() {
    let mut g = Game::new();
    let e4 = Move::new(12, 28);
    let e5 = Move::new(52, 36);
    g.apply(e4);
    g.apply(e5);
    assert_eq!(g.moves().collect::<Vec<_>>(), vec![e4, e5]);
    assert_eq!(g.side_to_move(), Color::White);

    g.reset();
    assert_eq!(g.ply_count(), 0);
    assert_eq!(g.fen(), crate::board::START_FEN);
}
