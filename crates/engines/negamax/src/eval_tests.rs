use super::*;
use chess_rules::{coord_to_sq, Game};

fn game(fen: &str) -> Game {
    Game::from_fen(fen).expect("valid FEN")
}

fn both_modes() -> [Evaluator; 2] {
    [
        Evaluator::new(MobilityMode::PerPiece),
        Evaluator::new(MobilityMode::BoardWide),
    ]
}

#[test]
fn start_position_is_balanced() {
    let g = Game::new();
    for ev in both_modes() {
        assert_eq!(ev.evaluate(&g), 0);
    }
    assert_eq!(material(&g), 0);
}

#[test]
fn center_pawn_scores_for_its_owner() {
    // After 1.e4, Black to move: the e4 pawn is worth +10 to White.
    let g = game("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    for ev in both_modes() {
        assert_eq!(ev.evaluate(&g), -10, "{:?}", ev.mobility());
    }
}

#[test]
fn material_is_side_relative() {
    let white_to_move = game("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
    let black_to_move = game("4k3/8/8/8/8/8/8/3QK3 b - - 0 1");
    let ev = Evaluator::default();

    assert_eq!(material(&white_to_move), 900);
    assert_eq!(ev.evaluate(&white_to_move), 900);
    assert_eq!(ev.evaluate(&black_to_move), -900);
}

#[test]
fn checkmate_is_bad_for_the_mated_side() {
    let g = game("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    for ev in both_modes() {
        assert_eq!(ev.evaluate(&g), -MATE_SCORE);
    }
}

#[test]
fn drawn_positions_score_zero() {
    let drawn = [
        // stalemate
        "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1",
        // king and bishop against king, either side to move
        "8/8/8/4k3/8/4KB2/8/8 w - - 0 1",
        "8/8/8/4k3/8/4KB2/8/8 b - - 0 1",
        // 75-move rule with a rook up
        "8/8/8/4k3/8/4K3/8/R7 w - - 150 90",
    ];
    for fen in drawn {
        for ev in both_modes() {
            assert_eq!(ev.evaluate(&game(fen)), 0, "{fen}");
        }
    }
}

#[test]
fn piece_mobility_counts_reachable_squares() {
    let g = game("4k3/8/8/8/8/8/3P4/1NB1K3 w - - 0 1");
    let knight = Piece::new(Color::White, PieceKind::Knight);
    let bishop = Piece::new(Color::White, PieceKind::Bishop);
    let b1 = coord_to_sq("b1").unwrap();
    let c1 = coord_to_sq("c1").unwrap();

    // a3 and c3; d2 holds a friendly pawn.
    assert_eq!(piece_mobility(&g, b1, knight), 2);
    // b2 and a3; d2 blocks the other diagonal.
    assert_eq!(piece_mobility(&g, c1, bishop), 2);

    // An enemy piece can be captured but not passed.
    let g = game("4k3/8/8/8/8/4p3/8/2B1K3 w - - 0 1");
    assert_eq!(piece_mobility(&g, c1, bishop), 4); // b2, a3, d2, e3
}

#[test]
fn board_wide_mobility_uses_the_global_move_count() {
    // Two knights and two bishops for White only.
    let g = game("4k3/pppppppp/8/8/8/8/8/1NB1KBN1 w - - 0 1");
    let legal = g.legal_moves().len() as Score;

    let board_wide = Evaluator::new(MobilityMode::BoardWide);
    assert_eq!(board_wide.positional(&g), 4 * legal / 10);

    let per_piece = Evaluator::new(MobilityMode::PerPiece);
    let own: Score = ["b1", "c1", "f1", "g1"]
        .iter()
        .map(|s| {
            let square = coord_to_sq(s).unwrap();
            piece_mobility(&g, square, g.piece_at(square).unwrap())
        })
        .sum();
    assert_eq!(per_piece.positional(&g), own / 10);
}

#[test]
fn piece_values_match_the_classical_scale() {
    assert_eq!(piece_value(PieceKind::Pawn), 100);
    assert_eq!(piece_value(PieceKind::Knight), 320);
    assert_eq!(piece_value(PieceKind::Bishop), 330);
    assert_eq!(piece_value(PieceKind::Rook), 500);
    assert_eq!(piece_value(PieceKind::Queen), 900);
    assert_eq!(piece_value(PieceKind::King), 20000);
}
