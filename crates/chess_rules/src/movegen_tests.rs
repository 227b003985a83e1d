use super::*;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).expect("valid FEN")
}

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos = pos("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 48);
}

#[test]
fn test_promotion_generates_four_pieces() {
    let pos = pos("8/P7/8/8/8/8/8/k6K w - - 0 1");
    let promos: Vec<_> = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.from == 48 && m.to == 56)
        .map(|m| m.promo)
        .collect();
    assert_eq!(
        promos,
        vec![
            Some(PieceKind::Queen),
            Some(PieceKind::Rook),
            Some(PieceKind::Bishop),
            Some(PieceKind::Knight)
        ]
    );
}

#[test]
fn test_en_passant_is_recognised_when_applied() {
    let mut pos = pos("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let before = pos.clone();
    let ep = Move::new(coord_to_sq("e5").unwrap(), coord_to_sq("f6").unwrap());
    assert!(legal_moves(&pos).contains(&ep));

    let undo = pos.make_move(ep);
    assert_eq!(pos.piece_at(coord_to_sq("f5").unwrap()), None);
    assert_eq!(
        pos.piece_at(coord_to_sq("f6").unwrap()),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );

    pos.unmake_move(ep, undo);
    assert_eq!(pos, before);
}

#[test]
fn test_castling_moves_the_rook() {
    let mut pos = pos("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let before = pos.clone();
    let moves = legal_moves(&pos);
    let short = Move::new(4, 6);
    assert!(moves.contains(&short));
    assert!(moves.contains(&Move::new(4, 2)));

    let undo = pos.make_move(short);
    assert_eq!(pos.piece_at(5), Some(Piece::new(Color::White, PieceKind::Rook)));
    assert_eq!(pos.piece_at(7), None);
    assert!(!pos.castling.wk && !pos.castling.wq);

    pos.unmake_move(short, undo);
    assert_eq!(pos, before);
}

#[test]
fn test_no_castling_through_attacked_square() {
    // Black rook on f2 covers f1.
    let pos = pos("r3k2r/8/8/8/8/8/5r2/R3K2R w KQ - 0 1");
    let moves = legal_moves(&pos);
    assert!(!moves.contains(&Move::new(4, 6)));
    assert!(moves.contains(&Move::new(4, 2)));
}

#[test]
fn test_missing_promotion_defaults_to_queen() {
    let mut pos = pos("8/P7/8/8/8/8/8/k6K w - - 0 1");
    pos.make_move(Move::new(48, 56));
    assert_eq!(pos.piece_at(56), Some(Piece::new(Color::White, PieceKind::Queen)));
}

#[test]
fn test_has_legal_move_matches_generation() {
    let mut stalemate = pos("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(!has_legal_move(&mut stalemate));

    let mut start = Position::startpos();
    assert!(has_legal_move(&mut start));
}
