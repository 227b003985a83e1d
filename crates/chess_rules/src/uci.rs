use crate::error::{MoveError, SetupError};
use crate::oracle::{Game, RulesOracle};
use crate::types::*;

pub fn move_to_uci(mv: Move) -> String {
    mv.to_string()
}

/// Parses long algebraic move text (`e2e4`, `e7e8q`) against the legal moves.
///
/// A pawn move onto the last rank without a promotion letter promotes to a queen.
pub fn parse_uci_move<R: RulesOracle>(oracle: &R, txt: &str) -> Result<Move, MoveError> {
    let malformed = || MoveError::Malformed(txt.to_string());
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return Err(malformed());
    }
    let from = coord_to_sq(&txt[0..2]).ok_or_else(malformed)?;
    let to = coord_to_sq(&txt[2..4]).ok_or_else(malformed)?;
    let promo = match txt[4..].chars().next() {
        Some(ch) => match PieceKind::from_char(ch) {
            Some(PieceKind::Pawn | PieceKind::King) | None => return Err(malformed()),
            kind => kind,
        },
        None => None,
    };

    let promo = promo.or_else(|| {
        let is_pawn = matches!(oracle.piece_at(from), Some(pc) if pc.kind == PieceKind::Pawn);
        let last_rank = rank_of(to) == 0 || rank_of(to) == 7;
        (is_pawn && last_rank).then_some(PieceKind::Queen)
    });

    oracle
        .legal_moves()
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promo == promo)
        .ok_or_else(|| MoveError::Illegal(txt.to_string()))
}

/// Applies the arguments of a UCI `position` command to `game`.
///
/// Supports `startpos` and `fen <6 fields>`, each optionally followed by
/// `moves ...`. On error the game is left at whatever state was reached.
pub fn set_position_from_uci(game: &mut Game, args: &[&str]) -> Result<(), SetupError> {
    let mut i = 0;
    match args.first().copied() {
        None | Some("startpos") => {
            game.reset();
            i += 1;
        }
        Some("fen") => {
            let end = args
                .iter()
                .position(|&a| a == "moves")
                .unwrap_or(args.len());
            *game = Game::from_fen(&args[1..end].join(" "))?;
            i = end;
        }
        Some(other) => return Err(SetupError::UnknownKeyword(other.to_string())),
    }

    if args.get(i) == Some(&"moves") {
        for txt in &args[i + 1..] {
            let mv = parse_uci_move(&*game, txt)?;
            game.apply(mv);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
