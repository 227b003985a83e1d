use chess_rules::{Color, Game, RulesOracle};
use negamax_engine::{EngineConfig, SearchEngine};
use std::io::{self, Write};

/// Summary of a finished self-play game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfPlayOutcome {
    pub plies: usize,
    pub result: &'static str,
}

/// Lets the engine play both sides from the start position.
///
/// Stops when the game is over or after `max_moves` full moves, printing
/// the move list as `1. e2e4  e7e5`, one numbered line per move pair.
pub fn play(
    config: &EngineConfig,
    max_moves: u32,
    out: &mut impl Write,
) -> io::Result<SelfPlayOutcome> {
    let mut game = Game::new();
    let mut engine = SearchEngine::new(config);
    let max_plies = max_moves as usize * 2;

    while game.ply_count() < max_plies && !game.is_game_over() {
        let Some(mv) = engine.find_best_move(&mut game, config.depth) else {
            break;
        };
        let ply = game.ply_count();
        match game.side_to_move() {
            Color::White => write!(out, "{}. {mv}", ply / 2 + 1)?,
            Color::Black => writeln!(out, "  {mv}")?,
        }
        game.apply(mv);
    }
    if game.ply_count() % 2 == 1 {
        writeln!(out)?;
    }

    let result = game.result();
    writeln!(out, "Game Over: {result}")?;
    out.flush()?;

    Ok(SelfPlayOutcome {
        plies: game.ply_count(),
        result,
    })
}
