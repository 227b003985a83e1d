use chess_rules::{move_to_uci, set_position_from_uci, Game, RulesOracle};
use negamax_engine::{EngineConfig, MobilityMode, SearchEngine, MAX_DEPTH};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Whether the read loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One UCI conversation: the game being analysed plus engine settings.
pub struct Session {
    game: Game,
    config: EngineConfig,
    engine: SearchEngine,
}

impl Session {
    pub fn new(config: EngineConfig) -> Self {
        let engine = SearchEngine::new(&config);
        Self {
            game: Game::new(),
            config,
            engine,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Handles a single input line, writing any replies to `out`.
    ///
    /// Unknown commands are ignored. Bad arguments are reported as
    /// `info string` lines and never end the session.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = parts.split_first() else {
            return Ok(Flow::Continue);
        };

        match cmd {
            "uci" => {
                writeln!(out, "id name Negamax {}", env!("CARGO_PKG_VERSION"))?;
                writeln!(out, "id author ML-chess")?;
                writeln!(
                    out,
                    "option name Depth type spin default {} min 1 max {}",
                    self.config.depth, MAX_DEPTH
                )?;
                writeln!(
                    out,
                    "option name Mobility type combo default {} var {} var {}",
                    self.config.mobility,
                    MobilityMode::PerPiece,
                    MobilityMode::BoardWide
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => self.set_option(args, out)?,
            "ucinewgame" => self.game.reset(),
            "position" => {
                if let Err(e) = set_position_from_uci(&mut self.game, args) {
                    warn!(error = %e, "bad position command");
                    writeln!(out, "info string {e}")?;
                }
            }
            "go" => self.go(args, out)?,
            "undo" => match self.game.undo() {
                Some(mv) => debug!(%mv, "took back"),
                None => writeln!(out, "info string nothing to undo")?,
            },
            "d" => {
                writeln!(out, "{}", self.game.fen())?;
                writeln!(out, "result {}", self.game.result())?;
            }
            "quit" => return Ok(Flow::Quit),
            _ => debug!(line, "ignoring unknown command"),
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    fn set_option(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<()> {
        // setoption name <id> value <x>
        let name = value_after(args, "name");
        let value = value_after(args, "value");
        let (Some(name), Some(value)) = (name, value) else {
            return writeln!(out, "info string setoption needs a name and a value");
        };

        if name.eq_ignore_ascii_case("Depth") {
            let applied = value
                .parse::<u8>()
                .map_err(|e| e.to_string())
                .and_then(|d| self.config.set_depth(d).map_err(|e| e.to_string()));
            if let Err(e) = applied {
                warn!(value, error = %e, "rejected Depth");
                writeln!(out, "info string {e}")?;
            }
        } else if name.eq_ignore_ascii_case("Mobility") {
            match value.parse::<MobilityMode>() {
                Ok(mode) => self.config.mobility = mode,
                Err(e) => {
                    warn!(value, error = %e, "rejected Mobility");
                    writeln!(out, "info string {e}")?;
                }
            }
        } else {
            writeln!(out, "info string unknown option {name}")?;
        }
        self.engine = SearchEngine::new(&self.config);
        Ok(())
    }

    fn go(&mut self, args: &[&str], out: &mut impl Write) -> io::Result<()> {
        // Time controls are ignored; only a fixed depth is supported.
        let depth = match value_after(args, "depth").map(str::parse::<u8>) {
            Some(Ok(d)) => d.clamp(1, MAX_DEPTH),
            Some(Err(_)) => {
                writeln!(out, "info string bad depth, using {}", self.config.depth)?;
                self.config.depth
            }
            None => self.config.depth,
        };

        let result = self.engine.search(&mut self.game, depth);
        writeln!(
            out,
            "info depth {} score cp {} nodes {}",
            result.depth, result.score, result.nodes
        )?;
        match result.best_move {
            Some(mv) => writeln!(out, "bestmove {}", move_to_uci(mv)),
            None => writeln!(out, "bestmove 0000"),
        }
    }
}

fn value_after<'a>(args: &[&'a str], key: &str) -> Option<&'a str> {
    let idx = args.iter().position(|&a| a == key)?;
    args.get(idx + 1).copied()
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
