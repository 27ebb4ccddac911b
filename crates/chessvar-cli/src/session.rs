//! Line-oriented text session driving a single [`Game`].

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use chessvar_core::{AppliedMove, Color, Game, Move, Square};

use crate::command::{Command, SessionOption, parse_command};
use crate::error::SessionError;

/// Settings adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the board after every accepted move.
    pub autoprint: bool,
    /// Label files and ranks when printing the board.
    pub coordinates: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            autoprint: false,
            coordinates: true,
        }
    }
}

/// The session, holding the current game and settings.
///
/// Reads one command per line and answers on the output. Errors in a
/// command are reported to the client and never end the session; only
/// I/O failures do.
pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    /// Create a session with a new game and default settings.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            game: Game::new(),
            config,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Run on stdin/stdout until `quit` or input closes.
    pub fn run(self) -> Result<(), SessionError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock()).map(|_| ())
    }

    /// Run over any line reader and writer, returning the final session.
    pub fn run_with<R: BufRead, W: Write>(
        mut self,
        input: R,
        mut output: W,
    ) -> Result<Session, SessionError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, &mut output)?,
                Err(e) => {
                    warn!(error = %e, "command error");
                    writeln!(output, "error {e}")?;
                }
            }
            output.flush()?;
        }

        info!(status = %self.game.game_status(), "session closed");
        Ok(self)
    }

    fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<()> {
        match cmd {
            Command::New => {
                self.game = Game::new();
                writeln!(out, "ok")
            }
            Command::Position(game) => {
                self.game = game;
                writeln!(out, "ok")
            }
            Command::Move(mv) => self.handle_move(mv, out),
            Command::Moves(sq) => self.handle_moves(sq, out),
            Command::Board => self.print_board(out),
            Command::Status => writeln!(out, "status {}", self.game.game_status()),
            Command::Turn => writeln!(out, "turn {}", self.game.side_to_move().name()),
            Command::Layout => writeln!(out, "layout {}", self.game),
            Command::Remaining => writeln!(
                out,
                "remaining white {} black {}",
                self.game.remaining(Color::White),
                self.game.remaining(Color::Black),
            ),
            Command::Set(option, enabled) => {
                match option {
                    SessionOption::Autoprint => self.config.autoprint = enabled,
                    SessionOption::Coordinates => self.config.coordinates = enabled,
                }
                writeln!(out, "ok")
            }
            // Handled by the read loop.
            Command::Quit => Ok(()),
        }
    }

    fn handle_move<W: Write>(&mut self, mv: Move, out: &mut W) -> io::Result<()> {
        match self.game.try_move(mv.origin(), mv.destination()) {
            Ok(applied) => {
                write_applied(&applied, out)?;
                if applied.status.is_over() {
                    writeln!(out, "status {}", applied.status)?;
                }
                if self.config.autoprint {
                    self.print_board(out)?;
                }
                Ok(())
            }
            Err(e) => writeln!(out, "rejected {e}"),
        }
    }

    fn handle_moves<W: Write>(&self, sq: Square, out: &mut W) -> io::Result<()> {
        let targets = self.game.legal_destinations(sq);
        if targets.is_empty() {
            return writeln!(out, "moves -");
        }
        let list: Vec<String> = targets.map(|target| target.to_string()).collect();
        writeln!(out, "moves {}", list.join(" "))
    }

    fn print_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.game.board().pretty_with(self.config.coordinates))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn write_applied<W: Write>(applied: &AppliedMove, out: &mut W) -> io::Result<()> {
    let mv = Move::new(applied.origin, applied.destination);
    match applied.captured {
        Some(victim) => writeln!(out, "ok {mv} captures {victim}"),
        None => writeln!(out, "ok {mv}"),
    }
}
