//! Session command parsing.

use chessvar_core::{Game, Move, Square};
use tracing::trace;

use crate::error::SessionError;

/// Session settings that `set` can switch on and off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Print the board after every accepted move.
    Autoprint,
    /// Label files and ranks in board dumps.
    Coordinates,
}

impl SessionOption {
    fn from_name(name: &str) -> Option<SessionOption> {
        match name {
            "autoprint" => Some(SessionOption::Autoprint),
            "coordinates" => Some(SessionOption::Coordinates),
            _ => None,
        }
    }
}

/// A parsed session command.
#[derive(Debug)]
pub enum Command {
    /// `new` -- start over from the standard position.
    New,
    /// `position` -- replace the game with a set-up position, moves already applied.
    Position(Game),
    /// `move e2 e4`, `move e2e4` or a bare `e2e4` -- play a move.
    Move(Move),
    /// `moves <square>` -- list where the piece on a square can go.
    Moves(Square),
    /// `board` -- print the board.
    Board,
    /// `status` -- print the game status.
    Status,
    /// `turn` -- print the side to move.
    Turn,
    /// `layout` -- print the game in layout notation.
    Layout,
    /// `remaining` -- print both remaining-to-capture tables.
    Remaining,
    /// `set <option> <on|off>` -- change a session setting.
    Set(SessionOption, bool),
    /// `quit` -- end the session.
    Quit,
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, SessionError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Err(SessionError::EmptyCommand);
    };

    match name {
        "new" => Ok(Command::New),
        "board" => Ok(Command::Board),
        "status" => Ok(Command::Status),
        "turn" => Ok(Command::Turn),
        "layout" => Ok(Command::Layout),
        "remaining" => Ok(Command::Remaining),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(args),
        "move" => parse_move(args),
        "moves" => {
            let square = args.first().ok_or(SessionError::MissingArgument { command: "moves" })?;
            Ok(Command::Moves(square.parse()?))
        }
        "set" => parse_set(args),
        bare if bare.len() == 4 && args.is_empty() => match bare.parse::<Move>() {
            Ok(mv) => Ok(Command::Move(mv)),
            Err(_) => Err(SessionError::UnknownCommand {
                name: bare.to_string(),
            }),
        },
        other => Err(SessionError::UnknownCommand {
            name: other.to_string(),
        }),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 e7e5 ...]`
/// - `position layout <placement> <side> [<remaining>] [moves e2e4 e7e5 ...]`
///
/// Every listed move must be accepted by the game, otherwise the whole
/// command fails and the current game is kept.
fn parse_position(tokens: &[&str]) -> Result<Command, SessionError> {
    let Some((&keyword, rest)) = tokens.split_first() else {
        return Err(SessionError::MalformedPosition);
    };
    let split = rest.iter().position(|&t| t == "moves").unwrap_or(rest.len());
    let (setup, moves) = rest.split_at(split);

    let mut game = match keyword {
        "startpos" if setup.is_empty() => Game::new(),
        "layout" => {
            let layout = setup.join(" ");
            layout
                .parse::<Game>()
                .map_err(|source| SessionError::InvalidLayout { layout, source })?
        }
        _ => return Err(SessionError::MalformedPosition),
    };

    // Apply moves if present: "moves e2e4 e7e5 ..."
    for text in moves.iter().skip(1) {
        let mv: Move = text.parse()?;
        game.try_move(mv.origin(), mv.destination())
            .map_err(|source| SessionError::RejectedMove { mv, source })?;
        trace!(%mv, "position move applied");
    }

    Ok(Command::Position(game))
}

/// Parse `move e2 e4` or `move e2e4`.
fn parse_move(tokens: &[&str]) -> Result<Command, SessionError> {
    match tokens {
        [joined] => Ok(Command::Move(joined.parse()?)),
        [from, to] => Ok(Command::Move(Move::new(from.parse()?, to.parse()?))),
        _ => Err(SessionError::MissingArgument { command: "move" }),
    }
}

/// Parse `set <option> <on|off>`.
fn parse_set(tokens: &[&str]) -> Result<Command, SessionError> {
    let [name, value] = tokens else {
        return Err(SessionError::MissingArgument { command: "set" });
    };
    let option = SessionOption::from_name(name).ok_or_else(|| SessionError::UnknownOption {
        name: name.to_string(),
    })?;
    let enabled = match *value {
        "on" => true,
        "off" => false,
        other => {
            return Err(SessionError::InvalidSwitch {
                value: other.to_string(),
            });
        }
    };
    Ok(Command::Set(option, enabled))
}
