//! Session protocol errors.

use chessvar_core::{LayoutError, Move, MoveError, ParseSquareError};

/// Errors that can occur while reading or interpreting session commands.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The line held no command.
    #[error("empty command")]
    EmptyCommand,

    /// The first word is not a known command.
    #[error("unknown command: {name}")]
    UnknownCommand {
        /// The unrecognized word.
        name: String,
    },

    /// A command was given too few arguments.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command that needs more input.
        command: &'static str,
    },

    /// The `position` command is missing `startpos` or `layout` keyword.
    #[error("malformed position command: missing startpos or layout keyword")]
    MalformedPosition,

    /// Failed to parse a layout string.
    #[error("invalid layout \"{layout}\": {source}")]
    InvalidLayout {
        /// The layout string that failed to parse.
        layout: String,
        /// Why it failed.
        #[source]
        source: LayoutError,
    },

    /// A square or move could not be parsed.
    #[error(transparent)]
    InvalidSquare(#[from] ParseSquareError),

    /// A move listed after `position ... moves` was refused by the game.
    #[error("move {mv} rejected: {source}")]
    RejectedMove {
        /// The refused move.
        mv: Move,
        /// The game's reason.
        #[source]
        source: MoveError,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The unrecognized option name.
        name: String,
    },

    /// `set` was given something other than `on` or `off`.
    #[error("invalid switch value: {value} (expected on or off)")]
    InvalidSwitch {
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred while reading commands or writing responses.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
