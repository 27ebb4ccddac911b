//! Error types for square parsing, layout parsing, board validation and move rejection.

use crate::color::Color;
use crate::game::GameStatus;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A string that does not name a square (`a1`..`h8`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square: \"{input}\"")]
pub struct ParseSquareError {
    /// The rejected text.
    pub input: String,
}

/// Structural problems with a board built from a layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {}, found {count}", .color.name())]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: u32,
    },
}

/// Errors that occur when parsing a layout string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The layout does not have 2 or 3 space-separated fields.
    #[error("expected 2 or 3 layout fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index (0 = rank 8, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "w" or "b".
    #[error("invalid side to move: \"{found}\"")]
    InvalidColor {
        /// The invalid field.
        found: String,
    },
    /// The remaining-to-capture field is malformed.
    #[error("invalid remaining counts: \"{found}\"")]
    InvalidRemaining {
        /// The invalid field.
        found: String,
    },
    /// A remaining-to-capture entry is zero, so the game would already be over.
    #[error("every {kind} of {} is already captured", .color.name())]
    ExhaustedKind {
        /// Side whose pieces are gone.
        color: Color,
        /// The exhausted kind.
        kind: PieceKind,
    },
    /// The placement fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Why [`Game::try_move`](crate::Game::try_move) refused a move.
///
/// Variants are listed in the order the checks run; the first failing check
/// wins, and a refused move never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The game already has a winner.
    #[error("game is over ({status})")]
    GameOver {
        /// The final status.
        status: GameStatus,
    },
    /// Origin and destination are the same square.
    #[error("origin and destination are both {square}")]
    SameSquare {
        /// The repeated square.
        square: Square,
    },
    /// There is no piece on the origin square.
    #[error("no piece on {square}")]
    EmptyOrigin {
        /// The empty origin.
        square: Square,
    },
    /// The origin piece belongs to the side not on move.
    #[error("piece on {square} is not {}'s", .to_move.name())]
    WrongSide {
        /// The origin square.
        square: Square,
        /// The side whose turn it is.
        to_move: Color,
    },
    /// A square given as text is not on the board.
    #[error(transparent)]
    InvalidSquare(#[from] ParseSquareError),
    /// The destination holds a piece of the moving side.
    #[error("{square} is occupied by the mover's own piece")]
    OwnPieceAtDestination {
        /// The blocked destination.
        square: Square,
    },
    /// The piece cannot reach the destination under its movement rule.
    #[error("{kind} on {origin} cannot move to {destination}")]
    IllegalDestination {
        /// Kind of the moving piece.
        kind: PieceKind,
        /// Origin square.
        origin: Square,
        /// Requested destination.
        destination: Square,
    },
}
