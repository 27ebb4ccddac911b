//! Core rules of the capture-the-army chess variant: board representation,
//! per-kind move generation, capture tracking and the win rule.
//!
//! There is no check, castling, en passant or promotion. A side wins as soon
//! as it has captured every opposing piece of any one kind.

mod bitboard;
mod board;
mod chess_move;
mod color;
mod colored_piece;
mod error;
mod file;
mod game;
mod layout;
mod movegen;
mod piece;
mod piece_kind;
mod rank;
mod remaining;
mod snapshot;
mod square;

pub use bitboard::Bitboard;
pub use board::{Board, PrettyBoard};
pub use chess_move::Move;
pub use color::Color;
pub use colored_piece::ColoredPiece;
pub use error::{BoardError, LayoutError, MoveError, ParseSquareError};
pub use file::File;
pub use game::{AppliedMove, Game, GameStatus};
pub use layout::STARTING_LAYOUT;
pub use movegen::legal_destinations;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use remaining::Remaining;
pub use snapshot::Snapshot;
pub use square::Square;
