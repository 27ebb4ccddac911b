//! The 8x8 grid of cells, each owning at most one piece.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::colored_piece::ColoredPiece;
use crate::error::BoardError;
use crate::file::File;
use crate::layout::Placement;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::snapshot::Snapshot;
use crate::square::Square;

/// Back-rank order from file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement, indexed by [`Square::index()`].
///
/// Each cell owns its occupant; a piece's stored square always equals the
/// cell holding it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
        }
    }

    /// The standard starting position: White on ranks 1-2, Black on ranks 7-8.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (color, back, pawns) in [
            (Color::White, Rank::Rank1, Rank::Rank2),
            (Color::Black, Rank::Rank8, Rank::Rank7),
        ] {
            for file in File::ALL {
                let kind = BACK_RANK[file.index()];
                board.put(Piece::new(kind, color, Square::new(back, file)));
                board.put(Piece::new(PieceKind::Pawn, color, Square::new(pawns, file)));
            }
        }
        board
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.cells[sq.index()].as_ref()
    }

    /// Return the kind and color on `sq`, if any.
    #[inline]
    pub fn colored_piece_on(&self, sq: Square) -> Option<ColoredPiece> {
        self.piece_at(sq).map(Piece::colored)
    }

    /// Return the color of the piece on `sq`, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(Piece::color)
    }

    /// Return `true` if `sq` holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_some()
    }

    /// Squares occupied by `color`.
    pub fn side(&self, color: Color) -> Bitboard {
        self.pieces()
            .filter(|piece| piece.color() == color)
            .map(Piece::square)
            .collect()
    }

    /// Iterate over every piece in square order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().flatten()
    }

    /// Number of `color` pieces of `kind` on the board.
    pub fn count(&self, kind: PieceKind, color: Color) -> u32 {
        self.pieces()
            .filter(|piece| piece.kind() == kind && piece.color() == color)
            .count() as u32
    }

    /// Place `piece` on its own square, returning any previous occupant.
    pub(crate) fn put(&mut self, piece: Piece) -> Option<Piece> {
        self.cells[piece.square().index()].replace(piece)
    }

    /// Move the piece on `from` to `to`, returning whatever stood on `to`.
    ///
    /// Does nothing and returns `None` when `from` is empty.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut piece = self.cells[from.index()].take()?;
        piece.relocate(to);
        self.put(piece)
    }

    /// Check that each side has exactly one king.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.count(PieceKind::King, color);
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }
        Ok(())
    }

    /// Read-only kind/color view of every square.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(std::array::from_fn(|index| {
            self.cells[index].as_ref().map(Piece::colored)
        }))
    }

    /// Return a pretty-printable wrapper with file and rank labels.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            coordinates: true,
        }
    }

    /// Return a pretty-printable wrapper, optionally without labels.
    pub fn pretty_with(&self, coordinates: bool) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            coordinates,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", Placement(self))
    }
}

/// Wrapper for printing a board as an 8x8 grid, rank 8 at the top.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    coordinates: bool,
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            if self.coordinates {
                write!(f, "{rank}  ")?;
            }
            let row: Vec<String> = File::ALL
                .into_iter()
                .map(|file| {
                    self.board
                        .colored_piece_on(Square::new(rank, file))
                        .map_or('.', ColoredPiece::letter)
                        .to_string()
                })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        if self.coordinates {
            write!(f, "   a b c d e f g h")?;
        }
        Ok(())
    }
}
