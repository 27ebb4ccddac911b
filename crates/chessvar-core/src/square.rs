//! Board squares, addressed by file letter and rank digit (`a1`..`h8`).

use std::fmt;
use std::str::FromStr;

use crate::error::ParseSquareError;
use crate::file::File;
use crate::rank::Rank;

/// A square on the 8x8 board, stored as a cell index.
///
/// Index = rank * 8 + file, so a1 = 0, b1 = 1, ..., h8 = 63. Two squares are
/// equal iff their files and ranks match.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

macro_rules! rank_squares {
    ($rank:ident: $a:ident $b:ident $c:ident $d:ident $e:ident $f:ident $g:ident $h:ident) => {
        pub const $a: Square = Square::new(Rank::$rank, File::FileA);
        pub const $b: Square = Square::new(Rank::$rank, File::FileB);
        pub const $c: Square = Square::new(Rank::$rank, File::FileC);
        pub const $d: Square = Square::new(Rank::$rank, File::FileD);
        pub const $e: Square = Square::new(Rank::$rank, File::FileE);
        pub const $f: Square = Square::new(Rank::$rank, File::FileF);
        pub const $g: Square = Square::new(Rank::$rank, File::FileG);
        pub const $h: Square = Square::new(Rank::$rank, File::FileH);
    };
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a rank and file.
    #[inline]
    pub const fn new(rank: Rank, file: File) -> Square {
        Square(rank.index() as u8 * 8 + file.index() as u8)
    }

    /// Create a square from a cell index the caller already bounded.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse a two-character square name such as `e4`.
    ///
    /// Only lowercase files `a`..`h` and ranks `1`..`8` are accepted.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = Rank::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::new(rank, file))
    }

    /// Return the cell index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    /// Return the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    /// Shift by `(file_delta, rank_delta)`, or `None` when that leaves the board.
    #[inline]
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        match (self.file().offset(file_delta), self.rank().offset(rank_delta)) {
            (Some(file), Some(rank)) => Some(Square::new(rank, file)),
            _ => None,
        }
    }

    /// Iterate over all 64 squares in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    rank_squares!(Rank1: A1 B1 C1 D1 E1 F1 G1 H1);
    rank_squares!(Rank2: A2 B2 C2 D2 E2 F2 G2 H2);
    rank_squares!(Rank3: A3 B3 C3 D3 E3 F3 G3 H3);
    rank_squares!(Rank4: A4 B4 C4 D4 E4 F4 G4 H4);
    rank_squares!(Rank5: A5 B5 C5 D5 E5 F5 G5 H5);
    rank_squares!(Rank6: A6 B6 C6 D6 E6 F6 G6 H6);
    rank_squares!(Rank7: A7 B7 C7 D7 E7 F7 G7 H7);
    rank_squares!(Rank8: A8 B8 C8 D8 E8 F8 G8 H8);
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_algebraic(s).ok_or_else(|| ParseSquareError {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
