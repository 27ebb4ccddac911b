//! Read-only copy of the board for renderers.

use std::ops::Index;

use crate::colored_piece::ColoredPiece;
use crate::square::Square;

/// Kind and color of every square's occupant, detached from the live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Snapshot([Option<ColoredPiece>; Square::COUNT]);

impl Snapshot {
    pub(crate) const fn new(cells: [Option<ColoredPiece>; Square::COUNT]) -> Snapshot {
        Snapshot(cells)
    }

    /// Occupant of `sq`.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<ColoredPiece> {
        self.0[sq.index()]
    }

    /// Every square with its occupant, in square order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Option<ColoredPiece>)> + '_ {
        Square::all().map(|sq| (sq, self.get(sq)))
    }

    /// Occupied squares only.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        self.iter().filter_map(|(sq, piece)| piece.map(|p| (sq, p)))
    }
}

impl Index<Square> for Snapshot {
    type Output = Option<ColoredPiece>;

    fn index(&self, sq: Square) -> &Option<ColoredPiece> {
        &self.0[sq.index()]
    }
}
