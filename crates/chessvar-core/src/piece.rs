//! A piece on the board: fixed kind and color, mutable square.

use crate::color::Color;
use crate::colored_piece::ColoredPiece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A single piece owned by one board cell.
///
/// `kind` and `color` never change after construction. `square` follows the
/// piece as it moves, and `has_moved` records whether a pawn has used its
/// first move (other kinds never set it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
    has_moved: bool,
}

impl Piece {
    /// Create an unmoved piece standing on `square`.
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Piece {
        Piece {
            kind,
            color,
            square,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// Whether this pawn has already moved. Always `false` for other kinds.
    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Kind and color without the position.
    #[inline]
    pub const fn colored(&self) -> ColoredPiece {
        ColoredPiece::new(self.kind, self.color)
    }

    /// Move to `square`; a pawn also loses its double-step.
    pub fn relocate(&mut self, square: Square) {
        self.square = square;
        if self.kind == PieceKind::Pawn {
            self.has_moved = true;
        }
    }

    /// Mark a pawn placed off its start rank as already moved.
    pub(crate) fn mark_moved(&mut self) {
        if self.kind == PieceKind::Pawn {
            self.has_moved = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::colored_piece::ColoredPiece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn new_piece_is_unmoved() {
        let piece = Piece::new(PieceKind::Pawn, Color::White, Square::E2);
        assert_eq!(piece.kind(), PieceKind::Pawn);
        assert_eq!(piece.color(), Color::White);
        assert_eq!(piece.square(), Square::E2);
        assert!(!piece.has_moved());
        assert_eq!(piece.colored(), ColoredPiece::WHITE_PAWN);
    }

    #[test]
    fn relocating_a_pawn_marks_it_moved() {
        let mut pawn = Piece::new(PieceKind::Pawn, Color::Black, Square::C7);
        pawn.relocate(Square::C5);
        assert_eq!(pawn.square(), Square::C5);
        assert!(pawn.has_moved());
    }

    #[test]
    fn relocating_other_kinds_leaves_flag_alone() {
        for kind in PieceKind::ALL.into_iter().filter(|&k| k != PieceKind::Pawn) {
            let mut piece = Piece::new(kind, Color::White, Square::D4);
            piece.relocate(Square::D5);
            piece.mark_moved();
            assert_eq!(piece.square(), Square::D5);
            assert!(!piece.has_moved(), "{kind} should never be flagged as moved");
        }
    }
}
