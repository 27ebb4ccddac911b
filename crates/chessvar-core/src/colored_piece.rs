//! Kind-plus-color pairs, bit-packed into a single byte.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A piece kind together with its color, as shown in board snapshots.
///
/// Bit layout:
/// - bits 0-2: [`PieceKind`] (values 0-5)
/// - bit 3: [`Color`] (0 = White, 1 = Black)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColoredPiece(u8);

impl ColoredPiece {
    pub const WHITE_PAWN: ColoredPiece = ColoredPiece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_KNIGHT: ColoredPiece = ColoredPiece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: ColoredPiece = ColoredPiece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: ColoredPiece = ColoredPiece::new(PieceKind::Rook, Color::White);
    pub const WHITE_QUEEN: ColoredPiece = ColoredPiece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: ColoredPiece = ColoredPiece::new(PieceKind::King, Color::White);
    pub const BLACK_PAWN: ColoredPiece = ColoredPiece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_KNIGHT: ColoredPiece = ColoredPiece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: ColoredPiece = ColoredPiece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: ColoredPiece = ColoredPiece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_QUEEN: ColoredPiece = ColoredPiece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: ColoredPiece = ColoredPiece::new(PieceKind::King, Color::Black);

    /// Pack a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> ColoredPiece {
        ColoredPiece((color as u8) << 3 | (kind as u8))
    }

    /// Parse a layout letter: uppercase is White, lowercase is Black.
    pub fn from_letter(c: char) -> Option<ColoredPiece> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(ColoredPiece::new(kind, color))
    }

    /// Return the piece kind (the lower 3 bits).
    #[inline]
    pub const fn kind(self) -> PieceKind {
        PieceKind::ALL[(self.0 & 0x07) as usize]
    }

    /// Return the color (bit 3).
    #[inline]
    pub const fn color(self) -> Color {
        Color::ALL[(self.0 >> 3) as usize]
    }

    /// Layout letter: uppercase for White, lowercase for Black.
    #[inline]
    pub const fn letter(self) -> char {
        let base = self.kind().letter();
        match self.color() {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for ColoredPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color().name(), self.kind().name())
    }
}

impl fmt::Debug for ColoredPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color() {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{}{}", color_prefix, self.kind().letter().to_ascii_uppercase())
    }
}
