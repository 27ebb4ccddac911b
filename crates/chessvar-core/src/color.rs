//! Side colors and the per-side pawn geometry that depends on them.

use std::fmt;
use std::ops::Not;

use crate::rank::Rank;

/// One of the two sides: White moves first and advances toward rank 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step of a pawn advance: +1 for White, -1 for Black.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank a pawn of this color starts on.
    #[inline]
    pub const fn pawn_start_rank(self) -> Rank {
        match self {
            Color::White => Rank::Rank2,
            Color::Black => Rank::Rank7,
        }
    }

    /// Far rank for this color's pawns; a pawn standing there is stuck.
    #[inline]
    pub const fn last_rank(self) -> Rank {
        match self {
            Color::White => Rank::Rank8,
            Color::Black => Rank::Rank1,
        }
    }

    /// Lowercase English name.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }

    /// Parse the single-letter layout form (`w` or `b`).
    pub fn from_layout(s: &str) -> Option<Color> {
        match s {
            "w" => Some(Color::White),
            "b" => Some(Color::Black),
            _ => None,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "w"),
            Color::Black => write!(f, "b"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;
    use crate::rank::Rank;

    #[test]
    fn flip_and_not() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(!Color::Black, Color::White);
        assert_eq!(!!Color::White, Color::White);
    }

    #[test]
    fn pawn_geometry() {
        assert_eq!(Color::White.forward(), 1);
        assert_eq!(Color::Black.forward(), -1);
        assert_eq!(Color::White.pawn_start_rank(), Rank::Rank2);
        assert_eq!(Color::Black.pawn_start_rank(), Rank::Rank7);
        assert_eq!(Color::White.last_rank(), Rank::Rank8);
        assert_eq!(Color::Black.last_rank(), Rank::Rank1);
    }

    #[test]
    fn layout_letters() {
        for color in Color::ALL {
            assert_eq!(Color::from_layout(&color.to_string()), Some(color));
        }
        assert_eq!(Color::from_layout("x"), None);
        assert_eq!(Color::from_layout("white"), None);
    }

    #[test]
    fn names() {
        assert_eq!(Color::White.name(), "white");
        assert_eq!(Color::Black.name(), "black");
    }
}
