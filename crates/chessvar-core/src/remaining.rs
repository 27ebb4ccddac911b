//! Per-side count of pieces the opponent has not captured yet, by kind.

use std::fmt;

use crate::error::LayoutError;
use crate::piece_kind::PieceKind;

/// How many pieces of each kind one side still has to lose.
///
/// The table is keyed by the victim: a capture of a black knight decrements
/// Black's table. An entry reaching zero means the opponent has captured every
/// piece of that kind and won.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Remaining([u8; PieceKind::COUNT]);

impl Remaining {
    /// A full army: 8 pawns, 2 knights, 2 bishops, 2 rooks, 1 queen, 1 king.
    pub const STANDARD: Remaining = Remaining([8, 2, 2, 2, 1, 1]);

    /// Count left for `kind`.
    #[inline]
    pub const fn get(self, kind: PieceKind) -> u8 {
        self.0[kind.index()]
    }

    /// Record one capture of `kind` and return the count left.
    ///
    /// Saturates at zero.
    pub fn decrement(&mut self, kind: PieceKind) -> u8 {
        let slot = &mut self.0[kind.index()];
        *slot = slot.saturating_sub(1);
        *slot
    }

    /// First kind (in [`PieceKind::ALL`] order) whose count is zero.
    pub fn exhausted_kind(self) -> Option<PieceKind> {
        PieceKind::ALL.into_iter().find(|&kind| self.get(kind) == 0)
    }

    /// Parse the six-digit layout form (pawn, knight, bishop, rook, queen, king).
    ///
    /// Counts may not exceed the standard army.
    pub fn from_layout(s: &str) -> Result<Remaining, LayoutError> {
        let invalid = || LayoutError::InvalidRemaining {
            found: s.to_string(),
        };

        let digits: Vec<u8> = s
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<_>>()
            .ok_or_else(invalid)?;
        if digits.len() != PieceKind::COUNT {
            return Err(invalid());
        }

        let mut counts = [0u8; PieceKind::COUNT];
        for kind in PieceKind::ALL {
            let count = digits[kind.index()];
            if count > Self::STANDARD.get(kind) {
                return Err(invalid());
            }
            counts[kind.index()] = count;
        }
        Ok(Remaining(counts))
    }
}

impl Default for Remaining {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for count in self.0 {
            write!(f, "{count}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for kind in PieceKind::ALL {
            map.entry(&kind.name(), &self.get(kind));
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Remaining;
    use crate::piece_kind::PieceKind;

    #[test]
    fn standard_army() {
        let table = Remaining::STANDARD;
        assert_eq!(table.get(PieceKind::Pawn), 8);
        assert_eq!(table.get(PieceKind::Knight), 2);
        assert_eq!(table.get(PieceKind::Bishop), 2);
        assert_eq!(table.get(PieceKind::Rook), 2);
        assert_eq!(table.get(PieceKind::Queen), 1);
        assert_eq!(table.get(PieceKind::King), 1);
        assert_eq!(table.exhausted_kind(), None);
        assert_eq!(Remaining::default(), table);
    }

    #[test]
    fn decrement_until_exhausted() {
        let mut table = Remaining::STANDARD;
        assert_eq!(table.decrement(PieceKind::Rook), 1);
        assert_eq!(table.exhausted_kind(), None);
        assert_eq!(table.decrement(PieceKind::Rook), 0);
        assert_eq!(table.exhausted_kind(), Some(PieceKind::Rook));
        assert_eq!(table.decrement(PieceKind::Rook), 0, "count saturates at zero");
    }

    #[test]
    fn layout_roundtrip() {
        assert_eq!(Remaining::STANDARD.to_string(), "822211");
        let table = Remaining::from_layout("712201").unwrap();
        assert_eq!(table.get(PieceKind::Pawn), 7);
        assert_eq!(table.get(PieceKind::Queen), 0);
        assert_eq!(table.to_string(), "712201");
    }

    #[test]
    fn layout_rejects_bad_counts() {
        for bad in ["", "82221", "8222111", "92221 1", "832211", "8x2211", "-"] {
            assert!(Remaining::from_layout(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn debug_lists_kinds() {
        let text = format!("{:?}", Remaining::STANDARD);
        assert!(text.contains("\"pawn\": 8"), "{text}");
        assert!(text.contains("\"king\": 1"), "{text}");
    }
}
