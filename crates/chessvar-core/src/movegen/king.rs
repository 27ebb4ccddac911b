//! King moves: one step in any direction, with no notion of check.

use crate::bitboard::Bitboard;
use crate::square::Square;

use super::tables::KING_TARGETS;

/// The up-to-8 squares adjacent to `origin`.
///
/// Stepping onto an attacked square is allowed; this variant has no check.
#[inline]
pub(super) fn king_targets(origin: Square) -> Bitboard {
    KING_TARGETS[origin.index()]
}
