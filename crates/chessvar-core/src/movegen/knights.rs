//! Knight moves: a (1, 2) or (2, 1) leap over anything in between.

use crate::bitboard::Bitboard;
use crate::square::Square;

use super::tables::KNIGHT_TARGETS;

#[inline]
pub(super) fn knight_targets(origin: Square) -> Bitboard {
    KNIGHT_TARGETS[origin.index()]
}
