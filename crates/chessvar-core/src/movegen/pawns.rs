//! Pawn moves: straight pushes onto empty squares, diagonal steps only to capture.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::piece::Piece;

/// Squares the pawn can reach from where it stands.
///
/// No promotion and no en passant: a pawn on its far rank is stuck, and a
/// diagonal step needs a piece already standing there.
pub(super) fn pawn_targets(board: &Board, pawn: &Piece) -> Bitboard {
    let color = pawn.color();
    let origin = pawn.square();
    let forward = color.forward();
    let mut targets = Bitboard::EMPTY;

    if origin.rank() == color.last_rank() {
        return targets;
    }

    if let Some(single) = origin.offset(0, forward) {
        if !board.is_occupied(single) {
            targets = targets.with(single);
            if !pawn.has_moved() {
                if let Some(double) = single.offset(0, forward) {
                    if !board.is_occupied(double) {
                        targets = targets.with(double);
                    }
                }
            }
        }
    }

    for side in [-1, 1] {
        if let Some(diagonal) = origin.offset(side, forward) {
            if board.is_occupied(diagonal) {
                targets = targets.with(diagonal);
            }
        }
    }

    targets
}
