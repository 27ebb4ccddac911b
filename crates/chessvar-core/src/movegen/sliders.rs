//! Sliding piece (bishop, rook, queen) rays.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::square::Square;

/// (file, rank) steps along ranks and files.
const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// (file, rank) steps along diagonals.
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk from `origin` one square at a time in direction `(df, dr)`.
///
/// Empty squares are collected. The first occupied square is collected too
/// (a capture, or an own piece the caller masks out) and ends the walk, so
/// nothing behind a blocker is ever reachable.
fn ray(board: &Board, origin: Square, (df, dr): (i8, i8)) -> Bitboard {
    let mut targets = Bitboard::EMPTY;
    let mut current = origin;
    while let Some(next) = current.offset(df, dr) {
        targets = targets.with(next);
        if board.is_occupied(next) {
            break;
        }
        current = next;
    }
    targets
}

fn rays(board: &Board, origin: Square, dirs: &[(i8, i8)]) -> Bitboard {
    dirs.iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray(board, origin, dir))
}

pub(super) fn rook_targets(board: &Board, origin: Square) -> Bitboard {
    rays(board, origin, &ROOK_DIRS)
}

pub(super) fn bishop_targets(board: &Board, origin: Square) -> Bitboard {
    rays(board, origin, &BISHOP_DIRS)
}

/// Rook rays plus bishop rays. A queen step that is neither straight nor
/// diagonal is never produced.
pub(super) fn queen_targets(board: &Board, origin: Square) -> Bitboard {
    rook_targets(board, origin) | bishop_targets(board, origin)
}
