//! Destination generation, dispatched on piece kind.

mod king;
mod knights;
mod pawns;
mod sliders;
mod tables;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::king_targets;
use self::knights::knight_targets;
use self::pawns::pawn_targets;
use self::sliders::{bishop_targets, queen_targets, rook_targets};

/// Squares `piece` could move to under its kind's movement rule.
///
/// Blocking squares at the end of a ray are included whatever their color;
/// callers reject own-piece destinations separately.
pub(crate) fn reachable(board: &Board, piece: &Piece) -> Bitboard {
    let origin = piece.square();
    match piece.kind() {
        PieceKind::Pawn => pawn_targets(board, piece),
        PieceKind::Knight => knight_targets(origin),
        PieceKind::Bishop => bishop_targets(board, origin),
        PieceKind::Rook => rook_targets(board, origin),
        PieceKind::Queen => queen_targets(board, origin),
        PieceKind::King => king_targets(origin),
    }
}

/// Every legal destination for the piece on `origin`, own-occupied squares removed.
///
/// Empty when `origin` is empty.
pub fn legal_destinations(board: &Board, origin: Square) -> Bitboard {
    match board.piece_at(origin) {
        Some(piece) => reachable(board, piece) & !board.side(piece.color()),
        None => Bitboard::EMPTY,
    }
}

#[cfg(test)]
mod tests {
    use super::legal_destinations;
    use crate::bitboard::Bitboard;
    use crate::board::Board;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn starting_position_has_20_moves_per_side() {
        let board = Board::starting_position();
        for color in Color::ALL {
            let total: u32 = board
                .side(color)
                .map(|sq| legal_destinations(&board, sq).count())
                .sum();
            assert_eq!(total, 20, "{} should have 20 moves", color.name());
        }
    }

    #[test]
    fn own_pieces_are_never_destinations() {
        let board = Board::starting_position();
        for color in Color::ALL {
            let own = board.side(color);
            for sq in own {
                assert!((legal_destinations(&board, sq) & own).is_empty());
            }
        }
    }

    #[test]
    fn empty_square_has_no_destinations() {
        let board = Board::starting_position();
        assert_eq!(legal_destinations(&board, Square::E4), Bitboard::EMPTY);
    }

    #[test]
    fn boxed_in_pieces_cannot_move() {
        let board = Board::starting_position();
        for sq in [Square::A1, Square::C1, Square::D1, Square::E1, Square::F8] {
            assert!(legal_destinations(&board, sq).is_empty(), "{sq} should be boxed in");
        }
    }
}
