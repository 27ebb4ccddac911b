//! Precomputed target tables for the leaping pieces.

use crate::bitboard::Bitboard;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// For each square, the squares reached by one of `deltas` (file, rank),
/// clipped to the board.
const fn compute_leaps(deltas: [(i8, i8); 8]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0usize;
    while sq < 64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut bits = 0u64;
        let mut d = 0;
        while d < 8 {
            let f = file + deltas[d].0;
            let r = rank + deltas[d].1;
            if r >= 0 && r < 8 && f >= 0 && f < 8 {
                bits |= 1u64 << (r as usize * 8 + f as usize);
            }
            d += 1;
        }
        table[sq] = Bitboard::new(bits);
        sq += 1;
    }
    table
}

pub(super) static KNIGHT_TARGETS: [Bitboard; 64] = compute_leaps(KNIGHT_DELTAS);
pub(super) static KING_TARGETS: [Bitboard; 64] = compute_leaps(KING_DELTAS);

#[cfg(test)]
mod tests {
    use super::{KING_DELTAS, KING_TARGETS, KNIGHT_DELTAS, KNIGHT_TARGETS};
    use crate::bitboard::Bitboard;
    use crate::square::Square;

    #[test]
    fn corner_and_center_counts() {
        assert_eq!(KING_TARGETS[Square::A1.index()].count(), 3);
        assert_eq!(KING_TARGETS[Square::E4.index()].count(), 8);
        assert_eq!(KING_TARGETS[Square::H5.index()].count(), 5);
        assert_eq!(KNIGHT_TARGETS[Square::A1.index()].count(), 2);
        assert_eq!(KNIGHT_TARGETS[Square::D4.index()].count(), 8);
        assert_eq!(KNIGHT_TARGETS[Square::B1.index()].count(), 3);
    }

    #[test]
    fn tables_match_distance_rules() {
        for from in Square::all() {
            for to in Square::all() {
                let df = (from.file().index() as i8 - to.file().index() as i8).abs();
                let dr = (from.rank().index() as i8 - to.rank().index() as i8).abs();
                assert_eq!(
                    KNIGHT_TARGETS[from.index()].contains(to),
                    matches!((df, dr), (1, 2) | (2, 1)),
                    "knight {from} -> {to}"
                );
                assert_eq!(
                    KING_TARGETS[from.index()].contains(to),
                    df.max(dr) == 1,
                    "king {from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn deltas_use_square_offset_order() {
        for from in Square::all() {
            for (deltas, table) in [(KNIGHT_DELTAS, &KNIGHT_TARGETS), (KING_DELTAS, &KING_TARGETS)] {
                let stepped: Bitboard = deltas
                    .iter()
                    .filter_map(|&(df, dr)| from.offset(df, dr))
                    .collect();
                assert_eq!(stepped, table[from.index()], "{from}");
            }
        }
    }
}
