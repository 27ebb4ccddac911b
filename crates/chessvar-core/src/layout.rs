//! Layout notation: `<placement> <side> [<white-remaining>/<black-remaining>]`.
//!
//! Placement is FEN piece placement, rank 8 first. Side is `w` or `b`. The
//! remaining field holds six digits per color (pawn, knight, bishop, rook,
//! queen, king) and defaults to the standard army when omitted.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::colored_piece::ColoredPiece;
use crate::error::LayoutError;
use crate::file::File;
use crate::game::Game;
use crate::piece::Piece;
use crate::rank::Rank;
use crate::remaining::Remaining;
use crate::square::Square;

/// Layout of the standard starting position.
pub const STARTING_LAYOUT: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w 822211/822211";

/// Parse the placement field into a board.
///
/// A pawn counts as unmoved exactly when it stands on its start rank.
fn parse_placement(placement: &str) -> Result<Board, LayoutError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != Rank::COUNT {
        return Err(LayoutError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    let rows = ranks.iter().zip(Rank::ALL.into_iter().rev());
    for (rank_index, (rank_str, rank)) in rows.enumerate() {
        let mut file_index: usize = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(LayoutError::InvalidPieceChar { character: c });
                }
                file_index += digit as usize;
                continue;
            }

            let colored = ColoredPiece::from_letter(c)
                .ok_or(LayoutError::InvalidPieceChar { character: c })?;
            let file = u8::try_from(file_index)
                .ok()
                .and_then(File::from_index)
                .ok_or(LayoutError::BadRankLength {
                    rank_index,
                    length: file_index + 1,
                })?;

            let square = Square::new(rank, file);
            let mut piece = Piece::new(colored.kind(), colored.color(), square);
            if rank != colored.color().pawn_start_rank() {
                piece.mark_moved();
            }
            board.put(piece);
            file_index += 1;
        }

        if file_index != File::COUNT {
            return Err(LayoutError::BadRankLength {
                rank_index,
                length: file_index,
            });
        }
    }

    board.validate()?;
    Ok(board)
}

/// Parse `<white>/<black>` remaining tables. No entry may be zero.
fn parse_remaining(field: &str) -> Result<[Remaining; Color::COUNT], LayoutError> {
    let (white, black) = field
        .split_once('/')
        .ok_or_else(|| LayoutError::InvalidRemaining {
            found: field.to_string(),
        })?;
    let tables = [Remaining::from_layout(white)?, Remaining::from_layout(black)?];

    for color in Color::ALL {
        if let Some(kind) = tables[color.index()].exhausted_kind() {
            return Err(LayoutError::ExhaustedKind { color, kind });
        }
    }
    Ok(tables)
}

impl FromStr for Game {
    type Err = LayoutError;

    fn from_str(layout: &str) -> Result<Game, LayoutError> {
        let fields: Vec<&str> = layout.split_whitespace().collect();
        if !(2..=3).contains(&fields.len()) {
            return Err(LayoutError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let board = parse_placement(fields[0])?;
        let side_to_move = Color::from_layout(fields[1]).ok_or_else(|| LayoutError::InvalidColor {
            found: fields[1].to_string(),
        })?;
        let remaining = match fields.get(2) {
            Some(field) => parse_remaining(field)?,
            None => [Remaining::STANDARD; Color::COUNT],
        };

        Ok(Game::from_parts(board, side_to_move, remaining))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}/{}",
            Placement(self.board()),
            self.side_to_move(),
            self.remaining(Color::White),
            self.remaining(Color::Black),
        )
    }
}

/// Displays only the placement field of a board.
pub(crate) struct Placement<'a>(pub(crate) &'a Board);

impl fmt::Display for Placement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rank) in Rank::ALL.into_iter().rev().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            let mut empty = 0u8;
            for file in File::ALL {
                match self.0.colored_piece_on(Square::new(rank, file)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.letter())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_LAYOUT;
    use crate::color::Color;
    use crate::error::{BoardError, LayoutError};
    use crate::game::Game;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn roundtrip(layout: &str) {
        let game: Game = layout.parse().unwrap();
        let output = game.to_string();
        assert_eq!(output, layout, "layout roundtrip failed");
        let again: Game = output.parse().unwrap();
        assert_eq!(game, again);
    }

    #[test]
    fn roundtrip_starting() {
        roundtrip(STARTING_LAYOUT);
    }

    #[test]
    fn roundtrip_midgame() {
        roundtrip("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w 822211/822211");
        roundtrip("4k3/8/8/3p4/4P3/8/8/4K3 b 712111/811111");
    }

    #[test]
    fn starting_layout_matches_new_game() {
        let parsed: Game = STARTING_LAYOUT.parse().unwrap();
        assert_eq!(parsed, Game::new());
    }

    #[test]
    fn remaining_defaults_to_standard() {
        let game: Game = "4k3/8/8/8/8/8/8/4K3 b".parse().unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.to_string(), "4k3/8/8/8/8/8/8/4K3 b 822211/822211");
    }

    #[test]
    fn pawn_moved_flag_follows_start_rank() {
        let game: Game = "4k3/p7/1p6/8/8/6P1/7P/4K3 w".parse().unwrap();
        let flag = |sq| game.board().piece_at(sq).unwrap().has_moved();
        assert!(!flag(Square::H2));
        assert!(flag(Square::G3));
        assert!(!flag(Square::A7));
        assert!(flag(Square::B6));
        // Kings are never flagged.
        assert!(!flag(Square::E1));
    }

    #[test]
    fn error_wrong_field_count() {
        assert_eq!(
            "e4 e5 e6 e7".parse::<Game>(),
            Err(LayoutError::WrongFieldCount { found: 4 })
        );
        assert_eq!("".parse::<Game>(), Err(LayoutError::WrongFieldCount { found: 0 }));
    }

    #[test]
    fn error_placement() {
        assert_eq!(
            "4k3/8/8/8/8/8/4K3 w".parse::<Game>(),
            Err(LayoutError::WrongRankCount { found: 7 })
        );
        assert_eq!(
            "4k3/8/8/8/8/8/8/4KX2 w".parse::<Game>(),
            Err(LayoutError::InvalidPieceChar { character: 'X' })
        );
        assert_eq!(
            "4k3/7/8/8/8/8/8/4K3 w".parse::<Game>(),
            Err(LayoutError::BadRankLength {
                rank_index: 1,
                length: 7
            })
        );
        assert_eq!(
            "4k3/8/8/8/8/8/8/4K3pp w".parse::<Game>(),
            Err(LayoutError::BadRankLength {
                rank_index: 7,
                length: 9
            })
        );
    }

    #[test]
    fn overlong_rank_places_nothing() {
        let rank = "8".repeat(32) + "K7";
        let layout = format!("4k3/8/8/8/8/8/8/{rank} w");
        assert_eq!(
            layout.parse::<Game>(),
            Err(LayoutError::BadRankLength {
                rank_index: 7,
                length: 257
            })
        );
    }

    #[test]
    fn error_king_count() {
        assert_eq!(
            "8/8/8/8/8/8/8/4K3 w".parse::<Game>(),
            Err(LayoutError::InvalidBoard {
                source: BoardError::InvalidKingCount {
                    color: Color::Black,
                    count: 0
                }
            })
        );
        assert!("4k3/8/8/8/8/8/8/3KK3 w".parse::<Game>().is_err());
    }

    #[test]
    fn error_side_and_remaining() {
        assert_eq!(
            "4k3/8/8/8/8/8/8/4K3 x".parse::<Game>(),
            Err(LayoutError::InvalidColor {
                found: "x".to_string()
            })
        );
        assert!("4k3/8/8/8/8/8/8/4K3 w 822211".parse::<Game>().is_err());
        assert!("4k3/8/8/8/8/8/8/4K3 w 922211/822211".parse::<Game>().is_err());
        assert!("4k3/8/8/8/8/8/8/4K3 w 82221/822211".parse::<Game>().is_err());
        assert_eq!(
            "4k3/8/8/8/8/8/8/4K3 w 822211/822201".parse::<Game>(),
            Err(LayoutError::ExhaustedKind {
                color: Color::Black,
                kind: PieceKind::Queen
            })
        );
    }
}
