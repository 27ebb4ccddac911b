//! The game engine: turn order, move submission, captures and the win rule.

use std::fmt;

use tracing::{debug, info, trace};

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::color::Color;
use crate::colored_piece::ColoredPiece;
use crate::error::MoveError;
use crate::movegen::{legal_destinations, reachable};
use crate::remaining::Remaining;
use crate::snapshot::Snapshot;
use crate::square::Square;

/// Overall result of the game. Once it leaves `InProgress` it never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    WhiteWon,
    BlackWon,
}

impl GameStatus {
    /// Status after `color` wins.
    pub const fn won_by(color: Color) -> GameStatus {
        match color {
            Color::White => GameStatus::WhiteWon,
            Color::Black => GameStatus::BlackWon,
        }
    }

    /// The winning side, if any.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::WhiteWon => Some(Color::White),
            GameStatus::BlackWon => Some(Color::Black),
        }
    }

    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameStatus::InProgress => "UNFINISHED",
            GameStatus::WhiteWon => "WHITE_WON",
            GameStatus::BlackWon => "BLACK_WON",
        })
    }
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub origin: Square,
    pub destination: Square,
    /// The piece that moved.
    pub piece: ColoredPiece,
    /// The opposing piece removed from `destination`, if any.
    pub captured: Option<ColoredPiece>,
    /// Status right after the move.
    pub status: GameStatus,
}

/// A single game: board, side to move, status, and one remaining-to-capture
/// table per color.
///
/// All state belongs to this value; moves are applied strictly one at a
/// time through [`Game::try_move`] / [`Game::submit_move`]. A rejected move
/// leaves every field untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    status: GameStatus,
    /// Indexed by the victim's [`Color::index()`].
    remaining: [Remaining; Color::COUNT],
}

impl Game {
    /// A new game from the standard starting position, White to move.
    pub fn new() -> Game {
        Game {
            board: Board::starting_position(),
            side_to_move: Color::White,
            status: GameStatus::InProgress,
            remaining: [Remaining::STANDARD; Color::COUNT],
        }
    }

    /// Assemble a game from parsed layout parts.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        remaining: [Remaining; Color::COUNT],
    ) -> Game {
        Game {
            board,
            side_to_move,
            status: GameStatus::InProgress,
            remaining,
        }
    }

    #[inline]
    pub fn game_status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Kind/color of every square, detached from the game.
    pub fn board_snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Pieces of `color` the opponent has not yet captured, by kind.
    #[inline]
    pub fn remaining(&self, color: Color) -> Remaining {
        self.remaining[color.index()]
    }

    /// Legal destinations of the piece on `origin`, regardless of whose turn it is.
    pub fn legal_destinations(&self, origin: Square) -> Bitboard {
        legal_destinations(&self.board, origin)
    }

    /// Apply a move if it is legal; return whether it was applied.
    pub fn submit_move(&mut self, origin: Square, destination: Square) -> bool {
        self.try_move(origin, destination).is_ok()
    }

    /// [`Game::submit_move`] for squares given as text, such as `"a2"`.
    pub fn submit_move_str(&mut self, origin: &str, destination: &str) -> bool {
        self.try_move_str(origin, destination).is_ok()
    }

    /// Parse both squares and then behave like [`Game::try_move`].
    ///
    /// A finished game is reported before any parse error.
    pub fn try_move_str(
        &mut self,
        origin: &str,
        destination: &str,
    ) -> Result<AppliedMove, MoveError> {
        self.ensure_in_progress()?;
        let parsed = origin
            .parse::<Square>()
            .and_then(|from| destination.parse::<Square>().map(|to| (from, to)));
        match parsed {
            Ok((from, to)) => self.try_move(from, to),
            Err(err) => {
                trace!(origin, destination, error = %err, "move rejected");
                Err(err.into())
            }
        }
    }

    /// Apply a move, or explain why it is illegal.
    ///
    /// Checks run in a fixed order and the first failure is returned with
    /// nothing changed. On success the capture (if any) is recorded, the
    /// piece is moved, the win rule is evaluated and the turn passes.
    pub fn try_move(
        &mut self,
        origin: Square,
        destination: Square,
    ) -> Result<AppliedMove, MoveError> {
        match self.check_move(origin, destination) {
            Ok(piece) => Ok(self.apply(piece, origin, destination)),
            Err(err) => {
                trace!(%origin, %destination, error = %err, "move rejected");
                Err(err)
            }
        }
    }

    fn ensure_in_progress(&self) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver {
                status: self.status,
            });
        }
        Ok(())
    }

    /// Run every legality check and return the piece that would move.
    fn check_move(&self, origin: Square, destination: Square) -> Result<ColoredPiece, MoveError> {
        self.ensure_in_progress()?;

        if origin == destination {
            return Err(MoveError::SameSquare { square: origin });
        }

        let piece = self
            .board
            .piece_at(origin)
            .ok_or(MoveError::EmptyOrigin { square: origin })?;
        if piece.color() != self.side_to_move {
            return Err(MoveError::WrongSide {
                square: origin,
                to_move: self.side_to_move,
            });
        }

        if self.board.color_on(destination) == Some(piece.color()) {
            return Err(MoveError::OwnPieceAtDestination {
                square: destination,
            });
        }

        if !reachable(&self.board, piece).contains(destination) {
            return Err(MoveError::IllegalDestination {
                kind: piece.kind(),
                origin,
                destination,
            });
        }

        Ok(piece.colored())
    }

    /// Carry out a move that already passed [`Game::check_move`].
    fn apply(&mut self, piece: ColoredPiece, origin: Square, destination: Square) -> AppliedMove {
        let captured = self
            .board
            .relocate(origin, destination)
            .map(|victim| victim.colored());

        if let Some(victim) = captured {
            let left = self.remaining[victim.color().index()].decrement(victim.kind());
            debug!(%origin, %destination, %piece, captured = %victim, left, "capture");
        } else {
            debug!(%origin, %destination, %piece, "move");
        }

        self.update_status();
        self.side_to_move = self.side_to_move.flip();

        AppliedMove {
            origin,
            destination,
            piece,
            captured,
            status: self.status,
        }
    }

    /// A zero in White's table means Black won, and vice versa.
    fn update_status(&mut self) {
        for victim in Color::ALL {
            if let Some(kind) = self.remaining[victim.index()].exhausted_kind() {
                self.status = GameStatus::won_by(victim.flip());
                info!(status = %self.status, loser = victim.name(), %kind, "game over");
                return;
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Game, GameStatus};
    use crate::color::Color;
    use crate::colored_piece::ColoredPiece;
    use crate::error::MoveError;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn new_game_state() {
        let game = Game::new();
        assert_eq!(game.game_status(), GameStatus::InProgress);
        assert_eq!(game.side_to_move(), Color::White);
        for color in Color::ALL {
            assert_eq!(game.remaining(color).exhausted_kind(), None);
            assert_eq!(game.remaining(color).get(PieceKind::Pawn), 8);
        }
    }

    #[test]
    fn accepted_move_flips_turn() {
        let mut game = Game::new();
        let applied = game.try_move(Square::E2, Square::E4).unwrap();
        assert_eq!(applied.piece, ColoredPiece::WHITE_PAWN);
        assert_eq!(applied.captured, None);
        assert_eq!(game.side_to_move(), Color::Black);
        assert!(game.board().piece_at(Square::E4).unwrap().has_moved());
    }

    #[test]
    fn rejection_reasons_follow_check_order() {
        let mut game = Game::new();
        assert_eq!(
            game.try_move(Square::A2, Square::A2),
            Err(MoveError::SameSquare { square: Square::A2 })
        );
        assert_eq!(
            game.try_move(Square::E4, Square::E5),
            Err(MoveError::EmptyOrigin { square: Square::E4 })
        );
        assert_eq!(
            game.try_move(Square::E7, Square::E5),
            Err(MoveError::WrongSide {
                square: Square::E7,
                to_move: Color::White
            })
        );
        assert_eq!(
            game.try_move(Square::A1, Square::A2),
            Err(MoveError::OwnPieceAtDestination { square: Square::A2 })
        );
        assert_eq!(
            game.try_move(Square::B2, Square::B5),
            Err(MoveError::IllegalDestination {
                kind: PieceKind::Pawn,
                origin: Square::B2,
                destination: Square::B5
            })
        );
        assert_eq!(game, Game::new());
    }

    #[test]
    fn string_squares() {
        let mut game = Game::new();
        assert!(game.submit_move_str("g1", "f3"));
        assert!(!game.submit_move_str("z9", "a6"));
        assert!(matches!(
            game.try_move_str("a7", "a9"),
            Err(MoveError::InvalidSquare(err)) if err.input == "a9"
        ));
        assert!(game.submit_move_str("a7", "a6"));
    }

    #[test]
    fn capture_decrements_victim_table() {
        let mut game: Game = "4k3/8/8/3p4/4P3/8/8/4K3 w".parse().unwrap();
        let applied = game.try_move(Square::E4, Square::D5).unwrap();
        assert_eq!(applied.captured, Some(ColoredPiece::BLACK_PAWN));
        assert_eq!(game.remaining(Color::Black).get(PieceKind::Pawn), 7);
        assert_eq!(game.remaining(Color::White).get(PieceKind::Pawn), 8);
        assert_eq!(game.game_status(), GameStatus::InProgress);
    }

    #[test]
    fn last_piece_of_a_kind_ends_the_game() {
        let mut game: Game = "3qk3/8/8/8/8/8/8/3QK3 w 822211/822211".parse().unwrap();
        let applied = game.try_move(Square::D1, Square::D8).unwrap();
        assert_eq!(applied.captured, Some(ColoredPiece::BLACK_QUEEN));
        assert_eq!(applied.status, GameStatus::WhiteWon);
        assert_eq!(game.game_status(), GameStatus::WhiteWon);
        assert_eq!(game.side_to_move(), Color::Black);

        let frozen = game.clone();
        assert_eq!(
            game.try_move(Square::E8, Square::D8),
            Err(MoveError::GameOver {
                status: GameStatus::WhiteWon
            })
        );
        assert!(!game.submit_move_str("e8", "zz"));
        assert_eq!(game, frozen);
    }

    #[test]
    fn status_helpers() {
        assert_eq!(GameStatus::won_by(Color::Black), GameStatus::BlackWon);
        assert_eq!(GameStatus::WhiteWon.winner(), Some(Color::White));
        assert_eq!(GameStatus::InProgress.winner(), None);
        assert!(!GameStatus::InProgress.is_over());
        assert_eq!(GameStatus::InProgress.to_string(), "UNFINISHED");
    }
}
