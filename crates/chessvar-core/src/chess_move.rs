//! A move request: origin and destination squares, written `a2a3`.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseSquareError;
use crate::square::Square;

/// An origin/destination pair as typed by a player.
///
/// Carries no legality information; [`Game::try_move`](crate::Game::try_move)
/// decides whether it can be played.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    origin: Square,
    destination: Square,
}

impl Move {
    #[inline]
    pub const fn new(origin: Square, destination: Square) -> Move {
        Move {
            origin,
            destination,
        }
    }

    #[inline]
    pub const fn origin(self) -> Square {
        self.origin
    }

    #[inline]
    pub const fn destination(self) -> Square {
        self.destination
    }
}

impl FromStr for Move {
    type Err = ParseSquareError;

    /// Parse four characters such as `e2e4`.
    fn from_str(s: &str) -> Result<Move, ParseSquareError> {
        let invalid = || ParseSquareError {
            input: s.to_string(),
        };
        if !s.is_ascii() || s.len() != 4 {
            return Err(invalid());
        }
        let (from, to) = s.split_at(2);
        Ok(Move::new(from.parse()?, to.parse()?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin, self.destination)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
