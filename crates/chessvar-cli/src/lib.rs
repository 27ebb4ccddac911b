//! Text session protocol for chessvar.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, SessionOption};
pub use error::SessionError;
pub use session::{Session, SessionConfig};
