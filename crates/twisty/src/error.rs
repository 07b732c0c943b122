//! Session registry error types.

use crate::session::SessionId;
use derive_more::{Display, Error, From};
use twisty_cube::{MoveError, StateError};

/// Error returned by [`crate::SessionRegistry`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// No session is registered under the id.
    #[display("Session not found: {}", _0)]
    #[from(ignore)]
    NotFound(#[error(not(source))] SessionId),

    /// A session is already registered under the id.
    #[display("Session already exists: {}", _0)]
    #[from(ignore)]
    AlreadyExists(#[error(not(source))] SessionId),

    /// The requested move could not be parsed.
    #[display("Move rejected: {}", _0)]
    Move(MoveError),

    /// The supplied cube state is impossible.
    #[display("State rejected: {}", _0)]
    State(StateError),
}
