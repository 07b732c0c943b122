//! Twisty - cube sessions over a shared registry
//!
//! Wraps [`twisty_cube::CubeEngine`] in named sessions with lifecycle
//! metadata, plus the configuration and interactive loop used by the
//! `twisty` binary.
//!
//! # Architecture
//!
//! - **Session**: [`SessionRegistry`] keyed by caller-chosen ids
//! - **Config**: [`TwistyConfig`] loaded from TOML
//! - **Play**: [`run_play`] line-oriented loop over one session
//!
//! # Example
//!
//! ```
//! use twisty::{SessionRegistry, SessionStatus};
//! use twisty_cube::CubeState;
//!
//! let registry = SessionRegistry::new();
//! registry.create("demo".to_string(), CubeState::new(), None)?;
//! registry.apply_token("demo", "R")?;
//! registry.apply_token("demo", "R'")?;
//!
//! let session = registry.get("demo").expect("registered");
//! assert_eq!(*session.status(), SessionStatus::Completed);
//! # Ok::<(), twisty::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod play;
mod session;

pub use config::{ConfigError, TwistyConfig};
pub use error::SessionError;
pub use play::run_play;
pub use session::{
    AppliedMove, GameSession, MoveOutcome, SessionId, SessionRegistry, SessionStatus,
};
