//! Engine actor for the falling-block game.
//!
//! The engine itself is single-threaded and synchronous. This crate gives
//! hosts one exclusive access path to it: a tokio task that owns the
//! [`GameState`](blockfall_core::GameState) and serves commands from a
//! bounded channel, plus a JSON-lines [`EventLog`] of what happened.
//!
//! - [`spawn_engine`] / [`EngineHandle`]: async API
//! - [`EngineRuntime`]: blocking API for a sync game loop

pub mod actor;
pub mod error;
pub mod event_log;
pub mod runtime;

pub use actor::{spawn_engine, Command, EngineHandle, COMMAND_QUEUE};
pub use error::{ActorError, ActorResult};
pub use event_log::{EngineEvent, EventLog, LOG_PATH_ENV};
pub use runtime::EngineRuntime;
