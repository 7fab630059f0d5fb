//! Engine runtime integration.
//!
//! Bridges a synchronous host loop (the terminal game) with the async
//! engine task: the runtime owns a tokio `Runtime` and blocks on each reply.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

use blockfall_core::{GameSnapshot, GameState, RandomSource, StepOutcome};
use blockfall_types::GameAction;

use crate::actor::{spawn_engine, EngineHandle};
use crate::error::ActorResult;
use crate::event_log::EventLog;

/// Running engine instance for a synchronous caller.
///
/// Do not call from inside another tokio runtime; the blocking calls would
/// panic there.
pub struct EngineRuntime<R> {
    rt: Runtime,
    handle: EngineHandle,
    task: JoinHandle<GameState<R>>,
}

impl<R> EngineRuntime<R>
where
    R: RandomSource + Send + 'static,
{
    /// Start the engine task, logging events to `log_path` when given.
    pub fn start(state: GameState<R>, log_path: Option<&Path>) -> Result<Self> {
        let rt = Runtime::new().context("failed to create tokio runtime")?;

        let log = match log_path {
            Some(path) => rt
                .block_on(EventLog::open(path))
                .with_context(|| format!("failed to open event log {}", path.display()))?,
            None => EventLog::disabled(),
        };

        let (handle, task) = {
            let _guard = rt.enter();
            spawn_engine(state, log)
        };

        Ok(Self { rt, handle, task })
    }

    pub fn handle(&self) -> EngineHandle {
        self.handle.clone()
    }

    /// Apply an action and wait for the result.
    pub fn send(&self, action: GameAction) -> ActorResult<bool> {
        self.rt.block_on(self.handle.apply(action))
    }

    /// Feed one frame timestamp.
    pub fn frame(&self, now_ms: u64) -> ActorResult<StepOutcome> {
        self.rt.block_on(self.handle.advance(now_ms))
    }

    pub fn snapshot(&self) -> ActorResult<GameSnapshot> {
        self.rt.block_on(self.handle.snapshot())
    }

    /// Stop the engine task and flush the event log.
    ///
    /// Outstanding [`EngineHandle`] clones keep the task alive, so drop them
    /// first.
    pub fn shutdown(self) -> Result<GameState<R>> {
        let Self { rt, handle, task } = self;
        drop(handle);
        rt.block_on(task).context("engine task panicked")
    }
}
