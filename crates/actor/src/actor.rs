//! Engine actor: one tokio task owns the [`GameState`].
//!
//! Every mutation and read goes through the task's command channel, so any
//! number of [`EngineHandle`] clones can drive the same game from different
//! tasks or threads without locks.

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use blockfall_core::{GameSnapshot, GameState, RandomSource, StepOutcome};
use blockfall_types::GameAction;

use crate::error::{ActorError, ActorResult};
use crate::event_log::{EngineEvent, EventLog};

/// Depth of the command channel.
pub const COMMAND_QUEUE: usize = 64;

#[derive(Debug)]
pub enum Command {
    Apply {
        action: GameAction,
        reply: oneshot::Sender<bool>,
    },
    Advance {
        now_ms: u64,
        reply: oneshot::Sender<StepOutcome>,
    },
    Snapshot {
        reply: oneshot::Sender<GameSnapshot>,
    },
}

/// Cloneable sender side of the engine actor.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    tx: mpsc::Sender<Command>,
}

impl EngineHandle {
    async fn request<T>(&self, make: impl FnOnce(oneshot::Sender<T>) -> Command) -> ActorResult<T> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(make(reply))
            .await
            .map_err(|_| ActorError::Closed)?;
        rx.await.map_err(|_| ActorError::Closed)
    }

    /// Apply a player action; resolves to whether it took effect.
    pub async fn apply(&self, action: GameAction) -> ActorResult<bool> {
        self.request(|reply| Command::Apply { action, reply }).await
    }

    /// Feed a frame timestamp to the drop clock.
    pub async fn advance(&self, now_ms: u64) -> ActorResult<StepOutcome> {
        self.request(|reply| Command::Advance { now_ms, reply }).await
    }

    pub async fn snapshot(&self) -> ActorResult<GameSnapshot> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Move `state` into a new task and return a handle to it.
///
/// The task ends once every handle is dropped; the join handle then yields
/// the final state after the event log has been flushed.
pub fn spawn_engine<R>(
    state: GameState<R>,
    log: EventLog,
) -> (EngineHandle, JoinHandle<GameState<R>>)
where
    R: RandomSource + Send + 'static,
{
    let (tx, rx) = mpsc::channel(COMMAND_QUEUE);
    let task = tokio::spawn(run(state, log, rx));
    (EngineHandle { tx }, task)
}

async fn run<R: RandomSource>(
    mut state: GameState<R>,
    log: EventLog,
    mut rx: mpsc::Receiver<Command>,
) -> GameState<R> {
    log.record(EngineEvent::spawn(&state));
    if state.game_over() {
        log.record(EngineEvent::game_over(&state));
    }

    while let Some(cmd) = rx.recv().await {
        match cmd {
            Command::Apply { action, reply } => {
                let applied = apply(&mut state, &log, action);
                let _ = reply.send(applied);
            }
            Command::Advance { now_ms, reply } => {
                let outcome = state.advance_to(now_ms);
                record_outcome(&state, &log, &outcome);
                let _ = reply.send(outcome);
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(state.snapshot());
            }
        }
    }

    log.close().await;
    state
}

fn apply<R: RandomSource>(state: &mut GameState<R>, log: &EventLog, action: GameAction) -> bool {
    match action {
        GameAction::SoftDrop => {
            let outcome = state.soft_drop_step();
            record_outcome(state, log, &outcome);
            outcome != StepOutcome::Ignored
        }
        GameAction::Reset => {
            state.reset();
            log.record(EngineEvent::Reset {
                episode: state.episode_id(),
            });
            log.record(EngineEvent::spawn(state));
            if state.game_over() {
                log.record(EngineEvent::game_over(state));
            }
            true
        }
        other => state.apply_action(other),
    }
}

fn record_outcome<R: RandomSource>(state: &GameState<R>, log: &EventLog, outcome: &StepOutcome) {
    match outcome {
        StepOutcome::Locked(event) => {
            log.record(EngineEvent::lock(state, event));
            log.record(EngineEvent::spawn(state));
        }
        StepOutcome::GameOver(event) => {
            log.record(EngineEvent::lock(state, event));
            log.record(EngineEvent::spawn(state));
            log.record(EngineEvent::game_over(state));
        }
        StepOutcome::Moved | StepOutcome::Ignored => {}
    }
}
