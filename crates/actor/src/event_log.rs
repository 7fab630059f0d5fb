//! Append-only JSON-lines event log.
//!
//! One JSON object per line, written by a background tokio task so the
//! engine never waits on disk. A log that fails mid-run stops writing and
//! the game carries on.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use blockfall_core::{GameState, LockEvent, Piece, RandomSource};
use blockfall_types::{PieceColor, ShapeKind};

/// Environment variable naming the log file.
pub const LOG_PATH_ENV: &str = "BLOCKFALL_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    Spawn {
        episode: u32,
        piece: u32,
        kind: ShapeKind,
        color: PieceColor,
        x: i32,
    },
    Lock {
        episode: u32,
        rows_cleared: u32,
        score_delta: u32,
        cleared_rows: Vec<usize>,
        score: u32,
        lines: u32,
    },
    GameOver {
        episode: u32,
        score: u32,
        lines: u32,
        pieces: u32,
    },
    Reset {
        episode: u32,
    },
}

impl EngineEvent {
    pub fn spawn<R: RandomSource>(state: &GameState<R>) -> Self {
        let Piece {
            kind,
            color,
            position,
            ..
        } = state.active();
        Self::Spawn {
            episode: state.episode_id(),
            piece: state.pieces_spawned(),
            kind: *kind,
            color: *color,
            x: position.x,
        }
    }

    pub fn lock<R: RandomSource>(state: &GameState<R>, event: &LockEvent) -> Self {
        Self::Lock {
            episode: state.episode_id(),
            rows_cleared: event.rows_cleared,
            score_delta: event.score_delta,
            cleared_rows: event.cleared_rows.to_vec(),
            score: state.score(),
            lines: state.lines(),
        }
    }

    pub fn game_over<R: RandomSource>(state: &GameState<R>) -> Self {
        Self::GameOver {
            episode: state.episode_id(),
            score: state.score(),
            lines: state.lines(),
            pieces: state.pieces_spawned(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EngineEvent::Spawn { .. } => "spawn",
            EngineEvent::Lock { .. } => "lock",
            EngineEvent::GameOver { .. } => "game_over",
            EngineEvent::Reset { .. } => "reset",
        }
    }
}

/// Handle to the log writer; a disabled log drops every event.
#[derive(Debug, Default)]
pub struct EventLog {
    tx: Option<mpsc::UnboundedSender<EngineEvent>>,
    writer: Option<JoinHandle<()>>,
}

impl EventLog {
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Log path from `BLOCKFALL_LOG_PATH`; blank counts as unset.
    pub fn path_from_env() -> Option<PathBuf> {
        std::env::var(LOG_PATH_ENV)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }

    /// Open `path` for appending and start the writer task.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())
            .await?;

        let (tx, mut rx) = mpsc::unbounded_channel::<EngineEvent>();
        let writer = tokio::spawn(async move {
            let mut buf: Vec<u8> = Vec::with_capacity(256);
            while let Some(event) = rx.recv().await {
                buf.clear();
                if serde_json::to_writer(&mut buf, &event).is_err() {
                    continue;
                }
                buf.push(b'\n');
                if file.write_all(&buf).await.is_err() {
                    break;
                }
            }
            let _ = file.flush().await;
        });

        Ok(Self {
            tx: Some(tx),
            writer: Some(writer),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    pub fn record(&self, event: EngineEvent) {
        if let Some(tx) = self.tx.as_ref() {
            let _ = tx.send(event);
        }
    }

    /// Stop accepting events and wait until everything queued is on disk.
    pub async fn close(mut self) {
        self.tx = None;
        if let Some(writer) = self.writer.take() {
            let _ = writer.await;
        }
    }
}
