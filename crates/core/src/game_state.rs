//! Game state module - the engine orchestrator
//!
//! Ties together board, piece factory, transforms, scoring and the drop
//! clock. All mutation goes through the command methods on [`GameState`];
//! the host reads state back through getters or a [`GameSnapshot`].

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::clock::DropClock;
use crate::collision::collides;
use crate::config::EngineConfig;
use crate::error::CoreResult;
use crate::piece::{Piece, PieceFactory};
use crate::rng::RandomSource;
use crate::scoring::line_clear_score;
use crate::shape::ShapeCatalog;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::transform::{self, DownProbe};
use crate::types::GameAction;

/// Observable engine phase
///
/// Locking happens entirely inside one step and is never observed between
/// commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Falling,
    GameOver,
}

/// What happened when a piece locked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockEvent {
    pub rows_cleared: u32,
    pub score_delta: u32,
    /// Row index of each clear at the moment it happened (first four)
    pub cleared_rows: ArrayVec<usize, 4>,
}

/// Result of a downward step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The piece moved down one row
    Moved,
    /// The piece landed, locked, and a new piece spawned
    Locked(LockEvent),
    /// The piece locked and the next piece could not spawn
    GameOver(LockEvent),
    /// No step was taken (game over, or the drop clock was not due)
    Ignored,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R> {
    config: EngineConfig,
    board: Board,
    factory: PieceFactory<R>,
    active: Piece,
    score: u32,
    lines: u32,
    /// Pieces spawned since the last reset, including the current one
    pieces_spawned: u32,
    /// Monotonic episode id (increments on reset)
    episode_id: u32,
    game_over: bool,
    clock: DropClock,
    /// Last lock event (consumed by observers)
    last_event: Option<LockEvent>,
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game and spawn the first piece
    ///
    /// Fails if the board dimensions or the shape catalog are invalid.
    pub fn new(config: EngineConfig, rng: R) -> CoreResult<Self> {
        let catalog = ShapeCatalog::standard()?;
        let board = Board::new(config.width, config.height)?;
        let mut factory = PieceFactory::new(catalog, rng);
        let active = factory.spawn(board.width());

        let mut state = Self {
            config,
            board,
            factory,
            active,
            score: 0,
            lines: 0,
            pieces_spawned: 1,
            episode_id: 0,
            game_over: false,
            clock: DropClock::new(config.drop_interval_ms),
            last_event: None,
        };
        state.game_over = state.spawn_blocked();
        Ok(state)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else {
            Phase::Falling
        }
    }

    pub fn clock(&self) -> &DropClock {
        &self.clock
    }

    pub fn last_event(&self) -> Option<&LockEvent> {
        self.last_event.as_ref()
    }

    /// Take and clear the last lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Move the piece one column left; false if rejected
    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    /// Move the piece one column right; false if rejected
    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    fn shift(&mut self, dx: i32) -> bool {
        if self.game_over {
            return false;
        }
        match transform::translate(&self.board, &self.active, dx, 0) {
            Some(position) => {
                self.active.position = position;
                true
            }
            None => false,
        }
    }

    /// Rotate the piece clockwise in place; false if rejected
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        match transform::rotate(&self.board, &self.active) {
            Some(shape) => {
                self.active.shape = shape;
                true
            }
            None => false,
        }
    }

    /// Timer-driven downward step
    pub fn tick(&mut self) -> StepOutcome {
        self.step_down()
    }

    /// Player-driven downward step; same landing rules as [`GameState::tick`]
    pub fn soft_drop_step(&mut self) -> StepOutcome {
        self.step_down()
    }

    fn step_down(&mut self) -> StepOutcome {
        if self.game_over {
            return StepOutcome::Ignored;
        }
        match transform::probe_down(&self.board, &self.active) {
            DownProbe::Moved(position) => {
                self.active.position = position;
                StepOutcome::Moved
            }
            DownProbe::Landed => self.lock_active(),
        }
    }

    /// Lock the active piece, clear rows, spawn the next piece
    fn lock_active(&mut self) -> StepOutcome {
        self.board.lock_cells(&self.active.shape, self.active.position);

        let clears = self.board.clear_full_rows();
        let score_delta = line_clear_score(clears.count, self.config.points_per_row);
        self.score = self.score.saturating_add(score_delta);
        self.lines = self.lines.saturating_add(clears.count);

        let event = LockEvent {
            rows_cleared: clears.count,
            score_delta,
            cleared_rows: clears.rows,
        };
        self.last_event = Some(event.clone());

        self.spawn_piece();
        if self.game_over {
            StepOutcome::GameOver(event)
        } else {
            StepOutcome::Locked(event)
        }
    }

    fn spawn_piece(&mut self) {
        self.active = self.factory.spawn(self.board.width());
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        self.game_over = self.spawn_blocked();
    }

    /// The spawn row holds a locked cell, or the new piece already overlaps
    /// the stack
    fn spawn_blocked(&self) -> bool {
        self.board.is_game_over()
            || collides(&self.board, &self.active.shape, self.active.position)
    }

    /// Start over: empty board, zero score, fresh piece
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.pieces_spawned = 0;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        let now = self.clock.last_timestamp_ms();
        self.clock.restart(now);
        self.spawn_piece();
    }

    /// Feed one animation-frame timestamp (milliseconds)
    ///
    /// Runs [`GameState::tick`] when the drop clock is due. The clock keeps
    /// measuring time during game over so a later reset starts cleanly.
    pub fn advance_to(&mut self, now_ms: u64) -> StepOutcome {
        let due = self.clock.advance(now_ms);
        if !due || self.game_over {
            return StepOutcome::Ignored;
        }
        self.tick()
    }

    /// Apply a host command; returns whether it had an effect
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => !matches!(self.soft_drop_step(), StepOutcome::Ignored),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.active = Some(ActiveSnapshot::from(&self.active));
        out.score = self.score;
        out.lines = self.lines;
        out.pieces_spawned = self.pieces_spawned;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn active_mut(&mut self) -> &mut Piece {
        &mut self.active
    }
}
