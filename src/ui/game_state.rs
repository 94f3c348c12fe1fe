//! Game state management for the Gomoku GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::warn;

use crate::{AIEngine, EngineConfig, Game, GameMode, MoveResult, Outcome, Pos};

/// Pause between consecutive engine moves so engine-vs-engine games
/// can be followed on screen
pub const AI_MOVE_INTERVAL: Duration = Duration::from_millis(300);

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub game: Game,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
    /// When the last engine move was applied
    last_ai_move: Option<Instant>,
}

impl GameState {
    pub fn new(mode: GameMode, config: EngineConfig) -> Self {
        Self {
            game: Game::new(mode, config),
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            last_ai_move: None,
        }
    }

    /// Restart with the same mode; a pending engine result is dropped.
    pub fn reset(&mut self) {
        self.game.reset();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
        self.last_ai_move = None;
    }

    /// Check if it's a human's turn
    pub fn is_human_turn(&self) -> bool {
        !self.game.is_over() && self.game.mode().ai_for(self.game.active()).is_none()
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.game.ai_to_move().is_some()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt a human move at the given cell
    pub fn try_place_mark(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        self.game
            .play_human(pos.x, pos.y)
            .map_err(|err| err.to_string())?;
        self.message = None;
        Ok(())
    }

    /// Start AI thinking on a background thread.
    ///
    /// The thread searches its own copy of the board; nothing it does is
    /// visible here until the result is applied.
    pub fn start_ai_thinking(&mut self) {
        let Some(mode) = self.game.ai_to_move() else {
            return;
        };
        if self.is_ai_thinking() {
            return;
        }
        if self.last_ai_move.is_some_and(|t| t.elapsed() < AI_MOVE_INTERVAL) {
            return;
        }

        let board = self.game.board().clone();
        let me = self.game.player(self.game.active());
        let opponent = self.game.player(self.game.active().opponent());
        let config = *self.game.config();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config);
            let result = engine.choose_move(&board, me, opponent, mode);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply a finished AI result, if any.
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        self.last_ai_move = Some(Instant::now());
        match self.game.apply_ai_result(&result) {
            Ok(_) => self.message = None,
            Err(err) => {
                warn!("engine move rejected: {}", err);
                self.message = Some(err.to_string());
            }
        }
        self.last_ai_result = Some(result);
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// End-of-game message
    pub fn outcome_message(&self) -> Option<String> {
        match self.game.outcome() {
            Outcome::Continue => None,
            Outcome::Win(mark) => Some(format!("{} won!", mark)),
            Outcome::Draw => Some("Game draw!".to_string()),
        }
    }
}
