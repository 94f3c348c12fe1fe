//! Game session: board, players, turn order and outcome
//!
//! The session is the dispatch layer in front of the engine. It refuses
//! moves once the game is over or when the wrong side tries to move, so
//! the engine only ever sees a live, in-turn position.

use log::info;

use crate::board::{Board, Mark, Player, Pos};
use crate::config::EngineConfig;
use crate::engine::{AIEngine, MoveResult, SearchMode};
use crate::error::{GameError, Result};
use crate::rules::{self, Outcome};

/// Who controls each side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans on one board
    PvP,
    /// Human against the engine
    PvE { human: Mark, ai: SearchMode },
    /// Engine against engine
    EvE { player1: SearchMode, player2: SearchMode },
}

impl GameMode {
    /// Selector driving `mark`, or `None` for a human side
    pub fn ai_for(self, mark: Mark) -> Option<SearchMode> {
        match self {
            GameMode::PvP => None,
            GameMode::PvE { human, ai } => (mark != human).then_some(ai),
            GameMode::EvE { player1, player2 } => Some(match mark {
                Mark::Player1 => player1,
                Mark::Player2 => player2,
            }),
        }
    }

    pub fn label(self) -> String {
        match self {
            GameMode::PvP => "Player vs Player".to_string(),
            GameMode::PvE { ai, .. } => format!("Player vs AI ({})", ai.label()),
            GameMode::EvE { player1, player2 } => {
                format!("AI ({}) vs AI ({})", player1.label(), player2.label())
            }
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human: Mark::Player1,
            ai: SearchMode::ForwardPruning,
        }
    }
}

/// One game from empty board to win or draw
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    active: Mark,
    outcome: Outcome,
    mode: GameMode,
    config: EngineConfig,
    history: Vec<(Pos, Mark)>,
}

impl Game {
    pub fn new(mode: GameMode, config: EngineConfig) -> Self {
        Self {
            board: Board::with_side(config.side),
            players: [Player::new(Mark::Player1), Player::new(Mark::Player2)],
            active: Mark::Player1,
            outcome: Outcome::Continue,
            mode,
            config,
            history: Vec::new(),
        }
    }

    /// Start over with the same mode and configuration.
    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.config);
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Side to move
    #[inline]
    pub fn active(&self) -> Mark {
        self.active
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Accepted moves in order
    #[inline]
    pub fn history(&self) -> &[(Pos, Mark)] {
        &self.history
    }

    pub fn player(&self, mark: Mark) -> Player {
        self.players[Self::slot(mark)]
    }

    #[inline]
    fn slot(mark: Mark) -> usize {
        match mark {
            Mark::Player1 => 0,
            Mark::Player2 => 1,
        }
    }

    /// Most recent move of either side
    pub fn last_move(&self) -> Option<(Pos, Mark)> {
        self.history.last().copied()
    }

    /// Legality-checked placement for `mark`. On success the player's
    /// last move is updated; the turn is not passed.
    pub fn try_move(&mut self, x: i32, y: i32, mark: Mark) -> bool {
        if !self.board.place(x, y, mark) {
            return false;
        }
        let pos = Pos::new(x, y);
        let slot = Self::slot(mark);
        self.players[slot] = self.players[slot].moved_to(pos);
        self.history.push((pos, mark));
        true
    }

    /// Terminal check anchored on `mark`'s last move.
    pub fn check_end(&self, mark: Mark) -> Outcome {
        rules::check_end(&self.board, mark, self.player(mark).last_move)
    }

    /// Ask the engine for the active player's move without playing it.
    pub fn choose_move(&self, engine: &mut AIEngine, mode: SearchMode) -> MoveResult {
        let me = self.player(self.active);
        let opponent = self.player(self.active.opponent());
        engine.choose_move(&self.board, me, opponent, mode)
    }

    /// Play `(x, y)` for the active player and pass the turn.
    pub fn play(&mut self, x: i32, y: i32) -> Result<Outcome> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.board.check_placement(x, y)?;

        let mark = self.active;
        if !self.try_move(x, y, mark) {
            // check_placement already vetted the cell
            return Err(GameError::Occupied { x, y });
        }
        info!("{} plays ({}, {})", mark, x, y);

        self.outcome = self.check_end(mark);
        match self.outcome {
            Outcome::Continue => self.active = mark.opponent(),
            Outcome::Win(winner) => info!("{} won after {} moves", winner, self.history.len()),
            Outcome::Draw => info!("Game draw after {} moves", self.history.len()),
        }
        Ok(self.outcome)
    }

    /// Play a human move; refused when the active side is engine-driven.
    pub fn play_human(&mut self, x: i32, y: i32) -> Result<Outcome> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.mode.ai_for(self.active).is_some() {
            return Err(GameError::NotYourTurn(self.active));
        }
        self.play(x, y)
    }

    /// Selector for the side to move, if it is engine-driven and the
    /// game is still live.
    pub fn ai_to_move(&self) -> Option<SearchMode> {
        if self.is_over() {
            return None;
        }
        self.mode.ai_for(self.active)
    }

    /// Play an engine result for the active player.
    ///
    /// Without a best move the first empty cell is played so that the
    /// game can still run to a draw.
    pub fn apply_ai_result(&mut self, result: &MoveResult) -> Result<Outcome> {
        let pos = match result.best_move {
            Some(pos) => pos,
            None => self.board.first_empty().ok_or(GameError::NoMoveAvailable)?,
        };
        self.play(pos.x, pos.y)
    }

    /// Let the engine move for the active side.
    pub fn play_ai(&mut self, engine: &mut AIEngine) -> Result<Outcome> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let mode = self.ai_to_move().unwrap_or(SearchMode::Greedy);
        let result = self.choose_move(engine, mode);
        self.apply_ai_result(&result)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameMode::default(), EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchType;

    fn pvp() -> Game {
        Game::new(GameMode::PvP, EngineConfig::default())
    }

    fn eve_config() -> EngineConfig {
        EngineConfig::new(1, 40).unwrap().with_side(10).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = pvp();
        assert_eq!(game.active(), Mark::Player1);
        assert_eq!(game.outcome(), Outcome::Continue);
        assert!(game.board().is_board_empty());
        assert!(game.history().is_empty());
        assert_eq!(game.player(Mark::Player2).last_move, None);
    }

    #[test]
    fn test_play_alternates_turns() {
        let mut game = pvp();
        assert_eq!(game.play(10, 10), Ok(Outcome::Continue));
        assert_eq!(game.active(), Mark::Player2);
        assert_eq!(game.play(11, 10), Ok(Outcome::Continue));
        assert_eq!(game.active(), Mark::Player1);
        assert_eq!(
            game.history(),
            &[(Pos::new(10, 10), Mark::Player1), (Pos::new(11, 10), Mark::Player2)]
        );
        assert_eq!(game.player(Mark::Player2).last_move, Some(Pos::new(11, 10)));
    }

    #[test]
    fn test_illegal_play_keeps_turn() {
        let mut game = pvp();
        game.play(5, 5).unwrap();
        assert_eq!(game.play(5, 5), Err(GameError::Occupied { x: 5, y: 5 }));
        assert!(matches!(game.play(-1, 0), Err(GameError::NegativeCoordinate { .. })));
        assert!(matches!(game.play(21, 0), Err(GameError::OutOfBounds { .. })));
        assert_eq!(game.active(), Mark::Player2);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_try_move_does_not_pass_turn() {
        let mut game = pvp();
        assert!(game.try_move(3, 3, Mark::Player2));
        assert!(!game.try_move(3, 3, Mark::Player1));
        assert_eq!(game.active(), Mark::Player1);
        assert_eq!(game.player(Mark::Player2).last_move, Some(Pos::new(3, 3)));
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = pvp();
        for x in 0..4 {
            game.play(x, 0).unwrap();
            game.play(x, 1).unwrap();
        }
        assert_eq!(game.play(4, 0), Ok(Outcome::Win(Mark::Player1)));
        assert!(game.is_over());
        // The winner keeps the turn; nobody moves again
        assert_eq!(game.active(), Mark::Player1);
        assert_eq!(game.play(4, 1), Err(GameError::GameOver));
    }

    #[test]
    fn test_check_end_only_mover() {
        let mut game = pvp();
        for x in 0..5 {
            game.try_move(x, 7, Mark::Player2);
        }
        assert_eq!(game.check_end(Mark::Player2), Outcome::Win(Mark::Player2));
        assert_eq!(game.check_end(Mark::Player1), Outcome::Continue);
    }

    #[test]
    fn test_draw_on_full_board() {
        let config = EngineConfig::default().with_side(4).unwrap();
        let mut game = Game::new(GameMode::PvP, config);
        // Column pairs alternate per row: no five on any axis
        let mut cells: Vec<(i32, i32, Mark)> = Vec::new();
        for y in 0..=4 {
            for x in 0..=4 {
                let mark = if (x / 2 + y) % 2 == 0 { Mark::Player1 } else { Mark::Player2 };
                cells.push((x, y, mark));
            }
        }
        let (last, rest) = cells.split_last().unwrap();
        for &(x, y, mark) in rest {
            assert!(game.try_move(x, y, mark));
        }
        game.active = last.2;
        assert_eq!(game.play(last.0, last.1), Ok(Outcome::Draw));
        assert!(game.is_over());
    }

    #[test]
    fn test_human_rejected_on_ai_turn() {
        let mode = GameMode::PvE {
            human: Mark::Player2,
            ai: SearchMode::Greedy,
        };
        let mut game = Game::new(mode, EngineConfig::default());
        assert_eq!(game.ai_to_move(), Some(SearchMode::Greedy));
        assert_eq!(game.play_human(10, 10), Err(GameError::NotYourTurn(Mark::Player1)));

        let mut engine = AIEngine::new();
        game.play_ai(&mut engine).unwrap();
        assert_eq!(game.last_move(), Some((Pos::new(10, 10), Mark::Player1)));
        assert_eq!(game.ai_to_move(), None);
        assert!(game.play_human(9, 9).is_ok());
    }

    #[test]
    fn test_apply_without_best_move_plays_first_empty() {
        let mut game = pvp();
        game.play(0, 0).unwrap();
        let result = MoveResult {
            best_move: None,
            score: 0,
            search_type: SearchType::Exhausted,
            time_ms: 0,
            nodes: 1,
        };
        game.apply_ai_result(&result).unwrap();
        assert_eq!(game.last_move(), Some((Pos::new(1, 0), Mark::Player2)));
    }

    #[test]
    fn test_engine_vs_engine_finishes() {
        let mode = GameMode::EvE {
            player1: SearchMode::Greedy,
            player2: SearchMode::ForwardPruning,
        };
        let mut game = Game::new(mode, eve_config());
        let mut engine = AIEngine::with_config(eve_config());
        while !game.is_over() {
            game.play_ai(&mut engine).unwrap();
        }
        assert!(game.history().len() >= 9);
        match game.outcome() {
            Outcome::Win(mark) => {
                let (pos, last) = game.last_move().unwrap();
                assert_eq!(last, mark);
                assert!(rules::has_five_at_pos(game.board(), pos, mark));
            }
            Outcome::Draw => assert!(game.board().is_full()),
            Outcome::Continue => unreachable!(),
        }
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mode = GameMode::EvE {
            player1: SearchMode::Greedy,
            player2: SearchMode::Greedy,
        };
        let mut game = Game::new(mode, EngineConfig::default());
        game.play(1, 1).unwrap();
        game.reset();
        assert!(game.board().is_board_empty());
        assert_eq!(game.mode(), mode);
        assert_eq!(game.active(), Mark::Player1);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(GameMode::PvP.label(), "Player vs Player");
        assert_eq!(GameMode::default().ai_for(Mark::Player1), None);
        assert_eq!(
            GameMode::default().ai_for(Mark::Player2),
            Some(SearchMode::ForwardPruning)
        );
    }
}
