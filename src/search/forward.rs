//! Forward-pruning look-ahead
//!
//! A depth-limited refinement of greedy selection:
//! 1. Tactical moves short-circuit exactly as in greedy selection.
//! 2. Cells scoring below the threshold are pruned.
//! 3. Each surviving candidate is played, the opponent answers with its
//!    own greedy move, and the search recurses one ply shallower.
//! 4. The candidate whose line ends with the highest score is chosen.
//!
//! The opponent is never searched, only simulated greedily, so this is a
//! single line per candidate rather than a minimax tree.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Mark, Player, Pos};
//! use gomoku::search::ForwardSearcher;
//!
//! let mut board = Board::new();
//! board.place(10, 10, Mark::Player1);
//! let me = Player::new(Mark::Player2);
//! let opponent = Player::new(Mark::Player1).moved_to(Pos::new(10, 10));
//!
//! let mut searcher = ForwardSearcher::new(1, 40);
//! let choice = searcher.search(&mut board, me, opponent);
//! assert!(choice.is_some());
//! // Trial marks are gone again
//! assert_eq!(board.mark_count(), 1);
//! ```

use log::trace;

use crate::board::{Board, Mark, Player, Pos};
use crate::config::EngineConfig;
use crate::eval::{score_cell, PatternScore};
use crate::rules::has_five_at_pos;

use super::greedy::{best_scoring, greedy_move};
use super::speculation::Speculation;
use super::threat::tactical_move;
use super::{Choice, SearchType, REGION_MARGIN};

/// Forward-pruning searcher
pub struct ForwardSearcher {
    /// Look-ahead plies
    depth: u8,
    /// Minimum heuristic score for a candidate to be expanded
    threshold: u64,
    /// Nodes visited by the last search
    nodes: u64,
}

impl ForwardSearcher {
    pub fn new(depth: u8, threshold: u64) -> Self {
        Self {
            depth,
            threshold,
            nodes: 0,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.depth, config.threshold)
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    #[inline]
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Nodes visited by the most recent [`search`](Self::search)
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Choose a move for `me`.
    ///
    /// The board is used as scratch space; on return it holds exactly the
    /// marks it held on entry. Only its bounds may have grown.
    pub fn search(&mut self, board: &mut Board, me: Player, opponent: Player) -> Option<Choice> {
        self.nodes = 0;
        self.search_node(board, me, opponent, self.depth)
    }

    fn search_node(
        &mut self,
        board: &mut Board,
        me: Player,
        opponent: Player,
        depth: u8,
    ) -> Option<Choice> {
        self.nodes += 1;

        if let Some(threat) = tactical_move(board, &me, &opponent) {
            return Some(threat.into_choice(board, &me, &opponent));
        }

        let candidates = self.candidates(board, me.mark, opponent.mark);
        if candidates.is_empty() {
            return best_scoring(board, me.mark, opponent.mark);
        }

        if depth == 0 {
            return candidates.into_iter().fold(None, |best: Option<Choice>, c| match best {
                Some(b) if b.score >= c.score => Some(b),
                _ => Some(c),
            });
        }

        let mut best: Option<Choice> = None;
        for candidate in candidates {
            let downstream = self.follow_line(board, me, opponent, candidate.pos, depth);
            trace!(
                "depth {} candidate ({}, {}) static {} downstream {}",
                depth,
                candidate.pos.x,
                candidate.pos.y,
                candidate.score,
                downstream
            );
            if best.map_or(true, |b| downstream > b.score) {
                best = Some(Choice::new(candidate.pos, downstream, SearchType::ForwardPruning));
            }
        }
        best
    }

    /// Play `pos` for me, let the opponent reply greedily, and score what
    /// follows one ply shallower. Both trial marks are gone on return.
    fn follow_line(
        &mut self,
        board: &mut Board,
        me: Player,
        opponent: Player,
        pos: Pos,
        depth: u8,
    ) -> u64 {
        let mut trial = Speculation::new(board);
        if !trial.place(pos, me.mark) {
            return 0;
        }
        if has_five_at_pos(&trial, pos, me.mark) {
            return PatternScore::WIN;
        }
        let me = me.moved_to(pos);

        let mut opponent = opponent;
        if let Some(reply) = greedy_move(&trial, &opponent, &me) {
            if trial.place(reply.pos, opponent.mark) {
                if has_five_at_pos(&trial, reply.pos, opponent.mark) {
                    return 0;
                }
                opponent = opponent.moved_to(reply.pos);
            }
        }

        self.search_node(&mut trial, me, opponent, depth - 1)
            .map_or(0, |choice| choice.score)
    }

    /// Region cells scoring at least the threshold, in row-major order.
    fn candidates(&self, board: &Board, me: Mark, opponent: Mark) -> Vec<Choice> {
        board
            .region_cells(REGION_MARGIN)
            .into_iter()
            .filter_map(|pos| {
                let score = score_cell(board, pos, me, opponent);
                (score >= self.threshold).then(|| Choice::new(pos, score, SearchType::Heuristic))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(mark: Mark, x: i32, y: i32) -> Player {
        Player::new(mark).moved_to(Pos::new(x, y))
    }

    /// A quiet middle-game position with both sides building
    fn midgame() -> (Board, Player, Player) {
        let mut board = Board::new();
        let moves = [
            (10, 10, Mark::Player1),
            (11, 11, Mark::Player2),
            (10, 11, Mark::Player1),
            (8, 12, Mark::Player2),
            (9, 10, Mark::Player1),
            (12, 10, Mark::Player2),
        ];
        for (x, y, mark) in moves {
            assert!(board.place(x, y, mark));
        }
        (board, player_at(Mark::Player1, 9, 10), player_at(Mark::Player2, 12, 10))
    }

    #[test]
    fn test_empty_board_center() {
        let mut board = Board::new();
        let mut searcher = ForwardSearcher::new(2, 40);
        let choice = searcher
            .search(&mut board, Player::new(Mark::Player1), Player::new(Mark::Player2))
            .unwrap();
        assert_eq!(choice.pos, Pos::new(10, 10));
        assert_eq!(choice.search_type, SearchType::Opening);
    }

    #[test]
    fn test_instant_win_short_circuits() {
        let mut board = Board::new();
        for x in 6..=9 {
            board.place(x, 10, Mark::Player1);
        }
        board.place(0, 20, Mark::Player2);
        let mut searcher = ForwardSearcher::new(2, 40);
        let choice = searcher
            .search(&mut board, player_at(Mark::Player1, 9, 10), player_at(Mark::Player2, 0, 20))
            .unwrap();
        assert!(choice.pos == Pos::new(10, 10) || choice.pos == Pos::new(5, 10));
        assert_eq!(choice.search_type, SearchType::ImmediateWin);
        assert_eq!(searcher.nodes(), 1);
    }

    #[test]
    fn test_search_restores_board() {
        let (mut board, me, opp) = midgame();
        let before = board.marks();
        let mut searcher = ForwardSearcher::new(2, 40);
        let choice = searcher.search(&mut board, me, opp);
        assert!(choice.is_some());
        assert_eq!(board.marks(), before);
        assert!(searcher.nodes() > 1);
    }

    #[test]
    fn test_search_is_repeatable() {
        let (mut board, me, opp) = midgame();
        let mut copy = board.clone();
        let mut searcher = ForwardSearcher::new(1, 40);
        let first = searcher.search(&mut board, me, opp);
        let second = searcher.search(&mut copy, me, opp);
        assert_eq!(first, second);
    }

    #[test]
    fn test_depth_zero_is_best_candidate() {
        let (mut board, me, opp) = midgame();
        let mut searcher = ForwardSearcher::new(0, 40);
        let choice = searcher.search(&mut board, me, opp).unwrap();
        let greedy = best_scoring(&board, me.mark, opp.mark).unwrap();
        assert_eq!(choice.pos, greedy.pos);
        assert_eq!(choice.score, greedy.score);
        assert_eq!(choice.search_type, SearchType::Heuristic);
    }

    #[test]
    fn test_high_threshold_falls_back_to_greedy() {
        let (mut board, me, opp) = midgame();
        let mut searcher = ForwardSearcher::new(2, u64::MAX);
        let choice = searcher.search(&mut board, me, opp).unwrap();
        let greedy = best_scoring(&board, me.mark, opp.mark).unwrap();
        assert_eq!(choice, greedy);
        assert_eq!(searcher.nodes(), 1);
    }

    #[test]
    fn test_lookahead_choice_is_empty_cell_in_region() {
        let (mut board, me, opp) = midgame();
        let mut searcher = ForwardSearcher::new(1, 40);
        let choice = searcher.search(&mut board, me, opp).unwrap();
        assert_eq!(choice.search_type, SearchType::ForwardPruning);
        assert!(board.is_empty_at(choice.pos));
        assert!(board.region_cells(REGION_MARGIN).contains(&choice.pos));
    }

    #[test]
    fn test_winning_candidate_scores_win() {
        let mut board = Board::new();
        let mut searcher = ForwardSearcher::new(1, 0);
        // Three in a row with both ends open: no tactical shortcut fires
        // from the anchoring mark, but playing either end of a four wins
        for x in 7..=9 {
            board.place(x, 5, Mark::Player1);
        }
        board.place(15, 15, Mark::Player2);
        board.place(11, 5, Mark::Player1);
        let me = player_at(Mark::Player1, 11, 5);
        let opp = player_at(Mark::Player2, 15, 15);
        let score = searcher.follow_line(&mut board, me, opp, Pos::new(10, 5), 1);
        assert_eq!(score, PatternScore::WIN);
        assert!(board.is_empty_at(Pos::new(10, 5)));
    }

    #[test]
    fn test_from_config() {
        let config = EngineConfig::default();
        let searcher = ForwardSearcher::from_config(&config);
        assert_eq!(searcher.depth(), config.depth);
        assert_eq!(searcher.threshold(), config.threshold);
    }
}
