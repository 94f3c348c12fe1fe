//! Threat scanning around a player's last mark
//!
//! Two questions are asked of the eleven-cell windows through a mark:
//! - Instant win: one more mark completes five
//! - Open four: one more mark makes four with room to become five
//!
//! Both are asked for the mover (to attack) and for the opponent (to
//! block), always attack first.

use crate::board::{scan_line, Board, LineCell, LineWindow, Player, Pos, AXES};
use crate::eval::{score_cell, PatternScore};
use crate::rules::WIN_LENGTH;

use super::{Choice, SearchType};

/// Cells examined on each side of the anchoring mark
const THREAT_RADIUS: i32 = 5;

/// Kind of tactical move found before any scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatKind {
    Opening,
    Win,
    BlockWin,
    OpenFour,
    BlockOpenFour,
}

/// A tactical move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threat {
    pub pos: Pos,
    pub kind: ThreatKind,
}

impl Threat {
    /// Convert to a scored choice. Own threats get fixed scores; blocks
    /// and the opening are scored like any other cell.
    pub fn into_choice(self, board: &Board, me: &Player, opponent: &Player) -> Choice {
        let (score, search_type) = match self.kind {
            ThreatKind::Opening => (0, SearchType::Opening),
            ThreatKind::Win => (PatternScore::WIN, SearchType::ImmediateWin),
            ThreatKind::OpenFour => (PatternScore::OPEN_FOUR, SearchType::OpenFour),
            ThreatKind::BlockWin => (
                score_cell(board, self.pos, me.mark, opponent.mark),
                SearchType::BlockWin,
            ),
            ThreatKind::BlockOpenFour => (
                score_cell(board, self.pos, me.mark, opponent.mark),
                SearchType::BlockOpenFour,
            ),
        };
        Choice::new(self.pos, score, search_type)
    }
}

/// Empty cell near `player`'s last mark that completes five for them.
///
/// Axes are tried horizontal, vertical, ↘, ↗; cells within an axis in
/// window order.
pub fn find_instant_win(board: &Board, player: &Player) -> Option<Pos> {
    scan_threats(board, player, |window, idx| window.run_through(idx) >= WIN_LENGTH)
}

/// Empty cell near `player`'s last mark that makes a four with an empty
/// cell right past at least one end.
pub fn find_open_four(board: &Board, player: &Player) -> Option<Pos> {
    scan_threats(board, player, |window, idx| {
        let (lo, hi) = window.run_span(idx);
        if hi - lo + 1 != WIN_LENGTH - 1 {
            return false;
        }
        let open_before = lo > 0 && window.cells[lo - 1] == LineCell::Empty;
        let open_after = hi + 1 < window.len() && window.cells[hi + 1] == LineCell::Empty;
        open_before || open_after
    })
}

/// Fill each empty cell of each window in turn and return the first
/// one for which `creates` holds.
fn scan_threats(
    board: &Board,
    player: &Player,
    creates: impl Fn(&LineWindow, usize) -> bool,
) -> Option<Pos> {
    let origin = player.last_move?;
    for axis in AXES {
        let window = scan_line(board, origin, axis, THREAT_RADIUS, player.mark);
        for idx in 0..window.len() {
            if window.cells[idx] != LineCell::Empty {
                continue;
            }
            let filled = window.with_cell(idx, LineCell::Mine);
            if creates(&filled, idx) {
                return Some(window.positions[idx]);
            }
        }
    }
    None
}

/// Moves that need no scoring, in order of precedence:
/// 1. Empty board: center
/// 2. My instant win
/// 3. Block the opponent's instant win
/// 4. My open four
/// 5. Block the opponent's open four
pub fn tactical_move(board: &Board, me: &Player, opponent: &Player) -> Option<Threat> {
    if board.is_board_empty() {
        return Some(Threat {
            pos: board.center(),
            kind: ThreatKind::Opening,
        });
    }

    let probes: [(&Player, fn(&Board, &Player) -> Option<Pos>, ThreatKind); 4] = [
        (me, find_instant_win, ThreatKind::Win),
        (opponent, find_instant_win, ThreatKind::BlockWin),
        (me, find_open_four, ThreatKind::OpenFour),
        (opponent, find_open_four, ThreatKind::BlockOpenFour),
    ];
    probes.into_iter().find_map(|(player, probe, kind)| {
        probe(board, player).map(|pos| Threat { pos, kind })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    fn player_at(mark: Mark, x: i32, y: i32) -> Player {
        Player::new(mark).moved_to(Pos::new(x, y))
    }

    #[test]
    fn test_instant_win_horizontal() {
        let mut board = Board::new();
        for x in 6..=9 {
            board.place(x, 10, Mark::Player1);
        }
        let me = player_at(Mark::Player1, 9, 10);
        // Window order: the left end comes first
        assert_eq!(find_instant_win(&board, &me), Some(Pos::new(5, 10)));
    }

    #[test]
    fn test_instant_win_fills_gap() {
        let mut board = Board::new();
        for y in [3, 4, 6, 7] {
            board.place(12, y, Mark::Player2);
        }
        let me = player_at(Mark::Player2, 12, 7);
        assert_eq!(find_instant_win(&board, &me), Some(Pos::new(12, 5)));
    }

    #[test]
    fn test_instant_win_blocked_end() {
        let mut board = Board::new();
        for x in 0..=3 {
            board.place(x, 0, Mark::Player1);
        }
        board.place(4, 0, Mark::Player2);
        let me = player_at(Mark::Player1, 3, 0);
        assert_eq!(find_instant_win(&board, &me), None);
    }

    #[test]
    fn test_instant_win_diagonal_up() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place(5 + i, 15 - i, Mark::Player1);
        }
        let me = player_at(Mark::Player1, 8, 12);
        assert_eq!(find_instant_win(&board, &me), Some(Pos::new(4, 16)));
    }

    #[test]
    fn test_no_threat_without_last_move() {
        let mut board = Board::new();
        board.place(1, 1, Mark::Player1);
        assert_eq!(find_instant_win(&board, &Player::new(Mark::Player1)), None);
        assert_eq!(find_open_four(&board, &Player::new(Mark::Player1)), None);
    }

    #[test]
    fn test_open_four_from_three() {
        let mut board = Board::new();
        for x in 7..=9 {
            board.place(x, 10, Mark::Player1);
        }
        let me = player_at(Mark::Player1, 9, 10);
        assert_eq!(find_open_four(&board, &me), Some(Pos::new(6, 10)));
        assert_eq!(find_instant_win(&board, &me), None);
    }

    #[test]
    fn test_open_four_needs_room() {
        let mut board = Board::new();
        // X O O O _ X : filling the gap gives a four with both ends shut
        board.place(0, 5, Mark::Player2);
        for x in 1..=3 {
            board.place(x, 5, Mark::Player1);
        }
        board.place(5, 5, Mark::Player2);
        let me = player_at(Mark::Player1, 3, 5);
        let found = find_open_four(&board, &me);
        assert_ne!(found, Some(Pos::new(4, 5)));
    }

    #[test]
    fn test_tactical_opening() {
        let board = Board::new();
        let me = Player::new(Mark::Player1);
        let opp = Player::new(Mark::Player2);
        let threat = tactical_move(&board, &me, &opp).unwrap();
        assert_eq!(threat.kind, ThreatKind::Opening);
        assert_eq!(threat.pos, Pos::new(10, 10));
    }

    #[test]
    fn test_tactical_win_before_block() {
        let mut board = Board::new();
        for x in 2..=5 {
            board.place(x, 2, Mark::Player1);
            board.place(x, 15, Mark::Player2);
        }
        let me = player_at(Mark::Player1, 5, 2);
        let opp = player_at(Mark::Player2, 5, 15);
        let threat = tactical_move(&board, &me, &opp).unwrap();
        assert_eq!(threat.kind, ThreatKind::Win);
        assert_eq!(threat.pos.y, 2);

        // Same position seen by the other side also attacks first
        let threat = tactical_move(&board, &opp, &me).unwrap();
        assert_eq!(threat.kind, ThreatKind::Win);
        assert_eq!(threat.pos.y, 15);
    }

    #[test]
    fn test_tactical_block_win() {
        let mut board = Board::new();
        for y in 4..=7 {
            board.place(10, y, Mark::Player2);
        }
        board.place(0, 0, Mark::Player1);
        let me = player_at(Mark::Player1, 0, 0);
        let opp = player_at(Mark::Player2, 10, 7);
        let threat = tactical_move(&board, &me, &opp).unwrap();
        assert_eq!(threat.kind, ThreatKind::BlockWin);
        assert_eq!(threat.pos, Pos::new(10, 3));
    }

    #[test]
    fn test_tactical_open_four_before_block_open_four() {
        let mut board = Board::new();
        for x in 7..=9 {
            board.place(x, 4, Mark::Player1);
            board.place(x, 14, Mark::Player2);
        }
        let me = player_at(Mark::Player1, 9, 4);
        let opp = player_at(Mark::Player2, 9, 14);
        let threat = tactical_move(&board, &me, &opp).unwrap();
        assert_eq!(threat.kind, ThreatKind::OpenFour);

        board.unplace(Pos::new(8, 4));
        let threat = tactical_move(&board, &me, &opp).unwrap();
        assert_eq!(threat.kind, ThreatKind::BlockOpenFour);
        assert_eq!(threat.pos.y, 14);
    }

    #[test]
    fn test_quiet_position_has_no_tactics() {
        let mut board = Board::new();
        board.place(10, 10, Mark::Player1);
        board.place(11, 11, Mark::Player2);
        let me = player_at(Mark::Player1, 10, 10);
        let opp = player_at(Mark::Player2, 11, 11);
        assert!(tactical_move(&board, &me, &opp).is_none());
    }

    #[test]
    fn test_threat_choice_scores() {
        let board = Board::new();
        let me = Player::new(Mark::Player1);
        let opp = Player::new(Mark::Player2);
        let win = Threat { pos: Pos::new(3, 3), kind: ThreatKind::Win }.into_choice(&board, &me, &opp);
        assert_eq!(win.score, PatternScore::WIN);
        assert_eq!(win.search_type, SearchType::ImmediateWin);
        let block = Threat { pos: Pos::new(10, 10), kind: ThreatKind::BlockWin }.into_choice(&board, &me, &opp);
        assert_eq!(block.score, 32);
    }
}
