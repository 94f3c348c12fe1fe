//! Score weights for cell evaluation
//!
//! Runs are rewarded on a fourth-power curve so one long run outweighs
//! several short ones; tactical tiers sit far above anything the curve
//! can produce inside an 11-cell window.

/// Fixed scores for tactical results
pub struct PatternScore;

impl PatternScore {
    /// Completing five in a row
    pub const WIN: u64 = 1_000_000_000;
    /// Making an open four (wins next turn unless answered)
    pub const OPEN_FOUR: u64 = 100_000_000;
}

/// Cells a run plus its free room must cover to ever become five
pub const MIN_SPAN: usize = 5;

/// Reward for a contiguous run of `len` marks: `len^4`.
#[inline]
pub fn run_bonus(len: usize) -> u64 {
    (len as u64).pow(4)
}

/// Extra room beyond the minimum span, used when weighing the opponent's lines.
#[inline]
pub fn span_bonus(span: usize) -> u64 {
    span.saturating_sub(MIN_SPAN) as u64
}
