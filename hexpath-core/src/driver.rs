//! Iterative deepening with cooperative cancellation

use crate::eval::WIN_SCORE;
use crate::game::GameState;
use crate::search::{SearchKind, SearchResult, Searcher};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// ============================================================================
// CANCELLATION
// ============================================================================

/// Shared cancellation flag. The search only ever reads it; the external
/// turn timer sets it from another thread when the budget elapses.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Re-arm the flag for a new turn. The turn orchestrator calls this
    /// before starting its timer, never while a search is in flight.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

// ============================================================================
// ITERATIVE DEEPENING
// ============================================================================

/// Iterative-deepening engine: searches depth 1, 2, 3, ... until the
/// cancel token trips, always keeping the last fully completed depth.
pub struct IterativeAI {
    cancel: CancelToken,
    max_depth: Option<u32>,
}

impl IterativeAI {
    pub fn new() -> Self {
        Self {
            cancel: CancelToken::new(),
            max_depth: None,
        }
    }

    /// Cap the deepening loop (mostly for tests and benchmarks)
    pub fn with_max_depth(max_depth: u32) -> Self {
        Self {
            cancel: CancelToken::new(),
            max_depth: Some(max_depth),
        }
    }

    /// Handle for the external turn timer
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Get best move for the side to move. Depth 1 always runs to
    /// completion so a legal move comes back even under a spent budget;
    /// a depth interrupted mid-search is abandoned wholesale. The flag is
    /// owned by the orchestrator, which resets it before each turn.
    pub fn best_move(&mut self, state: &GameState) -> SearchResult {
        let me = state.current_player();

        // Depth 1 searches without the flag attached
        let mut searcher = Searcher::new(me, None);
        let mut best = searcher.choose_move(state, 1);
        best.kind = SearchKind::IterativeMinimax;
        let mut nodes = best.nodes;

        // Past the number of empty cells every line ends on a full board
        // and the value cannot change; the cap also bounds the loop when
        // no timer is armed.
        let empty = state.empty_cells() as u32;
        let depth_cap = self.max_depth.map_or(empty, |d| d.min(empty));

        let mut depth = 2;
        while depth <= depth_cap && !self.cancel.is_cancelled() {
            if best.score.abs() >= WIN_SCORE {
                // A completed depth already proved a forced result
                break;
            }

            let mut searcher = Searcher::new(me, Some(self.cancel.clone()));
            let mut result = searcher.choose_move(state, depth);
            nodes += result.nodes;

            if self.cancel.is_cancelled() {
                break;
            }
            result.kind = SearchKind::IterativeMinimax;
            best = result;
            depth += 1;
        }

        best.nodes = nodes;
        best
    }
}

impl Default for IterativeAI {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
