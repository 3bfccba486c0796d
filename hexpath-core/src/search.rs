//! Alpha-beta minimax over the move space

use crate::board::Coord;
use crate::driver::CancelToken;
use crate::eval::{self, WIN_SCORE};
use crate::game::{GameState, Player};

// ============================================================================
// SEARCH RESULT
// ============================================================================

/// How a move was produced
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchKind {
    Minimax,
    IterativeMinimax,
    Random,
}

/// Chosen move plus search diagnostics
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Chosen cell; `None` when the board offers no legal move
    pub best_move: Option<Coord>,
    /// Root score of the chosen move
    pub score: i32,
    /// Depth the result was searched to
    pub depth: u32,
    /// Heuristic leaf evaluations spent
    pub nodes: u64,
    pub kind: SearchKind,
}

impl SearchResult {
    fn empty(depth: u32, kind: SearchKind) -> Self {
        Self {
            best_move: None,
            score: 0,
            depth,
            nodes: 0,
            kind,
        }
    }
}

// ============================================================================
// FIXED-DEPTH PLAYER
// ============================================================================

/// Fixed-depth alpha-beta player
pub struct AlphaBetaAI {
    pub depth: u32,
}

impl AlphaBetaAI {
    pub fn new(depth: u32) -> Self {
        Self { depth }
    }

    /// Get best move for the side to move
    pub fn best_move(&mut self, state: &GameState) -> SearchResult {
        let mut searcher = Searcher::new(state.current_player(), None);
        searcher.choose_move(state, self.depth)
    }
}

// ============================================================================
// RECURSIVE ALPHA-BETA
// ============================================================================

/// One search invocation: the searching side, its node counter and the
/// cancellation flag polled at the top of every recursive call.
pub(crate) struct Searcher {
    my_player: Player,
    cancel: Option<CancelToken>,
    nodes: u64,
}

impl Searcher {
    pub(crate) fn new(my_player: Player, cancel: Option<CancelToken>) -> Self {
        Self {
            my_player,
            cancel,
            nodes: 0,
        }
    }

    pub(crate) fn nodes(&self) -> u64 {
        self.nodes
    }

    fn cancelled(&self) -> bool {
        self.cancel.as_ref().map_or(false, |c| c.is_cancelled())
    }

    /// Enumerate root moves in board order and return the arg-max. Each
    /// root move is searched with a fresh full window; ties keep the
    /// earliest move.
    pub(crate) fn choose_move(&mut self, state: &GameState, depth: u32) -> SearchResult {
        if state.is_game_over() {
            return SearchResult::empty(depth, SearchKind::Minimax);
        }
        let moves = state.legal_moves();
        if moves.is_empty() {
            return SearchResult::empty(depth, SearchKind::Minimax);
        }

        let mut best_move = moves[0];
        let mut best_value = i32::MIN;

        for mv in moves {
            if self.cancelled() {
                break;
            }
            let child = state.apply_move(mv);
            let value = self.search(&child, depth.saturating_sub(1), i32::MIN, i32::MAX, mv);
            if value > best_value {
                best_value = value;
                best_move = mv;
            }
        }

        SearchResult {
            best_move: Some(best_move),
            score: best_value,
            depth,
            nodes: self.nodes,
            kind: SearchKind::Minimax,
        }
    }

    /// Recursive alpha-beta. Scores are from the searching player's
    /// perspective; a node is maximizing when it is their turn.
    fn search(
        &mut self,
        state: &GameState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        last_played: Coord,
    ) -> i32 {
        if self.cancelled() {
            // The driver discards the whole in-flight depth
            return 0;
        }

        if state.is_game_over() {
            return if state.winner() == Some(self.my_player) {
                WIN_SCORE
            } else {
                -WIN_SCORE
            };
        }

        if depth == 0 || state.empty_cells() == 0 {
            self.nodes += 1;
            return self.evaluate_leaf(state, last_played);
        }

        let maximizing = state.current_player() == self.my_player;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in state.legal_moves() {
            let child = state.apply_move(mv);
            let value = self.search(&child, depth - 1, alpha, beta, mv);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }
            if alpha >= beta {
                break;
            }
        }
        best
    }

    /// Evaluate the side that placed `last_played` (the side whose turn
    /// produced this node), folded into the searching player's
    /// perspective.
    fn evaluate_leaf(&self, state: &GameState, last_played: Coord) -> i32 {
        let mover = state.current_player().opponent();
        let score = eval::evaluate(state, mover, last_played);
        if mover == self.my_player {
            score
        } else {
            -score
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
