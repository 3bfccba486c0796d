//! HEXPATH Core - Hex engine
//!
//! This crate provides the core of the Hex playing engine:
//! - Board geometry (rhombic grid, six-neighbor adjacency)
//! - Game state, move generation and chain detection
//! - Connection heuristic (shortest-path evaluation)
//! - Alpha-beta minimax search
//! - Iterative deepening with cooperative cancellation

pub mod board;
pub mod config;
pub mod driver;
pub mod eval;
pub mod game;
pub mod player;
pub mod search;

// Re-exports for convenient access
pub use board::{Coord, NEIGHBOR_OFFSETS};
pub use config::EngineConfig;
pub use driver::{CancelToken, IterativeAI};
pub use eval::{evaluate, evaluate_from_edges, BLOCKED_SCORE, WIN_SCORE};
pub use game::{BoardError, GameResult, GameState, Player};
pub use player::{HexPlayer, RandomPlayer};
pub use search::{AlphaBetaAI, SearchKind, SearchResult};
