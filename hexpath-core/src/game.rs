//! Game state and move generation

use crate::board::Coord;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// True if `c` lies on this player's source edge.
    /// White connects the first column to the last, Black the first row
    /// to the last.
    pub fn on_source_edge(self, c: Coord) -> bool {
        match self {
            Player::White => c.col == 0,
            Player::Black => c.row == 0,
        }
    }

    /// True if `c` lies on this player's goal edge
    pub fn on_goal_edge(self, c: Coord, size: usize) -> bool {
        let last = (size - 1) as i8;
        match self {
            Player::White => c.col == last,
            Player::Black => c.row == last,
        }
    }

    /// Cells of this player's source edge
    pub fn source_edge(self, size: usize) -> impl Iterator<Item = Coord> {
        (0..size as i8).map(move |i| match self {
            Player::White => Coord::new(i, 0),
            Player::Black => Coord::new(0, i),
        })
    }

    /// Cells of this player's goal edge
    pub fn goal_edge(self, size: usize) -> impl Iterator<Item = Coord> {
        let last = (size - 1) as i8;
        (0..size as i8).map(move |i| match self {
            Player::White => Coord::new(i, last),
            Player::Black => Coord::new(last, i),
        })
    }
}

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    WhiteWins,
    BlackWins,
}

/// Errors from board construction
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board size must be at least 1, got {0}")]
    InvalidSize(usize),
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Game state (clone to mutate)
#[derive(Clone, Debug)]
pub struct GameState {
    size: usize,
    /// Dense row-major grid of cell owners
    cells: Vec<Option<Player>>,
    current_player: Player,
    result: GameResult,
}

impl GameState {
    /// Create an empty board. White moves first.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
            current_player: Player::White,
            result: GameResult::Ongoing,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.result != GameResult::Ongoing
    }

    pub fn winner(&self) -> Option<Player> {
        match self.result {
            GameResult::WhiteWins => Some(Player::White),
            GameResult::BlackWins => Some(Player::Black),
            GameResult::Ongoing => None,
        }
    }

    /// Owner of a cell, if any
    pub fn owner(&self, c: Coord) -> Option<Player> {
        self.cells[c.index(self.size)]
    }

    /// All empty cells in row-major order
    pub fn legal_moves(&self) -> Vec<Coord> {
        (0..self.cells.len())
            .filter(|&i| self.cells[i].is_none())
            .map(|i| Coord::from_index(i, self.size))
            .collect()
    }

    /// Number of empty cells
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Place a stone for the side to move, returning the next state with
    /// the turn toggled. The caller must pass an empty in-bounds cell.
    pub fn apply_move(&self, mv: Coord) -> GameState {
        let mut next = self.clone();
        next.place_stone(mv);
        next
    }

    fn place_stone(&mut self, c: Coord) {
        debug_assert!(self.result == GameResult::Ongoing);
        debug_assert!(self.owner(c).is_none());

        let player = self.current_player;
        self.cells[c.index(self.size)] = Some(player);

        if self.connects_edges(player, c) {
            self.result = match player {
                Player::White => GameResult::WhiteWins,
                Player::Black => GameResult::BlackWins,
            };
        }
        self.current_player = player.opponent();
    }

    /// Drop a stone without turn bookkeeping, for test positions only
    #[cfg(test)]
    pub(crate) fn place_for(&mut self, c: Coord, player: Player) {
        self.cells[c.index(self.size)] = Some(player);
    }

    /// Flood fill over same-color stones from the placed cell; the chain
    /// wins when it touches both of the player's edges.
    fn connects_edges(&self, player: Player, start: Coord) -> bool {
        let mut visited = FxHashSet::default();
        let mut stack = vec![start];
        visited.insert(start);

        let mut touches_source = false;
        let mut touches_goal = false;

        while let Some(c) = stack.pop() {
            if player.on_source_edge(c) {
                touches_source = true;
            }
            if player.on_goal_edge(c, self.size) {
                touches_goal = true;
            }
            if touches_source && touches_goal {
                return true;
            }
            for n in c.neighbors(self.size) {
                if self.owner(n) == Some(player) && visited.insert(n) {
                    stack.push(n);
                }
            }
        }
        false
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &GameState, moves: &[(i8, i8)]) -> GameState {
        let mut s = state.clone();
        for &(r, c) in moves {
            s = s.apply_move(Coord::new(r, c));
        }
        s
    }

    #[test]
    fn test_new_board() {
        let state = GameState::new(5).unwrap();
        assert_eq!(state.size(), 5);
        assert_eq!(state.current_player(), Player::White);
        assert_eq!(state.result(), GameResult::Ongoing);
        assert_eq!(state.empty_cells(), 25);
        assert!(GameState::new(0).is_err());
    }

    #[test]
    fn test_apply_move_alternates_turns() {
        let state = GameState::new(3).unwrap();
        let after = state.apply_move(Coord::new(1, 1));
        assert_eq!(after.owner(Coord::new(1, 1)), Some(Player::White));
        assert_eq!(after.current_player(), Player::Black);
        assert_eq!(after.empty_cells(), 8);
        // The original state is untouched
        assert_eq!(state.owner(Coord::new(1, 1)), None);
    }

    #[test]
    fn test_legal_moves_row_major() {
        let state = GameState::new(2).unwrap();
        let moves = state.legal_moves();
        assert_eq!(
            moves,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_white_chain_wins() {
        let state = GameState::new(3).unwrap();
        // White builds the top row from first column to last
        let state = play(&state, &[(0, 0), (2, 0), (0, 1), (2, 1), (0, 2)]);
        assert!(state.is_game_over());
        assert_eq!(state.result(), GameResult::WhiteWins);
        assert_eq!(state.winner(), Some(Player::White));
    }

    #[test]
    fn test_black_chain_wins() {
        let state = GameState::new(3).unwrap();
        // Black builds the left column from first row to last
        let state = play(
            &state,
            &[(1, 1), (0, 0), (1, 2), (1, 0), (2, 2), (2, 0)],
        );
        assert!(state.is_game_over());
        assert_eq!(state.result(), GameResult::BlackWins);
        assert_eq!(state.winner(), Some(Player::Black));
    }

    #[test]
    fn test_partial_chain_is_not_a_win() {
        let state = GameState::new(3).unwrap();
        // Two adjacent white stones that touch only the source edge
        let state = play(&state, &[(0, 0), (2, 2), (0, 1)]);
        assert!(!state.is_game_over());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_edge_membership() {
        assert!(Player::White.on_source_edge(Coord::new(2, 0)));
        assert!(Player::White.on_goal_edge(Coord::new(1, 4), 5));
        assert!(Player::Black.on_source_edge(Coord::new(0, 3)));
        assert!(Player::Black.on_goal_edge(Coord::new(4, 2), 5));
        assert_eq!(Player::White.source_edge(5).count(), 5);
        assert_eq!(Player::Black.goal_edge(5).count(), 5);
    }
}
