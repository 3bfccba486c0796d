//! Player abstractions and the random baseline

use crate::driver::{CancelToken, IterativeAI};
use crate::game::GameState;
use crate::search::{AlphaBetaAI, SearchKind, SearchResult};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A side that can be asked for one move per turn
pub trait HexPlayer {
    fn name(&self) -> &str;

    /// Choose a move for the side to move in `state`
    fn best_move(&mut self, state: &GameState) -> SearchResult;

    /// Cancellation handle for the turn timer; `None` for players that
    /// ignore time budgets
    fn cancel_token(&self) -> Option<CancelToken> {
        None
    }
}

/// Uniform random baseline
pub struct RandomPlayer {
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl HexPlayer for RandomPlayer {
    fn name(&self) -> &str {
        "random"
    }

    fn best_move(&mut self, state: &GameState) -> SearchResult {
        let moves = state.legal_moves();
        SearchResult {
            best_move: moves.choose(&mut self.rng).copied(),
            score: 0,
            depth: 0,
            nodes: 0,
            kind: SearchKind::Random,
        }
    }
}

impl HexPlayer for AlphaBetaAI {
    fn name(&self) -> &str {
        "alphabeta"
    }

    fn best_move(&mut self, state: &GameState) -> SearchResult {
        AlphaBetaAI::best_move(self, state)
    }
}

impl HexPlayer for IterativeAI {
    fn name(&self) -> &str {
        "iterative"
    }

    fn best_move(&mut self, state: &GameState) -> SearchResult {
        IterativeAI::best_move(self, state)
    }

    fn cancel_token(&self) -> Option<CancelToken> {
        Some(IterativeAI::cancel_token(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;

    #[test]
    fn test_random_player_is_seeded() {
        let state = GameState::new(5).unwrap();
        let a = RandomPlayer::new(7).best_move(&state).best_move;
        let b = RandomPlayer::new(7).best_move(&state).best_move;
        assert_eq!(a, b);
        assert!(a.is_some());
    }

    #[test]
    fn test_random_player_plays_legal_moves() {
        let mut state = GameState::new(3).unwrap();
        let mut player = RandomPlayer::new(1);
        while !state.is_game_over() {
            let result = player.best_move(&state);
            let mv = result.best_move.expect("empty cells remain");
            assert_eq!(state.owner(mv), None);
            assert_eq!(result.kind, SearchKind::Random);
            state = state.apply_move(mv);
        }
        assert!(state.winner().is_some());
    }

    #[test]
    fn test_trait_object_dispatch() {
        let state = GameState::new(3).unwrap();
        let mut players: Vec<Box<dyn HexPlayer>> = vec![
            Box::new(RandomPlayer::new(0)),
            Box::new(AlphaBetaAI::new(1)),
            Box::new(IterativeAI::with_max_depth(1)),
        ];
        for player in &mut players {
            let result = player.best_move(&state);
            assert!(result.best_move.is_some(), "{} returned no move", player.name());
        }
        assert!(players[0].cancel_token().is_none());
        assert!(players[2].cancel_token().is_some());
    }

    #[test]
    fn test_no_move_on_full_board() {
        // Drive a game to its end; the mover after the final stone gets
        // nothing back
        let mut state = GameState::new(2).unwrap();
        for mv in [Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)] {
            state = state.apply_move(mv);
        }
        let mut player = RandomPlayer::new(3);
        let last = state.apply_move(Coord::new(1, 0));
        assert!(last.is_game_over());
        assert_eq!(player.best_move(&last).best_move, None);
    }
}
