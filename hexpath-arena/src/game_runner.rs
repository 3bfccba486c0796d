//! Game runner - executes single games

use hexpath_core::{Coord, GameResult, GameState, HexPlayer, Player, SearchResult};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Outcome of a single game
#[derive(Clone, Debug)]
pub struct GameOutcome {
    /// Final game result
    pub result: GameResult,
    /// Number of stones placed
    pub moves_played: u32,
    /// Move history
    pub moves: Vec<Coord>,
}

impl GameOutcome {
    /// Check if white won
    pub fn white_wins(&self) -> bool {
        self.result == GameResult::WhiteWins
    }

    /// Check if black won
    pub fn black_wins(&self) -> bool {
        self.result == GameResult::BlackWins
    }

    /// Get winner (None only when a player failed to move)
    pub fn winner(&self) -> Option<Player> {
        match self.result {
            GameResult::WhiteWins => Some(Player::White),
            GameResult::BlackWins => Some(Player::Black),
            GameResult::Ongoing => None,
        }
    }
}

/// Play one game to completion, arming the turn watchdog for players
/// that honor it.
pub fn play_game<'a>(
    white: &'a mut dyn HexPlayer,
    black: &'a mut dyn HexPlayer,
    initial: GameState,
    turn_budget: Option<Duration>,
) -> GameOutcome {
    let mut state = initial;
    let mut moves = Vec::new();

    while !state.is_game_over() {
        let player = match state.current_player() {
            Player::White => &mut *white,
            Player::Black => &mut *black,
        };

        let result = run_turn(player, &state, turn_budget);
        match result.best_move {
            Some(mv) => {
                state = state.apply_move(mv);
                moves.push(mv);
            }
            None => break,
        }
    }

    GameOutcome {
        result: state.result(),
        moves_played: moves.len() as u32,
        moves,
    }
}

/// Ask one player for a move. When a budget is set and the player
/// exposes a cancel token, a watchdog thread trips the token once the
/// budget elapses; it is disarmed as soon as the move comes back.
pub fn run_turn(
    player: &mut dyn HexPlayer,
    state: &GameState,
    turn_budget: Option<Duration>,
) -> SearchResult {
    let watchdog = turn_budget.zip(player.cancel_token()).map(|(budget, token)| {
        token.reset();
        let (disarm, armed) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            if armed.recv_timeout(budget).is_err() {
                token.cancel();
            }
        });
        (disarm, handle)
    });

    let result = player.best_move(state);

    if let Some((disarm, handle)) = watchdog {
        let _ = disarm.send(());
        let _ = handle.join();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexpath_core::{AlphaBetaAI, IterativeAI, RandomPlayer};

    #[test]
    fn test_random_game_finishes_with_a_winner() {
        let mut white = RandomPlayer::new(1);
        let mut black = RandomPlayer::new(2);
        let initial = GameState::new(3).unwrap();

        let outcome = play_game(&mut white, &mut black, initial, None);

        assert!(outcome.winner().is_some());
        assert!(outcome.moves_played > 0);
        assert!(outcome.moves_played <= 9);
    }

    #[test]
    fn test_alpha_beta_game_finishes() {
        let mut white = AlphaBetaAI::new(2);
        let mut black = RandomPlayer::new(5);
        let initial = GameState::new(3).unwrap();

        let outcome = play_game(&mut white, &mut black, initial, None);

        assert!(outcome.winner().is_some());
    }

    #[test]
    fn test_budgeted_iterative_game_finishes() {
        let mut white = IterativeAI::new();
        let mut black = RandomPlayer::new(9);
        let initial = GameState::new(4).unwrap();

        let outcome = play_game(
            &mut white,
            &mut black,
            initial,
            Some(Duration::from_millis(20)),
        );

        assert!(outcome.winner().is_some());
        assert_eq!(outcome.moves_played as usize, outcome.moves.len());
    }

    #[test]
    fn test_run_turn_reports_diagnostics() {
        let mut player = AlphaBetaAI::new(1);
        let state = GameState::new(3).unwrap();
        let result = run_turn(&mut player, &state, None);
        assert!(result.best_move.is_some());
        assert_eq!(result.nodes, 9);
    }
}
