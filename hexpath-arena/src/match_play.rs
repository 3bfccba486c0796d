//! Match play - multiple games between two player configurations

use hexpath_core::{AlphaBetaAI, GameResult, GameState, HexPlayer, IterativeAI, RandomPlayer};
use rayon::prelude::*;
use std::time::Duration;

use crate::game_runner::{play_game, GameOutcome};

// ============================================================================
// PLAYER SPECS
// ============================================================================

/// How to build a player for each game of a match
#[derive(Clone, Debug)]
pub enum PlayerSpec {
    /// Seeded uniform random baseline
    Random,
    /// Fixed-depth alpha-beta search
    AlphaBeta { depth: u32 },
    /// Iterative deepening bounded by the match turn budget
    Iterative,
}

impl PlayerSpec {
    /// Instantiate a fresh player for one game
    pub fn build(&self, seed: u64) -> Box<dyn HexPlayer + Send> {
        match self {
            PlayerSpec::Random => Box::new(RandomPlayer::new(seed)),
            PlayerSpec::AlphaBeta { depth } => Box::new(AlphaBetaAI::new(*depth)),
            PlayerSpec::Iterative => Box::new(IterativeAI::new()),
        }
    }
}

/// Match configuration
#[derive(Clone, Debug)]
pub struct MatchSettings {
    /// Number of games (colors alternate each game)
    pub games: usize,
    /// Per-turn budget handed to the watchdog, if any
    pub turn_budget: Option<Duration>,
    /// Base seed; each game offsets it by its index
    pub base_seed: u64,
    /// Whether to run games in parallel
    pub parallel: bool,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            games: 10,
            turn_budget: Some(Duration::from_millis(1000)),
            base_seed: 42,
            parallel: false,
        }
    }
}

// ============================================================================
// MATCH RESULT
// ============================================================================

/// Result of a match (multiple games)
#[derive(Clone, Debug)]
pub struct MatchResult {
    /// Wins for the first spec (across both colors)
    pub first_wins: u32,
    /// Wins for the second spec
    pub second_wins: u32,
    /// Games that ended without a winner (a player failed to move)
    pub unfinished: u32,
    /// Average game length in moves
    pub avg_moves: f32,
    /// Total games played
    pub games_played: u32,
    /// Individual game outcomes
    pub outcomes: Vec<GameOutcome>,
}

impl MatchResult {
    /// Win rate of the first spec
    pub fn first_win_rate(&self) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            self.first_wins as f32 / self.games_played as f32
        }
    }

    /// Win rate of the second spec
    pub fn second_win_rate(&self) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            self.second_wins as f32 / self.games_played as f32
        }
    }
}

// ============================================================================
// MATCH EXECUTION
// ============================================================================

/// Play a match between two player specs, alternating colors each game
/// for fairness.
pub fn play_match(
    first: &PlayerSpec,
    second: &PlayerSpec,
    initial: &GameState,
    settings: &MatchSettings,
) -> MatchResult {
    let configs = prepare_game_configs(settings.games);

    let outcomes: Vec<GameWithContext> = if settings.parallel {
        configs
            .par_iter()
            .map(|gc| play_single_game(first, second, initial, settings, gc))
            .collect()
    } else {
        configs
            .iter()
            .map(|gc| play_single_game(first, second, initial, settings, gc))
            .collect()
    };

    aggregate_results(outcomes)
}

/// Configuration for a single game in a match
#[derive(Clone, Copy)]
struct GameConfig {
    /// Which spec plays white this game
    first_is_white: bool,
    /// Game index (for seeding)
    game_index: usize,
}

fn prepare_game_configs(games: usize) -> Vec<GameConfig> {
    (0..games)
        .map(|i| GameConfig {
            first_is_white: i % 2 == 0,
            game_index: i,
        })
        .collect()
}

/// Outcome plus which spec held white
struct GameWithContext {
    outcome: GameOutcome,
    first_was_white: bool,
}

fn play_single_game(
    first: &PlayerSpec,
    second: &PlayerSpec,
    initial: &GameState,
    settings: &MatchSettings,
    gc: &GameConfig,
) -> GameWithContext {
    let seed = settings.base_seed.wrapping_add(gc.game_index as u64);
    let (white_spec, black_spec) = if gc.first_is_white {
        (first, second)
    } else {
        (second, first)
    };

    let mut white = white_spec.build(seed);
    let mut black = black_spec.build(seed.wrapping_add(1));

    let outcome = play_game(
        white.as_mut(),
        black.as_mut(),
        initial.clone(),
        settings.turn_budget,
    );

    GameWithContext {
        outcome,
        first_was_white: gc.first_is_white,
    }
}

fn aggregate_results(results: Vec<GameWithContext>) -> MatchResult {
    let mut first_wins = 0u32;
    let mut second_wins = 0u32;
    let mut unfinished = 0u32;
    let mut total_moves = 0u32;
    let mut outcomes = Vec::with_capacity(results.len());

    for gwc in results {
        total_moves += gwc.outcome.moves_played;
        match gwc.outcome.result {
            GameResult::WhiteWins => {
                if gwc.first_was_white {
                    first_wins += 1;
                } else {
                    second_wins += 1;
                }
            }
            GameResult::BlackWins => {
                if gwc.first_was_white {
                    second_wins += 1;
                } else {
                    first_wins += 1;
                }
            }
            GameResult::Ongoing => unfinished += 1,
        }
        outcomes.push(gwc.outcome);
    }

    let games_played = outcomes.len() as u32;
    let avg_moves = if games_played > 0 {
        total_moves as f32 / games_played as f32
    } else {
        0.0
    };

    MatchResult {
        first_wins,
        second_wins,
        unfinished,
        avg_moves,
        games_played,
        outcomes,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_settings(games: usize, parallel: bool) -> MatchSettings {
        MatchSettings {
            games,
            turn_budget: None,
            base_seed: 42,
            parallel,
        }
    }

    #[test]
    fn test_color_alternation() {
        let configs = prepare_game_configs(4);
        assert_eq!(configs.len(), 4);
        assert!(configs[0].first_is_white);
        assert!(!configs[1].first_is_white);
        assert!(configs[2].first_is_white);
        assert!(!configs[3].first_is_white);
    }

    #[test]
    fn test_random_match_accounts_every_game() {
        let initial = GameState::new(3).unwrap();
        let result = play_match(
            &PlayerSpec::Random,
            &PlayerSpec::Random,
            &initial,
            &quick_settings(4, false),
        );

        assert_eq!(result.games_played, 4);
        assert_eq!(result.first_wins + result.second_wins + result.unfinished, 4);
        assert_eq!(result.unfinished, 0);
        assert!(result.avg_moves > 0.0);
    }

    #[test]
    fn test_parallel_match_matches_game_count() {
        let initial = GameState::new(3).unwrap();
        let result = play_match(
            &PlayerSpec::AlphaBeta { depth: 1 },
            &PlayerSpec::Random,
            &initial,
            &quick_settings(4, true),
        );

        assert_eq!(result.games_played, 4);
        assert_eq!(result.outcomes.len(), 4);
    }

    #[test]
    fn test_zero_games() {
        let initial = GameState::new(3).unwrap();
        let result = play_match(
            &PlayerSpec::Random,
            &PlayerSpec::Random,
            &initial,
            &quick_settings(0, false),
        );
        assert_eq!(result.games_played, 0);
        assert_eq!(result.first_win_rate(), 0.0);
        assert_eq!(result.second_win_rate(), 0.0);
    }
}
