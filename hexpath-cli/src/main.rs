//! HEXPATH CLI - Command-line interface
//!
//! Commands:
//! - play: single game, board rendered after every move
//! - match: a series of games between two configurations

use clap::{Parser, Subcommand, ValueEnum};
use hexpath_arena::{play_match, run_turn, MatchSettings, PlayerSpec};
use hexpath_core::{evaluate_from_edges, Coord, EngineConfig, GameState, HexPlayer, Player};
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "hexpath")]
#[command(about = "Hex engine with shortest-path evaluation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BotKind {
    Random,
    AlphaBeta,
    Iterative,
}

impl BotKind {
    fn spec(self, depth: u32) -> PlayerSpec {
        match self {
            BotKind::Random => PlayerSpec::Random,
            BotKind::AlphaBeta => PlayerSpec::AlphaBeta { depth },
            BotKind::Iterative => PlayerSpec::Iterative,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game and print the board after every move
    Play {
        #[arg(long, value_enum, default_value = "iterative")]
        white: BotKind,
        #[arg(long, value_enum, default_value = "alpha-beta")]
        black: BotKind,
        #[arg(long, default_value = "7")]
        size: usize,
        #[arg(long, default_value = "3")]
        depth: u32,
        #[arg(long, default_value = "1000")]
        budget_ms: u64,
        #[arg(long, default_value = "42")]
        seed: u64,
        /// JSON engine config overriding size/depth/budget/seed
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Play a series of games between two configurations
    Match {
        #[arg(long, value_enum, default_value = "alpha-beta")]
        first: BotKind,
        #[arg(long, value_enum, default_value = "random")]
        second: BotKind,
        #[arg(long, default_value = "7")]
        size: usize,
        #[arg(long, default_value = "10")]
        games: usize,
        #[arg(long, default_value = "2")]
        depth: u32,
        /// Per-turn budget for iterative players
        #[arg(long)]
        budget_ms: Option<u64>,
        #[arg(long, default_value = "42")]
        seed: u64,
        /// Run games in parallel
        #[arg(long)]
        parallel: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Play {
            white,
            black,
            size,
            depth,
            budget_ms,
            seed,
            config,
        } => {
            let (size, depth, budget_ms, seed) = match config {
                Some(path) => {
                    let cfg = EngineConfig::load(&path)?;
                    (
                        cfg.board_size,
                        cfg.depth,
                        cfg.time_budget_ms.unwrap_or(budget_ms),
                        cfg.seed.unwrap_or(seed),
                    )
                }
                None => (size, depth, budget_ms, seed),
            };
            play_command(white, black, size, depth, budget_ms, seed)
        }
        Commands::Match {
            first,
            second,
            size,
            games,
            depth,
            budget_ms,
            seed,
            parallel,
        } => match_command(first, second, size, games, depth, budget_ms, seed, parallel),
    }
}

fn play_command(
    white: BotKind,
    black: BotKind,
    size: usize,
    depth: u32,
    budget_ms: u64,
    seed: u64,
) -> anyhow::Result<()> {
    let mut state = GameState::new(size)?;
    let mut white_player = white.spec(depth).build(seed);
    let mut black_player = black.spec(depth).build(seed.wrapping_add(1));
    let budget = Duration::from_millis(budget_ms);

    tracing::info!(
        "{} (white) vs {} (black) on {size}x{size}",
        white_player.name(),
        black_player.name()
    );
    tracing::debug!(
        "opening outlook: white {}, black {}",
        evaluate_from_edges(&state, Player::White),
        evaluate_from_edges(&state, Player::Black)
    );

    println!("{}", render_board(&state));
    while !state.is_game_over() {
        let mover = state.current_player();
        let player = match mover {
            Player::White => white_player.as_mut(),
            Player::Black => black_player.as_mut(),
        };
        let result = run_turn(player, &state, Some(budget));
        let Some(mv) = result.best_move else {
            break;
        };
        state = state.apply_move(mv);
        println!(
            "{:?} plays ({}, {})  score {}  depth {}  nodes {}",
            mover, mv.row, mv.col, result.score, result.depth, result.nodes
        );
        println!("{}", render_board(&state));
    }

    match state.winner() {
        Some(winner) => {
            let stones = size * size - state.empty_cells();
            println!("{winner:?} wins after {stones} stones");
        }
        None => println!("no moves left"),
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn match_command(
    first: BotKind,
    second: BotKind,
    size: usize,
    games: usize,
    depth: u32,
    budget_ms: Option<u64>,
    seed: u64,
    parallel: bool,
) -> anyhow::Result<()> {
    let initial = GameState::new(size)?;
    let settings = MatchSettings {
        games,
        turn_budget: budget_ms.map(Duration::from_millis),
        base_seed: seed,
        parallel,
    };

    let first_spec = first.spec(depth);
    let second_spec = second.spec(depth);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("playing {games} games on {size}x{size}"));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let start = std::time::Instant::now();
    let result = play_match(&first_spec, &second_spec, &initial, &settings);
    spinner.finish_and_clear();

    tracing::info!("match finished in {:.2?}", start.elapsed());
    println!(
        "{:?} vs {:?}: {} games on {size}x{size}",
        first, second, result.games_played
    );
    println!(
        "  {:?}: {} wins ({:.0}%)",
        first,
        result.first_wins,
        100.0 * result.first_win_rate()
    );
    println!(
        "  {:?}: {} wins ({:.0}%)",
        second,
        result.second_wins,
        100.0 * result.second_win_rate()
    );
    if result.unfinished > 0 {
        println!("  unfinished: {}", result.unfinished);
    }
    println!("  average game length: {:.1} moves", result.avg_moves);
    Ok(())
}

/// Staircase rendering of the rhombic board
fn render_board(state: &GameState) -> String {
    let size = state.size();
    let mut out = String::new();
    for row in 0..size {
        for _ in 0..row {
            out.push(' ');
        }
        for col in 0..size {
            let cell = match state.owner(Coord::new(row as i8, col as i8)) {
                Some(Player::White) => 'W',
                Some(Player::Black) => 'B',
                None => '.',
            };
            out.push(cell);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board_staircase() {
        let state = GameState::new(3).unwrap().apply_move(Coord::new(0, 0));
        let rendered = render_board(&state);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("W . ."));
        assert!(lines[1].starts_with(" . ."));
        assert!(lines[2].starts_with("  . ."));
    }

    #[test]
    fn test_bot_kind_specs() {
        assert!(matches!(BotKind::Random.spec(3), PlayerSpec::Random));
        assert!(matches!(
            BotKind::AlphaBeta.spec(3),
            PlayerSpec::AlphaBeta { depth: 3 }
        ));
        assert!(matches!(BotKind::Iterative.spec(3), PlayerSpec::Iterative));
    }
}
