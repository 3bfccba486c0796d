//! Connection heuristic: shortest-path evaluation of edge-to-edge chains

use crate::board::Coord;
use crate::game::{GameState, Player};

/// Terminal win/loss sentinel; out-ranks every achievable heuristic score
pub const WIN_SCORE: i32 = 1_000_000;

/// Magnitude returned when a player has no edge-to-edge path left.
/// Sits above any reachable path score and below the win sentinel.
pub const BLOCKED_SCORE: i32 = 900_000;

/// Path scoring weights
const OWN_STONE_SCORE: i32 = 350;
const ENEMY_STONE_PENALTY: i32 = 400;

/// Traversal cost into a cell already owned by the evaluated player
const OWN_COST: u32 = 1;
/// Traversal cost into an empty cell
const EMPTY_COST: u32 = 5;
/// Extra cost per opponent stone adjacent to the entered cell
const ENEMY_NEIGHBOR_PENALTY: u32 = 5;

const INF: u32 = u32::MAX;

/// Evaluate `player`'s connection prospects with `last_played` (their own
/// most recent stone) as the shortest-path source. Higher favors `player`.
pub fn evaluate(state: &GameState, player: Player, last_played: Coord) -> i32 {
    score_from_sources(state, player, &[last_played])
}

/// Entry point for positions without a last move: seed the search from
/// every cell of the player's own source edge not held by the opponent.
pub fn evaluate_from_edges(state: &GameState, player: Player) -> i32 {
    let sources: Vec<Coord> = player
        .source_edge(state.size())
        .filter(|&c| state.owner(c) != Some(player.opponent()))
        .collect();
    score_from_sources(state, player, &sources)
}

fn score_from_sources(state: &GameState, player: Player, sources: &[Coord]) -> i32 {
    let field = DistanceField::compute(state, player, sources);
    match field.edge_to_edge_path(player) {
        Some(path) => path_score(state, player, &path),
        None => -BLOCKED_SCORE,
    }
}

// ============================================================================
// SHORTEST-PATH RELAXATION
// ============================================================================

/// Distances and predecessors from one Dijkstra run, discarded once the
/// path and score are extracted.
struct DistanceField {
    size: usize,
    dist: Vec<u32>,
    prev: Vec<Option<Coord>>,
}

impl DistanceField {
    /// Dijkstra over the board graph with ownership-dependent edge costs.
    /// Opponent cells are never entered, so they keep an infinite distance.
    /// The minimum-extraction scan is O(n) per step, fine for boards up to
    /// ~15x15.
    fn compute(state: &GameState, player: Player, sources: &[Coord]) -> Self {
        let size = state.size();
        let n = size * size;
        let mut dist = vec![INF; n];
        let mut prev: Vec<Option<Coord>> = vec![None; n];
        let mut visited = vec![false; n];

        for s in sources {
            dist[s.index(size)] = 0;
        }

        loop {
            let mut best: Option<(usize, u32)> = None;
            for i in 0..n {
                if !visited[i] && dist[i] < best.map_or(INF, |(_, d)| d) {
                    best = Some((i, dist[i]));
                }
            }
            let Some((i, d)) = best else { break };
            visited[i] = true;

            let cell = Coord::from_index(i, size);
            for neigh in cell.neighbors(size) {
                let ni = neigh.index(size);
                if visited[ni] {
                    continue;
                }
                let step = match state.owner(neigh) {
                    Some(p) if p == player => OWN_COST,
                    None => EMPTY_COST,
                    Some(_) => continue, // opponent stones block outright
                };
                let step = step + ENEMY_NEIGHBOR_PENALTY * enemy_neighbors(state, neigh, player);
                if d + step < dist[ni] {
                    dist[ni] = d + step;
                    prev[ni] = Some(cell);
                }
            }
        }

        Self { size, dist, prev }
    }

    fn distance(&self, c: Coord) -> u32 {
        self.dist[c.index(self.size)]
    }

    /// Cheapest reachable cell of an edge
    fn cheapest(&self, edge: impl Iterator<Item = Coord>) -> Option<Coord> {
        edge.filter(|&c| self.distance(c) != INF)
            .min_by_key(|&c| self.distance(c))
    }

    /// Predecessor walk from `from` down to a distance-zero source
    fn walk_to_source(&self, from: Coord) -> Vec<Coord> {
        let mut path = vec![from];
        let mut cur = from;
        while let Some(p) = self.prev[cur.index(self.size)] {
            path.push(p);
            cur = p;
        }
        path
    }

    /// Join the predecessor walks from the cheapest source-edge and
    /// goal-edge cells into one edge-to-edge sequence. `None` when either
    /// edge is unreachable.
    fn edge_to_edge_path(&self, player: Player) -> Option<Vec<Coord>> {
        let source_end = self.cheapest(player.source_edge(self.size))?;
        let goal_end = self.cheapest(player.goal_edge(self.size))?;

        let mut path = self.walk_to_source(source_end);
        for c in self.walk_to_source(goal_end).into_iter().rev() {
            if !path.contains(&c) {
                path.push(c);
            }
        }
        Some(path)
    }
}

fn enemy_neighbors(state: &GameState, c: Coord, player: Player) -> u32 {
    let enemy = player.opponent();
    c.neighbors(state.size())
        .filter(|&n| state.owner(n) == Some(enemy))
        .count() as u32
}

fn path_score(state: &GameState, player: Player, path: &[Coord]) -> i32 {
    let mut score = 0;
    for &c in path {
        match state.owner(c) {
            Some(p) if p == player => score += OWN_STONE_SCORE,
            Some(_) => score -= ENEMY_STONE_PENALTY,
            None => {}
        }
    }
    score
}

// ============================================================================
// TESTS
// ============================================================================
