mod depth_first_search;
mod rnd_kruskals;

use std::{fmt, str::FromStr};

use rand::{thread_rng, Rng as _, SeedableRng as _};

use crate::{dims::Cell, error::MazeError, maze::Maze};
pub use depth_first_search::DepthFirstSearch;
pub use rnd_kruskals::RndKruskals;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Carves passages into a fully walled maze.
///
/// Implementations must leave the maze as a spanning tree: every cell reachable from every other
/// one through exactly one simple path.
pub trait MazeAlgorithm: fmt::Debug + Sync + Send {
    fn carve(&self, maze: &mut Maze, rng: &mut Random);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenAlgorithm {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "dfs"))]
    DepthFirstSearch,
    #[cfg_attr(feature = "serde", serde(rename = "kruskals"))]
    RndKruskals,
}

impl GenAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DepthFirstSearch => "dfs",
            Self::RndKruskals => "kruskals",
        }
    }

    pub fn generator(&self) -> &'static dyn MazeAlgorithm {
        match self {
            Self::DepthFirstSearch => &DepthFirstSearch,
            Self::RndKruskals => &RndKruskals,
        }
    }
}

impl FromStr for GenAlgorithm {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" | "backtracker" => Ok(Self::DepthFirstSearch),
            "kruskals" | "kruskal" => Ok(Self::RndKruskals),
            _ => Err(MazeError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for GenAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generates a `height x width` maze with the default algorithm (randomized depth-first carve).
///
/// The same seed always produces the same maze. Without a seed, one is drawn from the thread
/// RNG and stored in the maze, see [`Maze::seed`].
pub fn generate(height: i32, width: i32, seed: Option<u64>) -> Result<Maze, MazeError> {
    generate_with(height, width, seed, GenAlgorithm::default())
}

pub fn generate_with(
    height: i32,
    width: i32,
    seed: Option<u64>,
    algorithm: GenAlgorithm,
) -> Result<Maze, MazeError> {
    let mut maze = Maze::walled(height, width)?;

    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    let mut rng = Random::seed_from_u64(seed);

    algorithm.generator().carve(&mut maze, &mut rng);
    maze.seed = Some(seed);

    log::debug!(
        "Generated {}x{} maze with {} (seed {}, {} passages)",
        height,
        width,
        algorithm,
        seed,
        maze.passages().count()
    );

    Ok(maze)
}

/// Random cell of the maze.
pub fn random_cell(maze: &Maze, rng: &mut Random) -> Cell {
    let idx = rng.gen_range(0..maze.cell_count());
    maze.tiles.idx_to_dim(idx).unwrap_or_else(|| maze.start())
}

/// Random start and goal, distinct unless the maze has a single cell.
pub fn random_endpoints(maze: &Maze, rng: &mut Random) -> (Cell, Cell) {
    let start = random_cell(maze, rng);
    let count = maze.cell_count();
    if count == 1 {
        return (start, start);
    }

    // draw among the other cells by skipping over the start's index
    let start_idx = maze.tiles.dim_to_idx(start).unwrap_or(0);
    let idx = rng.gen_range(0..count - 1);
    let goal_idx = if idx >= start_idx { idx + 1 } else { idx };

    let goal = maze.tiles.idx_to_dim(goal_idx).unwrap_or_else(|| maze.goal());
    (start, goal)
}

#[cfg(test)]
mod tests {
    use hashbrown::HashSet;

    use super::*;
    use crate::dims::Cell;

    const ALGORITHMS: [GenAlgorithm; 2] =
        [GenAlgorithm::DepthFirstSearch, GenAlgorithm::RndKruskals];

    fn reachable(maze: &Maze, from: Cell) -> HashSet<Cell> {
        let mut seen = HashSet::new();
        let mut stack = vec![from];
        seen.insert(from);
        while let Some(cell) = stack.pop() {
            for n in maze.neighbors(cell) {
                if seen.insert(n) {
                    stack.push(n);
                }
            }
        }
        seen
    }

    #[test]
    fn rejects_invalid_size() {
        for algo in ALGORITHMS {
            assert_eq!(
                generate_with(0, 5, Some(1), algo),
                Err(MazeError::InvalidDimension {
                    height: 0,
                    width: 5
                })
            );
            assert!(generate_with(4, -2, Some(1), algo).is_err());
        }
    }

    #[test]
    fn single_cell() {
        for algo in ALGORITHMS {
            let maze = generate_with(1, 1, Some(7), algo).unwrap();
            assert_eq!(maze.passages().count(), 0);
            assert_eq!(maze.start(), maze.goal());
        }
    }

    #[test]
    fn spanning_tree_and_connected() {
        for algo in ALGORITHMS {
            for (h, w) in [(1, 5), (5, 1), (2, 2), (3, 3), (7, 4), (10, 13)] {
                for seed in 0..10 {
                    let maze = generate_with(h, w, Some(seed), algo).unwrap();
                    assert_eq!(maze.passages().count(), (h * w - 1) as usize);
                    assert_eq!(reachable(&maze, maze.start()).len(), (h * w) as usize);
                }
            }
        }
    }

    #[test]
    fn passages_are_symmetric() {
        let maze = generate(6, 6, Some(3)).unwrap();
        for cell in maze.cells() {
            for n in maze.neighbors(cell) {
                assert_eq!(cell.manhattan(n), 1);
                assert!(maze.is_open(n, cell));
            }
        }
    }

    #[test]
    fn deterministic_with_seed() {
        for algo in ALGORITHMS {
            let a = generate_with(12, 9, Some(42), algo).unwrap();
            let b = generate_with(12, 9, Some(42), algo).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.seed(), Some(42));
        }
    }

    #[test]
    fn seeds_differ() {
        let a = generate(12, 12, Some(1)).unwrap();
        let b = generate(12, 12, Some(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn unseeded_records_seed() {
        let maze = generate(4, 4, None).unwrap();
        let seed = maze.seed().unwrap();
        assert_eq!(generate(4, 4, Some(seed)).unwrap(), maze);
    }

    #[test]
    fn random_endpoints_are_distinct_cells() {
        let maze = generate(4, 6, Some(8)).unwrap();
        let mut rng = Random::seed_from_u64(8);
        let mut starts = HashSet::new();
        for _ in 0..200 {
            let (start, goal) = random_endpoints(&maze, &mut rng);
            assert!(maze.is_in_bounds(start));
            assert!(maze.is_in_bounds(goal));
            assert_ne!(start, goal);
            starts.insert(start);
        }
        assert!(starts.len() > 1);

        let cell = random_cell(&maze, &mut rng);
        assert!(maze.is_in_bounds(cell));
    }

    #[test]
    fn random_endpoints_single_cell() {
        let maze = generate(1, 1, Some(0)).unwrap();
        let mut rng = Random::seed_from_u64(0);
        assert_eq!(random_endpoints(&maze, &mut rng), (Cell(0, 0), Cell(0, 0)));
    }

    #[test]
    fn random_endpoints_follow_seed() {
        let maze = generate(5, 5, Some(1)).unwrap();
        let a = random_endpoints(&maze, &mut Random::seed_from_u64(3));
        let b = random_endpoints(&maze, &mut Random::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn algorithm_names() {
        assert_eq!("dfs".parse(), Ok(GenAlgorithm::DepthFirstSearch));
        assert_eq!("Kruskals".parse(), Ok(GenAlgorithm::RndKruskals));
        assert_eq!(
            "prim".parse::<GenAlgorithm>(),
            Err(MazeError::UnknownAlgorithm("prim".into()))
        );
        for algo in ALGORITHMS {
            assert_eq!(algo.as_str().parse(), Ok(algo));
        }
    }
}
