pub mod frontier;
pub mod heuristic;

use std::{fmt, str::FromStr};

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use crate::{dims::Cell, error::MazeError, maze::Maze};
use frontier::{Entry, Fifo, Frontier, Lifo, Priority};
use heuristic::{Heuristic, Manhattan};

/// Search strategy used by [`solve`].
///
/// All strategies look at the open neighbors of a cell in the order up, left, down, right. That
/// order decides which of several equally long paths is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Breadth-first search, shortest path.
    #[default]
    Bfs,
    /// Depth-first search, some path.
    Dfs,
    /// A* with the Manhattan heuristic, shortest path.
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Bfs, Strategy::Dfs, Strategy::AStar];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::AStar => "astar",
        }
    }

    pub fn is_optimal(&self) -> bool {
        !matches!(self, Self::Dfs)
    }
}

impl FromStr for Strategy {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "astar" | "a*" => Ok(Self::AStar),
            _ => Err(MazeError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cells from start to goal, both included, each step going through an open passage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<Cell>);

impl Path {
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.0
    }

    /// Number of cells, never zero.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves, one less than the number of cells.
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }

    /// Checks that the path is non-empty, walks only through open passages and never repeats a
    /// cell.
    pub fn is_valid_in(&self, maze: &Maze) -> bool {
        let mut seen = HashSet::with_capacity(self.0.len());
        !self.0.is_empty()
            && self.0.iter().all(|&cell| maze.is_in_bounds(cell) && seen.insert(cell))
            && self.0.windows(2).all(|pair| maze.is_open(pair[0], pair[1]))
    }
}

impl AsRef<[Cell]> for Path {
    fn as_ref(&self) -> &[Cell] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Outcome of one search: the path, if any, and every expanded cell in expansion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    pub path: Option<Path>,
    pub explored: Vec<Cell>,
    /// Steps from the start when each cell was last expanded.
    depth: HashMap<Cell, usize>,
    came_from: HashMap<Cell, Cell>,
}

impl Search {
    pub fn explored_count(&self) -> usize {
        self.explored.len()
    }

    /// Share of the maze's cells that were expanded, from 0 to 1.
    pub fn coverage(&self, maze: &Maze) -> f64 {
        self.explored.len() as f64 / maze.cell_count() as f64
    }

    /// Depth of the last expanded cell. When a path was found this is its number of steps.
    pub fn depth(&self) -> usize {
        self.explored
            .last()
            .and_then(|cell| self.depth.get(cell))
            .copied()
            .unwrap_or(0)
    }

    pub fn max_depth(&self) -> usize {
        self.depth.values().copied().max().unwrap_or(0)
    }

    /// Tiles stepped on by a walker that carries out the search on foot, going from each
    /// expanded cell to the next one along the search tree. The start counts as one tile.
    pub fn walked(&self) -> usize {
        if self.explored.is_empty() {
            return 0;
        }

        1 + self
            .explored
            .windows(2)
            .map(|pair| self.tree_distance(pair[0], pair[1]))
            .sum::<usize>()
    }

    /// Moves between two expanded cells through their closest common ancestor.
    fn tree_distance(&self, mut a: Cell, mut b: Cell) -> usize {
        let depth = |cell: Cell| self.depth.get(&cell).copied().unwrap_or(0);

        // depth strictly decreases towards the root, so climbing the deeper side meets at the
        // common ancestor
        let mut steps = 0;
        while a != b {
            let (da, db) = (depth(a), depth(b));
            let mut moved = false;
            if da >= db {
                if let Some(&parent) = self.came_from.get(&a) {
                    a = parent;
                    steps += 1;
                    moved = true;
                }
            }
            if db >= da {
                if let Some(&parent) = self.came_from.get(&b) {
                    b = parent;
                    steps += 1;
                    moved = true;
                }
            }
            if !moved {
                break;
            }
        }
        steps
    }
}

/// Finds a path from `start` to `goal`.
///
/// Returns `Ok(None)` when the goal can't be reached; an error only when an endpoint is outside
/// of the maze.
pub fn solve(
    maze: &Maze,
    start: Cell,
    goal: Cell,
    strategy: Strategy,
) -> Result<Option<Path>, MazeError> {
    search(maze, start, goal, strategy).map(|search| search.path)
}

/// Same as [`solve`], but also reports the order in which cells were expanded.
pub fn search(
    maze: &Maze,
    start: Cell,
    goal: Cell,
    strategy: Strategy,
) -> Result<Search, MazeError> {
    let search = match strategy {
        Strategy::Bfs => traverse(maze, start, goal, Fifo::default()),
        Strategy::Dfs => traverse(maze, start, goal, Lifo::default()),
        Strategy::AStar => traverse(maze, start, goal, Priority::new(goal, Manhattan)),
    }?;

    log::debug!(
        "{} from {} to {}: expanded {} cells, {}",
        strategy,
        start,
        goal,
        search.explored_count(),
        match &search.path {
            Some(path) => format!("path of {} steps", path.steps()),
            None => "no path".to_string(),
        }
    );

    Ok(search)
}

/// A* with a custom heuristic.
///
/// The path is a shortest one as long as the heuristic never overestimates the remaining
/// distance. Cells are reopened when a shorter route to them turns up, so the heuristic doesn't
/// have to be consistent.
pub fn astar_with<H: Heuristic>(
    maze: &Maze,
    start: Cell,
    goal: Cell,
    heuristic: H,
) -> Result<Search, MazeError> {
    traverse(maze, start, goal, Priority::new(goal, heuristic))
}

/// Graph search shared by every strategy; only the frontier discipline differs.
///
/// With a relaxing frontier a cell is expanded again whenever it is popped with a smaller `g`
/// than at its last expansion. Otherwise every cell is expanded at most once.
pub fn traverse<F: Frontier>(
    maze: &Maze,
    start: Cell,
    goal: Cell,
    mut frontier: F,
) -> Result<Search, MazeError> {
    for cell in [start, goal] {
        if !maze.is_in_bounds(cell) {
            return Err(MazeError::InvalidCell(cell));
        }
    }

    let relaxes = frontier.relaxes();
    let mut closed = HashSet::with_capacity(maze.cell_count());
    let mut came_from = HashMap::new();
    let mut best_g = HashMap::new();
    let mut depth = HashMap::new();
    let mut explored = Vec::new();

    best_g.insert(start, 0);
    frontier.push(Entry {
        cell: start,
        parent: None,
        g: 0,
    });

    while let Some(Entry { cell, parent, g }) = frontier.pop() {
        if relaxes {
            // superseded by a shorter route
            if best_g.get(&cell).is_some_and(|&best| g > best)
                || depth.get(&cell).is_some_and(|&expanded| g >= expanded)
            {
                continue;
            }
            if closed.insert(cell) {
                explored.push(cell);
            }
        } else {
            if !closed.insert(cell) {
                continue;
            }
            explored.push(cell);
        }

        if let Some(parent) = parent {
            came_from.insert(cell, parent);
        }
        depth.insert(cell, g);

        if cell == goal {
            let path = reconstruct_path(&came_from, start, goal);
            return Ok(Search {
                path: Some(path),
                explored,
                depth,
                came_from,
            });
        }

        let mut next = SmallVec::<[Entry; 4]>::new();
        for neighbor in maze.neighbors(cell) {
            let tentative = g + 1;
            if relaxes {
                if best_g.get(&neighbor).is_some_and(|&best| best <= tentative) {
                    continue;
                }
                best_g.insert(neighbor, tentative);
            } else if closed.contains(&neighbor) {
                continue;
            }

            next.push(Entry {
                cell: neighbor,
                parent: Some(cell),
                g: tentative,
            });
        }
        frontier.extend(next);
    }

    Ok(Search {
        path: None,
        explored,
        depth,
        came_from,
    })
}

fn reconstruct_path(came_from: &HashMap<Cell, Cell>, start: Cell, goal: Cell) -> Path {
    let mut cells = vec![goal];
    let mut current = goal;
    while current != start {
        match came_from.get(&current) {
            Some(&parent) => {
                cells.push(parent);
                current = parent;
            }
            None => break,
        }
    }
    cells.reverse();
    Path(cells)
}
