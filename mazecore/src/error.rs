use thiserror::Error;

use crate::dims::Cell;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid maze size {height}x{width}, both sides must be at least 1")]
    InvalidDimension { height: i32, width: i32 },
    #[error("Cell {0} is outside of the maze")]
    InvalidCell(Cell),
    #[error("Cells {0} and {1} are not neighbors")]
    NotAdjacent(Cell, Cell),
    #[error("Unknown strategy '{0}', expected one of: bfs, dfs, astar")]
    UnknownStrategy(String),
    #[error("Unknown generation algorithm '{0}', expected one of: dfs, kruskals")]
    UnknownAlgorithm(String),
}
