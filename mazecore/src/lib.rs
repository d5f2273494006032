//! Maze generation and solving on a rectangular grid.
//!
//! ```
//! use mazecore::{generate, solve, Strategy};
//!
//! let maze = generate(10, 10, Some(42)).unwrap();
//! let path = solve(&maze, maze.start(), maze.goal(), Strategy::AStar).unwrap();
//! assert!(path.is_some());
//! ```

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod error;
pub mod maze;
pub mod solver;

pub use algorithms::{generate, generate_with, random_endpoints, GenAlgorithm, Random};
pub use dims::Cell;
pub use error::MazeError;
pub use maze::Maze;
pub use solver::{astar_with, search, solve, Path, Search, Strategy};
