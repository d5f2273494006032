pub mod maze;
pub use maze::Maze;
pub mod tile;
pub use tile::{CellWall, Tile};
