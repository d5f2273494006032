use smallvec::SmallVec;

use super::tile::{CellWall, Tile};
use crate::{array::Array2D, dims::Cell, error::MazeError};

use CellWall::*;

/// Rectangular grid of cells with the passages between them.
///
/// The maze is read-only once generated; solvers only ever borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub(crate) tiles: Array2D<Tile>,
    pub(crate) seed: Option<u64>,
}

impl Maze {
    /// Grid with every wall standing, so no cell is connected to any other.
    pub fn walled(height: i32, width: i32) -> Result<Self, MazeError> {
        if height < 1 || width < 1 {
            return Err(MazeError::InvalidDimension { height, width });
        }

        Ok(Maze {
            tiles: Array2D::new(Tile::new(), height as usize, width as usize),
            seed: None,
        })
    }

    pub fn height(&self) -> i32 {
        self.tiles.height() as i32
    }

    pub fn width(&self) -> i32 {
        self.tiles.width() as i32
    }

    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    /// Seed the maze was carved with, `None` for hand-built mazes.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn start(&self) -> Cell {
        Cell::ZERO
    }

    pub fn goal(&self) -> Cell {
        Cell(self.height() - 1, self.width() - 1)
    }

    pub fn is_in_bounds(&self, pos: Cell) -> bool {
        0 <= pos.0 && pos.0 < self.height() && 0 <= pos.1 && pos.1 < self.width()
    }

    pub fn is_valid_neighbor(&self, cell: Cell, off: Cell) -> bool {
        off.abs_sum() == 1 && self.is_in_bounds(cell) && self.is_in_bounds(cell + off)
    }

    pub fn is_valid_wall(&self, cell: Cell, wall: CellWall) -> bool {
        self.is_valid_neighbor(cell, wall.to_coord())
    }

    /// Returns the wall of `cell` that faces `cell2`, or `None` if they aren't adjacent.
    pub fn which_wall_between(cell: Cell, cell2: Cell) -> Option<CellWall> {
        match (cell.0 - cell2.0, cell.1 - cell2.1) {
            (1, 0) => Some(Top),
            (0, 1) => Some(Left),
            (-1, 0) => Some(Bottom),
            (0, -1) => Some(Right),
            _ => None,
        }
    }

    /// In-bounds orthogonal neighbors, walls ignored.
    pub fn get_neighbors_pos(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        CellWall::get_in_order()
            .into_iter()
            .filter(|wall| self.is_valid_wall(cell, *wall))
            .map(|wall| cell + wall.to_coord())
            .collect()
    }

    /// Neighbors reachable from `cell` through an open passage, in up, left, down, right order.
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        let Some(tile) = self.tiles.get(cell) else {
            return SmallVec::new();
        };

        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| tile.is_open(wall) && self.is_valid_wall(cell, wall))
            .map(|wall| cell + wall.to_coord())
            .collect()
    }

    pub fn is_open(&self, a: Cell, b: Cell) -> bool {
        match (Self::which_wall_between(a, b), self.tiles.get(a)) {
            (Some(wall), Some(tile)) => self.is_in_bounds(b) && tile.is_open(wall),
            _ => false,
        }
    }

    /// Removes `wall` of `cell` together with the matching wall of the neighbor.
    ///
    /// Walls on the outer border are left untouched.
    pub fn remove_wall(&mut self, cell: Cell, wall: CellWall) {
        if !self.is_valid_wall(cell, wall) {
            return;
        }

        self.tiles[cell].remove_wall(wall);
        self.tiles[cell + wall.to_coord()].remove_wall(wall.reverse_wall());
    }

    /// Opens the passage between two adjacent cells.
    pub fn carve(&mut self, a: Cell, b: Cell) -> Result<(), MazeError> {
        for cell in [a, b] {
            if !self.is_in_bounds(cell) {
                return Err(MazeError::InvalidCell(cell));
            }
        }

        let wall = Self::which_wall_between(a, b).ok_or(MazeError::NotAdjacent(a, b))?;
        self.remove_wall(a, wall);
        Ok(())
    }

    pub fn get_tile(&self, pos: Cell) -> Option<&Tile> {
        self.tiles.get(pos)
    }

    pub fn get_tiles(&self) -> &Array2D<Tile> {
        &self.tiles
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.tiles.iter_pos()
    }

    /// Every open passage exactly once, as `(cell, right or lower neighbor)`.
    pub fn passages(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.cells().flat_map(move |cell| {
            [Right, Bottom]
                .into_iter()
                .filter(move |&wall| self.is_valid_wall(cell, wall) && self.tiles[cell].is_open(wall))
                .map(move |wall| (cell, cell + wall.to_coord()))
        })
    }
}
