use crate::dims::Cell;

use CellWall::*;

/// Walls around a single grid cell. `true` means the wall is standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    top: bool,
    left: bool,
    bottom: bool,
    right: bool,
}

impl Tile {
    pub fn new() -> Tile {
        Tile {
            top: true,
            left: true,
            bottom: true,
            right: true,
        }
    }

    pub fn remove_wall(&mut self, wall: CellWall) {
        match wall {
            Top => self.top = false,
            Left => self.left = false,
            Bottom => self.bottom = false,
            Right => self.right = false,
        }
    }

    pub fn get_wall(&self, wall: CellWall) -> bool {
        match wall {
            Top => self.top,
            Left => self.left,
            Bottom => self.bottom,
            Right => self.right,
        }
    }

    pub fn is_open(&self, wall: CellWall) -> bool {
        !self.get_wall(wall)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new()
    }
}

/// Side of a cell. Also doubles as the direction of a step through that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWall {
    Top,
    Left,
    Bottom,
    Right,
}

impl CellWall {
    pub fn to_coord(&self) -> Cell {
        match self {
            Self::Top => Cell(-1, 0),
            Self::Left => Cell(0, -1),
            Self::Bottom => Cell(1, 0),
            Self::Right => Cell(0, 1),
        }
    }

    pub fn reverse_wall(&self) -> CellWall {
        match self {
            Top => Bottom,
            Bottom => Top,
            Left => Right,
            Right => Left,
        }
    }

    /// Neighbor visitation order used by generators and solvers: up, left, down, right.
    pub const fn get_in_order() -> [CellWall; 4] {
        [Top, Left, Bottom, Right]
    }
}
