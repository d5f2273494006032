use std::{
    fmt,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use paste::paste;

/// Grid position as `(row, col)`.
///
/// Also used for offsets between positions, in which case the components may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(pub i32, pub i32);

impl Cell {
    pub const ZERO: Cell = Cell(0, 0);

    pub fn row(&self) -> i32 {
        self.0
    }

    pub fn col(&self) -> i32 {
        self.1
    }

    pub fn abs_sum(&self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    /// Number of orthogonal steps between two cells, ignoring walls.
    pub fn manhattan(&self, other: Cell) -> usize {
        (*self - other).abs_sum() as usize
    }

    /// Iterates every cell of a `height x width` rectangle in row-major order.
    pub fn iter_fill(height: i32, width: i32) -> impl Iterator<Item = Cell> {
        (0..height.max(0)).flat_map(move |row| (0..width.max(0)).map(move |col| Cell(row, col)))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Cell(row, col)
    }
}

impl From<Cell> for (i32, i32) {
    fn from(cell: Cell) -> Self {
        (cell.0, cell.1)
    }
}

impl From<[i32; 2]> for Cell {
    fn from(arr: [i32; 2]) -> Self {
        Cell(arr[0], arr[1])
    }
}

impl Neg for Cell {
    type Output = Cell;

    fn neg(self) -> Cell {
        Cell(-self.0, -self.1)
    }
}

macro_rules! impl_op {
    ($trait:ident + Assign, $op:ident) => {
        impl_op!($trait, $op);

        paste! {
            impl [<$trait Assign>] for Cell {
                #[inline(always)]
                fn [<$op _assign>](&mut self, other: Cell) {
                    *self = self.$op(other);
                }
            }
        }
    };
    ($trait:ident, $op:ident) => {
        impl $trait for Cell {
            type Output = Cell;

            #[inline(always)]
            fn $op(self, other: Cell) -> Cell {
                Cell(self.0.$op(other.0), self.1.$op(other.1))
            }
        }
    };
}

impl_op!(Add + Assign, add);
impl_op!(Sub + Assign, sub);
