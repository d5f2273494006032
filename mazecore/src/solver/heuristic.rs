use crate::dims::Cell;

/// Estimate of the remaining steps from `from` to `to`.
///
/// A* only returns shortest paths when the estimate never exceeds the real distance. It doesn't
/// need to be consistent: cells are reopened when a shorter route to them is found.
pub trait Heuristic {
    fn estimate(&self, from: Cell, to: Cell) -> usize;
}

/// Manhattan distance. Admissible and consistent on a 4-connected grid with unit steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, from: Cell, to: Cell) -> usize {
        from.manhattan(to)
    }
}

/// Always zero, which turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _from: Cell, _to: Cell) -> usize {
        0
    }
}

impl<F> Heuristic for F
where
    F: Fn(Cell, Cell) -> usize,
{
    fn estimate(&self, from: Cell, to: Cell) -> usize {
        self(from, to)
    }
}
