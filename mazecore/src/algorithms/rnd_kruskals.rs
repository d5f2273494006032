use rand::seq::SliceRandom;

use super::{Maze, MazeAlgorithm, Random};
use crate::{dims::Cell, maze::CellWall};

use CellWall::*;

/// Randomized Kruskal's algorithm: knock down shuffled walls between disjoint regions.
#[derive(Debug)]
pub struct RndKruskals;

impl MazeAlgorithm for RndKruskals {
    fn carve(&self, maze: &mut Maze, rng: &mut Random) {
        let mut walls: Vec<(Cell, CellWall)> = Vec::new();
        for pos in maze.cells() {
            for wall in [Right, Bottom] {
                if maze.is_valid_wall(pos, wall) {
                    walls.push((pos, wall));
                }
            }
        }

        let mut sets = DisjointSets::new(maze.cell_count());
        let index = |maze: &Maze, pos: Cell| (pos.0 * maze.width() + pos.1) as usize;

        walls.shuffle(rng);
        let mut removed = 0;
        while let Some((from, wall)) = walls.pop() {
            let to = from + wall.to_coord();

            if sets.union(index(maze, from), index(maze, to)) {
                maze.remove_wall(from, wall);
                removed += 1;
            }
        }

        log::trace!("Kruskal's carve removed {} walls", removed);
    }
}

struct DisjointSets {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSets {
    fn new(count: usize) -> Self {
        Self {
            parent: (0..count).collect(),
            rank: vec![0; count],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merges the sets of `a` and `b`, returns `false` if they were already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (a, b) = (self.find(a), self.find(b));
        if a == b {
            return false;
        }

        match self.rank[a].cmp(&self.rank[b]) {
            std::cmp::Ordering::Less => self.parent[a] = b,
            std::cmp::Ordering::Greater => self.parent[b] = a,
            std::cmp::Ordering::Equal => {
                self.parent[b] = a;
                self.rank[a] += 1;
            }
        }
        true
    }
}
