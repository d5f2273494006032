use hashbrown::HashSet;
use rand::seq::SliceRandom;
use smallvec::SmallVec;

use super::{Maze, MazeAlgorithm, Random};

/// Randomized depth-first carve (recursive backtracker) with an explicit stack.
#[derive(Debug)]
pub struct DepthFirstSearch;

impl MazeAlgorithm for DepthFirstSearch {
    fn carve(&self, maze: &mut Maze, rng: &mut Random) {
        let cell_count = maze.cell_count();

        let mut visited = HashSet::with_capacity(cell_count);
        let mut stack = Vec::with_capacity(cell_count);

        let start = maze.start();
        visited.insert(start);
        stack.push(start);
        while let Some(current) = stack.pop() {
            let unvisited_neighbors = maze
                .get_neighbors_pos(current)
                .into_iter()
                .filter(|cell| !visited.contains(cell))
                .collect::<SmallVec<[_; 4]>>();

            if let Some(&chosen) = unvisited_neighbors.choose(rng) {
                stack.push(current);
                if let Some(wall) = Maze::which_wall_between(current, chosen) {
                    maze.remove_wall(current, wall);
                }
                visited.insert(chosen);
                stack.push(chosen);
            }
        }

        log::trace!("Depth-first carve visited {} cells", visited.len());
    }
}
