//! Flood-fill capture
//!
//! A move recolors the mover's territory to the chosen color and counts every
//! cell the territory now covers. Cells that already carry the chosen color
//! are counted without recoloring, and the traversal keeps absorbing
//! through them.
//!
//! The traversal is depth-first with neighbors visited left, right, up, down.
//! Entering a cell that already has the chosen color forks the visited set:
//! the sub-branch continues with a private copy, so cells it reaches are not
//! marked for sibling branches. A cell reachable through two such branches is
//! counted once per branch. Scores follow this rule exactly.
//!
//! Recursion is replaced with an explicit frame stack. Forked visited sets
//! are created and dropped in frame order, so they live on a stack too.

use crate::board::{Color, Pos};

/// Neighbor offsets in visiting order: left, right, up, down
const NEIGHBORS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// One pending cell in the depth-first traversal
struct Frame {
    idx: usize,
    /// Color that keeps the traversal going from this cell
    absorbing: Color,
    /// Index of the visited set this branch reads and writes
    set: usize,
    /// Whether this frame forked `set` and must drop it when done
    owns_set: bool,
    next_neighbor: usize,
}

struct Fill<'a> {
    cells: &'a mut [Color],
    width: usize,
    height: usize,
    new_color: Color,
    visited: Vec<Vec<bool>>,
    frames: Vec<Frame>,
    score: u32,
}

impl Fill<'_> {
    fn enter(&mut self, idx: usize, mut absorbing: Color, mut set: usize) {
        self.visited[set][idx] = true;

        let mut owns_set = false;
        if self.cells[idx] != absorbing {
            if self.cells[idx] != self.new_color {
                return;
            }
            // Already the chosen color: count it and keep going on a forked set
            let fork = self.visited[set].clone();
            self.visited.push(fork);
            set = self.visited.len() - 1;
            owns_set = true;
            absorbing = self.new_color;
        }

        self.cells[idx] = self.new_color;
        self.score += 1;
        self.frames.push(Frame {
            idx,
            absorbing,
            set,
            owns_set,
            next_neighbor: 0,
        });
    }

    fn neighbor(&self, idx: usize, (dx, dy): (isize, isize)) -> Option<usize> {
        let x = (idx % self.width).checked_add_signed(dx)?;
        let y = (idx / self.width).checked_add_signed(dy)?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    fn run(mut self, start: usize) -> u32 {
        let start_color = self.cells[start];
        self.enter(start, start_color, 0);

        while let Some(frame) = self.frames.last_mut() {
            if frame.next_neighbor == NEIGHBORS.len() {
                let owned = frame.owns_set;
                self.frames.pop();
                if owned {
                    self.visited.pop();
                }
                continue;
            }

            let offset = NEIGHBORS[frame.next_neighbor];
            frame.next_neighbor += 1;
            let (idx, absorbing, set) = (frame.idx, frame.absorbing, frame.set);

            if let Some(next) = self.neighbor(idx, offset) {
                if !self.visited[set][next] {
                    self.enter(next, absorbing, set);
                }
            }
        }

        self.score
    }
}

/// Recolor the territory grown from `start` to `new_color` and return the
/// number of cells counted for it.
///
/// `cells` is a row-major grid of `width * height` colors.
pub fn flood_fill(
    cells: &mut [Color],
    width: usize,
    height: usize,
    start: Pos,
    new_color: Color,
) -> u32 {
    debug_assert_eq!(cells.len(), width * height);
    let fill = Fill {
        visited: vec![vec![false; cells.len()]],
        cells,
        width,
        height,
        new_color,
        frames: Vec::new(),
        score: 0,
    };
    fill.run(start.to_index(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_recolors_connected_territory() {
        // 0 0 1
        // 0 2 1
        let mut cells = vec![0, 0, 1, 0, 2, 1];
        let score = flood_fill(&mut cells, 3, 2, Pos::new(0, 0), 3);
        assert_eq!(score, 3);
        assert_eq!(cells, vec![3, 3, 1, 3, 2, 1]);
    }

    #[test]
    fn test_fill_stops_at_third_color() {
        let mut cells = vec![0, 1, 0];
        let score = flood_fill(&mut cells, 3, 1, Pos::new(0, 0), 2);
        assert_eq!(score, 1);
        assert_eq!(cells, vec![2, 1, 0]);
    }

    #[test]
    fn test_fill_with_own_color_counts_territory() {
        // Priming case: new color equals the territory color
        let mut cells = vec![4, 4, 4, 1];
        let score = flood_fill(&mut cells, 4, 1, Pos::new(0, 0), 4);
        assert_eq!(score, 3);
        assert_eq!(cells, vec![4, 4, 4, 1]);
    }

    #[test]
    fn test_fill_absorbs_matching_neighbors() {
        // Territory 0 on the right, a 1-colored cell and then more 1 beyond it
        // 1 1 0
        // 2 2 0
        let mut cells = vec![1, 1, 0, 2, 2, 0];
        let score = flood_fill(&mut cells, 3, 2, Pos::new(2, 0), 1);
        assert_eq!(score, 4);
        assert_eq!(cells, vec![1, 1, 1, 2, 2, 1]);
    }

    #[test]
    fn test_fill_forked_branch_does_not_cross_old_color() {
        // Inside a forked branch the absorbing color is the new color, so
        // cells of the old territory color are a boundary there.
        // 2 1 0
        // 2 2 0
        let mut cells = vec![2, 1, 0, 2, 2, 0];
        let score = flood_fill(&mut cells, 3, 2, Pos::new(2, 0), 1);
        assert_eq!(score, 3);
        assert_eq!(cells, vec![2, 1, 1, 2, 2, 1]);
    }

    #[test]
    fn test_fill_counts_convergent_cell_twice() {
        // 2 1 0
        // 2 1 0
        // The 1-colored column touches the territory at both rows. The
        // branch forked at (1,0) counts (1,1) on its private visited set,
        // then the main traversal reaches (1,1) again from (2,1).
        let mut cells = vec![2, 1, 0, 2, 1, 0];
        let score = flood_fill(&mut cells, 3, 2, Pos::new(2, 0), 1);
        assert_eq!(score, 5);
        assert_eq!(cells, vec![2, 1, 1, 2, 1, 1]);
    }

    #[test]
    fn test_fill_single_cell_board() {
        let mut cells = vec![2];
        assert_eq!(flood_fill(&mut cells, 1, 1, Pos::new(0, 0), 0), 1);
        assert_eq!(cells, vec![0]);
    }

    #[test]
    fn test_fill_large_board_uses_no_recursion() {
        // A long snake of one color would overflow a recursive fill
        let width = 400;
        let height = 400;
        let mut cells = vec![0; width * height];
        let score = flood_fill(&mut cells, width, height, Pos::new(width - 1, 0), 1);
        assert_eq!(score as usize, width * height);
        assert!(cells.iter().all(|&c| c == 1));
    }
}
