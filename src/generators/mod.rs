pub mod backtracker;
pub mod frontier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    Backtracker,
    Frontier,
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::grid::{CellKind, Grid, DIRECTIONS};

    /// Number of open wall pairs; each removal opens one wall on each side.
    pub fn open_wall_pairs(grid: &Grid) -> usize {
        let mut open = 0;
        for y in 0..grid.dims.height {
            for x in 0..grid.dims.width {
                open += grid
                    .cell((x, y))
                    .walls
                    .iter()
                    .filter(|&&wall| !wall)
                    .count();
            }
        }
        open / 2
    }

    pub fn assert_wall_symmetry(grid: &Grid) {
        for y in 0..grid.dims.height {
            for x in 0..grid.dims.width {
                for &dir in DIRECTIONS.iter() {
                    if let Some(neighbor) = grid.neighbor_in((x, y), dir) {
                        assert_eq!(
                            grid.cell((x, y)).walls[dir as usize],
                            grid.cell(neighbor).walls[(-dir) as usize],
                            "wall between {:?} and {:?} is asymmetric",
                            (x, y),
                            neighbor
                        );
                    }
                }
            }
        }
    }

    /// Cells reachable from `(0, 0)` through open walls, on a scratch copy so
    /// the caller's visited flags are untouched.
    pub fn reachable_cells(grid: &Grid) -> usize {
        let mut scratch = grid.clone();
        scratch.soft_reset();

        let mut stack = vec![(0, 0)];
        scratch.cell_mut((0, 0)).visited = true;
        let mut reached = 0;
        while let Some(pos) = stack.pop() {
            reached += 1;
            for neighbor in scratch.neighbors_by_open_wall(pos) {
                scratch.cell_mut(neighbor).visited = true;
                stack.push(neighbor);
            }
        }
        reached
    }

    pub fn count_kind(grid: &Grid, kind: CellKind) -> usize {
        let mut count = 0;
        for y in 0..grid.dims.height {
            for x in 0..grid.dims.width {
                if grid.cell((x, y)).kind == kind {
                    count += 1;
                }
            }
        }
        count
    }
}
