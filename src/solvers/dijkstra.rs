use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::grid::{CellKind, Grid};
use crate::{Pacing, RunOutcome};

const SCAN_STEP: Duration = Duration::from_millis(5);
const TRACE_STEP: Duration = Duration::from_millis(10);

/// Uniform-cost shortest path from the designated start to the designated
/// end, over unit-weight edges between cells joined by an open wall.
///
/// The open list is unordered; selection sorts by distance descending and
/// pops the last element, which keeps the tie-break consistent within a run.
/// Whatever happens (success, no route, cancellation), the exploration
/// scaffolding is reverted before returning; only a found path stays tagged.
pub fn solve(shared: &Mutex<Grid>, run: &AtomicBool, pacing: Pacing) -> RunOutcome {
    let (start, end, width, height) = {
        let mut grid = shared.lock().unwrap();
        let (start, end) = match (grid.start(), grid.end()) {
            (Some(start), Some(end)) => (start, end),
            _ => return RunOutcome::MissingEndpoints,
        };
        grid.soft_reset();
        (start, end, grid.dims.width, grid.dims.height)
    };
    let index_of = |pos: (usize, usize)| pos.1 * width + pos.0;

    let mut distance = vec![usize::MAX; width * height];
    distance[index_of(start)] = 0;

    let mut open: Vec<(usize, usize)> = vec![start];
    let mut reached_end = false;

    while !open.is_empty() {
        if !run.load(Ordering::Relaxed) {
            break;
        }

        open.sort_by(|a, b| distance[index_of(*b)].cmp(&distance[index_of(*a)]));
        let current = open.pop().unwrap();

        if pacing.animated() {
            let mut grid = shared.lock().unwrap();
            grid.tag(current, CellKind::Path);
        }
        pacing.pause(SCAN_STEP);

        if current == end {
            reached_end = true;
            break;
        }

        let mut grid = shared.lock().unwrap();
        if pacing.animated() {
            grid.tag(current, CellKind::Visited);
        }
        grid.cell_mut(current).visited = true;

        let next_dist = distance[index_of(current)] + 1;
        for neighbor in grid.neighbors_by_open_wall(current) {
            if next_dist < distance[index_of(neighbor)] {
                distance[index_of(neighbor)] = next_dist;
                grid.cell_mut(neighbor).parent = Some(current);
                if !open.contains(&neighbor) {
                    open.push(neighbor);
                    if pacing.animated() {
                        grid.tag(neighbor, CellKind::Frontier);
                    }
                }
            }
        }
    }

    // exploration scaffolding goes away no matter how the loop ended
    {
        let mut grid = shared.lock().unwrap();
        grid.clear_tags(&[CellKind::Visited, CellKind::Frontier]);
    }

    if !reached_end {
        return if run.load(Ordering::Relaxed) {
            RunOutcome::NoPath
        } else {
            RunOutcome::Cancelled
        };
    }

    // walk the parent chain back from the end, highlighting the route
    let mut current = end;
    let mut steps = 0;
    loop {
        let mut grid = shared.lock().unwrap();
        match grid.cell(current).parent {
            Some(prev) => {
                current = prev;
                steps += 1;
                grid.tag(current, CellKind::Path);
                drop(grid);
                pacing.pause(TRACE_STEP);
            }
            None => break,
        }
    }

    RunOutcome::Solved(steps)
}

#[cfg(test)]
mod test_dijkstra {
    use super::*;
    use crate::generators::test_support::count_kind;
    use crate::generators::{backtracker, frontier};
    use rand::prelude::*;

    fn carved_grid(width: usize, height: usize, seed: u64) -> Grid {
        let shared = Mutex::new(Grid::with_dims(width, height));
        let mut rng = StdRng::seed_from_u64(seed);
        let run = AtomicBool::new(true);
        backtracker::carve(&shared, &mut rng, &run, Pacing::Instant);
        shared.into_inner().unwrap()
    }

    fn solve_instant(grid: Grid) -> (Grid, RunOutcome) {
        let shared = Mutex::new(grid);
        let run = AtomicBool::new(true);
        let outcome = solve(&shared, &run, Pacing::Instant);
        (shared.into_inner().unwrap(), outcome)
    }

    #[test]
    fn finds_a_path_through_a_carved_maze() {
        let mut grid = carved_grid(6, 6, 21);
        grid.set_start((0, 0));
        grid.set_end((5, 5));

        let (grid, outcome) = solve_instant(grid);
        let length = match outcome {
            RunOutcome::Solved(length) => length,
            other => panic!("expected a solved outcome, got {:?}", other),
        };

        // at least the Manhattan distance, and the highlighted route is the
        // path minus its two endpoints
        assert!(length >= 10);
        assert_eq!(count_kind(&grid, CellKind::Path), length - 1);
        assert_eq!(grid.cell((0, 0)).kind, CellKind::Start);
        assert_eq!(grid.cell((5, 5)).kind, CellKind::End);
    }

    #[test]
    fn repeated_solves_report_the_same_length() {
        let mut grid = carved_grid(8, 8, 4);
        grid.set_start((0, 0));
        grid.set_end((7, 7));

        let (grid, first) = solve_instant(grid);
        let (_, second) = solve_instant(grid);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_endpoints_is_a_clean_no_op() {
        let mut grid = carved_grid(4, 4, 9);
        grid.set_start((0, 0));
        // no end designated

        let before: Vec<[bool; 4]> = (0..4)
            .flat_map(|y| (0..4).map(move |x| (x, y)))
            .map(|pos| grid.cell(pos).walls)
            .collect();

        let (grid, outcome) = solve_instant(grid);
        assert_eq!(outcome, RunOutcome::MissingEndpoints);

        let after: Vec<[bool; 4]> = (0..4)
            .flat_map(|y| (0..4).map(move |x| (x, y)))
            .map(|pos| grid.cell(pos).walls)
            .collect();
        assert_eq!(before, after);
        assert_eq!(count_kind(&grid, CellKind::Path), 0);
    }

    #[test]
    fn same_cell_start_and_end_solves_with_zero_length() {
        let mut grid = carved_grid(4, 4, 13);
        grid.set_start((0, 0));
        grid.set_end((0, 0));

        let (grid, outcome) = solve_instant(grid);
        assert_eq!(outcome, RunOutcome::Solved(0));
        assert_eq!(count_kind(&grid, CellKind::Path), 0);
    }

    #[test]
    fn isolated_end_reports_no_path() {
        // open a few walls by hand, leaving (1, 1) sealed off
        let mut grid = Grid::with_dims(2, 2);
        grid.remove_walls((0, 0), (1, 0));
        grid.remove_walls((0, 0), (0, 1));
        grid.set_start((0, 0));
        grid.set_end((1, 1));

        let (grid, outcome) = solve_instant(grid);
        assert_eq!(outcome, RunOutcome::NoPath);
        assert_eq!(count_kind(&grid, CellKind::Path), 0);
        assert_eq!(count_kind(&grid, CellKind::Frontier), 0);
    }

    #[test]
    fn animated_solve_leaves_no_scaffolding() {
        let shared = Mutex::new(Grid::with_dims(5, 5));
        let mut rng = StdRng::seed_from_u64(30);
        let run = AtomicBool::new(true);
        frontier::carve(&shared, &mut rng, &run, Pacing::Instant);

        {
            let mut grid = shared.lock().unwrap();
            grid.set_start((0, 0));
            grid.set_end((4, 4));
        }

        let outcome = solve(&shared, &run, Pacing::Animated);
        assert!(matches!(outcome, RunOutcome::Solved(_)));

        let grid = shared.into_inner().unwrap();
        assert_eq!(count_kind(&grid, CellKind::Visited), 0);
        assert_eq!(count_kind(&grid, CellKind::Frontier), 0);
    }

    #[test]
    fn cancelled_solve_keeps_the_grid_presentable() {
        let mut grid = carved_grid(6, 6, 2);
        grid.set_start((0, 0));
        grid.set_end((5, 5));

        let shared = Mutex::new(grid);
        let run = AtomicBool::new(false);
        let outcome = solve(&shared, &run, Pacing::Instant);
        assert_eq!(outcome, RunOutcome::Cancelled);

        let grid = shared.into_inner().unwrap();
        assert_eq!(count_kind(&grid, CellKind::Visited), 0);
        assert_eq!(count_kind(&grid, CellKind::Frontier), 0);
        assert_eq!(count_kind(&grid, CellKind::Path), 0);
    }
}
