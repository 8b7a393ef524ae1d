use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use rand::prelude::*;

use crate::grid::{CellKind, Grid};
use crate::{Pacing, RunOutcome};

const CARVE_STEP: Duration = Duration::from_millis(15);

/// Depth-first backtracking carver.
///
/// Iterative on an explicit stack so the walk can be cancelled between any
/// two steps; the grid lock is held for one step at a time and released
/// before the pacing sleep, letting the presentation actor snapshot a
/// partially carved maze mid-run.
pub fn carve(
    shared: &Mutex<Grid>,
    rng: &mut StdRng,
    run: &AtomicBool,
    pacing: Pacing,
) -> RunOutcome {
    let mut stack: Vec<(usize, usize)> = Vec::new();

    {
        let mut grid = shared.lock().unwrap();
        grid.reset_for_carve();
        let start = grid.start().unwrap_or((0, 0));
        grid.cell_mut(start).visited = true;
        if pacing.animated() {
            grid.tag(start, CellKind::Path);
        }
        stack.push(start);
    }

    while let Some(&current) = stack.last() {
        if !run.load(Ordering::Relaxed) {
            break;
        }

        let chosen = {
            let mut grid = shared.lock().unwrap();
            let mut unvisited = grid.neighbors_by_visit_state(current, false);
            if unvisited.is_empty() {
                if pacing.animated() {
                    grid.tag(current, CellKind::Visited);
                }
                None
            } else {
                unvisited.shuffle(rng);
                let next = unvisited[0];
                grid.remove_walls(current, next);
                grid.cell_mut(next).visited = true;
                if pacing.animated() {
                    grid.tag(next, CellKind::Path);
                }
                Some(next)
            }
        };

        match chosen {
            Some(next) => {
                stack.push(next);
                pacing.pause(CARVE_STEP);
            }
            None => {
                stack.pop();
            }
        }
    }

    if run.load(Ordering::Relaxed) {
        RunOutcome::Generated
    } else {
        RunOutcome::Cancelled
    }
}
