use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use rand::prelude::*;

use crate::grid::{CellKind, Grid};
use crate::{Pacing, RunOutcome};

const EXPAND_STEP: Duration = Duration::from_millis(5);

/// Randomized frontier expansion (Prim-style) carver.
///
/// Frontier selection is by uniform random index rather than FIFO/LIFO to
/// avoid directional bias. Newly settled cells are tagged `Visited`; the
/// post-pass reverts every leftover `Path`/`Frontier` tag so the transient
/// visualization state never outlives the run.
pub fn carve(
    shared: &Mutex<Grid>,
    rng: &mut StdRng,
    run: &AtomicBool,
    pacing: Pacing,
) -> RunOutcome {
    let mut frontier: Vec<(usize, usize)> = Vec::new();

    {
        let mut grid = shared.lock().unwrap();
        grid.reset_for_carve();
        let start = grid.start().unwrap_or((0, 0));
        grid.cell_mut(start).visited = true;
        if pacing.animated() {
            grid.tag(start, CellKind::Visited);
        }
        grid.collect_frontier_neighbors(start, &mut frontier, pacing.animated());
    }

    while !frontier.is_empty() {
        if !run.load(Ordering::Relaxed) {
            break;
        }

        let index = rng.gen_range(0, frontier.len());
        let current = frontier.swap_remove(index);
        pacing.pause(EXPAND_STEP);

        let mut grid = shared.lock().unwrap();

        // a frontier cell borders at least one carved cell by construction;
        // the emptiness check is only a guard
        let carved = grid.neighbors_by_visit_state(current, true);
        if !carved.is_empty() {
            let into = carved[rng.gen_range(0, carved.len())];
            grid.remove_walls(current, into);
        }

        grid.cell_mut(current).visited = true;
        if pacing.animated() {
            grid.tag(current, CellKind::Visited);
        }
        grid.collect_frontier_neighbors(current, &mut frontier, pacing.animated());
    }

    if pacing.animated() {
        let mut grid = shared.lock().unwrap();
        grid.clear_tags(&[CellKind::Path, CellKind::Frontier]);
    }

    if run.load(Ordering::Relaxed) {
        RunOutcome::Generated
    } else {
        RunOutcome::Cancelled
    }
}
