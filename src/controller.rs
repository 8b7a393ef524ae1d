use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use log::{debug, info};
use rand::prelude::*;

use crate::generators::{backtracker, frontier, GeneratorKind};
use crate::grid::Grid;
use crate::solvers::dijkstra;
use crate::{Pacing, RunOutcome};

/// Owns the single background execution slot.
///
/// The grid lives behind a mutex the worker locks for one algorithm step at a
/// time; the run flag is the only other cross-actor signal. The presentation
/// actor reads through [`Controller::snapshot`] and drives housekeeping by
/// calling [`Controller::maintain`] once per frame.
///
/// All randomness flows from one RNG seeded at construction, so a seeded
/// controller replays identical runs.
pub struct Controller {
    shared: Arc<Mutex<Grid>>,
    run_flag: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
    outcome: Arc<Mutex<Option<RunOutcome>>>,
    rng: StdRng,
    needs_cleanup: bool,
}

impl Controller {
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_rng(width, height, StdRng::from_entropy())
    }

    /// Deterministic controller for reproducible scenario runs.
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Self {
        Self::from_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn from_rng(width: usize, height: usize, rng: StdRng) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Grid::with_dims(width, height))),
            run_flag: Arc::new(AtomicBool::new(false)),
            worker: None,
            outcome: Arc::new(Mutex::new(None)),
            rng,
            needs_cleanup: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_flag.load(Ordering::Relaxed)
    }

    /// Clone of the current grid state, for rendering. Best-effort "latest
    /// observed state" while a worker is mid-run.
    pub fn snapshot(&self) -> Grid {
        self.shared.lock().unwrap().clone()
    }

    pub fn last_outcome(&self) -> Option<RunOutcome> {
        *self.outcome.lock().unwrap()
    }

    /// Starts an animated generation run. Returns `false` without queuing if
    /// a run is already active.
    pub fn generate(&mut self, kind: GeneratorKind) -> bool {
        if self.is_running() {
            debug!("generate({:?}) ignored, a run is active", kind);
            return false;
        }
        self.reap_worker();
        self.needs_cleanup = true;

        let shared = Arc::clone(&self.shared);
        let flag = Arc::clone(&self.run_flag);
        let outcome = Arc::clone(&self.outcome);
        let mut rng = self.derive_rng();

        info!("starting {:?} generation", kind);
        self.run_flag.store(true, Ordering::Relaxed);
        self.worker = Some(thread::spawn(move || {
            let result = match kind {
                GeneratorKind::Backtracker => {
                    backtracker::carve(&shared, &mut rng, &flag, Pacing::Animated)
                }
                GeneratorKind::Frontier => {
                    frontier::carve(&shared, &mut rng, &flag, Pacing::Animated)
                }
            };
            info!("generation finished: {:?}", result);
            *outcome.lock().unwrap() = Some(result);
            // the handshake: the flag drops on every exit path so the
            // controller will accept the next command
            flag.store(false, Ordering::Relaxed);
        }));
        true
    }

    /// Starts an animated solve run. Missing endpoints default to the grid
    /// corners, and an untouched grid gets an instant frontier carve first so
    /// solving always has a maze to work on. Returns `false` if a run is
    /// already active.
    pub fn solve(&mut self) -> bool {
        if self.is_running() {
            debug!("solve ignored, a run is active");
            return false;
        }
        self.reap_worker();
        self.needs_cleanup = false;

        {
            let mut grid = self.shared.lock().unwrap();
            let (width, height) = (grid.dims.width, grid.dims.height);
            if grid.start().is_none() {
                grid.set_start((0, 0));
            }
            if grid.end().is_none() {
                grid.set_end((width - 1, height - 1));
            }
        }

        let shared = Arc::clone(&self.shared);
        let flag = Arc::clone(&self.run_flag);
        let outcome = Arc::clone(&self.outcome);
        let mut rng = self.derive_rng();

        info!("starting solve");
        self.run_flag.store(true, Ordering::Relaxed);
        self.worker = Some(thread::spawn(move || {
            let needs_maze = !shared.lock().unwrap().is_carved();
            if needs_maze {
                frontier::carve(&shared, &mut rng, &flag, Pacing::Instant);
            }
            let result = dijkstra::solve(&shared, &flag, Pacing::Animated);
            info!("solve finished: {:?}", result);
            *outcome.lock().unwrap() = Some(result);
            flag.store(false, Ordering::Relaxed);
        }));
        true
    }

    /// Full reset, erasing Start/End. Rejected while a run is active.
    pub fn reset(&mut self) -> bool {
        if self.is_running() {
            debug!("reset ignored, a run is active");
            return false;
        }
        self.reap_worker();
        self.shared.lock().unwrap().full_reset();
        true
    }

    /// Toggles the start designation on `pos`. Rejected while a run is
    /// active or when `pos` is out of bounds.
    pub fn set_start(&mut self, pos: (usize, usize)) -> bool {
        if self.is_running() {
            debug!("set_start ignored, a run is active");
            return false;
        }
        let mut grid = self.shared.lock().unwrap();
        if !grid.in_bounds(pos) {
            return false;
        }
        grid.set_start(pos);
        true
    }

    /// Toggles the end designation on `pos`; same rules as
    /// [`Controller::set_start`].
    pub fn set_end(&mut self, pos: (usize, usize)) -> bool {
        if self.is_running() {
            debug!("set_end ignored, a run is active");
            return false;
        }
        let mut grid = self.shared.lock().unwrap();
        if !grid.in_bounds(pos) {
            return false;
        }
        grid.set_end(pos);
        true
    }

    /// Requests cancellation. The worker observes the flag at its next loop
    /// iteration and exits cleanly; the grid stays valid, if incomplete.
    pub fn cancel(&self) {
        self.run_flag.store(false, Ordering::Relaxed);
    }

    /// Frame-loop housekeeping: reaps a finished worker and, after a
    /// generation run, reverts the leftover scaffolding tags.
    pub fn maintain(&mut self) {
        if self.is_running() {
            return;
        }
        self.reap_worker();
        if self.needs_cleanup {
            self.shared.lock().unwrap().clear_transients();
            self.needs_cleanup = false;
        }
    }

    /// Blocks until the current run (if any) is done, then runs the same
    /// cleanup [`Controller::maintain`] would.
    pub fn wait_for_idle(&mut self) {
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
        self.maintain();
    }

    fn reap_worker(&mut self) {
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    fn derive_rng(&mut self) -> StdRng {
        StdRng::seed_from_u64(self.rng.gen())
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.cancel();
        self.reap_worker();
    }
}
