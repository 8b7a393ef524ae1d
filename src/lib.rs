//! Grid-based maze generation and pathfinding that animates its own progress.
//!
//! Algorithms run on a single background worker and mutate the shared grid in
//! short lock bursts, so a presentation loop can snapshot the grid every frame
//! while a carve or solve is still in flight. Cancellation is cooperative: the
//! worker checks one shared atomic flag at the top of each step.

pub mod controller;
pub mod generators;
pub mod grid;
pub mod solvers;

pub use controller::Controller;
pub use generators::GeneratorKind;
pub use grid::{Cell, CellKind, Dimensions, Direction, Grid};

/// Whether an algorithm paces itself (and tags cells) for a human observer.
///
/// `Instant` skips every sleep and every transient classification write; it is
/// what the implicit pre-solve generation runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    Animated,
    Instant,
}

impl Pacing {
    #[inline]
    pub fn animated(self) -> bool {
        self == Pacing::Animated
    }

    pub fn pause(self, step: std::time::Duration) {
        if self.animated() {
            std::thread::sleep(step);
        }
    }
}

/// Terminal state of a background run. None of these are errors; a solver
/// that finds no route or a run the user aborts are normal outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A generation pass carved the whole grid.
    Generated,
    /// The solver reached the end cell; payload is the path length in steps.
    Solved(usize),
    /// The open list drained before the end cell was reached.
    NoPath,
    /// Solve was requested without both endpoints designated.
    MissingEndpoints,
    /// The run flag was flipped before the algorithm finished.
    Cancelled,
}
