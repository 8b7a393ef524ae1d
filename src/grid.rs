const DEFAULT_DIMS: (usize, usize) = (50, 50);

/// One of the four orthogonal wall slots of a cell, in the fixed order the
/// wall array uses: top, right, bottom, left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

pub const DIRECTIONS: [Direction; 4] = [
    Direction::Top,
    Direction::Right,
    Direction::Bottom,
    Direction::Left,
];

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        match dir {
            0 => Direction::Top,
            1 => Direction::Right,
            2 => Direction::Bottom,
            3 => Direction::Left,
            _ => unreachable!(),
        }
    }
}

impl Direction {
    /// Lattice offset of the neighbor behind this wall.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Top => (0, -1),
            Direction::Right => (1, 0),
            Direction::Bottom => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// Classification of a cell, doing double duty as algorithm bookkeeping and
/// as the render hint the presentation layer maps to a color.
///
/// `Visited` and `Frontier` are scaffolding and never survive a run's cleanup
/// pass; `Path` is scaffolding during generation but durable after a
/// successful solve. `Empty`, `Start` and `End` are durable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty = 0,
    Start = 1,
    End = 2,
    Visited = 3,
    Path = 4,
    Frontier = 5,
}

impl From<u8> for CellKind {
    fn from(code: u8) -> Self {
        match code {
            0 => CellKind::Empty,
            1 => CellKind::Start,
            2 => CellKind::End,
            3 => CellKind::Visited,
            4 => CellKind::Path,
            5 => CellKind::Frontier,
            _ => unreachable!(),
        }
    }
}

impl CellKind {
    #[inline]
    pub fn is_endpoint(self) -> bool {
        self == CellKind::Start || self == CellKind::End
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone)]
pub struct Cell {
    /// `true` means the wall is present; indexed by `Direction`.
    pub walls: [bool; 4],
    pub kind: CellKind,
    /// Algorithm-local "settled" marker; meaning shifts between "carved" and
    /// "finalized distance" depending on which pass is running.
    pub visited: bool,
    /// Coordinates of the cell this one was reached from, for path
    /// reconstruction. Index-based on purpose; cells never move.
    pub parent: Option<(usize, usize)>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            walls: [true; 4],
            kind: CellKind::Empty,
            visited: false,
            parent: None,
        }
    }
}

/// Fixed `W x H` lattice of cells. Cells are allocated once and only ever
/// mutated in place, so `(x, y)` coordinates stay valid for the grid's whole
/// lifetime.
#[derive(Clone)]
pub struct Grid {
    pub dims: Dimensions,
    cells: Vec<Cell>,
    start: Option<(usize, usize)>,
    end: Option<(usize, usize)>,
}

impl Grid {
    pub fn new() -> Self {
        Self::with_dims(DEFAULT_DIMS.0, DEFAULT_DIMS.1)
    }

    pub fn with_dims(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0);
        Self {
            cells: vec![Cell::default(); width * height],
            dims: Dimensions { width, height },
            start: None,
            end: None,
        }
    }

    #[inline]
    fn index_of(&self, pos: (usize, usize)) -> usize {
        debug_assert!(self.in_bounds(pos));
        (self.dims.width * pos.1) + pos.0
    }

    #[inline]
    pub fn in_bounds(&self, pos: (usize, usize)) -> bool {
        pos.0 < self.dims.width && pos.1 < self.dims.height
    }

    #[inline]
    pub fn cell(&self, pos: (usize, usize)) -> &Cell {
        &self.cells[self.index_of(pos)]
    }

    #[inline]
    pub fn cell_mut(&mut self, pos: (usize, usize)) -> &mut Cell {
        let index = self.index_of(pos);
        &mut self.cells[index]
    }

    pub fn start(&self) -> Option<(usize, usize)> {
        self.start
    }

    pub fn end(&self) -> Option<(usize, usize)> {
        self.end
    }

    /// Writes a classification, refusing to clobber Start/End markers so a
    /// walk over a designated endpoint never erases it.
    pub fn tag(&mut self, pos: (usize, usize), kind: CellKind) {
        let cell = self.cell_mut(pos);
        if !cell.kind.is_endpoint() {
            cell.kind = kind;
        }
    }

    #[inline]
    fn set_kind(&mut self, pos: (usize, usize), kind: CellKind) {
        self.cell_mut(pos).kind = kind;
    }

    /// Toggles the start designation: selecting the current start clears it,
    /// selecting any other cell moves it there.
    pub fn set_start(&mut self, pos: (usize, usize)) {
        if self.start == Some(pos) {
            self.set_kind(pos, CellKind::Empty);
            self.start = None;
            return;
        }
        if let Some(old) = self.start.take() {
            self.set_kind(old, CellKind::Empty);
            if self.end == Some(old) {
                self.set_kind(old, CellKind::End);
            }
        }
        self.set_kind(pos, CellKind::Start);
        self.start = Some(pos);
    }

    /// Toggles the end designation; same semantics as [`Grid::set_start`].
    pub fn set_end(&mut self, pos: (usize, usize)) {
        if self.end == Some(pos) {
            self.set_kind(pos, CellKind::Empty);
            self.end = None;
            return;
        }
        if let Some(old) = self.end.take() {
            self.set_kind(old, CellKind::Empty);
            if self.start == Some(old) {
                self.set_kind(old, CellKind::Start);
            }
        }
        self.set_kind(pos, CellKind::End);
        self.end = Some(pos);
    }

    /// Full reset: walls closed, flags and parents cleared, every tag back to
    /// `Empty`, and the Start/End designations erased with them.
    pub fn full_reset(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::default();
        }
        self.start = None;
        self.end = None;
    }

    /// Soft reset: clears the transient state a previous run left behind
    /// (Visited/Path/Frontier tags, `visited` flags, parents) while keeping
    /// walls and the user-placed Start/End markers intact. This is the reset
    /// an interactive re-solve needs.
    pub fn soft_reset(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.visited = false;
            cell.parent = None;
            match cell.kind {
                CellKind::Visited | CellKind::Path | CellKind::Frontier => {
                    cell.kind = CellKind::Empty;
                }
                _ => {}
            }
        }
    }

    /// Generation-entry reset: everything back to the fully walled state, but
    /// the Start/End designations survive and their tags are re-applied so
    /// the carve never paints over them.
    pub fn reset_for_carve(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::default();
        }
        if let Some(start) = self.start {
            self.set_kind(start, CellKind::Start);
        }
        if let Some(end) = self.end {
            self.set_kind(end, CellKind::End);
        }
    }

    /// Reverts every tag in `kinds` back to `Empty`.
    pub fn clear_tags(&mut self, kinds: &[CellKind]) {
        for cell in self.cells.iter_mut() {
            if kinds.contains(&cell.kind) {
                cell.kind = CellKind::Empty;
            }
        }
    }

    /// Post-run cleanup: scaffolding tags never outlive the run that wrote
    /// them.
    pub fn clear_transients(&mut self) {
        self.clear_tags(&[CellKind::Visited, CellKind::Path, CellKind::Frontier]);
    }

    /// Whether any wall has ever been opened. A fully walled grid has no maze
    /// to solve yet.
    pub fn is_carved(&self) -> bool {
        self.cells
            .iter()
            .any(|cell| cell.walls.iter().any(|wall| !wall))
    }

    /// Clears the wall pair between two lattice-adjacent cells. Adjacency is
    /// the caller's contract; a non-adjacent pair is a programming error.
    pub fn remove_walls(&mut self, a: (usize, usize), b: (usize, usize)) {
        let dx = b.0 as isize - a.0 as isize;
        let dy = b.1 as isize - a.1 as isize;
        debug_assert!(
            dx.abs() + dy.abs() == 1,
            "remove_walls called on non-adjacent cells {:?} and {:?}",
            a,
            b
        );

        let dir = match (dx, dy) {
            (1, 0) => Direction::Right,
            (-1, 0) => Direction::Left,
            (0, 1) => Direction::Bottom,
            (0, -1) => Direction::Top,
            _ => return,
        };

        self.cell_mut(a).walls[dir as usize] = false;
        self.cell_mut(b).walls[(-dir) as usize] = false;
    }

    #[inline]
    pub fn neighbor_in(&self, pos: (usize, usize), dir: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = dir.offset();
        let x = pos.0 as isize + dx;
        let y = pos.1 as isize + dy;
        if x < 0 || y < 0 {
            return None;
        }
        let candidate = (x as usize, y as usize);
        if self.in_bounds(candidate) {
            Some(candidate)
        } else {
            None
        }
    }

    /// In-bounds orthogonal neighbors whose `visited` flag equals
    /// `want_visited`, in fixed top, right, bottom, left order so a seeded
    /// shuffle is reproducible.
    pub fn neighbors_by_visit_state(
        &self,
        pos: (usize, usize),
        want_visited: bool,
    ) -> Vec<(usize, usize)> {
        let mut neighbors = Vec::with_capacity(4);
        for &dir in DIRECTIONS.iter() {
            if let Some(neighbor) = self.neighbor_in(pos, dir) {
                if self.cell(neighbor).visited == want_visited {
                    neighbors.push(neighbor);
                }
            }
        }
        neighbors
    }

    /// Neighbors reachable through an open wall and not yet visited: the
    /// traversal function for solving a carved maze, as opposed to the
    /// visit-state function generation walks with.
    pub fn neighbors_by_open_wall(&self, pos: (usize, usize)) -> Vec<(usize, usize)> {
        let mut neighbors = Vec::with_capacity(4);
        for &dir in DIRECTIONS.iter() {
            if self.cell(pos).walls[dir as usize] {
                continue;
            }
            if let Some(neighbor) = self.neighbor_in(pos, dir) {
                if !self.cell(neighbor).visited {
                    neighbors.push(neighbor);
                }
            }
        }
        neighbors
    }

    /// Appends every in-bounds, unvisited neighbor of `pos` that is not
    /// already in `frontier`. Membership is by coordinate; with an
    /// index-based grid that is the same as identity. Only an animated run
    /// tags the cells, instant carving leaves no trace.
    pub fn collect_frontier_neighbors(
        &mut self,
        pos: (usize, usize),
        frontier: &mut Vec<(usize, usize)>,
        animated: bool,
    ) {
        for &dir in DIRECTIONS.iter() {
            let neighbor = match self.neighbor_in(pos, dir) {
                Some(neighbor) => neighbor,
                None => continue,
            };
            if self.cell(neighbor).visited || frontier.contains(&neighbor) {
                continue;
            }
            if animated {
                self.tag(neighbor, CellKind::Frontier);
            }
            frontier.push(neighbor);
        }
    }
}
