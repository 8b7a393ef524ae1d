use maze_engine::{CellKind, Controller, Direction, GeneratorKind, Grid};

const DIMS: (usize, usize) = (20, 10);

fn main() {
    env_logger::init();

    let mut controller = Controller::new(DIMS.0, DIMS.1);
    controller.set_start((0, 0));
    controller.set_end((DIMS.0 - 1, DIMS.1 - 1));

    controller.generate(GeneratorKind::Backtracker);
    controller.wait_for_idle();

    controller.solve();
    controller.wait_for_idle();

    print!("{}", render_ascii(&controller.snapshot()));
    if let Some(outcome) = controller.last_outcome() {
        println!("outcome: {:?}", outcome);
    }
}

/// Walls-and-markers dump of the grid, one `+---+` band per row.
fn render_ascii(grid: &Grid) -> String {
    let (width, height) = (grid.dims.width, grid.dims.height);
    let mut out = String::new();

    for y in 0..height {
        for x in 0..width {
            out.push('+');
            out.push_str(if grid.cell((x, y)).walls[Direction::Top as usize] {
                "---"
            } else {
                "   "
            });
        }
        out.push_str("+\n");

        for x in 0..width {
            let cell = grid.cell((x, y));
            out.push(if cell.walls[Direction::Left as usize] {
                '|'
            } else {
                ' '
            });
            out.push_str(match cell.kind {
                CellKind::Start => " S ",
                CellKind::End => " E ",
                CellKind::Path => " * ",
                _ => "   ",
            });
        }
        out.push(
            if grid.cell((width - 1, y)).walls[Direction::Right as usize] {
                '|'
            } else {
                ' '
            },
        );
        out.push('\n');
    }

    for _ in 0..width {
        out.push_str("+---");
    }
    out.push_str("+\n");
    out
}
