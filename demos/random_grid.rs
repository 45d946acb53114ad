use clap::Parser;
use grid_search::{
    path_cost, Frontier, PathRender, PathSearch, PathingGrid, RenderStyle, Result,
};
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use rand::prelude::*;

// In this example a path is found across a random grid from the top-left to the bottom-right
// corner. Every cell is an obstacle with the given probability, except the two corners.
// The result is drawn with
// - # marking an obstacle
// - 1 marking a cell on the path
// - 0 marking an empty cell

#[derive(Parser, Debug)]
#[command(about = "Finds a path across a random obstacle grid and prints it")]
struct Args {
    #[arg(long, default_value_t = 100)]
    width: usize,
    #[arg(long, default_value_t = 100)]
    height: usize,
    /// Probability that a cell is an obstacle.
    #[arg(long, default_value_t = 0.2)]
    obstacle_probability: f64,
    /// Seed for the obstacle layout; random if omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Select from the open set by linear scan instead of a binary heap.
    #[arg(long)]
    scan: bool,
    /// Disable ANSI colours.
    #[arg(long)]
    plain: bool,
    /// Draw only every n-th column.
    #[arg(long, default_value_t = 2)]
    column_step: usize,
}

fn run<F: Frontier<i32> + Default>(
    mut search: PathSearch<F>,
    grid: &PathingGrid,
    start: Point,
    goal: Point,
) -> Result<Vec<Point>> {
    let path = search.find(grid, start, goal)?;
    log::info!("Expanded {} cells", search.expanded());
    Ok(path)
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut pathing_grid = PathingGrid::from_obstacles(args.width, args.height, |_, _| {
        rng.gen_bool(args.obstacle_probability)
    });
    let start = Point::new(0, 0);
    let goal = Point::new(args.width as i32 - 1, args.height as i32 - 1);
    if pathing_grid.in_bounds(start) && pathing_grid.in_bounds(goal) {
        pathing_grid.set_point(start, false);
        pathing_grid.set_point(goal, false);
    }

    let result = if args.scan {
        run(PathSearch::scanning(), &pathing_grid, start, goal)
    } else {
        run(PathSearch::new(), &pathing_grid, start, goal)
    };
    let path = match result {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let style = RenderStyle {
        colored: !args.plain,
        column_step: args.column_step,
    };
    println!("({}x{}):", args.width, args.height);
    print!("{}", PathRender::new(&pathing_grid, &path).with_style(style));
    if path.is_empty() {
        println!("No path from {} to {}", start, goal);
    } else {
        println!("Path of {} cells with cost {}", path.len(), path_cost(&path));
    }
}
