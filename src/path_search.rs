use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use log::{debug, info, warn};
use smallvec::SmallVec;

use crate::error::{Endpoint, Result, SearchError};
use crate::frontier::{Frontier, HeapFrontier, ScanFrontier};
use crate::pathing_grid::PathingGrid;
use crate::search_context::SearchContext;
use crate::N_SMALLVEC_SIZE;

/// Cost of a single move between two cells: their Manhattan distance. Orthogonal steps cost 1 and
/// diagonal steps cost 2, so a diagonal is never cheaper than the two orthogonal steps it spans.
pub fn step_cost(p1: &Point, p2: &Point) -> i32 {
    p1.manhattan_distance(p2)
}

/// Remaining cost estimate used to order the frontier. Uses the same Manhattan metric as
/// [step_cost], which makes it consistent.
pub fn heuristic(point: &Point, goal: &Point) -> i32 {
    point.manhattan_distance(goal)
}

/// Total [step_cost] along a path; zero for empty and single-cell paths.
pub fn path_cost(path: &[Point]) -> i32 {
    path.windows(2).map(|w| step_cost(&w[0], &w[1])).sum()
}

/// A* search over a [PathingGrid] with 8-directional moves and Manhattan step costs.
///
/// Scratch state (costs, predecessors, open and closed membership) lives in the [PathSearch]
/// rather than in the grid, so one grid can be shared by any number of searches. A [PathSearch]
/// can be reused; every query starts from a cleared context.
pub struct PathSearch<F = HeapFrontier<i32>> {
    context: SearchContext<Point, i32, F>,
}

impl PathSearch {
    pub fn new() -> PathSearch {
        PathSearch::with_frontier()
    }
}

impl Default for PathSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl PathSearch<ScanFrontier<i32>> {
    /// A search that selects from the open set by linear scan.
    pub fn scanning() -> PathSearch<ScanFrontier<i32>> {
        PathSearch::with_frontier()
    }
}

impl<F: Frontier<i32> + Default> PathSearch<F> {
    pub fn with_frontier() -> PathSearch<F> {
        PathSearch {
            context: SearchContext::new(),
        }
    }

    /// Computes a least-cost path from `start` to `goal`, both included.
    ///
    /// Returns an empty path if the goal cannot be reached. Fails without touching the search state
    /// if the grid is empty or either endpoint is out of bounds or an obstacle.
    pub fn find(&mut self, grid: &PathingGrid, start: Point, goal: Point) -> Result<Vec<Point>> {
        validate(grid, start, goal)?;
        // Components are only trusted while they are up to date.
        if !grid.components_dirty && grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            self.context.clear();
            return Ok(Vec::new());
        }
        let result = self.context.astar(
            &start,
            |node| successors(grid, node),
            |point| heuristic(point, &goal),
            |point| *point == goal,
        );
        match result {
            Some((path, cost)) => {
                debug!(
                    "Found path from {} to {} with {} cells and cost {}",
                    start,
                    goal,
                    path.len(),
                    cost
                );
                Ok(path)
            }
            None => {
                if !grid.components_dirty {
                    warn!("Reachable goal could not be pathed to, are the components correct?");
                }
                debug!("No path from {} to {}", start, goal);
                Ok(Vec::new())
            }
        }
    }

    /// The best known cost from the start of the most recent query, if `point` was discovered.
    pub fn cost_from_start(&self, point: &Point) -> Option<i32> {
        self.context.node(point).map(|node| node.cost_from_start)
    }

    /// Whether `point` was finalized by the most recent query.
    pub fn is_closed(&self, point: &Point) -> bool {
        self.context.node(point).is_some_and(|node| node.closed)
    }

    /// Number of cells expanded by the most recent query.
    pub fn expanded(&self) -> usize {
        self.context.expanded
    }
}

/// Runs a single query with a fresh [PathSearch].
pub fn find_path(grid: &PathingGrid, start: Point, goal: Point) -> Result<Vec<Point>> {
    PathSearch::new().find(grid, start, goal)
}

fn successors(grid: &PathingGrid, node: &Point) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
    grid.neighbours(node)
        .into_iter()
        .map(|p| (p, step_cost(node, &p)))
        .collect()
}

fn validate(grid: &PathingGrid, start: Point, goal: Point) -> Result<()> {
    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
        return Err(SearchError::EmptyGrid { width, height });
    }
    for (endpoint, point) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if !grid.in_bounds(point) {
            return Err(SearchError::OutOfBounds {
                endpoint,
                point,
                width,
                height,
            });
        }
    }
    for (endpoint, point) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if grid.get_point(point) {
            return Err(SearchError::ObstacleEndpoint { endpoint, point });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let pathing_grid = PathingGrid::from_obstacles(1, 1, |_, _| false);
        let start = Point::new(0, 0);
        let path = find_path(&pathing_grid, start, start).unwrap();
        assert_eq!(path, vec![start]);
    }

    /// Asserts that the optimal solution around a single obstacle is found.
    #[test]
    fn solve_simple_problem() {
        // |S  |
        // | # |
        // |  G|
        let pathing_grid = PathingGrid::from_obstacles(3, 3, |x, y| (x, y) == (1, 1));
        let mut search = PathSearch::new();
        let path = search
            .find(&pathing_grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        let expected = vec![
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(1, 2),
            Point::new(2, 2),
        ];
        assert_eq!(path, expected);
        assert_eq!(path_cost(&path), 4);
        let scanned = PathSearch::scanning()
            .find(&pathing_grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        assert_eq!(scanned, expected);
        assert_eq!(search.cost_from_start(&Point::new(2, 2)), Some(4));
        assert!(search.is_closed(&Point::new(0, 0)));
    }

    #[test]
    fn diagonal_costs_two() {
        assert_eq!(step_cost(&Point::new(0, 0), &Point::new(1, 1)), 2);
        assert_eq!(step_cost(&Point::new(0, 0), &Point::new(0, 1)), 1);
        assert_eq!(path_cost(&[]), 0);
        assert_eq!(path_cost(&[Point::new(3, 3)]), 0);
    }

    #[test]
    fn rejects_invalid_input() {
        let pathing_grid = PathingGrid::from_obstacles(3, 3, |x, y| (x, y) == (1, 1));
        let mut search = PathSearch::new();
        assert_eq!(
            search.find(&pathing_grid, Point::new(-1, 0), Point::new(2, 2)),
            Err(SearchError::OutOfBounds {
                endpoint: Endpoint::Start,
                point: Point::new(-1, 0),
                width: 3,
                height: 3,
            })
        );
        assert_eq!(
            search.find(&pathing_grid, Point::new(0, 0), Point::new(3, 0)),
            Err(SearchError::OutOfBounds {
                endpoint: Endpoint::Goal,
                point: Point::new(3, 0),
                width: 3,
                height: 3,
            })
        );
        assert_eq!(
            search.find(&pathing_grid, Point::new(0, 0), Point::new(1, 1)),
            Err(SearchError::ObstacleEndpoint {
                endpoint: Endpoint::Goal,
                point: Point::new(1, 1),
            })
        );

        let empty = PathingGrid::from_obstacles(0, 4, |_, _| false);
        assert_eq!(
            search.find(&empty, Point::new(0, 0), Point::new(0, 0)),
            Err(SearchError::EmptyGrid {
                width: 0,
                height: 4
            })
        );
    }

    #[test]
    fn rejection_leaves_previous_state() {
        let pathing_grid = PathingGrid::from_obstacles(3, 3, |x, y| (x, y) == (1, 1));
        let mut search = PathSearch::new();
        search
            .find(&pathing_grid, Point::new(0, 0), Point::new(2, 0))
            .unwrap();
        let expanded = search.expanded();
        assert!(search
            .find(&pathing_grid, Point::new(1, 1), Point::new(2, 0))
            .is_err());
        assert_eq!(search.expanded(), expanded);
        assert_eq!(search.cost_from_start(&Point::new(2, 0)), Some(2));
    }

    #[test]
    fn dirty_components_still_search() {
        let mut pathing_grid = PathingGrid::new(4, 1, false);
        pathing_grid.set(2, 0, true);
        assert!(pathing_grid.components_dirty);
        let mut search = PathSearch::scanning();
        let path = search
            .find(&pathing_grid, Point::new(0, 0), Point::new(3, 0))
            .unwrap();
        assert!(path.is_empty());
        assert!(search.expanded() > 0);
    }

    #[test]
    fn clean_components_skip_search() {
        let pathing_grid = PathingGrid::from_obstacles(4, 1, |x, _| x == 2);
        let mut search = PathSearch::new();
        let path = search
            .find(&pathing_grid, Point::new(0, 0), Point::new(3, 0))
            .unwrap();
        assert!(path.is_empty());
        assert_eq!(search.expanded(), 0);
    }
}
