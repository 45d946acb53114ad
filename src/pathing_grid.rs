use crate::cell::Cell;
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [PathingGrid] is the obstacle map searched by [PathSearch](crate::PathSearch). The raw [bool]
/// values in the [BoolGrid] determine whether a cell is an obstacle ([true]) or empty ([false]).
/// In addition it maintains 8-connected components in a [UnionFind] structure so that queries
/// between disconnected cells can be answered without searching.
///
/// Components start out dirty and are only trusted after [generate_components](Self::generate_components)
/// or [update](Self::update) has run.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl PathingGrid {
    /// Builds a grid where `is_obstacle(x, y)` decides each cell, and generates its components.
    pub fn from_obstacles<F>(width: usize, height: usize, mut is_obstacle: F) -> PathingGrid
    where
        F: FnMut(i32, i32) -> bool,
    {
        let mut pathing_grid = PathingGrid::new(width, height, false);
        for x in 0..width as i32 {
            for y in 0..height as i32 {
                if is_obstacle(x, y) {
                    pathing_grid.grid.set(x, y, true);
                }
            }
        }
        pathing_grid.generate_components();
        pathing_grid
    }

    /// The 8 points around `point` in the order dx = -1..=1 (outer), dy = -1..=1 (inner). Points
    /// may be out of bounds.
    pub fn neighborhood_points(point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        let mut points = SmallVec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                points.push(Point::new(point.x + dx, point.y + dy));
            }
        }
        points
    }

    /// The neighbours of `point` that can be entered: in bounds and not an obstacle.
    pub fn neighbours(&self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        Self::neighborhood_points(point)
            .into_iter()
            .filter(|p| self.can_move_to(*p))
            .collect()
    }

    pub fn can_move_to(&self, pos: Point) -> bool {
        self.in_bounds(pos) && !self.grid.get_point(pos)
    }

    pub fn in_bounds(&self, pos: Point) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.grid.width
            && (pos.y as usize) < self.grid.height
    }

    /// The cell at `point`, or [None] if it lies outside the grid.
    pub fn cell(&self, point: Point) -> Option<Cell> {
        self.in_bounds(point).then(|| Cell {
            point,
            is_obstacle: self.grid.get_point(point),
        })
    }

    /// All cells in row-major order (y outer, x inner).
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let w = self.grid.width as i32;
        let h = self.grid.height as i32;
        (0..h).flat_map(move |y| (0..w).map(move |x| Cell::new(x, y, self.grid.get(x, y))))
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(*start) && self.in_bounds(*goal) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free grid neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        let w = self.grid.width;
        let h = self.grid.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                if self.grid.get(x, y) {
                    continue;
                }
                let point = Point::new(x, y);
                let parent_ix = self.grid.get_ix_point(&point);
                // Links towards +x and along the current column are enough to cover every pair once.
                let linked = [
                    Point::new(x, y + 1),
                    Point::new(x + 1, y - 1),
                    Point::new(x + 1, y),
                    Point::new(x + 1, y + 1),
                ]
                .into_iter()
                .filter(|p| self.can_move_to(*p))
                .map(|p| self.grid.get_ix_point(&p))
                .collect::<SmallVec<[usize; 4]>>();
                for ix in linked {
                    self.components.union(parent_ix, ix);
                }
            }
        }
        info!("Generated connected components for {}x{} grid", w, h);
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.grid.height as i32 {
            let values = (0..self.grid.width as i32)
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

impl ValueGrid<bool> for PathingGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        PathingGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: true,
        }
    }
    fn get(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y)
    }
    /// Updates a position on the grid. Freeing a cell joins it with its free neighbours, blocking
    /// one flags the components as dirty since they may break apart.
    fn set(&mut self, x: i32, y: i32, blocked: bool) {
        let p = Point::new(x, y);
        if blocked {
            if !self.grid.get(x, y) {
                self.components_dirty = true;
            }
        } else {
            let p_ix = self.grid.get_ix_point(&p);
            for n in self.neighbours(&p) {
                self.components.union(p_ix, self.grid.get_ix_point(&n));
            }
        }
        self.grid.set(x, y, blocked);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
