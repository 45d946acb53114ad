use grid_util::Point;

/// A single grid position as seen by callers. Coordinates and the obstacle flag are fixed for the
/// lifetime of a query; per-search cost and predecessor live in the search context instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub point: Point,
    pub is_obstacle: bool,
}

impl Cell {
    pub fn new(x: i32, y: i32, is_obstacle: bool) -> Cell {
        Cell {
            point: Point::new(x, y),
            is_obstacle,
        }
    }
    pub fn x(&self) -> i32 {
        self.point.x
    }
    pub fn y(&self) -> i32 {
        self.point.y
    }
}
