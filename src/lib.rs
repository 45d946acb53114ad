//! # grid_search
//!
//! Shortest-cost routes on a fixed-size 2-D grid with obstacles, moving in the eight compass
//! directions. Implements [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) where both the
//! per-step cost and the heuristic are the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry): orthogonal steps cost 1
//! and diagonal steps cost 2. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use grid_search::{find_path, PathingGrid};
//! use grid_util::point::Point;
//!
//! let grid = PathingGrid::from_obstacles(3, 3, |x, y| (x, y) == (1, 1));
//! let path = find_path(&grid, Point::new(0, 0), Point::new(2, 2)).unwrap();
//! assert_eq!(path.len(), 4);
//! assert_eq!(grid_search::path_cost(&path), 4);
//! ```
pub mod cell;
pub mod error;
pub mod frontier;
pub mod path_search;
pub mod pathing_grid;
pub mod render;
pub mod search_context;

pub use cell::Cell;
pub use error::{Endpoint, Result, SearchError};
pub use frontier::{Frontier, HeapFrontier, ScanFrontier};
pub use path_search::{find_path, heuristic, path_cost, step_cost, PathSearch};
pub use pathing_grid::PathingGrid;
pub use render::{PathRender, RenderStyle};

/// Inline capacity for neighbourhood buffers; a cell has at most 8 neighbours.
pub const N_SMALLVEC_SIZE: usize = 8;

/// Predecessor index of the start node.
pub const NO_PREDECESSOR: usize = usize::MAX;
