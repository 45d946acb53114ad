use core::fmt;

use grid_util::Point;
use thiserror::Error;

/// Result alias for fallible search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Which end of a query an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

/// Input validation failures, reported before any search work begins.
///
/// An unreachable goal is not an error: it is an empty path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The grid has no cells to search.
    #[error("grid of size {width}x{height} has no cells")]
    EmptyGrid { width: usize, height: usize },

    /// An endpoint lies outside the grid.
    #[error("{endpoint} {point} lies outside the {width}x{height} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        point: Point,
        width: usize,
        height: usize,
    },

    /// An endpoint is an obstacle and can never be entered or left.
    #[error("{endpoint} {point} is an obstacle")]
    ObstacleEndpoint { endpoint: Endpoint, point: Point },
}
