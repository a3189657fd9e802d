//! A crate to find the shortest Path between two cells of a 2D occupancy Grid using A*.
//!
//! A [`Grid`] is a rectangular matrix of cells that are either free (`0`) or blocked (`1`).
//! Movement is 4-directional (left, right, up, down) with a cost of `1` per step.
//!
//! ## Examples
//! ```
//! use grid_astar::prelude::*;
//!
//! // 0 = free, 1 = wall
//! let grid = Grid::from_rows(&[
//!     [0, 0, 0],
//!     [1, 1, 0],
//!     [0, 0, 0],
//! ])
//! .unwrap();
//!
//! let result = search(&grid, Node::new(0, 0), Node::new(0, 2), true, Heuristic::Manhattan);
//!
//! assert_eq!(result.min_cost, 6.0);
//!
//! let path = result.path.unwrap();
//! // paths are reported from the target back to the start
//! assert_eq!(path.target(), (0, 2));
//! assert_eq!(path.start(), (0, 0));
//! assert_eq!(path.len(), 7);
//! ```
//!
//! Searches that can't reach the target are not an error of the call itself. They report
//! an infinite cost together with [`SearchError::Unreachable`]:
//! ```
//! use grid_astar::prelude::*;
//!
//! let grid = Grid::from_rows(&[
//!     [0, 1, 0],
//!     [1, 1, 0],
//!     [0, 0, 0],
//! ])
//! .unwrap();
//!
//! let result = search(&grid, Node::new(2, 2), Node::new(0, 0), false, Heuristic::default());
//!
//! assert!(result.min_cost.is_infinite());
//! assert_eq!(result.error, Some(SearchError::Unreachable));
//! ```
//!
//! ## Configuration
//! [`AStar`] keeps a [`SearchConfig`] and the [`SearchState`]/[`SearchStats`] of the last
//! search, for callers that run several searches on the same Grid:
//! ```
//! use grid_astar::prelude::*;
//!
//! let grid = Grid::new(8, 8);
//! let config = SearchConfig::default()
//!     .with_heuristic(Heuristic::Euclidean)
//!     .with_reconstruct_path(false);
//!
//! let mut a_star = AStar::with_config(&grid, config);
//! let result = a_star.search(Node::new(0, 0), Node::new(7, 7));
//!
//! assert_eq!(result.min_cost, 14.0);
//! assert!(result.path.is_none());
//! assert_eq!(a_star.state(), SearchState::Succeeded);
//! ```
//!
//! ## Crate Features
//! - `parallel` (default): [`search_many`] distributes independent searches with rayon.
//! - `log`: emits `trace!` timings and a `debug!` summary for every search through the
//!   [`log`](https://docs.rs/log) crate.

#![warn(missing_docs)]

/// A shorthand for Points on the Grid, given as `(x, y)`
pub type Point = (usize, usize);

mod graph;
pub use graph::{Node, NodeId};

pub mod grid;
pub use grid::{
    search, search_many, AStar, CellState, Grid, GridError, SearchConfig, SearchError,
    SearchResult, SearchState, SearchStats,
};

mod heuristic;
pub use heuristic::Heuristic;

mod path;
pub use path::{Cost, Path};

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        search, search_many, AStar, CellState, Cost, Grid, GridError, Heuristic, Node, NodeId,
        Path, Point, SearchConfig, SearchError, SearchResult, SearchState, SearchStats,
    };
}
