use super::frontier::{Frontier, Offer};
use super::{Grid, SearchConfig};
use crate::graph::NodeList;
use crate::{Cost, Heuristic, Node, Path, Point};

// a Macro to log::trace the time since $timer, and restart $timer
#[cfg(feature = "log")]
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {
        let now = std::time::Instant::now();
        log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
        #[allow(unused)]
        let $timer = now;
    };
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
    // does nothing without log feature
    ($msg: literal, $timer: ident) => {};
}

/// The reason a search did not produce a Path
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Every cell reachable from the start was visited without meeting the target
    #[error("unable to reach target node from given start")]
    Unreachable,
}

/// The outcome of a search.
///
/// On success, `min_cost` is the cost of the found Path and `error` is `None`. `path` is only
/// present if it was requested. On failure, `min_cost` is infinite and `error` says why.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// The cost of the cheapest Path found, or infinity
    pub min_cost: Cost,
    /// The Path from the target back to the start, if requested and found
    pub path: Option<Path>,
    /// Set if the target could not be reached
    pub error: Option<SearchError>,
}

impl SearchResult {
    fn found(min_cost: Cost, path: Option<Path>) -> SearchResult {
        SearchResult {
            min_cost,
            path,
            error: None,
        }
    }

    fn unreachable() -> SearchResult {
        SearchResult {
            min_cost: Cost::INFINITY,
            path: None,
            error: Some(SearchError::Unreachable),
        }
    }

    /// Returns true if the target was reached
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// The lifecycle of an [`AStar`] search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchState {
    /// No search was started yet
    #[default]
    Ready,
    /// A search is in progress
    Running,
    /// The last search reached its target
    Succeeded,
    /// The last search exhausted every reachable cell
    Failed,
}

/// Counters describing the work done by the last search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SearchStats {
    /// Nodes taken from the open set and expanded
    pub expanded: usize,
    /// Neighbor Nodes created during expansion
    pub generated: usize,
    /// Finalized cells that were opened again because a cheaper Path to them was found
    pub reopened: usize,
    /// Open Nodes that were superseded by a cheaper Node of the same cell
    pub replaced: usize,
}

/// An A* search engine on a borrowed [`Grid`].
///
/// The Grid is never modified, so any number of engines may share it.
///
/// ## Examples
/// ```
/// use grid_astar::prelude::*;
///
/// let grid = Grid::from_rows(&[
///     [0, 0, 0],
///     [0, 0, 0],
///     [0, 0, 0],
/// ])
/// .unwrap();
///
/// let mut a_star = AStar::new(&grid);
/// assert_eq!(a_star.state(), SearchState::Ready);
///
/// let result = a_star.search(Node::new(0, 0), Node::new(2, 2));
/// assert_eq!(result.min_cost, 4.0);
///
/// let path = result.path.unwrap();
/// assert_eq!(path.len(), 5);
/// assert_eq!(path.target(), (2, 2));
/// assert_eq!(path.start(), (0, 0));
/// ```
#[derive(Clone, Debug)]
pub struct AStar<'a> {
    grid: &'a Grid,
    config: SearchConfig,
    state: SearchState,
    stats: SearchStats,
}

impl<'a> AStar<'a> {
    /// Creates an engine with the default [`SearchConfig`]
    pub fn new(grid: &'a Grid) -> Self {
        AStar::with_config(grid, SearchConfig::default())
    }

    /// Creates an engine with the given [`SearchConfig`]
    pub fn with_config(grid: &'a Grid, config: SearchConfig) -> Self {
        AStar {
            grid,
            config,
            state: SearchState::Ready,
            stats: SearchStats::default(),
        }
    }

    /// The Grid this engine searches on
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// The configuration used by [`search`](AStar::search)
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The state of the last search
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The counters of the last search
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Finds the cheapest Path from `start` to `target`.
    ///
    /// Every call starts from scratch. The start is expanded even if it is not free, but a
    /// cell that is not free never has neighbors, so a blocked start can only reach itself.
    pub fn search(&mut self, start: Node, target: Node) -> SearchResult {
        #[cfg(feature = "log")]
        let (outer_timer, timer) = (std::time::Instant::now(), std::time::Instant::now());

        self.state = SearchState::Running;
        self.stats = SearchStats::default();

        let heuristic = self.config.heuristic();
        let heuristic_factor = self.config.heuristic_factor();
        let reconstruct_path = self.config.reconstruct_path();
        let target_pos = target.pos();
        let target_id = target.id();

        let size_hint = self.grid.width() + self.grid.height();
        let mut nodes = NodeList::with_capacity(size_hint * 4);
        let mut frontier = Frontier::with_capacity(size_hint * 2);
        let mut neighbors = Vec::with_capacity(4);

        let root = nodes.add_root(start);
        nodes.evaluate(root, target_pos, heuristic, heuristic_factor);
        frontier.offer(nodes[root].id(), nodes[root].cost(), root);

        re_trace!("a* setup", timer);

        let mut result = SearchResult::unreachable();

        while let Some(current) = frontier.pop(|key| nodes[key].id()) {
            let node = nodes[current];

            if node.id() == target_id {
                let path = reconstruct_path.then(|| Path::new(nodes.trace_back(current), node.cost()));
                result = SearchResult::found(node.cost(), path);
                break;
            }

            self.stats.expanded += 1;
            nodes.expand(current, self.grid, &mut neighbors);
            self.stats.generated += neighbors.len();

            for &neighbor in neighbors.iter() {
                nodes.evaluate(neighbor, target_pos, heuristic, heuristic_factor);
                let (id, cost) = (nodes[neighbor].id(), nodes[neighbor].cost());

                match frontier.offer(id, cost, neighbor) {
                    Offer::Inserted => {}
                    Offer::Replaced => self.stats.replaced += 1,
                    Offer::Reopened => self.stats.reopened += 1,
                    Offer::Discarded => nodes.discard(neighbor),
                }
            }

            frontier.close(node.id(), node.cost(), current);
        }

        re_trace!("a* main loop", timer);

        self.state = if result.is_success() {
            SearchState::Succeeded
        } else {
            SearchState::Failed
        };

        #[cfg(feature = "log")]
        log::debug!(
            "search {} -> {}: {:?} with cost {} ({:?}) in {:?}",
            start.id(),
            target_id,
            self.state,
            result.min_cost,
            self.stats,
            outer_timer.elapsed()
        );

        result
    }
}

/// Finds the cheapest Path from `start` to `target` on `grid`.
///
/// A shorthand for [`AStar::search`] with a default [`SearchConfig`] that uses the given
/// `heuristic` and `reconstruct_path`.
pub fn search(
    grid: &Grid,
    start: Node,
    target: Node,
    reconstruct_path: bool,
    heuristic: Heuristic,
) -> SearchResult {
    let config = SearchConfig::default()
        .with_heuristic(heuristic)
        .with_reconstruct_path(reconstruct_path);
    AStar::with_config(grid, config).search(start, target)
}

/// Runs one independent search per `(start, target)` pair of `queries`.
///
/// The results are in the same order as `queries`. With the `parallel` feature the searches
/// are spread over the rayon thread pool.
///
/// ## Examples
/// ```
/// use grid_astar::prelude::*;
///
/// let grid = Grid::new(4, 4);
/// let results = search_many(&grid, &[((0, 0), (3, 3)), ((1, 1), (1, 2))], SearchConfig::default());
///
/// assert_eq!(results[0].min_cost, 6.0);
/// assert_eq!(results[1].min_cost, 1.0);
/// ```
pub fn search_many(grid: &Grid, queries: &[(Point, Point)], config: SearchConfig) -> Vec<SearchResult> {
    let run = |&(start, target): &(Point, Point)| {
        AStar::with_config(grid, config).search(Node::from(start), Node::from(target))
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        queries.par_iter().map(run).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        queries.iter().map(run).collect()
    }
}
