use crate::{Cost, Heuristic};

/// Options for an [`AStar`](super::AStar) search.
///
/// ## Examples
/// ```
/// use grid_astar::{Heuristic, SearchConfig};
///
/// let config = SearchConfig::default()
///     .with_heuristic(Heuristic::Euclidean)
///     .with_heuristic_factor(1.5)
///     .with_reconstruct_path(false);
///
/// assert_eq!(config.heuristic(), Heuristic::Euclidean);
/// assert_eq!(config.heuristic_factor(), 1.5);
/// assert!(!config.reconstruct_path());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchConfig {
    heuristic: Heuristic,
    heuristic_factor: Cost,
    reconstruct_path: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            heuristic: Heuristic::Manhattan,
            heuristic_factor: 1.0,
            reconstruct_path: true,
        }
    }
}

impl SearchConfig {
    /// The distance estimate towards the target.
    ///
    /// Default: [`Heuristic::Manhattan`]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Scales the heuristic before it is added to the walked cost.
    ///
    /// Values above `1.0` favor cells close to the target (Weighted A*). This usually expands
    /// fewer cells, but the result is only guaranteed to cost at most `heuristic_factor` times
    /// the optimum, and previously finalized cells may be reopened.
    ///
    /// Always finite and non-negative. Default: `1.0`
    pub fn heuristic_factor(&self) -> Cost {
        self.heuristic_factor
    }

    /// Whether to return the Path itself or only its cost.
    ///
    /// Default: `true`
    pub fn reconstruct_path(&self) -> bool {
        self.reconstruct_path
    }

    /// Sets [`heuristic`](SearchConfig::heuristic)
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Sets [`heuristic_factor`](SearchConfig::heuristic_factor)
    ///
    /// ## Panics
    /// If `factor` is negative, infinite or NaN.
    #[track_caller]
    pub fn with_heuristic_factor(mut self, factor: Cost) -> Self {
        assert!(
            factor.is_finite() && factor >= 0.0,
            "heuristic_factor has to be a finite, non-negative number, got {}",
            factor
        );
        self.heuristic_factor = factor;
        self
    }

    /// Sets [`reconstruct_path`](SearchConfig::reconstruct_path)
    pub fn with_reconstruct_path(mut self, reconstruct_path: bool) -> Self {
        self.reconstruct_path = reconstruct_path;
        self
    }
}
