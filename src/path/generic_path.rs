use super::Cost;
use crate::Point;

/// A Path found by the search, listed from the target back to the start.
///
/// `path[0]` is the target and `path[path.len() - 1]` is the start. Use
/// [`into_forward`](Path::into_forward) to walk it in travel order.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    steps: Vec<Point>,
    cost: Cost,
}

impl Path {
    /// Creates a Path from points listed target first.
    ///
    /// ## Panics
    /// If `steps` is empty.
    #[track_caller]
    pub(crate) fn new(steps: Vec<Point>, cost: Cost) -> Path {
        assert!(!steps.is_empty(), "a path contains at least its start");
        Path { steps, cost }
    }

    /// The total cost of walking this Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The cell the Path leads to
    pub fn target(&self) -> Point {
        self.steps[0]
    }

    /// The cell the Path originates from
    pub fn start(&self) -> Point {
        self.steps[self.steps.len() - 1]
    }

    /// Consumes the Path and returns its points in travel order (start to target)
    pub fn into_forward(self) -> Vec<Point> {
        let mut steps = self.steps;
        steps.reverse();
        steps
    }
}

impl std::ops::Deref for Path {
    type Target = [Point];
    fn deref(&self) -> &[Point] {
        &self.steps
    }
}

impl From<Path> for Vec<Point> {
    fn from(path: Path) -> Vec<Point> {
        path.steps
    }
}
