use crate::{Cost, Point};

/// The distance estimate used to guide the search towards the target.
///
/// Both variants never overestimate the remaining cost on a 4-connected Grid with unit steps,
/// so a search using either of them (with a `heuristic_factor` of `1.0`) finds an optimal Path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// `|dx| + |dy|`. Exact on an empty Grid.
    #[default]
    Manhattan,
    /// `sqrt(dx² + dy²)`. Underestimates for most pairs of cells.
    Euclidean,
}

impl Heuristic {
    /// The estimated distance between `a` and `b`
    pub fn distance(self, a: Point, b: Point) -> Cost {
        match self {
            Heuristic::Manhattan => manhattan(a, b),
            Heuristic::Euclidean => euclidean(a, b),
        }
    }
}

fn manhattan((ax, ay): Point, (bx, by): Point) -> Cost {
    ax.abs_diff(bx) as Cost + ay.abs_diff(by) as Cost
}

fn euclidean((ax, ay): Point, (bx, by): Point) -> Cost {
    let dx = ax.abs_diff(bx) as Cost;
    let dy = ay.abs_diff(by) as Cost;
    (dx * dx + dy * dy).sqrt()
}
