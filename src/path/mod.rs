mod generic_path;
pub use generic_path::Path;

/// The cost of a Path, or the estimated cost of a partial one.
///
/// Unit steps keep this integral unless the [`Euclidean`](crate::Heuristic::Euclidean) heuristic
/// contributes to an estimate.
pub type Cost = f64;
