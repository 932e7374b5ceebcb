//! Weighted DAGs and the shortest-path algorithms over them.
//!
//! The pipeline is organized into stages:
//! - `matrix`: the dense weight matrix and its edge list
//! - `topo`: depth-first search and topological ordering
//! - `relax`: relaxation in topological order
//! - `path`: reconstruction of individual paths
//! - `invariants`: checks for the properties the above guarantee

pub mod invariants;
pub mod matrix;
pub mod path;
pub mod relax;
pub mod topo;
pub mod weight;

pub use matrix::{Edge, WeightMatrix};
pub use path::{reconstruct, Path, PathOutcome, PathStep};
pub use relax::{shortest_paths, ShortestPathSolver, ShortestPaths};
pub use topo::{depth_first_search, topological_sort, DfsForest, VisitState};
pub use weight::{Distance, Weight};
