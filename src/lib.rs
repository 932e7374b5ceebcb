//! # `dagpath` - Shortest Paths in Weighted DAGs
//!
//! Single-source shortest paths in a weighted directed acyclic graph, computed
//! the classical way (Cormen et al., DAG-SHORTEST-PATHS): a depth-first search
//! produces a topological order, and one relaxation pass over the edges in that
//! order yields final distances and predecessor pointers.
//!
//! ## Guarantees
//!
//! - **Negative weights**: allowed. Without cycles there are no negative cycles.
//! - **Cycles**: detected during the search and reported as
//!   [`Error::NotAcyclic`] with the offending cycle, never by unbounded
//!   recursion. The search uses an explicit stack.
//! - **Unreachable vertices**: keep [`Distance::Infinite`] and no predecessor.
//!   This is a normal outcome, not an error.
//! - **No shared state**: every call owns its search and relaxation state, so
//!   calls can run concurrently on the same graph.
//!
//! ## Architecture
//!
//! ```text
//! WeightMatrix ─► edges() ─► topological_sort ─► relaxation ─► ShortestPaths ─► reconstruct
//! ```
//!
//! ## Example
//!
//! ```rust
//! use dagpath::{shortest_paths, Distance, WeightMatrix};
//!
//! // 0 -> 1 (2), 1 -> 2 (3), 0 -> 2 (6)
//! let graph = WeightMatrix::from_rows(vec![
//!     vec![0, 2, 6],
//!     vec![0, 0, 3],
//!     vec![0, 0, 0],
//! ])?;
//!
//! let paths = shortest_paths(&graph, 0)?;
//! assert_eq!(paths.distance(2), Some(Distance::Finite(5)));
//! assert_eq!(paths.predecessor(2), Some(1));
//!
//! let route = paths.path_to(2)?;
//! assert_eq!(route.path().map(|p| p.vertices()), Some(vec![0, 1, 2]));
//! # Ok::<(), dagpath::Error>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod graph;
pub mod labels;

pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{
    depth_first_search, reconstruct, shortest_paths, topological_sort, DfsForest, Distance, Edge,
    Path, PathOutcome, PathStep, ShortestPathSolver, ShortestPaths, VisitState, Weight,
    WeightMatrix,
};
pub use labels::VertexLabels;
