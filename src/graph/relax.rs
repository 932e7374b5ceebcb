//! Single-source shortest paths by relaxation in topological order.
//!
//! Because every edge `(u, v)` has `u` ahead of `v` in a topological order, all
//! edges into `u` have been relaxed by the time `u` is reached, so `d[u]` is
//! already final when `u`'s own outgoing edges are relaxed. One pass over the
//! edges therefore suffices, and negative weights are fine.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `ShortestPathSolver::new` | \(O(n^2)\) | Edge extraction and DFS over the matrix |
//! | `ShortestPathSolver::solve` | \(O(n + m)\) | Single relaxation pass |
//! | `shortest_paths` | \(O(n^2)\) | `new` followed by `solve` |

use serde::Serialize;

use super::invariants::{self, math_assert_msg};
use super::matrix::{Edge, WeightMatrix};
use super::path::{self, PathOutcome};
use super::topo::topological_sort;
use super::weight::{Distance, Weight};
use crate::error::{Error, Result};
use crate::labels::VertexLabels;

/// Shortest-path distances and predecessors from one source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ShortestPaths<W> {
    source: usize,
    distances: Vec<Distance<W>>,
    predecessors: Vec<Option<usize>>,
    topological_order: Vec<usize>,
}

impl<W: Weight> ShortestPaths<W> {
    /// The source vertex.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// `true` for the empty graph. Never the case for a computed result, since
    /// the source is a vertex.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Shortest distance to `v`; `None` if `v` is out of bounds.
    pub fn distance(&self, v: usize) -> Option<Distance<W>> {
        self.distances.get(v).copied()
    }

    /// All distances, indexed by vertex.
    pub fn distances(&self) -> &[Distance<W>] {
        &self.distances
    }

    /// Predecessor of `v` on its shortest path. `None` for the source, for
    /// unreachable vertices and for out-of-bounds `v`.
    pub fn predecessor(&self, v: usize) -> Option<usize> {
        self.predecessors.get(v).copied().flatten()
    }

    /// All predecessors, indexed by vertex.
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    /// The topological order the relaxation pass followed.
    pub fn topological_order(&self) -> &[usize] {
        &self.topological_order
    }

    /// `true` if some path leads from the source to `v`.
    pub fn is_reachable(&self, v: usize) -> bool {
        self.distance(v).is_some_and(Distance::is_finite)
    }

    /// Reconstructs the path from the source to `target`.
    ///
    /// # Errors
    /// See [`path::reconstruct`].
    pub fn path_to(&self, target: usize) -> Result<PathOutcome<W>> {
        path::reconstruct(self, target)
    }

    /// One `pred -> vertex cost: d` line per vertex, in index order.
    ///
    /// A missing predecessor renders as `-` and an infinite distance as `∞`.
    pub fn render_table(&self, labels: &VertexLabels) -> Vec<String> {
        self.distances
            .iter()
            .enumerate()
            .map(|(v, distance)| {
                format!(
                    "{} -> {} cost: {}",
                    labels.label_or_unknown(self.predecessor(v)),
                    labels.label(v),
                    distance
                )
            })
            .collect()
    }
}

/// Edges grouped by tail vertex, in CSR form.
///
/// `edges[offsets[u]..offsets[u + 1]]` are the edges leaving `u`, in the
/// same relative order as the input list.
#[derive(Debug, Clone)]
struct OutgoingEdges<W> {
    offsets: Vec<usize>,
    edges: Vec<Edge<W>>,
}

impl<W: Copy> OutgoingEdges<W> {
    fn new(n: usize, edges: Vec<Edge<W>>) -> Self {
        let mut offsets = vec![0usize; n + 1];
        for edge in &edges {
            offsets[edge.from + 1] += 1;
        }
        for u in 0..n {
            offsets[u + 1] += offsets[u];
        }

        // Stable counting sort; a no-op permutation for row-major input.
        let mut next = offsets.clone();
        let mut grouped = edges.clone();
        for edge in edges {
            grouped[next[edge.from]] = edge;
            next[edge.from] += 1;
        }

        Self {
            offsets,
            edges: grouped,
        }
    }

    fn of(&self, u: usize) -> &[Edge<W>] {
        &self.edges[self.offsets[u]..self.offsets[u + 1]]
    }
}

/// Distance and predecessor state for one source, owned by one solve.
struct Relaxation<W> {
    distances: Vec<Distance<W>>,
    predecessors: Vec<Option<usize>>,
}

impl<W: Weight> Relaxation<W> {
    fn initialize(n: usize, source: usize) -> Self {
        let mut distances = vec![Distance::Infinite; n];
        distances[source] = Distance::Finite(W::zero());
        Self {
            distances,
            predecessors: vec![None; n],
        }
    }

    /// Improves `d[v]` through `u -> v` if that is shorter. Relaxing from an
    /// unreached `u` does nothing.
    fn relax(&mut self, edge: &Edge<W>) -> Result<bool> {
        let Distance::Finite(du) = self.distances[edge.from] else {
            return Ok(false);
        };
        let candidate = du.checked_add(&edge.weight).ok_or(Error::WeightOverflow {
            from: edge.from,
            to: edge.to,
        })?;

        if Distance::Finite(candidate) < self.distances[edge.to] {
            self.distances[edge.to] = Distance::Finite(candidate);
            self.predecessors[edge.to] = Some(edge.from);
            tracing::trace!(from = edge.from, to = edge.to, distance = %candidate, "relaxed edge");
            return Ok(true);
        }
        Ok(false)
    }
}

/// Shortest-path solver for one graph.
///
/// Extracts the edge list and computes the topological order once; each
/// [`solve`](Self::solve) then costs a single relaxation pass and owns its
/// own state, so a solver can be shared across threads.
#[derive(Debug, Clone)]
pub struct ShortestPathSolver<'g, W> {
    graph: &'g WeightMatrix<W>,
    outgoing: OutgoingEdges<W>,
    order: Vec<usize>,
}

impl<'g, W: Weight> ShortestPathSolver<'g, W> {
    /// Prepares a solver for `graph`.
    ///
    /// # Errors
    /// Returns [`Error::NotAcyclic`] if `graph` has a cycle.
    pub fn new(graph: &'g WeightMatrix<W>) -> Result<Self> {
        let n = graph.vertex_count();
        let outgoing = OutgoingEdges::new(n, graph.edges());
        let order = topological_sort(graph)?;

        math_assert_msg(
            !cfg!(debug_assertions) || invariants::is_topological_order(graph, &order),
            "every edge must point forward in the topological order",
        );

        Ok(Self {
            graph,
            outgoing,
            order,
        })
    }

    /// The graph being solved.
    pub fn graph(&self) -> &'g WeightMatrix<W> {
        self.graph
    }

    /// The topological order used for relaxation.
    pub fn topological_order(&self) -> &[usize] {
        &self.order
    }

    /// Computes shortest paths from `source`.
    ///
    /// # Errors
    /// - [`Error::SourceOutOfBounds`] if `source` is not a vertex.
    /// - [`Error::WeightOverflow`] if a path cost does not fit in `W`.
    pub fn solve(&self, source: usize) -> Result<ShortestPaths<W>> {
        let n = self.graph.vertex_count();
        if source >= n {
            return Err(Error::SourceOutOfBounds { vertex: source, len: n });
        }

        let mut state = Relaxation::initialize(n, source);
        let mut relaxed = 0usize;
        for &x in &self.order {
            for edge in self.outgoing.of(x) {
                if state.relax(edge)? {
                    relaxed += 1;
                }
            }
        }

        tracing::debug!(source, vertices = n, relaxed, "shortest paths computed");

        let paths = ShortestPaths {
            source,
            distances: state.distances,
            predecessors: state.predecessors,
            topological_order: self.order.clone(),
        };

        math_assert_msg(
            !cfg!(debug_assertions) || invariants::predecessors_consistent(self.graph, &paths),
            "d[v] must equal d[pi[v]] + w(pi[v], v) for every reached vertex",
        );

        Ok(paths)
    }
}

#[cfg(not(feature = "parallel"))]
impl<W: Weight> ShortestPathSolver<'_, W> {
    /// Computes shortest paths from every vertex, indexed by source.
    ///
    /// # Errors
    /// Returns the first [`Error::WeightOverflow`] encountered.
    pub fn solve_all(&self) -> Result<Vec<ShortestPaths<W>>> {
        (0..self.graph.vertex_count())
            .map(|source| self.solve(source))
            .collect()
    }
}

#[cfg(feature = "parallel")]
impl<W: Weight + Send + Sync> ShortestPathSolver<'_, W> {
    /// Computes shortest paths from every vertex on the rayon pool, indexed
    /// by source.
    ///
    /// # Errors
    /// Returns an [`Error::WeightOverflow`] if any solve overflows.
    pub fn solve_all(&self) -> Result<Vec<ShortestPaths<W>>> {
        use rayon::prelude::*;

        (0..self.graph.vertex_count())
            .into_par_iter()
            .map(|source| self.solve(source))
            .collect()
    }
}

/// Computes shortest paths from `source` in the DAG `graph`.
///
/// # Errors
/// - [`Error::SourceOutOfBounds`] if `source` is not a vertex.
/// - [`Error::NotAcyclic`] if `graph` has a cycle.
/// - [`Error::WeightOverflow`] if a path cost does not fit in `W`.
pub fn shortest_paths<W: Weight>(graph: &WeightMatrix<W>, source: usize) -> Result<ShortestPaths<W>> {
    let n = graph.vertex_count();
    if source >= n {
        return Err(Error::SourceOutOfBounds { vertex: source, len: n });
    }
    ShortestPathSolver::new(graph)?.solve(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outgoing_edges_group_by_tail() {
        let edges = vec![
            Edge { from: 2, to: 0, weight: 1 },
            Edge { from: 0, to: 1, weight: 2 },
            Edge { from: 2, to: 1, weight: 3 },
        ];
        let out = OutgoingEdges::new(3, edges);
        assert_eq!(out.of(0).len(), 1);
        assert!(out.of(1).is_empty());
        let from_two: Vec<_> = out.of(2).iter().map(|e| (e.to, e.weight)).collect();
        assert_eq!(from_two, vec![(0, 1), (1, 3)]);
    }

    #[test]
    fn relax_only_improves() {
        let mut state = Relaxation::<i32>::initialize(3, 0);
        assert!(state.relax(&Edge { from: 0, to: 1, weight: 5 }).unwrap());
        assert!(!state.relax(&Edge { from: 0, to: 1, weight: 6 }).unwrap());
        assert!(state.relax(&Edge { from: 0, to: 1, weight: -1 }).unwrap());
        assert_eq!(state.distances[1], Distance::Finite(-1));
        assert_eq!(state.predecessors[1], Some(0));
    }

    #[test]
    fn relax_from_unreached_vertex_is_a_noop() {
        let mut state = Relaxation::<i32>::initialize(3, 0);
        assert!(!state.relax(&Edge { from: 2, to: 1, weight: -100 }).unwrap());
        assert_eq!(state.distances[1], Distance::Infinite);
        assert_eq!(state.predecessors[1], None);
    }

    #[test]
    fn relax_reports_overflow() {
        let mut state = Relaxation::<i8>::initialize(2, 0);
        state.distances[0] = Distance::Finite(120);
        let err = state.relax(&Edge { from: 0, to: 1, weight: 10 }).unwrap_err();
        assert!(matches!(err, Error::WeightOverflow { from: 0, to: 1 }));
    }

    #[test]
    fn source_first_in_order_still_relaxes() {
        // 0 -> 1 -> 2, source 0 is the first vertex of the order.
        let g = WeightMatrix::from_rows(vec![vec![0, 2, 0], vec![0, 0, 3], vec![0, 0, 0]]).unwrap();
        let paths = shortest_paths(&g, 0).unwrap();
        assert_eq!(paths.topological_order(), &[0, 1, 2]);
        assert_eq!(
            paths.distances(),
            &[Distance::Finite(0), Distance::Finite(2), Distance::Finite(5)]
        );
        assert_eq!(paths.predecessors(), &[None, Some(0), Some(1)]);
    }

    #[test]
    fn source_out_of_bounds() {
        let g = WeightMatrix::<i32>::new(2).unwrap();
        let err = shortest_paths(&g, 2).unwrap_err();
        assert!(matches!(err, Error::SourceOutOfBounds { vertex: 2, len: 2 }));
    }

    #[test]
    fn solver_answers_every_source() {
        // 0 -> 1 (1), 1 -> 2 (1), 0 -> 2 (5)
        let g = WeightMatrix::from_rows(vec![vec![0, 1, 5], vec![0, 0, 1], vec![0, 0, 0]]).unwrap();
        let solver = ShortestPathSolver::new(&g).unwrap();
        let all = solver.solve_all().unwrap();

        assert_eq!(all.len(), 3);
        assert_eq!(all[0].distance(2), Some(Distance::Finite(2)));
        assert_eq!(all[1].distance(0), Some(Distance::Infinite));
        assert_eq!(all[1].distance(2), Some(Distance::Finite(1)));
        assert!(all[2].is_reachable(2));
        assert!(!all[2].is_reachable(0));
        for (source, paths) in all.iter().enumerate() {
            assert_eq!(paths.source(), source);
            assert_eq!(paths, &solver.solve(source).unwrap());
        }
    }
}
