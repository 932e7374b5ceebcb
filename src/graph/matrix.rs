//! A dense, square weight matrix describing a directed graph.
//!
//! Cell `(i, j)` holds the weight of the edge `i -> j`; a zero cell means there is
//! no edge. Storage is a single row-major `Vec`, so a row is a contiguous slice and
//! the edge list falls out of one linear scan.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `from_rows` | \(O(n^2)\) | Validates squareness, flattens rows |
//! | `weight` / `has_edge` | \(O(1)\) | Direct cell access |
//! | `neighbors` | \(O(n)\) | Scans one row |
//! | `edges` | \(O(n^2)\) | Row-major scan of all cells |

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::weight::Weight;
use crate::error::{Error, Result};

/// A directed, weighted edge `from -> to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<W> {
    /// Tail vertex.
    pub from: usize,
    /// Head vertex.
    pub to: usize,
    /// Edge weight; never zero.
    pub weight: W,
}

/// An `n x n` weight matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeightMatrix<W> {
    n: usize,
    cells: Vec<W>,
}

impl<W> WeightMatrix<W> {
    /// Builds a matrix from its rows.
    ///
    /// # Errors
    /// Returns [`Error::NotSquare`] if any row length differs from the row count.
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self> {
        let n = rows.len();
        // Validate every row before sizing the buffer from `n`.
        if let Some((row, cells_in_row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(Error::NotSquare {
                row,
                len: cells_in_row.len(),
                expected: n,
            });
        }

        let mut cells = Vec::with_capacity(cell_count(n)?);
        for cells_in_row in rows {
            cells.extend(cells_in_row);
        }
        Ok(Self { n, cells })
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// `true` for the graph with no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// The cells of row `u`, i.e. the outgoing weights of vertex `u`.
    ///
    /// # Panics
    /// Panics if `u` is out of bounds.
    #[inline]
    pub fn row(&self, u: usize) -> &[W] {
        assert!(u < self.n, "vertex {u} out of bounds for n={}", self.n);
        &self.cells[u * self.n..(u + 1) * self.n]
    }

    /// Iterates over all rows in index order.
    pub fn rows(&self) -> impl Iterator<Item = &[W]> + '_ {
        // `max(1)` keeps `chunks_exact` valid for the empty matrix.
        self.cells.chunks_exact(self.n.max(1))
    }
}

impl<W: Weight> WeightMatrix<W> {
    /// Creates an `n`-vertex matrix with no edges.
    ///
    /// # Errors
    /// Returns [`Error::TooManyVertices`] if `n * n` overflows `usize`.
    pub fn new(n: usize) -> Result<Self> {
        Ok(Self {
            n,
            cells: vec![W::zero(); cell_count(n)?],
        })
    }

    /// Builds an `n`-vertex matrix from `(from, to, weight)` triples.
    ///
    /// Later triples overwrite earlier ones; a zero weight removes the edge.
    ///
    /// # Errors
    /// Returns [`Error::VertexOutOfBounds`] if an endpoint is `>= n`.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut matrix = Self::new(n)?;
        for (from, to, weight) in edges {
            matrix.set(from, to, weight)?;
        }
        Ok(matrix)
    }

    /// Sets the weight of `from -> to`. Zero removes the edge.
    ///
    /// # Errors
    /// Returns [`Error::VertexOutOfBounds`] if an endpoint is `>= n`.
    pub fn set(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        for vertex in [from, to] {
            if vertex >= self.n {
                return Err(Error::VertexOutOfBounds { vertex, len: self.n });
            }
        }
        self.cells[from * self.n + to] = weight;
        Ok(())
    }

    /// Weight of `from -> to`, or `None` if there is no such edge.
    #[inline]
    pub fn weight(&self, from: usize, to: usize) -> Option<W> {
        if from >= self.n || to >= self.n {
            return None;
        }
        let w = self.cells[from * self.n + to];
        (!w.is_zero()).then_some(w)
    }

    /// Edge membership test.
    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.weight(from, to).is_some()
    }

    /// Out-neighbors of `u` with their weights, in ascending vertex order.
    ///
    /// # Panics
    /// Panics if `u` is out of bounds.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, W)> + '_ {
        self.row(u)
            .iter()
            .enumerate()
            .filter(|(_, w)| !w.is_zero())
            .map(|(v, &w)| (v, w))
    }

    /// Number of edges (nonzero cells).
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|w| !w.is_zero()).count()
    }

    /// Extracts the edge list in row-major order: ascending `from`, then
    /// ascending `to`.
    pub fn edges(&self) -> Vec<Edge<W>> {
        let mut edges = Vec::new();
        for from in 0..self.n {
            edges.extend(
                self.neighbors(from)
                    .map(|(to, weight)| Edge { from, to, weight }),
            );
        }
        edges
    }
}

/// Number of cells of an `n x n` matrix.
fn cell_count(n: usize) -> Result<usize> {
    n.checked_mul(n).ok_or(Error::TooManyVertices { len: n })
}

impl<W> TryFrom<Vec<Vec<W>>> for WeightMatrix<W> {
    type Error = Error;

    fn try_from(rows: Vec<Vec<W>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl<W, const N: usize> From<[[W; N]; N]> for WeightMatrix<W> {
    /// Builds a matrix from a fixed-size array, which is square by construction.
    fn from(rows: [[W; N]; N]) -> Self {
        Self {
            n: N,
            cells: rows.into_iter().flatten().collect(),
        }
    }
}

impl<W: Serialize> Serialize for WeightMatrix<W> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl<'de, W: Deserialize<'de>> Deserialize<'de> for WeightMatrix<W> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let rows = Vec::<Vec<W>>::deserialize(deserializer)?;
        Self::from_rows(rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> WeightMatrix<i32> {
        // 0 -> 1 (4), 0 -> 2 (1), 1 -> 3 (1), 2 -> 3 (5)
        WeightMatrix::from_rows(vec![
            vec![0, 4, 1, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 5],
            vec![0, 0, 0, 0],
        ])
        .unwrap()
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = WeightMatrix::from_rows(vec![vec![0, 1], vec![0]]).unwrap_err();
        assert!(matches!(
            err,
            Error::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        ));
    }

    #[test]
    fn many_empty_rows_fail_before_allocating() {
        let err = WeightMatrix::from_rows(vec![Vec::<i64>::new(); 1_000_000]).unwrap_err();
        assert!(matches!(
            err,
            Error::NotSquare {
                row: 0,
                len: 0,
                expected: 1_000_000
            }
        ));

        let json = format!("[{}]", vec!["[]"; 1_000_000].join(","));
        assert!(serde_json::from_str::<WeightMatrix<i64>>(&json).is_err());
    }

    #[test]
    fn oversized_vertex_count_is_rejected() {
        let err = WeightMatrix::<i32>::new(usize::MAX).unwrap_err();
        assert!(matches!(err, Error::TooManyVertices { len: usize::MAX }));
        assert!(WeightMatrix::from_edges(usize::MAX, [(0, 1, 1i32)]).is_err());
    }

    #[test]
    fn basic_properties() {
        let g = diamond();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 4);
        assert!(g.has_edge(0, 2));
        assert!(!g.has_edge(2, 0));
        assert_eq!(g.weight(2, 3), Some(5));
        assert_eq!(g.weight(9, 0), None);
        assert_eq!(g.neighbors(0).collect::<Vec<_>>(), vec![(1, 4), (2, 1)]);
        assert_eq!(g.row(3), &[0, 0, 0, 0]);
    }

    #[test]
    fn edges_are_row_major() {
        let edges = diamond().edges();
        let pairs: Vec<_> = edges.iter().map(|e| (e.from, e.to, e.weight)).collect();
        assert_eq!(pairs, vec![(0, 1, 4), (0, 2, 1), (1, 3, 1), (2, 3, 5)]);
    }

    #[test]
    fn from_edges_and_set() {
        let g = WeightMatrix::from_edges(3, [(0, 1, -2i64), (1, 2, 3)]).unwrap();
        assert_eq!(g.weight(0, 1), Some(-2));
        assert_eq!(g.edge_count(), 2);

        let err = WeightMatrix::from_edges(2, [(0, 2, 1i64)]).unwrap_err();
        assert!(matches!(err, Error::VertexOutOfBounds { vertex: 2, len: 2 }));

        let mut g = g;
        g.set(0, 1, 0).unwrap();
        assert!(!g.has_edge(0, 1));
    }

    #[test]
    fn empty_matrix() {
        let g = WeightMatrix::<i32>::from_rows(Vec::new()).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.rows().count(), 0);
        assert!(g.edges().is_empty());
    }

    #[test]
    fn from_square_array() {
        let g = WeightMatrix::from([[0, 4, 1, 0], [0, 0, 0, 1], [0, 0, 0, 5], [0, 0, 0, 0]]);
        assert_eq!(g, diamond());
        assert!(WeightMatrix::<i32>::from([[0; 0]; 0]).is_empty());
    }

    #[test]
    fn json_rows() {
        let g = diamond();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[0,4,1,0],[0,0,0,1],[0,0,0,5],[0,0,0,0]]");

        let back: WeightMatrix<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);

        let ragged = serde_json::from_str::<WeightMatrix<i32>>("[[0,1],[0]]");
        assert!(ragged.is_err());
    }
}
