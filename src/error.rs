//! Error types for shortest-path computation.

/// Result type alias for `dagpath` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building a graph or computing shortest paths.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A matrix row does not have one cell per vertex.
    #[error("weight matrix is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Number of cells in that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// The requested source vertex does not exist.
    #[error("source vertex {vertex} is out of bounds for a graph of {len} vertices")]
    SourceOutOfBounds {
        /// Requested source index.
        vertex: usize,
        /// Number of vertices.
        len: usize,
    },

    /// The matrix for this many vertices cannot be addressed.
    #[error("a graph of {len} vertices is too large for a dense weight matrix")]
    TooManyVertices {
        /// Requested number of vertices.
        len: usize,
    },

    /// A vertex index does not exist.
    #[error("vertex {vertex} is out of bounds for a graph of {len} vertices")]
    VertexOutOfBounds {
        /// Requested vertex index.
        vertex: usize,
        /// Number of vertices.
        len: usize,
    },

    /// Depth-first search reached a vertex that was still on the stack.
    #[error("graph is not acyclic: {}", format_cycle(.cycle))]
    NotAcyclic {
        /// The cycle, starting and ending at the same vertex.
        cycle: Vec<usize>,
    },

    /// `d[from] + w(from, to)` does not fit in the weight type.
    #[error("distance overflow relaxing edge {from} -> {to}")]
    WeightOverflow {
        /// Tail of the edge being relaxed.
        from: usize,
        /// Head of the edge being relaxed.
        to: usize,
    },

    /// Walking predecessors from a vertex did not lead back to the source.
    #[error("predecessor chain from vertex {vertex} does not reach the source")]
    BrokenPredecessorChain {
        /// Vertex where the walk failed.
        vertex: usize,
    },

    /// A vertex label is not part of the label alphabet.
    #[error("unknown vertex label: {0:?}")]
    UnknownLabel(String),

    /// A graph description could not be parsed.
    #[error("invalid graph description: {0}")]
    Config(#[from] serde_json::Error),
}

/// Formats a vertex sequence as `0 -> 1 -> 0`.
pub fn format_cycle(cycle: &[usize]) -> String {
    cycle
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
