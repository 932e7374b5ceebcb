//! Reconstructing source-to-target paths from predecessor pointers.

use serde::Serialize;

use super::relax::ShortestPaths;
use super::weight::Weight;
use crate::error::{Error, Result};
use crate::labels::VertexLabels;

/// One edge of a reconstructed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PathStep<W> {
    /// Tail vertex.
    pub from: usize,
    /// Head vertex.
    pub to: usize,
    /// Shortest distance from the source to `to`.
    pub cost: W,
}

/// A non-empty shortest path, ordered from source to target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Path<W> {
    steps: Vec<PathStep<W>>,
}

impl<W: Weight> Path<W> {
    /// The edges of the path, source first.
    pub fn steps(&self) -> &[PathStep<W>] {
        &self.steps
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; a path has at least one edge.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The vertices visited, from source to target.
    pub fn vertices(&self) -> Vec<usize> {
        let mut vertices = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            vertices.push(first.from);
        }
        vertices.extend(self.steps.iter().map(|step| step.to));
        vertices
    }

    /// Total cost of the path.
    pub fn total(&self) -> W {
        self.steps.last().map_or_else(W::zero, |step| step.cost)
    }
}

/// What a path query found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathOutcome<W> {
    /// The target is the source itself.
    Source,
    /// No path leads from the source to the target.
    Unreachable,
    /// The shortest path to the target.
    Path(Path<W>),
}

impl<W: Weight> PathOutcome<W> {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path<W>> {
        match self {
            Self::Path(path) => Some(path),
            Self::Source | Self::Unreachable => None,
        }
    }

    /// Renders the outcome as display lines, one per edge (`"t -> x cost: 6"`).
    ///
    /// The source outcome renders no lines.
    pub fn render(&self, labels: &VertexLabels, source: usize, target: usize) -> Vec<String> {
        match self {
            Self::Source => Vec::new(),
            Self::Unreachable => vec![format!(
                "No path from {} to {}",
                labels.label(source),
                labels.label(target)
            )],
            Self::Path(path) => path
                .steps()
                .iter()
                .map(|step| {
                    format!(
                        "{} -> {} cost: {}",
                        labels.label(step.from),
                        labels.label(step.to),
                        step.cost
                    )
                })
                .collect(),
        }
    }
}

/// Walks predecessor pointers from `target` back to the source.
///
/// The walk is iterative and takes at most `n` steps.
///
/// # Errors
/// - [`Error::VertexOutOfBounds`] if `target` is not a vertex.
/// - [`Error::BrokenPredecessorChain`] if the pointers do not lead back to the
///   source within `n` steps, or pass through a vertex with no known distance.
pub fn reconstruct<W: Weight>(paths: &ShortestPaths<W>, target: usize) -> Result<PathOutcome<W>> {
    let n = paths.len();
    if target >= n {
        return Err(Error::VertexOutOfBounds { vertex: target, len: n });
    }

    let source = paths.source();
    if target == source {
        return Ok(PathOutcome::Source);
    }
    if paths.predecessor(target).is_none() {
        return Ok(PathOutcome::Unreachable);
    }

    let mut steps = Vec::new();
    let mut current = target;
    while current != source {
        if steps.len() >= n {
            return Err(Error::BrokenPredecessorChain { vertex: target });
        }
        let (Some(prev), Some(cost)) = (
            paths.predecessor(current),
            paths.distance(current).and_then(|d| d.finite()),
        ) else {
            return Err(Error::BrokenPredecessorChain { vertex: current });
        };

        steps.push(PathStep {
            from: prev,
            to: current,
            cost,
        });
        current = prev;
    }

    steps.reverse();
    Ok(PathOutcome::Path(Path { steps }))
}
