//! Checks for the properties the algorithms guarantee.
//!
//! The solver runs these under `debug_assertions` only; release builds are
//! unaffected. They are public so tests and callers can verify results
//! independently.

use super::matrix::WeightMatrix;
use super::relax::ShortestPaths;
use super::weight::{Distance, Weight};

/// Debug-asserts a mathematical invariant with a message.
#[inline(always)]
pub(crate) fn math_assert_msg(condition: bool, message: &str) {
    debug_assert!(condition, "Mathematical invariant violated: {}", message);
}

/// Returns `true` if `order` is a permutation of the vertices of `graph` in
/// which every edge points forward.
pub fn is_topological_order<W: Weight>(graph: &WeightMatrix<W>, order: &[usize]) -> bool {
    let n = graph.vertex_count();
    if order.len() != n {
        return false;
    }

    let mut position = vec![usize::MAX; n];
    for (pos, &v) in order.iter().enumerate() {
        if v >= n || position[v] != usize::MAX {
            return false;
        }
        position[v] = pos;
    }

    graph
        .edges()
        .iter()
        .all(|edge| position[edge.from] < position[edge.to])
}

/// Returns `true` if every reached vertex other than the source satisfies
/// `d[v] == d[pi[v]] + w(pi[v], v)`, the source has distance zero and no
/// predecessor, and unreached vertices have no predecessor.
pub fn predecessors_consistent<W: Weight>(
    graph: &WeightMatrix<W>,
    paths: &ShortestPaths<W>,
) -> bool {
    let source = paths.source();
    if paths.distance(source) != Some(Distance::Finite(W::zero()))
        || paths.predecessor(source).is_some()
    {
        return false;
    }

    (0..paths.len()).filter(|&v| v != source).all(|v| {
        match (paths.distance(v), paths.predecessor(v)) {
            (Some(Distance::Infinite), None) => true,
            (Some(Distance::Finite(dv)), Some(u)) => {
                let via = paths
                    .distance(u)
                    .and_then(Distance::finite)
                    .zip(graph.weight(u, v))
                    .and_then(|(du, w)| du.checked_add(&w));
                via == Some(dv)
            }
            _ => false,
        }
    })
}
