//! Graph descriptions loaded from JSON, and the built-in example graph.
//!
//! ```json
//! {
//!   "labels": "rstxyz",
//!   "matrix": [[0, 5, 3, 0, 0, 0], ...],
//!   "source": "s",
//!   "target": "z"
//! }
//! ```
//!
//! `labels` defaults to [`DEFAULT_ALPHABET`](crate::labels::DEFAULT_ALPHABET);
//! `source` and `target` are optional.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::WeightMatrix;
use crate::labels::VertexLabels;

/// A labelled graph together with a default query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Vertex names.
    #[serde(default)]
    pub labels: VertexLabels,
    /// Edge weights; zero means no edge.
    pub matrix: WeightMatrix<i64>,
    /// Label of the source vertex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Label of the vertex whose path is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl GraphConfig {
    /// Parses a JSON graph description.
    ///
    /// # Errors
    /// Returns [`Error::Config`] for malformed JSON or a non-square matrix.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The DAG of CLRS (3rd ed.) figure 24.5, with source `s` and target `z`.
    ///
    /// Rows and columns are `r s t x y z`.
    pub fn clrs_figure_24_5() -> Self {
        let matrix = WeightMatrix::from([
            [0, 5, 3, 0, 0, 0],
            [0, 0, 2, 6, 0, 0],
            [0, 0, 0, 7, 4, 2],
            [0, 0, 0, 0, -1, 1],
            [0, 0, 0, 0, 0, -2],
            [0, 0, 0, 0, 0, 0],
        ]);

        Self {
            labels: VertexLabels::default(),
            matrix,
            source: Some("s".to_owned()),
            target: Some("z".to_owned()),
        }
    }

    /// Resolves a vertex label to its index.
    ///
    /// # Errors
    /// Returns [`Error::UnknownLabel`] if `name` is not a label of a vertex of
    /// the matrix.
    pub fn resolve(&self, name: &str) -> Result<usize> {
        self.labels
            .parse(name)
            .filter(|&index| index < self.matrix.vertex_count())
            .ok_or_else(|| Error::UnknownLabel(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clrs_fixture_shape() {
        let config = GraphConfig::clrs_figure_24_5();
        assert_eq!(config.matrix.vertex_count(), 6);
        assert_eq!(config.matrix.edge_count(), 10);
        assert_eq!(config.matrix.weight(3, 4), Some(-1));
        assert_eq!(config.resolve("s").unwrap(), 1);
        assert_eq!(config.resolve("z").unwrap(), 5);
    }

    #[test]
    fn resolve_rejects_unknown_labels() {
        let config = GraphConfig::clrs_figure_24_5();
        assert!(matches!(config.resolve("q"), Err(Error::UnknownLabel(name)) if name == "q"));

        let small = GraphConfig::from_json(r#"{"labels": "rstxyz", "matrix": [[0, 1], [0, 0]]}"#)
            .unwrap();
        assert!(small.resolve("t").is_err());
        assert_eq!(small.resolve("s").unwrap(), 1);
    }

    #[test]
    fn json_defaults_and_errors() {
        let config = GraphConfig::from_json(r#"{"matrix": [[0, 2], [0, 0]]}"#).unwrap();
        assert_eq!(config.labels, VertexLabels::default());
        assert_eq!(config.source, None);
        assert_eq!(config.matrix.weight(0, 1), Some(2));

        let err = GraphConfig::from_json(r#"{"matrix": [[0, 2], [0]]}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn many_empty_rows_are_a_config_error() {
        let rows = vec!["[]"; 1_000_000].join(",");
        let err = GraphConfig::from_json(&format!(r#"{{"matrix": [{rows}]}}"#)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("expected 1000000"));
    }

    #[test]
    fn json_round_trip() {
        let config = GraphConfig::clrs_figure_24_5();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GraphConfig::from_json(&json).unwrap(), config);
    }
}
