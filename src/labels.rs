//! Single-character vertex names for display.
//!
//! Labels are presentation only; the algorithms work on indices.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Alphabet of the textbook example graph.
pub const DEFAULT_ALPHABET: &str = "rstxyz";

/// Rendered for indices outside the alphabet.
pub const UNKNOWN_LABEL: &str = "-";

/// Maps vertex indices to single-character names and back.
///
/// Serialized as the alphabet string, e.g. `"rstxyz"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexLabels {
    alphabet: Vec<char>,
}

impl VertexLabels {
    /// Labels vertex `i` with the `i`-th character of `alphabet`.
    pub fn new(alphabet: &str) -> Self {
        Self {
            alphabet: alphabet.chars().collect(),
        }
    }

    /// Number of labelled vertices.
    pub fn len(&self) -> usize {
        self.alphabet.len()
    }

    /// `true` if no vertex has a label.
    pub fn is_empty(&self) -> bool {
        self.alphabet.is_empty()
    }

    /// Name of vertex `index`, or [`UNKNOWN_LABEL`] if it has none.
    pub fn label(&self, index: usize) -> String {
        self.alphabet
            .get(index)
            .map_or_else(|| UNKNOWN_LABEL.to_owned(), char::to_string)
    }

    /// Name of an optional vertex; `None` renders as [`UNKNOWN_LABEL`].
    pub fn label_or_unknown(&self, index: Option<usize>) -> String {
        index.map_or_else(|| UNKNOWN_LABEL.to_owned(), |i| self.label(i))
    }

    /// Index of the vertex named `name`. If a character repeats, the last
    /// occurrence wins.
    pub fn index_of(&self, name: char) -> Option<usize> {
        self.alphabet.iter().rposition(|&c| c == name)
    }

    /// Like [`index_of`](Self::index_of) for a one-character string.
    pub fn parse(&self, name: &str) -> Option<usize> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.index_of(c),
            _ => None,
        }
    }
}

impl Default for VertexLabels {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHABET)
    }
}

impl Serialize for VertexLabels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.alphabet.iter().collect::<String>())
    }
}

impl<'de> Deserialize<'de> for VertexLabels {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let alphabet = String::deserialize(deserializer)?;
        Ok(Self::new(&alphabet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trip() {
        let labels = VertexLabels::default();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels.label(1), "s");
        assert_eq!(labels.index_of('z'), Some(5));
        assert_eq!(labels.parse("t"), Some(2));
    }

    #[test]
    fn unknown_lookups() {
        let labels = VertexLabels::default();
        assert_eq!(labels.label(6), UNKNOWN_LABEL);
        assert_eq!(labels.label(usize::MAX), UNKNOWN_LABEL);
        assert_eq!(labels.label_or_unknown(None), UNKNOWN_LABEL);
        assert_eq!(labels.label_or_unknown(Some(0)), "r");
        assert_eq!(labels.index_of('q'), None);
        assert_eq!(labels.parse(""), None);
        assert_eq!(labels.parse("st"), None);
    }

    #[test]
    fn repeated_character_resolves_to_last() {
        let labels = VertexLabels::new("aba");
        assert_eq!(labels.index_of('a'), Some(2));
    }

    #[test]
    fn serializes_as_string() {
        let labels = VertexLabels::new("abc");
        assert_eq!(serde_json::to_string(&labels).unwrap(), "\"abc\"");
        let back: VertexLabels = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(back, labels);
    }
}
