//! Common core types used across the CNSD engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a node along either axis of an adjacency matrix.
pub type NodeIndex = usize;

/// One degree per node, index-aligned with the node ids.
pub type DegreeVector = Vec<usize>;

/// Edge symmetry policy of an adjacency matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConnectionType {
    /// `M[i, j]` holds the edge from `i` to `j`; `M[j, i]` is independent.
    #[default]
    Directed,
    /// Every write to `M[i, j]` is mirrored into `M[j, i]`.
    Undirected,
}

impl ConnectionType {
    /// Marker used on the first line of the text format.
    pub fn marker(self) -> &'static str {
        match self {
            ConnectionType::Directed => "D",
            ConnectionType::Undirected => "U",
        }
    }

    /// Parse a marker line. Anything other than `D` or `U` yields `None`.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "D" => Some(ConnectionType::Directed),
            "U" => Some(ConnectionType::Undirected),
            _ => None,
        }
    }

    /// Whether writes are mirrored across the diagonal.
    pub fn is_undirected(self) -> bool {
        self == ConnectionType::Undirected
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionType::Directed => f.write_str("directed"),
            ConnectionType::Undirected => f.write_str("undirected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_roundtrip() {
        for ct in [ConnectionType::Directed, ConnectionType::Undirected] {
            assert_eq!(ConnectionType::from_marker(ct.marker()), Some(ct));
        }
    }

    #[test]
    fn test_unknown_marker() {
        assert_eq!(ConnectionType::from_marker("X"), None);
        assert_eq!(ConnectionType::from_marker("d"), None);
        assert_eq!(ConnectionType::from_marker(""), None);
    }

    #[test]
    fn test_default_is_directed() {
        assert_eq!(ConnectionType::default(), ConnectionType::Directed);
        assert!(!ConnectionType::Directed.is_undirected());
        assert!(ConnectionType::Undirected.is_undirected());
    }
}
