//! Dense row-major adjacency matrix.

use std::mem;

use tracing::warn;

use crate::errors::{CnsdError, Result};
use crate::matrix::weight::Weight;
use crate::types::{ConnectionType, NodeIndex};

/// Storage estimate at or above which `resize` logs a warning. Advisory only.
pub const FOOTPRINT_WARNING_BYTES: u64 = 2 * 1024 * 1024 * 1024;

/// Dense adjacency matrix over a weight type `W`.
///
/// Convention: the directed connection from node `i` to node `j` lives at
/// row `i`, column `j`, i.e. linear index `i * n + j`.
///
/// The matrix tracks a running maximum and minimum of every weight written
/// through a setter. These are ratchets, not live extrema: overwriting the
/// cell that held the maximum does not lower it, and `resize` does not reset
/// them.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix<W: Weight> {
    weights: Vec<W>,
    nodes: usize,
    connection_type: ConnectionType,
    max_weight: W,
    min_weight: W,
}

/// Matrix of numeric edge weights.
pub type WeightedMatrix = AdjacencyMatrix<f64>;

/// Matrix of edge presence flags, produced by `binarize`.
pub type BooleanMatrix = AdjacencyMatrix<bool>;

impl<W: Weight> Default for AdjacencyMatrix<W> {
    fn default() -> Self {
        Self::new(0, ConnectionType::Directed)
    }
}

impl<W: Weight> AdjacencyMatrix<W> {
    /// Create a matrix of `nodes` nodes with every cell at `W::ZERO`.
    pub fn new(nodes: usize, connection_type: ConnectionType) -> Self {
        Self::with_fill(nodes, connection_type, W::ZERO)
    }

    /// Create a matrix of `nodes` nodes with every cell at `fill`.
    pub fn with_fill(nodes: usize, connection_type: ConnectionType, fill: W) -> Self {
        let mut matrix = Self {
            weights: Vec::new(),
            nodes: 0,
            connection_type,
            max_weight: W::RATCHET_MAX_SEED,
            min_weight: W::RATCHET_MIN_SEED,
        };
        matrix.resize_filled(nodes, fill);
        matrix
    }

    /// Estimated cell storage for a matrix of `nodes` nodes.
    pub fn footprint_bytes(nodes: usize) -> u64 {
        let n = nodes as u64;
        n.saturating_mul(n)
            .saturating_mul(mem::size_of::<W>() as u64)
    }

    /// Discard all cells and reallocate for `nodes` nodes, filled with `W::ZERO`.
    pub fn resize(&mut self, nodes: usize) {
        self.resize_filled(nodes, W::ZERO);
    }

    /// Discard all cells and reallocate for `nodes` nodes, filled with `fill`.
    ///
    /// Does not write through the setter, so the ratchets are untouched.
    pub fn resize_filled(&mut self, nodes: usize, fill: W) {
        let bytes = Self::footprint_bytes(nodes);
        if bytes >= FOOTPRINT_WARNING_BYTES {
            warn!(
                nodes,
                bytes,
                limit = FOOTPRINT_WARNING_BYTES,
                "adjacency matrix memory usage over 2GB"
            );
        }

        self.nodes = nodes;
        self.weights = vec![fill; nodes * nodes];
    }

    /// Set the weight of the edge `row -> col`.
    ///
    /// Undirected matrices also write `col -> row`. Both indices are checked
    /// before anything is written.
    pub fn set_weight(&mut self, row: NodeIndex, col: NodeIndex, weight: W) -> Result<()> {
        if row >= self.nodes || col >= self.nodes {
            return Err(CnsdError::IndexOutOfRange {
                row,
                col,
                nodes: self.nodes,
            });
        }
        self.store(row, col, weight);
        Ok(())
    }

    /// Set a weight by row-major linear index.
    pub fn set_weight_at(&mut self, index: usize, weight: W) -> Result<()> {
        let (row, col) = self
            .index_to_nodes(index)
            .ok_or(CnsdError::LinearIndexOutOfRange {
                index,
                cells: self.weights.len(),
            })?;
        self.set_weight(row, col, weight)
    }

    /// Unchecked write shared by the setter and the derivations.
    pub(crate) fn store(&mut self, row: NodeIndex, col: NodeIndex, weight: W) {
        let n = self.nodes;
        self.weights[row * n + col] = weight;
        if self.connection_type.is_undirected() {
            self.weights[col * n + row] = weight;
        }

        if self.max_weight < weight {
            self.max_weight = weight;
        }
        if self.min_weight > weight {
            self.min_weight = weight;
        }
    }

    /// Change the symmetry policy. Existing cells are left as they are.
    pub fn set_connection_type(&mut self, connection_type: ConnectionType) {
        self.connection_type = connection_type;
    }

    /// Weight of the edge `row -> col`.
    ///
    /// Indices are the caller's responsibility: an out-of-range pair panics
    /// or, if the linear index still lands inside storage, reads another cell.
    #[inline]
    pub fn get(&self, row: NodeIndex, col: NodeIndex) -> W {
        debug_assert!(row < self.nodes && col < self.nodes);
        self.weights[self.nodes_to_index(row, col)]
    }

    /// Weight at a row-major linear index. Panics when out of storage.
    #[inline]
    pub fn get_at(&self, index: usize) -> W {
        self.weights[index]
    }

    /// Checked read of the edge `row -> col`.
    pub fn try_get(&self, row: NodeIndex, col: NodeIndex) -> Option<W> {
        if row < self.nodes && col < self.nodes {
            Some(self.get(row, col))
        } else {
            None
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Whether the matrix has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes == 0
    }

    /// Symmetry policy.
    pub fn connection_type(&self) -> ConnectionType {
        self.connection_type
    }

    /// Highest weight ever written through a setter.
    pub fn max_weight(&self) -> W {
        self.max_weight
    }

    /// Lowest weight ever written through a setter.
    pub fn min_weight(&self) -> W {
        self.min_weight
    }

    /// All cells in row-major order.
    pub fn weights(&self) -> &[W] {
        &self.weights
    }

    /// Cells of one row, i.e. the outgoing weights of `row`.
    pub fn row(&self, row: NodeIndex) -> &[W] {
        let n = self.nodes;
        &self.weights[row * n..(row + 1) * n]
    }

    /// Split a linear index into `(row, col)`. `None` for an empty matrix.
    pub fn index_to_nodes(&self, index: usize) -> Option<(NodeIndex, NodeIndex)> {
        if self.nodes == 0 {
            return None;
        }
        Some((index / self.nodes, index % self.nodes))
    }

    /// Row-major linear index of `(row, col)`.
    #[inline]
    pub fn nodes_to_index(&self, row: NodeIndex, col: NodeIndex) -> usize {
        row * self.nodes + col
    }
}
