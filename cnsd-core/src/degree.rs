//! Node degrees of a binarized adjacency matrix.

use crate::matrix::BooleanMatrix;
use crate::types::DegreeVector;

/// Degree computation over boolean adjacency matrices.
#[derive(Debug)]
pub struct DegreeCounter;

impl DegreeCounter {
    /// Degree of every node.
    ///
    /// Undirected: each unordered pair is visited once; an edge adds one to
    /// both endpoints, a self-loop adds one to its node.
    ///
    /// Directed: each ordered pair is visited and an edge `i -> j` only adds
    /// one to `i`. The result is the out-degree.
    pub fn count(matrix: &BooleanMatrix) -> DegreeVector {
        let n = matrix.node_count();
        let undirected = matrix.connection_type().is_undirected();
        let mut degrees = vec![0; n];

        for from in 0..n {
            let start = if undirected { from } else { 0 };
            for to in start..n {
                if !matrix.get(from, to) {
                    continue;
                }
                degrees[from] += 1;
                if undirected && from != to {
                    degrees[to] += 1;
                }
            }
        }

        degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::WeightedMatrix;
    use crate::types::ConnectionType;

    #[test]
    fn test_undirected_degrees_after_binarize() {
        let mut m = WeightedMatrix::new(4, ConnectionType::Undirected);
        m.set_weight(0, 1, 0.6).unwrap();
        m.set_weight(0, 2, 0.7).unwrap();

        let mut bin = BooleanMatrix::default();
        m.binarize(&mut bin, 0.1, 1.0);

        assert_eq!(DegreeCounter::count(&bin), vec![2, 1, 1, 0]);
    }

    #[test]
    fn test_undirected_self_loop_counts_once() {
        let mut bin = BooleanMatrix::new(3, ConnectionType::Undirected);
        bin.set_weight(1, 1, true).unwrap();
        bin.set_weight(1, 2, true).unwrap();

        assert_eq!(DegreeCounter::count(&bin), vec![0, 2, 1]);
    }

    #[test]
    fn test_directed_counts_out_degree_only() {
        let mut bin = BooleanMatrix::new(3, ConnectionType::Directed);
        bin.set_weight(0, 1, true).unwrap();
        bin.set_weight(0, 2, true).unwrap();
        bin.set_weight(2, 1, true).unwrap();
        bin.set_weight(2, 2, true).unwrap();

        assert_eq!(DegreeCounter::count(&bin), vec![2, 0, 2]);
    }

    #[test]
    fn test_empty_matrix() {
        assert!(DegreeCounter::count(&BooleanMatrix::default()).is_empty());
    }
}
