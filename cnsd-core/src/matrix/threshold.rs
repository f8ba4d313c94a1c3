//! Band derivations: `cut` keeps in-band weights, `binarize` flags them.

use crate::matrix::adjacency::{AdjacencyMatrix, BooleanMatrix};
use crate::matrix::weight::Weight;
use crate::types::NodeIndex;

impl<W: Weight> AdjacencyMatrix<W> {
    /// Copy every weight inside `[lower, upper]` into `out`; all other cells
    /// of `out` hold `cut_value`.
    ///
    /// `out` is resized to this matrix's node count and takes its connection
    /// type. Its previous contents are discarded.
    pub fn cut(&self, out: &mut AdjacencyMatrix<W>, lower: W, upper: W, cut_value: W) {
        out.resize_filled(self.node_count(), cut_value);
        out.set_connection_type(self.connection_type());

        self.for_each_in_band(lower, upper, |row, col, weight| {
            out.store(row, col, weight);
        });
    }

    /// Mark every edge whose weight lies inside `[lower, upper]` as `true` in
    /// `out`. Same resizing rules as [`cut`](Self::cut), with `false` as the
    /// outside value.
    pub fn binarize(&self, out: &mut BooleanMatrix, lower: W, upper: W) {
        out.resize_filled(self.node_count(), false);
        out.set_connection_type(self.connection_type());

        self.for_each_in_band(lower, upper, |row, col, _| {
            out.store(row, col, true);
        });
    }

    /// Visit each in-band cell once. Undirected matrices only visit the upper
    /// triangle and the diagonal; the destination's setter restores symmetry.
    fn for_each_in_band<F>(&self, lower: W, upper: W, mut visit: F)
    where
        F: FnMut(NodeIndex, NodeIndex, W),
    {
        let n = self.node_count();
        let undirected = self.connection_type().is_undirected();

        for row in 0..n {
            let start = if undirected { row } else { 0 };
            for col in start..n {
                let weight = self.get(row, col);
                if weight >= lower && weight <= upper {
                    visit(row, col, weight);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::matrix::{AdjacencyMatrix, BooleanMatrix, WeightedMatrix};
    use crate::types::ConnectionType;

    #[test]
    fn test_cut_undirected_with_sentinel() {
        let mut m = WeightedMatrix::new(3, ConnectionType::Undirected);
        m.set_weight(1, 2, 1.5).unwrap();
        m.set_weight(0, 1, 3.2).unwrap();

        let mut out = WeightedMatrix::default();
        m.cut(&mut out, 2.0, 10.0, -1.0);

        assert_eq!(out.connection_type(), ConnectionType::Undirected);
        assert_eq!(out.node_count(), 3);
        assert_eq!(
            out.weights(),
            &[-1.0, 3.2, -1.0, 3.2, -1.0, -1.0, -1.0, -1.0, -1.0]
        );
    }

    #[test]
    fn test_cut_directed() {
        let mut m = AdjacencyMatrix::<i32>::new(3, ConnectionType::Directed);
        m.set_weight(1, 2, 8).unwrap();
        m.set_weight(2, 2, 999).unwrap();
        m.set_weight(0, 1, 3).unwrap();

        let mut out = AdjacencyMatrix::<i32>::new(7, ConnectionType::Undirected);
        m.cut(&mut out, 1, 10, -1);

        assert_eq!(out.connection_type(), ConnectionType::Directed);
        assert_eq!(out.weights(), &[-1, 3, -1, -1, -1, 8, -1, -1, -1]);
    }

    #[test]
    fn test_cut_inverted_band_is_all_sentinel() {
        let mut m = WeightedMatrix::new(4, ConnectionType::Directed);
        m.set_weight(0, 3, 0.5).unwrap();
        m.set_weight(2, 1, 0.0).unwrap();

        let mut out = WeightedMatrix::default();
        m.cut(&mut out, 1.0, 0.0, 7.0);
        assert!(out.weights().iter().all(|&w| w == 7.0));
    }

    #[test]
    fn test_binarize_undirected() {
        let mut m = WeightedMatrix::new(4, ConnectionType::Undirected);
        m.set_weight(0, 1, 0.6).unwrap();
        m.set_weight(0, 2, 0.7).unwrap();

        let mut bin = BooleanMatrix::default();
        m.binarize(&mut bin, 0.1, 1.0);

        for row in 0..4 {
            for col in 0..4 {
                let expected = matches!((row, col), (0, 1) | (1, 0) | (0, 2) | (2, 0));
                assert_eq!(bin.get(row, col), expected, "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_binarize_band_is_closed() {
        let mut m = WeightedMatrix::new(3, ConnectionType::Directed);
        m.set_weight(0, 1, 0.25).unwrap();
        m.set_weight(1, 2, 0.75).unwrap();
        m.set_weight(2, 0, 0.8).unwrap();

        let mut bin = BooleanMatrix::default();
        m.binarize(&mut bin, 0.25, 0.75);
        assert!(bin.get(0, 1));
        assert!(bin.get(1, 2));
        assert!(!bin.get(2, 0));
        assert!(!bin.get(1, 0));
    }

    #[test]
    fn test_binarize_discards_previous_contents() {
        let m = WeightedMatrix::new(2, ConnectionType::Directed);
        let mut bin = BooleanMatrix::with_fill(5, ConnectionType::Undirected, true);
        m.binarize(&mut bin, 1.0, 2.0);

        assert_eq!(bin.node_count(), 2);
        assert_eq!(bin.weights(), &[false; 4]);
    }
}
