//! Line-oriented text format and the row printer.
//!
//! ```text
//! U
//! 3
//! 0 3.2 0 3.2 0 1.5 0 1.5 0
//! ```
//!
//! Line 1 is the connection marker (`D` or `U`), line 2 the node count and
//! line 3 all `n * n` weights in row-major order, each followed by a space.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::errors::{CnsdError, Result};
use crate::matrix::adjacency::AdjacencyMatrix;
use crate::matrix::weight::{Cell, Weight};
use crate::types::ConnectionType;

impl<W: Weight> AdjacencyMatrix<W> {
    /// Serialize in the text format.
    pub fn write_text<O: Write>(&self, out: &mut O) -> std::io::Result<()> {
        writeln!(out, "{}", self.connection_type().marker())?;
        writeln!(out, "{}", self.node_count())?;
        for &w in self.weights() {
            write!(out, "{} ", Cell(w))?;
        }
        writeln!(out)
    }

    /// Serialize in the text format to `path`, replacing any existing file.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write_text(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Replace this matrix's contents with a matrix read in the text format.
    ///
    /// An unrecognised marker keeps the current connection type. Weights are
    /// written through the setter, so they feed the ratchets. Nothing is
    /// modified if the input fails to parse.
    pub fn read_text<R: BufRead>(&mut self, input: R) -> Result<()> {
        let mut lines = input.lines();

        let marker = lines.next().transpose()?.unwrap_or_default();
        let connection_type = ConnectionType::from_marker(marker.trim_end());

        let count_line = lines.next().transpose()?.ok_or_else(|| CnsdError::Parse {
            line: 2,
            message: "missing node count".into(),
        })?;
        let nodes: usize = count_line.trim().parse().map_err(|e| CnsdError::Parse {
            line: 2,
            message: format!("invalid node count {:?}: {e}", count_line.trim()),
        })?;

        let values_line = lines.next().transpose()?.unwrap_or_default();
        let values = values_line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|e| CnsdError::Parse {
                    line: 3,
                    message: format!("invalid weight {token:?}: {e}"),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        let cells = nodes.checked_mul(nodes).ok_or_else(|| CnsdError::Parse {
            line: 2,
            message: format!("node count {nodes} is too large"),
        })?;
        if values.len() != cells {
            return Err(CnsdError::Parse {
                line: 3,
                message: format!("expected {cells} weights, found {}", values.len()),
            });
        }

        if let Some(connection_type) = connection_type {
            self.set_connection_type(connection_type);
        }
        self.resize(nodes);
        for (index, value) in values.into_iter().enumerate() {
            self.store(index / nodes, index % nodes, W::from_f64(value));
        }
        Ok(())
    }

    /// Replace this matrix's contents with the matrix stored at `path`.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CnsdError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        self.read_text(BufReader::new(file))
    }

    /// Load a matrix from `path`, starting from an empty directed matrix.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut matrix = Self::default();
        matrix.load_file(path)?;
        Ok(matrix)
    }
}

/// One row per line, cells separated by single spaces.
impl<W: Weight> fmt::Display for AdjacencyMatrix<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.node_count() {
            for (col, w) in self.row(row).iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                w.fmt_cell(f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
