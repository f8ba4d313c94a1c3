//! Persistence of descriptor results.
//! Saves/loads a JSON report: run metadata plus the feature vector.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::CnsdConfig;
use crate::pipeline::Descriptor;
use crate::types::ConnectionType;

/// Metadata stored with a descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Version of the cnsd-core library.
    pub version: String,
    /// ISO 8601 timestamp of creation.
    pub created_at: String,
    /// Configuration the descriptor was computed with.
    pub config: CnsdConfig,
    /// Node count of the source matrix.
    pub nodes: usize,
    /// Connection type of the source matrix.
    pub connection_type: ConnectionType,
}

impl ReportMetadata {
    /// Create new metadata with current version and timestamp.
    pub fn new(config: &CnsdConfig, nodes: usize, connection_type: ConnectionType) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            config: config.clone(),
            nodes,
            connection_type,
        }
    }
}

/// A descriptor together with how it was produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptorReport {
    /// Run metadata.
    pub metadata: ReportMetadata,
    /// Interleaved `[max, avg, ...]` features.
    pub features: Descriptor,
}

/// Save a report as pretty-printed JSON.
pub fn save_report(path: &Path, report: &DescriptorReport) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let file = File::create(path).context("Failed to create report file")?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}

/// Load a report written by [`save_report`].
pub fn load_report(path: &Path) -> Result<DescriptorReport> {
    let file = File::open(path).context("Failed to open report file")?;
    let report = serde_json::from_reader(BufReader::new(file))?;
    Ok(report)
}
