use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, Level};

use cnsd_core::{
    persistence::{self, DescriptorReport, ReportMetadata},
    BooleanMatrix, CnsdConfig, DegreeCounter, DescriptorPipeline, WeightedMatrix,
};

#[derive(Parser, Debug)]
#[command(name = "cnsd", about = "Complex-network structural descriptor CLI")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the multi-threshold descriptor of a matrix.
    Describe {
        /// Path to the matrix (text format)
        #[arg(long)]
        matrix: PathBuf,
        /// Path to config file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Number of threshold steps
        #[arg(long)]
        steps: Option<usize>,
        /// Lower threshold
        #[arg(long)]
        min: Option<f64>,
        /// Upper threshold
        #[arg(long)]
        max: Option<f64>,
        /// Write a JSON report here as well
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Keep weights inside [lower, upper], replace the rest with a fill value.
    Cut {
        /// Path to the matrix (text format)
        #[arg(long)]
        matrix: PathBuf,
        /// Lower band edge
        #[arg(long, allow_hyphen_values = true)]
        lower: f64,
        /// Upper band edge
        #[arg(long, allow_hyphen_values = true)]
        upper: f64,
        /// Value for cells outside the band
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        fill: f64,
        /// Write the result here instead of printing it
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Flag the edges whose weight lies inside [lower, upper].
    Binarize {
        /// Path to the matrix (text format)
        #[arg(long)]
        matrix: PathBuf,
        /// Lower band edge
        #[arg(long, allow_hyphen_values = true)]
        lower: f64,
        /// Upper band edge
        #[arg(long, allow_hyphen_values = true)]
        upper: f64,
        /// Write the result here instead of printing it
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print node degrees of the matrix binarized over [lower, upper].
    Degrees {
        /// Path to the matrix (text format)
        #[arg(long)]
        matrix: PathBuf,
        /// Lower band edge
        #[arg(long, allow_hyphen_values = true)]
        lower: f64,
        /// Upper band edge
        #[arg(long, allow_hyphen_values = true)]
        upper: f64,
    },

    /// Print a matrix and its summary.
    Show {
        /// Path to the matrix (text format)
        #[arg(long)]
        matrix: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Describe { matrix, config, steps, min, max, report } => {
            cmd_describe(&matrix, config, steps, min, max, report)?;
        }
        Commands::Cut { matrix, lower, upper, fill, output } => {
            cmd_cut(&matrix, lower, upper, fill, output)?;
        }
        Commands::Binarize { matrix, lower, upper, output } => {
            cmd_binarize(&matrix, lower, upper, output)?;
        }
        Commands::Degrees { matrix, lower, upper } => {
            cmd_degrees(&matrix, lower, upper)?;
        }
        Commands::Show { matrix } => {
            cmd_show(&matrix)?;
        }
    }

    Ok(())
}

fn load_matrix(path: &Path) -> anyhow::Result<WeightedMatrix> {
    info!("Loading matrix from {}...", path.display());
    let matrix = WeightedMatrix::from_file(path)
        .with_context(|| format!("failed to load matrix {}", path.display()))?;
    info!(
        "Loaded {} matrix with {} nodes",
        matrix.connection_type(),
        matrix.node_count()
    );
    Ok(matrix)
}

fn cmd_describe(
    matrix_path: &Path,
    config_path: Option<PathBuf>,
    steps: Option<usize>,
    min: Option<f64>,
    max: Option<f64>,
    report_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    // 1) Config, with flags taking precedence
    let mut config = match config_path {
        Some(path) => CnsdConfig::from_json_file(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => CnsdConfig::default(),
    };
    if let Some(steps) = steps {
        config.steps = steps;
    }
    if let Some(min) = min {
        config.threshold_min = min;
    }
    if let Some(max) = max {
        config.threshold_max = max;
    }
    info!("Using config: {:?}", config);

    // 2) Descriptor
    let matrix = load_matrix(matrix_path)?;
    let pipeline = DescriptorPipeline::new(config);
    let descriptor = pipeline.run(&matrix)?;

    for feature in descriptor.features() {
        println!("{:.6}", feature);
    }

    // 3) Optional report
    if let Some(path) = report_path {
        let report = DescriptorReport {
            metadata: ReportMetadata::new(
                pipeline.config(),
                matrix.node_count(),
                matrix.connection_type(),
            ),
            features: descriptor,
        };
        info!("Saving report to {}...", path.display());
        persistence::save_report(&path, &report)?;
    }

    Ok(())
}

fn cmd_cut(
    matrix_path: &Path,
    lower: f64,
    upper: f64,
    fill: f64,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let matrix = load_matrix(matrix_path)?;
    let mut cut = WeightedMatrix::default();
    matrix.cut(&mut cut, lower, upper, fill);

    match output {
        Some(path) => {
            cut.to_file(&path)?;
            info!("Wrote cut matrix to {}", path.display());
        }
        None => print!("{}", cut),
    }
    Ok(())
}

fn cmd_binarize(
    matrix_path: &Path,
    lower: f64,
    upper: f64,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let matrix = load_matrix(matrix_path)?;
    let mut bin = BooleanMatrix::default();
    matrix.binarize(&mut bin, lower, upper);

    match output {
        Some(path) => {
            bin.to_file(&path)?;
            info!("Wrote binarized matrix to {}", path.display());
        }
        None => print!("{}", bin),
    }
    Ok(())
}

fn cmd_degrees(matrix_path: &Path, lower: f64, upper: f64) -> anyhow::Result<()> {
    let matrix = load_matrix(matrix_path)?;
    let mut bin = BooleanMatrix::default();
    matrix.binarize(&mut bin, lower, upper);

    let degrees = DegreeCounter::count(&bin);
    let line: Vec<String> = degrees.iter().map(|d| d.to_string()).collect();
    println!("{}", line.join(" "));
    Ok(())
}

fn cmd_show(matrix_path: &Path) -> anyhow::Result<()> {
    let matrix = load_matrix(matrix_path)?;
    println!("Connection: {}", matrix.connection_type());
    println!("Nodes: {}", matrix.node_count());
    println!("Max weight: {}", matrix.max_weight());
    println!("Min weight: {}", matrix.min_weight());
    print!("{}", matrix);
    Ok(())
}
