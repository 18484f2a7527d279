//! `graycheck check`: Gray-code check of a symbol table.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use graycheck_core::{check, GrayReport};
use graycheck_io::{load_constellation, CheckConfig};
use graycheck_vis::{render_constellation, ConstellationStyle};
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Symbol table with index, real and imag columns
    #[arg(default_value = "constellation.csv")]
    pub input: PathBuf,

    /// JSON config file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Label width in bits (default: smallest width holding the largest index)
    #[arg(long)]
    pub bits: Option<u32>,

    /// Slack added to the minimum distance when selecting edges
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Write the constellation diagram to this SVG file
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// Print the full report as JSON instead of the summary line
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    /// Config file values with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<CheckConfig> {
        let mut config = match &self.config {
            Some(path) => CheckConfig::load(path)?,
            None => CheckConfig::default(),
        };
        if let Some(tolerance) = self.tolerance {
            config.tolerance = tolerance;
        }
        if let Some(bits) = self.bits {
            config.label_width = Some(bits);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Load, check and optionally render. Prints nothing.
pub fn run(args: &CheckArgs) -> Result<GrayReport> {
    let config = args.resolve_config()?;
    let constellation = load_constellation(&args.input, config.label_width)
        .with_context(|| format!("loading {}", args.input.display()))?;
    if constellation.len() < 2 {
        warn!(symbols = constellation.len(), "fewer than two symbols, no edges to check");
    }

    let report = check(&constellation, config.tolerance()?)?;
    info!(
        symbols = report.symbols,
        width = ?report.label_width,
        min_distance = report.min_distance,
        edges = report.edges.len(),
        violations = report.violations,
        "gray check complete"
    );
    for e in report.invalid_edges() {
        info!(edge = %e.edge, left = %e.labels.0, right = %e.labels.1, hamming = e.hamming, "invalid edge");
    }

    if let Some(path) = &args.svg {
        render_constellation(path, &constellation, &report, &ConstellationStyle::default())
            .with_context(|| format!("rendering {}", path.display()))?;
        info!(path = %path.display(), "wrote constellation diagram");
    }

    Ok(report)
}

/// Text written to stdout for a report.
pub fn summary(report: &GrayReport, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(format!("Invalid edges: {}", report.violations))
    }
}
