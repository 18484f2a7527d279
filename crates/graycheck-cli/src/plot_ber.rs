//! `graycheck plot-ber`: BER curves of every `ber_*.csv` in a directory.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use graycheck_io::load_ber_dir;
use graycheck_vis::{render_ber, BerStyle};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct PlotBerArgs {
    /// Directory searched for ber_*.csv files
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Output SVG file
    #[arg(long, default_value = "ber_vs_snr.svg")]
    pub out: PathBuf,

    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    #[arg(long, default_value_t = 600)]
    pub height: u32,
}

/// Load every curve and render them together. Returns the number of curves.
pub fn run(args: &PlotBerArgs) -> Result<usize> {
    let curves = load_ber_dir(&args.dir)
        .with_context(|| format!("loading BER tables from {}", args.dir.display()))?;
    if curves.is_empty() {
        bail!("no ber_*.csv files in {}", args.dir.display());
    }
    for curve in &curves {
        info!(config = %curve.name, points = curve.points.len(), "loaded BER curve");
    }

    let style = BerStyle {
        width: args.width,
        height: args.height,
    };
    render_ber(&args.out, &curves, &style)
        .with_context(|| format!("rendering {}", args.out.display()))?;
    info!(path = %args.out.display(), curves = curves.len(), "wrote BER plot");
    Ok(curves.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(dir: PathBuf, out: PathBuf) -> PlotBerArgs {
        PlotBerArgs {
            dir,
            out,
            width: 1000,
            height: 600,
        }
    }

    #[test]
    fn plots_every_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("ber_qpsk.csv"),
            "SNR_dB,BER\n0.0,0.0786\n4.0,0.0125\n8.0,0.0002\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("ber_qam16.csv"),
            "SNR_dB,BER\n0.0,0.19\n4.0,0.09\n8.0,0.02\n",
        )
        .unwrap();
        fs::write(dir.path().join("constellation.csv"), "index,real,imag\n").unwrap();

        let out = dir.path().join("ber.svg");
        assert_eq!(run(&args(dir.path().to_path_buf(), out.clone())).unwrap(), 2);

        let svg = fs::read_to_string(out).unwrap();
        for name in ["qpsk", "qam16"] {
            assert!(svg.contains(&format!("\n{name}\n</text>")), "missing curve {name}");
        }
    }

    #[test]
    fn empty_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&args(dir.path().to_path_buf(), dir.path().join("ber.svg"))).unwrap_err();
        assert!(err.to_string().contains("no ber_*.csv"));
    }
}
