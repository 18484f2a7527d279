//! graycheck binary
//!
//! Checks constellation tables for Gray coding and plots BER curves.

mod check;
mod logging;
mod plot_ber;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::check::CheckArgs;
use crate::plot_ber::PlotBerArgs;

#[derive(Parser, Debug)]
#[command(name = "graycheck", version)]
#[command(about = "Gray-code checks for constellations and BER curve plots")]
struct Cli {
    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count nearest-neighbor edges that are not single-bit transitions
    Check(CheckArgs),
    /// Plot BER vs SNR for every ber_*.csv in a directory
    PlotBer(PlotBerArgs),
}

const EXIT_VIOLATIONS: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match dispatch(&cli.cmd) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn dispatch(cmd: &Command) -> anyhow::Result<ExitCode> {
    match cmd {
        Command::Check(args) => {
            let report = check::run(args)?;
            println!("{}", check::summary(&report, args.json)?);
            Ok(if report.is_gray_coded() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_VIOLATIONS)
            })
        }
        Command::PlotBer(args) => {
            plot_ber::run(args)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
