use clap::{Parser, Subcommand};

use self::{histogram::HistogramArg, summary::SummaryArg, zscore::ZscoreArg};
use crate::util;

mod demo;
mod histogram;
mod summary;
mod zscore;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Show debug logs on stderr (overridden by `RUST_LOG`)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// What to compute
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print average, median and trimmed mean of a fixed sample
    Demo,
    /// Summarize a sample given on the command line
    Summary(#[clap(flatten)] SummaryArg),
    /// Count values into fixed-width bins
    Histogram(#[clap(flatten)] HistogramArg),
    /// Standardize values into z-scores
    Zscore(#[clap(flatten)] ZscoreArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    util::init_logging(args.verbose);
    match args.mode.unwrap_or(Mode::Demo) {
        Mode::Demo => demo::run()?,
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Histogram(arg) => histogram::run(&arg)?,
        Mode::Zscore(arg) => zscore::run(&arg)?,
    }
    Ok(())
}
