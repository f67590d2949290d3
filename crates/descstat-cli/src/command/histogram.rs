use anyhow::Context;
use clap::Args;
use descstat::histogram::{Histogram, histogram};

#[derive(Debug, Clone, Args)]
pub(crate) struct HistogramArg {
    /// Values to count
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Lower bound of the first bin
    #[arg(long, allow_negative_numbers = true)]
    pub start: f64,

    /// Width of each bin
    #[arg(long)]
    pub step: f64,

    /// Number of bins
    #[arg(long)]
    pub bins: usize,

    /// Decimal places of the relative frequencies
    #[arg(long, default_value_t = 3)]
    pub digits: u32,
}

pub(crate) fn run(arg: &HistogramArg) -> anyhow::Result<()> {
    let hist = histogram(&arg.values, |&v| v, arg.start, arg.step, arg.bins)
        .context("Failed to build histogram")?;
    let dropped = arg.values.len() - usize::try_from(hist.total())?;
    if dropped > 0 {
        tracing::warn!(dropped, "values outside the histogram range were ignored");
    }
    print!("{}", render(&hist, arg.digits)?);
    Ok(())
}

fn render(hist: &Histogram, digits: u32) -> anyhow::Result<String> {
    let freq = hist
        .relative_frequency(digits)
        .context("No value fell into any bin")?;

    let mut out = String::new();
    for (bin, freq) in hist.bins().iter().zip(freq) {
        let range = format!("[{}, {})", bin.range.start, bin.range.end);
        out.push_str(&format!("{range:<20}{:>6}  {freq}\n", bin.count));
    }
    Ok(out)
}
