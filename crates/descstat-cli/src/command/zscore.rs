use anyhow::Context;
use clap::Args;
use descstat::dispersion;

use crate::util::format_rounded;

#[derive(Debug, Clone, Args)]
pub(crate) struct ZscoreArg {
    /// Values to standardize
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Use this average instead of the sample average
    #[arg(long, allow_negative_numbers = true)]
    pub average: Option<f64>,

    /// Use this standard deviation instead of the sample standard deviation
    #[arg(long)]
    pub std_dev: Option<f64>,

    /// Decimal places of the printed scores
    #[arg(long, default_value_t = descstat::frequency::DEFAULT_DIGITS)]
    pub digits: u32,
}

pub(crate) fn run(arg: &ZscoreArg) -> anyhow::Result<()> {
    for line in render(arg)? {
        println!("{line}");
    }
    Ok(())
}

fn render(arg: &ZscoreArg) -> anyhow::Result<Vec<String>> {
    let scores = dispersion::standardization(&arg.values, |&v| v, arg.average, arg.std_dev)
        .context("Failed to standardize values")?;
    Ok(arg
        .values
        .iter()
        .zip(scores)
        .map(|(value, z)| format!("{value}\t{}", format_rounded(z, arg.digits)))
        .collect())
}
