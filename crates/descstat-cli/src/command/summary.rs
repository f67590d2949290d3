use anyhow::Context;
use clap::Args;
use descstat::summary::Summary;

use crate::util::format_rounded;

#[derive(Debug, Clone, Args)]
pub(crate) struct SummaryArg {
    /// Values to summarize
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Fraction of values trimmed (half from each end) for the trimmed mean
    #[arg(long, default_value_t = 0.1)]
    pub trim_rate: f64,

    /// Decimal places shown in the text output
    #[arg(long, default_value_t = descstat::frequency::DEFAULT_DIGITS)]
    pub digits: u32,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let summary = Summary::new(&arg.values, |&v| v, arg.trim_rate)
        .context("Failed to summarize values")?;

    if arg.json {
        let json =
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{json}");
    } else {
        print!("{}", render_text(&summary, arg.digits));
    }
    Ok(())
}

fn render_text(summary: &Summary, digits: u32) -> String {
    let rows = [
        ("average", summary.average),
        ("median", summary.median),
        ("trimmed mean", summary.trimmed_mean),
        ("variance", summary.variance),
        ("std dev", summary.standard_deviation),
        ("min", summary.min),
        ("max", summary.max),
    ];

    let mut out = format!("{:<14}{}\n", "count", summary.count);
    for (label, value) in rows {
        out.push_str(&format!("{label:<14}{}\n", format_rounded(value, digits)));
    }
    out
}
