use descstat::central;

use crate::util::format_rounded;

const SAMPLE: [u32; 7] = [47, 27, 25, 22, 18, 19, 20];
const TRIM_RATE: f64 = 0.3;

pub(crate) fn run() -> anyhow::Result<()> {
    println!("{}", render(&SAMPLE)?);
    Ok(())
}

fn render(values: &[u32]) -> anyhow::Result<String> {
    let average = central::average(values, |&n| f64::from(n))?;
    let median = central::median(values, |&n| f64::from(n))?;
    let trim_mean = central::trimmed_mean(values, |&n| f64::from(n), TRIM_RATE)?;
    tracing::debug!(average, median, trim_mean, "demo sample");

    Ok(format!(
        "average:{} median:{} trimMean:{}",
        format_rounded(average, 1),
        format_rounded(median, 1),
        format_rounded(trim_mean, 1),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fixed_sample() {
        assert_eq!(
            render(&SAMPLE).unwrap(),
            "average:25.4 median:22 trimMean:22.6"
        );
    }

    #[test]
    fn test_render_empty_is_error() {
        assert!(render(&[]).is_err());
    }
}
