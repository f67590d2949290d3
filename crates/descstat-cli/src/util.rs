use std::io;

use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or debug
/// output with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Formats `value` rounded half-away-from-zero to `digits` decimal places,
/// without trailing zeros.
pub fn format_rounded(value: f64, digits: u32) -> String {
    descstat::rounding::round(value, digits).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rounded() {
        assert_eq!(format_rounded(25.428_571, 1), "25.4");
        assert_eq!(format_rounded(22.0, 1), "22");
        assert_eq!(format_rounded(-0.125, 2), "-0.13");
    }
}
