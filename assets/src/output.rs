//! Progress output and logging setup for the asset CLIs.
//!
//! Progress lines go to an injected writer (stdout in the binaries) so that
//! library code stays testable; diagnostics go through `log` instead.

use std::io::Write;

/// Default `env_logger` filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Binary unit suffixes used by [`human_size`], starting at KiB.
const UNITS: [&str; 6] = ["K", "M", "G", "T", "P", "E"];

/// Initialise `env_logger` for a binary, honouring `RUST_LOG`.
///
/// Log records go to stderr so they never interleave with progress lines.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format_timestamp(None)
        .init();
}

/// Write `message` and a newline to `out`, ignoring write failures.
pub fn write_line(out: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(out, "{message}").is_err() {
        // Best-effort progress output; ignore write failures.
    }
}

/// Format a byte count the way `du -h` does.
///
/// Sizes use 1024-based units, are rounded up, and keep one decimal place
/// below ten units.
///
/// # Examples
///
/// ```
/// use workshop_assets::output::human_size;
///
/// assert_eq!(human_size(512), "512B");
/// assert_eq!(human_size(1536), "1.5K");
/// assert_eq!(human_size(12 * 1024 * 1024), "12M");
/// ```
#[must_use]
pub fn human_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes}B");
    }

    let bytes = u128::from(bytes);
    let mut divisor: u128 = 1024;
    let mut unit = 0;
    loop {
        let tenths = (bytes * 10).div_ceil(divisor);
        if tenths < 100 {
            return format!("{}.{}{}", tenths / 10, tenths % 10, UNITS[unit]);
        }
        let whole = bytes.div_ceil(divisor);
        if whole < 1024 || unit + 1 == UNITS.len() {
            return format!("{whole}{}", UNITS[unit]);
        }
        divisor *= 1024;
        unit += 1;
    }
}
