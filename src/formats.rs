use crate::{Attrs, DeferredNow, Level, Log, Palette};
use std::io::Write;

/// Function type for format functions.
///
/// If you want to write the log lines in your own format,
/// implement a function with this signature and provide it to
/// [`StandardWriter::format`](crate::writers::StandardWriter::format).
///
/// The palette is plain if the writer does not use colors.
pub type FormatFunction = fn(
    write: &mut dyn Write,
    now: &mut DeferredNow,
    log: &Log,
    palette: &Palette,
) -> Result<(), std::io::Error>;

/// The timestamp format of [`standard_format`]: wall-clock time with milliseconds.
pub const TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// A logline-formatter that produces log lines like
/// <br>
/// ```10:44:11.047 users: user logged in user=karl```
/// <br>
/// ```10:44:11.051 database(1.5ms): query done```
/// <br>
/// ```10:44:11.052 server(ERROR!): connection lost```
///
/// With a colored palette, the label is painted in the color of the package.
///
/// # Errors
///
/// See `std::write`
pub fn standard_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    log: &Log,
    palette: &Palette,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} {} {}{}",
        now.format(TIME_FORMAT),
        label(log, palette),
        log.message(),
        attrs_suffix(log.attrs())
    )
}

/// The label of a log line, `<package><level extension>:`.
#[must_use]
pub fn label(log: &Log, palette: &Palette) -> String {
    let label = format!("{}{}:", log.package(), level_extension(log, palette));
    if palette.is_colored() {
        format!(
            "{}{label}{}",
            palette.color_for(log.package()),
            palette.reset()
        )
    } else {
        label
    }
}

fn level_extension(log: &Log, palette: &Palette) -> String {
    match log.level() {
        Level::Info => String::new(),
        Level::Error => {
            if palette.is_colored() {
                format!(
                    "({}ERROR!{}{})",
                    palette.error_highlight(),
                    palette.reset(),
                    palette.color_for(log.package())
                )
            } else {
                "(ERROR!)".to_string()
            }
        }
        Level::Timer => {
            let elapsed = format_elapsed(log.elapsed_nanos());
            if palette.is_colored() {
                format!(
                    "({}{elapsed}{})",
                    palette.reset(),
                    palette.color_for(log.package())
                )
            } else {
                format!("({elapsed})")
            }
        }
    }
}

/// Renders the attributes as ` key=value` pairs, in the map's iteration order.
///
/// Missing attributes render as the empty string.
#[must_use]
pub fn attrs_suffix(attrs: Option<&Attrs>) -> String {
    let mut result = String::new();
    for (key, value) in attrs.into_iter().flatten() {
        result.push(' ');
        result.push_str(key);
        result.push('=');
        result.push_str(value);
    }
    result
}

/// Formats a number of nanoseconds as a short human-readable duration,
/// e.g. `850ns`, `1.5µs`, `250ms`, `1.5s`, `2m3s`, or `1h0m5s`.
#[must_use]
pub fn format_elapsed(nanos: u64) -> String {
    const MICRO: u64 = 1_000;
    const MILLI: u64 = 1_000_000;
    const SEC: u64 = 1_000_000_000;

    match nanos {
        0 => "0s".to_string(),
        n if n < MICRO => format!("{n}ns"),
        n if n < MILLI => with_fraction(n, MICRO, 3, "µs"),
        n if n < SEC => with_fraction(n, MILLI, 6, "ms"),
        n => {
            let secs = n / SEC;
            let (hours, minutes) = (secs / 3600, secs / 60 % 60);
            let mut result = String::new();
            if hours > 0 {
                result.push_str(&format!("{hours}h"));
            }
            if hours > 0 || minutes > 0 {
                result.push_str(&format!("{minutes}m"));
            }
            result.push_str(&with_fraction(secs % 60 * SEC + n % SEC, SEC, 9, "s"));
            result
        }
    }
}

// 1_500 with unit 1_000 -> "1.5"; trailing zeros of the fraction are dropped
fn with_fraction(value: u64, unit: u64, digits: usize, suffix: &str) -> String {
    let (whole, fraction) = (value / unit, value % unit);
    if fraction == 0 {
        format!("{whole}{suffix}")
    } else {
        let fraction = format!("{fraction:0digits$}");
        format!("{whole}.{}{suffix}", fraction.trim_end_matches('0'))
    }
}
