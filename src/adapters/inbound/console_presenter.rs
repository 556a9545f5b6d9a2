//! Console Presenter
//!
//! Renders pass windows as human readable lines for the command line.

use crate::domain::entities::PassWindow;
use std::io::{self, Write};

const NO_PASSES: &str = "No upcoming passes predicted.";

/// Format one pass, e.g. `Next pass at Mon Oct 19 2026 12:00:00 UTC for 600 seconds!`.
///
/// Timestamps outside chrono's range are printed raw.
pub fn format_pass(pass: &PassWindow) -> String {
    match pass.rise_time() {
        Some(rise) => format!(
            "Next pass at {} for {} seconds!",
            rise.format("%a %b %d %Y %H:%M:%S UTC"),
            pass.duration
        ),
        None => format!(
            "Next pass at unix time {} for {} seconds!",
            pass.risetime, pass.duration
        ),
    }
}

/// Write one line per pass to `out`.
pub fn print_pass_times<W: Write>(out: &mut W, passes: &[PassWindow]) -> io::Result<()> {
    if passes.is_empty() {
        writeln!(out, "{}", NO_PASSES)?;
        return Ok(());
    }
    for pass in passes {
        writeln!(out, "{}", format_pass(pass))?;
    }
    Ok(())
}
