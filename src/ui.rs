//! Console output for release steps.
//!
//! Progress and diagnostics go to the terminal the way a release manager
//! reads them; nothing here affects control flow.

use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a warning in yellow on stderr.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("WARNING:").yellow(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print captured subprocess output verbatim.
pub fn display_output(output: &str) {
    println!("{}", output);
}

/// Size and throughput line for a finished download.
pub fn format_download_stats(bytes: u64, seconds: f64) -> String {
    let size_mb = bytes as f64 / 1024.0 / 1024.0;
    // Sub-millisecond local copies would otherwise divide by zero
    let rate = size_mb / seconds.max(0.001);
    format!("    {:.1} MB in {:.2} sec ({:.1} MB/sec)", size_mb, seconds, rate)
}

/// Size line for a download that was skipped because the file exists.
pub fn format_already_done(bytes: u64) -> String {
    format!("    already done: {:.1} MB", bytes as f64 / 1024.0 / 1024.0)
}
