//! Diagnostic logging
//!
//! `AUTHDEPLOY_LOG` takes `tracing` filter directives, from the process
//! environment or the loaded `.env` file; without it, `-v` raises the level
//! one step per flag. Logs always go to stderr so stdout stays clean for
//! reports and NDJSON.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: u8, directives: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose, directives))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Explicit directives win unless blank or unparseable
fn filter(verbose: u8, directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)))
}

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "authdeploy=warn",
        1 => "authdeploy=info",
        2 => "authdeploy=debug",
        _ => "authdeploy=trace",
    }
}
