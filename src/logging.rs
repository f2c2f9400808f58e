use std::fs::File;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is not set, from the number of `-v` flags.
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Environment variable naming a log file to use instead of stderr.
pub const LOG_FILE_ENV: &str = "ITEMLIST_LOG";

/// Per-run log file derived from `base`: `<base>.<unix secs>.<pid>`.
fn run_log_file(base: &str) -> PathBuf {
    let started = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    PathBuf::from(format!("{base}.{started}.{}", std::process::id()))
}

/// Install the global subscriber.
///
/// Output goes to stderr, keeping stdout for list output, unless
/// [`LOG_FILE_ENV`] is set. `RUST_LOG` overrides the `-v` level.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));
    let registry = tracing_subscriber::registry().with(filter);

    let file = std::env::var(LOG_FILE_ENV).ok().map(|base| {
        let path = run_log_file(&base);
        File::create(&path).map_err(|e| (path, e))
    });

    let installed = match file {
        None => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init(),
        Some(Ok(file)) => registry
            .with(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_timer(UtcTime::rfc_3339()),
            )
            .try_init(),
        Some(Err((path, e))) => {
            eprintln!("Warning: logging disabled, cannot create {}: {e}", path.display());
            return;
        }
    };
    // Fails only when a subscriber is already set, which is fine.
    let _ = installed;
}
