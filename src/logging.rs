//! Diagnostic logging to stderr.
//!
//! Filter comes from `SEGPASS_LOG` (e.g. `segpass=debug`), defaulting to
//! warnings only. Quiet mode turns it off entirely.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const ENV_VAR: &str = "SEGPASS_LOG";

pub fn init(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let stderr_layer = layer()
        .compact()
        .with_target(false)
        .with_ansi(unsafe { libc::isatty(2) == 1 })
        .with_writer(std::io::stderr);

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
