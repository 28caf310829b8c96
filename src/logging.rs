use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "dh_cmake=info";

/// Filter used with `--verbose` when `RUST_LOG` is unset
const VERBOSE_FILTER: &str = "dh_cmake=debug";

/// Initialize logging for the dh-cmake CLI
///
/// Logs go to stderr so that stdout stays clean for `completions` and
/// `cpack show`. The level can be controlled via the RUST_LOG environment
/// variable:
/// - RUST_LOG=debug dh-cmake install  (also logs every external command)
/// - RUST_LOG=warn dh-cmake install   (warnings and errors only)
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}
