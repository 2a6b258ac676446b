use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;
use userlist::config::UserlistConfig;

const VERBOSE_FILTER: &str = "debug";
const FALLBACK_FILTER: &str = "warn";

/// Pick the log filter: `RUST_LOG` wins, then `--verbose`, then the config.
fn build_filter(verbose: bool, config: &UserlistConfig) -> (EnvFilter, bool) {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return (filter, true);
    }
    if verbose {
        return (EnvFilter::new(VERBOSE_FILTER), true);
    }
    match EnvFilter::try_new(&config.log_filter) {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(FALLBACK_FILTER), false),
    }
}

/// Install the stderr subscriber. stdout is reserved for command output.
pub fn init(verbose: bool, config: &UserlistConfig) {
    let (filter, valid) = build_filter(verbose, config);

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .is_ok();

    if installed && !valid {
        tracing::warn!(
            filter = %config.log_filter,
            "ignoring invalid log_filter in config, using {}",
            FALLBACK_FILTER
        );
    }
}
