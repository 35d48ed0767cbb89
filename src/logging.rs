use env_logger::Env;
use log::LevelFilter;

use crate::opts::PubSubOpts;

/// The log level implied by `--trace`, then `--verbose`.
pub fn default_level(opts: &PubSubOpts) -> LevelFilter {
    match opts.trace_level {
        Some(level) => level.level_filter(),
        None if opts.verbose => LevelFilter::Info,
        None => LevelFilter::Warn,
    }
}

/// Initialise the logger from the environment, falling back to the level
/// the command line asked for. `RUST_LOG` wins when set.
pub fn init_logging(opts: &PubSubOpts) {
    let level = default_level(opts).to_string().to_lowercase();
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}
