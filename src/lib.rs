pub mod error;
pub mod flags;
pub mod logging;
pub mod opts;
pub mod parser;
pub mod usage;
pub mod values;

pub use error::OptsError;
pub use opts::{MessageSource, PubSubOpts, Role, UserProperty};
pub use parser::parse_args;
pub use usage::{usage, write_usage};

/// Version reported by the usage banner for the client library.
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
