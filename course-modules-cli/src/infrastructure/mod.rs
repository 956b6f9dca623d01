pub mod error;
pub mod observability;
pub mod snapshot;

pub use error::{CliError, Result};
pub use observability::LogConfig;
pub use snapshot::load_snapshot;
