pub mod infrastructure;
pub mod render;

pub use infrastructure::{load_snapshot, CliError, LogConfig, Result};
pub use render::{render_block, BlockInfo, RenderedBlock};
