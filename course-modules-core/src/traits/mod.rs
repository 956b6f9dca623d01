pub mod block;
pub mod host;

pub use block::{BlockContent, BlockPlugin, FormatMap, ALL_FORMATS};
pub use host::{ArchetypeRegistry, HostError, ModuleInfoSource, StringSource, UserModuleInfo};
