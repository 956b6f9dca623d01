pub mod application;
pub mod config;
pub mod context;
pub mod domain;
pub mod lang;
pub mod memory_host;
pub mod privacy;
pub mod traits;

pub use application::{ActivityList, ActivityListBuilder, BlockError, CourseModulesBlock};
pub use config::Config;
pub use context::{HostServices, RenderContext};
pub use domain::{
    CompletionLabel, CompletionState, CourseModuleInfo, DisplayItem, ModuleArchetype, TypeLabels,
};
pub use lang::BuiltinStrings;
pub use memory_host::{CourseSnapshot, MemoryHost};
pub use traits::{
    ArchetypeRegistry, BlockContent, BlockPlugin, FormatMap, HostError, ModuleInfoSource,
    StringSource, UserModuleInfo,
};
