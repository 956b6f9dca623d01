pub mod archetype;
pub mod completion;
pub mod course_module;
pub mod display_item;
pub mod type_labels;

pub use archetype::ModuleArchetype;
pub use completion::{CompletionLabel, CompletionState};
pub use course_module::{
    CourseId, CourseModuleId, CourseModuleInfo, InstanceId, UserId, FOLDER_MODULE_TYPE,
};
pub use display_item::{view_url, DisplayItem};
pub use type_labels::{collate, TypeLabels, RESOURCES_KEY};
