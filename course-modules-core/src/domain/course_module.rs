use crate::domain::CompletionState;
use serde::{Deserialize, Serialize};

/// Course ID (assigned by the host)
pub type CourseId = u64;

/// User ID (assigned by the host)
pub type UserId = u64;

/// Course module ID (unique within a course)
pub type CourseModuleId = u64;

/// Instance ID inside the module type's own table
pub type InstanceId = u64;

/// Module type that is always linkable, even without a view page
pub const FOLDER_MODULE_TYPE: &str = "folder";

/// One activity or resource placed in a course, as seen by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseModuleInfo {
    /// Course module ID
    pub id: CourseModuleId,

    /// Instance ID (e.g. the forum's own ID)
    pub instance: InstanceId,

    /// Display title
    pub name: String,

    /// Module type key (e.g. "forum", "resource")
    pub module_type: String,

    /// Human-readable plural of the module type (e.g. "Forums")
    pub plural_name: String,

    /// Creation time (unix seconds)
    pub added: i64,

    /// Completion state for the current user
    #[serde(default)]
    pub completion: CompletionState,

    /// Whether the current user may see this module
    #[serde(default = "default_true")]
    pub user_visible: bool,

    /// Whether the module has a view page to link to (labels don't)
    #[serde(default = "default_true")]
    pub has_view_link: bool,
}

fn default_true() -> bool {
    true
}

impl CourseModuleInfo {
    /// Create a visible, linkable module with no completion tracking
    pub fn new(
        id: CourseModuleId,
        instance: InstanceId,
        module_type: impl Into<String>,
        name: impl Into<String>,
        plural_name: impl Into<String>,
        added: i64,
    ) -> Self {
        Self {
            id,
            instance,
            name: name.into(),
            module_type: module_type.into(),
            plural_name: plural_name.into(),
            added,
            completion: CompletionState::NotTracked,
            user_visible: true,
            has_view_link: true,
        }
    }

    pub fn with_completion(mut self, completion: CompletionState) -> Self {
        self.completion = completion;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.user_visible = false;
        self
    }

    pub fn without_view_link(mut self) -> Self {
        self.has_view_link = false;
        self
    }

    /// Folders can be displayed inline on the course page, so they count
    /// as linkable even without a view link.
    pub fn is_folder(&self) -> bool {
        self.module_type == FOLDER_MODULE_TYPE
    }

    /// Should this module appear in the activity list?
    pub fn is_listable(&self) -> bool {
        self.user_visible && (self.has_view_link || self.is_folder())
    }
}
