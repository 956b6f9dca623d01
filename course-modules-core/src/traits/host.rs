use crate::domain::{CourseId, CourseModuleInfo, InstanceId, ModuleArchetype, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Course module data owned by the host platform
pub trait ModuleInfoSource: Send + Sync {
    /// All modules of a course, in the host's iteration order
    fn course_modules(&self, course: CourseId) -> Result<Vec<CourseModuleInfo>, HostError>;

    /// Module records as resolved for a specific user
    fn user_modules(&self, course: CourseId, user: UserId) -> Result<UserModuleInfo, HostError>;
}

/// Module type capability lookup
pub trait ArchetypeRegistry: Send + Sync {
    /// Archetype a module type declares (`Other` when it declares none)
    fn archetype(&self, module_type: &str) -> ModuleArchetype;
}

/// Localised string lookup
pub trait StringSource: Send + Sync {
    fn get_string(&self, key: &str, component: &str) -> Result<String, HostError>;
}

/// Per-user module records, grouped by module type then instance ID
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserModuleInfo {
    pub instances: HashMap<String, HashMap<InstanceId, CourseModuleInfo>>,
}

impl UserModuleInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, module: CourseModuleInfo) {
        self.instances
            .entry(module.module_type.clone())
            .or_default()
            .insert(module.instance, module);
    }

    pub fn instance(
        &self,
        module_type: &str,
        instance: InstanceId,
    ) -> Result<&CourseModuleInfo, HostError> {
        self.instances
            .get(module_type)
            .and_then(|by_instance| by_instance.get(&instance))
            .ok_or_else(|| HostError::InstanceNotFound {
                module_type: module_type.to_string(),
                instance,
            })
    }
}

impl FromIterator<CourseModuleInfo> for UserModuleInfo {
    fn from_iter<I: IntoIterator<Item = CourseModuleInfo>>(iter: I) -> Self {
        let mut info = UserModuleInfo::new();
        for module in iter {
            info.insert(module);
        }
        info
    }
}

/// Faults raised by the host's data layer
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostError {
    #[error("Course not found: {0}")]
    CourseNotFound(CourseId),

    #[error("No {module_type} instance {instance} for this user")]
    InstanceNotFound {
        module_type: String,
        instance: InstanceId,
    },

    #[error("Unknown string [{key}, {component}]")]
    StringNotFound { key: String, component: String },
}
