use crate::domain::{CourseId, CourseModuleInfo, ModuleArchetype, UserId};
use crate::lang::BuiltinStrings;
use crate::traits::{ArchetypeRegistry, HostError, ModuleInfoSource, StringSource, UserModuleInfo};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Module types that ship with the resource archetype
pub const STANDARD_RESOURCE_TYPES: &[&str] = &["book", "folder", "imscp", "page", "resource", "url"];

/// Course state as exported by a host, in JSON form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseSnapshot {
    pub course: CourseId,

    /// Modules in course order
    #[serde(default)]
    pub modules: Vec<CourseModuleInfo>,

    /// Archetype overrides per module type
    #[serde(default)]
    pub archetypes: HashMap<String, ModuleArchetype>,

    /// Per-user records replacing the course-level record with the same
    /// module type and instance
    #[serde(default)]
    pub users: HashMap<UserId, Vec<CourseModuleInfo>>,

    /// String overrides: component -> key -> text
    #[serde(default)]
    pub strings: HashMap<String, HashMap<String, String>>,
}

impl CourseSnapshot {
    pub fn new(course: CourseId) -> Self {
        Self {
            course,
            ..Default::default()
        }
    }

    pub fn with_module(mut self, module: CourseModuleInfo) -> Self {
        self.modules.push(module);
        self
    }

    pub fn with_user_module(mut self, user: UserId, module: CourseModuleInfo) -> Self {
        self.users.entry(user).or_default().push(module);
        self
    }

    pub fn with_archetype(mut self, module_type: impl Into<String>, archetype: ModuleArchetype) -> Self {
        self.archetypes.insert(module_type.into(), archetype);
        self
    }
}

/// In-memory host, serving one or more course snapshots
#[derive(Debug, Clone)]
pub struct MemoryHost {
    courses: HashMap<CourseId, CourseSnapshot>,
    archetypes: HashMap<String, ModuleArchetype>,
    strings: HashMap<String, HashMap<String, String>>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    pub fn new() -> Self {
        let archetypes = STANDARD_RESOURCE_TYPES
            .iter()
            .map(|t| (t.to_string(), ModuleArchetype::Resource))
            .collect();

        Self {
            courses: HashMap::new(),
            archetypes,
            strings: HashMap::new(),
        }
    }

    pub fn from_snapshot(snapshot: CourseSnapshot) -> Self {
        let mut host = Self::new();
        host.add_course(snapshot);
        host
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let snapshot: CourseSnapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Register a course. Its archetype and string overrides apply host-wide.
    pub fn add_course(&mut self, mut snapshot: CourseSnapshot) {
        debug!(
            course = snapshot.course,
            modules = snapshot.modules.len(),
            "Adding course snapshot"
        );
        self.archetypes.extend(snapshot.archetypes.drain());
        for (component, strings) in snapshot.strings.drain() {
            self.strings.entry(component).or_default().extend(strings);
        }
        self.courses.insert(snapshot.course, snapshot);
    }

    pub fn set_archetype(&mut self, module_type: impl Into<String>, archetype: ModuleArchetype) {
        self.archetypes.insert(module_type.into(), archetype);
    }

    fn course(&self, course: CourseId) -> Result<&CourseSnapshot, HostError> {
        self.courses.get(&course).ok_or(HostError::CourseNotFound(course))
    }
}

impl ModuleInfoSource for MemoryHost {
    fn course_modules(&self, course: CourseId) -> Result<Vec<CourseModuleInfo>, HostError> {
        Ok(self.course(course)?.modules.clone())
    }

    #[instrument(skip(self))]
    fn user_modules(&self, course: CourseId, user: UserId) -> Result<UserModuleInfo, HostError> {
        let snapshot = self.course(course)?;
        let mut info: UserModuleInfo = snapshot.modules.iter().cloned().collect();

        if let Some(overrides) = snapshot.users.get(&user) {
            debug!(overrides = overrides.len(), "Applying per-user records");
            for module in overrides {
                info.insert(module.clone());
            }
        }

        Ok(info)
    }
}

impl ArchetypeRegistry for MemoryHost {
    fn archetype(&self, module_type: &str) -> ModuleArchetype {
        self.archetypes
            .get(module_type)
            .copied()
            .unwrap_or_default()
    }
}

impl StringSource for MemoryHost {
    fn get_string(&self, key: &str, component: &str) -> Result<String, HostError> {
        match self.strings.get(component).and_then(|s| s.get(key)) {
            Some(text) => Ok(text.clone()),
            None => BuiltinStrings.get_string(key, component),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{CORE_COMPONENT, RESOURCES};

    fn snapshot() -> CourseSnapshot {
        CourseSnapshot::new(2)
            .with_module(CourseModuleInfo::new(10, 3, "forum", "General", "Forums", 0))
            .with_module(CourseModuleInfo::new(11, 1, "page", "Syllabus", "Pages", 0))
            .with_user_module(5, CourseModuleInfo::new(99, 3, "forum", "General", "Forums", 0))
    }

    #[test]
    fn test_course_modules_keep_order() {
        let host = MemoryHost::from_snapshot(snapshot());
        let ids: Vec<_> = host.course_modules(2).unwrap().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![10, 11]);
    }

    #[test]
    fn test_unknown_course() {
        let host = MemoryHost::from_snapshot(snapshot());
        assert_eq!(host.course_modules(3), Err(HostError::CourseNotFound(3)));
    }

    #[test]
    fn test_user_records_override_course_records() {
        let host = MemoryHost::from_snapshot(snapshot());

        let user = host.user_modules(2, 5).unwrap();
        assert_eq!(user.instance("forum", 3).unwrap().id, 99);
        assert_eq!(user.instance("page", 1).unwrap().id, 11);

        let other = host.user_modules(2, 6).unwrap();
        assert_eq!(other.instance("forum", 3).unwrap().id, 10);
    }

    #[test]
    fn test_standard_archetypes() {
        let host = MemoryHost::new();
        assert_eq!(host.archetype("page"), ModuleArchetype::Resource);
        assert_eq!(host.archetype("forum"), ModuleArchetype::Other);
        assert_eq!(host.archetype("unheard-of"), ModuleArchetype::Other);
    }

    #[test]
    fn test_snapshot_archetype_override() {
        let host = MemoryHost::from_snapshot(
            CourseSnapshot::new(2).with_archetype("assign", ModuleArchetype::Assignment),
        );
        assert_eq!(host.archetype("assign"), ModuleArchetype::Assignment);
    }

    #[test]
    fn test_string_override_then_builtin() {
        let mut snapshot = CourseSnapshot::new(2);
        snapshot
            .strings
            .entry(CORE_COMPONENT.to_string())
            .or_default()
            .insert(RESOURCES.to_string(), "Ressourcen".to_string());
        let host = MemoryHost::from_snapshot(snapshot);

        assert_eq!(host.get_string(RESOURCES, CORE_COMPONENT).unwrap(), "Ressourcen");
        assert_eq!(
            host.get_string("pluginname", "block_course_modules").unwrap(),
            "Course Modules"
        );
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "course": 2,
            "modules": [
                {"id": 10, "instance": 3, "name": "General", "module_type": "forum",
                 "plural_name": "Forums", "added": 1704412800, "completion": 1}
            ]
        }"#;

        let host = MemoryHost::from_json(json).unwrap();
        let modules = host.course_modules(2).unwrap();
        assert_eq!(modules.len(), 1);
        assert!(modules[0].completion.is_complete());
    }
}
