//! English strings shipped with the block.

use crate::traits::{HostError, StringSource};

/// Frankenstyle component name of the block
pub const COMPONENT: &str = "block_course_modules";

/// Core component, home of shared strings such as `resources`
pub const CORE_COMPONENT: &str = "moodle";

pub const PLUGIN_NAME: &str = "pluginname";
pub const ADD_INSTANCE: &str = "course_modules:addinstance";
pub const PRIVACY_METADATA: &str = "privacy:metadata";
pub const RESOURCES: &str = "resources";

const BLOCK_STRINGS: &[(&str, &str)] = &[
    (ADD_INSTANCE, "Add a new course_modules block"),
    (PLUGIN_NAME, "Course Modules"),
    (
        PRIVACY_METADATA,
        "The Course Modules block only shows data of particular course modules along with their completion status",
    ),
];

const CORE_STRINGS: &[(&str, &str)] = &[(RESOURCES, "Resources")];

/// String source backed by the built-in English strings
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStrings;

impl BuiltinStrings {
    pub fn lookup(key: &str, component: &str) -> Option<&'static str> {
        let table = match component {
            COMPONENT => BLOCK_STRINGS,
            CORE_COMPONENT => CORE_STRINGS,
            _ => return None,
        };
        table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| *value)
    }
}

impl StringSource for BuiltinStrings {
    fn get_string(&self, key: &str, component: &str) -> Result<String, HostError> {
        Self::lookup(key, component)
            .map(str::to_string)
            .ok_or_else(|| HostError::StringNotFound {
                key: key.to_string(),
                component: component.to_string(),
            })
    }
}
