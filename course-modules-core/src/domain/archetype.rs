use serde::{Deserialize, Serialize};

/// Coarse classification of a module type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleArchetype {
    /// Regular activity (forum, quiz, ...)
    #[default]
    Other,
    /// Resource-like module (file, page, url, folder, ...)
    Resource,
    /// Assignment-like module
    Assignment,
    /// System module, never listed to users directly
    System,
}

impl ModuleArchetype {
    pub fn is_resource(&self) -> bool {
        matches!(self, ModuleArchetype::Resource)
    }
}
