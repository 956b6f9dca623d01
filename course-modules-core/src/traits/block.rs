use crate::application::BlockError;
use crate::context::RenderContext;
use crate::traits::{HostError, StringSource};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Format key matching every page
pub const ALL_FORMATS: &str = "all";

/// Contract the host's block chrome expects from a block
pub trait BlockPlugin {
    /// Called once after construction; sets the title
    fn init(&mut self, strings: &dyn StringSource) -> Result<(), HostError>;

    fn title(&self) -> &str;

    /// Content for the current page
    fn render_content(&mut self, ctx: &RenderContext<'_>) -> Result<&BlockContent, BlockError>;

    /// ARIA landmark role of the block's contents
    fn aria_role(&self) -> &'static str;

    /// Page formats the block may be added to
    fn applicable_formats(&self) -> FormatMap;
}

/// List-style block content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContent {
    /// Pre-rendered link markup, one per entry
    pub items: Vec<String>,
    pub icons: Vec<String>,
    pub footer: String,
}

/// Page format prefix -> whether the block is allowed there
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatMap(IndexMap<String, bool>);

impl FormatMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, format: impl Into<String>, allowed: bool) -> Self {
        self.0.insert(format.into(), allowed);
        self
    }

    pub fn get(&self, format: &str) -> Option<bool> {
        self.0.get(format).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Resolve a page format such as `course-view-topics` or
    /// `mod-forum-view`. The longest key that is a `-`-separated prefix
    /// wins; otherwise `all` decides, and without `all` the answer is no.
    pub fn is_applicable(&self, page_format: &str) -> bool {
        self.0
            .iter()
            .filter(|(key, _)| key.as_str() != ALL_FORMATS && is_format_prefix(key, page_format))
            .max_by_key(|(key, _)| key.len())
            .map(|(_, allowed)| *allowed)
            .or_else(|| self.get(ALL_FORMATS))
            .unwrap_or(false)
    }
}

fn is_format_prefix(key: &str, page_format: &str) -> bool {
    match page_format.strip_prefix(key) {
        Some(rest) => rest.is_empty() || rest.starts_with('-'),
        None => false,
    }
}
