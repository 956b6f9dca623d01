use crate::application::{ActivityList, ActivityListBuilder, BlockError};
use crate::context::RenderContext;
use crate::lang::{COMPONENT, PLUGIN_NAME};
use crate::traits::{BlockContent, BlockPlugin, FormatMap, HostError, StringSource, ALL_FORMATS};
use tracing::debug;

pub const ARIA_ROLE: &str = "navigation";

/// Block listing the course's activities with their completion status
#[derive(Debug, Clone, Default)]
pub struct CourseModulesBlock {
    title: String,
    content: Option<BlockContent>,
    activities: Option<ActivityList>,
}

impl CourseModulesBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activity list behind the last render, including the type labels
    pub fn activities(&self) -> Option<&ActivityList> {
        self.activities.as_ref()
    }

    /// Drop the memoised content so the next render rebuilds it
    pub fn reset(&mut self) {
        self.content = None;
        self.activities = None;
    }
}

impl BlockPlugin for CourseModulesBlock {
    fn init(&mut self, strings: &dyn StringSource) -> Result<(), HostError> {
        self.title = strings.get_string(PLUGIN_NAME, COMPONENT)?;
        Ok(())
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn render_content(&mut self, ctx: &RenderContext<'_>) -> Result<&BlockContent, BlockError> {
        if self.content.is_some() {
            debug!("Returning memoised block content");
        } else {
            let activities = ActivityListBuilder::new(*ctx).build()?;
            let content = BlockContent {
                items: activities.items.iter().map(|item| item.markup.clone()).collect(),
                icons: Vec::new(),
                footer: String::new(),
            };
            self.activities = Some(activities);
            self.content = Some(content);
        }

        let content: &BlockContent = self.content.get_or_insert_with(BlockContent::default);
        Ok(content)
    }

    fn aria_role(&self) -> &'static str {
        ARIA_ROLE
    }

    fn applicable_formats(&self) -> FormatMap {
        FormatMap::new()
            .with(ALL_FORMATS, true)
            .with("mod", false)
            .with("my", false)
            .with("admin", false)
            .with("tag", false)
    }
}
