use crate::infrastructure::Result;
use course_modules_core::domain::UserId;
use course_modules_core::{
    privacy, BlockContent, BlockPlugin, Config, CourseModulesBlock, CourseSnapshot, FormatMap,
    HostServices, MemoryHost, RenderContext, StringSource, TypeLabels,
};
use serde::Serialize;
use tracing::info;

/// Block output as printed by `render --json`
#[derive(Debug, Clone, Serialize)]
pub struct RenderedBlock {
    pub title: String,
    pub aria_role: String,
    pub content: BlockContent,
    pub type_labels: TypeLabels,
}

/// Render the block for one user of the snapshot's course
pub fn render_block(snapshot: CourseSnapshot, user: UserId, config: &Config) -> Result<RenderedBlock> {
    let course = snapshot.course;
    let host = MemoryHost::from_snapshot(snapshot);
    let ctx = RenderContext::new(course, user, config, HostServices::from_host(&host));

    let mut block = CourseModulesBlock::new();
    block.init(&host)?;
    let content = block.render_content(&ctx)?.clone();
    let type_labels = block
        .activities()
        .map(|list| list.type_labels.clone())
        .unwrap_or_default();

    info!(course, user, items = content.items.len(), "Rendered block");

    Ok(RenderedBlock {
        title: block.title().to_string(),
        aria_role: block.aria_role().to_string(),
        content,
        type_labels,
    })
}

/// Static block metadata, as printed by `info`
#[derive(Debug, Clone, Serialize)]
pub struct BlockInfo {
    pub title: String,
    pub aria_role: String,
    pub formats: FormatMap,
    pub privacy: String,
}

impl BlockInfo {
    pub fn collect(strings: &dyn StringSource) -> Result<Self> {
        let mut block = CourseModulesBlock::new();
        block.init(strings)?;

        Ok(Self {
            title: block.title().to_string(),
            aria_role: block.aria_role().to_string(),
            formats: block.applicable_formats(),
            privacy: privacy::describe(strings)?,
        })
    }
}
