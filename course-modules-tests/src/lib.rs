use chrono::NaiveDate;
use course_modules_core::domain::{CourseId, UserId};
use course_modules_core::{
    ActivityList, ActivityListBuilder, BlockContent, BlockError, BlockPlugin, CompletionState,
    Config, CourseModulesBlock, CourseSnapshot, HostServices, MemoryHost, RenderContext,
};
use cucumber::World;

#[derive(Debug, World, Default)]
pub struct BlockWorld {
    /// Course state handed to the host (the system's input)
    pub snapshot: CourseSnapshot,

    /// User the block is rendered for
    pub user: UserId,

    /// Site settings
    pub config: Config,

    /// Block under test, kept across steps so memoisation is observable
    pub block: CourseModulesBlock,

    /// Last activity list built
    pub list: Option<ActivityList>,

    /// Last block content rendered
    pub content: Option<BlockContent>,

    /// Last failure
    pub error: Option<BlockError>,
}

impl BlockWorld {
    pub fn course(&self) -> CourseId {
        self.snapshot.course
    }

    /// Build the activity list from the current snapshot, replacing the
    /// previous outcome
    pub fn build_list(&mut self) {
        self.list = None;
        self.error = None;

        let host = MemoryHost::from_snapshot(self.snapshot.clone());
        let ctx = RenderContext::new(
            self.course(),
            self.user,
            &self.config,
            HostServices::from_host(&host),
        );

        match ActivityListBuilder::new(ctx).build() {
            Ok(list) => self.list = Some(list),
            Err(e) => self.error = Some(e),
        }
    }

    /// Render the block from the current snapshot, replacing the previous
    /// outcome
    pub fn render_block(&mut self) {
        self.content = None;
        self.error = None;

        let host = MemoryHost::from_snapshot(self.snapshot.clone());
        let ctx = RenderContext::new(
            self.snapshot.course,
            self.user,
            &self.config,
            HostServices::from_host(&host),
        );

        if self.block.title().is_empty() {
            self.block.init(&host).expect("Block strings missing");
        }

        match self.block.render_content(&ctx) {
            Ok(content) => self.content = Some(content.clone()),
            Err(e) => self.error = Some(e),
        }
    }

    /// Last built list (panics if none)
    pub fn list(&self) -> &ActivityList {
        match (&self.list, &self.error) {
            (Some(list), _) => list,
            (None, Some(e)) => panic!("Build failed: {e}"),
            (None, None) => panic!("No activity list built yet"),
        }
    }

    /// Last rendered content (panics if none)
    pub fn content(&self) -> &BlockContent {
        self.content.as_ref().expect("Block not rendered yet")
    }
}

/// Unix timestamp of midnight UTC for a `YYYY-MM-DD` date
pub fn midnight_utc(date: &str) -> i64 {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap_or_else(|e| panic!("Bad date '{date}': {e}"))
        .and_hms_opt(0, 0, 0)
        .expect("midnight exists")
        .and_utc()
        .timestamp()
}

/// Completion cell: JSON when it parses (`1`, `0`, `null`), text otherwise
pub fn completion_cell(cell: &str) -> CompletionState {
    let value = serde_json::from_str(cell)
        .unwrap_or_else(|_| serde_json::Value::String(cell.to_string()));
    CompletionState::from(value)
}

/// `yes` / `no` table cell
pub fn flag_cell(cell: &str) -> bool {
    matches!(cell.trim(), "yes" | "true" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_modules_core::CourseModuleInfo;

    fn world_with_added(added: i64) -> BlockWorld {
        BlockWorld {
            snapshot: CourseSnapshot::new(2).with_module(CourseModuleInfo::new(
                10, 3, "forum", "General", "Forums", added,
            )),
            user: 7,
            ..Default::default()
        }
    }

    #[test]
    fn test_rebuild_after_failure_clears_error() {
        let mut world = world_with_added(i64::MAX);
        world.build_list();
        assert!(matches!(world.error, Some(BlockError::InvalidTimestamp { .. })));
        assert!(world.list.is_none());

        world.snapshot.modules[0].added = midnight_utc("2024-01-05");
        world.build_list();
        assert!(world.error.is_none());
        assert_eq!(world.list().items.len(), 1);
    }

    #[test]
    fn test_failed_rebuild_drops_previous_list() {
        let mut world = world_with_added(0);
        world.build_list();
        assert!(world.list.is_some());

        world.snapshot.modules[0].added = i64::MAX;
        world.build_list();
        assert!(world.list.is_none());
        assert!(world.error.is_some());
    }

    #[test]
    fn test_render_after_failure_clears_error() {
        let mut world = world_with_added(i64::MAX);
        world.render_block();
        assert!(world.error.is_some());
        assert!(world.content.is_none());

        world.snapshot.modules[0].added = 0;
        world.render_block();
        assert!(world.error.is_none());
        assert_eq!(world.content().items.len(), 1);
    }

    #[test]
    fn test_midnight_utc() {
        assert_eq!(midnight_utc("2024-01-05"), 1_704_412_800);
    }

    #[test]
    fn test_completion_cell() {
        assert!(completion_cell("1").is_complete());
        assert_eq!(completion_cell("null"), CompletionState::NotTracked);
        assert_eq!(
            completion_cell("N/A"),
            CompletionState::Other(serde_json::json!("N/A"))
        );
    }
}
