use crate::application::BlockError;
use crate::context::RenderContext;
use crate::domain::{CourseModuleInfo, DisplayItem, ModuleArchetype, TypeLabels, RESOURCES_KEY};
use crate::lang::{CORE_COMPONENT, RESOURCES};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Creation date format, e.g. `05-Jan-24`
pub const DATE_FORMAT: &str = "%d-%b-%y";

/// Result of one build pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityList {
    /// Listable modules in course order
    pub items: Vec<DisplayItem>,

    /// Display label per module type, sorted by label. Not applied to
    /// `items`; exposed for hosts that want to group by type.
    pub type_labels: TypeLabels,
}

/// Turns a course's module snapshot into the list shown to one user
pub struct ActivityListBuilder<'a> {
    ctx: RenderContext<'a>,
}

impl<'a> ActivityListBuilder<'a> {
    pub fn new(ctx: RenderContext<'a>) -> Self {
        Self { ctx }
    }

    /// Fetch the course modules from the host and build the list
    #[instrument(skip(self), fields(course = self.ctx.course, user = self.ctx.user))]
    pub fn build(&self) -> Result<ActivityList, BlockError> {
        let modules = self.ctx.host.modules.course_modules(self.ctx.course)?;
        self.build_from(&modules)
    }

    /// Build the list from modules already fetched by the caller
    pub fn build_from(&self, modules: &[CourseModuleInfo]) -> Result<ActivityList, BlockError> {
        let mut type_labels = TypeLabels::new();
        let mut archetypes = HashMap::new();
        let mut items = Vec::new();

        for module in modules {
            if !module.is_listable() {
                debug!(
                    id = module.id,
                    module_type = %module.module_type,
                    user_visible = module.user_visible,
                    has_view_link = module.has_view_link,
                    "Skipping module"
                );
                continue;
            }

            self.record_type_label(module, &mut archetypes, &mut type_labels)?;

            let item = self.display_item(module)?;
            debug!(id = item.id, status = %item.status, "Listing module");
            items.push(item);
        }

        type_labels.sort_collated();

        info!(
            items = items.len(),
            type_labels = type_labels.len(),
            "Built activity list"
        );

        Ok(ActivityList { items, type_labels })
    }

    /// First occurrence of a type decides its label; resource-like types
    /// all share the generic "resources" entry.
    fn record_type_label<'m>(
        &self,
        module: &'m CourseModuleInfo,
        archetypes: &mut HashMap<&'m str, ModuleArchetype>,
        type_labels: &mut TypeLabels,
    ) -> Result<(), BlockError> {
        if type_labels.contains(&module.module_type) {
            return Ok(());
        }

        let archetype = *archetypes
            .entry(module.module_type.as_str())
            .or_insert_with(|| self.ctx.host.archetypes.archetype(&module.module_type));

        if archetype.is_resource() {
            if !type_labels.contains(RESOURCES_KEY) {
                let label = self.ctx.host.strings.get_string(RESOURCES, CORE_COMPONENT)?;
                type_labels.record(RESOURCES_KEY, label);
            }
        } else {
            type_labels.record(module.module_type.as_str(), module.plural_name.as_str());
        }

        Ok(())
    }

    fn display_item(&self, module: &CourseModuleInfo) -> Result<DisplayItem, BlockError> {
        // The link uses the ID as resolved for this user, not the course-level one
        let user_modules = self
            .ctx
            .host
            .modules
            .user_modules(self.ctx.course, self.ctx.user)?;
        let id = user_modules
            .instance(&module.module_type, module.instance)?
            .id;

        let added_on = format_added(module, self.ctx.timezone)?;

        Ok(DisplayItem::new(
            self.ctx.wwwroot,
            &module.module_type,
            id,
            &module.name,
            added_on,
            module.completion.label(),
        )?)
    }
}

fn format_added(module: &CourseModuleInfo, timezone: FixedOffset) -> Result<String, BlockError> {
    let added = DateTime::from_timestamp(module.added, 0).ok_or(BlockError::InvalidTimestamp {
        id: module.id,
        added: module.added,
    })?;
    Ok(added.with_timezone(&timezone).format(DATE_FORMAT).to_string())
}
