use crate::domain::{CompletionLabel, CourseModuleId};
use askama::Template;
use serde::{Deserialize, Serialize};

/// One rendered entry of the activity list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    /// Course module ID resolved for the current user
    pub id: CourseModuleId,

    /// Activity name
    pub name: String,

    /// Creation date, formatted `dd-MMM-yy`
    pub added_on: String,

    /// Completion status shown after the date
    pub status: CompletionLabel,

    /// Link target (the module's view page)
    pub url: String,

    /// Link label: `{id}-{name}-{date}-{status badge}`
    pub text: String,

    /// Full `<a>` element as handed to the host
    pub markup: String,
}

impl DisplayItem {
    pub fn new(
        wwwroot: &str,
        module_type: &str,
        id: CourseModuleId,
        name: &str,
        added_on: String,
        status: CompletionLabel,
    ) -> Result<Self, askama::Error> {
        let url = view_url(wwwroot, module_type, id);
        let badge = status.markup()?;
        let text = format!("{id}-{name}-{added_on}-{badge}");
        let markup = ActivityLink {
            url: &url,
            id,
            name,
            added_on: &added_on,
            badge: &badge,
        }
        .render()?;

        Ok(Self {
            id,
            name: name.to_string(),
            added_on,
            status,
            url,
            text,
            markup,
        })
    }
}

/// `{wwwroot}/mod/{type}/view.php?id={id}`
pub fn view_url(wwwroot: &str, module_type: &str, id: CourseModuleId) -> String {
    format!(
        "{}/mod/{}/view.php?id={}",
        wwwroot.trim_end_matches('/'),
        module_type,
        id
    )
}

#[derive(Template)]
#[template(
    source = r#"<a href="{{ url }}">{{ id }}-{{ name }}-{{ added_on }}-{{ badge|safe }}</a>"#,
    ext = "html"
)]
struct ActivityLink<'a> {
    url: &'a str,
    id: CourseModuleId,
    name: &'a str,
    added_on: &'a str,
    badge: &'a str,
}
