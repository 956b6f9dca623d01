use askama::Template;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Per-user completion state of a course module.
///
/// Hosts report this loosely (numbers, numeric strings, booleans or null),
/// so deserialisation accepts any JSON value and keeps unknown ones in
/// `Other` rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum CompletionState {
    /// No completion tracking (null / missing)
    #[default]
    NotTracked,
    /// Tracked, not yet complete (0)
    Incomplete,
    /// Complete (1)
    Complete,
    /// Any other reported value (pass/fail grades, "N/A", ...)
    Other(Value),
}

impl CompletionState {
    /// Only the exact "complete" value counts as completed
    pub fn is_complete(&self) -> bool {
        matches!(self, CompletionState::Complete)
    }

    pub fn label(&self) -> CompletionLabel {
        if self.is_complete() {
            CompletionLabel::Completed
        } else {
            CompletionLabel::NotCompleted
        }
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

impl From<Value> for CompletionState {
    fn from(value: Value) -> Self {
        if value.is_null() {
            return CompletionState::NotTracked;
        }
        match numeric(&value) {
            Some(n) if n == 1.0 => CompletionState::Complete,
            Some(n) if n == 0.0 => CompletionState::Incomplete,
            _ => CompletionState::Other(value),
        }
    }
}

impl From<CompletionState> for Value {
    fn from(state: CompletionState) -> Self {
        match state {
            CompletionState::NotTracked => Value::Null,
            CompletionState::Incomplete => Value::from(0),
            CompletionState::Complete => Value::from(1),
            CompletionState::Other(raw) => raw,
        }
    }
}

/// Status shown next to each activity link. Binary on purpose: every
/// state other than `Complete` renders as not completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompletionLabel {
    Completed,
    NotCompleted,
}

impl CompletionLabel {
    pub fn text(&self) -> &'static str {
        match self {
            CompletionLabel::Completed => "Completed",
            CompletionLabel::NotCompleted => "Not Completed",
        }
    }

    pub fn colour(&self) -> &'static str {
        match self {
            CompletionLabel::Completed => "green",
            CompletionLabel::NotCompleted => "red",
        }
    }

    /// Bold, coloured status badge
    pub fn markup(&self) -> Result<String, askama::Error> {
        StatusBadge {
            colour: self.colour(),
            text: self.text(),
        }
        .render()
    }
}

impl fmt::Display for CompletionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[derive(Template)]
#[template(source = r#"<b style="color:{{ colour }};">{{ text }}</b>"#, ext = "html")]
struct StatusBadge<'a> {
    colour: &'a str,
    text: &'a str,
}
