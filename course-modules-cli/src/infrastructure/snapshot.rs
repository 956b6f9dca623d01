use crate::infrastructure::{CliError, Result};
use course_modules_core::CourseSnapshot;
use std::path::Path;
use tracing::{debug, instrument};

/// Read a course snapshot exported by the host as JSON
#[instrument]
pub fn load_snapshot(path: &Path) -> Result<CourseSnapshot> {
    if !path.is_file() {
        return Err(CliError::snapshot_not_found(path.to_path_buf()));
    }

    let raw = std::fs::read_to_string(path)?;
    let snapshot: CourseSnapshot = serde_json::from_str(&raw)?;
    debug!(
        course = snapshot.course,
        modules = snapshot.modules.len(),
        "Loaded snapshot"
    );
    Ok(snapshot)
}
