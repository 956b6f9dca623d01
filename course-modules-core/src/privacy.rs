//! The block stores no personal data; it only displays what the host
//! already tracks.

use crate::lang::{COMPONENT, PRIVACY_METADATA};
use crate::traits::{HostError, StringSource};

/// Language string key explaining why no data is stored
pub fn reason() -> &'static str {
    PRIVACY_METADATA
}

/// Resolved privacy disclosure text
pub fn describe(strings: &dyn StringSource) -> Result<String, HostError> {
    strings.get_string(reason(), COMPONENT)
}
