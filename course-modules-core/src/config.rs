use chrono::{FixedOffset, Offset, Utc};

/// Environment variables the CLI reads site settings from
pub const WWWROOT_VAR: &str = "COURSE_MODULES_WWWROOT";
pub const TZ_OFFSET_VAR: &str = "COURSE_MODULES_TZ_OFFSET";

const DEFAULT_WWWROOT: &str = "http://localhost";

/// Site settings the block needs from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Site base URL, without trailing slash
    pub wwwroot: String,

    /// Offset from UTC used for creation dates, in minutes
    pub timezone_offset_minutes: i32,
}

impl Config {
    pub fn new(wwwroot: impl Into<String>) -> Self {
        Self {
            wwwroot: normalize_wwwroot(wwwroot.into()),
            timezone_offset_minutes: 0,
        }
    }

    pub fn with_wwwroot(mut self, wwwroot: impl Into<String>) -> Self {
        self.wwwroot = normalize_wwwroot(wwwroot.into());
        self
    }

    pub fn with_timezone_offset(mut self, minutes: i32) -> Self {
        self.timezone_offset_minutes = minutes;
        self
    }

    /// Offsets outside ±24h fall back to UTC
    pub fn timezone(&self) -> FixedOffset {
        FixedOffset::east_opt(self.timezone_offset_minutes.saturating_mul(60)).unwrap_or_else(|| Utc.fix())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_WWWROOT)
    }
}

fn normalize_wwwroot(wwwroot: String) -> String {
    wwwroot.trim_end_matches('/').to_string()
}
