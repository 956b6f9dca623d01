use crate::config::Config;
use crate::domain::{CourseId, UserId};
use crate::traits::{ArchetypeRegistry, ModuleInfoSource, StringSource};
use chrono::FixedOffset;

/// Host capabilities the block reads from during a render
#[derive(Clone, Copy)]
pub struct HostServices<'a> {
    pub modules: &'a dyn ModuleInfoSource,
    pub archetypes: &'a dyn ArchetypeRegistry,
    pub strings: &'a dyn StringSource,
}

impl<'a> HostServices<'a> {
    pub fn new(
        modules: &'a dyn ModuleInfoSource,
        archetypes: &'a dyn ArchetypeRegistry,
        strings: &'a dyn StringSource,
    ) -> Self {
        Self {
            modules,
            archetypes,
            strings,
        }
    }

    /// Use one host object for all three capabilities
    pub fn from_host<H>(host: &'a H) -> Self
    where
        H: ModuleInfoSource + ArchetypeRegistry + StringSource,
    {
        Self::new(host, host, host)
    }
}

/// Everything one render needs: who is looking, at which course, on which site
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub course: CourseId,
    pub user: UserId,
    pub wwwroot: &'a str,
    pub timezone: FixedOffset,
    pub host: HostServices<'a>,
}

impl<'a> RenderContext<'a> {
    pub fn new(course: CourseId, user: UserId, config: &'a Config, host: HostServices<'a>) -> Self {
        Self {
            course,
            user,
            wwwroot: &config.wwwroot,
            timezone: config.timezone(),
            host,
        }
    }
}
