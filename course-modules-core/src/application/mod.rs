mod block;
mod builder;
mod error;

pub use block::{CourseModulesBlock, ARIA_ROLE};
pub use builder::{ActivityList, ActivityListBuilder, DATE_FORMAT};
pub use error::BlockError;
