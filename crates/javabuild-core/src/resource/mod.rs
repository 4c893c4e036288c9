//! Resource sets and their recipe serialization.

mod action;
mod dirs;
mod proptests;
mod spec;

pub use action::ResourceAction;
pub use dirs::{JAVA_RESOURCE_DIRS, JAVA_TEST_RESOURCE_DIRS, ResourceDirs, ResourceScope};
pub use spec::{FILTERING_WARNING, ResourceSpec};
