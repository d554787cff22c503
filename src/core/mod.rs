pub mod catalog;
pub mod launcher;
pub mod plan;

pub use crate::domain::model::{LaunchPlan, LauncherConfig, SizeCategory};
pub use crate::domain::ports::{Dialog, ScriptLocator, ScriptRunner};
pub use crate::utils::error::Result;
