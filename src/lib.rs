pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{fs::LocalScriptDir, process::ProcessRunner};
pub use core::launcher::{Dispatch, Launcher};
pub use domain::model::{ExitPolicy, Frontend, LaunchPlan, LauncherConfig, SizeCategory};
pub use utils::error::{LauncherError, Result};
