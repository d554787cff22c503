use crate::config::toml_config::TomlConfig;
use crate::domain::model::{ExitPolicy, Frontend, LauncherConfig, SizeCategory};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "tgi-launcher")]
#[command(about = "Pick a tumor size and card number, then run the matching simulation script")]
pub struct CliConfig {
    /// Path to a TOML config file (default: ./launcher.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Highest accepted card number
    #[arg(long)]
    pub max_card: Option<u32>,

    /// Directory holding the numbered scripts
    #[arg(long)]
    pub script_dir: Option<PathBuf>,

    /// Program used to run the script
    #[arg(long)]
    pub interpreter: Option<String>,

    /// Where prompts and messages are shown
    #[arg(long, value_enum)]
    pub frontend: Option<Frontend>,

    /// Tell the user which script is about to start
    #[arg(long)]
    pub notice: bool,

    /// Exit with the script's code (child) or 0 after any launch (launcher)
    #[arg(long, value_enum)]
    pub exit_code: Option<ExitPolicy>,

    /// Answer the size prompt up front
    #[arg(long, value_enum)]
    pub size: Option<SizeCategory>,

    /// Answer the card prompt up front (still validated)
    #[arg(long, allow_hyphen_values = true)]
    pub card: Option<String>,

    /// Resolve and check the script, print the plan as JSON, do not run it
    #[arg(long)]
    pub dry_run: bool,

    /// List the scripts available in the script directory
    #[arg(long, conflicts_with = "dry_run")]
    pub list: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CliConfig {
    /// 內建預設值 → TOML 檔案 → 命令列參數，最後驗證
    pub fn resolve(&self) -> Result<LauncherConfig> {
        let file = TomlConfig::load(self.config.as_deref())?;
        let config = self.apply_to(file.apply_to(LauncherConfig::default()));
        config.validate()?;
        Ok(config)
    }

    pub fn apply_to(&self, mut config: LauncherConfig) -> LauncherConfig {
        if let Some(max_card) = self.max_card {
            config.max_card = max_card;
        }
        if let Some(dir) = &self.script_dir {
            config.script_dir = dir.clone();
        }
        if let Some(interpreter) = &self.interpreter {
            config.interpreter = interpreter.clone();
        }
        if let Some(frontend) = self.frontend {
            config.frontend = frontend;
        }
        if self.notice {
            config.pre_launch_notice = true;
        }
        if let Some(policy) = self.exit_code {
            config.exit_policy = policy;
        }
        config
    }
}
