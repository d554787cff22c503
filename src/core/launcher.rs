use crate::core::plan::resolve_plan;
use crate::domain::model::{ChildStatus, LaunchPlan, LauncherConfig};
use crate::domain::ports::{Dialog, ScriptLocator, ScriptRunner};
use crate::utils::error::{ErrorCategory, LauncherError, Result};

pub const SIZE_TITLE: &str = "Tumor size";
pub const CARD_TITLE: &str = "Card number";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub plan: LaunchPlan,
    pub status: ChildStatus,
}

/// Runs the launch sequence: every step either passes or ends the run.
pub struct Launcher<D: Dialog, L: ScriptLocator, R: ScriptRunner> {
    config: LauncherConfig,
    dialog: D,
    locator: L,
    runner: R,
}

impl<D: Dialog, L: ScriptLocator, R: ScriptRunner> Launcher<D, L, R> {
    pub fn new(config: LauncherConfig, dialog: D, locator: L, runner: R) -> Self {
        Self {
            config,
            dialog,
            locator,
            runner,
        }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// 提示、驗證並確認檔案存在，但不啟動
    pub fn prepare(&self) -> Result<LaunchPlan> {
        let result = self.prepare_inner();
        if let Err(e) = &result {
            self.report(e);
        }
        result
    }

    pub async fn run(&self) -> Result<Dispatch> {
        let plan = self.prepare()?;

        if self.config.pre_launch_notice {
            self.dialog.info(&format!("Launching {}", plan.filename));
        }

        tracing::info!(
            script = %plan.path.display(),
            interpreter = %self.config.interpreter,
            "launching script"
        );

        let status = match self.runner.run(&plan.path).await {
            Ok(status) => status,
            Err(e) => {
                self.report(&e);
                return Err(e);
            }
        };

        if status.success() {
            tracing::info!(script = %plan.filename, "script finished");
        } else {
            tracing::warn!(
                script = %plan.filename,
                code = ?status.code,
                signal = ?status.signal,
                "script exited with failure"
            );
        }

        Ok(Dispatch { plan, status })
    }

    fn prepare_inner(&self) -> Result<LaunchPlan> {
        let size = self
            .dialog
            .select_size(SIZE_TITLE, &self.config.labels)?
            .ok_or_else(|| LauncherError::Cancelled {
                prompt: "size".to_string(),
            })?;
        tracing::debug!(%size, prefix = size.prefix(), "size selected");

        let text = format!("Enter the card number (1-{})", self.config.max_card);
        let input = self
            .dialog
            .prompt_card(CARD_TITLE, &text)?
            .ok_or_else(|| LauncherError::Cancelled {
                prompt: "card".to_string(),
            })?;
        tracing::debug!(input = %input, "card entered");

        let plan = resolve_plan(&self.config, size, &input, &self.locator)?;
        tracing::debug!(filename = %plan.filename, "target resolved");
        Ok(plan)
    }

    fn report(&self, err: &LauncherError) {
        tracing::debug!(category = ?err.category(), "{}", err);
        match err.category() {
            ErrorCategory::UserCancelled => self.dialog.status(&err.user_friendly_message()),
            _ => self.dialog.error(&err.user_friendly_message()),
        }
    }
}
