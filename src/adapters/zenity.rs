use crate::domain::model::{SizeCategory, SizeLabels};
use crate::domain::ports::Dialog;
use crate::utils::error::{LauncherError, Result};
use std::process::Command;

/// Desktop dialogs through the `zenity` tool.
#[derive(Debug, Clone)]
pub struct ZenityDialog {
    program: String,
    leading_args: Vec<String>,
}

impl ZenityDialog {
    pub fn new() -> Self {
        Self::with_program("zenity")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self::with_command(program, Vec::<String>::new())
    }

    /// `leading_args` go before the dialog arguments, e.g. `flatpak-spawn --host zenity`.
    pub fn with_command<I, S>(program: impl Into<String>, leading_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            leading_args: leading_args.into_iter().map(Into::into).collect(),
        }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.leading_args);
        command
    }

    /// zenity 以 0 表示確定、1 表示取消；其餘狀態視為錯誤
    fn ask(&self, args: Vec<String>) -> Result<Option<String>> {
        let output = self
            .command()
            .args(&args)
            .output()
            .map_err(|source| LauncherError::SpawnError {
                program: self.program.clone(),
                source,
            })?;

        match output.status.code() {
            Some(0) => {
                let text = String::from_utf8_lossy(&output.stdout);
                let answer = text.trim_end_matches(['\r', '\n']).to_string();
                if answer.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(answer))
                }
            }
            Some(1) => Ok(None),
            code => Err(LauncherError::DialogError {
                message: format!(
                    "{} exited with {:?}: {}",
                    self.program,
                    code,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            }),
        }
    }

    fn notify(&self, kind: &str, message: &str) {
        let result = self
            .command()
            .args(notify_args(kind, message))
            .status();
        if let Err(e) = result {
            tracing::warn!(error = %e, "zenity notification failed");
            eprintln!("{}", message);
        }
    }
}

impl Default for ZenityDialog {
    fn default() -> Self {
        Self::new()
    }
}

pub fn list_args(title: &str, labels: &SizeLabels) -> Vec<String> {
    let mut args = vec![
        "--list".to_string(),
        "--radiolist".to_string(),
        format!("--title={}", title),
        "--column=".to_string(),
        format!("--column={}", title),
    ];
    for (index, (_, label)) in labels.entries().iter().enumerate() {
        args.push(if index == 0 { "TRUE" } else { "FALSE" }.to_string());
        args.push(label.to_string());
    }
    args
}

pub fn entry_args(title: &str, text: &str) -> Vec<String> {
    vec![
        "--entry".to_string(),
        format!("--title={}", title),
        format!("--text={}", text),
    ]
}

pub fn notify_args(kind: &str, message: &str) -> Vec<String> {
    vec![format!("--{}", kind), format!("--text={}", message)]
}

impl Dialog for ZenityDialog {
    fn select_size(&self, title: &str, labels: &SizeLabels) -> Result<Option<SizeCategory>> {
        let Some(answer) = self.ask(list_args(title, labels))? else {
            return Ok(None);
        };

        match labels.category_for(&answer) {
            Some(size) => Ok(Some(size)),
            None => {
                tracing::debug!(answer = %answer, "zenity returned an unknown label");
                Ok(None)
            }
        }
    }

    fn prompt_card(&self, title: &str, text: &str) -> Result<Option<String>> {
        self.ask(entry_args(title, text))
    }

    fn info(&self, message: &str) {
        self.notify("info", message);
    }

    fn error(&self, message: &str) {
        self.notify("error", message);
    }

    fn status(&self, message: &str) {
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_args() {
        let args = list_args("Tumor size", &SizeLabels::default());
        assert_eq!(&args[..2], &["--list", "--radiolist"]);
        assert!(args.contains(&"--title=Tumor size".to_string()));
        assert_eq!(
            &args[5..],
            &["TRUE", "Small", "FALSE", "Medium", "FALSE", "Large"]
        );
    }

    #[test]
    fn test_entry_and_notify_args() {
        assert_eq!(
            entry_args("Card number", "Enter the card number (1-18)"),
            vec![
                "--entry",
                "--title=Card number",
                "--text=Enter the card number (1-18)"
            ]
        );
        assert_eq!(
            notify_args("error", "No selection made."),
            vec!["--error", "--text=No selection made."]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_program_is_spawn_error() {
        let dialog = ZenityDialog::with_program("no-such-zenity-xyz");
        let err = dialog
            .prompt_card("Card number", "Enter the card number")
            .unwrap_err();
        assert!(matches!(err, LauncherError::SpawnError { .. }));
    }

    /// 以 sh 腳本模擬 zenity：印出 `stdout` 並以 `code` 結束
    #[cfg(unix)]
    fn fake_zenity(dir: &tempfile::TempDir, stdout: &str, code: i32) -> ZenityDialog {
        let script = dir.path().join(format!("zenity-{}.sh", code));
        std::fs::write(&script, format!("printf '{}'\nexit {}\n", stdout, code)).unwrap();
        ZenityDialog::with_command("sh", [script.to_string_lossy().into_owned()])
    }

    #[cfg(unix)]
    #[test]
    fn test_selected_label_maps_to_category() {
        let dir = tempfile::TempDir::new().unwrap();
        let dialog = fake_zenity(&dir, "Medium\\n", 0);

        let size = dialog.select_size("Tumor size", &SizeLabels::default()).unwrap();
        assert_eq!(size, Some(SizeCategory::Medium));
    }

    #[cfg(unix)]
    #[test]
    fn test_unknown_label_is_no_selection() {
        let dir = tempfile::TempDir::new().unwrap();
        let dialog = fake_zenity(&dir, "Huge\\n", 0);

        let size = dialog.select_size("Tumor size", &SizeLabels::default()).unwrap();
        assert_eq!(size, None);
    }

    #[cfg(unix)]
    #[test]
    fn test_entry_text_loses_trailing_newline() {
        let dir = tempfile::TempDir::new().unwrap();
        let dialog = fake_zenity(&dir, "5\\n", 0);

        let card = dialog.prompt_card("Card number", "Enter the card number").unwrap();
        assert_eq!(card.as_deref(), Some("5"));
    }

    #[cfg(unix)]
    #[test]
    fn test_empty_answer_is_cancel() {
        let dir = tempfile::TempDir::new().unwrap();
        let dialog = fake_zenity(&dir, "", 0);

        assert_eq!(dialog.prompt_card("Card number", "Enter the card number").unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_one_is_cancel() {
        let dir = tempfile::TempDir::new().unwrap();
        let dialog = fake_zenity(&dir, "5\\n", 1);

        assert_eq!(dialog.prompt_card("Card number", "Enter the card number").unwrap(), None);
        assert_eq!(
            dialog.select_size("Tumor size", &SizeLabels::default()).unwrap(),
            None
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_other_exit_code_is_dialog_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let dialog = fake_zenity(&dir, "", 5);

        let err = dialog
            .prompt_card("Card number", "Enter the card number")
            .unwrap_err();
        assert!(matches!(err, LauncherError::DialogError { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_leading_args_precede_dialog_args() {
        let dir = tempfile::TempDir::new().unwrap();
        let script = dir.path().join("echo-args.sh");
        std::fs::write(&script, "printf '%s' \"$1\"\n").unwrap();
        let dialog = ZenityDialog::with_command("sh", [script.to_string_lossy().into_owned()]);

        let card = dialog.prompt_card("Card number", "Enter the card number").unwrap();
        assert_eq!(card.as_deref(), Some("--entry"));
    }
}
