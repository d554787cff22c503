use crate::domain::model::{ChildStatus, SizeCategory, SizeLabels, TargetFilename};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Prompts and notifications shown to the user.
pub trait Dialog {
    /// `Ok(None)` means the user cancelled.
    fn select_size(&self, title: &str, labels: &SizeLabels) -> Result<Option<SizeCategory>>;

    /// `Ok(None)` means the user cancelled. The text is returned untrimmed.
    fn prompt_card(&self, title: &str, text: &str) -> Result<Option<String>>;

    fn info(&self, message: &str);

    fn error(&self, message: &str);

    /// Plain message without dialog chrome.
    fn status(&self, message: &str);
}

pub trait ScriptLocator {
    /// Exact, case-sensitive match of a regular file.
    fn exists(&self, filename: &TargetFilename) -> bool;

    fn path_of(&self, filename: &TargetFilename) -> PathBuf;

    fn list(&self) -> Result<Vec<String>>;

    fn root(&self) -> &Path;
}

#[async_trait]
pub trait ScriptRunner: Send + Sync {
    /// Runs the script to completion with inherited stdio.
    async fn run(&self, script: &Path) -> Result<ChildStatus>;
}

impl<D: Dialog + ?Sized> Dialog for Box<D> {
    fn select_size(&self, title: &str, labels: &SizeLabels) -> Result<Option<SizeCategory>> {
        (**self).select_size(title, labels)
    }

    fn prompt_card(&self, title: &str, text: &str) -> Result<Option<String>> {
        (**self).prompt_card(title, text)
    }

    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }

    fn status(&self, message: &str) {
        (**self).status(message)
    }
}
