use crate::domain::model::{SizeCategory, SizeLabels};
use crate::domain::ports::Dialog;
use crate::utils::error::Result;

/// Answers given up front skip their prompt; everything else goes to `inner`.
pub struct PresetDialog<D: Dialog> {
    size: Option<SizeCategory>,
    card: Option<String>,
    inner: D,
}

impl<D: Dialog> PresetDialog<D> {
    pub fn new(size: Option<SizeCategory>, card: Option<String>, inner: D) -> Self {
        Self { size, card, inner }
    }
}

impl<D: Dialog> Dialog for PresetDialog<D> {
    fn select_size(&self, title: &str, labels: &SizeLabels) -> Result<Option<SizeCategory>> {
        match self.size {
            Some(size) => Ok(Some(size)),
            None => self.inner.select_size(title, labels),
        }
    }

    fn prompt_card(&self, title: &str, text: &str) -> Result<Option<String>> {
        match &self.card {
            Some(card) => Ok(Some(card.clone())),
            None => self.inner.prompt_card(title, text),
        }
    }

    fn info(&self, message: &str) {
        self.inner.info(message);
    }

    fn error(&self, message: &str) {
        self.inner.error(message);
    }

    fn status(&self, message: &str) {
        self.inner.status(message);
    }
}
