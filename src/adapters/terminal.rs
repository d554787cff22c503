use crate::domain::model::{SizeCategory, SizeLabels};
use crate::domain::ports::Dialog;
use crate::utils::error::Result;
use console::{style, Term};
use std::cell::RefCell;
use std::io::{BufRead, IsTerminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Interactive line editing on the controlling terminal.
    Terminal,
    /// Plain lines from stdin (pipes, redirects).
    Lines,
}

/// 依 stdin 是否為終端機決定讀取方式；stderr 是否為終端機無關
pub fn input_source(stdin_is_terminal: bool) -> InputSource {
    if stdin_is_terminal {
        InputSource::Terminal
    } else {
        InputSource::Lines
    }
}

/// Line-based prompts on stderr, answers read from stdin.
pub struct TerminalDialog {
    term: Term,
    lines: Option<RefCell<Box<dyn BufRead>>>,
}

impl TerminalDialog {
    pub fn new() -> Self {
        match input_source(std::io::stdin().is_terminal()) {
            InputSource::Terminal => Self {
                term: Term::stderr(),
                lines: None,
            },
            InputSource::Lines => Self::from_reader(std::io::stdin().lock()),
        }
    }

    /// Answers come from `reader`, one per line.
    pub fn from_reader(reader: impl BufRead + 'static) -> Self {
        Self {
            term: Term::stderr(),
            lines: Some(RefCell::new(Box::new(reader))),
        }
    }

    fn read_answer(&self) -> Result<String> {
        let Some(lines) = &self.lines else {
            return Ok(self.term.read_line()?);
        };

        // 非互動輸入 (管線) 時直接讀 stdin；EOF 視同取消
        let mut line = String::new();
        lines.borrow_mut().read_line(&mut line)?;
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(line)
    }
}

impl Default for TerminalDialog {
    fn default() -> Self {
        Self::new()
    }
}

/// Accepts the option number, the display label or the category key.
pub fn parse_choice(answer: &str, labels: &SizeLabels) -> Option<SizeCategory> {
    let answer = answer.trim();
    if answer.is_empty() {
        return None;
    }

    if let Ok(index) = answer.parse::<usize>() {
        return SizeCategory::ALL.get(index.checked_sub(1)?).copied();
    }

    labels
        .entries()
        .into_iter()
        .find(|(size, label)| {
            label.eq_ignore_ascii_case(answer) || size.key().eq_ignore_ascii_case(answer)
        })
        .map(|(size, _)| size)
}

impl Dialog for TerminalDialog {
    fn select_size(&self, title: &str, labels: &SizeLabels) -> Result<Option<SizeCategory>> {
        self.term.write_line(&style(title).bold().to_string())?;
        for (index, (_, label)) in labels.entries().iter().enumerate() {
            self.term
                .write_line(&format!("  {} {}", style(format!("{})", index + 1)).cyan(), label))?;
        }
        self.term.write_str("> ")?;

        let answer = self.read_answer()?;
        let choice = parse_choice(&answer, labels);
        if choice.is_none() && !answer.trim().is_empty() {
            tracing::debug!(answer = %answer, "unrecognized size choice");
        }
        Ok(choice)
    }

    fn prompt_card(&self, title: &str, text: &str) -> Result<Option<String>> {
        self.term.write_line(&style(title).bold().to_string())?;
        self.term.write_str(&format!("{}: ", text))?;

        let answer = self.read_answer()?;
        if answer.is_empty() {
            return Ok(None);
        }
        Ok(Some(answer))
    }

    fn info(&self, message: &str) {
        let _ = self
            .term
            .write_line(&format!("{} {}", style("[+]").green().bold(), message));
    }

    fn error(&self, message: &str) {
        let _ = self
            .term
            .write_line(&format!("{} {}", style("[-]").red().bold(), message));
    }

    fn status(&self, message: &str) {
        let _ = self.term.write_line(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        let labels = SizeLabels {
            small: "Piccolo".to_string(),
            medium: "Medio".to_string(),
            large: "Grande".to_string(),
        };

        assert_eq!(parse_choice("1", &labels), Some(SizeCategory::Small));
        assert_eq!(parse_choice(" 3 ", &labels), Some(SizeCategory::Large));
        assert_eq!(parse_choice("medio", &labels), Some(SizeCategory::Medium));
        assert_eq!(parse_choice("large", &labels), Some(SizeCategory::Large));
        assert_eq!(parse_choice("", &labels), None);
        assert_eq!(parse_choice("0", &labels), None);
        assert_eq!(parse_choice("4", &labels), None);
        assert_eq!(parse_choice("huge", &labels), None);
    }

    #[test]
    fn test_input_source_follows_stdin() {
        assert_eq!(input_source(true), InputSource::Terminal);
        assert_eq!(input_source(false), InputSource::Lines);
    }

    #[test]
    fn test_answers_read_from_lines() {
        let dialog = TerminalDialog::from_reader(std::io::Cursor::new("1\r\n5\n"));

        let size = dialog.select_size("Tumor size", &SizeLabels::default()).unwrap();
        let card = dialog.prompt_card("Card number", "Enter the card number").unwrap();

        assert_eq!(size, Some(SizeCategory::Small));
        assert_eq!(card.as_deref(), Some("5"));
    }

    #[test]
    fn test_exhausted_input_cancels() {
        let dialog = TerminalDialog::from_reader(std::io::Cursor::new("3\n"));

        assert_eq!(
            dialog.select_size("Tumor size", &SizeLabels::default()).unwrap(),
            Some(SizeCategory::Large)
        );
        assert_eq!(dialog.prompt_card("Card number", "Enter the card number").unwrap(), None);
    }
}
