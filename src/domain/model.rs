use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Tumor-size category. Each variant owns exactly one filename prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 3] = [SizeCategory::Small, SizeCategory::Medium, SizeCategory::Large];

    pub fn prefix(self) -> &'static str {
        match self {
            SizeCategory::Small => "1",
            SizeCategory::Medium => "10",
            SizeCategory::Large => "100",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.prefix() == prefix)
    }

    pub fn key(self) -> &'static str {
        match self {
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SizeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown size category '{}'", s))
    }
}

/// A card number already checked against `1..=max_card`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CardNumber(u32);

impl CardNumber {
    pub(crate) fn new_unchecked(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `{prefix}_C{card}.py`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TargetFilename(String);

impl TargetFilename {
    pub fn new(size: SizeCategory, card: CardNumber) -> Self {
        Self(format!("{}_C{}.py", size.prefix(), card.get()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display text shown for each size category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeLabels {
    pub small: String,
    pub medium: String,
    pub large: String,
}

impl Default for SizeLabels {
    fn default() -> Self {
        Self {
            small: "Small".to_string(),
            medium: "Medium".to_string(),
            large: "Large".to_string(),
        }
    }
}

impl SizeLabels {
    pub fn label(&self, size: SizeCategory) -> &str {
        match size {
            SizeCategory::Small => &self.small,
            SizeCategory::Medium => &self.medium,
            SizeCategory::Large => &self.large,
        }
    }

    pub fn entries(&self) -> [(SizeCategory, &str); 3] {
        SizeCategory::ALL.map(|size| (size, self.label(size)))
    }

    /// 由顯示文字反查類別；未知的文字回傳 None
    pub fn category_for(&self, label: &str) -> Option<SizeCategory> {
        SizeCategory::ALL
            .into_iter()
            .find(|size| self.label(*size) == label)
    }
}

/// What the launcher's own exit code reports after a completed dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExitPolicy {
    /// Exit with the script's own exit code.
    #[default]
    Child,
    /// Exit 0 whenever the script was started, whatever it returned.
    Launcher,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Frontend {
    #[default]
    Terminal,
    Zenity,
}

/// Resolved launcher settings. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub max_card: u32,
    pub labels: SizeLabels,
    pub pre_launch_notice: bool,
    pub script_dir: PathBuf,
    pub interpreter: String,
    pub exit_policy: ExitPolicy,
    pub frontend: Frontend,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            max_card: 18,
            labels: SizeLabels::default(),
            pre_launch_notice: false,
            script_dir: PathBuf::from("."),
            interpreter: "python3".to_string(),
            exit_policy: ExitPolicy::default(),
            frontend: Frontend::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    pub size: SizeCategory,
    pub prefix: &'static str,
    pub card: CardNumber,
    pub filename: TargetFilename,
    pub path: PathBuf,
}

/// How the script process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildStatus {
    pub code: Option<i32>,
    pub signal: Option<i32>,
}

impl ChildStatus {
    pub fn exited(code: i32) -> Self {
        Self {
            code: Some(code),
            signal: None,
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn exit_code(&self, policy: ExitPolicy) -> i32 {
        match policy {
            ExitPolicy::Launcher => 0,
            ExitPolicy::Child => match (self.code, self.signal) {
                (Some(code), _) => code,
                (None, Some(signal)) => 128 + signal,
                (None, None) => 1,
            },
        }
    }
}

impl From<std::process::ExitStatus> for ChildStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = std::os::unix::process::ExitStatusExt::signal(&status);
        #[cfg(not(unix))]
        let signal = None;

        Self {
            code: status.code(),
            signal,
        }
    }
}
