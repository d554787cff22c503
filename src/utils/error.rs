use thiserror::Error;

#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("No selection made ({prompt})")]
    Cancelled { prompt: String },

    #[error("Invalid card number '{input}': expected an integer between 1 and {max}")]
    InvalidCard { input: String, max: u32 },

    #[error("File does not exist: {filename} (in {dir})")]
    MissingTarget { filename: String, dir: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Dialog failed: {message}")]
    DialogError { message: String },

    #[error("Failed to start '{program}': {source}")]
    SpawnError {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserCancelled,
    InvalidInput,
    MissingTarget,
    Configuration,
    System,
}

impl LauncherError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LauncherError::Cancelled { .. } => ErrorCategory::UserCancelled,
            LauncherError::InvalidCard { .. } => ErrorCategory::InvalidInput,
            LauncherError::MissingTarget { .. } => ErrorCategory::MissingTarget,
            LauncherError::ConfigError { .. } | LauncherError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            LauncherError::DialogError { .. }
            | LauncherError::SpawnError { .. }
            | LauncherError::IoError(_) => ErrorCategory::System,
        }
    }

    /// 每一種失敗都以 1 結束，使用者需重新執行
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LauncherError::Cancelled { .. } => "No selection made.".to_string(),
            LauncherError::InvalidCard { max, .. } => {
                format!("Invalid card number. Enter a whole number from 1 to {}.", max)
            }
            LauncherError::MissingTarget { filename, .. } => {
                format!("The file {} does not exist.", filename)
            }
            LauncherError::ConfigError { .. } | LauncherError::InvalidConfigValueError { .. } => {
                format!("Launcher configuration is invalid: {}", self)
            }
            LauncherError::DialogError { .. } => format!("Could not show the dialog: {}", self),
            LauncherError::SpawnError { program, .. } => {
                format!("Could not start '{}'.", program)
            }
            LauncherError::IoError(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::UserCancelled => "Run the launcher again and pick an option",
            ErrorCategory::InvalidInput => "Type only digits, without sign, spaces or decimals",
            ErrorCategory::MissingTarget => {
                "Check script_dir, or run with --list to see the available scripts"
            }
            ErrorCategory::Configuration => "Fix launcher.toml or the command-line flags",
            ErrorCategory::System => match self {
                LauncherError::SpawnError { .. } => {
                    "Make sure the interpreter is installed and on PATH"
                }
                LauncherError::DialogError { .. } => {
                    "Install zenity or switch to --frontend terminal"
                }
                _ => "Check file permissions and try again",
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, LauncherError>;
