use crate::domain::model::{ExitPolicy, Frontend, LauncherConfig};
use crate::utils::error::{LauncherError, Result};
use crate::utils::validation::{
    validate_distinct, validate_non_empty_string, validate_path, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const DEFAULT_CONFIG_FILE: &str = "launcher.toml";
pub const MAX_CARD_LIMIT: u32 = 9999;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub launcher: Option<LauncherSection>,
    pub labels: Option<LabelsSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherSection {
    pub max_card: Option<u32>,
    pub pre_launch_notice: Option<bool>,
    pub script_dir: Option<PathBuf>,
    pub interpreter: Option<String>,
    pub exit_code: Option<ExitPolicy>,
    pub frontend: Option<Frontend>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelsSection {
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| LauncherError::ConfigError {
            field: path.as_ref().display().to_string(),
            message: format!("cannot read config file: {}", e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 明確指定的檔案必須存在；預設檔案不存在時使用內建值
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LauncherError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SCRIPT_DIR})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    /// 將檔案中的設定疊加到既有配置上
    pub fn apply_to(&self, mut config: LauncherConfig) -> LauncherConfig {
        if let Some(launcher) = &self.launcher {
            if let Some(max_card) = launcher.max_card {
                config.max_card = max_card;
            }
            if let Some(notice) = launcher.pre_launch_notice {
                config.pre_launch_notice = notice;
            }
            if let Some(dir) = &launcher.script_dir {
                config.script_dir = dir.clone();
            }
            if let Some(interpreter) = &launcher.interpreter {
                config.interpreter = interpreter.clone();
            }
            if let Some(policy) = launcher.exit_code {
                config.exit_policy = policy;
            }
            if let Some(frontend) = launcher.frontend {
                config.frontend = frontend;
            }
        }

        if let Some(labels) = &self.labels {
            if let Some(small) = &labels.small {
                config.labels.small = small.clone();
            }
            if let Some(medium) = &labels.medium {
                config.labels.medium = medium.clone();
            }
            if let Some(large) = &labels.large {
                config.labels.large = large.clone();
            }
        }

        config
    }
}

impl Validate for LauncherConfig {
    fn validate(&self) -> Result<()> {
        validate_range("launcher.max_card", self.max_card, 1, MAX_CARD_LIMIT)?;
        validate_non_empty_string("launcher.interpreter", &self.interpreter)?;
        validate_path(
            "launcher.script_dir",
            &self.script_dir.as_os_str().to_string_lossy(),
        )?;

        for (size, label) in self.labels.entries() {
            validate_non_empty_string(&format!("labels.{}", size.key()), label)?;
        }
        let labels = self.labels.entries().map(|(_, label)| label);
        validate_distinct("labels", &labels)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[launcher]
max_card = 19
pre_launch_notice = true
script_dir = "./Simulations"
interpreter = "python3.12"
exit_code = "launcher"
frontend = "zenity"

[labels]
small = "Piccolo"
medium = "Medio"
large = "Grande"
"#;

        let config = TomlConfig::from_toml_str(toml_content)
            .unwrap()
            .apply_to(LauncherConfig::default());

        assert_eq!(config.max_card, 19);
        assert!(config.pre_launch_notice);
        assert_eq!(config.script_dir, PathBuf::from("./Simulations"));
        assert_eq!(config.interpreter, "python3.12");
        assert_eq!(config.exit_policy, ExitPolicy::Launcher);
        assert_eq!(config.frontend, Frontend::Zenity);
        assert_eq!(config.labels.medium, "Medio");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_keeps_defaults() {
        let config = TomlConfig::from_toml_str("")
            .unwrap()
            .apply_to(LauncherConfig::default());
        assert_eq!(config, LauncherConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TGI_LAUNCHER_TEST_DIR", "/opt/simulations");

        let toml_content = r#"
[launcher]
script_dir = "${TGI_LAUNCHER_TEST_DIR}"
interpreter = "${TGI_LAUNCHER_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let launcher = config.launcher.unwrap();
        assert_eq!(launcher.script_dir, Some(PathBuf::from("/opt/simulations")));
        assert_eq!(
            launcher.interpreter.as_deref(),
            Some("${TGI_LAUNCHER_UNSET_VAR}")
        );

        std::env::remove_var("TGI_LAUNCHER_TEST_DIR");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let toml_content = r#"
[launcher]
max_cards = 19
"#;
        assert!(TomlConfig::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_config_validation() {
        let zero = LauncherConfig {
            max_card: 0,
            ..LauncherConfig::default()
        };
        assert!(zero.validate().is_err());

        let mut duplicate = LauncherConfig::default();
        duplicate.labels.large = "Small".to_string();
        assert!(duplicate.validate().is_err());

        let blank = LauncherConfig {
            interpreter: " ".to_string(),
            ..LauncherConfig::default()
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[launcher]\nmax_card = 19\n")
            .unwrap();

        let config = TomlConfig::load(Some(temp_file.path())).unwrap();
        assert_eq!(config.launcher.unwrap().max_card, Some(19));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = TomlConfig::load(Some(Path::new("/no/such/launcher.toml"))).unwrap_err();
        assert!(matches!(err, LauncherError::ConfigError { .. }));
    }
}
