use crate::domain::model::TargetFilename;
use crate::domain::ports::ScriptLocator;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalScriptDir {
    base_path: PathBuf,
}

impl LocalScriptDir {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl ScriptLocator for LocalScriptDir {
    fn exists(&self, filename: &TargetFilename) -> bool {
        // 逐一比對目錄項目，在不分大小寫的檔案系統上也維持精確比對
        let Ok(entries) = fs::read_dir(&self.base_path) else {
            return false;
        };

        entries.flatten().any(|entry| {
            entry.file_name().to_str() == Some(filename.as_str())
                && entry.path().is_file()
        })
    }

    fn path_of(&self, filename: &TargetFilename) -> PathBuf {
        self.base_path.join(filename.as_str())
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() && !entry.path().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn root(&self) -> &Path {
        &self.base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::plan::target_filename;
    use crate::domain::model::{LauncherConfig, SizeCategory};
    use tempfile::TempDir;

    fn name(size: SizeCategory, card: &str) -> TargetFilename {
        target_filename(&LauncherConfig::default(), size, card).unwrap().1
    }

    #[test]
    fn test_exists_requires_exact_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("1_C5.py"), "print('hi')").unwrap();
        fs::write(dir.path().join("10_c2.py"), "").unwrap();
        fs::create_dir(dir.path().join("100_C3.py")).unwrap();

        let scripts = LocalScriptDir::new(dir.path());
        assert!(scripts.exists(&name(SizeCategory::Small, "5")));
        assert!(!scripts.exists(&name(SizeCategory::Medium, "2")));
        assert!(!scripts.exists(&name(SizeCategory::Large, "3")));
        assert!(!scripts.exists(&name(SizeCategory::Small, "6")));
    }

    #[test]
    fn test_missing_directory() {
        let scripts = LocalScriptDir::new("/definitely/not/here");
        assert!(!scripts.exists(&name(SizeCategory::Small, "1")));
        assert!(scripts.list().is_err());
    }

    #[test]
    fn test_list_only_files_sorted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("10_C2.py"), "").unwrap();
        fs::write(dir.path().join("1_C5.py"), "").unwrap();
        fs::create_dir(dir.path().join("Simulations")).unwrap();

        let scripts = LocalScriptDir::new(dir.path());
        assert_eq!(scripts.list().unwrap(), vec!["10_C2.py", "1_C5.py"]);
        assert_eq!(
            scripts.path_of(&name(SizeCategory::Small, "5")),
            dir.path().join("1_C5.py")
        );
    }
}
