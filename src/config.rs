use std::path::{Path, PathBuf};

/// The files checked when nothing else is configured, in report order.
pub const DEFAULT_FILES: [&str; 3] = ["agent_repos.json", "plugin_repos.json", "skill_repos.json"];

/// Which files to check and where to find them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Directory the file names are resolved against.
    pub base_dir: PathBuf,
    /// File names as they appear in the report.
    pub files: Vec<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::new(".", DEFAULT_FILES)
    }
}

impl CheckConfig {
    pub fn new<I, S>(base_dir: impl Into<PathBuf>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base_dir: base_dir.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Default file list, resolved against `base_dir`.
    pub fn in_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self::new(base_dir, DEFAULT_FILES)
    }

    pub fn path_of(&self, file_name: &str) -> PathBuf {
        if self.base_dir == Path::new(".") {
            PathBuf::from(file_name)
        } else {
            self.base_dir.join(file_name)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_files() {
        let config = CheckConfig::default();
        assert_eq!(
            config.files,
            ["agent_repos.json", "plugin_repos.json", "skill_repos.json"]
        );
        assert_eq!(config.path_of("agent_repos.json"), Path::new("agent_repos.json"));
    }

    #[test]
    fn test_in_dir() {
        let config = CheckConfig::in_dir("/etc/repos");
        assert_eq!(
            config.path_of("skill_repos.json"),
            Path::new("/etc/repos/skill_repos.json")
        );
    }
}
