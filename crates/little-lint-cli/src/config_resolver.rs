//! Locates and loads the configuration for a checked path.
//!
//! Lookup order, first hit wins:
//!
//! 1. `--config <FILE>`
//! 2. `little-lint.toml` or `.little-lint.toml` in the start directory or
//!    the nearest ancestor that has one
//! 3. `config.toml` in `$LITTLE_LINT_CONFIG_DIR`, else in `~/.little-lint/`
//! 4. built-in defaults

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use little_lint::Config;

/// Project-level file names, preferred in this order within a directory.
const PROJECT_FILES: [&str; 2] = ["little-lint.toml", ".little-lint.toml"];

/// File name inside the user-wide config directory.
const USER_FILE: &str = "config.toml";

/// Environment variable overriding the user-wide config directory.
const CONFIG_DIR_VAR: &str = "LITTLE_LINT_CONFIG_DIR";

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Found in the project tree; the directory is the project root.
    Project {
        /// The config file.
        file: PathBuf,
        /// Directory holding it.
        root: PathBuf,
    },
    /// User-wide file.
    User(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// The config file, unless defaults are used.
    #[must_use]
    pub fn file(&self) -> Option<&Path> {
        match self {
            Self::Explicit(file) | Self::Project { file, .. } | Self::User(file) => Some(file),
            Self::Default => None,
        }
    }

    /// The project root implied by the config location, if any.
    #[must_use]
    pub fn project_root(&self) -> Option<&Path> {
        match self {
            Self::Project { root, .. } => Some(root),
            _ => None,
        }
    }

    /// Reads the configuration this source points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(&self) -> Result<Config> {
        let Some(file) = self.file() else {
            tracing::debug!("No config file found, using defaults");
            return Ok(Config::default());
        };
        if matches!(self, Self::User(_)) {
            tracing::info!("Using user config: {}", file.display());
        }
        Config::from_file(file).with_context(|| format!("Failed to load config: {}", file.display()))
    }
}

/// Resolves the configuration for a check starting at `start`.
#[must_use]
pub fn resolve(start: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_with(start, explicit, user_config_dir())
}

/// Resolution with the user directory passed in, so tests need not touch
/// the environment.
fn resolve_with(start: &Path, explicit: Option<&Path>, user_dir: Option<PathBuf>) -> ConfigSource {
    if let Some(file) = explicit {
        return ConfigSource::Explicit(file.to_path_buf());
    }

    if let Some(source) = start.ancestors().find_map(project_config) {
        return source;
    }

    user_dir
        .map(|dir| dir.join(USER_FILE))
        .filter(|file| file.is_file())
        .map_or(ConfigSource::Default, ConfigSource::User)
}

fn project_config(dir: &Path) -> Option<ConfigSource> {
    PROJECT_FILES.iter().map(|name| dir.join(name)).find(|file| file.is_file()).map(|file| {
        tracing::debug!("Found project config: {}", file.display());
        ConfigSource::Project {
            file,
            root: dir.to_path_buf(),
        }
    })
}

/// The user-wide config directory: `$LITTLE_LINT_CONFIG_DIR`, else
/// `~/.little-lint`.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os(CONFIG_DIR_VAR)
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|home| home.join(".little-lint")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_wins_and_is_not_checked() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("little-lint.toml"), "").unwrap();

        let source = resolve_with(tmp.path(), Some(Path::new("/missing.toml")), None);
        assert_eq!(source, ConfigSource::Explicit(PathBuf::from("/missing.toml")));
    }

    #[test]
    fn plain_name_preferred_over_dotfile() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("little-lint.toml"), "").unwrap();
        fs::write(tmp.path().join(".little-lint.toml"), "").unwrap();

        let source = resolve_with(tmp.path(), None, None);
        assert_eq!(source.file(), Some(tmp.path().join("little-lint.toml").as_path()));
    }

    #[test]
    fn nearest_ancestor_config_is_used() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("pkg").join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(tmp.path().join(".little-lint.toml"), "").unwrap();

        let source = resolve_with(&nested, None, None);
        assert_eq!(source.project_root(), Some(tmp.path()));
    }

    #[test]
    fn user_config_is_the_fallback() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(user.path().join("config.toml"), "").unwrap();

        let source = resolve_with(project.path(), None, Some(user.path().to_path_buf()));
        assert_eq!(source, ConfigSource::User(user.path().join("config.toml")));
        assert!(source.project_root().is_none());
    }

    #[test]
    fn empty_user_dir_means_defaults() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();

        let source = resolve_with(project.path(), None, Some(user.path().to_path_buf()));
        assert_eq!(source, ConfigSource::Default);
        assert_eq!(source.load().unwrap().layout.max_line_length, 79);
    }

    #[test]
    fn load_reads_the_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("little-lint.toml");
        fs::write(&file, "[layout]\nmax_line_length = 100\n").unwrap();

        let config = resolve_with(tmp.path(), None, None).load().unwrap();
        assert_eq!(config.layout.max_line_length, 100);
    }

    #[test]
    fn load_reports_bad_toml() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("little-lint.toml");
        fs::write(&file, "select = [").unwrap();

        let err = ConfigSource::Explicit(file).load().unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }
}
