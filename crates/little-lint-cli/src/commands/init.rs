//! Init command implementation.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

const CONFIG_FILE: &str = "little-lint.toml";

const DEFAULT_CONFIG: &str = r#"# little-lint configuration

# Only report these violation kinds (names like "max-line-length" or codes
# like "LL001"). Empty means all.
select = []

# Never report these violation kinds.
ignore = []

[files]
# Glob patterns to exclude from checking
exclude = [
    "**/build/**",
    "**/migrations/**",
]

# Respect .gitignore files
respect_gitignore = true

[layout]
max_line_length = 79
top_level_blank_lines = 2

[imports]
# Top-level packages always treated as local or third party
known_first_party = []
known_third_party = []

# Directories holding local packages (default: the project directory)
# source_roots = ["src"]

# Directories holding installed packages ($VIRTUAL_ENV is searched too)
# site_packages = [".venv/lib/python3.12/site-packages"]

# Each rule can be disabled by name; see `little-lint list-rules`

# [rules.no-relative-imports]
# enabled = false
"#;

/// Runs the init command in the current directory.
pub fn run(force: bool) -> Result<()> {
    let path = write_default(Path::new("."), force)?;

    println!("Created {}", path.display());
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure rules");
    println!("  2. Run: little-lint check");

    Ok(())
}

/// Writes the default configuration into `dir`.
fn write_default(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(&path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use little_lint::Config;
    use tempfile::TempDir;

    #[test]
    fn default_config_parses_to_defaults() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.layout.max_line_length, 79);
        assert!(config.files.respect_gitignore);
        assert!(config.scan_filter().unwrap().is_pass_through());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "# mine\n").unwrap();

        assert!(write_default(tmp.path(), false).is_err());
        let kept = std::fs::read_to_string(tmp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(kept, "# mine\n");

        write_default(tmp.path(), true).unwrap();
        let written = std::fs::read_to_string(tmp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(written, DEFAULT_CONFIG);
    }
}
