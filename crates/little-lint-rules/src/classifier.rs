//! Default import classifier: standard library table plus search paths.

use std::path::{Path, PathBuf};

use little_lint_core::{ImportClassifier, ImportTarget, ImportsConfig, OriginKind};
use tracing::{debug, warn};

use crate::stdlib::is_stdlib_module;

/// Classifies imports by looking at names and directories only; nothing
/// is imported or executed.
///
/// Resolution order: `__future__`, relative imports, the standard library,
/// the configured first/third-party lists, installed packages, then local
/// source roots.
#[derive(Debug, Clone, Default)]
pub struct ModuleResolver {
    known_first_party: Vec<String>,
    known_third_party: Vec<String>,
    site_packages: Vec<PathBuf>,
    source_roots: Vec<PathBuf>,
}

impl ModuleResolver {
    /// Creates a resolver that knows only the standard library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver from the `[imports]` configuration section.
    ///
    /// When `VIRTUAL_ENV` is set, its `site-packages` directories are
    /// searched after the configured ones.
    #[must_use]
    pub fn from_config(config: &ImportsConfig) -> Self {
        let mut resolver = Self {
            known_first_party: config.known_first_party.clone(),
            known_third_party: config.known_third_party.clone(),
            site_packages: config.site_packages.clone(),
            source_roots: config.source_roots.clone(),
        };
        if let Some(venv) = std::env::var_os("VIRTUAL_ENV") {
            resolver.site_packages.extend(venv_site_packages(Path::new(&venv)));
        }
        resolver
    }

    /// Adds a directory searched for installed packages.
    #[must_use]
    pub fn site_packages(mut self, dir: impl Into<PathBuf>) -> Self {
        self.site_packages.push(dir.into());
        self
    }

    /// Adds a directory searched for local modules.
    #[must_use]
    pub fn source_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_roots.push(dir.into());
        self
    }

    /// Treats a top-level package as local.
    #[must_use]
    pub fn first_party(mut self, name: impl Into<String>) -> Self {
        self.known_first_party.push(name.into());
        self
    }

    /// Treats a top-level package as third party.
    #[must_use]
    pub fn third_party(mut self, name: impl Into<String>) -> Self {
        self.known_third_party.push(name.into());
        self
    }
}

impl ImportClassifier for ModuleResolver {
    fn classify(&self, target: &ImportTarget) -> OriginKind {
        let name = target.top_level();
        let origin = if target.module == "__future__" {
            OriginKind::Future
        } else if target.is_relative() {
            OriginKind::Local
        } else if is_stdlib_module(name) {
            OriginKind::Standard
        } else if self.known_first_party.iter().any(|n| n == name) {
            OriginKind::Local
        } else if self.known_third_party.iter().any(|n| n == name)
            || self.site_packages.iter().any(|dir| module_exists(dir, name))
        {
            OriginKind::ThirdParty
        } else if self.source_roots.iter().any(|dir| module_exists(dir, name)) {
            OriginKind::Local
        } else {
            OriginKind::NotFound
        };
        debug!("Classified import {} as {}", target.module, origin);
        origin
    }
}

/// A module is a package directory or a `.py` file, or a compiled
/// extension, directly under `dir`.
fn module_exists(dir: &Path, name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    if dir.join(name).is_dir() || dir.join(format!("{name}.py")).is_file() {
        return true;
    }
    let pattern = dir.join(format!("{name}.*.so"));
    glob::glob(&pattern.to_string_lossy()).is_ok_and(|mut matches| matches.next().is_some())
}

/// `site-packages` directories of a virtual environment.
fn venv_site_packages(venv: &Path) -> Vec<PathBuf> {
    let pattern = venv.join("lib").join("python3*").join("site-packages");
    match glob::glob(&pattern.to_string_lossy()) {
        Ok(paths) => paths.filter_map(Result::ok).collect(),
        Err(e) => {
            warn!("Skipping virtualenv search path {}: {}", venv.display(), e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn classify(resolver: &ModuleResolver, module: &str) -> OriginKind {
        resolver.classify(&ImportTarget::parse(module))
    }

    #[test]
    fn future_stdlib_and_relative() {
        let resolver = ModuleResolver::new();
        assert_eq!(classify(&resolver, "__future__"), OriginKind::Future);
        assert_eq!(classify(&resolver, "os.path"), OriginKind::Standard);
        assert_eq!(classify(&resolver, ".sibling"), OriginKind::Local);
        assert_eq!(classify(&resolver, "."), OriginKind::Local);
        assert_eq!(classify(&resolver, "requests"), OriginKind::NotFound);
    }

    #[test]
    fn known_lists_take_precedence_over_search() {
        let resolver = ModuleResolver::new().first_party("app").third_party("numpy");
        assert_eq!(classify(&resolver, "app.models"), OriginKind::Local);
        assert_eq!(classify(&resolver, "numpy"), OriginKind::ThirdParty);
    }

    #[test]
    fn searches_site_packages_then_source_roots() {
        let site = tempfile::tempdir().unwrap();
        let src = tempfile::tempdir().unwrap();
        fs::create_dir(site.path().join("requests")).unwrap();
        fs::write(site.path().join("six.py"), "").unwrap();
        fs::write(site.path().join("_speedups.cpython-311-x86_64-linux-gnu.so"), "").unwrap();
        fs::create_dir(src.path().join("mypkg")).unwrap();
        fs::write(src.path().join("main.py"), "").unwrap();

        let resolver = ModuleResolver::new()
            .site_packages(site.path())
            .source_root(src.path());
        assert_eq!(classify(&resolver, "requests.adapters"), OriginKind::ThirdParty);
        assert_eq!(classify(&resolver, "six"), OriginKind::ThirdParty);
        assert_eq!(classify(&resolver, "_speedups"), OriginKind::ThirdParty);
        assert_eq!(classify(&resolver, "mypkg.sibling"), OriginKind::Local);
        assert_eq!(classify(&resolver, "main"), OriginKind::Local);
        assert_eq!(classify(&resolver, "missing"), OriginKind::NotFound);
    }

    #[test]
    fn from_config_copies_lists() {
        let config = ImportsConfig {
            known_first_party: vec!["app".into()],
            ..ImportsConfig::default()
        };
        let resolver = ModuleResolver::from_config(&config);
        assert_eq!(classify(&resolver, "app"), OriginKind::Local);
    }
}
