//! Import origin classification interface.

use std::fmt;

/// Where an imported module comes from.
///
/// The declaration order is the required import order; `NotFound` sorts
/// lowest so that an unresolved import never triggers an ordering complaint
/// on the import after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OriginKind {
    /// Module could not be located.
    NotFound,
    /// `from __future__ import ...`
    Future,
    /// Standard library.
    Standard,
    /// Installed third-party package.
    ThirdParty,
    /// Local application or library module.
    Local,
}

impl fmt::Display for OriginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::Future => write!(f, "future"),
            Self::Standard => write!(f, "standard library"),
            Self::ThirdParty => write!(f, "third party"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// The module an import statement refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportTarget {
    /// Dotted module path without leading dots (may be empty for `from . import x`).
    pub module: String,
    /// Number of leading dots of a relative import.
    pub level: usize,
}

impl ImportTarget {
    /// Absolute import of `module`.
    #[must_use]
    pub fn absolute(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            level: 0,
        }
    }

    /// Parses a module reference as written after `from`, e.g. `..pkg.mod`.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let module = text.trim_start_matches('.');
        Self {
            module: module.trim().to_string(),
            level: text.len() - module.len(),
        }
    }

    /// Returns true for imports with leading dots.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.level > 0
    }

    /// First component of the dotted path (e.g., `os` for `os.path`).
    #[must_use]
    pub fn top_level(&self) -> &str {
        self.module.split('.').next().unwrap_or_default()
    }
}

/// Decides the [`OriginKind`] of imports.
pub trait ImportClassifier: Send + Sync {
    /// Classifies one import target.
    fn classify(&self, target: &ImportTarget) -> OriginKind;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_order_matches_grouping() {
        assert!(OriginKind::NotFound < OriginKind::Future);
        assert!(OriginKind::Future < OriginKind::Standard);
        assert!(OriginKind::Standard < OriginKind::ThirdParty);
        assert!(OriginKind::ThirdParty < OriginKind::Local);
    }

    #[test]
    fn parses_relative_targets() {
        let target = ImportTarget::parse("..pkg.sibling");
        assert_eq!(target.level, 2);
        assert_eq!(target.module, "pkg.sibling");
        assert!(target.is_relative());
        assert_eq!(target.top_level(), "pkg");

        let bare = ImportTarget::parse(".");
        assert_eq!(bare.level, 1);
        assert!(bare.module.is_empty());
    }

    #[test]
    fn absolute_target_has_no_level() {
        let target = ImportTarget::absolute("os.path");
        assert!(!target.is_relative());
        assert_eq!(target.top_level(), "os");
    }
}
