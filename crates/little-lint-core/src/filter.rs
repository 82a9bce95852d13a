//! Post-scan filtering by violation kind.

use std::collections::BTreeSet;

use crate::types::{Violation, ViolationKind};

/// A set of violation kinds; built from a single kind or any collection of kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindSet(BTreeSet<ViolationKind>);

impl KindSet {
    /// Returns true if `kind` is in the set.
    #[must_use]
    pub fn contains(&self, kind: ViolationKind) -> bool {
        self.0.contains(&kind)
    }

    /// Returns true if the set holds no kinds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the kinds in code order.
    pub fn iter(&self) -> impl Iterator<Item = ViolationKind> + '_ {
        self.0.iter().copied()
    }
}

impl From<ViolationKind> for KindSet {
    fn from(kind: ViolationKind) -> Self {
        Self(BTreeSet::from([kind]))
    }
}

impl<const N: usize> From<[ViolationKind; N]> for KindSet {
    fn from(kinds: [ViolationKind; N]) -> Self {
        Self(BTreeSet::from(kinds))
    }
}

impl From<&[ViolationKind]> for KindSet {
    fn from(kinds: &[ViolationKind]) -> Self {
        kinds.iter().copied().collect()
    }
}

impl From<Vec<ViolationKind>> for KindSet {
    fn from(kinds: Vec<ViolationKind>) -> Self {
        kinds.into_iter().collect()
    }
}

impl FromIterator<ViolationKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = ViolationKind>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Keep-only and drop selections applied to a scan result.
///
/// `include_only` is applied first, then `exclude`. Filtering never touches
/// the result it reads; it produces a new list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanFilter {
    include_only: Option<KindSet>,
    exclude: Option<KindSet>,
}

impl ScanFilter {
    /// A filter that keeps everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only violations of the given kinds.
    #[must_use]
    pub fn include_only(mut self, kinds: impl Into<KindSet>) -> Self {
        self.include_only = Some(kinds.into());
        self
    }

    /// Drops violations of the given kinds.
    #[must_use]
    pub fn exclude(mut self, kinds: impl Into<KindSet>) -> Self {
        self.exclude = Some(kinds.into());
        self
    }

    /// Returns true if the filter keeps everything.
    #[must_use]
    pub fn is_pass_through(&self) -> bool {
        self.include_only.is_none() && self.exclude.as_ref().map_or(true, KindSet::is_empty)
    }

    /// Returns true if a violation of `kind` passes the filter.
    #[must_use]
    pub fn allows(&self, kind: ViolationKind) -> bool {
        let included = self
            .include_only
            .as_ref()
            .map_or(true, |kinds| kinds.contains(kind));
        let excluded = self
            .exclude
            .as_ref()
            .is_some_and(|kinds| kinds.contains(kind));
        included && !excluded
    }

    /// Returns the violations that pass, in their original order.
    #[must_use]
    pub fn apply(&self, violations: &[Violation]) -> Vec<Violation> {
        violations
            .iter()
            .filter(|v| self.allows(v.kind))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ViolationKind::{MaxLineLength, ModuleNotFound, RelativeImport, TabIndentation};

    fn sample() -> Vec<Violation> {
        vec![
            Violation::new(MaxLineLength, 1),
            Violation::new(ModuleNotFound, 2),
            Violation::new(TabIndentation, 3),
            Violation::new(MaxLineLength, 4),
        ]
    }

    #[test]
    fn pass_through_keeps_everything() {
        let filter = ScanFilter::new();
        assert!(filter.is_pass_through());
        assert_eq!(filter.apply(&sample()), sample());
    }

    #[test]
    fn include_only_single_kind() {
        let kept = ScanFilter::new().include_only(MaxLineLength).apply(&sample());
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|v| v.kind == MaxLineLength));
    }

    #[test]
    fn exclude_set_of_kinds() {
        let kept = ScanFilter::new()
            .exclude([MaxLineLength, TabIndentation])
            .apply(&sample());
        assert_eq!(kept, vec![Violation::new(ModuleNotFound, 2)]);
    }

    #[test]
    fn include_then_exclude_is_intersection_then_difference() {
        let kept = ScanFilter::new()
            .include_only([MaxLineLength, ModuleNotFound])
            .exclude(ModuleNotFound)
            .apply(&sample());
        assert_eq!(
            kept,
            vec![Violation::new(MaxLineLength, 1), Violation::new(MaxLineLength, 4)]
        );
    }

    #[test]
    fn including_and_excluding_same_kind_yields_nothing() {
        let kept = ScanFilter::new()
            .include_only(MaxLineLength)
            .exclude(MaxLineLength)
            .apply(&sample());
        assert!(kept.is_empty());
    }

    #[test]
    fn filtering_leaves_input_untouched() {
        let violations = sample();
        let _ = ScanFilter::new().include_only(RelativeImport).apply(&violations);
        assert_eq!(violations, sample());
    }
}
