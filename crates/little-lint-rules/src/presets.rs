//! The built-in rule set and its configured registry.

use std::sync::Arc;

use little_lint_core::{Config, ImportClassifier, Registry, RuleInfo};
use tracing::debug;

use crate::{
    BlankLineAtEnd, BreakAfterBinaryOperator, CommentSpacing, ImportOrder, ImportsAtTop,
    MaxLineLength, ModuleResolver, NoRelativeImports, OneImportPerLine, RulesError,
    StyleRuleBox, TabIndentation, TopLevelSpacing,
};

/// Returns every built-in rule, configured from `config`.
///
/// Order is file rules, line rules, then node rules; the registry keeps
/// it, so results within each group come out in this order.
///
/// # Errors
///
/// Returns an error if a rule pattern fails to compile.
pub fn all_rules(
    config: &Config,
    classifier: Arc<dyn ImportClassifier>,
) -> Result<Vec<StyleRuleBox>, RulesError> {
    Ok(vec![
        Box::new(MaxLineLength::new().max(config.layout.max_line_length)),
        Box::new(TabIndentation::new()),
        Box::new(BlankLineAtEnd::new()),
        Box::new(BreakAfterBinaryOperator::new()?),
        Box::new(CommentSpacing::new()),
        Box::new(ImportOrder::new(classifier)),
        Box::new(OneImportPerLine::new()),
        Box::new(ImportsAtTop::new()),
        Box::new(NoRelativeImports::new()),
        Box::new(TopLevelSpacing::new().blank_lines(config.layout.top_level_blank_lines)),
    ])
}

/// Builds a registry of the rules `config` enables, classifying imports
/// with `classifier`.
///
/// # Errors
///
/// Returns an error if a rule fails to build or register.
pub fn registry_with(
    config: &Config,
    classifier: Arc<dyn ImportClassifier>,
) -> Result<Registry, RulesError> {
    let mut registry = Registry::new();
    for rule in all_rules(config, classifier)? {
        let info = rule.info();
        if !config.is_rule_enabled(info.name) {
            debug!("Rule disabled by configuration: {}", info.name);
            continue;
        }
        rule.register(&mut registry)?;
    }
    debug!("Built registry with {} rules", registry.len());
    Ok(registry)
}

/// Builds a registry of the rules `config` enables, using a
/// [`ModuleResolver`] from its `[imports]` section.
///
/// # Errors
///
/// Returns an error if a rule fails to build or register.
pub fn default_registry(config: &Config) -> Result<Registry, RulesError> {
    let resolver = ModuleResolver::from_config(&config.imports);
    registry_with(config, Arc::new(resolver))
}

/// Returns name and description of every built-in rule.
///
/// # Errors
///
/// Returns an error if a rule fails to build.
pub fn rule_infos() -> Result<Vec<RuleInfo>, RulesError> {
    let rules = all_rules(&Config::default(), Arc::new(ModuleResolver::new()))?;
    Ok(rules.iter().map(|rule| rule.info()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use little_lint_core::RuleConfig;

    #[test]
    fn default_registry_has_every_rule() {
        let registry = default_registry(&Config::default()).unwrap();
        assert_eq!(registry.len(), 10);
        assert_eq!(registry.file_rules().len(), 3);
        assert_eq!(registry.line_rules().len(), 2);
        assert_eq!(registry.node_rules().len(), 5);
    }

    #[test]
    fn rule_names_are_unique() {
        let infos = rule_infos().unwrap();
        assert_eq!(infos.len(), 10);
        let mut names: Vec<_> = infos.iter().map(|i| i.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), infos.len());
    }

    #[test]
    fn disabled_rule_is_not_registered() {
        let mut config = Config::default();
        config.rules.insert(
            "import-order".to_string(),
            RuleConfig {
                enabled: Some(false),
            },
        );
        let registry = default_registry(&config).unwrap();
        assert_eq!(registry.len(), 9);
        assert!(registry.rule_infos().all(|i| i.name != "import-order"));
    }
}
