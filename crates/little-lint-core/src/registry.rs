//! Rule registry holding file, line and node rules.

use std::collections::{BTreeMap, HashMap, HashSet};

use thiserror::Error;
use tracing::debug;

use crate::rule::{FileCheck, LineCheck, NodeCheck, RuleInfo, RuleOutput};
use crate::syntax::NodeCategory;
use crate::types::Violation;

/// Option name that makes a node rule receive a comment- and decorator-free tree.
pub const IGNORE_COMMENTS_AND_DECORATORS: &str = "ignore_comments_and_decorators";

/// Option names accepted by [`Registry::register_node_rule`].
pub const KNOWN_OPTIONS: &[&str] = &[IGNORE_COMMENTS_AND_DECORATORS];

/// Errors raised while registering rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Option name outside the allow-list.
    #[error("rule '{rule}': unknown option '{option}' (known: {known})")]
    UnknownOption {
        /// Rule being registered.
        rule: String,
        /// Offending option.
        option: String,
        /// Comma-separated allow-list.
        known: String,
    },

    /// Option value of the wrong type.
    #[error("rule '{rule}': option '{option}' must be a {expected}")]
    InvalidOptionValue {
        /// Rule being registered.
        rule: String,
        /// Offending option.
        option: String,
        /// Expected value type.
        expected: &'static str,
    },

    /// Node rule registered without any category.
    #[error("rule '{rule}': node rules need at least one category")]
    NoCategories {
        /// Rule being registered.
        rule: String,
    },

    /// Rule name already taken in any collection.
    #[error("rule '{rule}' is already registered")]
    DuplicateRule {
        /// Rule being registered.
        rule: String,
    },
}

/// Options attached to a node rule at registration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOptions {
    values: BTreeMap<String, toml::Value>,
}

impl RuleOptions {
    /// Creates an empty option mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Returns an option value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&toml::Value> {
        self.values.get(name)
    }

    fn validate(&self, rule: &str) -> Result<NodeRuleFlags, RegistryError> {
        let mut flags = NodeRuleFlags::default();
        for (name, value) in &self.values {
            match name.as_str() {
                IGNORE_COMMENTS_AND_DECORATORS => {
                    flags.ignore_comments_and_decorators =
                        value
                            .as_bool()
                            .ok_or_else(|| RegistryError::InvalidOptionValue {
                                rule: rule.to_string(),
                                option: name.clone(),
                                expected: "boolean",
                            })?;
                }
                _ => {
                    return Err(RegistryError::UnknownOption {
                        rule: rule.to_string(),
                        option: name.clone(),
                        known: KNOWN_OPTIONS.join(", "),
                    })
                }
            }
        }
        Ok(flags)
    }
}

/// Validated node rule options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeRuleFlags {
    /// Invoke the rule on a re-parse of the source without comment and decorator lines.
    pub ignore_comments_and_decorators: bool,
}

/// A registered whole-file rule.
pub struct FileRuleRecord {
    /// Rule metadata.
    pub info: RuleInfo,
    check: FileCheck,
}

impl FileRuleRecord {
    /// Runs the rule on the full text.
    pub fn check(&self, source: &str) -> RuleOutput {
        (self.check)(source)
    }
}

/// A registered per-line rule.
pub struct LineRuleRecord {
    /// Rule metadata.
    pub info: RuleInfo,
    check: LineCheck,
}

impl LineRuleRecord {
    /// Runs the rule on one line.
    pub fn check(&self, line: &str, number: usize) -> Option<Violation> {
        (self.check)(line, number)
    }
}

/// A registered node rule.
pub struct NodeRuleRecord {
    /// Rule metadata.
    pub info: RuleInfo,
    /// Categories the rule was registered for, deduplicated in given order.
    pub categories: Vec<NodeCategory>,
    /// Options as passed at registration.
    pub options: RuleOptions,
    /// Validated options.
    pub flags: NodeRuleFlags,
    /// The checker.
    pub check: NodeCheck,
}

/// Holds the three rule collections.
///
/// Build it once at startup, then share it read-only with the scanner.
/// Rules fire in registration order within each collection.
#[derive(Default)]
pub struct Registry {
    file_rules: Vec<FileRuleRecord>,
    line_rules: Vec<LineRuleRecord>,
    node_rules: Vec<NodeRuleRecord>,
    by_category: HashMap<NodeCategory, Vec<usize>>,
    names: HashSet<&'static str>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn claim_name(&mut self, info: RuleInfo) -> Result<(), RegistryError> {
        if self.names.insert(info.name) {
            Ok(())
        } else {
            Err(RegistryError::DuplicateRule {
                rule: info.name.to_string(),
            })
        }
    }

    /// Registers a rule that receives the whole source text.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule name is already registered.
    pub fn register_file_rule<F, O>(&mut self, info: RuleInfo, check: F) -> Result<(), RegistryError>
    where
        F: Fn(&str) -> O + Send + Sync + 'static,
        O: Into<RuleOutput>,
    {
        self.claim_name(info)?;
        debug!("Registered file rule: {}", info.name);
        self.file_rules.push(FileRuleRecord {
            info,
            check: Box::new(move |source: &str| check(source).into()),
        });
        Ok(())
    }

    /// Registers a rule that receives each line with its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule name is already registered.
    pub fn register_line_rule<F>(&mut self, info: RuleInfo, check: F) -> Result<(), RegistryError>
    where
        F: Fn(&str, usize) -> Option<Violation> + Send + Sync + 'static,
    {
        self.claim_name(info)?;
        debug!("Registered line rule: {}", info.name);
        self.line_rules.push(LineRuleRecord {
            info,
            check: Box::new(check),
        });
        Ok(())
    }

    /// Registers a rule for nodes of the given categories.
    ///
    /// The rule also fires for nodes whose category declares one of
    /// `categories` as a supertype.
    ///
    /// # Errors
    ///
    /// Fails if `categories` is empty, an option is unknown or has the wrong
    /// type, or the rule name is already registered. Nothing is registered on
    /// failure.
    pub fn register_node_rule(
        &mut self,
        info: RuleInfo,
        categories: &[NodeCategory],
        check: NodeCheck,
        options: RuleOptions,
    ) -> Result<(), RegistryError> {
        if categories.is_empty() {
            return Err(RegistryError::NoCategories {
                rule: info.name.to_string(),
            });
        }
        let flags = options.validate(info.name)?;
        self.claim_name(info)?;

        let mut unique = Vec::with_capacity(categories.len());
        for &category in categories {
            if !unique.contains(&category) {
                unique.push(category);
            }
        }

        let index = self.node_rules.len();
        for &category in &unique {
            self.by_category.entry(category).or_default().push(index);
        }
        debug!(
            "Registered node rule: {} for {:?} ({:?})",
            info.name, unique, flags
        );
        self.node_rules.push(NodeRuleRecord {
            info,
            categories: unique,
            options,
            flags,
            check,
        });
        Ok(())
    }

    /// Whole-file rules in registration order.
    #[must_use]
    pub fn file_rules(&self) -> &[FileRuleRecord] {
        &self.file_rules
    }

    /// Line rules in registration order.
    #[must_use]
    pub fn line_rules(&self) -> &[LineRuleRecord] {
        &self.line_rules
    }

    /// Node rules in registration order.
    #[must_use]
    pub fn node_rules(&self) -> &[NodeRuleRecord] {
        &self.node_rules
    }

    /// Metadata of every registered rule: file, line, then node rules.
    pub fn rule_infos(&self) -> impl Iterator<Item = RuleInfo> + '_ {
        self.file_rules
            .iter()
            .map(|r| r.info)
            .chain(self.line_rules.iter().map(|r| r.info))
            .chain(self.node_rules.iter().map(|r| r.info))
    }

    /// Total number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.file_rules.len() + self.line_rules.len() + self.node_rules.len()
    }

    /// Returns true if no rule is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Node rules applicable to `category`: those registered for it or for
    /// one of its supertypes, each once, in registration order.
    #[must_use]
    pub fn resolve(&self, category: NodeCategory) -> Vec<&NodeRuleRecord> {
        let mut indices: Vec<usize> = self
            .by_category
            .get(&category)
            .into_iter()
            .chain(
                category
                    .supertypes()
                    .iter()
                    .filter_map(|parent| self.by_category.get(parent)),
            )
            .flatten()
            .copied()
            .collect();
        indices.sort_unstable();
        indices.dedup();
        indices.into_iter().map(|i| &self.node_rules[i]).collect()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("file_rules", &self.file_rules.len())
            .field("line_rules", &self.line_rules.len())
            .field("node_rules", &self.node_rules.len())
            .finish_non_exhaustive()
    }
}
