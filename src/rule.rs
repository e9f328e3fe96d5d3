use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ast::{NodeKind, SourceUnit};

/// A single structural rewrite pass over one compilation unit.
///
/// Rules are stateless values: all per-class state lives in a
/// [`ClassScope`](crate::ClassScope) allocated inside `apply` at class entry
/// and dropped at class exit. This makes one rule value safe to share
/// across units and across threads.
pub trait RewriteRule: Send + Sync {
    /// Stable rule identifier used in generated documentation.
    fn name(&self) -> &'static str;

    /// The node kinds this rule acts on. Informational for hosts that
    /// schedule rules per node kind; `apply` dispatches internally.
    fn node_kinds(&self) -> &'static [NodeKind];

    /// Rewrites the unit in place and returns the number of edits.
    /// Zero is the unchanged signal: a node that fails a precondition
    /// is a no-op, never an error.
    fn apply(&self, unit: &mut SourceUnit) -> usize;

    /// Human-readable description plus before/after samples.
    fn definition(&self) -> Result<RuleDefinition, DocError>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// RULE METADATA
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSample {
    pub before: String,
    pub after: String,
}

impl CodeSample {
    pub fn new(before: &str, after: &str) -> Self {
        CodeSample {
            before: before.to_string(),
            after: after.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDefinition {
    pub description: String,
    pub samples: Vec<CodeSample>,
}

impl RuleDefinition {
    /// Validates the metadata up front. Malformed documentation fails
    /// loudly; it is the one error this crate refuses to swallow.
    pub fn new(rule: &str, description: &str, samples: Vec<CodeSample>) -> Result<Self, DocError> {
        if description.trim().is_empty() {
            return Err(DocError::EmptyDescription {
                rule: rule.to_string(),
            });
        }
        if samples.is_empty() {
            return Err(DocError::MissingSamples {
                rule: rule.to_string(),
            });
        }
        for sample in &samples {
            if sample.before.trim().is_empty() || sample.after.trim().is_empty() {
                return Err(DocError::EmptySample {
                    rule: rule.to_string(),
                });
            }
        }
        Ok(RuleDefinition {
            description: description.to_string(),
            samples,
        })
    }
}

/// Raised when a rule's documentation metadata is malformed. This is a
/// tooling concern, not a transformation concern, and callers must let
/// it propagate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocError {
    EmptyDescription { rule: String },
    MissingSamples { rule: String },
    EmptySample { rule: String },
}

impl fmt::Display for DocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocError::EmptyDescription { rule } => {
                write!(f, "rule '{}' has an empty description", rule)
            }
            DocError::MissingSamples { rule } => {
                write!(f, "rule '{}' declares no code samples", rule)
            }
            DocError::EmptySample { rule } => {
                write!(f, "rule '{}' has a code sample with an empty side", rule)
            }
        }
    }
}

impl std::error::Error for DocError {}

/// Renders the documentation of every registered rule as markdown.
/// A malformed definition aborts the whole render.
pub fn generate_rule_docs(rules: &[Box<dyn RewriteRule>]) -> Result<String, DocError> {
    let mut out = String::new();
    for rule in rules {
        let definition = rule.definition()?;
        out.push_str(&format!("## {}\n\n{}\n", rule.name(), definition.description));
        for sample in &definition.samples {
            out.push_str("\n```\n");
            out.push_str(sample.before.trim_end());
            out.push_str("\n```\n\n↓\n\n```\n");
            out.push_str(sample.after.trim_end());
            out.push_str("\n```\n");
        }
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_rejects_empty_description() {
        let err = RuleDefinition::new("sample-rule", "  ", vec![CodeSample::new("a", "b")]);
        assert_eq!(
            err,
            Err(DocError::EmptyDescription {
                rule: "sample-rule".to_string()
            })
        );
    }

    #[test]
    fn test_definition_rejects_missing_samples() {
        let err = RuleDefinition::new("sample-rule", "does things", vec![]);
        assert_eq!(
            err,
            Err(DocError::MissingSamples {
                rule: "sample-rule".to_string()
            })
        );
    }

    #[test]
    fn test_definition_rejects_empty_sample_side() {
        let err = RuleDefinition::new(
            "sample-rule",
            "does things",
            vec![CodeSample::new("before", "")],
        );
        assert_eq!(
            err,
            Err(DocError::EmptySample {
                rule: "sample-rule".to_string()
            })
        );
    }
}
