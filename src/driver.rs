use rayon::prelude::*;
use std::fmt;

use crate::ast::SourceUnit;
use crate::reflow::ParamsArgsToNewLinesRule;
use crate::rename_methods::MethodCamelCaseRule;
use crate::rename_vars::PropertyVarCamelCaseRule;
use crate::rule::RewriteRule;

/// The stock rule set: method renaming, variable/property renaming with
/// the built-in native-variable classifier, and parameter reflow.
pub fn default_rules() -> Vec<Box<dyn RewriteRule>> {
    vec![
        Box::new(MethodCamelCaseRule),
        Box::new(PropertyVarCamelCaseRule::default()),
        Box::new(ParamsArgsToNewLinesRule),
    ]
}

/// Runs every rule over one unit, in order. Returns the total edit
/// count; zero means the unit is already normalized.
pub fn rewrite_unit(unit: &mut SourceUnit, rules: &[Box<dyn RewriteRule>]) -> usize {
    rules.iter().map(|rule| rule.apply(unit)).sum()
}

/// Rewrites units in parallel, one unit per task. Safe because rules
/// are stateless and every class scope is allocated inside `apply`:
/// nothing leaks between units.
pub fn rewrite_units(units: &mut [SourceUnit], rules: &[Box<dyn RewriteRule>]) -> usize {
    units
        .par_iter_mut()
        .map(|unit| rewrite_unit(unit, rules))
        .sum()
}

// ═══════════════════════════════════════════════════════════════════════════════
// HOST BOUNDARY
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug)]
pub enum RewriteError {
    Parse(serde_json::Error),
    Serialize(serde_json::Error),
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteError::Parse(e) => write!(f, "unit parse error: {}", e),
            RewriteError::Serialize(e) => write!(f, "serialize error: {}", e),
        }
    }
}

impl std::error::Error for RewriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RewriteError::Parse(e) | RewriteError::Serialize(e) => Some(e),
        }
    }
}

/// JSON boundary for hosts that hold the tree as text: deserializes a
/// `SourceUnit`, runs the stock rules, and returns the rewritten unit
/// together with the edit count as `{"unit": ..., "edits": n}`.
pub fn rewrite_unit_json(unit_json: &str) -> Result<String, RewriteError> {
    let mut unit: SourceUnit = serde_json::from_str(unit_json).map_err(RewriteError::Parse)?;
    let edits = rewrite_unit(&mut unit, &default_rules());
    let res = serde_json::json!({ "unit": unit, "edits": edits });
    serde_json::to_string(&res).map_err(RewriteError::Serialize)
}
