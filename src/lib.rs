//! # recase — camelCase rename and reflow passes for class-based source trees
//!
//! ## Rewrite Invariants
//!
//! 1. **Scope Seeding**: a class's symbol tables are populated at class
//!    entry, before any member is rewritten. Declarations and their
//!    in-class usages are visited in source order, so call sites are
//!    matched by the *original* (pre-rename) method name.
//!
//! 2. **Per-Class Isolation**: scope state never outlives its class and
//!    never lives on a rule value. A method named `foo` in class A has no
//!    effect on renaming decisions inside class B, including when units
//!    are rewritten in parallel.
//!
//! 3. **Independent Tables**: method names and promoted-property names
//!    are tracked separately; a rename in one table never affects the
//!    other, even when the texts collide.
//!
//! 4. **Silent No-Op**: every unmet precondition on a transformation
//!    path (wrong node shape, computed name, ineligible declaration,
//!    already-canonical text) resolves to "no change", never an error.
//!    The one declared failure mode is malformed rule documentation
//!    ([`DocError`]), which propagates.
//!
//! 5. **Stability**: the case normalizer is idempotent and rules report
//!    an edit count, so a second run over normalized output performs
//!    zero edits.

mod ast;
mod case;
mod driver;
mod reflow;
mod rename_methods;
mod rename_vars;
mod reserved;
mod rule;
mod scope;
mod visitor;

pub use ast::*;
pub use case::{is_plain_identifier, rename_target, to_camel_case};
pub use driver::{default_rules, rewrite_unit, rewrite_unit_json, rewrite_units, RewriteError};
pub use reflow::ParamsArgsToNewLinesRule;
pub use rename_methods::MethodCamelCaseRule;
pub use rename_vars::PropertyVarCamelCaseRule;
pub use reserved::{
    is_magic_method, BuiltinVariables, NativeVariableClassifier, MAGIC_METHODS, NATIVE_VARIABLES,
};
pub use rule::{generate_rule_docs, CodeSample, DocError, RewriteRule, RuleDefinition};
pub use scope::ClassScope;
pub use visitor::*;
