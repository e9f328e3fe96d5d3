use std::collections::HashSet;

use crate::ast::ClassNode;

/// The renamable-symbol inventory of one class-like declaration.
///
/// A scope is collected once, at class entry, before any member of that
/// class is rewritten: members and their in-class usages are visited in
/// source order, so the tables must be seeded up front for later call
/// sites to be recognized by their original (pre-rename) names. Scopes
/// are never reused across classes; a method named `foo` in class A has
/// no effect on renaming decisions inside class B.
#[derive(Debug, Clone, Default)]
pub struct ClassScope {
    /// Methods declared by this class, excluding final and magic ones.
    pub method_names: HashSet<String>,
    /// Constructor parameters that promote to object properties.
    pub promoted_property_names: HashSet<String>,
}

impl ClassScope {
    /// Scans the class's direct members. Final and magic methods are
    /// skipped, so their call sites can never match the table.
    pub fn collect(class: &ClassNode) -> Self {
        let mut method_names = HashSet::new();
        for method in &class.methods {
            if method.is_final || method.is_magic() {
                continue;
            }
            method_names.insert(method.name.clone());
        }

        let mut promoted_property_names = HashSet::new();
        if let Some(constructor) = class.constructor() {
            for param in &constructor.params {
                if !param.promotes_property {
                    continue;
                }
                if let Some(name) = param.var.name.as_plain() {
                    promoted_property_names.insert(name.to_string());
                }
            }
        }

        ClassScope {
            method_names,
            promoted_property_names,
        }
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.method_names.contains(name)
    }

    pub fn has_promoted_property(&self, name: &str) -> bool {
        self.promoted_property_names.contains(name)
    }
}
