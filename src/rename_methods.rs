use crate::ast::{ClassNode, MethodCallNode, MethodNode, Name, NodeKind, SourceUnit, StaticCallNode};
use crate::case::rename_target;
use crate::rule::{CodeSample, DocError, RewriteRule, RuleDefinition};
use crate::scope::ClassScope;
use crate::visitor::{walk_class, walk_method, walk_method_call, walk_static_call, AstVisitor};

/// Renames method declarations and their same-class call sites to
/// camelCase.
///
/// Per class: the scope table is seeded from the class's own members
/// first (original names, before any rewriting), then declarations and
/// `this`/`self` call sites are rewritten in source order. Calls on any
/// other receiver are left alone; this rule has no cross-object
/// knowledge.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodCamelCaseRule;

impl RewriteRule for MethodCamelCaseRule {
    fn name(&self) -> &'static str {
        "methods-to-camel-case"
    }

    fn node_kinds(&self) -> &'static [NodeKind] {
        &[
            NodeKind::Class,
            NodeKind::Method,
            NodeKind::StaticCall,
            NodeKind::MethodCall,
        ]
    }

    fn apply(&self, unit: &mut SourceUnit) -> usize {
        let mut edits = 0;
        for class in &mut unit.classes {
            edits += rewrite_class(class);
        }
        edits
    }

    fn definition(&self) -> Result<RuleDefinition, DocError> {
        RuleDefinition::new(
            self.name(),
            "Converts the names of methods to camelCase, including calls \
             through $this and self:: within the same class",
            vec![CodeSample::new(
                r#"public function TEST_PUBLIC_FUNCTION(string $firstParameter): string
{
    return $this->test_public_function_three($firstParameter);
}

private function test_public_function_three(string $firstParameter): string
{
    return $firstParameter;
}"#,
                r#"public function testPublicFunction(string $firstParameter): string
{
    return $this->testPublicFunctionThree($firstParameter);
}

private function testPublicFunctionThree(string $firstParameter): string
{
    return $firstParameter;
}"#,
            )],
        )
    }
}

fn rewrite_class(class: &mut ClassNode) -> usize {
    // Seed before rewriting: later call sites match by original name.
    let scope = ClassScope::collect(class);
    let mut pass = MethodRenamePass {
        scope: &scope,
        edits: 0,
    };
    walk_class(&mut pass, class);
    pass.edits
}

struct MethodRenamePass<'a> {
    scope: &'a ClassScope,
    edits: usize,
}

impl MethodRenamePass<'_> {
    /// Rewrites a call-site name when it refers to a method recorded in
    /// the class scope.
    fn rename_call(&mut self, name: &mut Name) {
        let Some(current) = name.as_plain() else {
            return;
        };
        if !self.scope.has_method(current) {
            return;
        }
        if let Some(new_name) = rename_target(current) {
            *name = Name::Plain(new_name);
            self.edits += 1;
        }
    }
}

impl AstVisitor for MethodRenamePass<'_> {
    fn visit_method(&mut self, method: &mut MethodNode) {
        if !method.is_final && !method.is_magic() {
            if let Some(new_name) = rename_target(&method.name) {
                method.name = new_name;
                self.edits += 1;
            }
        }
        walk_method(self, method);
    }

    fn visit_method_call(&mut self, call: &mut MethodCallNode) {
        if call.is_this_call() {
            self.rename_call(&mut call.method);
        }
        walk_method_call(self, call);
    }

    fn visit_static_call(&mut self, call: &mut StaticCallNode) {
        if call.class == "self" {
            self.rename_call(&mut call.method);
        }
        walk_static_call(self, call);
    }
}
