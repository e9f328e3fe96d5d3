use crate::ast::{ClassNode, Name, NodeKind, PropertyFetchNode, SourceUnit, VariableNode};
use crate::case::rename_target;
use crate::reserved::{BuiltinVariables, NativeVariableClassifier};
use crate::rule::{CodeSample, DocError, RewriteRule, RuleDefinition};
use crate::visitor::{walk_class, walk_property_fetch, walk_variable, AstVisitor};

/// Renames variables (parameter declarations included) and property
/// fetches to camelCase.
///
/// The constructor's promoted-property inventory is available through
/// [`ClassScope::collect`](crate::ClassScope::collect), but rewriting is
/// deliberately not gated on it: any plain, non-native name whose
/// camelCase form differs is rewritten. Computed names are opaque and
/// left alone.
pub struct PropertyVarCamelCaseRule {
    classifier: Box<dyn NativeVariableClassifier + Send + Sync>,
}

impl PropertyVarCamelCaseRule {
    pub fn new(classifier: impl NativeVariableClassifier + Send + Sync + 'static) -> Self {
        PropertyVarCamelCaseRule {
            classifier: Box::new(classifier),
        }
    }
}

impl Default for PropertyVarCamelCaseRule {
    fn default() -> Self {
        PropertyVarCamelCaseRule::new(BuiltinVariables)
    }
}

impl RewriteRule for PropertyVarCamelCaseRule {
    fn name(&self) -> &'static str {
        "vars-and-properties-to-camel-case"
    }

    fn node_kinds(&self) -> &'static [NodeKind] {
        &[
            NodeKind::Class,
            NodeKind::Param,
            NodeKind::Variable,
            NodeKind::PropertyFetch,
        ]
    }

    fn apply(&self, unit: &mut SourceUnit) -> usize {
        let mut edits = 0;
        for class in &mut unit.classes {
            edits += self.rewrite_class(class);
        }
        edits
    }

    fn definition(&self) -> Result<RuleDefinition, DocError> {
        RuleDefinition::new(
            self.name(),
            "Converts the names of variables and object properties to camelCase",
            vec![CodeSample::new(
                r#"public function __construct(
    private string $FIRST_PROPERTY,
    private string $second_property,
) {
}

public function store(string $FIRST_PARAMETER, string $second_parameter): void
{
    $this->FIRST_PROPERTY = $FIRST_PARAMETER;
    $this->second_property = $second_parameter;
}"#,
                r#"public function __construct(
    private string $firstProperty,
    private string $secondProperty,
) {
}

public function store(string $firstParameter, string $secondParameter): void
{
    $this->firstProperty = $firstParameter;
    $this->secondProperty = $secondParameter;
}"#,
            )],
        )
    }
}

impl PropertyVarCamelCaseRule {
    fn rewrite_class(&self, class: &mut ClassNode) -> usize {
        let mut pass = VarRenamePass {
            classifier: self.classifier.as_ref(),
            edits: 0,
        };
        walk_class(&mut pass, class);
        pass.edits
    }
}

struct VarRenamePass<'a> {
    classifier: &'a (dyn NativeVariableClassifier + Send + Sync),
    edits: usize,
}

impl AstVisitor for VarRenamePass<'_> {
    fn visit_variable(&mut self, var: &mut VariableNode) {
        if let Some(current) = var.name.as_plain() {
            if !self.classifier.is_native_variable(current) {
                if let Some(new_name) = rename_target(current) {
                    var.name = Name::Plain(new_name);
                    self.edits += 1;
                }
            }
        }
        walk_variable(self, var);
    }

    fn visit_property_fetch(&mut self, fetch: &mut PropertyFetchNode) {
        if let Some(current) = fetch.property.as_plain() {
            if let Some(new_name) = rename_target(current) {
                fetch.property = Name::Plain(new_name);
                self.edits += 1;
            }
        }
        walk_property_fetch(self, fetch);
    }
}
