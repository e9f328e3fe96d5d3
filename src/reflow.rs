use crate::ast::{MethodCallNode, MethodNode, NodeKind, SourceUnit};
use crate::rule::{CodeSample, DocError, RewriteRule, RuleDefinition};
use crate::visitor::{walk_method, walk_method_call, walk_unit, AstVisitor};

/// Maximum number of parameters or arguments rendered inline.
const INLINE_LIMIT: usize = 3;

/// Marks every parameter of a method declaration, and every argument of
/// a method call, to be rendered on its own line once the sequence
/// exceeds [`INLINE_LIMIT`]. Pure structural pass, no symbol tracking;
/// the host's printer honors the markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParamsArgsToNewLinesRule;

impl RewriteRule for ParamsArgsToNewLinesRule {
    fn name(&self) -> &'static str {
        "params-and-args-to-new-lines"
    }

    fn node_kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::Method, NodeKind::MethodCall]
    }

    fn apply(&self, unit: &mut SourceUnit) -> usize {
        let mut pass = ReflowPass { edits: 0 };
        walk_unit(&mut pass, unit);
        pass.edits
    }

    fn definition(&self) -> Result<RuleDefinition, DocError> {
        RuleDefinition::new(
            self.name(),
            "Puts each parameter of a method declaration or method call on \
             a separate line if there are more than 3 parameters",
            vec![CodeSample::new(
                r#"public function testPublicFunction(string $first, string $second, string $third, string $fourth): string
{
    return $this->combine($first, $second, $third, $fourth);
}"#,
                r#"public function testPublicFunction(
    string $first,
    string $second,
    string $third,
    string $fourth): string
{
    return $this->combine(
        $first,
        $second,
        $third,
        $fourth
    );
}"#,
            )],
        )
    }
}

struct ReflowPass {
    edits: usize,
}

impl AstVisitor for ReflowPass {
    fn visit_method(&mut self, method: &mut MethodNode) {
        if method.params.len() > INLINE_LIMIT {
            for param in &mut method.params {
                if !param.own_line {
                    param.own_line = true;
                    self.edits += 1;
                }
            }
        }
        walk_method(self, method);
    }

    fn visit_method_call(&mut self, call: &mut MethodCallNode) {
        if call.args.len() > INLINE_LIMIT {
            for arg in &mut call.args {
                if !arg.own_line {
                    arg.own_line = true;
                    self.edits += 1;
                }
            }
        }
        walk_method_call(self, call);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        Arg, ClassKind, ClassNode, Expr, LiteralNode, Name, ParamNode, SourceLocation, SourceUnit,
        VariableNode,
    };

    fn param(name: &str) -> ParamNode {
        ParamNode {
            var: VariableNode {
                name: Name::Plain(name.to_string()),
                location: SourceLocation::default(),
            },
            type_hint: None,
            promotes_property: false,
            own_line: false,
        }
    }

    fn arg() -> Arg {
        Arg {
            value: Expr::Literal(LiteralNode {
                value: "x".to_string(),
            }),
            own_line: false,
        }
    }

    fn unit_with_method(params: Vec<ParamNode>, args: Vec<Arg>) -> SourceUnit {
        let call = crate::ast::MethodCallNode {
            receiver: Box::new(Expr::Variable(VariableNode {
                name: Name::Plain("this".to_string()),
                location: SourceLocation::default(),
            })),
            method: Name::Plain("helper".to_string()),
            args,
            location: SourceLocation::default(),
        };
        SourceUnit {
            file_path: "test.php".to_string(),
            classes: vec![ClassNode {
                name: "Sample".to_string(),
                kind: ClassKind::Class,
                methods: vec![crate::ast::MethodNode {
                    name: "run".to_string(),
                    visibility: crate::ast::Visibility::Public,
                    is_final: false,
                    is_static: false,
                    params,
                    body: vec![crate::ast::Stmt::Expr(crate::ast::ExprStmt {
                        expr: Expr::MethodCall(call),
                    })],
                    location: SourceLocation::default(),
                }],
                location: SourceLocation::default(),
            }],
        }
    }

    #[test]
    fn test_three_params_stay_inline() {
        let mut unit = unit_with_method(vec![param("a"), param("b"), param("c")], vec![]);
        let edits = ParamsArgsToNewLinesRule.apply(&mut unit);
        assert_eq!(edits, 0);
        assert!(unit.classes[0].methods[0].params.iter().all(|p| !p.own_line));
    }

    #[test]
    fn test_four_params_each_get_their_own_line() {
        let mut unit =
            unit_with_method(vec![param("a"), param("b"), param("c"), param("d")], vec![]);
        let edits = ParamsArgsToNewLinesRule.apply(&mut unit);
        assert_eq!(edits, 4);
        assert!(unit.classes[0].methods[0].params.iter().all(|p| p.own_line));
    }

    #[test]
    fn test_call_arguments_past_threshold_are_marked() {
        let mut unit = unit_with_method(vec![], vec![arg(), arg(), arg(), arg(), arg()]);
        let edits = ParamsArgsToNewLinesRule.apply(&mut unit);
        assert_eq!(edits, 5);
        let stmt = &unit.classes[0].methods[0].body[0];
        if let crate::ast::Stmt::Expr(s) = stmt {
            if let Expr::MethodCall(call) = &s.expr {
                assert!(call.args.iter().all(|a| a.own_line));
                return;
            }
        }
        panic!("expected a method call statement");
    }

    #[test]
    fn test_marking_is_stable_across_runs() {
        let mut unit =
            unit_with_method(vec![param("a"), param("b"), param("c"), param("d")], vec![]);
        assert_eq!(ParamsArgsToNewLinesRule.apply(&mut unit), 4);
        assert_eq!(ParamsArgsToNewLinesRule.apply(&mut unit), 0);
    }
}
