use crate::ast::{
    Arg, ClassNode, Expr, MethodCallNode, MethodNode, Name, ParamNode, PropertyFetchNode,
    SourceUnit, StaticCallNode, Stmt, VariableNode,
};

/// The AstVisitor trait defines the single authoritative traversal
/// mechanism for source trees.
///
/// Rules:
/// 1. Traversal order is source order and fixed.
/// 2. Implementers override `visit_*` methods to add behavior.
/// 3. Implementers MUST call `walk_*` functions to continue traversal
///    unless pruning is intended.
/// 4. No manual recursion outside of this system.
pub trait AstVisitor {
    fn visit_unit(&mut self, unit: &mut SourceUnit) {
        walk_unit(self, unit);
    }

    fn visit_class(&mut self, class: &mut ClassNode) {
        walk_class(self, class);
    }

    fn visit_method(&mut self, method: &mut MethodNode) {
        walk_method(self, method);
    }

    fn visit_param(&mut self, param: &mut ParamNode) {
        walk_param(self, param);
    }

    fn visit_stmt(&mut self, stmt: &mut Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &mut Expr) {
        walk_expr(self, expr);
    }

    fn visit_variable(&mut self, var: &mut VariableNode) {
        walk_variable(self, var);
    }

    fn visit_property_fetch(&mut self, fetch: &mut PropertyFetchNode) {
        walk_property_fetch(self, fetch);
    }

    fn visit_method_call(&mut self, call: &mut MethodCallNode) {
        walk_method_call(self, call);
    }

    fn visit_static_call(&mut self, call: &mut StaticCallNode) {
        walk_static_call(self, call);
    }

    fn visit_arg(&mut self, arg: &mut Arg) {
        walk_arg(self, arg);
    }
}

pub fn walk_unit<V: AstVisitor + ?Sized>(visitor: &mut V, unit: &mut SourceUnit) {
    for class in &mut unit.classes {
        visitor.visit_class(class);
    }
}

pub fn walk_class<V: AstVisitor + ?Sized>(visitor: &mut V, class: &mut ClassNode) {
    for method in &mut class.methods {
        visitor.visit_method(method);
    }
}

pub fn walk_method<V: AstVisitor + ?Sized>(visitor: &mut V, method: &mut MethodNode) {
    for param in &mut method.params {
        visitor.visit_param(param);
    }
    for stmt in &mut method.body {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_param<V: AstVisitor + ?Sized>(visitor: &mut V, param: &mut ParamNode) {
    visitor.visit_variable(&mut param.var);
}

pub fn walk_stmt<V: AstVisitor + ?Sized>(visitor: &mut V, stmt: &mut Stmt) {
    match stmt {
        Stmt::Expr(s) => visitor.visit_expr(&mut s.expr),
        Stmt::Return(s) => {
            if let Some(value) = &mut s.value {
                visitor.visit_expr(value);
            }
        }
    }
}

pub fn walk_expr<V: AstVisitor + ?Sized>(visitor: &mut V, expr: &mut Expr) {
    match expr {
        Expr::Variable(v) => visitor.visit_variable(v),
        Expr::PropertyFetch(f) => visitor.visit_property_fetch(f),
        Expr::MethodCall(c) => visitor.visit_method_call(c),
        Expr::StaticCall(c) => visitor.visit_static_call(c),
        Expr::Assign(a) => {
            visitor.visit_expr(&mut a.target);
            visitor.visit_expr(&mut a.value);
        }
        Expr::Binary(b) => {
            visitor.visit_expr(&mut b.lhs);
            visitor.visit_expr(&mut b.rhs);
        }
        Expr::Literal(_) => {} // Leaf node, nothing to walk
    }
}

/// Computed names carry an expression that must stay reachable from the
/// traversal even though the name itself is never renamed.
pub fn walk_name<V: AstVisitor + ?Sized>(visitor: &mut V, name: &mut Name) {
    if let Name::Dynamic(expr) = name {
        visitor.visit_expr(expr);
    }
}

pub fn walk_variable<V: AstVisitor + ?Sized>(visitor: &mut V, var: &mut VariableNode) {
    walk_name(visitor, &mut var.name);
}

pub fn walk_property_fetch<V: AstVisitor + ?Sized>(
    visitor: &mut V,
    fetch: &mut PropertyFetchNode,
) {
    visitor.visit_expr(&mut fetch.object);
    walk_name(visitor, &mut fetch.property);
}

pub fn walk_method_call<V: AstVisitor + ?Sized>(visitor: &mut V, call: &mut MethodCallNode) {
    visitor.visit_expr(&mut call.receiver);
    walk_name(visitor, &mut call.method);
    for arg in &mut call.args {
        visitor.visit_arg(arg);
    }
}

pub fn walk_static_call<V: AstVisitor + ?Sized>(visitor: &mut V, call: &mut StaticCallNode) {
    walk_name(visitor, &mut call.method);
    for arg in &mut call.args {
        visitor.visit_arg(arg);
    }
}

pub fn walk_arg<V: AstVisitor + ?Sized>(visitor: &mut V, arg: &mut Arg) {
    visitor.visit_expr(&mut arg.value);
}
