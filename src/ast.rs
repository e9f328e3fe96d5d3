use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// NODE KINDS
// ═══════════════════════════════════════════════════════════════════════════════

/// The closed set of node kinds a rewrite rule can subscribe to.
/// Rules declare the kinds they act on; everything else flows past them
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Class,
    Method,
    Param,
    MethodCall,
    StaticCall,
    Variable,
    PropertyFetch,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

// ═══════════════════════════════════════════════════════════════════════════════
// COMPILATION UNIT
// ═══════════════════════════════════════════════════════════════════════════════

/// One parsed source file. The host owns parsing and printing; a unit
/// arrives as a tree and leaves as a tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceUnit {
    pub file_path: String,
    pub classes: Vec<ClassNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassKind {
    Class,
    Interface,
    Trait,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassNode {
    pub name: String,
    #[serde(default)]
    pub kind: ClassKind,
    pub methods: Vec<MethodNode>,
    #[serde(default)]
    pub location: SourceLocation,
}

impl Default for ClassKind {
    fn default() -> Self {
        ClassKind::Class
    }
}

impl ClassNode {
    /// The constructor member, if the class declares one.
    pub fn constructor(&self) -> Option<&MethodNode> {
        self.methods
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case("__construct"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Public
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodNode {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_final: bool,
    #[serde(default)]
    pub is_static: bool,
    pub params: Vec<ParamNode>,
    #[serde(default)]
    pub body: Vec<Stmt>,
    #[serde(default)]
    pub location: SourceLocation,
}

impl MethodNode {
    /// Magic lifecycle methods follow a reserved naming convention and
    /// are exempt from renaming.
    pub fn is_magic(&self) -> bool {
        crate::reserved::is_magic_method(&self.name)
    }
}

/// A declared parameter. The variable inside is a real `VariableNode` so
/// the variable rename rule sees parameter declarations through the same
/// path as any other variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamNode {
    pub var: VariableNode,
    #[serde(default)]
    pub type_hint: Option<String>,
    /// True when the parameter also declares an object property
    /// (constructor property promotion).
    #[serde(default)]
    pub promotes_property: bool,
    /// Reflow marker: render this parameter on its own line.
    #[serde(default)]
    pub own_line: bool,
}

// ═══════════════════════════════════════════════════════════════════════════════
// STATEMENTS & EXPRESSIONS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Stmt {
    Expr(ExprStmt),
    Return(ReturnStmt),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExprStmt {
    pub expr: Expr,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnStmt {
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Expr {
    Variable(VariableNode),
    PropertyFetch(PropertyFetchNode),
    MethodCall(MethodCallNode),
    StaticCall(StaticCallNode),
    Assign(AssignNode),
    Binary(BinaryNode),
    Literal(LiteralNode),
}

/// An identifier position that is either a literal token or a computed
/// expression. Computed names are opaque to renaming.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Name {
    Plain(String),
    Dynamic(Box<Expr>),
}

impl Name {
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Name::Plain(s) => Some(s.as_str()),
            Name::Dynamic(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableNode {
    pub name: Name,
    #[serde(default)]
    pub location: SourceLocation,
}

impl VariableNode {
    pub fn is_this(&self) -> bool {
        matches!(self.name.as_plain(), Some("this"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFetchNode {
    pub object: Box<Expr>,
    pub property: Name,
    #[serde(default)]
    pub location: SourceLocation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodCallNode {
    pub receiver: Box<Expr>,
    pub method: Name,
    pub args: Vec<Arg>,
    #[serde(default)]
    pub location: SourceLocation,
}

impl MethodCallNode {
    /// True for `$this->method(...)` calls, the only instance calls the
    /// method rename rule has knowledge of.
    pub fn is_this_call(&self) -> bool {
        matches!(&*self.receiver, Expr::Variable(v) if v.is_this())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticCallNode {
    /// The class reference the call is made through (`self`, a class
    /// name, ...). Only `self` is ever rewritten.
    pub class: String,
    pub method: Name,
    pub args: Vec<Arg>,
    #[serde(default)]
    pub location: SourceLocation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arg {
    pub value: Expr,
    /// Reflow marker: render this argument on its own line.
    #[serde(default)]
    pub own_line: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignNode {
    pub target: Box<Expr>,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryNode {
    pub op: String,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteralNode {
    pub value: String,
}
