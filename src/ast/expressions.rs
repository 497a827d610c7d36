use crate::Span;

use super::ast::{BinaryOp, Block, PrefixOp};

/// Symbol Expression
/// Represents an identifier in the AST. This includes function names.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub name: String,
    pub span: Span,
}

/// Integer Expression
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub value: i64,
    pub span: Span,
}

/// Float Expression
#[derive(Debug, Clone, PartialEq)]
pub struct FloatExpr {
    pub value: f64,
    pub span: Span,
}

/// String Expression
/// The value holds the decoded content, with escape sequences resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
    pub span: Span,
}

/// Bool Expression
#[derive(Debug, Clone, PartialEq)]
pub struct BoolExpr {
    pub value: bool,
    pub span: Span,
}

/// Prefix Expression
/// A `!` or `-` applied to an operand. Prefixes stack, so `!-x` nests.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub op: PrefixOp,
    pub operand: Box<Expr>,
    pub span: Span,
}

/// Binary Expression
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Member Expression
/// Property access: `object.name`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub object: Box<Expr>,
    pub name: String,
    pub span: Span,
}

/// Index Expression
/// Subscript access: `object[index]`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpr {
    pub object: Box<Expr>,
    pub index: Box<Expr>,
    pub span: Span,
}

/// Call Expression
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

/// Grouping Expression
/// A parenthesized expression. The node is kept rather than unwrapped so
/// the tree mirrors the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr {
    pub inner: Box<Expr>,
    pub span: Span,
}

/// If Expression
/// `if condition { ... }` with an optional `else { ... }`. Usable both as an
/// expression and, via an expression statement, as a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub then_block: Block,
    pub else_block: Option<Block>,
    pub span: Span,
}

/// The closed set of expression kinds. Downstream stages consume this with
/// exhaustive matches.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Symbol(SymbolExpr),
    Integer(IntegerExpr),
    Float(FloatExpr),
    String(StringExpr),
    Bool(BoolExpr),
    Prefix(PrefixExpr),
    Binary(BinaryExpr),
    Member(MemberExpr),
    Index(IndexExpr),
    Call(CallExpr),
    Grouping(GroupingExpr),
    If(IfExpr),
}

impl Expr {
    pub fn span(&self) -> &Span {
        match self {
            Expr::Symbol(expr) => &expr.span,
            Expr::Integer(expr) => &expr.span,
            Expr::Float(expr) => &expr.span,
            Expr::String(expr) => &expr.span,
            Expr::Bool(expr) => &expr.span,
            Expr::Prefix(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Member(expr) => &expr.span,
            Expr::Index(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::Grouping(expr) => &expr.span,
            Expr::If(expr) => &expr.span,
        }
    }
}
