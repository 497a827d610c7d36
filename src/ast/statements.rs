use crate::Span;

use super::{
    ast::{AssignOp, Block, Parameter},
    expressions::Expr,
};

/// Function Declaration
/// `fn name(parameters) { body }`.
#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub body: Block,
    pub span: Span,
}

/// Return Statement
/// `return;` or `return expression;`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

/// While Statement
/// `while condition { body }` - no parentheses around the condition.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Block,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStmt {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStmt {
    pub span: Span,
}

/// Let Statement
/// `let name = value;` or `let mut name = value;`.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub parameter: Parameter,
    pub value: Expr,
    pub span: Span,
}

/// Assignment Statement
/// `target op value;` where op is one of `=` `+=` `-=` `*=` `/=`. The target
/// is any expression; whether it is a valid lvalue is a later stage's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub target: Expr,
    pub op: AssignOp,
    pub value: Expr,
    pub span: Span,
}

/// Expression Statement
/// A bare expression in statement position.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

/// The closed set of statement kinds. Downstream stages consume this with
/// exhaustive matches.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    FnDecl(FnDeclStmt),
    Return(ReturnStmt),
    While(WhileStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
    Let(LetStmt),
    Assignment(AssignmentStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn span(&self) -> &Span {
        match self {
            Stmt::FnDecl(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
            Stmt::Break(stmt) => &stmt.span,
            Stmt::Continue(stmt) => &stmt.span,
            Stmt::Let(stmt) => &stmt.span,
            Stmt::Assignment(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
        }
    }
}
