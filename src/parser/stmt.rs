use crate::{
    ast::{
        ast::{AssignOp, Block, Parameter},
        expressions::Expr,
        statements::{
            AssignmentStmt, BreakStmt, ContinueStmt, ExpressionStmt, FnDeclStmt, LetStmt,
            ReturnStmt, Stmt, WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(stmt_fn) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return stmt_fn(parser);
    }

    parse_assignment_or_expr_stmt(parser)
}

/// Parses the statement fallback form: an expression, optionally followed by
/// an assignment operator and a right-hand side.
///
/// The assignment target is whatever expression was parsed; restricting it
/// to lvalues is left to later stages.
pub fn parse_assignment_or_expr_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expr = parse_expr(parser, BindingPower::Default)?;

    if let Some(op) = AssignOp::from_token(parser.current_token_kind()) {
        parser.advance();
        let value = parse_expr(parser, BindingPower::Default)?;
        let semicolon = parser.expect(TokenKind::Semicolon)?;

        return Ok(Stmt::Assignment(AssignmentStmt {
            span: Span {
                start: expr.span().start.clone(),
                end: semicolon.span.end,
            },
            target: expr,
            op,
            value,
        }));
    }

    // A bare if in statement position already ends in a block, so no
    // semicolon is demanded; one is consumed if present.
    if let Expr::If(_) = expr {
        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance();
        }
        return Ok(Stmt::Expression(ExpressionStmt {
            span: expr.span().clone(),
            expression: expr,
        }));
    }

    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(ExpressionStmt {
        span: Span {
            start: expr.span().start.clone(),
            end: semicolon.span.end,
        },
        expression: expr,
    }))
}

/// Parses a `{ ... }` block of statements.
pub fn parse_block(parser: &mut Parser) -> Result<Block, Error> {
    let open = parser.expect(TokenKind::OpenCurly)?;

    let mut body = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if parser.current_token_kind() == TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: TokenKind::CloseCurly.to_string(),
                },
                parser.current_token().span.start.clone(),
            ));
        }
        body.push(parse_stmt(parser)?);
    }

    let close = parser.expect(TokenKind::CloseCurly)?;

    Ok(Block {
        body,
        span: Span {
            start: open.span.start,
            end: close.span.end,
        },
    })
}

/// Parses a parameter: an identifier optionally prefixed by `mut`.
pub fn parse_parameter(parser: &mut Parser) -> Result<Parameter, Error> {
    let mutable = parser.current_token_kind() == TokenKind::Mut;
    let mut_start = if mutable {
        Some(parser.advance().span.start.clone())
    } else {
        None
    };

    let name_token = parser.expect(TokenKind::Identifier)?;
    let start = mut_start.unwrap_or_else(|| name_token.span.start.clone());

    Ok(Parameter {
        name: name_token.value,
        mutable,
        span: Span {
            start,
            end: name_token.span.end,
        },
    })
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let name = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = vec![];
    while parser.current_token_kind() != TokenKind::CloseParen {
        parameters.push(parse_parameter(parser)?);
        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    Ok(Stmt::FnDecl(FnDeclStmt {
        span: Span {
            start,
            end: body.span.end.clone(),
        },
        name,
        parameters,
        body,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: Span {
            start,
            end: semicolon.span.end,
        },
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block(parser)?;

    Ok(Stmt::While(WhileStmt {
        span: Span {
            start,
            end: body.span.end.clone(),
        },
        condition,
        body,
    }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();
    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Break(BreakStmt {
        span: Span {
            start,
            end: semicolon.span.end,
        },
    }))
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();
    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Continue(ContinueStmt {
        span: Span {
            start,
            end: semicolon.span.end,
        },
    }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let parameter = parse_parameter(parser)?;

    parser.expect(TokenKind::Assignment)?;

    let value = parse_expr(parser, BindingPower::Default)?;

    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Let(LetStmt {
        span: Span {
            start,
            end: semicolon.span.end,
        },
        parameter,
        value,
    }))
}
