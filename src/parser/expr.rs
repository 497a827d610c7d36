use crate::{
    ast::{
        ast::{BinaryOp, PrefixOp},
        expressions::{
            BinaryExpr, BoolExpr, CallExpr, Expr, FloatExpr, GroupingExpr, IfExpr, IndexExpr,
            IntegerExpr, MemberExpr, PrefixExpr, StringExpr, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        let token = parser.current_token();
        if token_kind == TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: String::from("an expression"),
                },
                token.span.start.clone(),
            ));
        }
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("an expression"),
                found: token.value.clone(),
            },
            token.span.start.clone(),
        ));
    };

    let mut left = nud_fn(parser)?;

    // While the next token binds tighter than bp, keep extending the left side
    loop {
        let token_kind = parser.current_token_kind();
        let token_bp = *parser
            .get_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);
        if token_bp <= bp {
            break;
        }
        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            // The token starts an expression of its own (prefix-only), so
            // this expression ends here; the caller reports the mismatch.
            break;
        };
        left = led_fn(parser, left, token_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Integer => {
            let result = parser.current_token().value.parse();
            match result {
                Ok(value) => {
                    let token = parser.advance();
                    Ok(Expr::Integer(IntegerExpr {
                        value,
                        span: token.span.clone(),
                    }))
                }
                Err(_) => {
                    let token = parser.current_token();
                    Err(Error::new(
                        ErrorImpl::NumberParseError {
                            token: token.value.clone(),
                        },
                        token.span.start.clone(),
                    ))
                }
            }
        }
        TokenKind::Float => {
            let result = parser.current_token().value.parse();
            match result {
                Ok(value) => {
                    let token = parser.advance();
                    Ok(Expr::Float(FloatExpr {
                        value,
                        span: token.span.clone(),
                    }))
                }
                Err(_) => {
                    let token = parser.current_token();
                    Err(Error::new(
                        ErrorImpl::NumberParseError {
                            token: token.value.clone(),
                        },
                        token.span.start.clone(),
                    ))
                }
            }
        }
        TokenKind::String => {
            let token = parser.advance();
            Ok(Expr::String(StringExpr {
                value: token.value.clone(),
                span: token.span.clone(),
            }))
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(Expr::Symbol(SymbolExpr {
                name: token.value.clone(),
                span: token.span.clone(),
            }))
        }
        TokenKind::True => {
            let token = parser.advance();
            Ok(Expr::Bool(BoolExpr {
                value: true,
                span: token.span.clone(),
            }))
        }
        TokenKind::False => {
            let token = parser.advance();
            Ok(Expr::Bool(BoolExpr {
                value: false,
                span: token.span.clone(),
            }))
        }
        _ => {
            let token = parser.current_token();
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from("an expression"),
                    found: token.value.clone(),
                },
                token.span.start.clone(),
            ))
        }
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let op = match BinaryOp::from_token(operator_token.kind) {
        Some(op) => op,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from("a binary operator"),
                    found: operator_token.value.clone(),
                },
                operator_token.span.start.clone(),
            ))
        }
    };

    // The right side re-enters this tier, nesting same-precedence chains to
    // the right.
    let right = parse_expr(parser, bp.rhs())?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span {
            start: left.span().start.clone(),
            end: right.span().end.clone(),
        },
        op,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let op = match PrefixOp::from_token(operator_token.kind) {
        Some(op) => op,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from("a prefix operator"),
                    found: operator_token.value.clone(),
                },
                operator_token.span.start.clone(),
            ))
        }
    };

    // The operand binds at Unary, so `-a.b` negates the member access while
    // `-a * b` multiplies the negation.
    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: Span {
            start: operator_token.span.start,
            end: operand.span().end.clone(),
        },
        op,
        operand: Box::new(operand),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.advance().clone();
    let inner = parse_expr(parser, BindingPower::Default)?;
    let close = parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Grouping(GroupingExpr {
        inner: Box::new(inner),
        span: Span {
            start: open.span.start,
            end: close.span.end,
        },
    }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();

    let mut arguments = vec![];

    // Comma-separated, a trailing comma is allowed
    while parser.current_token_kind() != TokenKind::CloseParen {
        arguments.push(parse_expr(parser, BindingPower::Default)?);
        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else {
            break;
        }
    }

    let close = parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr {
        span: Span {
            start: left.span().start.clone(),
            end: close.span.end,
        },
        callee: Box::new(left),
        arguments,
    }))
}

pub fn parse_index_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();

    let index = parse_expr(parser, BindingPower::Default)?;
    let close = parser.expect(TokenKind::CloseBracket)?;

    Ok(Expr::Index(IndexExpr {
        span: Span {
            start: left.span().start.clone(),
            end: close.span.end,
        },
        object: Box::new(left),
        index: Box::new(index),
    }))
}

pub fn parse_member_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();

    let name_token = parser.expect(TokenKind::Identifier)?;

    Ok(Expr::Member(MemberExpr {
        span: Span {
            start: left.span().start.clone(),
            end: name_token.span.end,
        },
        object: Box::new(left),
        name: name_token.value,
    }))
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_expr(parser, BindingPower::Default)?;
    let then_block = parse_block(parser)?;

    let else_block = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_block(parser)?)
    } else {
        None
    };

    let end = match &else_block {
        Some(block) => block.span.end.clone(),
        None => then_block.span.end.clone(),
    };

    Ok(Expr::If(IfExpr {
        condition: Box::new(condition),
        then_block,
        else_block,
        span: Span { start, end },
    }))
}
