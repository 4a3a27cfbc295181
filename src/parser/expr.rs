use log::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BinaryExpr, BinaryOperator, BooleanExpr, CallExpr, FloatExpr, FunctionExpr, IfExpr,
            IntegerExpr, PrefixExpr, PrefixOperator, StringExpr, SymbolExpr,
        },
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binding_power, led_handler, nud_handler, BindingPower},
    parser::Parser,
    stmt::parse_block,
};

/// Precedence climbing over `current`/`lookahead`.
///
/// Parses the prefix production for `current`, then keeps folding infix
/// productions while the lookahead binds tighter than `bp`. Equal binding
/// power stops the loop, which makes operator chains left-associative.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    if !parser.enter_nesting() {
        return None;
    }
    let expr = parse_nested_expr(parser, bp);
    parser.leave_nesting();

    expr
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    let token_kind = parser.current_token_kind();
    trace!("parse_expr({:?}) at {}", bp, parser.current_token());

    let Some(nud) = nud_handler(token_kind) else {
        missing_prefix_error(parser);
        return None;
    };

    let mut left = nud(parser);

    while parser.lookahead_kind() != TokenKind::Semicolon
        && binding_power(parser.lookahead_kind()) > bp
    {
        let Some(led) = led_handler(parser.lookahead_kind()) else {
            return left;
        };

        parser.advance();
        left = led(parser, left);
    }

    left
}

fn missing_prefix_error(parser: &mut Parser) {
    let token = parser.current_token();
    let position = token.position();

    let error = if token.kind == TokenKind::Illegal {
        ErrorImpl::UnrecognisedToken {
            token: token.value.clone(),
        }
    } else {
        ErrorImpl::MissingPrefixParser { kind: token.kind }
    };

    parser.error(error, position);
}

fn number_parse_error(parser: &mut Parser, target: &'static str) {
    let token = parser.current_token();
    let position = token.position();
    let error = ErrorImpl::NumberParseError {
        token: token.value.clone(),
        target,
    };

    parser.error(error, position);
}

pub fn parse_symbol_expr(parser: &mut Parser) -> Option<Expr> {
    Some(Expr::Symbol(SymbolExpr {
        value: parser.current_token().value.clone(),
    }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Option<Expr> {
    match parser.current_token().value.parse::<i64>() {
        Ok(value) => Some(Expr::Integer(IntegerExpr { value })),
        Err(_) => {
            number_parse_error(parser, "integer");
            None
        }
    }
}

pub fn parse_float_expr(parser: &mut Parser) -> Option<Expr> {
    match parser.current_token().value.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(Expr::Float(FloatExpr { value })),
        _ => {
            number_parse_error(parser, "float");
            None
        }
    }
}

pub fn parse_string_expr(parser: &mut Parser) -> Option<Expr> {
    Some(Expr::String(StringExpr {
        value: parser.current_token().value.clone(),
    }))
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token();
    let value = token.kind == TokenKind::True || token.value == "true";

    Some(Expr::Boolean(BooleanExpr { value }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let operator = PrefixOperator::from_token_kind(parser.current_token_kind())?;
    parser.advance();

    let right_expr = parse_expr(parser, BindingPower::Unary);

    Some(Expr::Prefix(PrefixExpr {
        operator,
        right_expr: right_expr.map(Box::new),
    }))
}

/// `( expr )` yields the inner expression; the parentheses leave no node.
pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expr> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default);
    parser.expect_peek(TokenKind::CloseParen)?;

    expr
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<Expr> {
    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Default);

    parser.expect_peek(TokenKind::CloseParen)?;
    parser.expect_peek(TokenKind::OpenCurly)?;

    let consequence = parse_block(parser);

    let mut alternative = None;
    if parser.lookahead_kind() == TokenKind::Else {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        alternative = Some(parse_block(parser));
    }

    Some(Expr::If(IfExpr {
        condition: condition.map(Box::new),
        consequence,
        alternative,
    }))
}

pub fn parse_fn_expr(parser: &mut Parser) -> Option<Expr> {
    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_fn_parameters(parser)?;
    parser.expect_peek(TokenKind::OpenCurly)?;

    let body = parse_block(parser);

    Some(Expr::Function(FunctionExpr { parameters, body }))
}

fn parse_fn_parameters(parser: &mut Parser) -> Option<Vec<SymbolExpr>> {
    let mut parameters = Vec::new();

    if parser.lookahead_kind() == TokenKind::CloseParen {
        parser.advance();
        return Some(parameters);
    }

    let name = parser.expect_peek(TokenKind::Identifier)?.value;
    parameters.push(SymbolExpr { value: name });

    while parser.lookahead_kind() == TokenKind::Comma {
        parser.advance();
        let name = parser.expect_peek(TokenKind::Identifier)?.value;
        parameters.push(SymbolExpr { value: name });
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Some(parameters)
}

pub fn parse_binary_expr(parser: &mut Parser, left: Option<Expr>) -> Option<Expr> {
    let kind = parser.current_token_kind();
    let operator = BinaryOperator::from_token_kind(kind)?;
    parser.advance();

    let right = parse_expr(parser, binding_power(kind));

    Some(Expr::Binary(BinaryExpr {
        left: left.map(Box::new),
        operator,
        right: right.map(Box::new),
    }))
}

pub fn parse_call_expr(parser: &mut Parser, callee: Option<Expr>) -> Option<Expr> {
    let arguments = parse_expr_list(parser, TokenKind::CloseParen)?;

    Some(Expr::Call(CallExpr {
        callee: callee.map(Box::new),
        arguments,
    }))
}

/// Comma separated expressions up to `end`, with `current` on the opening
/// delimiter. Arguments that fail to parse are dropped; their diagnostic
/// is already recorded.
fn parse_expr_list(parser: &mut Parser, end: TokenKind) -> Option<Vec<Expr>> {
    let mut list = Vec::new();

    if parser.lookahead_kind() == end {
        parser.advance();
        return Some(list);
    }

    parser.advance();
    list.extend(parse_expr(parser, BindingPower::Default));

    while parser.lookahead_kind() == TokenKind::Comma {
        parser.advance();
        parser.advance();
        list.extend(parse_expr(parser, BindingPower::Default));
    }

    parser.expect_peek(end)?;

    Some(list)
}
