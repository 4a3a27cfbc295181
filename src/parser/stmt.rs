use crate::{
    ast::{
        ast::Stmt,
        expressions::SymbolExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{lookups::stmt_handler, parser::Parser};

// Every production starts with `current` on its first token and leaves
// `current` on its last one; the caller advances past it.

pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    if let Some(handler) = stmt_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

fn skip_optional_semicolon(parser: &mut Parser) {
    if parser.lookahead_kind() == TokenKind::Semicolon {
        parser.advance();
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Stmt> {
    let name = parser.expect_peek(TokenKind::Identifier)?.value;
    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default);
    skip_optional_semicolon(parser);

    Some(Stmt::Let(LetStmt {
        name: SymbolExpr { value: name },
        value: value.map(Box::new),
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    let value = match parser.lookahead_kind() {
        TokenKind::Semicolon | TokenKind::CloseCurly | TokenKind::EOF => None,
        _ => {
            parser.advance();
            parse_expr(parser, BindingPower::Default)
        }
    };
    skip_optional_semicolon(parser);

    Some(Stmt::Return(ReturnStmt {
        value: value.map(Box::new),
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Stmt> {
    let expression = parse_expr(parser, BindingPower::Default);
    skip_optional_semicolon(parser);

    Some(Stmt::Expression(ExpressionStmt {
        expression: expression.map(Box::new),
    }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Option<Stmt> {
    if !parser.enter_nesting() {
        return None;
    }
    let block = parse_block(parser);
    parser.leave_nesting();
    skip_optional_semicolon(parser);

    Some(Stmt::Block(block))
}

/// Parses `{ stmt* }` with `current` on the opening brace. An unclosed
/// block ends quietly at end of input.
pub fn parse_block(parser: &mut Parser) -> BlockStmt {
    parser.advance();

    let mut body = Vec::new();
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        if let Some(stmt) = parse_stmt(parser) {
            body.push(stmt);
        }
        parser.advance();
    }

    BlockStmt { body }
}
