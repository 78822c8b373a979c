use std::{
    iter::{Copied, Peekable},
    slice,
};

use crate::error::{ErrorKind, PResult};

use super::{token::Token, Expression, Operator};

/// Parses a complete expression from a token sequence. Fails with
/// [`ErrorKind::ParseError`] if the sequence is empty, malformed, or has
/// trailing tokens after one full expression.
pub(crate) fn parse<'src>(tokens: &[Token<'src>]) -> PResult<Expression<'src>> {
    let mut parser = Parser::new(tokens);
    let expr = parser.parse_expr()?;

    if let Some(tok) = parser.tokens.peek() {
        return Err(ErrorKind::ParseError(format!(
            "Invalid expression: expected end of input, found {tok:?}"
        )));
    }

    Ok(expr)
}

/// Recursive-descent parser with three precedence layers:
///
/// ```text
/// Expr   := ['-'] Term (('+' | '-') Term)*
/// Term   := Factor ('*' Factor)*
/// Factor := NUMBER | NAME '(' Expr (',' Expr)* ')' | NAME | '(' Expr ')'
/// ```
///
/// Each layer looks one token ahead to decide whether to keep folding at its
/// own level; repeated operators left-fold, so all binary operators are
/// left-associative. A leading `-` is only recognized once per additive
/// expression and wraps the first whole Term.
pub(crate) struct Parser<'t, 'src> {
    tokens: Peekable<Copied<slice::Iter<'t, Token<'src>>>>,
}

impl<'t, 'src> Parser<'t, 'src> {
    pub fn new(tokens: &'t [Token<'src>]) -> Self {
        Self {
            tokens: tokens.iter().copied().peekable(),
        }
    }

    fn parse_expr(&mut self) -> PResult<Expression<'src>> {
        let mut node = match self.tokens.peek() {
            Some(Token::Op(Operator::Minus)) => {
                self.bump();
                Expression::Unary(Box::new(self.parse_term()?))
            }
            _ => self.parse_term()?,
        };

        while let Some(Token::Op(op)) = self.tokens.peek() {
            let op = *op;
            if op == Operator::Mul {
                break;
            }
            self.bump();

            let rhs = self.parse_term()?;
            node = Expression::Binary {
                lhs: Box::new(node),
                op,
                rhs: Box::new(rhs),
            };
        }

        Ok(node)
    }

    fn parse_term(&mut self) -> PResult<Expression<'src>> {
        let mut node = self.parse_factor()?;

        while let Some(Token::Op(Operator::Mul)) = self.tokens.peek() {
            self.bump();

            let rhs = self.parse_factor()?;
            node = Expression::Binary {
                lhs: Box::new(node),
                op: Operator::Mul,
                rhs: Box::new(rhs),
            };
        }

        Ok(node)
    }

    fn parse_factor(&mut self) -> PResult<Expression<'src>> {
        match self.tokens.next() {
            None => Err(ErrorKind::ParseError(
                "Expected expression, found EOF".into(),
            )),
            Some(Token::Number(v)) => Ok(Expression::Number(v)),
            Some(Token::Id(id)) => match self.tokens.peek() {
                Some(Token::LParen) => {
                    self.bump();
                    self.parse_call_expr(id)
                }
                _ => Ok(Expression::Var(id)),
            },
            Some(Token::LParen) => {
                let expr = self.parse_expr()?;
                self.expect(Token::RParen)?;
                Ok(expr)
            }
            Some(other) => Err(ErrorKind::ParseError(format!(
                "Expected expression, found {other:?}"
            ))),
        }
    }

    // The grammar has no zero-argument calls; one argument expression is
    // always parsed right after `(`.
    fn parse_call_expr(&mut self, id: &'src str) -> PResult<Expression<'src>> {
        let mut args = vec![self.parse_expr()?];

        loop {
            match self.tokens.next() {
                None => {
                    return Err(ErrorKind::ParseError(
                        "Expected `,` or `)`, found EOF".into(),
                    ))
                }
                Some(Token::RParen) => break,
                Some(Token::Comma) => args.push(self.parse_expr()?),
                Some(other) => {
                    return Err(ErrorKind::ParseError(format!(
                        "Expected `,` or `)`, found {other:?}"
                    )))
                }
            }
        }

        Ok(Expression::Call { id, args })
    }

    #[inline(always)]
    fn bump(&mut self) {
        let _ = self.tokens.next();
    }

    fn expect(&mut self, expected: Token<'src>) -> PResult<()> {
        match self.tokens.next() {
            None => Err(ErrorKind::ParseError(format!(
                "Expected {expected:?}, found EOF"
            ))),
            Some(token) => {
                if token == expected {
                    return Ok(());
                }
                Err(ErrorKind::ParseError(format!(
                    "Expected {expected:?}, found {token:?}"
                )))
            }
        }
    }
}
