//! Recursive-descent parser for the expression subset
//!
//! A precedence cascade over the token stream: logical or/and, equality,
//! relational, additive, multiplicative, unary, postfix, primary. Each level
//! is left-associative. The grammar is deliberately closed (no assignment,
//! no calls, no object construction), so parsing doubles as the sandbox
//! boundary for snippet expressions.

use crate::eval::ast::{BinaryOp, ExprNode, UnaryOp};
use crate::eval::lexer::Token;

pub struct ExprParser {
    tokens: Vec<Token>,
    position: usize,
}

impl ExprParser {
    pub fn new(tokens: Vec<Token>) -> Self {
        ExprParser {
            tokens,
            position: 0,
        }
    }

    /// Parse the whole token stream as one expression.
    pub fn parse(mut self) -> Result<ExprNode, String> {
        if self.tokens.is_empty() {
            return Err("empty expression".to_string());
        }
        let expr = self.parse_or()?;
        if self.position < self.tokens.len() {
            return Err(format!(
                "unexpected trailing token {:?}",
                self.tokens[self.position]
            ));
        }
        Ok(expr)
    }

    fn parse_or(&mut self) -> Result<ExprNode, String> {
        let mut left = self.parse_and()?;
        while self.match_token(&Token::OrOr) {
            let right = self.parse_and()?;
            left = ExprNode::Binary {
                op: BinaryOp::Or,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<ExprNode, String> {
        let mut left = self.parse_equality()?;
        while self.match_token(&Token::AndAnd) {
            let right = self.parse_equality()?;
            left = ExprNode::Binary {
                op: BinaryOp::And,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<ExprNode, String> {
        let mut left = self.parse_relational()?;
        loop {
            let op = if self.match_token(&Token::EqEq) {
                BinaryOp::Eq
            } else if self.match_token(&Token::NotEq) {
                BinaryOp::Ne
            } else {
                break;
            };
            let right = self.parse_relational()?;
            left = ExprNode::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_relational(&mut self) -> Result<ExprNode, String> {
        let mut left = self.parse_additive()?;
        loop {
            let op = if self.match_token(&Token::Le) {
                BinaryOp::Le
            } else if self.match_token(&Token::Ge) {
                BinaryOp::Ge
            } else if self.match_token(&Token::Lt) {
                BinaryOp::Lt
            } else if self.match_token(&Token::Gt) {
                BinaryOp::Gt
            } else {
                break;
            };
            let right = self.parse_additive()?;
            left = ExprNode::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<ExprNode, String> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = if self.match_token(&Token::Plus) {
                BinaryOp::Add
            } else if self.match_token(&Token::Minus) {
                BinaryOp::Sub
            } else {
                break;
            };
            let right = self.parse_multiplicative()?;
            left = ExprNode::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<ExprNode, String> {
        let mut left = self.parse_unary()?;
        loop {
            let op = if self.match_token(&Token::Star) {
                BinaryOp::Mul
            } else if self.match_token(&Token::Slash) {
                BinaryOp::Div
            } else if self.match_token(&Token::Percent) {
                BinaryOp::Mod
            } else {
                break;
            };
            let right = self.parse_unary()?;
            left = ExprNode::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<ExprNode, String> {
        if self.match_token(&Token::Bang) {
            let operand = self.parse_unary()?;
            return Ok(ExprNode::Unary {
                op: UnaryOp::Not,
                operand: Box::new(operand),
            });
        }
        if self.match_token(&Token::Minus) {
            let operand = self.parse_unary()?;
            return Ok(ExprNode::Unary {
                op: UnaryOp::Neg,
                operand: Box::new(operand),
            });
        }
        if self.match_token(&Token::Plus) {
            // Unary plus is a no-op
            return self.parse_unary();
        }
        self.parse_postfix()
    }

    /// Postfix forms are restricted to named lookups: `name[index]` and
    /// `name.length`.
    fn parse_postfix(&mut self) -> Result<ExprNode, String> {
        let expr = self.parse_primary()?;

        if self.check(&Token::LBracket) || self.check(&Token::Dot) {
            let name = match &expr {
                ExprNode::Var(name) => name.clone(),
                _ => return Err("indexing is only supported on named values".to_string()),
            };

            if self.match_token(&Token::LBracket) {
                let index = self.parse_or()?;
                if !self.match_token(&Token::RBracket) {
                    return Err("expected ']' after array index".to_string());
                }
                return Ok(ExprNode::Index {
                    name,
                    index: Box::new(index),
                });
            }

            // The normalizer has already rewritten length()/size() calls,
            // so the only member we accept is `length`.
            self.advance();
            match self.advance() {
                Some(Token::Ident(member)) if member == "length" => {
                    return Ok(ExprNode::Length { name });
                }
                other => return Err(format!("unsupported member access {:?}", other)),
            }
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<ExprNode, String> {
        match self.advance() {
            Some(Token::Num(n)) => Ok(ExprNode::Num(n)),
            Some(Token::Str(s)) => Ok(ExprNode::Str(s)),
            Some(Token::True) => Ok(ExprNode::Bool(true)),
            Some(Token::False) => Ok(ExprNode::Bool(false)),
            Some(Token::Ident(name)) => Ok(ExprNode::Var(name)),
            Some(Token::LParen) => {
                let expr = self.parse_or()?;
                if !self.match_token(&Token::RParen) {
                    return Err("expected ')' after expression".to_string());
                }
                Ok(expr)
            }
            Some(other) => Err(format!("unexpected token {:?}", other)),
            None => Err("unexpected end of expression".to_string()),
        }
    }

    // ===== Helper methods =====

    fn check(&self, token: &Token) -> bool {
        self.tokens
            .get(self.position)
            .is_some_and(|t| std::mem::discriminant(t) == std::mem::discriminant(token))
    }

    fn match_token(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }
}
