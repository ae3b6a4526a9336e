/*
 * ==========================================================================
 * SCL Parser
 * ==========================================================================
 *
 * License:
 * This file is part of the SCL parser project.
 *
 * The SCL parser is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::error::{ParseError, ParseResult};
use crate::parser::parser::Parser;
use crate::token::{Token, TokenKind};

impl<'a> Parser<'a> {
    /// Returns true if every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Looks at the current token without consuming it.
    ///
    /// Returns `None` at end of input.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.current)
    }

    /// Advances one token forward and returns the token passed over.
    ///
    /// At end of input the cursor stays put and `None` is returned.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.current)?;
        tracing::trace!(position = self.current, "consume '{}'", token);
        self.current += 1;
        Some(token)
    }

    /// Checks the current token's kind without consuming it.
    pub fn check_kind(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind() == kind)
    }

    /// Consumes the current token if its value equals `value`, ignoring
    /// case. Returns `false` at end of input.
    pub fn match_value(&mut self, value: &str) -> bool {
        match self.peek() {
            Some(token) if token.value().eq_ignore_ascii_case(value) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Consumes a token of the required kind or fails the parse.
    pub fn expect_kind(&mut self, kind: TokenKind, message: &str) -> ParseResult<&'a Token> {
        if self.check_kind(kind) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }
        Err(self.error_here(message))
    }

    /// Consumes a token with the required literal value (any case) or
    /// fails the parse.
    pub fn expect_value(&mut self, value: &str, message: &str) -> ParseResult<()> {
        if self.match_value(value) {
            Ok(())
        } else {
            Err(self.error_here(message))
        }
    }

    /// Expects each word in order, failing with `Expected '<word>'.` on the
    /// first mismatch.
    pub fn expect_sequence(&mut self, words: &[&str]) -> ParseResult<()> {
        for word in words {
            self.expect_value(word, &format!("Expected '{word}'."))?;
        }
        Ok(())
    }

    /// Consumes whatever token comes next. Fails only at end of input.
    pub fn expect_any(&mut self, message: &str) -> ParseResult<&'a Token> {
        match self.advance() {
            Some(token) => Ok(token),
            None => Err(self.error_here(message)),
        }
    }

    /// Builds the error for an expectation failing at the cursor.
    pub(crate) fn error_here(&self, message: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                position: self.current,
                found: token.value().to_string(),
                message: message.to_string(),
            },
            None => ParseError::UnexpectedEof {
                position: self.current,
                message: message.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ParseError;
    use crate::parser::Parser;
    use crate::token::{Token, TokenKind};

    #[test]
    fn advance_stops_at_end() {
        let tokens = vec![Token::keyword("exit")];
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.advance().map(Token::value), Some("exit"));
        assert!(parser.advance().is_none());
        assert_eq!(parser.current, 1);
        assert!(parser.peek().is_none());
    }

    #[test]
    fn match_value_ignores_case() {
        let tokens = vec![Token::keyword("OF"), Token::keyword("Type")];
        let mut parser = Parser::new(&tokens);
        assert!(!parser.match_value("type"));
        assert!(parser.match_value("of"));
        assert!(parser.match_value("TYPE"));
        assert!(!parser.match_value("type"));
    }

    #[test]
    fn expect_kind_leaves_cursor_on_failure() {
        let tokens = vec![Token::number("5")];
        let mut parser = Parser::new(&tokens);
        let err = parser
            .expect_kind(TokenKind::Identifier, "Expected identifier.")
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                position: 0,
                found: "5".into(),
                message: "Expected identifier.".into(),
            }
        );
        assert_eq!(parser.current, 0);
    }

    #[test]
    fn expect_at_end_reports_eof() {
        let tokens: Vec<Token> = Vec::new();
        let mut parser = Parser::new(&tokens);
        let err = parser.expect_value("=", "Expected '='.").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { position: 0, .. }));
        assert!(parser.expect_any("Expected value.").is_err());
    }

    #[test]
    fn expect_sequence_names_missing_word() {
        let tokens = vec![Token::keyword("of"), Token::keyword("kind")];
        let mut parser = Parser::new(&tokens);
        let err = parser.expect_sequence(&["of", "type"]).unwrap_err();
        assert_eq!(err.message(), "Expected 'type'.");
        assert_eq!(err.found(), Some("kind"));
    }
}
