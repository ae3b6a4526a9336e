/*
 * ==========================================================================
 * SCL Parser
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token model consumed by the SCL parser.
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

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the **category of a lexical token** in SCL.
///
/// The tokenizer that assigns these categories lives outside this crate;
/// the parser only reads them.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Tokenizer → TokenKind → Parser → Parse Tree
/// ```
///
/// On the wire (see [`crate::loader`]) kinds are written in upper case,
/// e.g. `"KEYWORD"`. Lower-case spellings are accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// A reserved SCL word such as `define`, `integer` or `while`.
    #[serde(alias = "keyword")]
    Keyword,

    /// A user-defined name.
    #[serde(alias = "identifier")]
    Identifier,

    /// A numeric literal: `42`, `3.14`.
    #[serde(alias = "number")]
    Number,

    /// An operator such as `=`, `+` or `<=`.
    #[serde(alias = "operator")]
    Operator,

    /// Punctuation: `(`, `)`, `,`.
    #[serde(alias = "symbol")]
    Symbol,

    /// A quoted string literal.
    #[serde(alias = "string")]
    String,

    /// Anything the tokenizer could not classify.
    #[serde(alias = "unknown")]
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::Symbol => "symbol",
            TokenKind::String => "string",
            TokenKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Represents a **single lexical token** handed to the parser.
///
/// A `Token` is immutable once built. Its identity is its position in the
/// token sequence, so it carries no span or id of its own.
///
/// # Example Tokens
/// ```text
/// define   →  { type: KEYWORD,    value: "define" }
/// x        →  { type: IDENTIFIER, value: "x" }
/// 42       →  { type: NUMBER,     value: "42" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    kind: TokenKind,
    value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn keyword(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Keyword, value)
    }

    pub fn identifier(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, value)
    }

    pub fn number(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Number, value)
    }

    pub fn operator(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Operator, value)
    }

    /// The token's category.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact literal text of the token.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Token {
    /// Prints **only the literal value**, which is what error messages
    /// quote back to the user.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prints_value_only() {
        let token = Token::keyword("define");
        assert_eq!(token.to_string(), "define");
        assert_eq!(token.kind(), TokenKind::Keyword);
    }

    #[test]
    fn kind_accepts_both_spellings() {
        let upper: TokenKind = serde_json::from_str("\"IDENTIFIER\"").unwrap();
        let lower: TokenKind = serde_json::from_str("\"identifier\"").unwrap();
        assert_eq!(upper, TokenKind::Identifier);
        assert_eq!(lower, TokenKind::Identifier);
    }

    #[test]
    fn serializes_with_type_field() {
        let json = serde_json::to_value(Token::operator("=")).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "OPERATOR", "value": "=" }));
    }
}
