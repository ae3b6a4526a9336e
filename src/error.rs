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

use std::path::PathBuf;
use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// A fatal failure inside an implemented statement.
///
/// Raising one aborts the whole parse; no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token at `position` did not satisfy the grammar.
    #[error("Parse error at token '{found}': {message}")]
    UnexpectedToken {
        position: usize,
        found: String,
        message: String,
    },

    /// The grammar needed another token but the input was exhausted.
    #[error("Parse error at end of input: {message}")]
    UnexpectedEof { position: usize, message: String },
}

impl ParseError {
    /// Stable error code (P0001, P0002)
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::UnexpectedToken { .. } => "P0001",
            ParseError::UnexpectedEof { .. } => "P0002",
        }
    }

    /// Cursor index at which the expectation failed.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::UnexpectedEof { position, .. } => *position,
        }
    }

    /// The unmet expectation, without the location prefix.
    pub fn message(&self) -> &str {
        match self {
            ParseError::UnexpectedToken { message, .. }
            | ParseError::UnexpectedEof { message, .. } => message,
        }
    }

    /// Literal value of the offending token, `None` at end of input.
    pub fn found(&self) -> Option<&str> {
        match self {
            ParseError::UnexpectedToken { found, .. } => Some(found),
            ParseError::UnexpectedEof { .. } => None,
        }
    }
}

/// A non-fatal finding. Never changes the tree or stops the parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    /// `display` named an identifier the oracle does not know.
    #[error("identifier '{name}' not declared")]
    UndeclaredIdentifier { position: usize, name: String },
}

impl ParseWarning {
    pub fn position(&self) -> usize {
        match self {
            ParseWarning::UndeclaredIdentifier { position, .. } => *position,
        }
    }
}

/// Failure to read a token list from disk or JSON.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid token JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_token_quotes_value() {
        let err = ParseError::UnexpectedToken {
            position: 1,
            found: "5".into(),
            message: "Expected identifier after 'set'.".into(),
        };
        assert_eq!(
            err.to_string(),
            "Parse error at token '5': Expected identifier after 'set'."
        );
        assert_eq!(err.code(), "P0001");
        assert_eq!(err.found(), Some("5"));
    }

    #[test]
    fn eof_has_no_found_token() {
        let err = ParseError::UnexpectedEof {
            position: 2,
            message: "Expected '=' after identifier.".into(),
        };
        assert_eq!(err.code(), "P0002");
        assert_eq!(err.found(), None);
        assert_eq!(err.position(), 2);
        assert!(err.to_string().starts_with("Parse error at end of input"));
    }
}
