/*
 * ==========================================================================
 * SCL Parser
 * ==========================================================================
 *
 * File:     loader.rs
 * Purpose:  Reads token lists written by the SCL tokenizer as JSON.
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

//! The tokenizer writes its output as a JSON array:
//!
//! ```text
//! [
//!   { "type": "KEYWORD",    "value": "define" },
//!   { "type": "IDENTIFIER", "value": "x" }
//! ]
//! ```
//!
//! Nothing in the parser depends on this module; it only turns a file into
//! a `Vec<Token>`.

use crate::error::LoadError;
use crate::token::Token;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub fn tokens_from_str(json: &str) -> Result<Vec<Token>, LoadError> {
    Ok(serde_json::from_str(json)?)
}

pub fn tokens_from_reader<R: Read>(reader: R) -> Result<Vec<Token>, LoadError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn tokens_from_path(path: impl AsRef<Path>) -> Result<Vec<Token>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tokens = tokens_from_reader(BufReader::new(file))?;
    tracing::debug!("loaded {} tokens from {}", tokens.len(), path.display());
    Ok(tokens)
}

/// Reads a JSON array of declared identifier names, e.g. `["x", "y"]`.
pub fn identifiers_from_path(
    path: impl AsRef<Path>,
) -> Result<std::collections::HashSet<String>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_tokenizer_output() {
        let tokens = tokens_from_str(
            r#"[{"type":"KEYWORD","value":"import"},{"type":"IDENTIFIER","value":"math"}]"#,
        )
        .unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind(), TokenKind::Keyword);
        assert_eq!(tokens[1].value(), "math");
    }

    #[test]
    fn reader_and_str_agree() {
        let json = r#"[{"type":"number","value":"5"}]"#;
        let a = tokens_from_str(json).unwrap();
        let b = tokens_from_reader(json.as_bytes()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = tokens_from_str(r#"[{"type":"COMMENT","value":"x"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = tokens_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn token_file_loads_and_parses() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prog.json");
        fs::write(
            &path,
            r#"[{"type":"KEYWORD","value":"exit"},{"type":"IDENTIFIER","value":"x"}]"#,
        )
        .unwrap();

        let tokens = tokens_from_path(&path).unwrap();
        let tree = crate::parse(&tokens).unwrap();
        assert_eq!(tree.leaf_labels(), vec!["exit", "x"]);
    }

    #[test]
    fn identifier_file_loads_as_set() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ids.json");
        fs::write(&path, r#"["x", "total", "x"]"#).unwrap();

        let names = identifiers_from_path(&path).unwrap();
        assert_eq!(names.len(), 2);
        assert!(names.contains("total"));
    }

    #[test]
    fn identifier_file_must_be_string_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ids.json");
        fs::write(&path, r#"{"x": true}"#).unwrap();

        let err = identifiers_from_path(&path).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn missing_identifier_file_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");

        let err = identifiers_from_path(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
