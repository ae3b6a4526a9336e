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

use crate::error::ParseResult;
use crate::parser::parser::Parser;
use crate::tree::ParseTreeNode;
use std::collections::HashMap;

/// A statement routine. Runs with the leading keyword already consumed.
pub type StatementRule = fn(&mut Parser<'_>) -> ParseResult<ParseTreeNode>;

/// Keywords with a real grammar and the routine that parses each.
const RULES: [(&str, StatementRule); 5] = [
    ("define", |p| p.define_statement()),
    ("display", |p| p.display_statement()),
    ("set", |p| p.set_statement()),
    ("import", |p| p.import_statement()),
    ("exit", |p| p.exit_statement()),
];

/// Reserved keywords that only produce a placeholder node.
pub const STUB_KEYWORDS: [&str; 23] = [
    "if", "else", "while", "print", "return", "main", "declare", "length",
    "begin", "end", "function", "procedure", "program", "class",
    "interface", "list", "object", "const", "true", "false", "and", "or", "not",
];

/// What to do when a statement starts with a registered keyword.
#[derive(Clone, Copy)]
pub enum Handler {
    /// Run a grammar routine.
    Rule(StatementRule),

    /// Emit `<keyword>Statement("Not implemented yet")` and consume
    /// nothing further.
    Stub(&'static str),
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Handler::Rule(_) => f.write_str("Rule"),
            Handler::Stub(keyword) => write!(f, "Stub({keyword})"),
        }
    }
}

/// Maps lowercase keywords to their handlers.
///
/// Built once per parser and never modified afterwards.
pub struct DispatchTable {
    handlers: HashMap<&'static str, Handler>,
}

impl DispatchTable {
    pub fn new() -> Self {
        let mut handlers = HashMap::with_capacity(RULES.len() + STUB_KEYWORDS.len());
        for (keyword, rule) in RULES {
            handlers.insert(keyword, Handler::Rule(rule));
        }
        for keyword in STUB_KEYWORDS {
            handlers.insert(keyword, Handler::Stub(keyword));
        }

        Self { handlers }
    }

    /// Looks up the handler for a token value, ignoring case.
    pub fn lookup(&self, value: &str) -> Option<Handler> {
        self.handlers.get(value.to_lowercase().as_str()).copied()
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_is_registered() {
        let table = DispatchTable::new();
        assert_eq!(table.handlers.len(), RULES.len() + STUB_KEYWORDS.len());
        for (keyword, _) in RULES {
            assert!(matches!(table.lookup(keyword), Some(Handler::Rule(_))));
        }
        for keyword in STUB_KEYWORDS {
            assert!(matches!(table.lookup(keyword), Some(Handler::Stub(k)) if k == keyword));
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let table = DispatchTable::new();
        assert!(matches!(table.lookup("Define"), Some(Handler::Rule(_))));
        assert!(matches!(table.lookup("DEFINE"), Some(Handler::Rule(_))));
        assert!(matches!(table.lookup("WHILE"), Some(Handler::Stub("while"))));
    }

    #[test]
    fn unknown_words_are_absent() {
        let table = DispatchTable::new();
        assert!(table.lookup("foo").is_none());
        assert!(table.lookup("").is_none());
    }
}
