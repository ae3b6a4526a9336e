/*
 * ==========================================================================
 * SCL Parser
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver functions used to turn a token sequence into an SCL parse tree.
 *
 * The parsing implementation itself is split across multiple modules:
 * - `dispatch.rs`     → Keyword → statement routine table
 * - `statements.rs`   → Statement-level grammar (`define`, `set`, ...)
 * - `helpers.rs`      → Token matching, consumption, and navigation utilities
 *
 * This file serves as the **root coordinator** of the parsing process.
 *
 * --------------------------------------------------------------------------
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

use crate::error::{ParseResult, ParseWarning};
use crate::oracle::IdentifierOracle;
use crate::parser::dispatch::{DispatchTable, Handler};
use crate::token::Token;
use crate::tree::ParseTreeNode;

/// The core SCL recursive-descent parser.
///
/// This structure maintains:
/// - The borrowed token sequence
/// - The current cursor position into that sequence
/// - The keyword dispatch table, built once in [`Parser::new`]
/// - An optional identifier oracle used by `display`
///
/// A parser is single-threaded state; use one instance per parse at a
/// time.
pub struct Parser<'a> {
    /// Complete list of tokens to be parsed.
    pub(crate) tokens: &'a [Token],

    /// Current cursor position within the token sequence.
    pub(crate) current: usize,

    statements: DispatchTable,

    pub(crate) oracle: Option<&'a dyn IdentifierOracle>,

    pub(crate) warnings: Vec<ParseWarning>,
}

/// Parses `tokens` without an identifier oracle.
///
/// # SCL Pipeline
/// ```text
/// Source → Tokenizer → Tokens → Parser → Parse Tree
/// ```
///
/// # Example
/// ```rust
/// use scl_parser::{parse, Token};
///
/// let tokens = vec![Token::keyword("exit")];
/// let tree = parse(&tokens).unwrap();
/// assert_eq!(tree.children()[0].label(), "ExitStatement");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<ParseTreeNode> {
    Parser::new(tokens).parse_program()
}

/// Parses `tokens`, checking `display` targets against `oracle`.
pub fn parse_with_oracle(
    tokens: &[Token],
    oracle: &dyn IdentifierOracle,
) -> ParseResult<ParseTreeNode> {
    Parser::new(tokens).with_oracle(oracle).parse_program()
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            current: 0,
            statements: DispatchTable::new(),
            oracle: None,
            warnings: Vec::new(),
        }
    }

    pub fn with_oracle(mut self, oracle: &'a dyn IdentifierOracle) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Warnings collected by the most recent [`Parser::parse_program`].
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Parses the entire token sequence into a `Program` node.
    ///
    /// This is the **main driver** of the recursive-descent parser. Each
    /// iteration handles one statement:
    /// - A registered keyword is consumed and its routine runs.
    /// - Anything else is consumed alone and wrapped in `UnknownStatement`.
    ///
    /// Either way at least one token is consumed per iteration, so the loop
    /// always terminates.
    ///
    /// # Errors
    /// The first grammar violation inside an implemented statement aborts
    /// the parse and is returned as-is.
    ///
    /// Calling this again restarts from the first token.
    pub fn parse_program(&mut self) -> ParseResult<ParseTreeNode> {
        self.current = 0;
        self.warnings.clear();

        let mut program = ParseTreeNode::new("Program");

        while let Some(token) = self.peek() {
            let Some(handler) = self.statements.lookup(token.value()) else {
                tracing::debug!(position = self.current, "unknown statement '{}'", token);
                self.advance();
                program.add_child(ParseTreeNode::with_leaves(
                    "UnknownStatement",
                    [token.value()],
                ));
                continue;
            };

            tracing::debug!(position = self.current, ?handler, "statement '{}'", token);
            self.advance();

            let statement = match handler {
                Handler::Rule(rule) => rule(self)?,
                Handler::Stub(keyword) => self.stub_statement(keyword),
            };
            program.add_child(statement);
        }

        Ok(program)
    }
}
