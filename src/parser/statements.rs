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

use crate::error::{ParseResult, ParseWarning};
use crate::parser::parser::Parser;
use crate::token::TokenKind;
use crate::tree::ParseTreeNode;

/// Child of every placeholder statement node.
pub const NOT_IMPLEMENTED: &str = "Not implemented yet";

impl<'a> Parser<'a> {
    /// Parses a `define` statement.
    ///
    /// ```text
    /// define IDENTIFIER of type KEYWORD
    /// ```
    pub fn define_statement(&mut self) -> ParseResult<ParseTreeNode> {
        let id = self.expect_kind(TokenKind::Identifier, "Expected identifier after 'define'.")?;
        self.expect_sequence(&["of", "type"])?;
        let ty = self.expect_kind(TokenKind::Keyword, "Expected type keyword.")?;

        Ok(ParseTreeNode::with_leaves(
            "DefineStatement",
            ["define", id.value(), "of", "type", ty.value()],
        ))
    }

    /// Parses a `display` statement.
    ///
    /// ```text
    /// display IDENTIFIER
    /// ```
    ///
    /// When an oracle is attached and does not know the identifier, a
    /// warning is logged and recorded. The tree is the same either way.
    pub fn display_statement(&mut self) -> ParseResult<ParseTreeNode> {
        let position = self.current;
        let id = self.expect_kind(TokenKind::Identifier, "Expected identifier after 'display'.")?;

        if let Some(oracle) = self.oracle {
            if !oracle.exists(id.value()) {
                let warning = ParseWarning::UndeclaredIdentifier {
                    position,
                    name: id.value().to_string(),
                };
                tracing::warn!(position, "{}", warning);
                self.warnings.push(warning);
            }
        }

        Ok(ParseTreeNode::with_leaves("DisplayStatement", ["display", id.value()]))
    }

    /// Parses a `set` statement. The assigned value may be any token.
    ///
    /// ```text
    /// set IDENTIFIER = TOKEN
    /// ```
    pub fn set_statement(&mut self) -> ParseResult<ParseTreeNode> {
        let id = self.expect_kind(TokenKind::Identifier, "Expected identifier after 'set'.")?;
        self.expect_value("=", "Expected '=' after identifier.")?;
        let value = self.expect_any("Expected value after '='.")?;

        Ok(ParseTreeNode::with_leaves(
            "SetStatement",
            ["set", id.value(), "=", value.value()],
        ))
    }

    /// Parses an `import` statement.
    ///
    /// ```text
    /// import IDENTIFIER
    /// ```
    pub fn import_statement(&mut self) -> ParseResult<ParseTreeNode> {
        let module =
            self.expect_kind(TokenKind::Identifier, "Expected module name after 'import'.")?;
        Ok(ParseTreeNode::with_leaves("ImportStatement", ["import", module.value()]))
    }

    /// Parses `exit`, which takes no operands.
    pub fn exit_statement(&mut self) -> ParseResult<ParseTreeNode> {
        Ok(ParseTreeNode::with_leaves("ExitStatement", ["exit"]))
    }

    /// Placeholder for a reserved keyword without a grammar yet.
    ///
    /// Consumes nothing; the keyword itself was taken by the dispatcher.
    pub fn stub_statement(&self, keyword: &str) -> ParseTreeNode {
        ParseTreeNode::with_leaves(format!("{keyword}Statement"), [NOT_IMPLEMENTED])
    }
}
