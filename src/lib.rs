/*
 * ==========================================================================
 * SCL Parser
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root. Turns a token sequence produced by the SCL
 *           tokenizer into a labeled parse tree.
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

pub mod diagnostics;
pub mod error;
pub mod loader;
pub mod oracle;
pub mod parser;
pub mod token;
pub mod tree;

pub use error::{LoadError, ParseError, ParseResult, ParseWarning};
pub use oracle::IdentifierOracle;
pub use parser::{parse, parse_with_oracle, Parser};
pub use token::{Token, TokenKind};
pub use tree::ParseTreeNode;
