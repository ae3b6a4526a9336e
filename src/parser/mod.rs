/*
 * ==========================================================================
 * SCL Parser
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the SCL recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic
 *   - The keyword dispatch table
 *   - Statement parsing
 *   - Shared helper utilities
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Runs the top-level program loop
/// - Exposes the `parse(tokens)` entry points
#[allow(clippy::module_inception)]
pub mod parser;

/// Keyword → statement routine table.
pub mod dispatch;

/// Statement-level grammar:
/// - define / display / set / import / exit
/// - placeholder nodes for reserved but unimplemented keywords
pub mod statements;

/// Shared parser helpers:
/// - lookahead
/// - case-insensitive matching
/// - consume-or-fail expectations
pub mod helpers;

pub use parser::{parse, parse_with_oracle, Parser};
