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

use crate::error::{ParseError, ParseWarning};
use crate::token::Token;

/// How many tokens to show on each side of the offending one.
const CONTEXT: usize = 4;

/// Renders compiler-style diagnostics for SCL parse errors and warnings.
///
/// The parser never sees source text, only tokens, so instead of a source
/// line this printer shows the neighbouring token values and puts a caret
/// under the offending one (or just past the last token at end of input).
///
/// # Output Example
/// ```text
/// error[P0001]: Expected '=' after identifier.
///   --> prog.json: token 2
///    |
///    | set x 5 exit
///    |       ^ found '5'
/// ```
pub struct DiagnosticPrinter<'a> {
    /// Name shown after `-->` (usually the token file).
    file_name: String,

    tokens: &'a [Token],
}

impl<'a> DiagnosticPrinter<'a> {
    pub fn new(file_name: impl Into<String>, tokens: &'a [Token]) -> Self {
        Self {
            file_name: file_name.into(),
            tokens,
        }
    }

    pub fn render_error(&self, error: &ParseError) -> String {
        let found = match error.found() {
            Some(value) => format!("found '{value}'"),
            None => "unexpected end of input".to_string(),
        };
        self.render(
            &format!("error[{}]", error.code()),
            error.message(),
            error.position(),
            &found,
        )
    }

    pub fn render_warning(&self, warning: &ParseWarning) -> String {
        self.render("warning", &warning.to_string(), warning.position(), "")
    }

    /// Prints a formatted error diagnostic to stderr.
    pub fn print_error(&self, error: &ParseError) {
        eprint!("{}", self.render_error(error));
    }

    pub fn print_warning(&self, warning: &ParseWarning) {
        eprint!("{}", self.render_warning(warning));
    }

    fn render(&self, header: &str, message: &str, position: usize, note: &str) -> String {
        let start = position.saturating_sub(CONTEXT);
        let end = (position + CONTEXT + 1).min(self.tokens.len());

        // Build the token line and remember the column of `position`.
        let mut line = String::new();
        let mut column = None;
        for (index, token) in self.tokens.iter().enumerate().take(end).skip(start) {
            if !line.is_empty() {
                line.push(' ');
            }
            if index == position {
                column = Some(line.chars().count());
            }
            line.push_str(token.value());
        }
        let column = column.unwrap_or_else(|| {
            if line.is_empty() {
                0
            } else {
                line.chars().count() + 1
            }
        });

        let mut out = format!(
            "{header}: {message}\n  --> {}: token {position}\n   |\n",
            self.file_name
        );
        out.push_str(&format!("   | {line}\n"));
        out.push_str(&format!("   | {:column$}^", ""));
        if !note.is_empty() {
            out.push(' ');
            out.push_str(note);
        }
        out.push('\n');
        out
    }
}
