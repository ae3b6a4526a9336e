/*
 * ==========================================================================
 * SCL Parser
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  `sclparse` command-line driver.
 *
 * Usage:
 *   sclparse <tokens.json> [--identifiers <names.json>] [--verbose]
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

use clap::Parser as _;
use scl_parser::diagnostics::DiagnosticPrinter;
use scl_parser::loader;
use scl_parser::Parser;
use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
#[command(name = "sclparse")]
#[command(about = "Parse an SCL token file and print its parse tree", version)]
struct Cli {
    /// JSON token file written by the tokenizer
    tokens: PathBuf,

    /// JSON array of declared identifiers, checked by `display`
    #[arg(short, long)]
    identifiers: Option<PathBuf>,

    /// Log every dispatched statement
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let tokens = match loader::tokens_from_path(&cli.tokens) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("sclparse: {err}");
            return ExitCode::FAILURE;
        }
    };

    let identifiers: Option<HashSet<String>> = match &cli.identifiers {
        Some(path) => match loader::identifiers_from_path(path) {
            Ok(names) => Some(names),
            Err(err) => {
                eprintln!("sclparse: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    let mut parser = Parser::new(&tokens);
    if let Some(names) = &identifiers {
        parser = parser.with_oracle(names);
    }

    let printer = DiagnosticPrinter::new(cli.tokens.display().to_string(), &tokens);
    match parser.parse_program() {
        Ok(tree) => {
            for warning in parser.warnings() {
                printer.print_warning(warning);
            }
            print!("{tree}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            printer.print_error(&err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser as _;
    use std::path::Path;

    #[test]
    fn parses_all_options() {
        let cli = Cli::try_parse_from(["sclparse", "prog.json", "-i", "ids.json", "--verbose"])
            .unwrap();
        assert_eq!(cli.tokens, Path::new("prog.json"));
        assert_eq!(cli.identifiers.as_deref(), Some(Path::new("ids.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn token_file_is_required() {
        assert!(Cli::try_parse_from(["sclparse", "--verbose"]).is_err());
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["sclparse", "prog.json", "--fast"]).is_err());
    }
}
