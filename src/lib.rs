#![allow(clippy::module_inception)]

use std::{
    fmt::Write as _,
    io::{BufRead, Write},
    rc::Rc,
};

use crate::{
    ast::printer::print_tree,
    errors::errors::{Error, ErrorImpl, ErrorTip},
    interpreter::{interpreter::Interpreter, value::format_value},
    lexer::lexer::tokenize,
    parser::parser::parse,
    symbols::symbol_table::SymbolTable,
};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod symbols;

extern crate regex;

/// A location in the source text.
///
/// `offset` is a byte offset into the file, `line` is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(offset: u32, line: u32, file: Rc<String>) -> Self {
        Position { offset, line, file }
    }

    pub fn null() -> Self {
        Position::new(0, 0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Diagnostic switches for one run of the driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Record and echo the parser's production trace.
    pub print_parse: bool,
    /// Dump the program tree after a successful parse.
    pub print_tree: bool,
    /// Dump every declared identifier after the run.
    pub print_symbols: bool,
}

/// Tokenizes, parses and runs `source`, writing diagnostics and the
/// program's own output to `output`.
///
/// Output order: parse trace, success marker, program tree, program
/// output, the program's final value, symbol dump. The trace is written
/// even when parsing fails; the error itself is left to the caller to
/// report.
pub fn run_source(
    source: &str,
    file_name: &str,
    options: RunOptions,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<f64, Error> {
    let tokens = tokenize(source.to_string(), Some(file_name.to_string()))?;

    let mut symbols = SymbolTable::new();
    let (parser, program) = parse(tokens, Rc::new(file_name.to_string()), &mut symbols, options.print_parse);

    for line in parser.trace_lines() {
        writeln!(output, "{}", line).map_err(driver_io_error)?;
    }
    let program = program?;

    writeln!(output, "\n=== parse successful ===").map_err(driver_io_error)?;

    if options.print_tree {
        writeln!(output, "\n*** Program Tree ***\n{}", print_tree(&program)).map_err(driver_io_error)?;
    }

    let result = Interpreter::new(&mut symbols, input, output).run(&program)?;
    writeln!(output, "{}", format_value(result)).map_err(driver_io_error)?;

    if options.print_symbols {
        writeln!(output, "\n\n*** User Defined Symbols ***").map_err(driver_io_error)?;
        for line in symbols.dump() {
            writeln!(output, "{}", line).map_err(driver_io_error)?;
        }
    }

    Ok(result)
}

fn driver_io_error(error: std::io::Error) -> Error {
    Error::new(
        ErrorImpl::Io {
            message: error.to_string(),
        },
        Position::null(),
    )
}

/// Finds the line containing the byte `position`.
///
/// Returns the 1-based line number, the text of the line and the column of
/// `position` within it, or `None` when `position` is past the end.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}

/// Renders a fatal error the way the driver reports it.
///
/// ```text
/// ***ERROR:
/// On line number 3, near |y|, error type 104: identifier not declared
/// Error: UndeclaredIdentifier (Identifier `y` must be declared in the VAR section)
/// -> example.pas
///   |
/// 3 | y := 1
///   | ^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let mut report = String::new();
    let position = error.get_position();

    let _ = writeln!(report, "***ERROR:");
    let _ = writeln!(
        report,
        "On line number {}, near |{}|, error type {}",
        position.line,
        error.get_lexeme().unwrap_or(""),
        error
    );

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(report, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(report, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.offset) else {
        return report;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(report, "-> {}", position.file);
    let _ = writeln!(report, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(report, "{} | {}", line_string, line_text_removed.trim());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(report, "{:>padding$} {:->arrows$}", "|", "^");
    report
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
