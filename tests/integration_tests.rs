//! Integration tests for whole programs.
//!
//! These run source text through tokenizing, parsing and interpretation with
//! in-memory input and output, checking both the program's behaviour and
//! the driver's diagnostic output.

use minipas::{
    errors::errors::{Error, ErrorImpl, SyntaxCode},
    format_error, run_source, RunOptions,
};

fn run_with(source: &str, input: &str, options: RunOptions) -> (Result<f64, Error>, String) {
    let mut reader = input.as_bytes();
    let mut output = vec![];
    let result = run_source(source, "test.pas", options, &mut reader, &mut output);
    (result, String::from_utf8(output).unwrap())
}

fn run(source: &str, input: &str) -> (Result<f64, Error>, String) {
    run_with(source, input, RunOptions::default())
}

/// Program output with the success marker stripped.
fn program_output(output: &str) -> &str {
    output
        .strip_prefix("\n=== parse successful ===\n")
        .expect("missing success marker")
}

#[test]
fn test_precedence() {
    let (result, output) = run(
        "PROGRAM prec;
         VAR a : REAL; b : REAL;
         BEGIN
           a := 2 + 3 * 4;
           b := (2 + 3) * 4;
           write(a);
           write(b)
         END",
        "",
    );

    assert!(result.is_ok());
    assert_eq!(program_output(&output), "14\n20\n0\n");
}

#[test]
fn test_round_trip_real() {
    let (result, output) = run("PROGRAM p; VAR x : REAL; BEGIN x := 3.5; write(x) END", "");

    assert_eq!(result.unwrap(), 0.0);
    assert_eq!(program_output(&output), "3.5\n0\n");
}

#[test]
fn test_factorial() {
    let source = "
        PROGRAM factorial;
        { computes n! for a number read from input }
        VAR n : INTEGER;
            acc : REAL;
        BEGIN
          read(n);
          acc := 1;
          WHILE n > 1
            BEGIN
              acc := acc * n;
              n := n - 1
            END;
          write('result');
          write(acc)
        END";

    let (result, output) = run(source, "5\n");

    assert!(result.is_ok());
    assert_eq!(program_output(&output), "result\n120\n0\n");
}

#[test]
fn test_final_value_printed() {
    let (result, output) = run("PROGRAM p; VAR x : REAL; BEGIN write('go'); x := 4 * 2.5 END", "");

    assert_eq!(result.unwrap(), 10.0);
    assert_eq!(program_output(&output), "go\n10\n");
}

#[test]
fn test_long_integer_literal() {
    let (result, output) = run(
        "PROGRAM p; VAR x : REAL; BEGIN x := 99999999999999999999; write(x) END",
        "",
    );

    assert!(result.is_ok());
    assert_eq!(program_output(&output), "1e+20\n0\n");
}

#[test]
fn test_trailing_dot_aborts() {
    let (result, output) = run("PROGRAM p; BEGIN write('a') END.", "");

    assert!(matches!(result.unwrap_err().get_internal(), ErrorImpl::TrailingInput { token } if token == "."));
    assert!(output.is_empty());
}

#[test]
fn test_epsilon_tolerant_branches() {
    let source = "
        PROGRAM eps;
        VAR x : REAL;
        BEGIN
          read(x);
          IF x = 2 THEN write('equal') ELSE write('different');
          IF x <> 2 THEN write('not equal');
          IF x > 2 THEN write('greater')
        END";

    let (_, output) = run(source, "2.0005");
    assert_eq!(program_output(&output), "equal\n0\n");

    let (_, output) = run(source, "2.01");
    assert_eq!(program_output(&output), "different\nnot equal\ngreater\n0\n");
}

#[test]
fn test_while_guard_must_equal_one() {
    let (result, output) = run(
        "PROGRAM p; VAR g : REAL;
         BEGIN g := 1.5; WHILE g BEGIN write('looped'); g := 0 END; write('done') END",
        "",
    );

    assert!(result.is_ok());
    assert_eq!(program_output(&output), "done\n0\n");
}

#[test]
fn test_logical_operators() {
    let source = "
        PROGRAM logic;
        VAR t : REAL; f : REAL; r : REAL;
        BEGIN
          t := 1;
          r := f OR t;        write(r);
          r := t AND f;       write(r);
          r := NOT f AND t;   write(r);
          r := (t > f) AND (f < t); write(r)
        END";

    let (result, output) = run(source, "");

    assert!(result.is_ok());
    assert_eq!(program_output(&output), "1\n0\n1\n1\n0\n");
}

#[test]
fn test_undeclared_identifier_aborts() {
    let source = "PROGRAM p;\nVAR x : REAL;\nBEGIN\n  x := 1;\n  write(y)\nEND";
    let (result, output) = run(source, "");
    let error = result.unwrap_err();

    assert!(matches!(error.get_internal(), ErrorImpl::UndeclaredIdentifier { name } if name == "y"));
    assert!(!output.contains("parse successful"));

    let report = format_error(&error, source);
    assert!(report.contains("On line number 5, near |y|, error type 104: identifier not declared"));
    assert!(report.contains("5 | write(y)"));
}

#[test]
fn test_nothing_runs_when_parsing_fails() {
    let (result, output) = run(
        "PROGRAM p; VAR x : REAL; BEGIN write('early'); x := z END",
        "",
    );

    assert!(result.is_err());
    assert!(output.is_empty());
}

#[test]
fn test_duplicate_declaration_aborts() {
    let (result, _) = run("PROGRAM p; VAR x : REAL; x : REAL; BEGIN x := 1 END", "");
    let error = result.unwrap_err();

    assert_eq!(error.code(), Some(101));
    assert_eq!(error.to_string(), "101: identifier declared twice");
}

#[test]
fn test_trailing_input_aborts() {
    let (result, _) = run("PROGRAM p; BEGIN write('a') END write('b')", "");
    assert!(matches!(result.unwrap_err().get_internal(), ErrorImpl::TrailingInput { .. }));
}

#[test]
fn test_syntax_error_report() {
    let source = "PROGRAM p;\nVAR x : REAL;\nBEGIN\n  IF x write('a')\nEND";
    let (result, _) = run(source, "");
    let error = result.unwrap_err();

    assert!(matches!(error.get_internal(), ErrorImpl::SyntaxError(SyntaxCode::ThenExpected)));

    let report = format_error(&error, source);
    assert!(report.starts_with("***ERROR:\n"));
    assert!(report.contains("On line number 4, near |write|, error type 52: 'THEN' expected"));
    assert!(report.contains("Error: SyntaxError"));
}

#[test]
fn test_lexer_error_reported() {
    let (result, _) = run("PROGRAM p; BEGIN write('a') END ?", "");
    let error = result.unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_lexeme(), Some("?"));
}

#[test]
fn test_runtime_input_error() {
    let (result, output) = run("PROGRAM p; VAR x : REAL; BEGIN read(x) END", "x");

    assert!(matches!(result.unwrap_err().get_internal(), ErrorImpl::InvalidInput { .. }));
    assert!(output.contains("=== parse successful ==="));
}

#[test]
fn test_parse_trace_output() {
    let options = RunOptions {
        print_parse: true,
        ..RunOptions::default()
    };
    let (result, output) = run_with("PROGRAM p; BEGIN write('hi') END", "", options);

    assert!(result.is_ok());
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "enter <program>");
    assert!(lines.contains(&"|  |  |  enter <write>"));
    assert!(lines.contains(&"|  |  |  |  found |hi| STRINGLIT"));
    assert!(output.ends_with("exit <program>\n\n=== parse successful ===\nhi\n0\n"));
}

#[test]
fn test_parse_trace_printed_before_error() {
    let options = RunOptions {
        print_parse: true,
        ..RunOptions::default()
    };
    let (result, output) = run_with("PROGRAM p; BEGIN x := 1 END", "", options);

    assert!(result.is_err());
    assert!(output.starts_with("enter <program>\n"));
    assert!(output.contains("found |x| IDENTIFIER"));
    assert!(!output.contains("parse successful"));
}

#[test]
fn test_program_tree_output() {
    let options = RunOptions {
        print_tree: true,
        ..RunOptions::default()
    };
    let (result, output) = run_with(
        "PROGRAM demo; VAR x : REAL; BEGIN x := -2 * (x + 1.5); write('hi') END",
        "",
        options,
    );
    assert!(result.is_ok());

    let expected = "
=== parse successful ===

*** Program Tree ***
(program demo
|  (block
|  |  (compound_stmt
|  |  |  (assignment_stmt ( x := )
|  |  |  |  (expression
|  |  |  |  |  (simple_exp
|  |  |  |  |  |  (term
|  |  |  |  |  |  |  (factor ( - )
|  |  |  |  |  |  |  |  (factor ( INTLIT: 2 )
|  |  |  |  |  |  |  |  factor)
|  |  |  |  |  |  |  factor)
|  |  |  |  |  |  |  *
|  |  |  |  |  |  |  (factor (
|  |  |  |  |  |  |  |  (expression
|  |  |  |  |  |  |  |  |  (simple_exp
|  |  |  |  |  |  |  |  |  |  (term
|  |  |  |  |  |  |  |  |  |  |  (factor ( IDENT: x )
|  |  |  |  |  |  |  |  |  |  |  factor)
|  |  |  |  |  |  |  |  |  |  term)
|  |  |  |  |  |  |  |  |  |  +
|  |  |  |  |  |  |  |  |  |  (term
|  |  |  |  |  |  |  |  |  |  |  (factor ( FLOATLIT: 1.5 )
|  |  |  |  |  |  |  |  |  |  |  factor)
|  |  |  |  |  |  |  |  |  |  term)
|  |  |  |  |  |  |  |  |  simple_exp)
|  |  |  |  |  |  |  |  expression)
|  |  |  |  |  |  |  |  )
|  |  |  |  |  |  |  factor)
|  |  |  |  |  |  term)
|  |  |  |  |  simple_exp)
|  |  |  |  expression)
|  |  |  assignment_stmt)
|  |  |  (write_stmt ( 'hi' )
|  |  |  write_stmt)
|  |  compound_stmt)
|  block)
program)

hi
0
";
    assert_eq!(output, expected);
}

#[test]
fn test_symbol_dump() {
    let options = RunOptions {
        print_symbols: true,
        ..RunOptions::default()
    };
    let (result, output) = run_with(
        "PROGRAM p; VAR count : INTEGER; avg : REAL;
         BEGIN read(count); avg := count / 3 END",
        "2",
        options,
    );

    assert!(result.is_ok());
    assert!(output.ends_with(
        "0.666667\n\n\n*** User Defined Symbols ***\navg: 0.666667\ncount: 2.000000\n"
    ));
}
