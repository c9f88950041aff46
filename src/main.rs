use std::{
    fs::read_to_string,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use minipas::{format_error, run_source, RunOptions};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Interpreter for a small Pascal-like teaching language",
    long_about = "Interpreter for a small Pascal-like teaching language.\n\
                 Parses the whole program, checking that every identifier is declared,\n\
                 then runs it with READ and WRITE bound to standard input and output.\n\
                 \n\
                 Example usage:\n\
                 minipas demo.pas          # Parse and run\n\
                 minipas demo.pas -p       # Echo the parse trace\n\
                 minipas demo.pas -t -s    # Dump the program tree and final symbols"
)]
struct Cli {
    // The program to run
    path: PathBuf,

    // Echo the parser's production trace
    #[arg(short = 'p', long)]
    print_parse: bool,

    // Dump the program tree after parsing
    #[arg(short = 't', long)]
    print_tree: bool,

    // Dump every declared identifier after the run
    #[arg(short = 's', long)]
    print_symbols: bool,
}

impl From<&Cli> for RunOptions {
    fn from(cli: &Cli) -> Self {
        RunOptions {
            print_parse: cli.print_parse,
            print_tree: cli.print_tree,
            print_symbols: cli.print_symbols,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    println!("INFO: Using the {} file for input", cli.path.display());

    let Ok(source) = read_to_string(&cli.path) else {
        println!("ERROR: input file not found");
        return ExitCode::FAILURE;
    };

    let file_name = cli
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.path.display().to_string());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let result = run_source(
        &source,
        &file_name,
        RunOptions::from(&cli),
        &mut input,
        &mut output,
    );
    let _ = output.flush();

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            print!("\n{}", format_error(&error, &source));
            ExitCode::FAILURE
        }
    }
}
