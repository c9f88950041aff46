use std::io::{BufRead, Write};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    symbols::symbol_table::SymbolTable,
    Position,
};

use super::stmt::eval_compound;

/// Run-time state: the variables plus the program's input and output.
pub struct Interpreter<'a> {
    symbols: &'a mut SymbolTable,
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
    /// Start of the statement being executed, used to locate errors
    position: Position,
    /// Identifiers loaded so far, in order, when recording is on
    loads: Option<Vec<String>>,
}

impl<'a> Interpreter<'a> {
    pub fn new(
        symbols: &'a mut SymbolTable,
        input: &'a mut dyn BufRead,
        output: &'a mut dyn Write,
    ) -> Self {
        Interpreter {
            symbols,
            input,
            output,
            position: Position::null(),
            loads: None,
        }
    }

    /// Starts logging every variable read, see [`Interpreter::get_loads`].
    pub fn record_loads(&mut self) {
        self.loads = Some(vec![]);
    }

    pub fn get_loads(&self) -> &[String] {
        self.loads.as_deref().unwrap_or(&[])
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn load(&mut self, name: &str) -> Result<f64, Error> {
        if let Some(loads) = self.loads.as_mut() {
            loads.push(name.to_string());
        }

        self.symbols
            .lookup(name, self.position.clone())
            .map(|value| *value)
    }

    /// Stores `value` into `name` and returns it.
    pub fn store(&mut self, name: &str, value: f64) -> Result<f64, Error> {
        *self.symbols.lookup(name, self.position.clone())? = value;
        Ok(value)
    }

    pub fn write_line(&mut self, text: &str) -> Result<(), Error> {
        writeln!(self.output, "{}", text).map_err(|error| io_error(error, &self.position))
    }

    /// Reads the next whitespace-delimited word of input.
    ///
    /// Pending output is flushed first so prompts appear before blocking.
    pub fn read_word(&mut self) -> Result<String, Error> {
        let position = self.position.clone();
        self.output.flush().map_err(|error| io_error(error, &position))?;

        let mut word = vec![];
        loop {
            let buffer = self.input.fill_buf().map_err(|error| io_error(error, &position))?;
            if buffer.is_empty() {
                break;
            }

            let mut used = 0;
            let mut complete = false;
            for &byte in buffer {
                if byte.is_ascii_whitespace() {
                    if !word.is_empty() {
                        complete = true;
                        break;
                    }
                } else {
                    word.push(byte);
                }
                used += 1;
            }

            self.input.consume(used);
            if complete {
                break;
            }
        }

        if word.is_empty() {
            return Err(Error::new(ErrorImpl::EndOfInput, position));
        }
        Ok(String::from_utf8_lossy(&word).into_owned())
    }

    pub fn run(&mut self, program: &Program) -> Result<f64, Error> {
        self.set_position(program.span.start.clone());
        let result = eval_compound(self, &program.block.compound)?;

        self.output
            .flush()
            .map_err(|error| io_error(error, &self.position))?;
        Ok(result)
    }
}

fn io_error(error: std::io::Error, position: &Position) -> Error {
    Error::new(
        ErrorImpl::Io {
            message: error.to_string(),
        },
        position.clone(),
    )
}

/// Executes `program` and returns the value of its last statement.
pub fn interpret(
    program: &Program,
    symbols: &mut SymbolTable,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<f64, Error> {
    Interpreter::new(symbols, input, output).run(program)
}
