use std::collections::BTreeMap;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Maps each declared identifier to its current value.
///
/// Declared types are not kept: every value is an `f64`.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    variable_lookup: BTreeMap<String, f64>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            variable_lookup: BTreeMap::new(),
        }
    }

    /// Inserts `name` with the value `0.0`.
    pub fn declare(&mut self, name: &str, current_position: Position) -> Result<(), Error> {
        if self.variable_lookup.contains_key(name) {
            Err(Error::with_lexeme(
                ErrorImpl::DuplicateDeclaration { name: name.to_string() },
                current_position,
                name,
            ))
        } else {
            self.variable_lookup.insert(name.to_string(), 0.0);
            Ok(())
        }
    }

    /// Mutable access to the value stored for `name`.
    pub fn lookup(&mut self, name: &str, current_position: Position) -> Result<&mut f64, Error> {
        self.variable_lookup
            .get_mut(name)
            .ok_or_else(|| undeclared(name, current_position))
    }

    /// Fails unless `name` has been declared.
    pub fn ensure_declared(&self, name: &str, current_position: Position) -> Result<(), Error> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(undeclared(name, current_position))
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.variable_lookup.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variable_lookup.contains_key(name)
    }

    /// Declared names and their values, in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variable_lookup
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }

    /// One `name: value` line per identifier, values with six decimals.
    pub fn dump(&self) -> Vec<String> {
        self.iter()
            .map(|(name, value)| format!("{}: {:.6}", name, value))
            .collect()
    }
}

fn undeclared(name: &str, current_position: Position) -> Error {
    Error::with_lexeme(
        ErrorImpl::UndeclaredIdentifier { name: name.to_string() },
        current_position,
        name,
    )
}
