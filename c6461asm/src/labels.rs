use indexmap::IndexMap;
use log::{debug, warn};

use crate::{constants::symbol_regex, error::AsmError};

/// Label name to address. Filled by pass one, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    labels: IndexMap<String, u16>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            labels: IndexMap::new(),
        }
    }

    /// A later definition of the same label replaces the earlier one.
    pub fn add(&mut self, key: String, value: u16) {
        if let Some(previous) = self.labels.get(&key) {
            debug!("label {} redefined, {:06o} -> {:06o}", key, previous, value);
        }
        self.labels.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<u16> {
        self.labels.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> + '_ {
        self.labels.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// What to do with a reference to a label that was never defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnresolvedPolicy {
    /// Assemble it as address 0 and log a warning.
    #[default]
    Zero,
    Error,
}

/// Decimal literal operand.
pub fn parse_literal(token: &str, line: usize) -> Result<i64, AsmError> {
    token.parse::<i64>().map_err(|_| AsmError::InvalidOperand {
        line,
        token: token.to_owned(),
    })
}

pub struct Resolver<'a> {
    symbols: &'a SymbolTable,
    policy: UnresolvedPolicy,
}

impl<'a> Resolver<'a> {
    pub fn new(symbols: &'a SymbolTable, policy: UnresolvedPolicy) -> Self {
        Self { symbols, policy }
    }

    /// An all-letter token is a label, anything else must be a decimal literal.
    pub fn resolve(&self, token: &str, line: usize) -> Result<i64, AsmError> {
        if !symbol_regex().is_match(token) {
            return parse_literal(token, line);
        }

        match (self.symbols.get(token), self.policy) {
            (Some(address), _) => Ok(address.into()),
            (None, UnresolvedPolicy::Zero) => {
                warn!("line {}: undefined symbol {}, assembling as 0", line, token);
                Ok(0)
            }
            (None, UnresolvedPolicy::Error) => Err(AsmError::UnresolvedSymbol {
                line,
                symbol: token.to_owned(),
            }),
        }
    }
}
