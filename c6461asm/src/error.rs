use libc6461::FieldError;
use thiserror::Error;

/// Everything that can stop an assembly. `line` is the 1-based line in the
/// source file, blank and comment lines included.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    #[error("line {line}: invalid instruction {mnemonic}")]
    InvalidMnemonic { line: usize, mnemonic: String },
    #[error("line {line}: invalid operand {token}")]
    InvalidOperand { line: usize, token: String },
    #[error("line {line}: missing operand {index}")]
    MissingOperand { line: usize, index: usize },
    #[error("line {line}: {source}")]
    FieldOverflow { line: usize, source: FieldError },
    #[error("line {line}: undefined symbol {symbol}")]
    UnresolvedSymbol { line: usize, symbol: String },
    #[error("line {line}: location counter ran past 177777")]
    AddressOverflow { line: usize },
}
