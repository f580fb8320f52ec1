use log::debug;

use crate::{
    error::AsmError,
    labels::{parse_literal, SymbolTable},
    line::{LineKind, SourceLine},
};

/// Running address cursor. Both passes start a fresh one at 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationCounter {
    current: u32,
}

impl LocationCounter {
    pub fn set(&mut self, address: u16) {
        self.current = address.into();
    }

    /// Hand out the current address and move past it.
    pub fn occupy(&mut self, line: usize) -> Result<u16, AsmError> {
        let address =
            u16::try_from(self.current).map_err(|_| AsmError::AddressOverflow { line })?;
        self.current += 1;
        Ok(address)
    }
}

/// The `LOC` operand, a decimal literal.
pub fn origin(tokens: &[String], line: usize) -> Result<u16, AsmError> {
    let token = tokens
        .get(1)
        .ok_or(AsmError::MissingOperand { line, index: 1 })?;
    let address = parse_literal(token, line)?;
    u16::try_from(address).map_err(|_| AsmError::InvalidOperand {
        line,
        token: token.clone(),
    })
}

#[derive(Debug, Clone)]
pub struct ParsedLine {
    pub source: SourceLine,
    /// Where pass one put this line. `None` for origin directives.
    pub address: Option<u16>,
}

#[derive(Debug, Clone)]
pub struct PassOne {
    pub lines: Vec<ParsedLine>,
    pub symbols: SymbolTable,
}

struct FirstPass {
    counter: LocationCounter,
    symbols: SymbolTable,
}

impl FirstPass {
    fn new() -> Self {
        Self {
            counter: LocationCounter::default(),
            symbols: SymbolTable::new(),
        }
    }

    fn parse_line(&mut self, line: &SourceLine) -> Result<Option<u16>, AsmError> {
        match line.kind {
            LineKind::Origin(ref tokens) => {
                self.counter.set(origin(tokens, line.line_no)?);
                Ok(None)
            }
            LineKind::LabelDef { ref label, .. } => {
                let address = self.counter.occupy(line.line_no)?;
                debug!("label {} = {:06o}", label, address);
                self.symbols.add(label.clone(), address);
                Ok(Some(address))
            }
            LineKind::Statement(_) => Ok(Some(self.counter.occupy(line.line_no)?)),
        }
    }
}

/// Walk the classified lines once, assigning addresses and collecting labels.
pub fn pass_one(lines: Vec<SourceLine>) -> Result<PassOne, AsmError> {
    let mut pass = FirstPass::new();
    let mut parsed = Vec::with_capacity(lines.len());

    for source in lines {
        let address = pass.parse_line(&source)?;
        parsed.push(ParsedLine { source, address });
    }

    debug!(
        "pass one: {} lines, {} labels",
        parsed.len(),
        pass.symbols.len()
    );

    Ok(PassOne {
        lines: parsed,
        symbols: pass.symbols,
    })
}
