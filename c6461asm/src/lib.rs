use pass_one::pass_one;
use pass_two::pass_two;

pub use constants::OBJECT_FILE_NAME;
pub use error::AsmError;
pub use labels::{SymbolTable, UnresolvedPolicy};
pub use record::Record;

mod constants;
mod encoder;
mod error;
mod labels;
mod line;
mod pass_one;
mod pass_two;
mod record;

#[derive(Debug, Clone, Copy, Default)]
pub struct AssemblerOptions {
    pub unresolved: UnresolvedPolicy,
}

/// An assembled program: one record per memory word, plus the labels pass
/// one found.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub records: Vec<Record>,
    pub symbols: SymbolTable,
}

impl Assembly {
    pub fn listing(&self) -> String {
        self.records
            .iter()
            .map(|record| format!("{}\n", record))
            .collect()
    }

    pub fn object(&self) -> String {
        self.records
            .iter()
            .map(|record| format!("{}\n", record.object_line()))
            .collect()
    }
}

/// Assemble a C6461 program from text.
///
/// # Errors
///
/// If there's an error in the assembly code
pub fn assemble_program(program_text: &str) -> Result<Assembly, AsmError> {
    assemble_with_options(program_text, AssemblerOptions::default())
}

pub fn assemble_with_options(
    program_text: &str,
    options: AssemblerOptions,
) -> Result<Assembly, AsmError> {
    let lines = line::classify_program(program_text);
    let pass_one = pass_one(lines)?;

    let records = pass_two(&pass_one, &options)?;

    Ok(Assembly {
        records,
        symbols: pass_one.symbols,
    })
}
