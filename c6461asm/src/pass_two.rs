use log::debug;

use crate::{
    encoder::encode,
    error::AsmError,
    labels::Resolver,
    line::LineKind,
    pass_one::{origin, LocationCounter, PassOne},
    record::Record,
    AssemblerOptions,
};

/// Walk the lines again with a fresh counter, encoding every statement.
pub fn pass_two(pass_one: &PassOne, options: &AssemblerOptions) -> Result<Vec<Record>, AsmError> {
    let resolver = Resolver::new(&pass_one.symbols, options.unresolved);
    let mut counter = LocationCounter::default();
    let mut records = Vec::new();

    for line in pass_one.lines.iter() {
        let line_no = line.source.line_no;
        let statement = match line.source.kind {
            LineKind::Origin(ref tokens) => {
                counter.set(origin(tokens, line_no)?);
                continue;
            }
            LineKind::LabelDef { ref statement, .. } => statement.as_ref(),
            LineKind::Statement(ref statement) => Some(statement),
        };

        let address = counter.occupy(line_no)?;
        debug_assert_eq!(Some(address), line.address, "passes disagree on line {}", line_no);

        if let Some(statement) = statement {
            let word = encode(statement, &resolver, line_no)?;
            records.push(Record {
                address,
                word,
                text: line.source.text.clone(),
            });
        }
    }

    debug!("pass two: {} words", records.len());

    Ok(records)
}
