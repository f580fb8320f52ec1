use libc6461::{
    word::{fit, ADDRESS_BITS, IX_BITS, R_BITS},
    FieldError, InstructionWord, Mnemonic, Shape,
};

use crate::{
    error::AsmError,
    labels::{parse_literal, Resolver},
    line::Statement,
};

/// Rotate count bits that fit in the address field once shifted up by one.
const COUNT_BITS: u32 = 4;
/// L/R and A/L bits of a rotate: right, logical.
const ROTATE_RIGHT_LOGICAL: i64 = 0b1000;

struct Operands<'a> {
    tokens: &'a [String],
    line: usize,
}

impl<'a> Operands<'a> {
    fn token(&self, index: usize) -> Result<&'a str, AsmError> {
        self.optional(index).ok_or(AsmError::MissingOperand {
            line: self.line,
            index,
        })
    }

    fn optional(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).map(String::as_str)
    }

    fn field(&self, field: &'static str, value: i64, bits: u32) -> Result<u8, AsmError> {
        fit(field, value, bits)
            .map(|v| v as u8)
            .map_err(|source| AsmError::FieldOverflow {
                line: self.line,
                source,
            })
    }

    /// Register-style operand: always a decimal literal.
    fn literal(&self, index: usize, field: &'static str, bits: u32) -> Result<u8, AsmError> {
        let value = parse_literal(self.token(index)?, self.line)?;
        self.field(field, value, bits)
    }

    fn address(&self, index: usize, resolver: &Resolver) -> Result<u8, AsmError> {
        let value = resolver.resolve(self.token(index)?, self.line)?;
        self.field("address", value, ADDRESS_BITS)
    }
}

/// Encode one memory-occupying statement into its 16 bit word.
pub fn encode(statement: &Statement, resolver: &Resolver, line: usize) -> Result<u16, AsmError> {
    let operands = Operands {
        tokens: statement.tokens(),
        line,
    };
    match statement {
        Statement::Data(_) => encode_data(&operands, resolver),
        Statement::Instruction(_) => encode_instruction(&operands, resolver),
    }
}

fn encode_data(operands: &Operands, resolver: &Resolver) -> Result<u16, AsmError> {
    let value = resolver.resolve(operands.token(1)?, operands.line)?;
    match value {
        0..=0xFFFF => Ok(value as u16),
        -0x8000..=-1 => Ok(value as i16 as u16),
        _ => Err(AsmError::FieldOverflow {
            line: operands.line,
            source: FieldError::Overflow {
                field: "data",
                value,
                bits: 16,
            },
        }),
    }
}

fn encode_instruction(operands: &Operands, resolver: &Resolver) -> Result<u16, AsmError> {
    let text = operands.token(0)?;
    let mnemonic = Mnemonic::lookup(text).ok_or_else(|| AsmError::InvalidMnemonic {
        line: operands.line,
        mnemonic: text.to_owned(),
    })?;

    let word = InstructionWord::new(mnemonic.opcode());
    let word = match mnemonic.shape() {
        Shape::RegisterIndexed => register_indexed(word, operands, resolver)?,
        Shape::RegisterMemory => register_memory(word, operands, resolver)?,
        Shape::Rotate => rotate(word, operands)?,
        Shape::IndexMemory => index_memory(word, operands, resolver)?,
        Shape::Halt | Shape::OpcodeOnly => word,
    };

    word.pack().map_err(|source| AsmError::FieldOverflow {
        line: operands.line,
        source,
    })
}

fn register_indexed(
    word: InstructionWord,
    operands: &Operands,
    resolver: &Resolver,
) -> Result<InstructionWord, AsmError> {
    let ix = match operands.optional(2) {
        Some(_) => operands.literal(2, "ix", IX_BITS)?,
        None => 0,
    };
    Ok(InstructionWord {
        r: operands.literal(1, "r", R_BITS)?,
        ix,
        address: operands.address(3, resolver)?,
        i: u8::from(operands.optional(4) == Some("1")),
        ..word
    })
}

fn register_memory(
    word: InstructionWord,
    operands: &Operands,
    resolver: &Resolver,
) -> Result<InstructionWord, AsmError> {
    Ok(InstructionWord {
        r: operands.literal(1, "r", R_BITS)?,
        ix: operands.literal(2, "ix", IX_BITS)?,
        address: operands.address(3, resolver)?,
        ..word
    })
}

fn rotate(word: InstructionWord, operands: &Operands) -> Result<InstructionWord, AsmError> {
    let count = parse_literal(operands.token(2)?, operands.line)?;
    let count = i64::from(operands.field("count", count, COUNT_BITS)?);
    Ok(InstructionWord {
        r: operands.literal(1, "r", R_BITS)?,
        address: operands.field("address", (count << 1) | ROTATE_RIGHT_LOGICAL, ADDRESS_BITS)?,
        ..word
    })
}

fn index_memory(
    word: InstructionWord,
    operands: &Operands,
    resolver: &Resolver,
) -> Result<InstructionWord, AsmError> {
    Ok(InstructionWord {
        ix: operands.literal(1, "ix", IX_BITS)?,
        address: operands.address(2, resolver)?,
        i: u8::from(operands.optional(3) == Some("I")),
        ..word
    })
}

#[cfg(test)]
mod tests {
    use libc6461::OctalExt;

    use super::*;
    use crate::labels::{SymbolTable, UnresolvedPolicy};
    use crate::line::tokenize;

    fn symbols() -> SymbolTable {
        let mut symbols = SymbolTable::new();
        symbols.add("LOOP".into(), 6);
        symbols.add("End".into(), 31);
        symbols
    }

    fn encode_text(text: &str) -> Result<u16, AsmError> {
        let symbols = symbols();
        let resolver = Resolver::new(&symbols, UnresolvedPolicy::Zero);
        let tokens = tokenize(text);
        let statement = if tokens[0] == "Data" {
            Statement::Data(tokens)
        } else {
            Statement::Instruction(tokens)
        };
        encode(&statement, &resolver, 1)
    }

    fn octal(text: &str) -> String {
        encode_text(text).unwrap().to_octal()
    }

    #[test]
    fn register_memory_group() {
        assert_eq!(octal("ADD 1,2,10"), "010612");
        assert_eq!(octal("SUB 3,0,LOOP"), "013406");
        assert_eq!(octal("AND 0,1,End"), "166137");
        assert_eq!(octal("OR 2,3,0"), "171300");
    }

    #[test]
    fn aliases_encode_identically() {
        for (alias, canonical) in [("ADD", "AMR"), ("SUB", "SMR"), ("OR", "ORR")] {
            for operands in ["1,2,10", "0,0,LOOP", "3,3,31"] {
                assert_eq!(
                    encode_text(&format!("{} {}", alias, operands)),
                    encode_text(&format!("{} {}", canonical, operands)),
                );
            }
        }
    }

    #[test]
    fn register_indexed_group() {
        assert_eq!(octal("LDR 3,0,10"), "003412");
        assert_eq!(octal("LDR 3,0,10,1"), "003452");
        assert_eq!(octal("STR 0,1,End"), "004137");
        assert_eq!(octal("LDA 2,2,LOOP,0"), "007206");
        assert_eq!(octal("JZ 0,0,LOOP"), "020006");
        assert_eq!(octal("JNE 1 3 4 1"), "022744");
        // Anything but a literal 1 leaves the indirect bit clear
        assert_eq!(octal("LDR 3,0,10,I"), "003412");
    }

    #[test]
    fn rotate_folds_count_into_address() {
        // count 3: (3 << 1) | 0b1000 = 0b01110
        assert_eq!(octal("RRC 1,3"), "064416");
        assert_eq!(octal("RRC 0,0"), "064010");
        assert_eq!(
            encode_text("RRC 1,16"),
            Err(AsmError::FieldOverflow {
                line: 1,
                source: FieldError::Overflow {
                    field: "count",
                    value: 16,
                    bits: 4
                }
            })
        );
    }

    #[test]
    fn index_memory_group() {
        assert_eq!(octal("LDX 2,7"), "102207");
        assert_eq!(octal("LDX 2,7,I"), "102247");
        assert_eq!(octal("STX 1,LOOP"), "104106");
        // Only an upper case I marks indirect
        assert_eq!(octal("STX 1,LOOP,1"), "104106");
    }

    #[test]
    fn halt_and_fallback() {
        assert_eq!(octal("HLT"), "000000");
        assert_eq!(octal("HLT 1,2,3"), "000000");
        assert_eq!(octal("AIR 1,2,3"), "014000");
        assert_eq!(octal("TRAP 5"), "140000");
    }

    #[test]
    fn mnemonics_ignore_case() {
        assert_eq!(octal("add 1,2,10"), "010612");
        assert_eq!(octal("Ldx 2,7"), "102207");
    }

    #[test]
    fn data_words() {
        assert_eq!(octal("Data 7"), "000007");
        assert_eq!(octal("Data LOOP"), "000006");
        assert_eq!(octal("Data 65535"), "177777");
        assert_eq!(octal("Data -1"), "177777");
        assert_eq!(octal("Data UNDEF"), "000000");
        assert!(matches!(
            encode_text("Data 65536"),
            Err(AsmError::FieldOverflow { .. })
        ));
        assert_eq!(
            encode_text("Data"),
            Err(AsmError::MissingOperand { line: 1, index: 1 })
        );
    }

    #[test]
    fn undefined_symbol_assembles_as_zero() {
        assert_eq!(octal("ADD 1,2,UNDEF"), "010600");
    }

    #[test]
    fn errors() {
        assert_eq!(
            encode_text("FOO 1,2,3"),
            Err(AsmError::InvalidMnemonic {
                line: 1,
                mnemonic: "FOO".into()
            })
        );
        assert_eq!(
            encode_text("ADD 1,2"),
            Err(AsmError::MissingOperand { line: 1, index: 3 })
        );
        assert_eq!(
            encode_text("LDR 1"),
            Err(AsmError::MissingOperand { line: 1, index: 3 })
        );
        assert_eq!(
            encode_text("ADD R1,2,3"),
            Err(AsmError::InvalidOperand {
                line: 1,
                token: "R1".into()
            })
        );
        assert_eq!(
            encode_text("LDR 3,0,1a"),
            Err(AsmError::InvalidOperand {
                line: 1,
                token: "1a".into()
            })
        );
        assert_eq!(
            encode_text("LDR 4,0,10"),
            Err(AsmError::FieldOverflow {
                line: 1,
                source: FieldError::Overflow {
                    field: "r",
                    value: 4,
                    bits: 2
                }
            })
        );
        assert!(matches!(
            encode_text("LDR 0,0,32"),
            Err(AsmError::FieldOverflow { .. })
        ));
    }
}
