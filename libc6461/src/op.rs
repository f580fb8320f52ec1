use std::str::FromStr;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use strum_macros::{Display, EnumIter, EnumString};

/// The distinct 6-bit opcode patterns. The discriminant is the pattern itself.
#[allow(clippy::upper_case_acronyms)]
#[derive(FromPrimitive, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    HLT = 0o00,
    LDR = 0o01,
    STR = 0o02,
    LDA = 0o03,
    AMR = 0o04,
    SMR = 0o05,
    AIR = 0o06,
    SIR = 0o07,

    JZ = 0o10,
    JNE = 0o11,
    JCC = 0o12,
    JMA = 0o13,
    JSR = 0o14,
    RFS = 0o15,
    SOB = 0o16,
    JGE = 0o17,

    SRC = 0o31,
    RRC = 0o32,
    FADD = 0o33,
    FSUB = 0o34,
    VADD = 0o35,
    VSUB = 0o36,
    CNVRT = 0o37,

    LDX = 0o41,
    STX = 0o42,
    LDFR = 0o50,
    STFR = 0o51,

    TRAP = 0o60,
    IN = 0o61,
    OUT = 0o62,
    CHK = 0o63,

    MLT = 0o70,
    DVD = 0o71,
    TRR = 0o72,
    AND = 0o73,
    ORR = 0o74,
    NOT = 0o75,
}

impl Opcode {
    pub fn from_bits(bits: u8) -> Option<Self> {
        FromPrimitive::from_u8(bits)
    }

    pub fn bits(self) -> u8 {
        self as u8
    }
}

/// Which operand positions feed which instruction fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `r, ix, address[, 1]`: ix may be omitted, a trailing `1` sets the indirect bit.
    RegisterIndexed,
    /// `r, ix, address`, never indirect.
    RegisterMemory,
    /// `r, count`: the count is folded into the address field.
    Rotate,
    /// `ix, address[, I]`
    IndexMemory,
    Halt,
    /// Opcode bits only, every other field zero.
    OpcodeOnly,
}

/// Every mnemonic the assembler accepts, aliases included.
///
/// Parsing ignores ASCII case, so `add`, `Add` and `ADD` are the same
/// mnemonic. `ADD`/`AMR`, `SUB`/`SMR` and `OR`/`ORR` are aliases: same opcode,
/// same shape.
#[allow(clippy::upper_case_acronyms)]
#[derive(EnumString, Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum Mnemonic {
    LDR,
    STR,
    LDA,
    LDX,
    STX,

    JZ,
    JNE,
    JCC,
    JMA,
    JSR,
    RFS,
    SOB,
    JGE,

    AMR,
    SMR,
    AIR,
    SIR,
    MLT,
    DVD,
    TRR,
    AND,
    ORR,
    NOT,
    ADD,
    SUB,
    OR,

    SRC,
    RRC,

    IN,
    OUT,
    CHK,

    FADD,
    FSUB,
    VADD,
    VSUB,
    CNVRT,
    LDFR,
    STFR,

    HLT,
    TRAP,
}

impl Mnemonic {
    pub fn lookup(text: &str) -> Option<Self> {
        Self::from_str(text).ok()
    }

    pub fn opcode(self) -> Opcode {
        match self {
            Mnemonic::LDR => Opcode::LDR,
            Mnemonic::STR => Opcode::STR,
            Mnemonic::LDA => Opcode::LDA,
            Mnemonic::LDX => Opcode::LDX,
            Mnemonic::STX => Opcode::STX,

            Mnemonic::JZ => Opcode::JZ,
            Mnemonic::JNE => Opcode::JNE,
            Mnemonic::JCC => Opcode::JCC,
            Mnemonic::JMA => Opcode::JMA,
            Mnemonic::JSR => Opcode::JSR,
            Mnemonic::RFS => Opcode::RFS,
            Mnemonic::SOB => Opcode::SOB,
            Mnemonic::JGE => Opcode::JGE,

            Mnemonic::AMR | Mnemonic::ADD => Opcode::AMR,
            Mnemonic::SMR | Mnemonic::SUB => Opcode::SMR,
            Mnemonic::AIR => Opcode::AIR,
            Mnemonic::SIR => Opcode::SIR,
            Mnemonic::MLT => Opcode::MLT,
            Mnemonic::DVD => Opcode::DVD,
            Mnemonic::TRR => Opcode::TRR,
            Mnemonic::AND => Opcode::AND,
            Mnemonic::ORR | Mnemonic::OR => Opcode::ORR,
            Mnemonic::NOT => Opcode::NOT,

            Mnemonic::SRC => Opcode::SRC,
            Mnemonic::RRC => Opcode::RRC,

            Mnemonic::IN => Opcode::IN,
            Mnemonic::OUT => Opcode::OUT,
            Mnemonic::CHK => Opcode::CHK,

            Mnemonic::FADD => Opcode::FADD,
            Mnemonic::FSUB => Opcode::FSUB,
            Mnemonic::VADD => Opcode::VADD,
            Mnemonic::VSUB => Opcode::VSUB,
            Mnemonic::CNVRT => Opcode::CNVRT,
            Mnemonic::LDFR => Opcode::LDFR,
            Mnemonic::STFR => Opcode::STFR,

            Mnemonic::HLT => Opcode::HLT,
            Mnemonic::TRAP => Opcode::TRAP,
        }
    }

    pub fn shape(self) -> Shape {
        match self {
            Mnemonic::STR | Mnemonic::LDA | Mnemonic::JZ | Mnemonic::JNE | Mnemonic::LDR => {
                Shape::RegisterIndexed
            }
            Mnemonic::ADD
            | Mnemonic::AMR
            | Mnemonic::SUB
            | Mnemonic::SMR
            | Mnemonic::AND
            | Mnemonic::OR
            | Mnemonic::ORR => Shape::RegisterMemory,
            Mnemonic::RRC => Shape::Rotate,
            Mnemonic::LDX | Mnemonic::STX => Shape::IndexMemory,
            Mnemonic::HLT => Shape::Halt,
            Mnemonic::JCC
            | Mnemonic::JMA
            | Mnemonic::JSR
            | Mnemonic::RFS
            | Mnemonic::SOB
            | Mnemonic::JGE
            | Mnemonic::AIR
            | Mnemonic::SIR
            | Mnemonic::MLT
            | Mnemonic::DVD
            | Mnemonic::TRR
            | Mnemonic::NOT
            | Mnemonic::SRC
            | Mnemonic::IN
            | Mnemonic::OUT
            | Mnemonic::CHK
            | Mnemonic::FADD
            | Mnemonic::FSUB
            | Mnemonic::VADD
            | Mnemonic::VSUB
            | Mnemonic::CNVRT
            | Mnemonic::LDFR
            | Mnemonic::STFR
            | Mnemonic::TRAP => Shape::OpcodeOnly,
        }
    }
}
