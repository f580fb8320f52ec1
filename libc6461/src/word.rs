use thiserror::Error;

use crate::op::Opcode;

pub const OPCODE_BITS: u32 = 6;
pub const R_BITS: u32 = 2;
pub const IX_BITS: u32 = 2;
pub const I_BITS: u32 = 1;
pub const ADDRESS_BITS: u32 = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{value} doesn't fit in the {bits} bit {field} field")]
    Overflow {
        field: &'static str,
        value: i64,
        bits: u32,
    },
}

/// Check that `value` fits an unsigned field `bits` wide.
pub fn fit(field: &'static str, value: i64, bits: u32) -> Result<u16, FieldError> {
    if (0..1i64 << bits).contains(&value) {
        Ok(value as u16)
    } else {
        Err(FieldError::Overflow { field, value, bits })
    }
}

// A C6461 instruction word, most significant field first:
// ________________________________
// |  opcode  | r  | ix | i | addr |
// |    6     | 2  | 2  | 1 |  5   |
// --------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstructionWord {
    pub opcode: u8,
    pub r: u8,
    pub ix: u8,
    pub i: u8,
    pub address: u8,
}

impl InstructionWord {
    pub fn new(opcode: Opcode) -> Self {
        Self {
            opcode: opcode.bits(),
            ..Default::default()
        }
    }

    pub fn pack(&self) -> Result<u16, FieldError> {
        let opcode = fit("opcode", self.opcode.into(), OPCODE_BITS)?;
        let r = fit("r", self.r.into(), R_BITS)?;
        let ix = fit("ix", self.ix.into(), IX_BITS)?;
        let i = fit("i", self.i.into(), I_BITS)?;
        let address = fit("address", self.address.into(), ADDRESS_BITS)?;

        Ok(opcode << (R_BITS + IX_BITS + I_BITS + ADDRESS_BITS)
            | r << (IX_BITS + I_BITS + ADDRESS_BITS)
            | ix << (I_BITS + ADDRESS_BITS)
            | i << ADDRESS_BITS
            | address)
    }

    pub fn unpack(word: u16) -> Self {
        let mask = |bits: u32| (1u16 << bits) - 1;
        Self {
            opcode: (word >> (R_BITS + IX_BITS + I_BITS + ADDRESS_BITS)) as u8,
            r: ((word >> (IX_BITS + I_BITS + ADDRESS_BITS)) & mask(R_BITS)) as u8,
            ix: ((word >> (I_BITS + ADDRESS_BITS)) & mask(IX_BITS)) as u8,
            i: ((word >> ADDRESS_BITS) & mask(I_BITS)) as u8,
            address: (word & mask(ADDRESS_BITS)) as u8,
        }
    }

    /// The opcode this word decodes to, if the pattern is in the table.
    pub fn decoded_opcode(&self) -> Option<Opcode> {
        Opcode::from_bits(self.opcode)
    }
}

pub trait OctalExt {
    /// Six digit, zero padded octal.
    fn to_octal(&self) -> String;
}

impl OctalExt for u16 {
    fn to_octal(&self) -> String {
        format!("{:06o}", self)
    }
}
