pub use op::{Mnemonic, Opcode, Shape};
pub use word::{FieldError, InstructionWord, OctalExt};

pub mod op;
pub mod word;
