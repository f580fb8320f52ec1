use std::fmt::Display;

use libc6461::OctalExt;

/// One assembled word and the source line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub address: u16,
    pub word: u16,
    pub text: String,
}

impl Record {
    pub fn object_line(&self) -> String {
        format!("{} {}", self.address.to_octal(), self.word.to_octal())
    }
}

/// The listing line: address, word, original source text.
impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.address.to_octal(),
            self.word.to_octal(),
            self.text
        )
    }
}
