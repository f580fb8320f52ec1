use once_cell::sync::OnceCell;
use regex::Regex;

/// The object stream always lands here, relative to the working directory.
pub const OBJECT_FILE_NAME: &str = "output.obj";

pub const ORIGIN_DIRECTIVE: &str = "LOC";
pub const DATA_DIRECTIVE: &str = "Data";
pub const COMMENT_PREFIX: char = ';';
pub const LABEL_SUFFIX: char = ':';

pub static SEPARATOR_REGEX: OnceCell<Regex> = OnceCell::new();
pub static SYMBOL_REGEX: OnceCell<Regex> = OnceCell::new();

pub fn separator_regex() -> &'static Regex {
    SEPARATOR_REGEX.get_or_init(|| Regex::new(r"[,\s]+").expect("Invalid separator regex"))
}

pub fn symbol_regex() -> &'static Regex {
    SYMBOL_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z]+$").expect("Invalid symbol regex"))
}
