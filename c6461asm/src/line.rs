use crate::constants::{
    separator_regex, COMMENT_PREFIX, DATA_DIRECTIVE, LABEL_SUFFIX, ORIGIN_DIRECTIVE,
};

/// Something that occupies a word of memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Data(Vec<String>),
    Instruction(Vec<String>),
}

impl Statement {
    fn new(tokens: Vec<String>) -> Self {
        if tokens.first().map(String::as_str) == Some(DATA_DIRECTIVE) {
            Statement::Data(tokens)
        } else {
            Statement::Instruction(tokens)
        }
    }

    pub fn tokens(&self) -> &[String] {
        match self {
            Statement::Data(tokens) | Statement::Instruction(tokens) => tokens,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `LOC <address>`
    Origin(Vec<String>),
    /// `label:` with whatever follows the colon on the same line.
    LabelDef {
        label: String,
        statement: Option<Statement>,
    },
    Statement(Statement),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub line_no: usize,
    /// Trimmed source text, as it appears in the listing.
    pub text: String,
    pub kind: LineKind,
}

pub fn tokenize(text: &str) -> Vec<String> {
    separator_regex()
        .split(text)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Classify one raw source line. Blank lines and comment lines give `None`.
pub fn classify(line_no: usize, raw: &str) -> Option<SourceLine> {
    let text = raw.trim();
    if text.is_empty() || text.starts_with(COMMENT_PREFIX) {
        return None;
    }

    // Trailing comments are kept in the listing but never tokenized
    let code = text
        .split_once(COMMENT_PREFIX)
        .map_or(text, |(code, _)| code)
        .trim();
    let tokens = tokenize(code);

    let kind = if tokens.first().map(String::as_str) == Some(ORIGIN_DIRECTIVE) {
        LineKind::Origin(tokens)
    } else if let Some((label, rest)) = code.split_once(LABEL_SUFFIX) {
        let rest = tokenize(rest);
        LineKind::LabelDef {
            label: label.trim().to_owned(),
            statement: (!rest.is_empty()).then(|| Statement::new(rest)),
        }
    } else {
        LineKind::Statement(Statement::new(tokens))
    };

    Some(SourceLine {
        line_no,
        text: text.to_owned(),
        kind,
    })
}

pub fn classify_program(program_text: &str) -> Vec<SourceLine> {
    program_text
        .lines()
        .enumerate()
        .filter_map(|(index, raw)| classify(index + 1, raw))
        .collect()
}
