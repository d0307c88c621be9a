#![allow(missing_docs, dead_code)]

use serde::Serialize;
use tryscan::{Case, ScanError, Scannable, Scanner};

pub const DOUBLING: &str = "func doubling(value: Float) -> Float {\n    return value * 2\n}\n";

const KEYWORDS: &[&str] = &["func", "return", "let", "if", "else"];

// "->" must be tried before "-".
const PUNCTUATION: &[&str] = &["->", "(", ")", "{", "}", ":", ",", "*", "+", "-", "=", "/"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Kind {
    Keyword,
    Identifier,
    Integer,
    Float,
    Punct,
}

impl Kind {
    pub fn label(self) -> &'static str {
        match self {
            Kind::Keyword => "keyword",
            Kind::Identifier => "identifier",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Punct => "punct",
        }
    }
}

/// A token of a tiny function-definition language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: Kind,
    pub text: String,
    pub start: usize,
}

impl Scannable for Token {
    fn try_parse(scanner: &mut Scanner) -> Option<Self> {
        scanner.match_whitespace();
        let start = scanner.save();
        let kind = if let Some(word) = scanner.scan_identifier() {
            if KEYWORDS.contains(&word.as_str()) {
                Kind::Keyword
            } else {
                Kind::Identifier
            }
        } else if scanner.match_any_literal(PUNCTUATION, Case::Sensitive).is_some() {
            Kind::Punct
        } else {
            number_kind(scanner)?
        };
        Some(Token {
            kind,
            text: scanner.text_since(start),
            start: start.position(),
        })
    }
}

fn number_kind(scanner: &mut Scanner) -> Option<Kind> {
    let start = scanner.save();
    if scanner.scan_float::<f64>().is_some() && scanner.text_since(start).contains(['.', 'e', 'E'])
    {
        return Some(Kind::Float);
    }
    scanner.restore(start);
    scanner.scan_unsigned::<u64>().map(|_| Kind::Integer)
}

pub fn lex(source: &str) -> Result<Vec<Token>, ScanError> {
    let mut scanner = Scanner::new(source);
    let tokens = scanner.parse_many::<Token>().unwrap_or_default();
    scanner.finish()?;
    Ok(tokens)
}

/// One token per line: kind, start offset, text.
pub fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{:<10} {:>3} {}", t.kind.label(), t.start, t.text))
        .collect::<Vec<_>>()
        .join("\n")
}
