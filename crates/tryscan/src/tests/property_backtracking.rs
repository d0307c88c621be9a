use alloc::{string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen, QuickCheck};

use super::utils::quickcheck_tests;
use crate::{Case, CharSet, Identifier, Precedence, Scanner, ScannerOptions};

/// Fragments that line up with what the matchers look for, so generated
/// inputs hit partial matches often instead of failing on the first char.
const PIECES: &[&str] = &[
    "12", "007", "-", "+", ".", "e", "E", "e-", "ff", "0x", "abc", "_x9", "key", "keyword", " ",
    "\t", "\n", "inf", "NaN", "true", "FALSE", ":", "é", "\u{3000}", "1.5e", "9999999999999999999999",
];

const LITERALS: &[&str] = &["key", "keyword", "e", "-", "0x", "true", ":", "12", "abc", "inf", ""];

fn sets() -> [CharSet; 4] {
    [
        CharSet::decimal_digits(),
        CharSet::hexadecimal_digits(),
        CharSet::from_chars(" :"),
        CharSet::identifier_start(),
    ]
}

#[derive(Debug, Clone)]
struct Source(String);

impl Arbitrary for Source {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 12;
        let mut text = String::new();
        for _ in 0..len {
            text.push_str(g.choose(PIECES).copied().unwrap_or_default());
        }
        Source(text)
    }
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Char(usize),
    Run(usize),
    UpTo(usize),
    Literal(usize, bool),
    AnyLiteral(bool),
    Token(usize),
    Mapped,
    Whitespace,
    Unsigned8,
    Unsigned64,
    Signed8,
    Signed64,
    Hexadecimal,
    Float32,
    Float64,
    Identifier,
    Bool,
    ManyIntegers,
    ManyIdentifiers,
    Finish,
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        let set = usize::arbitrary(g) % 4;
        let literal = usize::arbitrary(g) % LITERALS.len();
        match u8::arbitrary(g) % 20 {
            0 => Op::Char(set),
            1 => Op::Run(set),
            2 => Op::UpTo(set),
            3 => Op::Literal(literal, bool::arbitrary(g)),
            4 => Op::AnyLiteral(bool::arbitrary(g)),
            5 => Op::Token(literal),
            6 => Op::Mapped,
            7 => Op::Whitespace,
            8 => Op::Unsigned8,
            9 => Op::Unsigned64,
            10 => Op::Signed8,
            11 => Op::Signed64,
            12 => Op::Hexadecimal,
            13 => Op::Float32,
            14 => Op::Float64,
            15 => Op::Identifier,
            16 => Op::Bool,
            17 => Op::ManyIntegers,
            18 => Op::ManyIdentifiers,
            _ => Op::Finish,
        }
    }
}

fn case(insensitive: bool) -> Case {
    if insensitive { Case::Insensitive } else { Case::Sensitive }
}

/// Runs `op` and reports whether it matched.
fn apply(op: Op, s: &mut Scanner) -> bool {
    let sets = sets();
    match op {
        Op::Char(i) => s.match_char(&sets[i]).is_some(),
        Op::Run(i) => s.match_run(&sets[i]).is_some(),
        Op::UpTo(i) => s.match_up_to(&sets[i]).is_some(),
        Op::Literal(i, insensitive) => s.match_literal(LITERALS[i], case(insensitive)).is_some(),
        Op::AnyLiteral(insensitive) => s.match_any_literal(LITERALS, case(insensitive)).is_some(),
        Op::Token(i) => s.match_token(LITERALS[i], Case::Sensitive).is_some(),
        Op::Mapped => s
            .match_mapped(&[("k", 1), ("key", 2), ("keyword", 3), ("e", 4)], Case::Insensitive)
            .is_some(),
        Op::Whitespace => {
            s.match_whitespace();
            true
        }
        Op::Unsigned8 => s.scan_unsigned::<u8>().is_some(),
        Op::Unsigned64 => s.scan_unsigned::<u64>().is_some(),
        Op::Signed8 => s.scan_signed::<i8>().is_some(),
        Op::Signed64 => s.scan_signed::<i64>().is_some(),
        Op::Hexadecimal => s.scan_hexadecimal::<u16>().is_some(),
        Op::Float32 => s.scan_float::<f32>().is_some(),
        Op::Float64 => s.scan_float::<f64>().is_some(),
        Op::Identifier => s.scan_identifier().is_some(),
        Op::Bool => s.parse::<bool>().is_some(),
        Op::ManyIntegers => s.parse_many::<i32>().is_some(),
        Op::ManyIdentifiers => s.parse_many::<Identifier>().is_some(),
        Op::Finish => s.finish().is_ok(),
    }
}

/// Property: a matcher that fails leaves the cursor where it was, and a
/// matcher that succeeds never moves it backwards or past the end.
#[test]
fn failed_matches_never_move_the_cursor() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(source: Source, ops: Vec<Op>, longest: bool, unicode_whitespace: bool) -> bool {
        let options = ScannerOptions {
            allow_unicode_whitespace: unicode_whitespace,
            precedence: if longest { Precedence::LongestMatch } else { Precedence::FirstListed },
        };
        let mut s = Scanner::with_options(&source.0, options);
        let len = source.0.chars().count();
        for op in ops {
            let before = s.position();
            let matched = apply(op, &mut s);
            let after = s.position();
            if after > len || (!matched && after != before) || after < before {
                return false;
            }
        }
        true
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Source, Vec<Op>, bool, bool) -> bool);
}

/// Property: every matcher fails on exhausted input without moving.
#[test]
fn exhausted_input_never_matches() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(source: Source, op: Op) -> bool {
        let mut s = Scanner::new(&source.0);
        while s.cursor().peek().is_some() {
            s.match_up_to(&CharSet::new());
        }
        let end = s.position();
        let matched = apply(op, &mut s);
        let trivially_ok = matches!(op, Op::Whitespace | Op::Finish);
        s.position() == end && (trivially_ok || !matched)
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Source, Op) -> bool);
}
