#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tryscan::{Case, CharSet, Identifier, Precedence, Scanner, ScannerOptions};

const LITERALS: &[&str] = &["key", "keyword", "e", "-", "0x", "true", "inf", ":"];

#[derive(Debug, Arbitrary)]
enum Op {
    Char(u8),
    Run(u8),
    UpTo(u8),
    Literal(u8, bool),
    AnyToken(bool),
    Mapped,
    Whitespace,
    Unsigned,
    Signed,
    Hexadecimal,
    Float,
    Identifier,
    Bool,
    Many,
    Finish,
}

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    longest: bool,
    unicode_whitespace: bool,
    ops: Vec<Op>,
}

fn set(index: u8) -> CharSet {
    match index % 4 {
        0 => CharSet::decimal_digits(),
        1 => CharSet::hexadecimal_digits(),
        2 => CharSet::whitespace(),
        _ => CharSet::identifier_continue(),
    }
}

fn case(insensitive: bool) -> Case {
    if insensitive { Case::Insensitive } else { Case::Sensitive }
}

/// Runs `op`, returning whether it matched.
fn apply(op: &Op, s: &mut Scanner) -> bool {
    match *op {
        Op::Char(i) => s.match_char(&set(i)).is_some(),
        Op::Run(i) => s.match_run(&set(i)).is_some(),
        Op::UpTo(i) => s.match_up_to(&set(i)).is_some(),
        Op::Literal(i, insensitive) => {
            let text = LITERALS[usize::from(i) % LITERALS.len()];
            s.match_literal(text, case(insensitive)).is_some()
        }
        Op::AnyToken(insensitive) => s.match_any_token(LITERALS, case(insensitive)).is_some(),
        Op::Mapped => s
            .match_mapped(&[("k", 1), ("key", 2), ("keyword", 3)], Case::Insensitive)
            .is_some(),
        Op::Whitespace => {
            s.match_whitespace();
            true
        }
        Op::Unsigned => s.scan_unsigned::<u32>().is_some(),
        Op::Signed => s.scan_signed::<i16>().is_some(),
        Op::Hexadecimal => s.scan_hexadecimal::<u64>().is_some(),
        Op::Float => s.scan_float::<f64>().is_some(),
        Op::Identifier => s.parse::<Identifier>().is_some(),
        Op::Bool => s.parse::<bool>().is_some(),
        Op::Many => s.parse_many::<i64>().is_some(),
        Op::Finish => s.finish().is_ok(),
    }
}

fuzz_target!(|input: Input| {
    let options = ScannerOptions {
        allow_unicode_whitespace: input.unicode_whitespace,
        precedence: if input.longest { Precedence::LongestMatch } else { Precedence::FirstListed },
    };
    let mut s = Scanner::with_options(&input.text, options);
    let len = input.text.chars().count();
    for op in &input.ops {
        let before = s.position();
        let matched = apply(op, &mut s);
        let after = s.position();
        assert!(after <= len && after >= before, "{op:?} moved {before} -> {after}");
        if !matched {
            assert_eq!(before, after, "{op:?} failed but moved the cursor");
        }
    }
});
