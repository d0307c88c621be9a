//! Reads wall-clock times tagged with a time-zone abbreviation and converts
//! them to UTC.
//!
//! Each line looks like `JST 15:00`. Lines that do not parse are reported
//! with the character offset where scanning stopped.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=tryscan=trace cargo run -p tryscan --example clock_lexer
//! ```
//!
//! to watch the scanner backtrack through savepoints.

use tracing_subscriber::EnvFilter;
use tryscan::{Case, Scannable, Scanner, parse_str};

const ZONES: [(&str, i32); 5] = [("JST", 9), ("EST", -5), ("MST", -6), ("PST", -8), ("GMT", 0)];

#[derive(Debug, Clone, Copy)]
struct ZonedTime {
    offset: i32,
    hour: i32,
    minute: i32,
}

impl ZonedTime {
    fn utc(self) -> (i32, i32) {
        ((self.hour - self.offset).rem_euclid(24), self.minute)
    }
}

impl Scannable for ZonedTime {
    fn try_parse(scanner: &mut Scanner) -> Option<Self> {
        scanner.match_whitespace();
        let offset = scanner.match_mapped(&ZONES, Case::Insensitive)?;
        let hour = scanner.scan_signed()?;
        scanner.match_literal(":", Case::Sensitive)?;
        let minute = scanner.scan_unsigned::<u8>()?;
        ((0..24).contains(&hour) && minute < 60).then_some(ZonedTime {
            offset,
            hour,
            minute: i32::from(minute),
        })
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let lines = [
        "JST 15:00",
        "pst 07:30",
        "  GMT 23:59  ",
        "EST 25:00",
        "CET 12:00",
        "MST 8:15 pm",
    ];
    for line in lines {
        match parse_str::<ZonedTime>(line) {
            Ok(time) => {
                let (hour, minute) = time.utc();
                println!("{line:>16} -> {hour:02}:{minute:02} UTC");
            }
            Err(error) => println!("{line:>16} -> {error}"),
        }
    }
}
