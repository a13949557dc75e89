//! Selection parser.
//!
//! Turns a raw `row,col` line typed by a human player into a pair of
//! integers. Whitespace is allowed around each number but not inside it.
//! Range checks happen later, against the board.

use std::num::IntErrorKind;

/// Parses `"row,col"` into two integers.
///
/// Returns `None` unless the line holds exactly two comma-separated
/// integers. A number too large for `i64` saturates, so it is still
/// reported as off the board rather than as malformed.
pub fn parse_coordinates(line: &str) -> Option<(i64, i64)> {
    let mut parts = line.split(',');

    let row = parse_number(parts.next()?)?;
    let col = parse_number(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

fn parse_number(field: &str) -> Option<i64> {
    match field.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
