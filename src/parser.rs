//! Line parsers for the three kinds of mission input line.
//!
//! Each parser validates one raw text line and converts it into a structured
//! value, or returns a descriptive [`ExpeditionError`]. Every pattern is
//! anchored at both ends: a line like `1 2 NN` is rejected outright rather
//! than matched as a prefix.

use crate::error::ExpeditionError;
use crate::orientation::{Heading, Instruction, Position};
use once_cell::sync::Lazy;
use regex_lite::Regex;

static LANDING_AREA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+) (\d+)$").unwrap());
static POSITION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+) (\d+) ([NSEW])$").unwrap());
static INSTRUCTIONS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[LRM]+$").unwrap());

/// Parses the landing-area line `<max-x> <max-y>` into its coordinate pair.
///
/// Coordinates are non-negative base-10 integers separated by exactly one
/// space, with no extra tokens. A whitespace-only line counts as empty.
pub fn parse_landing_area(line: &str) -> Result<(i64, i64), ExpeditionError> {
    if line.trim().is_empty() {
        return Err(ExpeditionError::EmptyLandingArea);
    }
    let malformed = || ExpeditionError::MalformedLandingArea {
        line: line.to_string(),
    };
    let caps = LANDING_AREA_RE.captures(line).ok_or_else(malformed)?;
    // \d+ can still overflow the integer type; treat that as a format error.
    let max_x = caps[1].parse().map_err(|_| malformed())?;
    let max_y = caps[2].parse().map_err(|_| malformed())?;
    Ok((max_x, max_y))
}

/// Parses an explorer position line `<x> <y> <heading>`.
pub fn parse_position(line: &str) -> Result<Position, ExpeditionError> {
    if line.is_empty() {
        return Err(ExpeditionError::EmptyPosition);
    }
    let malformed = || ExpeditionError::MalformedPosition {
        line: line.to_string(),
    };
    let caps = POSITION_RE.captures(line).ok_or_else(malformed)?;
    let x = caps[1].parse().map_err(|_| malformed())?;
    let y = caps[2].parse().map_err(|_| malformed())?;
    let heading = match &caps[3] {
        "N" => Heading::North,
        "E" => Heading::East,
        "S" => Heading::South,
        "W" => Heading::West,
        _ => unreachable!("heading class admits only NSEW"),
    };
    Ok(Position { x, y, heading })
}

/// Parses an instruction line into its ordered sequence of instructions.
///
/// The line must consist of one or more characters from `L`/`R`/`M` and
/// nothing else. Only a literally empty line yields the empty-line error;
/// a whitespace-only line is a format error.
pub fn parse_instructions(line: &str) -> Result<Vec<Instruction>, ExpeditionError> {
    if line.is_empty() {
        return Err(ExpeditionError::EmptyInstructions);
    }
    if !INSTRUCTIONS_RE.is_match(line) {
        return Err(ExpeditionError::MalformedInstructions {
            line: line.to_string(),
        });
    }
    Ok(line
        .chars()
        .map(|c| match c {
            'L' => Instruction::Left,
            'R' => Instruction::Right,
            'M' => Instruction::Move,
            _ => unreachable!("instruction class admits only LRM"),
        })
        .collect())
}
