//! End-to-end processing of mission input into final orientations.

use crate::assembler::assemble_explorers;
use crate::error::ExpeditionError;
use crate::orientation::Orientation;
use crate::parser::parse_landing_area;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The rectangle explorers land on: `(0, 0)` to `(max_x, max_y)` inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingArea {
    pub max_x: i64,
    pub max_y: i64,
}

impl LandingArea {
    /// Whether `(x, y)` lies inside the area.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x <= self.max_x && y <= self.max_y
    }
}

/// Runs the whole pipeline over a single-pass line source.
///
/// Parses the landing-area line, assembles the remaining lines into explorer
/// records, validates each starting position against the landing area, then
/// folds each explorer's instructions into its final orientation. Results
/// keep input order. The result is all-or-nothing: the first failing line or
/// explorer fails the whole run, and bounds are only checked at the starting
/// position, never during movement.
pub fn process_input<I, S>(lines: I) -> Result<Vec<Orientation>, ExpeditionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter();

    let first = lines.next().ok_or(ExpeditionError::NoInput)?;
    let (max_x, max_y) = parse_landing_area(first.as_ref())?;
    let area = LandingArea { max_x, max_y };
    debug!(max_x, max_y, "parsed landing area");

    let records = assemble_explorers(lines)?;
    debug!(explorers = records.len(), "assembled explorer records");

    let mut finals = Vec::with_capacity(records.len());
    for record in records {
        let start = Orientation::new(record.position);
        if !area.contains(start.x(), start.y()) {
            return Err(ExpeditionError::OutsideLandingArea {
                orientation: start.to_string(),
            });
        }

        let finish = record
            .instructions
            .iter()
            .fold(start, |orientation, &instruction| {
                orientation.apply(instruction)
            });
        debug!(start = %start, finish = %finish, "explorer simulated");
        finals.push(finish);
    }

    Ok(finals)
}
