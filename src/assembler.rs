//! Pairs the remaining input lines into explorer records.

use crate::error::ExpeditionError;
use crate::orientation::{Instruction, Position};
use crate::parser::{parse_instructions, parse_position};
use serde::{Deserialize, Serialize};

/// One explorer as described by the input: a starting position and the
/// ordered instructions to run from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerRecord {
    pub position: Position,
    pub instructions: Vec<Instruction>,
}

/// Consumes lines two at a time (position, then instructions) and returns the
/// explorer records in input order.
///
/// Running out of lines when a position is expected is the normal end of
/// input. Assembly is eager and stops at the first error; no partial result
/// is returned on failure.
pub fn assemble_explorers<I, S>(lines: I) -> Result<Vec<ExplorerRecord>, ExpeditionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter();
    let mut records = Vec::new();

    while let Some(position_line) = lines.next() {
        let position_line = position_line.as_ref();
        let position = parse_position(position_line)?;

        let instruction_line = lines.next().ok_or_else(|| ExpeditionError::MissingInstructions {
            position_line: position_line.to_string(),
        })?;
        let instructions = parse_instructions(instruction_line.as_ref())?;

        records.push(ExplorerRecord {
            position,
            instructions,
        });
    }

    Ok(records)
}
