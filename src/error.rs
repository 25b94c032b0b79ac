//! Error types for mission input validation.

use thiserror::Error;

/// Everything that can go wrong while reading mission input.
///
/// All variants are user input validation failures; the message text is the
/// sole diagnostic shown to the user. Errors propagate unchanged and
/// short-circuit all remaining processing, first error wins.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpeditionError {
    /// The input had no lines at all.
    #[error("No input lines")]
    NoInput,

    /// The landing-area line was empty or whitespace-only.
    #[error("Expected upper right coordinate of landing area but found an empty line")]
    EmptyLandingArea,

    /// The landing-area line did not match `<x> <y>`.
    #[error("Upper right landing area coordinate must be in the format '<x-coord> <y-coord>' but was '{line}'")]
    MalformedLandingArea { line: String },

    /// A position line was empty.
    #[error("Expected explorer position but found an empty line")]
    EmptyPosition,

    /// A position line did not match `<x> <y> <orientation>`.
    #[error("Explorer position must be in the format '<x-coord> <y-coord> <orientation>' but was '{line}'")]
    MalformedPosition { line: String },

    /// An instruction line was empty.
    #[error("Expected explorer instructions but found an empty line")]
    EmptyInstructions,

    /// An instruction line contained characters outside `L`/`R`/`M`.
    #[error("Explorer instructions must be in the format '<instruction string>' but was '{line}'")]
    MalformedInstructions { line: String },

    /// A position line had no instruction line after it.
    #[error("Missing explorer instructions after line '{position_line}'")]
    MissingInstructions { position_line: String },

    /// An explorer's starting position fell outside the landing area.
    #[error("Explorer has initial position ({orientation}) which is outside the landing area")]
    OutsideLandingArea { orientation: String },
}
