//! # expedition
//!
//! Simulates explorers moving on a rectangular landing area.
//!
//! Mission input is a landing-area line followed by position/instruction line
//! pairs, one pair per explorer. The crate parses and validates that input,
//! checks each explorer's starting position against the landing-area bounds,
//! then drives a compass-heading state machine over each instruction string
//! to produce every explorer's final `<x> <y> <heading>`.
//!
//! Processing is a synchronous batch transformation: the whole input either
//! yields one final orientation per explorer, in input order, or a single
//! validation error.

pub mod assembler;
pub mod error;
pub mod orientation;
pub mod parser;
pub mod pipeline;

pub use assembler::*;
pub use error::*;
pub use orientation::*;
pub use parser::*;
pub use pipeline::*;
