// tests/parsing.rs
use expedition::{
    assemble_explorers, parse_instructions, parse_landing_area, parse_position, ExpeditionError,
    Heading, Instruction, Position,
};

#[test]
fn landing_area_accepts_coordinate_pair() {
    assert_eq!(parse_landing_area("5 5"), Ok((5, 5)));
    assert_eq!(parse_landing_area("0 0"), Ok((0, 0)));
    assert_eq!(parse_landing_area("12 7"), Ok((12, 7)));
}

#[test]
fn landing_area_rejects_empty_line() {
    assert_eq!(
        parse_landing_area(""),
        Err(ExpeditionError::EmptyLandingArea)
    );
    // Whitespace-only counts as empty for the landing-area line.
    assert_eq!(
        parse_landing_area("   "),
        Err(ExpeditionError::EmptyLandingArea)
    );
    assert_eq!(
        parse_landing_area("").unwrap_err().to_string(),
        "Expected upper right coordinate of landing area but found an empty line"
    );
}

#[test]
fn landing_area_rejects_malformed_line() {
    let err = parse_landing_area("G ").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Upper right landing area coordinate must be in the format '<x-coord> <y-coord>' but was 'G '"
    );
    assert!(parse_landing_area("5").is_err());
    assert!(parse_landing_area("5 5 5").is_err());
    assert!(parse_landing_area("-1 5").is_err());
    assert!(parse_landing_area("5  5").is_err()); // two spaces
}

#[test]
fn position_accepts_coordinates_and_heading() {
    assert_eq!(
        parse_position("1 2 N"),
        Ok(Position {
            x: 1,
            y: 2,
            heading: Heading::North,
        })
    );
    assert_eq!(
        parse_position("0 0 W"),
        Ok(Position {
            x: 0,
            y: 0,
            heading: Heading::West,
        })
    );
}

#[test]
fn position_rejects_bad_lines() {
    let format_msg = |line: &str| {
        format!(
            "Explorer position must be in the format '<x-coord> <y-coord> <orientation>' but was '{line}'"
        )
    };
    for line in ["1 2 3", "1 2 M", "1 2 NN", "1 N", "1 2 N extra"] {
        let err = parse_position(line).unwrap_err();
        assert_eq!(err.to_string(), format_msg(line), "line {line:?}");
    }
    assert_eq!(parse_position(""), Err(ExpeditionError::EmptyPosition));
}

#[test]
fn instructions_accept_lrm_strings() {
    assert_eq!(
        parse_instructions("MLRLRM"),
        Ok(vec![
            Instruction::Move,
            Instruction::Left,
            Instruction::Right,
            Instruction::Left,
            Instruction::Right,
            Instruction::Move,
        ])
    );
}

#[test]
fn instructions_reject_foreign_characters() {
    let err = parse_instructions("MLRLRP").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Explorer instructions must be in the format '<instruction string>' but was 'MLRLRP'"
    );
    // Whitespace-only is a format error, not the empty-line error.
    assert!(matches!(
        parse_instructions(" "),
        Err(ExpeditionError::MalformedInstructions { .. })
    ));
    assert_eq!(
        parse_instructions(""),
        Err(ExpeditionError::EmptyInstructions)
    );
}

#[test]
fn assembly_pairs_lines_in_order() {
    let records = assemble_explorers(["1 2 N", "LMLMLMLMM", "3 3 E", "MMRMMRMRRM"]).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].position.x, 1);
    assert_eq!(records[1].position.heading, Heading::East);
    assert_eq!(records[1].instructions.len(), 10);
}

#[test]
fn assembly_accepts_no_explorers() {
    let records = assemble_explorers(Vec::<String>::new()).unwrap();
    assert!(records.is_empty());
}

#[test]
fn assembly_reports_missing_instruction_line() {
    // Scenario: a trailing position line with no instruction line after it.
    let err = assemble_explorers(["1 2 N", "LMLM", "3 3 E"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing explorer instructions after line '3 3 E'"
    );
}

#[test]
fn assembly_propagates_parser_errors() {
    assert!(matches!(
        assemble_explorers(["1 2 X", "LM"]),
        Err(ExpeditionError::MalformedPosition { .. })
    ));
    assert_eq!(
        assemble_explorers(["1 2 N", ""]),
        Err(ExpeditionError::EmptyInstructions)
    );
    assert!(matches!(
        assemble_explorers(["1 2 N", "LMQ"]),
        Err(ExpeditionError::MalformedInstructions { .. })
    ));
}
