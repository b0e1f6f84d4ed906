use lazy_static::lazy_static;
use regex::Regex;

use super::grouper::DefinitionBlock;
use crate::ast::StringDefinition;
use crate::error::ParseError;

lazy_static! {
    static ref STRING_ASSIGNMENT: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*\s*=").unwrap();
}

/// Parse a standalone string constant block.
///
/// The block is kept as raw text; the classifier already verified the first
/// line's quoting, so the only decision left is whether it is an assignment
/// (rendered as a const) or a bare string (rendered verbatim).
pub fn parse(block: &DefinitionBlock) -> Result<StringDefinition, ParseError> {
    let header = block.header();
    let is_assignment = STRING_ASSIGNMENT.is_match(header.text.trim());

    Ok(StringDefinition {
        lines: block.lines.iter().map(|line| line.text.trim_end().to_string()).collect(),
        is_assignment,
        span: header.span(),
    })
}
