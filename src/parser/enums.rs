use super::grouper::DefinitionBlock;
use super::lines::{SourceLine, class_header};
use crate::ast::{EnumDefinition, EnumElement};
use crate::error::{ErrorKind, ParseError};

/// Parse a `class Name(Enum):` block.
///
/// The body scan is a small state machine over indentation depth: depth 0
/// ends the definition, a `def`/decorator at depth 1 opens a nested method
/// whose deeper lines are skipped, and every other depth-1 line is an
/// element `NAME = "value"`. Element order is preserved.
pub fn parse(block: &DefinitionBlock) -> Result<EnumDefinition, ParseError> {
    let header = block.header();
    let Some((name, _)) = class_header(&header.text) else {
        return Err(ParseError::new(
            ErrorKind::MalformedHeader,
            format!("could not read enum name from `{}`", header.text.trim()),
            header.span(),
        ));
    };

    let mut elements = Vec::new();
    let mut in_method = false;
    for line in &block.lines[1..] {
        let depth = line.indent_depth();
        if depth == 0 {
            break;
        }
        if depth >= 2 {
            if !in_method {
                return Err(ParseError::new(
                    ErrorKind::MalformedElement,
                    format!("unexpected indentation in `{}`", line.text.trim()),
                    line.span(),
                )
                .with_help("enum elements are indented one level"));
            }
            continue;
        }

        let trimmed = line.text.trim();
        if trimmed.starts_with("def ") || trimmed.starts_with("async def ") || trimmed.starts_with('@') {
            in_method = true;
            continue;
        }
        if trimmed.starts_with('#') {
            continue;
        }
        in_method = false;
        elements.push(parse_element(trimmed, line)?);
    }

    Ok(EnumDefinition { name, elements, span: header.span() })
}

fn parse_element(trimmed: &str, line: &SourceLine) -> Result<EnumElement, ParseError> {
    let Some((name, value)) = trimmed.split_once(" = ") else {
        return Err(ParseError::new(
            ErrorKind::MalformedElement,
            format!("expected `NAME = \"value\"`, found `{}`", trimmed),
            line.span(),
        ));
    };

    // Surrounding quotes of either style are stripped; the value itself is
    // carried verbatim.
    let value = value.trim().trim_matches(|c| c == '"' || c == '\'').to_string();
    Ok(EnumElement { name: name.trim().to_string(), value })
}
