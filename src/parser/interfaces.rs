use super::grouper::DefinitionBlock;
use super::lines::class_header;
use super::types;
use crate::ast::{Field, InterfaceDefinition};
use crate::error::{ErrorKind, ParseError};

/// Parse a dataclass-style block into an interface definition.
///
/// Uses the same indentation state machine as the enum parser; each depth-1
/// line is a field declaration `name: type`, optionally with a default that
/// is dropped.
pub fn parse(block: &DefinitionBlock) -> Result<InterfaceDefinition, ParseError> {
    let header = block.header();
    let Some((name, _)) = class_header(&header.text) else {
        return Err(ParseError::new(
            ErrorKind::MalformedHeader,
            format!("could not read class name from `{}`", header.text.trim()),
            header.span(),
        ));
    };

    let mut fields = Vec::new();
    let mut in_method = false;
    for line in &block.lines[1..] {
        let depth = line.indent_depth();
        if depth == 0 {
            break;
        }
        if depth >= 2 {
            if !in_method {
                return Err(ParseError::new(
                    ErrorKind::MalformedField,
                    format!("unexpected indentation in `{}`", line.text.trim()),
                    line.span(),
                )
                .with_help("fields are indented one level"));
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

        let Some((field_name, rest)) = trimmed.split_once(": ") else {
            return Err(ParseError::new(
                ErrorKind::MalformedField,
                format!("expected `name: type`, found `{}`", trimmed),
                line.span(),
            ));
        };

        // `name: type = default` keeps only the annotation
        let annotation = match rest.split_once(" = ") {
            Some((ty, _default)) => ty,
            None => rest,
        };

        let ty = types::parse(annotation).map_err(|message| {
            ParseError::new(ErrorKind::UnknownType, message, line.span()).with_help(
                "supported annotations: str, int, float, bool, Any, None, List[...], Optional[...], Dict[...], Union[...]",
            )
        })?;

        fields.push(Field { name: field_name.trim().to_string(), ty });
    }

    Ok(InterfaceDefinition { name, fields, span: header.span() })
}
