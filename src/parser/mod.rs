pub mod lines;
pub mod grouper;
pub mod types;
mod enums;
mod interfaces;
mod strings;

pub use grouper::{BlockKind, DefinitionBlock, group};
pub use lines::{INDENT, LineClassifier, LineKind, Position, SourceLine, Span};

use crate::ast::Definition;
use crate::error::ParseError;

/// Result of parsing one source file
#[derive(Debug, Clone)]
pub struct ParsedModule {
    /// Definitions in source order
    pub definitions: Vec<Definition>,
    /// Per-definition errors that were recovered by skipping the definition
    pub errors: Vec<ParseError>,
}

/// Parse source text into definitions.
///
/// A malformed definition is logged and skipped so one bad definition never
/// blocks conversion of the rest of the file; only structural errors
/// (content before any definition) fail the whole parse.
pub fn parse(source: &str) -> Result<ParsedModule, ParseError> {
    let blocks = group(source)?;

    let mut definitions = Vec::new();
    let mut errors = Vec::new();
    for block in &blocks {
        let parsed = match block.kind {
            BlockKind::Enum => enums::parse(block).map(Definition::Enum),
            BlockKind::StringConst => strings::parse(block).map(Definition::String),
            BlockKind::Interface => interfaces::parse(block).map(Definition::Interface),
        };
        match parsed {
            Ok(definition) => definitions.push(definition),
            Err(err) => {
                tracing::error!(line = err.span.start.line + 1, %err, "error while processing definition");
                errors.push(err);
            }
        }
    }

    Ok(ParsedModule { definitions, errors })
}
