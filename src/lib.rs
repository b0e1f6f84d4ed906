use serde::Serialize;

pub mod ast;
pub mod error;
pub mod generate;
pub mod parser;

pub use ast::{Definition, TsType};
pub use error::{ErrorKind, ParseError};
pub use parser::ParsedModule;

/// Configuration for conversion.
#[derive(Debug, Clone)]
pub struct Options {
    /// Prefix every declaration with `export` (default: true)
    pub export: bool,
    /// Fail on the first malformed definition instead of skipping it
    pub strict: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            export: true,
            strict: false,
        }
    }
}

/// Conversion result: the generated TypeScript plus any definitions that
/// were skipped, with the reason each one failed.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertResult {
    pub code: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ParseError>,
}

/// Convert Python enum, dataclass, and string constant definitions to
/// equivalent TypeScript declarations.
pub fn convert(source: &str) -> Result<String, ParseError> {
    convert_with(source, &Options::default()).map(|result| result.code)
}

pub fn convert_with(source: &str, options: &Options) -> Result<ConvertResult, ParseError> {
    let ParsedModule { definitions, mut errors } = parser::parse(source)?;

    if options.strict && !errors.is_empty() {
        return Err(errors.remove(0));
    }

    let code = generate::generate(&definitions, options);
    Ok(ConvertResult { code, errors })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_enum() {
        let code = convert("class Color(Enum):\n    RED = \"red\"\n    GREEN = \"green\"\n").unwrap();
        assert_eq!(code, "export enum Color {\n    RED = 'red',\n    GREEN = 'green',\n}\n");
    }

    #[test]
    fn test_simple_interface() {
        let code = convert("class Point:\n    x: int\n    y: int\n").unwrap();
        assert_eq!(code, "export interface Point {\n    x: number;\n    y: number;\n}\n");
    }

    #[test]
    fn test_string_constant() {
        let code = convert("GREETING = \"hello\"\n").unwrap();
        assert_eq!(code, "export const GREETING = \"hello\";\n");
    }

    #[test]
    fn test_no_export_option() {
        let options = Options { export: false, ..Options::default() };
        let result = convert_with("class Point:\n    x: int\n", &options).unwrap();
        assert!(result.code.starts_with("interface Point {"));
    }

    #[test]
    fn test_recovered_error_is_reported() {
        let source = "class Broken(Enum):\n    RED \"red\"\n\nNAME = \"ok\"\n";
        let result = convert_with(source, &Options::default()).unwrap();
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.code, "export const NAME = \"ok\";\n");
    }

    #[test]
    fn test_strict_mode() {
        let source = "class Broken(Enum):\n    RED \"red\"\n";
        let options = Options { strict: true, ..Options::default() };
        let err = convert_with(source, &options).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedElement);
    }
}
