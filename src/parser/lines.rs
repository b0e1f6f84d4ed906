use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use tree_sitter::Parser;

/// Indentation unit assumed by the definition parsers (PEP 8 four spaces).
/// Tab-indented input is not supported.
pub const INDENT: &str = "    ";

/// Position in source code (0-indexed line and column, in bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

/// Span in source code (a range from start position to end position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Span covering the trimmed content of one source line
    pub fn of_line(line: usize, text: &str) -> Self {
        let start_col = text.len() - text.trim_start().len();
        let end_col = text.trim_end().len().max(start_col);
        Self {
            start: Position { line, col: start_col },
            end: Position { line, col: end_col },
        }
    }
}

/// A single input line with whitespace preserved and its 0-indexed number
#[derive(Debug, Clone)]
pub struct SourceLine {
    pub text: String,
    pub number: usize,
}

impl SourceLine {
    pub fn span(&self) -> Span {
        Span::of_line(self.number, &self.text)
    }

    /// Indentation depth in units of [`INDENT`]
    pub fn indent_depth(&self) -> usize {
        let spaces = self.text.len() - self.text.trim_start_matches(' ').len();
        spaces / INDENT.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only
    Blank,
    /// Comment (# ...)
    Comment,
    /// Decorator (@ ...)
    Decorator,
    /// Import statement detected by tree-sitter
    Import,
    /// Class header whose only base is Enum
    EnumHeader,
    /// Any other class header
    ClassHeader,
    /// Standalone string constant (NAME = "..." or a bare string)
    StringConst,
    /// Anything else; belongs to the currently open definition block
    Body,
}

lazy_static! {
    // Class headers have no body on their line, so tree-sitter can't parse them standalone
    static ref CLASS_HEADER: Regex =
        Regex::new(r"^class\s+([A-Za-z_][A-Za-z0-9_]*)\s*(?:\(([^)]*)\))?\s*:\s*(?:#.*)?$").unwrap();
}

/// Extract the class name and base list (if any) from a header line
pub fn class_header(text: &str) -> Option<(String, Option<String>)> {
    CLASS_HEADER.captures(text).map(|caps| {
        let name = caps[1].to_string();
        let bases = caps.get(2).map(|m| m.as_str().trim().to_string());
        (name, bases)
    })
}

fn is_enum_header(text: &str) -> bool {
    matches!(class_header(text), Some((_, Some(bases))) if bases == "Enum")
}

fn is_indented(text: &str) -> bool {
    text.starts_with(' ') || text.starts_with('\t')
}

/// Line classifier backed by the tree-sitter Python grammar
pub struct LineClassifier {
    parser: Parser,
}

impl LineClassifier {
    pub fn new() -> Self {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .expect("Failed to load Python grammar");
        Self { parser }
    }

    pub fn classify(&mut self, text: &str) -> LineKind {
        if text.trim().is_empty() {
            return LineKind::Blank;
        }
        if text.starts_with('#') {
            return LineKind::Comment;
        }
        if text.starts_with('@') {
            return LineKind::Decorator;
        }

        // Only unindented lines can open a definition or be noise imports;
        // indented lines always belong to the open block.
        if !is_indented(text) {
            if CLASS_HEADER.is_match(text) {
                return if is_enum_header(text) {
                    LineKind::EnumHeader
                } else {
                    LineKind::ClassHeader
                };
            }
            if self.is_import_statement(text) {
                return LineKind::Import;
            }
            let trimmed_end = text.trim_end();
            if (trimmed_end.ends_with('"') || trimmed_end.ends_with('\''))
                && self.is_string_statement(text)
            {
                return LineKind::StringConst;
            }
        }

        LineKind::Body
    }

    /// Parse a single line and return the AST node kind of the first statement
    fn parse_line(&mut self, text: &str) -> Option<(String, tree_sitter::Tree)> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let tree = self.parser.parse(trimmed, None)?;
        let root = tree.root_node();

        // If there are errors, it's not valid Python
        if root.has_error() {
            return None;
        }

        if root.kind() != "module" {
            return None;
        }

        let child = root.child(0)?;
        Some((child.kind().to_string(), tree))
    }

    fn is_import_statement(&mut self, text: &str) -> bool {
        match self.parse_line(text) {
            Some((kind, _)) => matches!(kind.as_str(), "import_statement" | "import_from_statement"),
            None => false,
        }
    }

    /// A bare string expression, or an assignment whose right side is a string
    fn is_string_statement(&mut self, text: &str) -> bool {
        let Some((kind, tree)) = self.parse_line(text) else {
            return false;
        };
        if kind != "expression_statement" {
            return false;
        }

        let root = tree.root_node();
        let Some(stmt) = root.child(0) else {
            return false;
        };
        let Some(expr) = stmt.child(0) else {
            return false;
        };
        match expr.kind() {
            "string" | "concatenated_string" => true,
            "assignment" => expr
                .child_by_field_name("right")
                .map(|rhs| matches!(rhs.kind(), "string" | "concatenated_string"))
                .unwrap_or(false),
            _ => false,
        }
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}
