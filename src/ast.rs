use std::fmt;

// Re-export Span and Position so the rest of the codebase uses a single type
pub use crate::parser::lines::{Position, Span};

/// A parsed top-level definition
#[derive(Debug, Clone)]
pub enum Definition {
    Enum(EnumDefinition),
    Interface(InterfaceDefinition),
    String(StringDefinition),
}

impl Definition {
    pub fn span(&self) -> Span {
        match self {
            Definition::Enum(def) => def.span,
            Definition::Interface(def) => def.span,
            Definition::String(def) => def.span,
        }
    }
}

/// A named set of ordered name/value pairs, parsed from `class Name(Enum):`
#[derive(Debug, Clone)]
pub struct EnumDefinition {
    pub name: String,
    /// Elements in declaration order; never sorted
    pub elements: Vec<EnumElement>,
    pub span: Span,
}

/// One element of an enum, parsed from `NAME = "value"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumElement {
    pub name: String,
    pub value: String,
}

/// A named record type, parsed from a dataclass body
#[derive(Debug, Clone)]
pub struct InterfaceDefinition {
    pub name: String,
    pub fields: Vec<Field>,
    pub span: Span,
}

/// One typed field of an interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TsType,
}

/// A standalone string constant kept as raw text
#[derive(Debug, Clone)]
pub struct StringDefinition {
    pub lines: Vec<String>,
    /// First line is a `NAME = "value"` assignment (vs a bare string)
    pub is_assignment: bool,
    pub span: Span,
}

/// TypeScript type expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    String,
    Number,
    Boolean,
    Any,
    Null,
    Array(Box<TsType>),
    Optional(Box<TsType>),
    Record(Box<TsType>, Box<TsType>),
    Union(Vec<TsType>),
}

impl TsType {
    /// Union-shaped types need parentheses inside an array suffix
    fn needs_parens_in_array(&self) -> bool {
        matches!(self, TsType::Optional(_) | TsType::Union(_))
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TsType::String => write!(f, "string"),
            TsType::Number => write!(f, "number"),
            TsType::Boolean => write!(f, "boolean"),
            TsType::Any => write!(f, "any"),
            TsType::Null => write!(f, "null"),
            TsType::Array(inner) => {
                if inner.needs_parens_in_array() {
                    write!(f, "({})[]", inner)
                } else {
                    write!(f, "{}[]", inner)
                }
            }
            TsType::Optional(inner) => write!(f, "{} | null", inner),
            TsType::Record(key, value) => write!(f, "Record<{}, {}>", key, value),
            TsType::Union(members) => {
                let rendered: Vec<String> = members.iter().map(|m| m.to_string()).collect();
                write!(f, "{}", rendered.join(" | "))
            }
        }
    }
}
