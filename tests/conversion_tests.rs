use pyts_transpiler::{ErrorKind, Options, convert, convert_with};

#[test]
fn test_determinism() {
    let source = "class Color(Enum):\n    RED = \"red\"\n\nNAME = \"pyts\"\n";
    assert_eq!(convert(source).unwrap(), convert(source).unwrap());
}

#[test]
fn test_order_is_preserved() {
    let source = "class B(Enum):\n    X = \"x\"\n\nclass A(Enum):\n    Y = \"y\"\n\nclass M(Enum):\n    Z = \"z\"\n";
    let code = convert(source).unwrap();
    let b = code.find("enum B").unwrap();
    let a = code.find("enum A").unwrap();
    let m = code.find("enum M").unwrap();
    assert!(b < a && a < m);
}

#[test]
fn test_enum_round_trip() {
    let code = convert("class Color(Enum):\n    RED = \"red\"\n    GREEN = \"green\"").unwrap();
    assert_eq!(code, "export enum Color {\n    RED = 'red',\n    GREEN = 'green',\n}\n");
}

#[test]
fn test_string_grouping() {
    // Consecutive constants stay adjacent
    let code = convert("A = \"a\"\nB = \"b\"\n").unwrap();
    assert_eq!(code, "export const A = \"a\";\nexport const B = \"b\";\n");

    // A constant followed by an enum gets exactly one blank line
    let code = convert("A = \"a\"\n\nclass Color(Enum):\n    RED = \"red\"\n").unwrap();
    assert_eq!(
        code,
        "export const A = \"a\";\n\nexport enum Color {\n    RED = 'red',\n}\n"
    );
}

#[test]
fn test_fault_isolation() {
    let source = "class First(Enum):\n    A = \"a\"\n\nclass Broken(Enum):\n    B \"b\"\n\nclass Third(Enum):\n    C = \"c\"\n";
    let result = convert_with(source, &Options::default()).unwrap();
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::MalformedElement);
    assert!(result.code.contains("enum First"));
    assert!(result.code.contains("enum Third"));
    assert!(!result.code.contains("Broken"));
}

#[test]
fn test_comment_and_import_stripping() {
    let source = "from enum import Enum\nimport os\n# palette\nclass Color(Enum):\n    RED = \"red\"\n";
    let code = convert(source).unwrap();
    assert!(!code.contains("import"));
    assert!(!code.contains("palette"));
    assert!(code.contains("enum Color"));
}

#[test]
fn test_decorator_stripping() {
    let source = "@dataclass\nclass Point:\n    x: int\n";
    let code = convert(source).unwrap();
    assert!(!code.contains("dataclass"));
    assert!(code.contains("interface Point"));
}

#[test]
fn test_empty_input() {
    assert_eq!(convert("").unwrap(), "\n");
}

#[test]
fn test_content_before_any_definition_is_an_error() {
    let err = convert("    RED = \"red\"\n").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedContent);

    let err = convert("MAX_RETRIES = 5\n").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedContent);
}

#[test]
fn test_unknown_type_is_recovered() {
    let source = "class Shape:\n    geo: Geometry\n\nclass Point:\n    x: int\n";
    let result = convert_with(source, &Options::default()).unwrap();
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::UnknownType);
    assert!(!result.code.contains("Shape"));
    assert!(result.code.contains("interface Point"));
}

#[test]
fn test_method_bodies_are_skipped() {
    let source = "class Status(Enum):\n    OPEN = \"open\"\n\n    def label(self):\n        return self.value\n";
    let code = convert(source).unwrap();
    assert_eq!(code, "export enum Status {\n    OPEN = 'open',\n}\n");
}

#[test]
fn test_single_quoted_values() {
    let code = convert("class Umoor(Enum):\n    al_Qaza = 'al-Qaza'\n").unwrap();
    assert!(code.contains("al_Qaza = 'al-Qaza',"));
}

#[test]
fn test_unquoted_value_is_carried_verbatim() {
    let code = convert("class Code(Enum):\n    OK = 200\n").unwrap();
    assert!(code.contains("OK = '200',"));
}

#[test]
fn test_default_values_are_dropped() {
    let code = convert("class Query:\n    page: Optional[int] = None\n    size: int = 25\n").unwrap();
    assert!(code.contains("page: number | null;"));
    assert!(code.contains("size: number;"));
}

#[test]
fn test_bare_string_passes_through() {
    let code = convert("\"do not edit by hand\"\n").unwrap();
    assert_eq!(code, "\"do not edit by hand\"\n");
}

#[test]
fn test_trailing_newline_is_normalized() {
    let with_many = convert("A = \"a\"\n\n\n\n").unwrap();
    let with_none = convert("A = \"a\"").unwrap();
    assert_eq!(with_many, with_none);
    assert!(with_many.ends_with("\";\n"));
    assert!(!with_many.ends_with("\n\n"));
}
