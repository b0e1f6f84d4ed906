use crate::ast::TsType;

/// Parse a Python type annotation into its TypeScript equivalent.
///
/// The mapping is a fixed table; unknown type tokens are an error and are
/// never passed through to the output.
pub fn parse(src: &str) -> Result<TsType, String> {
    let src = src.trim();

    if let Some((head, inner)) = split_bracketed(src) {
        return match head.trim() {
            "List" | "list" => Ok(TsType::Array(Box::new(parse(inner)?))),
            "Optional" => Ok(TsType::Optional(Box::new(parse(inner)?))),
            "Dict" | "dict" => {
                let args = split_args(inner);
                if args.len() != 2 {
                    return Err(format!("expected two type arguments in `{}`", src));
                }
                Ok(TsType::Record(
                    Box::new(parse(args[0])?),
                    Box::new(parse(args[1])?),
                ))
            }
            "Union" => {
                let args = split_args(inner);
                if args.len() < 2 {
                    return Err(format!("expected at least two type arguments in `{}`", src));
                }
                let members = args.iter().map(|arg| parse(arg)).collect::<Result<Vec<_>, _>>()?;
                Ok(TsType::Union(members))
            }
            _ => Err(format!("unknown Python type `{}`", src)),
        };
    }

    match src {
        "str" => Ok(TsType::String),
        "int" | "float" => Ok(TsType::Number),
        "bool" => Ok(TsType::Boolean),
        "Any" => Ok(TsType::Any),
        "None" => Ok(TsType::Null),
        "list" | "List" => Ok(TsType::Array(Box::new(TsType::Any))),
        "dict" | "Dict" => Ok(TsType::Record(Box::new(TsType::String), Box::new(TsType::Any))),
        _ => Err(format!("unknown Python type `{}`", src)),
    }
}

/// Split `Head[inner]` into its parts; None when `src` is not bracketed
fn split_bracketed(src: &str) -> Option<(&str, &str)> {
    let open = src.find('[')?;
    if !src.ends_with(']') {
        return None;
    }
    Some((&src[..open], &src[open + 1..src.len() - 1]))
}

/// Split comma-separated type arguments, respecting nested brackets
fn split_args(src: &str) -> Vec<&str> {
    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (i, c) in src.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                args.push(src[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    args.push(src[start..].trim());

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives() {
        assert_eq!(parse("str").unwrap(), TsType::String);
        assert_eq!(parse("int").unwrap(), TsType::Number);
        assert_eq!(parse("float").unwrap(), TsType::Number);
        assert_eq!(parse("bool").unwrap(), TsType::Boolean);
        assert_eq!(parse("Any").unwrap(), TsType::Any);
        assert_eq!(parse("None").unwrap(), TsType::Null);
    }

    #[test]
    fn test_containers() {
        assert_eq!(parse("List[str]").unwrap().to_string(), "string[]");
        assert_eq!(parse("list[int]").unwrap().to_string(), "number[]");
        assert_eq!(parse("Optional[str]").unwrap().to_string(), "string | null");
        assert_eq!(parse("Dict[str, Any]").unwrap().to_string(), "Record<string, any>");
        assert_eq!(parse("Union[str, int]").unwrap().to_string(), "string | number");
        assert_eq!(parse("dict").unwrap().to_string(), "Record<string, any>");
        assert_eq!(parse("list").unwrap().to_string(), "any[]");
    }

    #[test]
    fn test_nesting() {
        assert_eq!(parse("List[Optional[str]]").unwrap().to_string(), "(string | null)[]");
        assert_eq!(
            parse("Dict[str, List[int]]").unwrap().to_string(),
            "Record<string, number[]>"
        );
        assert_eq!(
            parse("Optional[Union[str, int]]").unwrap().to_string(),
            "string | number | null"
        );
    }

    #[test]
    fn test_unknown_types_are_errors() {
        assert!(parse("Decimal").is_err());
        assert!(parse("List[Decimal]").is_err());
        assert!(parse("Tuple[str, int]").is_err());
    }
}
