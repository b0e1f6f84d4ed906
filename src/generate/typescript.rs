use super::output::Output;
use crate::Options;
use crate::ast::{Definition, EnumDefinition, InterfaceDefinition, StringDefinition};
use crate::parser::lines::INDENT;

/// Render parsed definitions to TypeScript in source order.
///
/// Rendering never fails once parsing succeeded; anything else is a bug
/// here, not bad user input.
pub fn generate(definitions: &[Definition], options: &Options) -> String {
    let mut output = Output::new();
    for definition in definitions {
        let text = match definition {
            Definition::Enum(def) => render_enum(def, options),
            Definition::Interface(def) => render_interface(def, options),
            Definition::String(def) => render_string(def, options),
        };
        output.push(text, matches!(definition, Definition::String(_)));
    }
    output.finish()
}

fn export_prefix(options: &Options) -> &'static str {
    if options.export { "export " } else { "" }
}

fn render_enum(def: &EnumDefinition, options: &Options) -> String {
    let mut out = format!("{}enum {} {{\n", export_prefix(options), def.name);
    for element in &def.elements {
        // Values go between single quotes with no quote rewriting
        out.push_str(&format!("{}{} = '{}',\n", INDENT, element.name, element.value));
    }
    out.push('}');
    out
}

fn render_interface(def: &InterfaceDefinition, options: &Options) -> String {
    let mut out = format!("{}interface {} {{\n", export_prefix(options), def.name);
    for field in &def.fields {
        out.push_str(&format!("{}{}: {};\n", INDENT, field.name, field.ty));
    }
    out.push('}');
    out
}

fn render_string(def: &StringDefinition, options: &Options) -> String {
    let mut lines = def.lines.iter();
    let first = lines.next().map(String::as_str).unwrap_or_default();

    let mut out = if def.is_assignment {
        format!("{}const {};", export_prefix(options), first)
    } else {
        // Bare strings pass through verbatim
        first.to_string()
    };
    for line in lines {
        out.push('\n');
        out.push_str(line);
    }
    out
}
