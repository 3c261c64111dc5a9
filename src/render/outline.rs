//! Indented plain-text outline, four spaces per level.
//!
//! Every node prints `Name:` and `Desc:` lines, then its own attributes, then
//! each owned collection with a `<Kind> <index>:` label one level deeper.

use std::fmt::Write as _;

use crate::node::{
    BindingField, Describable, Enum, EnumValue, Field, File, HttpBinding, HttpParameter, Message,
    Method, Root, Service,
};

/// Append one line of `text` indented by `depth` levels, without trailing whitespace.
fn line(out: &mut String, depth: usize, text: &str) {
    let _ = writeln!(out, "{}{}", "    ".repeat(depth), text.trim_end());
}

/// Append a labelled, indexed collection: one label line, then each item one level deeper.
fn collection<T: Describable>(out: &mut String, depth: usize, label: &str, items: &[T]) {
    for (index, item) in items.iter().enumerate() {
        line(out, depth, &format!("{label} {index}:"));
        out.push_str(&item.describe(depth.saturating_add(1)));
    }
}

/// The `Name:` / `Desc:` pair every node starts with.
pub fn generic(node: &dyn Describable, depth: usize) -> String {
    let mut out = String::new();
    line(&mut out, depth, &format!("Name: {}", node.name()));
    line(&mut out, depth, &format!("Desc: {}", node.description()));
    out
}

/// Files.
pub fn root(node: &Root, depth: usize) -> String {
    let mut out = generic(node, depth);
    collection(&mut out, depth, "File", &node.files);
    out
}

/// Services, then messages, then enums.
pub fn file(node: &File, depth: usize) -> String {
    let mut out = generic(node, depth);
    if !node.package.is_empty() {
        line(&mut out, depth, &format!("Package: {}", node.package));
    }
    collection(&mut out, depth, "Service", &node.services);
    collection(&mut out, depth, "Message", &node.messages);
    collection(&mut out, depth, "Enum", &node.enums);
    out
}

/// Fields.
pub fn message(node: &Message, depth: usize) -> String {
    let mut out = generic(node, depth);
    collection(&mut out, depth, "Field", &node.fields);
    out
}

/// Number, label, and the nested type node.
pub fn field(node: &Field, depth: usize) -> String {
    let mut out = generic(node, depth);
    line(&mut out, depth, &format!("Number: {}", node.number));
    line(&mut out, depth, &format!("Label: {}", node.label));
    line(&mut out, depth, "Type:");
    out.push_str(&node.field_type.describe(depth.saturating_add(1)));
    out
}

/// Values.
pub fn enumeration(node: &Enum, depth: usize) -> String {
    let mut out = generic(node, depth);
    collection(&mut out, depth, "Value", &node.values);
    out
}

/// Declared number.
pub fn enum_value(node: &EnumValue, depth: usize) -> String {
    let mut out = generic(node, depth);
    line(&mut out, depth, &format!("Number: {}", node.number));
    out
}

/// Qualified name, then methods.
pub fn service(node: &Service, depth: usize) -> String {
    let mut out = generic(node, depth);
    line(&mut out, depth, &format!("FullyQualifiedName: {}", node.fully_qualified_name));
    collection(&mut out, depth, "Method", &node.methods);
    out
}

/// Request and response type names, then bindings. Referenced messages are
/// printed by name only; their contents belong to the owning file.
pub fn method(node: &Method, depth: usize) -> String {
    let mut out = generic(node, depth);
    line(&mut out, depth, &format!("RequestType: {}", node.request.name));
    line(&mut out, depth, &format!("ResponseType: {}", node.response.name));
    collection(&mut out, depth, "HttpBinding", &node.http_bindings);
    out
}

/// Verb and path, then the raw option pairs and the parameters.
pub fn http_binding(node: &HttpBinding, depth: usize) -> String {
    let mut out = generic(node, depth);
    line(&mut out, depth, &format!("Verb: {}", node.verb));
    line(&mut out, depth, &format!("Path: {}", node.path));
    collection(&mut out, depth, "Field", &node.fields);
    collection(&mut out, depth, "Parameter", &node.parameters);
    out
}

/// Option key and value.
pub fn binding_field(node: &BindingField, depth: usize) -> String {
    let mut out = generic(node, depth);
    line(&mut out, depth, &format!("Kind: {}", node.kind));
    line(&mut out, depth, &format!("Value: {}", node.value));
    out
}

/// Where the parameter travels and its type.
pub fn http_parameter(node: &HttpParameter, depth: usize) -> String {
    let mut out = generic(node, depth);
    line(&mut out, depth, &format!("Location: {}", node.location));
    line(&mut out, depth, &format!("Type: {}", node.type_name));
    out
}

#[cfg(test)]
mod tests {
    use crate::node::{Describable as _, Field, FieldType, File, Message, Root};
    use crate::types::Label;

    #[test]
    fn indents_four_spaces_per_level() {
        let mut root = Root::new("svc");
        root.files.push(File {
            messages: vec![Message {
                fields: vec![Field {
                    field_type: FieldType {
                        name: "int32".to_string(),
                        ..FieldType::default()
                    },
                    label: Label::Repeated,
                    name: "x".to_string(),
                    number: 1,
                    ..Field::default()
                }],
                name: "Point".to_string(),
                ..Message::default()
            }],
            name: "svc.proto".to_string(),
            ..File::default()
        });

        let expected = "\
Name: svc
Desc:
File 0:
    Name: svc.proto
    Desc:
    Message 0:
        Name: Point
        Desc:
        Field 0:
            Name: x
            Desc:
            Number: 1
            Label: repeated
            Type:
                Name: int32
                Desc:
";
        assert_eq!(root.describe(0), expected);
    }

    #[test]
    fn depth_offsets_the_whole_block() {
        let message = Message {
            name: "Empty".to_string(),
            ..Message::default()
        };
        assert_eq!(message.describe(2), "        Name: Empty\n        Desc:\n");
    }
}
