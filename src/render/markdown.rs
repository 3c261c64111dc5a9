//! Markdown rendering: headings by depth, message anchors, and tables.
//!
//! Type names that carry a package separator (`.locator.Point`) link to the
//! anchor emitted above the message of the same simple name. Scalar names
//! (`int32`) never contain a dot and stay bare.

use std::fmt::Write as _;

use crate::node::{Describable, Enum, File, HttpBinding, Message, Method, Root, Service};

/// `#`-repeated heading at `depth`, followed by a blank line.
pub fn heading(depth: usize, text: &str) -> String {
    return format!("{} {text}\n\n", "#".repeat(depth));
}

/// Link a qualified type name to its message anchor; leave scalars bare.
pub fn name_link(type_name: &str) -> String {
    if !type_name.contains('.') {
        return type_name.to_string();
    }
    return match type_name.rsplit('.').next() {
        Some(name) if !name.is_empty() => format!("[{name}](#{name})"),
        _ => type_name.to_string(),
    };
}

/// Keep a value on one table row: newlines are dropped, pipes are escaped.
pub fn table_cell(text: &str) -> String {
    return text.replace(['\r', '\n'], "").replace('|', "\\|");
}

/// One `| a | b |` row.
pub fn table_row(cells: &[&str]) -> String {
    let mut row = String::from("|");
    for cell in cells {
        let _ = write!(row, " {cell} |");
    }
    row.push('\n');
    return row;
}

/// Header row plus the `| --- |` separator row.
fn table_header(columns: &[&str]) -> String {
    let rules: Vec<String> = columns.iter().map(|c| "-".repeat(c.len().max(3))).collect();
    let rules: Vec<&str> = rules.iter().map(String::as_str).collect();
    return table_row(columns) + &table_row(&rules);
}

/// Description paragraph, omitted for empty or single-character descriptions.
fn paragraph(description: &str) -> String {
    if description.chars().count() <= 1 {
        return String::new();
    }
    return format!("{description}\n\n");
}

/// Heading and description; the whole contribution of leaf nodes.
pub fn leaf(node: &dyn Describable, depth: usize) -> String {
    return heading(depth, node.name()) + &paragraph(node.description());
}

/// A `depth` subheading naming a collection, then each item at `depth + 1`.
/// Empty collections emit nothing.
fn section<T: Describable>(out: &mut String, depth: usize, title: &str, items: &[T]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&heading(depth, title));
    for item in items {
        out.push_str(&item.describe_markdown(depth.saturating_add(1)));
    }
}

/// Root heading, then each file one level deeper.
pub fn root(node: &Root, depth: usize) -> String {
    let mut out = leaf(node, depth);
    for file in &node.files {
        out.push_str(&file.describe_markdown(depth.saturating_add(1)));
    }
    return out;
}

/// Messages, enums, then services, each under its own subheading.
pub fn file(node: &File, depth: usize) -> String {
    let mut out = leaf(node, depth);
    let sub = depth.saturating_add(1);
    section(&mut out, sub, "Messages", &node.messages);
    section(&mut out, sub, "Enums", &node.enums);
    section(&mut out, sub, "Services", &node.services);
    return out;
}

/// Anchor, heading, description, then the field table.
pub fn message(node: &Message, depth: usize) -> String {
    // The anchor is keyed by simple name only; packages sharing a message
    // name will share an anchor.
    let mut out = format!("<a name=\"{}\"></a>\n\n", node.name);
    out.push_str(&leaf(node, depth));

    if node.fields.is_empty() {
        out.push('\n');
        return out;
    }

    out.push_str(&table_header(&["Name", "Type", "Field Number", "Description"]));
    for field in &node.fields {
        out.push_str(&table_row(&[
            table_cell(&field.name).as_str(),
            name_link(&field.field_type.name).as_str(),
            field.number.to_string().as_str(),
            table_cell(&field.description).as_str(),
        ]));
    }
    out.push('\n');
    return out;
}

/// Values in declared order.
pub fn enumeration(node: &Enum, depth: usize) -> String {
    let mut out = leaf(node, depth);
    out.push_str(&table_header(&["Number", "Name"]));
    for value in &node.values {
        out.push_str(&table_row(&[
            value.number.to_string().as_str(),
            table_cell(&value.name).as_str(),
        ]));
    }
    out.push_str("\n\n");
    return out;
}

/// Method table, then an "Http Methods" block with each method's bindings.
pub fn service(node: &Service, depth: usize) -> String {
    let mut out = leaf(node, depth);
    out.push_str(&table_header(&["Method Name", "Request Type", "Response Type", "Description"]));
    for method in &node.methods {
        out.push_str(&table_row(&[
            table_cell(&method.name).as_str(),
            name_link(&method.request.name).as_str(),
            name_link(&method.response.name).as_str(),
            table_cell(&method.description).as_str(),
        ]));
    }
    out.push('\n');

    out.push_str(&heading(depth, &format!("{} - Http Methods", node.name)));
    for method in &node.methods {
        out.push_str(&method.describe_markdown(depth.saturating_add(1)));
    }
    return out;
}

/// A method has no heading of its own: just its bindings, at the same depth.
pub fn method(node: &Method, depth: usize) -> String {
    return node
        .http_bindings
        .iter()
        .map(|binding| binding.describe_markdown(depth))
        .collect();
}

/// `VERB \`path\`` heading, description, parameter table.
pub fn http_binding(node: &HttpBinding, depth: usize) -> String {
    let title = format!("{} `{}`", node.verb.as_str().to_uppercase(), node.path);
    let mut out = heading(depth, &title);
    out.push_str(&paragraph(&node.description));
    out.push_str(&table_header(&["Parameter Name", "Location", "Type"]));
    for param in &node.parameters {
        out.push_str(&table_row(&[
            table_cell(&param.name).as_str(),
            param.location.as_str(),
            name_link(&param.type_name).as_str(),
        ]));
    }
    out.push('\n');
    return out;
}

#[cfg(test)]
mod tests {
    use super::{heading, name_link, table_cell};
    use crate::node::{
        Describable as _, Enum, EnumValue, Field, FieldType, HttpBinding, HttpParameter, Message,
        Method, Service,
    };
    use crate::types::{Location, Verb};

    fn int_field(name: &str, number: i32) -> Field {
        Field {
            field_type: FieldType {
                name: "int32".to_string(),
                ..FieldType::default()
            },
            name: name.to_string(),
            number,
            ..Field::default()
        }
    }

    #[test]
    fn qualified_names_link_to_last_segment() {
        assert_eq!(name_link("pkg.Foo"), "[Foo](#Foo)");
        assert_eq!(name_link(".a.b.Bar"), "[Bar](#Bar)");
    }

    #[test]
    fn scalar_names_stay_bare() {
        assert_eq!(name_link("int32"), "int32");
    }

    #[test]
    fn trailing_separator_stays_bare() {
        assert_eq!(name_link("pkg."), "pkg.");
    }

    #[test]
    fn heading_repeats_hashes() {
        assert_eq!(heading(3, "Point"), "### Point\n\n");
    }

    #[test]
    fn cells_are_single_line() {
        assert_eq!(table_cell("a\nb | c"), "ab \\| c");
        assert_eq!(table_cell("a\r\nb"), "ab");
    }

    #[test]
    fn description_paragraph_needs_two_characters() {
        let mut message = Message {
            name: "M".to_string(),
            ..Message::default()
        };
        let bare = message.describe_markdown(2);

        message.set_description("x");
        assert_eq!(message.describe_markdown(2), bare);

        message.set_description("abc");
        assert!(message.describe_markdown(2).contains("## M\n\nabc\n\n"));
    }

    #[test]
    fn empty_message_has_no_table() {
        let message = Message {
            name: "Empty".to_string(),
            ..Message::default()
        };
        let md = message.describe_markdown(2);
        assert_eq!(md, "<a name=\"Empty\"></a>\n\n## Empty\n\n\n");
        assert!(!md.contains("| Name | Type |"));
    }

    #[test]
    fn message_table_strips_newlines_from_descriptions() {
        let mut x = int_field("x", 1);
        x.set_description("Horizontal offset,\n in pixels.");
        let message = Message {
            fields: vec![x, int_field("y", 2)],
            name: "Point".to_string(),
            ..Message::default()
        };
        let md = message.describe_markdown(4);
        assert!(md.starts_with("<a name=\"Point\"></a>\n\n#### Point\n\n"));
        assert!(md.contains("| Name | Type | Field Number | Description |\n"));
        assert!(md.contains("| x | int32 | 1 | Horizontal offset, in pixels. |\n"));
        assert!(md.contains("| y | int32 | 2 |  |\n"));
    }

    #[test]
    fn enum_values_keep_declared_order() {
        let e = Enum {
            name: "Shape".to_string(),
            values: vec![
                EnumValue {
                    name: "SQUARE".to_string(),
                    number: 2,
                    ..EnumValue::default()
                },
                EnumValue {
                    name: "CIRCLE".to_string(),
                    number: 0,
                    ..EnumValue::default()
                },
            ],
            ..Enum::default()
        };
        let md = e.describe_markdown(3);
        let square = md.find("| 2 | SQUARE |").unwrap();
        let circle = md.find("| 0 | CIRCLE |").unwrap();
        assert!(square < circle, "values reordered: {md}");
    }

    #[test]
    fn method_without_bindings_renders_nothing() {
        assert_eq!(Method::default().describe_markdown(3), "");
    }

    #[test]
    fn binding_heading_and_parameters() {
        let binding = HttpBinding {
            parameters: vec![HttpParameter {
                description: String::new(),
                location: Location::Path,
                name: "id".to_string(),
                type_name: ".locator.Id".to_string(),
            }],
            path: "/points/{id}".to_string(),
            verb: Verb::Get,
            ..HttpBinding::default()
        };
        let md = binding.describe_markdown(5);
        assert!(md.starts_with("##### GET `/points/{id}`\n\n"));
        assert!(md.contains("| id | path | [Id](#Id) |\n"));
    }

    #[test]
    fn service_without_methods_keeps_table_header() {
        let service = Service {
            name: "Idle".to_string(),
            ..Service::default()
        };
        let md = service.describe_markdown(4);
        assert_eq!(
            md,
            "#### Idle\n\n\
             | Method Name | Request Type | Response Type | Description |\n\
             | ----------- | ------------ | ------------- | ----------- |\n\
             \n\
             #### Idle - Http Methods\n\n"
        );
    }

    #[test]
    fn enum_without_values_keeps_table_header() {
        let e = Enum {
            name: "E".to_string(),
            ..Enum::default()
        };
        assert_eq!(e.describe_markdown(3), "### E\n\n| Number | Name |\n| ------ | ---- |\n\n\n");
    }

    #[test]
    fn binding_without_parameters_keeps_table_header() {
        let binding = HttpBinding {
            path: "/x".to_string(),
            verb: Verb::Get,
            ..HttpBinding::default()
        };
        assert_eq!(
            binding.describe_markdown(3),
            "### GET `/x`\n\n| Parameter Name | Location | Type |\n| -------------- | -------- | ---- |\n\n"
        );
    }

    #[test]
    fn leaf_markdown_does_not_recurse() {
        let field = int_field("x", 1);
        assert_eq!(field.describe_markdown(3), "### x\n\n");
    }
}
