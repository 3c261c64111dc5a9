//! Schema descriptions and the tree builder.
//!
//! A [`SchemaDescription`] is what a protoc plugin front end hands over:
//! files, messages, enums, services, methods and their HTTP options, with
//! names and structural metadata but no comments. [`build`] turns it into an
//! undocumented [`Root`]; comments are attached afterwards by name path.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::Error;
use crate::node::{
    BindingField, Enum, EnumId, EnumValue, Field, FieldType, File, HttpBinding, HttpParameter,
    Message, MessageId, MessageRef, Method, Root, Service,
};
use crate::types::{Label, Location, Verb};

/// `{name}` and `{name=pattern}` variables of a path template.
#[allow(clippy::expect_used, reason = "literal pattern, exercised by the tests below")]
static PATH_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}=]+)(?:=[^}]*)?\}").expect("valid regex"));

/// The whole schema unit as described by the compiler front end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDescription {
    /// Files in the order the compiler was asked to generate them.
    #[serde(default)]
    pub files: Vec<FileDescription>,
    /// Name for the root node.
    pub name: String,
}

/// One `.proto` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescription {
    /// Top-level enums.
    #[serde(default)]
    pub enums: Vec<EnumDescription>,
    /// Top-level messages.
    #[serde(default)]
    pub messages: Vec<MessageDescription>,
    /// File name as given to the compiler.
    pub name: String,
    /// Protobuf package, empty when none is declared.
    #[serde(default)]
    pub package: String,
    /// Services.
    #[serde(default)]
    pub services: Vec<ServiceDescription>,
}

/// A message declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDescription {
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescription>,
    /// Simple name.
    pub name: String,
}

/// A field declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescription {
    /// Repetition label; optional when omitted.
    #[serde(default)]
    pub label: Label,
    /// Field name.
    pub name: String,
    /// Field number.
    pub number: i32,
    /// Scalar name (`int32`) or qualified message/enum name (`.pkg.Point`).
    pub type_name: String,
}

/// An enum declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDescription {
    /// Simple name.
    pub name: String,
    /// Members in declaration order.
    #[serde(default)]
    pub values: Vec<EnumValueDescription>,
}

/// An enum member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValueDescription {
    /// Member name.
    pub name: String,
    /// Declared number.
    pub number: i32,
}

/// A service declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescription {
    /// RPCs in declaration order.
    #[serde(default)]
    pub methods: Vec<MethodDescription>,
    /// Simple name.
    pub name: String,
}

/// An RPC declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescription {
    /// `google.api.http` rules, the primary rule first.
    #[serde(default)]
    pub http: Vec<HttpRuleDescription>,
    /// Qualified request message name.
    pub input_type: String,
    /// RPC name.
    pub name: String,
    /// Qualified response message name.
    pub output_type: String,
}

/// One `google.api.http` rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRuleDescription {
    /// Any other `key: "value"` pairs of the option, kept verbatim.
    #[serde(default)]
    pub additional: Vec<BindingPair>,
    /// `body` key: `*`, a field name, or absent.
    #[serde(default)]
    pub body: Option<String>,
    /// Path template.
    pub path: String,
    /// Option key naming the HTTP method, e.g. `get`.
    pub verb: String,
}

/// A raw `key: "value"` pair of an HTTP option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingPair {
    /// Left-hand side.
    pub kind: String,
    /// Right-hand side.
    pub value: String,
}

/// Parse a schema description from JSON.
///
/// # Errors
///
/// Returns `Error::Json` if the content does not match the description shape.
pub fn parse(content: &str) -> Result<SchemaDescription, Error> {
    return Ok(serde_json::from_str(content)?);
}

/// Read and parse a schema description file.
///
/// # Errors
///
/// Returns `Error::SchemaNotFound` if the file does not exist,
/// `Error::Io` for other read failures, or `Error::Json` if it is malformed.
pub fn load(path: &Path) -> Result<SchemaDescription, Error> {
    let content = match std::fs::read_to_string(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::SchemaNotFound { path: path.to_path_buf() });
        },
        Err(e) => return Err(Error::Io(e)),
        Ok(c) => c,
    };
    return parse(&content);
}

/// Build an undocumented tree from a schema description.
///
/// Files filtered out by `config` are skipped entirely; references into them
/// stay unresolved. Method request/response names and field enum types are
/// matched against everything that was kept.
///
/// # Errors
///
/// Returns `Error::SchemaInvalid` for an HTTP rule with an unknown verb.
pub fn build(schema: &SchemaDescription, config: &Config) -> Result<Root, Error> {
    let kept: Vec<&FileDescription> = schema
        .files
        .iter()
        .filter(|f| config.should_document(&f.name))
        .collect();

    let mut root = Root::new(config.title().unwrap_or(schema.name.as_str()));
    for file in &kept {
        root.files.push(build_file_types(file));
    }

    let index = TypeIndex::new(&root);
    link_enum_types(&mut root, &index);

    for (slot, file) in kept.iter().enumerate() {
        let services = file
            .services
            .iter()
            .map(|service| build_service(service, &file.package, &root, &index))
            .collect::<Result<Vec<Service>, Error>>()?;
        if let Some(built) = root.files.get_mut(slot) {
            built.services = services;
        }
    }

    debug!(
        files = root.files.len(),
        skipped = schema.files.len().saturating_sub(kept.len()),
        "tree built"
    );
    return Ok(root);
}

/// Messages and enums of one file; services come later, once every type is known.
fn build_file_types(file: &FileDescription) -> File {
    let messages = file
        .messages
        .iter()
        .map(|m| Message {
            description: String::new(),
            fields: m.fields.iter().map(build_field).collect(),
            name: m.name.clone(),
        })
        .collect();

    let enums = file
        .enums
        .iter()
        .map(|e| Enum {
            description: String::new(),
            name: e.name.clone(),
            values: e
                .values
                .iter()
                .map(|v| EnumValue {
                    description: String::new(),
                    name: v.name.clone(),
                    number: v.number,
                })
                .collect(),
        })
        .collect();

    return File {
        description: String::new(),
        enums,
        messages,
        name: file.name.clone(),
        package: file.package.clone(),
        services: Vec::new(),
    };
}

/// A field with its type name; enum links are filled in once every file is known.
fn build_field(field: &FieldDescription) -> Field {
    return Field {
        description: String::new(),
        field_type: FieldType {
            description: String::new(),
            enum_ref: None,
            name: field.type_name.clone(),
        },
        label: field.label,
        name: field.name.clone(),
        number: field.number,
    };
}

/// Point every field type that names a known enum at it.
fn link_enum_types(root: &mut Root, index: &TypeIndex) {
    for file in &mut root.files {
        for message in &mut file.messages {
            for field in &mut message.fields {
                field.field_type.enum_ref = index.enumeration(&field.field_type.name);
            }
        }
    }
}

/// A service and its methods, qualified by the owning file's package.
fn build_service(
    service: &ServiceDescription,
    package: &str,
    root: &Root,
    index: &TypeIndex,
) -> Result<Service, Error> {
    let methods = service
        .methods
        .iter()
        .map(|method| build_method(method, root, index))
        .collect::<Result<Vec<Method>, Error>>()?;

    return Ok(Service {
        description: String::new(),
        fully_qualified_name: qualify(package, &service.name),
        methods,
        name: service.name.clone(),
    });
}

/// A method with resolved request/response references and contextualized bindings.
fn build_method(method: &MethodDescription, root: &Root, index: &TypeIndex) -> Result<Method, Error> {
    let request = message_ref(&method.input_type, index, &method.name);
    let response = message_ref(&method.output_type, index, &method.name);
    let request_fields: &[Field] = request
        .target
        .and_then(|id| root.message(id))
        .map(|m| m.fields.as_slice())
        .unwrap_or_default();

    let http_bindings = method
        .http
        .iter()
        .map(|rule| build_binding(rule, request_fields))
        .collect::<Result<Vec<HttpBinding>, Error>>()?;

    return Ok(Method {
        description: String::new(),
        http_bindings,
        name: method.name.clone(),
        request,
        response,
    });
}

/// Reference a message by name, warning when it is not part of the tree.
fn message_ref(type_name: &str, index: &TypeIndex, method: &str) -> MessageRef {
    let target = index.message(type_name);
    if target.is_none() {
        warn!(method, type_name, "method references a message outside the documented files");
    }
    return MessageRef {
        name: type_name.to_string(),
        target,
    };
}

/// One HTTP rule: its raw pairs plus the request fields placed into path, query or body.
///
/// # Errors
///
/// Returns `Error::SchemaInvalid` if the verb is not an HTTP option key.
fn build_binding(rule: &HttpRuleDescription, request_fields: &[Field]) -> Result<HttpBinding, Error> {
    let verb: Verb = rule.verb.parse()?;

    let mut fields = vec![pair(verb.as_str(), &rule.path)];
    if let Some(body) = &rule.body {
        fields.push(pair("body", body));
    }
    fields.extend(rule.additional.iter().map(|p| pair(&p.kind, &p.value)));

    let path_variables = path_variables(&rule.path);
    let parameters = request_fields
        .iter()
        .map(|field| HttpParameter {
            description: String::new(),
            location: locate(field, verb, &path_variables, rule.body.as_deref()),
            name: field.name.clone(),
            type_name: field.field_type.name.clone(),
        })
        .collect();

    return Ok(HttpBinding {
        description: String::new(),
        fields,
        name: format!("{} {}", verb.as_str(), rule.path),
        parameters,
        path: rule.path.clone(),
        verb,
    });
}

/// A raw option pair as a binding field named after its key.
fn pair(kind: &str, value: &str) -> BindingField {
    return BindingField {
        description: String::new(),
        kind: kind.to_string(),
        name: kind.to_string(),
        value: value.to_string(),
    };
}

/// Top-level field names bound by the path template. `{a.b}` binds `a`.
fn path_variables(path: &str) -> Vec<String> {
    return PATH_VARIABLE
        .captures_iter(path)
        .filter_map(|cap| cap.get(1))
        .filter_map(|m| m.as_str().split('.').next())
        .map(|name| name.trim().to_string())
        .collect();
}

/// Path variables win; then the body, for verbs that carry one; everything else is query.
fn locate(field: &Field, verb: Verb, path_variables: &[String], body: Option<&str>) -> Location {
    if path_variables.iter().any(|v| *v == field.name) {
        return Location::Path;
    }
    let in_body = verb.carries_body() && matches!(body, Some(b) if b == "*" || b == field.name);
    if in_body {
        return Location::Body;
    }
    return Location::Query;
}

/// `package.Name`, or `Name` alone without a package.
fn qualify(package: &str, name: &str) -> String {
    if package.is_empty() {
        return name.to_string();
    }
    return format!("{package}.{name}");
}

/// Type name lookup over the messages and enums of a tree.
///
/// Each type is reachable as `.pkg.Name`, `pkg.Name`, and bare `Name`; the
/// first declaration wins when two types share a key.
struct TypeIndex {
    /// Enum handles by every accepted spelling.
    enums: HashMap<String, EnumId>,
    /// Message handles by every accepted spelling.
    messages: HashMap<String, MessageId>,
}

impl TypeIndex {
    /// Index every message and enum of `root`.
    fn new(root: &Root) -> Self {
        let mut messages = HashMap::new();
        let mut enums = HashMap::new();

        for (file_slot, file) in root.files.iter().enumerate() {
            for (slot, message) in file.messages.iter().enumerate() {
                let id = MessageId { file: file_slot, message: slot };
                for key in spellings(&file.package, &message.name) {
                    messages.entry(key).or_insert(id);
                }
            }
            for (slot, enumeration) in file.enums.iter().enumerate() {
                let id = EnumId { enumeration: slot, file: file_slot };
                for key in spellings(&file.package, &enumeration.name) {
                    enums.entry(key).or_insert(id);
                }
            }
        }

        return Self { enums, messages };
    }

    /// Handle of the message named `type_name`.
    fn message(&self, type_name: &str) -> Option<MessageId> {
        return self.messages.get(type_name).copied();
    }

    /// Handle of the enum named `type_name`.
    fn enumeration(&self, type_name: &str) -> Option<EnumId> {
        return self.enums.get(type_name).copied();
    }
}

/// Every spelling a type can be referred to by.
fn spellings(package: &str, name: &str) -> Vec<String> {
    let qualified = qualify(package, name);
    return vec![format!(".{qualified}"), qualified, name.to_string()];
}
