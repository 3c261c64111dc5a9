//! The documentation tree.
//!
//! A [`Root`] owns files, files own services, messages and enums, and so on
//! down to the leaves. Every node kind implements [`Describable`]. Nodes never
//! point at their parents; the two non-owning relations (a method's request
//! and response messages, a field type's enum) are typed indices into the
//! root, resolved through [`Root::message`] and [`Root::enumeration`].
//!
//! Lookups by name return a [`Child`], which [`NodeId::child`] turns into an
//! absolute handle. [`Root::node`] and [`Root::node_mut`] hand that handle
//! back as a concrete node without any downcasting.

use crate::render::{markdown, outline};
use crate::scrub::scrub;
use crate::types::{Label, Location, Verb};

/// Capabilities shared by every node in the tree.
pub trait Describable {
    /// Name of this node within its parent's collection.
    fn name(&self) -> &str;

    /// Replace the name.
    fn set_name(&mut self, name: &str);

    /// Clean description text, empty when undocumented.
    fn description(&self) -> &str;

    /// Store `scrub(raw)` as the description. Raw text is not retained.
    fn set_description(&mut self, raw: &str);

    /// Indented plain-text outline of this node and everything it owns.
    /// `depth` is the indentation level, four spaces each.
    fn describe(&self, depth: usize) -> String;

    /// Markdown for this node; `depth` is the heading level.
    fn describe_markdown(&self, depth: usize) -> String;

    /// Single-level lookup: the first direct child named `name`, if any.
    fn get_by_name(&self, name: &str) -> Option<Child>;

    /// Names reachable through [`Describable::get_by_name`], in scan order.
    fn child_names(&self) -> Vec<&str>;
}

/// Implements the name and description accessors for a struct with
/// `name: String` and `description: String` fields.
macro_rules! name_and_description {
    () => {
        fn name(&self) -> &str {
            return &self.name;
        }

        fn set_name(&mut self, name: &str) {
            self.name = name.to_string();
        }

        fn description(&self) -> &str {
            return &self.description;
        }

        fn set_description(&mut self, raw: &str) {
            self.description = scrub(raw);
        }
    };
}

/// First index in `items` whose name is exactly `name`.
fn position_by_name<T: Describable>(items: &[T], name: &str) -> Option<usize> {
    return items.iter().position(|item| item.name() == name);
}

// ── Handles ───────────────────────────────────────────────────────────

/// Absolute address of a message: file slot, then message slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId {
    /// Index into [`Root::files`].
    pub file: usize,
    /// Index into [`File::messages`].
    pub message: usize,
}

/// Absolute address of an enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumId {
    /// Index into [`File::enums`].
    pub enumeration: usize,
    /// Index into [`Root::files`].
    pub file: usize,
}

/// Absolute address of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceId {
    /// Index into [`Root::files`].
    pub file: usize,
    /// Index into [`File::services`].
    pub service: usize,
}

/// Absolute address of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodId {
    /// Index into [`Service::methods`].
    pub method: usize,
    /// Owning service.
    pub service: ServiceId,
}

/// Absolute address of an HTTP binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId {
    /// Index into [`Method::http_bindings`].
    pub binding: usize,
    /// Owning method.
    pub method: MethodId,
}

/// Result of a name lookup, relative to the node that was asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Child {
    /// Slot in [`HttpBinding::fields`].
    BindingField(usize),
    /// Slot in [`File::enums`].
    Enum(usize),
    /// Slot in [`Enum::values`].
    EnumValue(usize),
    /// Slot in [`Message::fields`].
    Field(usize),
    /// Slot in [`Root::files`].
    File(usize),
    /// Slot in [`Method::http_bindings`].
    HttpBinding(usize),
    /// Slot in [`HttpBinding::parameters`].
    HttpParameter(usize),
    /// Slot in [`File::messages`].
    Message(usize),
    /// Slot in [`Service::methods`].
    Method(usize),
    /// A message owned elsewhere, reached through a method's request or response.
    Referenced(MessageId),
    /// Slot in [`File::services`].
    Service(usize),
}

/// Absolute, typed address of any node in a [`Root`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    /// A raw annotation pair of a binding.
    BindingField {
        /// Owning binding.
        binding: BindingId,
        /// Index into [`HttpBinding::fields`].
        field: usize,
    },
    /// An enum.
    Enum(EnumId),
    /// A member of an enum.
    EnumValue {
        /// Owning enum.
        enumeration: EnumId,
        /// Index into [`Enum::values`].
        value: usize,
    },
    /// A message field.
    Field {
        /// Index into [`Message::fields`].
        field: usize,
        /// Owning message.
        message: MessageId,
    },
    /// The type node of a message field.
    FieldType {
        /// Index into [`Message::fields`].
        field: usize,
        /// Owning message.
        message: MessageId,
    },
    /// A schema source file.
    File(usize),
    /// An HTTP binding of a method.
    HttpBinding(BindingId),
    /// A contextualized parameter of a binding.
    HttpParameter {
        /// Owning binding.
        binding: BindingId,
        /// Index into [`HttpBinding::parameters`].
        parameter: usize,
    },
    /// A message.
    Message(MessageId),
    /// An RPC method.
    Method(MethodId),
    /// The root definition itself.
    Root,
    /// A service.
    Service(ServiceId),
}

impl NodeId {
    /// Address of `child` as seen from this node. `None` when the pairing
    /// cannot occur, e.g. a `Field` slot under a file.
    pub const fn child(self, child: Child) -> Option<NodeId> {
        return match (self, child) {
            (NodeId::Root, Child::File(file)) => Some(NodeId::File(file)),
            (NodeId::File(file), Child::Service(service)) => {
                Some(NodeId::Service(ServiceId { file, service }))
            },
            (NodeId::File(file), Child::Message(message)) => {
                Some(NodeId::Message(MessageId { file, message }))
            },
            (NodeId::File(file), Child::Enum(enumeration)) => {
                Some(NodeId::Enum(EnumId { enumeration, file }))
            },
            (NodeId::Message(message), Child::Field(field)) => {
                Some(NodeId::Field { field, message })
            },
            (NodeId::Enum(enumeration), Child::EnumValue(value)) => {
                Some(NodeId::EnumValue { enumeration, value })
            },
            (NodeId::Service(service), Child::Method(method)) => {
                Some(NodeId::Method(MethodId { method, service }))
            },
            (NodeId::Method(_), Child::Referenced(message)) => Some(NodeId::Message(message)),
            (NodeId::Method(method), Child::HttpBinding(binding)) => {
                Some(NodeId::HttpBinding(BindingId { binding, method }))
            },
            (NodeId::HttpBinding(binding), Child::BindingField(field)) => {
                Some(NodeId::BindingField { binding, field })
            },
            (NodeId::HttpBinding(binding), Child::HttpParameter(parameter)) => {
                Some(NodeId::HttpParameter { binding, parameter })
            },
            _ => None,
        };
    }
}

// ── Root ──────────────────────────────────────────────────────────────

/// The whole schema unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Root {
    /// Clean description.
    pub description: String,
    /// Schema source files, in declaration order.
    pub files: Vec<File>,
    /// Name of the documented unit, usually the service name.
    pub name: String,
}

impl Root {
    /// Create an undocumented root with no files.
    pub fn new(name: &str) -> Self {
        return Self {
            description: String::new(),
            files: Vec::new(),
            name: name.to_string(),
        };
    }

    /// The message at `id`.
    pub fn message(&self, id: MessageId) -> Option<&Message> {
        return self.files.get(id.file)?.messages.get(id.message);
    }

    /// The enum at `id`.
    pub fn enumeration(&self, id: EnumId) -> Option<&Enum> {
        return self.files.get(id.file)?.enums.get(id.enumeration);
    }

    /// The service at `id`.
    pub fn service(&self, id: ServiceId) -> Option<&Service> {
        return self.files.get(id.file)?.services.get(id.service);
    }

    /// The method at `id`.
    pub fn method(&self, id: MethodId) -> Option<&Method> {
        return self.service(id.service)?.methods.get(id.method);
    }

    /// The HTTP binding at `id`.
    pub fn binding(&self, id: BindingId) -> Option<&HttpBinding> {
        return self.method(id.method)?.http_bindings.get(id.binding);
    }

    /// Borrow the node at `id`.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        return match id {
            NodeId::Root => Some(NodeRef::Root(self)),
            NodeId::File(file) => self.files.get(file).map(NodeRef::File),
            NodeId::Message(message) => self.message(message).map(NodeRef::Message),
            NodeId::Field { field, message } => {
                self.message(message)?.fields.get(field).map(NodeRef::Field)
            },
            NodeId::FieldType { field, message } => self
                .message(message)?
                .fields
                .get(field)
                .map(|f| NodeRef::FieldType(&f.field_type)),
            NodeId::Enum(enumeration) => self.enumeration(enumeration).map(NodeRef::Enum),
            NodeId::EnumValue { enumeration, value } => {
                self.enumeration(enumeration)?.values.get(value).map(NodeRef::EnumValue)
            },
            NodeId::Service(service) => self.service(service).map(NodeRef::Service),
            NodeId::Method(method) => self.method(method).map(NodeRef::Method),
            NodeId::HttpBinding(binding) => self.binding(binding).map(NodeRef::HttpBinding),
            NodeId::BindingField { binding, field } => {
                self.binding(binding)?.fields.get(field).map(NodeRef::BindingField)
            },
            NodeId::HttpParameter { binding, parameter } => self
                .binding(binding)?
                .parameters
                .get(parameter)
                .map(NodeRef::HttpParameter),
        };
    }

    /// Mutably borrow the node at `id`.
    pub fn node_mut(&mut self, id: NodeId) -> Option<NodeMut<'_>> {
        return match id {
            NodeId::Root => Some(NodeMut::Root(self)),
            NodeId::File(file) => self.files.get_mut(file).map(NodeMut::File),
            NodeId::Message(message) => self.message_mut(message).map(NodeMut::Message),
            NodeId::Field { field, message } => {
                self.message_mut(message)?.fields.get_mut(field).map(NodeMut::Field)
            },
            NodeId::FieldType { field, message } => self
                .message_mut(message)?
                .fields
                .get_mut(field)
                .map(|f| NodeMut::FieldType(&mut f.field_type)),
            NodeId::Enum(enumeration) => self.enumeration_mut(enumeration).map(NodeMut::Enum),
            NodeId::EnumValue { enumeration, value } => self
                .enumeration_mut(enumeration)?
                .values
                .get_mut(value)
                .map(NodeMut::EnumValue),
            NodeId::Service(service) => self.service_mut(service).map(NodeMut::Service),
            NodeId::Method(method) => self.method_mut(method).map(NodeMut::Method),
            NodeId::HttpBinding(binding) => self.binding_mut(binding).map(NodeMut::HttpBinding),
            NodeId::BindingField { binding, field } => {
                self.binding_mut(binding)?.fields.get_mut(field).map(NodeMut::BindingField)
            },
            NodeId::HttpParameter { binding, parameter } => self
                .binding_mut(binding)?
                .parameters
                .get_mut(parameter)
                .map(NodeMut::HttpParameter),
        };
    }

    /// Mutable counterpart of [`Root::message`].
    fn message_mut(&mut self, id: MessageId) -> Option<&mut Message> {
        return self.files.get_mut(id.file)?.messages.get_mut(id.message);
    }

    /// Mutable counterpart of [`Root::enumeration`].
    fn enumeration_mut(&mut self, id: EnumId) -> Option<&mut Enum> {
        return self.files.get_mut(id.file)?.enums.get_mut(id.enumeration);
    }

    /// Mutable counterpart of [`Root::service`].
    fn service_mut(&mut self, id: ServiceId) -> Option<&mut Service> {
        return self.files.get_mut(id.file)?.services.get_mut(id.service);
    }

    /// Mutable counterpart of [`Root::method`].
    fn method_mut(&mut self, id: MethodId) -> Option<&mut Method> {
        return self.service_mut(id.service)?.methods.get_mut(id.method);
    }

    /// Mutable counterpart of [`Root::binding`].
    fn binding_mut(&mut self, id: BindingId) -> Option<&mut HttpBinding> {
        return self.method_mut(id.method)?.http_bindings.get_mut(id.binding);
    }
}

impl Describable for Root {
    name_and_description!();

    fn describe(&self, depth: usize) -> String {
        return outline::root(self, depth);
    }

    fn describe_markdown(&self, depth: usize) -> String {
        return markdown::root(self, depth);
    }

    fn get_by_name(&self, name: &str) -> Option<Child> {
        return position_by_name(&self.files, name).map(Child::File);
    }

    fn child_names(&self) -> Vec<&str> {
        return self.files.iter().map(Describable::name).collect();
    }
}

/// Shared borrow of one node, tagged with its kind.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    /// See [`BindingField`].
    BindingField(&'a BindingField),
    /// See [`Enum`].
    Enum(&'a Enum),
    /// See [`EnumValue`].
    EnumValue(&'a EnumValue),
    /// See [`Field`].
    Field(&'a Field),
    /// See [`FieldType`].
    FieldType(&'a FieldType),
    /// See [`File`].
    File(&'a File),
    /// See [`HttpBinding`].
    HttpBinding(&'a HttpBinding),
    /// See [`HttpParameter`].
    HttpParameter(&'a HttpParameter),
    /// See [`Message`].
    Message(&'a Message),
    /// See [`Method`].
    Method(&'a Method),
    /// See [`Root`].
    Root(&'a Root),
    /// See [`Service`].
    Service(&'a Service),
}

impl<'a> NodeRef<'a> {
    /// The node behind its shared capability set.
    pub fn describable(self) -> &'a dyn Describable {
        return match self {
            NodeRef::BindingField(n) => n,
            NodeRef::Enum(n) => n,
            NodeRef::EnumValue(n) => n,
            NodeRef::Field(n) => n,
            NodeRef::FieldType(n) => n,
            NodeRef::File(n) => n,
            NodeRef::HttpBinding(n) => n,
            NodeRef::HttpParameter(n) => n,
            NodeRef::Message(n) => n,
            NodeRef::Method(n) => n,
            NodeRef::Root(n) => n,
            NodeRef::Service(n) => n,
        };
    }
}

/// Exclusive borrow of one node, tagged with its kind.
#[derive(Debug)]
pub enum NodeMut<'a> {
    /// See [`BindingField`].
    BindingField(&'a mut BindingField),
    /// See [`Enum`].
    Enum(&'a mut Enum),
    /// See [`EnumValue`].
    EnumValue(&'a mut EnumValue),
    /// See [`Field`].
    Field(&'a mut Field),
    /// See [`FieldType`].
    FieldType(&'a mut FieldType),
    /// See [`File`].
    File(&'a mut File),
    /// See [`HttpBinding`].
    HttpBinding(&'a mut HttpBinding),
    /// See [`HttpParameter`].
    HttpParameter(&'a mut HttpParameter),
    /// See [`Message`].
    Message(&'a mut Message),
    /// See [`Method`].
    Method(&'a mut Method),
    /// See [`Root`].
    Root(&'a mut Root),
    /// See [`Service`].
    Service(&'a mut Service),
}

impl<'a> NodeMut<'a> {
    /// The node behind its shared capability set, writable.
    pub fn describable_mut(self) -> &'a mut dyn Describable {
        return match self {
            NodeMut::BindingField(n) => n,
            NodeMut::Enum(n) => n,
            NodeMut::EnumValue(n) => n,
            NodeMut::Field(n) => n,
            NodeMut::FieldType(n) => n,
            NodeMut::File(n) => n,
            NodeMut::HttpBinding(n) => n,
            NodeMut::HttpParameter(n) => n,
            NodeMut::Message(n) => n,
            NodeMut::Method(n) => n,
            NodeMut::Root(n) => n,
            NodeMut::Service(n) => n,
        };
    }
}

// ── Files, messages, enums ────────────────────────────────────────────

/// One schema source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct File {
    /// Clean description.
    pub description: String,
    /// Enums declared at file level.
    pub enums: Vec<Enum>,
    /// Messages declared at file level.
    pub messages: Vec<Message>,
    /// File name as given to the compiler, e.g. `locator/locator.proto`.
    pub name: String,
    /// Protobuf package, empty when the file declares none.
    pub package: String,
    /// Services declared in this file.
    pub services: Vec<Service>,
}

impl Describable for File {
    name_and_description!();

    fn describe(&self, depth: usize) -> String {
        return outline::file(self, depth);
    }

    fn describe_markdown(&self, depth: usize) -> String {
        return markdown::file(self, depth);
    }

    /// Scans services, then messages, then enums.
    fn get_by_name(&self, name: &str) -> Option<Child> {
        if let Some(index) = position_by_name(&self.services, name) {
            return Some(Child::Service(index));
        }
        if let Some(index) = position_by_name(&self.messages, name) {
            return Some(Child::Message(index));
        }
        return position_by_name(&self.enums, name).map(Child::Enum);
    }

    fn child_names(&self) -> Vec<&str> {
        let services = self.services.iter().map(Describable::name);
        let messages = self.messages.iter().map(Describable::name);
        let enums = self.enums.iter().map(Describable::name);
        return services.chain(messages).chain(enums).collect();
    }
}

/// A structured record type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Clean description.
    pub description: String,
    /// Members, in declaration order.
    pub fields: Vec<Field>,
    /// Simple name, e.g. `Point`.
    pub name: String,
}

impl Describable for Message {
    name_and_description!();

    fn describe(&self, depth: usize) -> String {
        return outline::message(self, depth);
    }

    fn describe_markdown(&self, depth: usize) -> String {
        return markdown::message(self, depth);
    }

    fn get_by_name(&self, name: &str) -> Option<Child> {
        return position_by_name(&self.fields, name).map(Child::Field);
    }

    fn child_names(&self) -> Vec<&str> {
        return self.fields.iter().map(Describable::name).collect();
    }
}

/// One message member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    /// Clean description.
    pub description: String,
    /// Declared type.
    pub field_type: FieldType,
    /// Repetition label.
    pub label: Label,
    /// Field name.
    pub name: String,
    /// Field number (tag).
    pub number: i32,
}

impl Describable for Field {
    name_and_description!();

    fn describe(&self, depth: usize) -> String {
        return outline::field(self, depth);
    }

    fn describe_markdown(&self, depth: usize) -> String {
        return markdown::leaf(self, depth);
    }

    fn get_by_name(&self, _name: &str) -> Option<Child> {
        return None;
    }

    fn child_names(&self) -> Vec<&str> {
        return Vec::new();
    }
}

/// A scalar type name like `int32`, or a qualified reference like `.pkg.Point`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldType {
    /// Clean description.
    pub description: String,
    /// The enum this type names, when it names one in this tree.
    pub enum_ref: Option<EnumId>,
    /// Type name as declared.
    pub name: String,
}

impl Describable for FieldType {
    name_and_description!();

    fn describe(&self, depth: usize) -> String {
        return outline::generic(self, depth);
    }

    fn describe_markdown(&self, depth: usize) -> String {
        return markdown::leaf(self, depth);
    }

    fn get_by_name(&self, _name: &str) -> Option<Child> {
        return None;
    }

    fn child_names(&self) -> Vec<&str> {
        return Vec::new();
    }
}

/// An enumerated type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enum {
    /// Clean description.
    pub description: String,
    /// Simple name.
    pub name: String,
    /// Members, in declaration order.
    pub values: Vec<EnumValue>,
}

impl Describable for Enum {
    name_and_description!();

    fn describe(&self, depth: usize) -> String {
        return outline::enumeration(self, depth);
    }

    fn describe_markdown(&self, depth: usize) -> String {
        return markdown::enumeration(self, depth);
    }

    fn get_by_name(&self, name: &str) -> Option<Child> {
        return position_by_name(&self.values, name).map(Child::EnumValue);
    }

    fn child_names(&self) -> Vec<&str> {
        return self.values.iter().map(Describable::name).collect();
    }
}

/// One enum member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumValue {
    /// Clean description.
    pub description: String,
    /// Member name.
    pub name: String,
    /// Declared number.
    pub number: i32,
}

impl Describable for EnumValue {
    name_and_description!();

    fn describe(&self, depth: usize) -> String {
        return outline::enum_value(self, depth);
    }

    fn describe_markdown(&self, depth: usize) -> String {
        return markdown::leaf(self, depth);
    }

    fn get_by_name(&self, _name: &str) -> Option<Child> {
        return None;
    }

    fn child_names(&self) -> Vec<&str> {
        return Vec::new();
    }
}

// ── Services ──────────────────────────────────────────────────────────

/// A collection of RPC methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Service {
    /// Clean description.
    pub description: String,
    /// `package.Service`, or just the name without a package.
    pub fully_qualified_name: String,
    /// RPCs, in declaration order.
    pub methods: Vec<Method>,
    /// Simple name.
    pub name: String,
}

impl Describable for Service {
    name_and_description!();

    fn describe(&self, depth: usize) -> String {
        return outline::service(self, depth);
    }

    fn describe_markdown(&self, depth: usize) -> String {
        return markdown::service(self, depth);
    }

    fn get_by_name(&self, name: &str) -> Option<Child> {
        return position_by_name(&self.methods, name).map(Child::Method);
    }

    fn child_names(&self) -> Vec<&str> {
        return self.methods.iter().map(Describable::name).collect();
    }
}

/// Non-owning reference from a method to its request or response message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageRef {
    /// Type name as declared on the method, e.g. `.locator.Point`.
    pub name: String,
    /// The message in this tree, when the name matched one.
    pub target: Option<MessageId>,
}

/// One RPC operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Method {
    /// Clean description.
    pub description: String,
    /// HTTP mappings from `google.api.http` options.
    pub http_bindings: Vec<HttpBinding>,
    /// RPC name.
    pub name: String,
    /// Input message.
    pub request: MessageRef,
    /// Output message.
    pub response: MessageRef,
}

impl Describable for Method {
    name_and_description!();

    fn describe(&self, depth: usize) -> String {
        return outline::method(self, depth);
    }

    fn describe_markdown(&self, depth: usize) -> String {
        return markdown::method(self, depth);
    }

    /// Scans the request reference, the response reference, then bindings.
    /// A reference whose message is not in the tree never matches.
    fn get_by_name(&self, name: &str) -> Option<Child> {
        for reference in [&self.request, &self.response] {
            if reference.name == name {
                if let Some(target) = reference.target {
                    return Some(Child::Referenced(target));
                }
            }
        }
        return position_by_name(&self.http_bindings, name).map(Child::HttpBinding);
    }

    fn child_names(&self) -> Vec<&str> {
        let references = [&self.request, &self.response]
            .into_iter()
            .filter(|r| r.target.is_some())
            .map(|r| r.name.as_str());
        let bindings = self.http_bindings.iter().map(Describable::name);
        return references.chain(bindings).collect();
    }
}

/// One HTTP mapping of a method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpBinding {
    /// Clean description.
    pub description: String,
    /// Raw annotation pairs, in annotation order.
    pub fields: Vec<BindingField>,
    /// Binding name, `<verb> <path>`.
    pub name: String,
    /// Request fields placed into path, query or body.
    pub parameters: Vec<HttpParameter>,
    /// Path template, e.g. `/points/{id}`.
    pub path: String,
    /// HTTP method.
    pub verb: Verb,
}

impl Describable for HttpBinding {
    name_and_description!();

    fn describe(&self, depth: usize) -> String {
        return outline::http_binding(self, depth);
    }

    fn describe_markdown(&self, depth: usize) -> String {
        return markdown::http_binding(self, depth);
    }

    /// Scans binding fields, then parameters.
    fn get_by_name(&self, name: &str) -> Option<Child> {
        if let Some(index) = position_by_name(&self.fields, name) {
            return Some(Child::BindingField(index));
        }
        return position_by_name(&self.parameters, name).map(Child::HttpParameter);
    }

    fn child_names(&self) -> Vec<&str> {
        let fields = self.fields.iter().map(Describable::name);
        let parameters = self.parameters.iter().map(Describable::name);
        return fields.chain(parameters).collect();
    }
}

/// One raw `key: "value"` pair of an HTTP option, e.g. `get: "/locate"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingField {
    /// Clean description.
    pub description: String,
    /// Left-hand side of the pair.
    pub kind: String,
    /// Pair name; same as `kind` for builder-made pairs.
    pub name: String,
    /// Right-hand side of the pair.
    pub value: String,
}

impl Describable for BindingField {
    name_and_description!();

    fn describe(&self, depth: usize) -> String {
        return outline::binding_field(self, depth);
    }

    fn describe_markdown(&self, depth: usize) -> String {
        return markdown::leaf(self, depth);
    }

    fn get_by_name(&self, _name: &str) -> Option<Child> {
        return None;
    }

    fn child_names(&self) -> Vec<&str> {
        return Vec::new();
    }
}

/// A request field as seen by one HTTP binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpParameter {
    /// Clean description.
    pub description: String,
    /// Where the field travels.
    pub location: Location,
    /// Name of the request field.
    pub name: String,
    /// Protobuf type name of the request field.
    pub type_name: String,
}

impl Describable for HttpParameter {
    name_and_description!();

    fn describe(&self, depth: usize) -> String {
        return outline::http_parameter(self, depth);
    }

    fn describe_markdown(&self, depth: usize) -> String {
        return markdown::leaf(self, depth);
    }

    fn get_by_name(&self, _name: &str) -> Option<Child> {
        return None;
    }

    fn child_names(&self) -> Vec<&str> {
        return Vec::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, number: i32) -> Field {
        return Field {
            field_type: FieldType {
                name: "int32".to_string(),
                ..FieldType::default()
            },
            name: name.to_string(),
            number,
            ..Field::default()
        };
    }

    fn sample() -> Root {
        let mut root = Root::new("locator");
        root.files.push(File {
            messages: vec![Message {
                fields: vec![field("x", 1), field("y", 2)],
                name: "Point".to_string(),
                ..Message::default()
            }],
            enums: vec![Enum {
                name: "Shape".to_string(),
                values: vec![EnumValue {
                    name: "CIRCLE".to_string(),
                    ..EnumValue::default()
                }],
                ..Enum::default()
            }],
            services: vec![Service {
                methods: vec![Method {
                    name: "Get".to_string(),
                    request: MessageRef {
                        name: ".locator.Point".to_string(),
                        target: Some(MessageId { file: 0, message: 0 }),
                    },
                    response: MessageRef {
                        name: ".other.Missing".to_string(),
                        target: None,
                    },
                    ..Method::default()
                }],
                name: "Locator".to_string(),
                ..Service::default()
            }],
            name: "locator.proto".to_string(),
            ..File::default()
        });
        root
    }

    #[test]
    fn file_scans_services_before_messages() {
        let mut root = sample();
        let file = root.files.first_mut().unwrap();
        file.messages.push(Message {
            name: "Locator".to_string(),
            ..Message::default()
        });
        assert_eq!(file.get_by_name("Locator"), Some(Child::Service(0)));
        assert_eq!(file.get_by_name("Point"), Some(Child::Message(0)));
        assert_eq!(file.get_by_name("Shape"), Some(Child::Enum(0)));
        assert_eq!(file.get_by_name("Nope"), None);
    }

    #[test]
    fn duplicate_names_first_match_wins() {
        let message = Message {
            fields: vec![field("x", 1), field("x", 2)],
            ..Message::default()
        };
        assert_eq!(message.get_by_name("x"), Some(Child::Field(0)));
    }

    #[test]
    fn lookup_is_single_level() {
        let root = sample();
        assert_eq!(root.get_by_name("locator.proto"), Some(Child::File(0)));
        assert_eq!(root.get_by_name("Point"), None);
    }

    #[test]
    fn leaves_find_nothing() {
        let f = field("x", 1);
        assert_eq!(f.get_by_name("int32"), None);
        assert!(f.child_names().is_empty());
    }

    #[test]
    fn method_follows_references_into_the_tree() {
        let root = sample();
        let method = root
            .method(MethodId {
                method: 0,
                service: ServiceId { file: 0, service: 0 },
            })
            .unwrap();
        assert_eq!(
            method.get_by_name(".locator.Point"),
            Some(Child::Referenced(MessageId { file: 0, message: 0 }))
        );
        assert_eq!(method.get_by_name(".other.Missing"), None);
        assert_eq!(method.child_names(), vec![".locator.Point"]);
    }

    #[test]
    fn child_composes_ids() {
        let method = NodeId::Method(MethodId {
            method: 0,
            service: ServiceId { file: 0, service: 0 },
        });
        let target = MessageId { file: 1, message: 2 };
        assert_eq!(method.child(Child::Referenced(target)), Some(NodeId::Message(target)));
        assert_eq!(NodeId::Root.child(Child::Field(0)), None);
    }

    #[test]
    fn node_mut_reaches_nested_values() {
        let mut root = sample();
        let id = NodeId::EnumValue {
            enumeration: EnumId { enumeration: 0, file: 0 },
            value: 0,
        };
        root.node_mut(id).unwrap().describable_mut().set_description("// Round.");
        assert_eq!(root.node(id).unwrap().describable().description(), "Round.");
    }

    #[test]
    fn node_out_of_range_is_none() {
        let root = sample();
        assert!(root.node(NodeId::File(3)).is_none());
        assert!(root.node(NodeId::Message(MessageId { file: 0, message: 9 })).is_none());
    }

    #[test]
    fn set_description_scrubs() {
        let mut message = Message::default();
        message.set_description("/* A 2D point. */");
        assert_eq!(message.description(), "A 2D point.");
    }
}
