/// Small closed vocabularies shared by the schema description and the tree.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Repetition label of a message field.
/// Accepts both the short form (`optional`) and protoc's enum spelling (`LABEL_OPTIONAL`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// Singular field, may be absent.
    #[default]
    #[serde(alias = "LABEL_OPTIONAL")]
    Optional,
    /// Zero or more values.
    #[serde(alias = "LABEL_REPEATED")]
    Repeated,
    /// Singular field that must be present (proto2 only).
    #[serde(alias = "LABEL_REQUIRED")]
    Required,
}

impl Label {
    /// Lowercase keyword as it appears in a `.proto` file.
    pub const fn as_str(self) -> &'static str {
        return match self {
            Label::Optional => "optional",
            Label::Repeated => "repeated",
            Label::Required => "required",
        };
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.as_str());
    }
}

/// Where an HTTP parameter travels in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// JSON request body.
    Body,
    /// A `{variable}` segment of the path template.
    Path,
    /// URL query string.
    Query,
}

impl Location {
    /// Lowercase name used in rendered tables.
    pub const fn as_str(self) -> &'static str {
        return match self {
            Location::Body => "body",
            Location::Path => "path",
            Location::Query => "query",
        };
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.as_str());
    }
}

/// HTTP method of a binding, as named by the `google.api.http` option keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verb {
    /// `delete: "/path"`
    Delete,
    /// `get: "/path"`
    #[default]
    Get,
    /// `patch: "/path"`
    Patch,
    /// `post: "/path"`
    Post,
    /// `put: "/path"`
    Put,
}

impl Verb {
    /// The option key, lowercase.
    pub const fn as_str(self) -> &'static str {
        return match self {
            Verb::Delete => "delete",
            Verb::Get => "get",
            Verb::Patch => "patch",
            Verb::Post => "post",
            Verb::Put => "put",
        };
    }

    /// Whether request fields may be mapped into a body for this verb.
    pub const fn carries_body(self) -> bool {
        return !matches!(self, Verb::Get | Verb::Delete);
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.as_str());
    }
}

impl FromStr for Verb {
    type Err = Error;

    /// Parse an option key, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        return match s.to_ascii_lowercase().as_str() {
            "delete" => Ok(Verb::Delete),
            "get" => Ok(Verb::Get),
            "patch" => Ok(Verb::Patch),
            "post" => Ok(Verb::Post),
            "put" => Ok(Verb::Put),
            _ => Err(Error::SchemaInvalid {
                reason: format!("unknown http verb `{s}`"),
            }),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::{Label, Verb};

    #[test]
    fn label_accepts_protoc_spelling() {
        let label: Label = serde_json::from_str("\"LABEL_REPEATED\"").unwrap();
        assert_eq!(label, Label::Repeated);
        let label: Label = serde_json::from_str("\"required\"").unwrap();
        assert_eq!(label, Label::Required);
    }

    #[test]
    fn verb_is_case_insensitive() {
        assert_eq!("GET".parse::<Verb>().unwrap(), Verb::Get);
        assert_eq!("Patch".parse::<Verb>().unwrap(), Verb::Patch);
    }

    #[test]
    fn unknown_verb_is_rejected() {
        assert!("fetch".parse::<Verb>().is_err());
    }

    #[test]
    fn body_carrying_verbs() {
        assert!(Verb::Post.carries_body());
        assert!(!Verb::Get.carries_body());
        assert!(!Verb::Delete.carries_body());
    }
}
