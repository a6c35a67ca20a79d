//! Schema node types

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Label used for temporal values
pub const DATE_TIME_LABEL: &str = "date-time";

/// Inferred shape of one value
///
/// Serializes untagged: labels become strings, lists become arrays,
/// records and maps become objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SchemaNode {
    /// Primitive kind name, `"date-time"`, or an empty-list placeholder
    /// such as `"[i32]"`
    Label(String),
    /// Field name to field schema
    Record(BTreeMap<String, SchemaNode>),
    /// One schema per element, in order
    List(Vec<SchemaNode>),
    /// Text key to value schema
    Map(BTreeMap<String, SchemaNode>),
}

impl SchemaNode {
    /// Create a label node
    pub fn label(label: impl Into<String>) -> Self {
        SchemaNode::Label(label.into())
    }

    /// Create the placeholder label for an empty list
    pub fn empty_list(element_name: &str) -> Self {
        SchemaNode::Label(format!("[{element_name}]"))
    }

    /// The label text, if this is a label node
    pub fn as_label(&self) -> Option<&str> {
        match self {
            SchemaNode::Label(label) => Some(label),
            _ => None,
        }
    }

    /// The elements, if this is a list node
    pub fn as_list(&self) -> Option<&[SchemaNode]> {
        match self {
            SchemaNode::List(items) => Some(items),
            _ => None,
        }
    }

    /// The entries, if this is a record or map node
    pub fn as_object(&self) -> Option<&BTreeMap<String, SchemaNode>> {
        match self {
            SchemaNode::Record(entries) | SchemaNode::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a field or key of a record or map node
    pub fn get(&self, key: &str) -> Option<&SchemaNode> {
        self.as_object().and_then(|entries| entries.get(key))
    }

    /// Check if this is a record node
    pub fn is_record(&self) -> bool {
        matches!(self, SchemaNode::Record(_))
    }

    /// Check if this is a map node
    pub fn is_map(&self) -> bool {
        matches!(self, SchemaNode::Map(_))
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Convert to pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl fmt::Display for SchemaNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl From<&str> for SchemaNode {
    fn from(label: &str) -> Self {
        SchemaNode::label(label)
    }
}
