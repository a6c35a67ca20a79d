//! Schema inference from reflected values

use super::naming;
use super::types::{SchemaNode, DATE_TIME_LABEL};
use crate::config::InferConfig;
use crate::error::{Error, Result};
use crate::reflect::{Category, FieldDescriptor, Record, Reflect, TypeInfo};
use crate::types::AbsentReferencePolicy;
use std::any::TypeId;
use std::collections::BTreeMap;
use std::fmt::Display;
use tracing::{debug, trace};

/// Default maximum traversal depth
///
/// Only record, list and map nesting counts; references and polymorphic
/// containers are transparent.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Schema inferrer with configuration options
#[derive(Debug, Clone)]
pub struct SchemaInferrer {
    /// Maximum nesting depth before giving up
    max_depth: usize,
    /// How absent references are described
    absent_reference: AbsentReferencePolicy,
}

impl Default for SchemaInferrer {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaInferrer {
    /// Create a new schema inferrer with default settings
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            absent_reference: AbsentReferencePolicy::Shape,
        }
    }

    /// Create an inferrer from loaded configuration
    pub fn from_config(config: &InferConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            absent_reference: config.absent_reference,
        }
    }

    /// Set maximum depth for nested values
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the policy for absent references
    #[must_use]
    pub fn with_absent_reference(mut self, policy: AbsentReferencePolicy) -> Self {
        self.absent_reference = policy;
        self
    }

    /// Infer the schema of a value
    pub fn infer(&self, value: &dyn Reflect) -> Result<SchemaNode> {
        self.infer_value(value, 0)
    }

    /// Category dispatcher
    fn infer_value(&self, value: &dyn Reflect, depth: usize) -> Result<SchemaNode> {
        self.check_depth(depth)?;

        let category = value.reflect();
        trace!(depth, kind = category.kind(), "dispatching value");

        match category {
            Category::Record(record) => {
                if is_temporal(&record.record_type()) {
                    return Ok(SchemaNode::label(DATE_TIME_LABEL));
                }
                self.infer_record(record, depth)
            }
            Category::Polymorphic(inner) => self.infer_polymorphic(inner, depth),
            Category::Reference {
                pointee,
                pointee_type,
            } => self.infer_reference(pointee, &pointee_type, depth),
            Category::Map(entries) => self.infer_map(entries, depth),
            Category::List {
                elements,
                element_type,
            } => self.infer_list(elements, &element_type, depth),
            Category::Primitive { type_name } => Ok(SchemaNode::label(type_name)),
        }
    }

    /// Build the field-name → schema mapping of a record
    fn infer_record(&self, record: &dyn Record, depth: usize) -> Result<SchemaNode> {
        let record_type = record.record_type();
        let mut fields = BTreeMap::new();

        for field in record.fields() {
            if !naming::is_visible(&field.descriptor) {
                continue;
            }

            let key = field_key(&record_type, &field.descriptor)?;
            let node = self.infer_value(field.value, depth + 1)?;
            fields.insert(key, node);
        }

        Ok(SchemaNode::Record(fields))
    }

    /// Resolve a reference, or describe its pointee statically when absent
    fn infer_reference(
        &self,
        pointee: Option<&dyn Reflect>,
        pointee_type: &TypeInfo,
        depth: usize,
    ) -> Result<SchemaNode> {
        if let Some(value) = pointee {
            return self.infer_value(value, depth);
        }

        debug!(
            pointee = %pointee_type,
            policy = %self.absent_reference,
            "absent reference, inferring from static type"
        );

        if is_temporal(pointee_type) {
            return Ok(SchemaNode::label(DATE_TIME_LABEL));
        }

        match self.absent_reference {
            AbsentReferencePolicy::Label => Ok(SchemaNode::label(pointee_type.name())),
            AbsentReferencePolicy::Shape => {
                let mut visiting = Vec::new();
                self.infer_static(pointee_type, &mut visiting, depth)
            }
        }
    }

    /// Unwrap one level of dynamic typing
    fn infer_polymorphic(&self, inner: &dyn Reflect, depth: usize) -> Result<SchemaNode> {
        self.infer_value(inner, depth)
    }

    /// Build the key → schema mapping of an associative collection
    fn infer_map(
        &self,
        entries: Vec<(&dyn Display, &dyn Reflect)>,
        depth: usize,
    ) -> Result<SchemaNode> {
        let mut map = BTreeMap::new();

        for (key, value) in entries {
            let node = self.infer_value(value, depth + 1)?;
            // Last write wins on colliding text keys
            map.insert(key.to_string(), node);
        }

        Ok(SchemaNode::Map(map))
    }

    /// Infer each element, or a placeholder from the element type when empty
    fn infer_list(
        &self,
        elements: Vec<&dyn Reflect>,
        element_type: &TypeInfo,
        depth: usize,
    ) -> Result<SchemaNode> {
        if elements.is_empty() {
            debug!(element = %element_type, "empty list, inferring from element type");
            return Ok(empty_list_label(element_type));
        }

        let items = elements
            .into_iter()
            .map(|element| self.infer_value(element, depth + 1))
            .collect::<Result<Vec<_>>>()?;

        Ok(SchemaNode::List(items))
    }

    /// Describe a type without an instance
    ///
    /// `visiting` holds the record types whose static shape is being built;
    /// meeting one of them again yields its name label instead of recursing.
    fn infer_static(
        &self,
        ty: &TypeInfo,
        visiting: &mut Vec<TypeId>,
        depth: usize,
    ) -> Result<SchemaNode> {
        self.check_depth(depth)?;

        match ty {
            TypeInfo::Temporal(_) => Ok(SchemaNode::label(DATE_TIME_LABEL)),
            TypeInfo::Record { name, id, fields } => {
                if visiting.contains(id) {
                    debug!(record = *name, "recursive record type, using type name");
                    return Ok(SchemaNode::label(*name));
                }

                visiting.push(*id);
                let mut out = BTreeMap::new();
                for field in fields() {
                    if !naming::is_visible(&field) {
                        continue;
                    }
                    let key = field_key(ty, &field)?;
                    let node = self.infer_static(&(field.type_info)(), visiting, depth + 1)?;
                    out.insert(key, node);
                }
                visiting.pop();

                Ok(SchemaNode::Record(out))
            }
            TypeInfo::Reference { pointee, .. } => self.infer_static(pointee, visiting, depth),
            TypeInfo::List { element, .. } => Ok(empty_list_label(element)),
            TypeInfo::Map { .. } => Ok(SchemaNode::Map(BTreeMap::new())),
            TypeInfo::Primitive(_) | TypeInfo::Polymorphic => Ok(SchemaNode::label(ty.name())),
        }
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(Error::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }
        Ok(())
    }
}

/// Infer the schema of a value (convenience function)
pub fn infer(value: &dyn Reflect) -> Result<SchemaNode> {
    SchemaInferrer::new().infer(value)
}

/// Check whether a type is the well-known timestamp type, or a reference to it
pub fn is_temporal(ty: &TypeInfo) -> bool {
    match ty {
        TypeInfo::Temporal(_) => true,
        TypeInfo::Reference { pointee, .. } => is_temporal(pointee),
        _ => false,
    }
}

/// Placeholder label for an empty list: `[any]` for polymorphic elements
fn empty_list_label(element_type: &TypeInfo) -> SchemaNode {
    if element_type.is_polymorphic() {
        SchemaNode::empty_list("any")
    } else {
        SchemaNode::empty_list(&element_type.name())
    }
}

/// Output key of a visible field, mapping metadata failures to errors
fn field_key(record_type: &TypeInfo, field: &FieldDescriptor) -> Result<String> {
    let key = naming::output_name(field)
        .map_err(|message| Error::metadata_parse(record_type.name(), field.name, message))?;

    if key != naming::strip_raw_prefix(field.name) {
        trace!(field = field.name, key = %key, "field renamed by metadata");
    }

    Ok(key)
}
