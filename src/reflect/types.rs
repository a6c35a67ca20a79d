//! Type descriptors and value categories

use std::any::TypeId;
use std::fmt;

/// Field visibility as declared on a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Declared plain `pub`
    Public,
    /// Private or restricted (`pub(crate)`, `pub(super)`, ...)
    Private,
}

impl Visibility {
    /// Map a stringified visibility token (as produced by `stringify!($vis)`)
    pub fn from_token(token: &str) -> Self {
        if token.trim() == "pub" {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }

    /// Whether the field is externally visible
    pub fn is_public(self) -> bool {
        self == Visibility::Public
    }
}

/// Static description of one record field
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Declared field name
    pub name: &'static str,
    /// Declared visibility
    pub visibility: Visibility,
    /// Raw naming metadata, e.g. `rename = "id"`
    pub metadata: Option<&'static str>,
    /// Static type of the field
    pub type_info: fn() -> TypeInfo,
}

impl FieldDescriptor {
    /// Create a public field without metadata
    pub fn public(name: &'static str, type_info: fn() -> TypeInfo) -> Self {
        Self {
            name,
            visibility: Visibility::Public,
            metadata: None,
            type_info,
        }
    }

    /// Create a private field without metadata
    pub fn private(name: &'static str, type_info: fn() -> TypeInfo) -> Self {
        Self {
            name,
            visibility: Visibility::Private,
            metadata: None,
            type_info,
        }
    }

    /// Attach naming metadata
    #[must_use]
    pub fn with_metadata(mut self, metadata: &'static str) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Static type information, available without an instance
#[derive(Debug, Clone)]
pub enum TypeInfo {
    /// A primitive type identified by name
    Primitive(&'static str),
    /// The well-known timestamp type
    Temporal(&'static str),
    /// A record type with lazily computed field descriptors
    ///
    /// `name` is only the declared identifier; `id` tells apart records
    /// that share one.
    Record {
        name: &'static str,
        id: TypeId,
        fields: fn() -> Vec<FieldDescriptor>,
    },
    /// A possibly-absent indirection (`Option`, `&`, `Box`, `Rc`, `Arc`)
    Reference {
        container: &'static str,
        pointee: Box<TypeInfo>,
    },
    /// A dynamically typed container
    Polymorphic,
    /// An ordered collection
    List {
        container: &'static str,
        element: Box<TypeInfo>,
    },
    /// An associative collection
    Map {
        container: &'static str,
        key: Box<TypeInfo>,
        value: Box<TypeInfo>,
    },
}

impl TypeInfo {
    /// Create a reference type descriptor
    pub fn reference(container: &'static str, pointee: TypeInfo) -> Self {
        TypeInfo::Reference {
            container,
            pointee: Box::new(pointee),
        }
    }

    /// Create a list type descriptor
    pub fn list(container: &'static str, element: TypeInfo) -> Self {
        TypeInfo::List {
            container,
            element: Box::new(element),
        }
    }

    /// Create a map type descriptor
    pub fn map(container: &'static str, key: TypeInfo, value: TypeInfo) -> Self {
        TypeInfo::Map {
            container,
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Render the type name
    ///
    /// Polymorphic types render as `any`. Containers render with generic
    /// syntax (`Vec<i32>`, `Option<User>`); `&` renders as a prefix and
    /// an empty list container renders as a slice (`[u8]`).
    pub fn name(&self) -> String {
        match self {
            TypeInfo::Primitive(name) | TypeInfo::Temporal(name) => (*name).to_string(),
            TypeInfo::Record { name, .. } => (*name).to_string(),
            TypeInfo::Reference { container, pointee } => match *container {
                "&" | "&mut " => format!("{container}{}", pointee.name()),
                _ => format!("{container}<{}>", pointee.name()),
            },
            TypeInfo::Polymorphic => "any".to_string(),
            TypeInfo::List { container, element } => {
                if container.is_empty() {
                    format!("[{}]", element.name())
                } else {
                    format!("{container}<{}>", element.name())
                }
            }
            TypeInfo::Map {
                container,
                key,
                value,
            } => format!("{container}<{}, {}>", key.name(), value.name()),
        }
    }

    /// Field descriptors for record types, empty otherwise
    pub fn fields(&self) -> Vec<FieldDescriptor> {
        match self {
            TypeInfo::Record { fields, .. } => fields(),
            _ => Vec::new(),
        }
    }

    /// Check if this is a polymorphic type
    pub fn is_polymorphic(&self) -> bool {
        matches!(self, TypeInfo::Polymorphic)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A record field paired with its runtime value
pub struct FieldValue<'a> {
    pub descriptor: FieldDescriptor,
    pub value: &'a dyn super::Reflect,
}

impl<'a> FieldValue<'a> {
    /// Pair descriptors with values in declaration order
    pub fn zip(
        descriptors: Vec<FieldDescriptor>,
        values: Vec<&'a dyn super::Reflect>,
    ) -> Vec<FieldValue<'a>> {
        descriptors
            .into_iter()
            .zip(values)
            .map(|(descriptor, value)| FieldValue { descriptor, value })
            .collect()
    }
}

/// Runtime category of a value, as seen by the inference engine
pub enum Category<'a> {
    /// A primitive value with its static type name
    Primitive { type_name: &'static str },
    /// A structured value
    Record(&'a dyn super::Record),
    /// A possibly-absent indirection; the pointee type is known even when absent
    Reference {
        pointee: Option<&'a dyn super::Reflect>,
        pointee_type: TypeInfo,
    },
    /// A value held behind a dynamically typed container
    Polymorphic(&'a dyn super::Reflect),
    /// An ordered collection with its static element type
    List {
        elements: Vec<&'a dyn super::Reflect>,
        element_type: TypeInfo,
    },
    /// An associative collection; keys are coerced to text during inference
    Map(Vec<(&'a dyn fmt::Display, &'a dyn super::Reflect)>),
}

impl Category<'_> {
    /// Short name of the category, used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Category::Primitive { .. } => "primitive",
            Category::Record(_) => "record",
            Category::Reference { .. } => "reference",
            Category::Polymorphic(_) => "polymorphic",
            Category::List { .. } => "list",
            Category::Map(_) => "map",
        }
    }
}
