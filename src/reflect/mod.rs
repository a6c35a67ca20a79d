//! Runtime type description
//!
//! Stands in for runtime reflection: every inspectable value reports its
//! structural [`Category`], and every inspectable type can describe itself
//! statically through [`TypeInfo`] without an instance.
//!
//! # Traits
//!
//! - [`Typed`]: static type information (needed for empty collections and
//!   absent references)
//! - [`Reflect`]: runtime category of a value (object safe)
//! - [`Record`]: field enumeration for structured values
//!
//! Records are usually wired up with [`impl_record!`](crate::impl_record):
//!
//! ```
//! use schemalike::impl_record;
//!
//! pub struct User {
//!     pub id: i64,
//!     pub name: String,
//!     password_hash: String,
//! }
//!
//! impl_record!(User {
//!     #[schema(rename = "user_id")]
//!     pub id: i64,
//!     pub name: String,
//!     password_hash: String,
//! });
//! ```

mod impls;
mod macros;
mod types;

pub use types::{Category, FieldDescriptor, FieldValue, TypeInfo, Visibility};

/// Static type information for a type
pub trait Typed {
    /// Describe the type without an instance
    fn type_info() -> TypeInfo;
}

/// Runtime view of a value
pub trait Reflect {
    /// Classify the value and expose its contents
    fn reflect(&self) -> Category<'_>;
}

/// A structured value with named fields
pub trait Record {
    /// Static type of the record
    fn record_type(&self) -> TypeInfo;

    /// Declared fields with their values, in declaration order
    fn fields(&self) -> Vec<FieldValue<'_>>;
}
