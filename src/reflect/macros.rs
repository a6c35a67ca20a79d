//! Declarative record wiring

/// Implement [`Typed`](crate::reflect::Typed), [`Reflect`](crate::reflect::Reflect)
/// and [`Record`](crate::reflect::Record) for a struct.
///
/// List every field in declaration order with its visibility and type.
/// Only fields declared plain `pub` are included in inferred schemas.
/// Naming metadata goes in an optional `#[schema(...)]` attribute; it is
/// kept as raw text and parsed during inference, so malformed metadata
/// surfaces as [`Error::MetadataParse`](crate::Error::MetadataParse).
///
/// ```
/// use schemalike::{impl_record, infer};
///
/// pub struct Account {
///     pub id: u64,
///     pub display_name: String,
///     internal_flags: u32,
/// }
///
/// impl_record!(Account {
///     pub id: u64,
///     #[schema(rename = "displayName")]
///     pub display_name: String,
///     internal_flags: u32,
/// });
///
/// let account = Account { id: 7, display_name: "Ann".to_string(), internal_flags: 0 };
/// let schema = infer(&account)?;
/// assert_eq!(
///     schema.to_json(),
///     serde_json::json!({"id": "u64", "displayName": "String"})
/// );
/// # let _ = account.internal_flags;
/// # Ok::<(), schemalike::Error>(())
/// ```
#[macro_export]
macro_rules! impl_record {
    ($name:ident {
        $(
            $(#[schema($($meta:tt)*)])?
            $vis:vis $field:ident : $ty:ty
        ),* $(,)?
    }) => {
        impl $crate::reflect::Typed for $name {
            fn type_info() -> $crate::reflect::TypeInfo {
                $crate::reflect::TypeInfo::Record {
                    name: ::std::stringify!($name),
                    id: ::std::any::TypeId::of::<$name>(),
                    fields: || {
                        ::std::vec![
                            $(
                                $crate::reflect::FieldDescriptor {
                                    name: ::std::stringify!($field),
                                    visibility: $crate::reflect::Visibility::from_token(
                                        ::std::stringify!($vis),
                                    ),
                                    metadata: $crate::__schema_metadata!($($($meta)*)?),
                                    type_info: <$ty as $crate::reflect::Typed>::type_info,
                                }
                            ),*
                        ]
                    },
                }
            }
        }

        impl $crate::reflect::Reflect for $name {
            fn reflect(&self) -> $crate::reflect::Category<'_> {
                $crate::reflect::Category::Record(self)
            }
        }

        impl $crate::reflect::Record for $name {
            fn record_type(&self) -> $crate::reflect::TypeInfo {
                <Self as $crate::reflect::Typed>::type_info()
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::reflect::FieldValue<'_>> {
                let values: ::std::vec::Vec<&dyn $crate::reflect::Reflect> =
                    ::std::vec![$(&self.$field as &dyn $crate::reflect::Reflect),*];
                $crate::reflect::FieldValue::zip(
                    <Self as $crate::reflect::Typed>::type_info().fields(),
                    values,
                )
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __schema_metadata {
    () => {
        ::std::option::Option::None
    };
    ($($meta:tt)+) => {
        ::std::option::Option::Some(::std::stringify!($($meta)+))
    };
}
