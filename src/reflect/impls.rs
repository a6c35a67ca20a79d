//! Built-in implementations for std, chrono and serde_json types

use super::{Category, FieldValue, Record, Reflect, TypeInfo, Typed};
use chrono::{DateTime, NaiveDateTime, TimeZone};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::Display;
use std::rc::Rc;
use std::sync::Arc;

// ============================================================================
// Primitives
// ============================================================================

macro_rules! impl_primitive {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Typed for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::Primitive($name)
                }
            }

            impl Reflect for $ty {
                fn reflect(&self) -> Category<'_> {
                    Category::Primitive { type_name: $name }
                }
            }
        )*
    };
}

impl_primitive! {
    bool => "bool",
    char => "char",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
    String => "String",
    &str => "&str",
    () => "()",
}

// ============================================================================
// References
// ============================================================================

impl<T: Typed> Typed for Option<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::reference("Option", T::type_info())
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    fn reflect(&self) -> Category<'_> {
        Category::Reference {
            pointee: self.as_ref().map(|value| value as &dyn Reflect),
            pointee_type: T::type_info(),
        }
    }
}

macro_rules! impl_pointer {
    ($($ptr:ident => $container:literal),* $(,)?) => {
        $(
            impl<T: Typed> Typed for $ptr<T> {
                fn type_info() -> TypeInfo {
                    TypeInfo::reference($container, T::type_info())
                }
            }

            impl<T: Reflect + Typed> Reflect for $ptr<T> {
                fn reflect(&self) -> Category<'_> {
                    let pointee: &T = self;
                    Category::Reference {
                        pointee: Some(pointee),
                        pointee_type: T::type_info(),
                    }
                }
            }
        )*
    };
}

impl_pointer! {
    Box => "Box",
    Rc => "Rc",
    Arc => "Arc",
}

impl<T: Typed> Typed for &T {
    fn type_info() -> TypeInfo {
        TypeInfo::reference("&", T::type_info())
    }
}

impl<T: Reflect + Typed> Reflect for &T {
    fn reflect(&self) -> Category<'_> {
        Category::Reference {
            pointee: Some(*self),
            pointee_type: T::type_info(),
        }
    }
}

impl<T: Typed> Typed for &mut T {
    fn type_info() -> TypeInfo {
        TypeInfo::reference("&mut ", T::type_info())
    }
}

impl<T: Reflect + Typed> Reflect for &mut T {
    fn reflect(&self) -> Category<'_> {
        let pointee: &T = self;
        Category::Reference {
            pointee: Some(pointee),
            pointee_type: T::type_info(),
        }
    }
}

// ============================================================================
// Polymorphic containers
// ============================================================================

impl Typed for Box<dyn Reflect> {
    fn type_info() -> TypeInfo {
        TypeInfo::Polymorphic
    }
}

impl Reflect for Box<dyn Reflect> {
    fn reflect(&self) -> Category<'_> {
        Category::Polymorphic(&**self)
    }
}

impl Typed for &dyn Reflect {
    fn type_info() -> TypeInfo {
        TypeInfo::Polymorphic
    }
}

impl Reflect for &dyn Reflect {
    fn reflect(&self) -> Category<'_> {
        Category::Polymorphic(*self)
    }
}

// ============================================================================
// Ordered collections
// ============================================================================

fn elements<'a, T: Reflect + 'a>(items: impl Iterator<Item = &'a T>) -> Vec<&'a dyn Reflect> {
    items.map(|item| item as &dyn Reflect).collect()
}

impl<T: Typed> Typed for Vec<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::list("Vec", T::type_info())
    }
}

impl<T: Reflect + Typed> Reflect for Vec<T> {
    fn reflect(&self) -> Category<'_> {
        Category::List {
            elements: elements(self.iter()),
            element_type: T::type_info(),
        }
    }
}

impl<T: Typed> Typed for VecDeque<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::list("VecDeque", T::type_info())
    }
}

impl<T: Reflect + Typed> Reflect for VecDeque<T> {
    fn reflect(&self) -> Category<'_> {
        Category::List {
            elements: elements(self.iter()),
            element_type: T::type_info(),
        }
    }
}

impl<T: Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> TypeInfo {
        TypeInfo::list("", T::type_info())
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    fn reflect(&self) -> Category<'_> {
        Category::List {
            elements: elements(self.iter()),
            element_type: T::type_info(),
        }
    }
}

impl<T: Typed> Typed for &[T] {
    fn type_info() -> TypeInfo {
        TypeInfo::list("", T::type_info())
    }
}

impl<T: Reflect + Typed> Reflect for &[T] {
    fn reflect(&self) -> Category<'_> {
        Category::List {
            elements: elements(self.iter()),
            element_type: T::type_info(),
        }
    }
}

// ============================================================================
// Associative collections
// ============================================================================

impl<K: Typed, V: Typed, S> Typed for HashMap<K, V, S> {
    fn type_info() -> TypeInfo {
        TypeInfo::map("HashMap", K::type_info(), V::type_info())
    }
}

impl<K: Display, V: Reflect, S> Reflect for HashMap<K, V, S> {
    fn reflect(&self) -> Category<'_> {
        Category::Map(
            self.iter()
                .map(|(key, value)| (key as &dyn Display, value as &dyn Reflect))
                .collect(),
        )
    }
}

impl<K: Typed, V: Typed> Typed for BTreeMap<K, V> {
    fn type_info() -> TypeInfo {
        TypeInfo::map("BTreeMap", K::type_info(), V::type_info())
    }
}

impl<K: Display, V: Reflect> Reflect for BTreeMap<K, V> {
    fn reflect(&self) -> Category<'_> {
        Category::Map(
            self.iter()
                .map(|(key, value)| (key as &dyn Display, value as &dyn Reflect))
                .collect(),
        )
    }
}

// ============================================================================
// Temporal types
// ============================================================================

impl<Tz: TimeZone> Typed for DateTime<Tz> {
    fn type_info() -> TypeInfo {
        TypeInfo::Temporal("DateTime")
    }
}

impl<Tz: TimeZone> Reflect for DateTime<Tz> {
    fn reflect(&self) -> Category<'_> {
        Category::Record(self)
    }
}

impl<Tz: TimeZone> Record for DateTime<Tz> {
    fn record_type(&self) -> TypeInfo {
        Self::type_info()
    }

    fn fields(&self) -> Vec<FieldValue<'_>> {
        Vec::new()
    }
}

impl Typed for NaiveDateTime {
    fn type_info() -> TypeInfo {
        TypeInfo::Temporal("NaiveDateTime")
    }
}

impl Reflect for NaiveDateTime {
    fn reflect(&self) -> Category<'_> {
        Category::Record(self)
    }
}

impl Record for NaiveDateTime {
    fn record_type(&self) -> TypeInfo {
        Self::type_info()
    }

    fn fields(&self) -> Vec<FieldValue<'_>> {
        Vec::new()
    }
}

// ============================================================================
// Dynamic JSON documents
// ============================================================================

impl Typed for serde_json::Value {
    fn type_info() -> TypeInfo {
        TypeInfo::Polymorphic
    }
}

impl Reflect for serde_json::Value {
    fn reflect(&self) -> Category<'_> {
        use serde_json::Value;

        match self {
            Value::Null => Category::Primitive { type_name: "null" },
            Value::Bool(_) => Category::Primitive { type_name: "bool" },
            Value::Number(n) => {
                let type_name = if n.is_i64() {
                    "i64"
                } else if n.is_u64() {
                    "u64"
                } else {
                    "f64"
                };
                Category::Primitive { type_name }
            }
            Value::String(_) => Category::Primitive {
                type_name: "String",
            },
            Value::Array(items) => Category::List {
                elements: elements(items.iter()),
                element_type: TypeInfo::Polymorphic,
            },
            Value::Object(map) => Category::Map(
                map.iter()
                    .map(|(key, value)| (key as &dyn Display, value as &dyn Reflect))
                    .collect(),
            ),
        }
    }
}
