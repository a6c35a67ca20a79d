//! Integration tests for the public API
//!
//! Covers the end-to-end flow: record wiring via `impl_record!` → inference → JSON rendering

use pretty_assertions::assert_eq;
use schemalike::reflect::Reflect;
use schemalike::{
    impl_record, infer, load_config_from_str, AbsentReferencePolicy, Error, SchemaInferrer,
    SchemaNode,
};
use serde_json::json;
use std::collections::HashMap;

pub struct Person {
    pub name: String,
    pub age: i32,
}

impl_record!(Person {
    pub name: String,
    pub age: i32,
});

pub struct User {
    pub id: i64,
    pub name: String,
}

impl_record!(User {
    pub id: i64,
    pub name: String,
});

pub struct Inner {
    pub string: String,
    pub int: i64,
    pub slice_of_string: Vec<String>,
    pub map: HashMap<String, Box<dyn Reflect>>,
}

impl_record!(Inner {
    pub string: String,
    pub int: i64,
    pub slice_of_string: Vec<String>,
    pub map: HashMap<String, Box<dyn Reflect>>,
});

pub struct Outer {
    pub string: String,
    pub int: i64,
    pub slice_of_string: Vec<String>,
    pub map: HashMap<String, Box<dyn Reflect>>,
    pub time: Option<chrono::DateTime<chrono::Utc>>,
    pub inner: Inner,
    pub inner_ptr: Option<Box<Inner>>,
    cache: Vec<u8>,
}

impl_record!(Outer {
    pub string: String,
    pub int: i64,
    pub slice_of_string: Vec<String>,
    pub map: HashMap<String, Box<dyn Reflect>>,
    pub time: Option<chrono::DateTime<chrono::Utc>>,
    #[schema(rename = "Struct")]
    pub inner: Inner,
    pub inner_ptr: Option<Box<Inner>>,
    cache: Vec<u8>,
});

fn sample_map() -> HashMap<String, Box<dyn Reflect>> {
    let mut map: HashMap<String, Box<dyn Reflect>> = HashMap::new();
    map.insert("Key1".to_string(), Box::new(String::new()));
    map.insert("Key2".to_string(), Box::new(0i64));
    map.insert("Key3".to_string(), Box::new(true));
    map
}

fn sample_inner() -> Inner {
    Inner {
        string: String::new(),
        int: 0,
        slice_of_string: Vec::new(),
        map: sample_map(),
    }
}

// ============================================================================
// Documented scenarios
// ============================================================================

#[test]
fn test_bool_label() {
    assert_eq!(infer(&true).unwrap(), SchemaNode::label("bool"));
}

#[test]
fn test_person_record() {
    let person = Person {
        name: "Alice".to_string(),
        age: 30,
    };
    assert_eq!(
        infer(&person).unwrap().to_json(),
        json!({"name": "String", "age": "i32"})
    );
}

#[test]
fn test_empty_and_filled_lists() {
    assert_eq!(infer(&Vec::<i32>::new()).unwrap().to_json(), json!("[i32]"));
    assert_eq!(
        infer(&vec![1i32, 2, 3]).unwrap().to_json(),
        json!(["i32", "i32", "i32"])
    );
}

#[test]
fn test_string_keyed_map() {
    let map = HashMap::from([("a".to_string(), 1i32)]);
    assert_eq!(infer(&map).unwrap().to_json(), json!({"a": "i32"}));
}

#[test]
fn test_absent_user_pointer() {
    let absent: Option<Box<User>> = None;

    assert_eq!(
        infer(&absent).unwrap().to_json(),
        json!({"id": "i64", "name": "String"})
    );

    let inferrer = SchemaInferrer::new().with_absent_reference(AbsentReferencePolicy::Label);
    assert_eq!(inferrer.infer(&absent).unwrap().to_json(), json!("Box<User>"));
}

// ============================================================================
// Nested document
// ============================================================================

#[test]
fn test_nested_document() {
    let outer = Outer {
        string: String::new(),
        int: 0,
        slice_of_string: Vec::new(),
        map: sample_map(),
        time: None,
        inner: sample_inner(),
        inner_ptr: Some(Box::new(sample_inner())),
        cache: vec![1, 2, 3],
    };
    assert_eq!(outer.cache.len(), 3);

    let inner_shape = json!({
        "string": "String",
        "int": "i64",
        "slice_of_string": "[String]",
        "map": {"Key1": "String", "Key2": "i64", "Key3": "bool"}
    });

    assert_eq!(
        infer(&outer).unwrap().to_json(),
        json!({
            "string": "String",
            "int": "i64",
            "slice_of_string": "[String]",
            "map": {"Key1": "String", "Key2": "i64", "Key3": "bool"},
            "time": "date-time",
            "Struct": inner_shape,
            "inner_ptr": inner_shape
        })
    );
}

#[test]
fn test_absent_nested_pointer_uses_static_shape() {
    let outer = Outer {
        string: String::new(),
        int: 0,
        slice_of_string: vec!["x".to_string()],
        map: HashMap::new(),
        time: Some(chrono::Utc::now()),
        inner: sample_inner(),
        inner_ptr: None,
        cache: Vec::new(),
    };

    let schema = infer(&outer).unwrap();
    assert_eq!(schema.get("slice_of_string").unwrap().to_json(), json!(["String"]));
    assert_eq!(schema.get("map").unwrap().to_json(), json!({}));
    assert_eq!(schema.get("time").unwrap().as_label(), Some("date-time"));
    assert_eq!(
        schema.get("inner_ptr").unwrap().to_json(),
        json!({
            "string": "String",
            "int": "i64",
            "slice_of_string": "[String]",
            "map": {}
        })
    );
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_configured_inferrer() {
    let config = load_config_from_str("max_depth: 2\nabsent_reference: label\n").unwrap();
    let inferrer = SchemaInferrer::from_config(&config);

    let absent: Option<User> = None;
    assert_eq!(inferrer.infer(&absent).unwrap(), SchemaNode::label("User"));

    let deep = vec![vec![vec![1u8]]];
    let err = inferrer.infer(&deep).unwrap_err();
    assert!(matches!(err, Error::DepthLimitExceeded { limit: 2 }));
    assert!(err.is_inference_error());
}

#[test]
fn test_json_document_shape() {
    let doc = json!({
        "id": 1,
        "tags": [],
        "owner": {"name": "Ann", "email": null},
        "ratios": [0.5, 1]
    });

    assert_eq!(
        infer(&doc).unwrap().to_json(),
        json!({
            "id": "i64",
            "tags": "[any]",
            "owner": {"name": "String", "email": "null"},
            "ratios": ["f64", "i64"]
        })
    );
}
