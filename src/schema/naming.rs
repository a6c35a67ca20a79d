//! Field naming policy
//!
//! Decides which record fields appear in a schema and under which key.
//! Naming metadata is a comma-separated list of `key` or `key = value`
//! entries (for example `rename = "user_id", skip_none`); only `rename`
//! is interpreted.

use crate::reflect::FieldDescriptor;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for one metadata entry: `key` or `key = value`
static ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*(?:=\s*("(?:[^"\\]|\\.)*"|[^\s",=]+))?\s*$"#)
        .unwrap()
});

/// Metadata key carrying the rename
const RENAME_KEY: &str = "rename";

/// Check whether a field is included in inferred schemas
pub fn is_visible(field: &FieldDescriptor) -> bool {
    field.visibility.is_public()
}

/// Compute the output key for a field
///
/// Returns the declared name (without a `r#` raw prefix) unless the
/// metadata carries a non-empty rename. The error is a human-readable
/// description of what is wrong with the metadata.
pub fn output_name(field: &FieldDescriptor) -> Result<String, String> {
    let rename = match field.metadata {
        Some(metadata) => parse_rename(metadata)?,
        None => None,
    };

    Ok(rename.unwrap_or_else(|| strip_raw_prefix(field.name).to_string()))
}

/// Extract the optional rename from naming metadata
pub fn parse_rename(metadata: &str) -> Result<Option<String>, String> {
    let mut rename = None;

    for entry in split_entries(metadata)? {
        if entry.trim().is_empty() {
            continue;
        }

        let caps = ENTRY_REGEX
            .captures(entry)
            .ok_or_else(|| format!("expected `key` or `key = value`, found `{}`", entry.trim()))?;

        if &caps[1] != RENAME_KEY {
            continue;
        }

        if rename.is_some() {
            return Err("`rename` given more than once".to_string());
        }

        let value = caps
            .get(2)
            .ok_or_else(|| "`rename` requires a value".to_string())?
            .as_str();
        rename = Some(unquote(value)?);
    }

    Ok(rename.filter(|name| !name.is_empty()))
}

/// Strips the `r#` prefix from raw identifiers.
pub fn strip_raw_prefix(ident: &str) -> &str {
    ident.strip_prefix("r#").unwrap_or(ident)
}

/// Split metadata on commas outside string literals
fn split_entries(metadata: &str) -> Result<Vec<&str>, String> {
    let mut entries = Vec::new();
    let mut start = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in metadata.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
        } else if c == '"' {
            in_string = true;
        } else if c == ',' {
            entries.push(&metadata[start..i]);
            start = i + 1;
        }
    }

    if in_string {
        return Err("unterminated string literal".to_string());
    }

    entries.push(&metadata[start..]);
    Ok(entries)
}

/// Decode a quoted rename value
fn unquote(value: &str) -> Result<String, String> {
    let inner = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or_else(|| format!("`rename` value must be a string literal, found `{value}`"))?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                Some(other) => {
                    return Err(format!("unsupported escape `\\{other}` in `rename` value"));
                }
                None => return Err("dangling escape in `rename` value".to_string()),
            }
        } else {
            out.push(c);
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::{FieldDescriptor, TypeInfo, Typed};
    use test_case::test_case;

    fn int_type() -> TypeInfo {
        i32::type_info()
    }

    #[test_case(r#"rename = "id""# => Some("id".to_string()) ; "plain rename")]
    #[test_case(r#"rename="id""# => Some("id".to_string()) ; "no spaces")]
    #[test_case(r#"skip_none, rename = "user id""# => Some("user id".to_string()) ; "among other keys")]
    #[test_case(r#"rename = "a,b""# => Some("a,b".to_string()) ; "comma inside string")]
    #[test_case(r#"rename = "say \"hi\"""# => Some("say \"hi\"".to_string()) ; "escaped quotes")]
    #[test_case(r#"rename = """# => None ; "empty rename")]
    #[test_case("" => None ; "empty metadata")]
    #[test_case("default, flatten = yes" => None ; "unrelated keys")]
    fn test_parse_rename(metadata: &str) -> Option<String> {
        parse_rename(metadata).unwrap()
    }

    #[test_case(r#"rename = "id"#  ; "unterminated string")]
    #[test_case("rename"  ; "missing value")]
    #[test_case("rename = id"  ; "unquoted value")]
    #[test_case("rename = 42"  ; "numeric value")]
    #[test_case(r#"rename = "a", rename = "b""#  ; "duplicate rename")]
    #[test_case("= \"x\""  ; "missing key")]
    #[test_case(r#"rename = "a\n""#  ; "unsupported escape")]
    fn test_parse_rename_malformed(metadata: &str) {
        assert!(parse_rename(metadata).is_err());
    }

    #[test]
    fn test_output_name() {
        let plain = FieldDescriptor::public("count", int_type);
        assert_eq!(output_name(&plain).unwrap(), "count");

        let renamed = FieldDescriptor::public("count", int_type).with_metadata(r#"rename = "total""#);
        assert_eq!(output_name(&renamed).unwrap(), "total");

        let raw = FieldDescriptor::public("r#type", int_type);
        assert_eq!(output_name(&raw).unwrap(), "type");

        let broken = FieldDescriptor::public("count", int_type).with_metadata("rename");
        assert_eq!(output_name(&broken).unwrap_err(), "`rename` requires a value");
    }

    #[test]
    fn test_is_visible() {
        assert!(is_visible(&FieldDescriptor::public("a", int_type)));
        assert!(!is_visible(&FieldDescriptor::private("a", int_type)));
    }
}
