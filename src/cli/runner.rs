//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::{load_config, InferConfig};
use crate::error::{Error, Result, ResultExt};
use crate::schema::{SchemaInferrer, SchemaNode};
use crate::types::{InputFormat, JsonValue};
use std::fs;
use std::io::Read;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Infer {
                input,
                input_format,
                pretty,
            } => self.infer(input, *input_format, *pretty),
            Commands::Config => self.show_config(),
        }
    }

    /// Load configuration and apply command-line overrides
    fn config(&self) -> Result<InferConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => InferConfig::default(),
        };

        if let Some(max_depth) = self.cli.max_depth {
            if max_depth == 0 {
                return Err(Error::config("--max-depth must be greater than zero"));
            }
            config.max_depth = max_depth;
        }
        if let Some(policy) = self.cli.absent_reference {
            config.absent_reference = policy;
        }

        Ok(config)
    }

    fn infer(&self, input: &Path, format: Option<InputFormat>, pretty: bool) -> Result<()> {
        let config = self.config()?;
        let format = format.unwrap_or_else(|| detect_format(input));

        let content = read_input(input)?;
        tracing::debug!("Read {} bytes from {}", content.len(), input.display());

        let schema = infer_document(&content, format, &config)
            .with_context(|| format!("Failed to infer schema of '{}'", input.display()))?;

        if pretty {
            println!("{}", schema.to_json_pretty());
        } else {
            println!("{schema}");
        }
        Ok(())
    }

    fn show_config(&self) -> Result<()> {
        let config = self.config()?;
        let rendered = serde_yaml::to_string(&config).context("Failed to render configuration")?;
        print!("{rendered}");
        Ok(())
    }
}

/// Parse a document and infer its schema
pub fn infer_document(content: &str, format: InputFormat, config: &InferConfig) -> Result<SchemaNode> {
    let document = parse_document(content, format)?;
    SchemaInferrer::from_config(config).infer(&document)
}

/// Parse a JSON or YAML document into a dynamic value
pub fn parse_document(content: &str, format: InputFormat) -> Result<JsonValue> {
    let value = match format {
        InputFormat::Json => serde_json::from_str(content)?,
        InputFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(value)
}

/// Pick the input format from the file extension
fn detect_format(input: &Path) -> InputFormat {
    input
        .extension()
        .and_then(|ext| ext.to_str())
        .map(InputFormat::from_extension)
        .unwrap_or_default()
}

/// Read a file, or stdin for `-`
fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }

    fs::read_to_string(input).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: input.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AbsentReferencePolicy;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_infer_json_document() {
        let schema = infer_document(
            r#"{"name": "Ann", "age": 30, "tags": [], "scores": [1.5, 2]}"#,
            InputFormat::Json,
            &InferConfig::default(),
        )
        .unwrap();

        assert_eq!(
            schema.to_json(),
            json!({
                "name": "String",
                "age": "i64",
                "tags": "[any]",
                "scores": ["f64", "i64"]
            })
        );
    }

    #[test]
    fn test_infer_yaml_document() {
        let yaml = "name: Ann\nactive: true\naddress:\n  city: Oslo\n  zip: null\n";
        let schema = infer_document(yaml, InputFormat::Yaml, &InferConfig::default()).unwrap();

        assert_eq!(
            schema.to_json(),
            json!({
                "name": "String",
                "active": "bool",
                "address": {"city": "String", "zip": "null"}
            })
        );
    }

    #[test]
    fn test_parse_document_error() {
        let err = parse_document("{not json", InputFormat::Json).unwrap_err();
        assert!(matches!(err, Error::JsonParse(_)));
    }

    #[test]
    fn test_depth_limit_from_config() {
        let config = InferConfig {
            max_depth: 1,
            ..InferConfig::default()
        };
        let err = infer_document(r#"{"a": {"b": {"c": 1}}}"#, InputFormat::Json, &config)
            .unwrap_err();
        assert!(matches!(err, Error::DepthLimitExceeded { limit: 1 }));
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format(Path::new("a/b.yml")), InputFormat::Yaml);
        assert_eq!(detect_format(Path::new("a/b.json")), InputFormat::Json);
        assert_eq!(detect_format(Path::new("-")), InputFormat::Json);
    }

    #[test]
    fn test_config_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_depth: 12").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let cli = Cli::parse_from([
            "schemalike",
            "-C",
            path.as_str(),
            "--absent-reference",
            "label",
            "config",
        ]);
        let config = Runner::new(cli).config().unwrap();

        assert_eq!(config.max_depth, 12);
        assert_eq!(config.absent_reference, AbsentReferencePolicy::Label);
    }

    #[test]
    fn test_zero_max_depth_override_rejected() {
        let cli = Cli::parse_from(["schemalike", "--max-depth", "0", "config"]);
        assert!(Runner::new(cli).config().is_err());
    }
}
