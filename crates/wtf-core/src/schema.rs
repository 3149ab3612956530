//! Schema and example config generation.
//!
//! Produces a JSON schema and a commented example TOML file from the config
//! struct definitions, so editors can validate user configuration.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use schemars::Schema;
use schemars::generate::SchemaSettings;
use serde_json::json;

use crate::Result;
use crate::config::AppConfig;

/// Generated schema filename.
pub const SCHEMA_FILENAME: &str = "config.schema.json";

/// Generated config filename.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Generate the JSON schema for `AppConfig` using schemars.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn generate_schema(project_name: &str, repo_url: &str) -> Result<String> {
    // draft-07 has the widest TOML editor support
    let generator = SchemaSettings::draft07().into_generator();
    let mut schema: Schema = generator.into_root_schema_for::<AppConfig>();

    schema.insert(
        "$id".to_string(),
        json!(format!("{repo_url}/schemas/config.schema.json")),
    );
    schema.insert(
        "title".to_string(),
        json!(format!("{project_name} configuration")),
    );
    schema.insert(
        "description".to_string(),
        json!(format!("Configuration schema for {project_name}")),
    );

    if let Some(props) = schema.get_mut("properties")
        && let Some(props_obj) = props.as_object_mut()
    {
        props_obj.insert(
            "$schema".to_string(),
            json!({
                "type": "string",
                "description": "JSON Schema reference for editor support"
            }),
        );
    }

    Ok(serde_json::to_string_pretty(&schema)?)
}

/// Generate the example TOML configuration from the default `AppConfig`.
///
/// # Errors
///
/// Returns an error if TOML serialization fails.
pub fn generate_example_config(project_name: &str, repo_url: &str) -> Result<String> {
    let toml_body = toml::to_string_pretty(&AppConfig::default())?;

    let mut output = String::new();
    let _ = write!(
        output,
        r#""$schema" = "{repo_url}/schemas/config.schema.json"

# Configuration for {project_name}.
# Copy this file to $XDG_CONFIG_HOME/{project_name}/config.toml and adjust as needed.
# Any key can be overridden from the environment, e.g. WTF__EXIT_MESSAGE__DISPLAY=false.

"#
    );
    output.push_str(&toml_body);

    Ok(output)
}

/// Write generated files to a directory.
///
/// # Errors
///
/// Returns an error if directory creation or file writing fails.
pub fn write_generated_files(output_dir: &Path, project_name: &str, repo_url: &str) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    let schema = generate_schema(project_name, repo_url)?;
    fs::write(output_dir.join(SCHEMA_FILENAME), schema)?;

    let config = generate_example_config(project_name, repo_url)?;
    fs::write(output_dir.join(CONFIG_FILENAME), config)?;

    Ok(())
}
