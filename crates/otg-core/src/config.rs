use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::transform::RequestFilter;

/// Top-level project configuration loaded from `.otg.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OtgConfig {
    /// Specification files to harvest, processed in order.
    pub inputs: Vec<String>,
    /// Base URL the target API is served from.
    pub base_url: Option<String>,
    /// Populate parameter/property values from declared examples.
    pub use_example_values: bool,
    /// Endpoint-name filter applied to the harvested list.
    pub filter: RequestFilter,
    /// Output format for the harvested descriptors.
    pub format: OutputFormat,
    /// Output file; stdout when unset.
    pub output: Option<String>,
}

impl Default for OtgConfig {
    fn default() -> Self {
        Self {
            inputs: vec!["openapi.yaml".to_string()],
            base_url: None,
            use_example_values: false,
            filter: RequestFilter::default(),
            format: OutputFormat::Json,
            output: None,
        }
    }
}

/// Serialization format for harvested descriptors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".otg.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<OtgConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: OtgConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# otg configuration
inputs:
  - openapi.yaml

# base_url: https://petstore3.swagger.io/

use_example_values: false

filter: {}
  # endpoint_name_whitelist: [addPet, deletePet]
  # endpoint_name_blacklist: [uploadFile]

format: json            # json | yaml
# output: requests.json   # stdout when unset
"#
}
