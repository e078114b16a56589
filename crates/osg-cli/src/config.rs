use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Project configuration loaded from `.osg.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OsgConfig {
    /// Directory scanned for spec files.
    pub spec_dir: String,
    /// Directory the mappings/ and __files/ trees are written to.
    pub output: String,
    /// Also emit the JUnit/Spring test scaffolding.
    pub junit: bool,
}

impl Default for OsgConfig {
    fn default() -> Self {
        Self {
            spec_dir: "spec".to_string(),
            output: "wiremock".to_string(),
            junit: false,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".osg.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<OsgConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: OsgConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# osg configuration
spec_dir: spec        # directory scanned for *.yaml / *.yml / *.json specs
output: wiremock      # mappings/ and __files/ are written here
junit: false          # also emit JUnit/Spring test scaffolding
"#
}
