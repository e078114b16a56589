pub mod components;
pub mod media_type;
pub mod operation;
pub mod response;
pub mod schema;
pub mod spec;

use std::fs;
use std::path::Path;

use crate::error::ParseError;
use spec::SpecDocument;

/// Parse a spec document from JSON.
pub fn from_json(input: &str) -> Result<SpecDocument, ParseError> {
    Ok(serde_json::from_str(input)?)
}

/// Parse a spec document from YAML.
pub fn from_yaml(input: &str) -> Result<SpecDocument, ParseError> {
    Ok(serde_yaml_ng::from_str(input)?)
}

/// Load a document from disk. JSON is tried first regardless of extension;
/// anything that is not valid JSON falls through to the YAML parser, and
/// the YAML error is the one reported when both fail.
pub fn load_document(path: &Path) -> Result<SpecDocument, ParseError> {
    let content = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;

    match from_json(&content) {
        Ok(document) => Ok(document),
        Err(_) => from_yaml(&content),
    }
}
