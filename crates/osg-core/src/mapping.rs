use indexmap::IndexMap;
use serde::Serialize;

use crate::matcher::RequestMatcher;

/// One emitted stub: matcher, canned response, and provenance metadata.
/// Created once per (operation, status) pair; regeneration replaces the
/// whole output tree rather than updating records in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingRecord {
    pub id: String,
    pub request: RequestMatcher,
    pub response: StubResponse,
    pub metadata: MappingMetadata,
}

/// Response side of a stub mapping. Exactly one of `body` and
/// `body_file_name` is set: an inline JSON string, or a path relative to
/// the content-file root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StubResponse {
    pub status: u16,

    pub headers: IndexMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(rename = "bodyFileName", skip_serializing_if = "Option::is_none")]
    pub body_file_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingMetadata {
    pub scenario: String,
    pub operation_id: String,
    pub api_name: String,
}

/// Consolidated per-method mapping file payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingSet {
    pub mappings: Vec<MappingRecord>,
}
