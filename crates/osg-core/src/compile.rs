use indexmap::IndexMap;
use serde_json::{Value, json};

use crate::GeneratedFile;
use crate::extract::ResponseExtractor;
use crate::ids::IdGen;
use crate::mapping::{MappingMetadata, MappingRecord, StubResponse};
use crate::matcher::build_matcher;
use crate::parse::operation::{HttpMethod, Operation};
use crate::parse::spec::SpecDocument;
use crate::scenario::StatusScenario;
use crate::synth::EXAMPLE_TIMESTAMP;

/// Fixed error payload details per status code.
fn error_detail(status: u16) -> Option<(&'static str, &'static str, &'static str)> {
    match status {
        401 => Some((
            "UNAUTHORIZED",
            "Authentication credentials were not provided or are invalid",
            "Please provide a valid authorization token",
        )),
        403 => Some((
            "FORBIDDEN",
            "You do not have permission to access this resource",
            "Insufficient privileges for this operation",
        )),
        404 => Some((
            "NOT_FOUND",
            "The requested resource was not found",
            "Resource does not exist or has been removed",
        )),
        500 => Some((
            "INTERNAL_SERVER_ERROR",
            "An unexpected error occurred",
            "Please try again later or contact support",
        )),
        502 => Some((
            "BAD_GATEWAY",
            "Invalid response from upstream server",
            "The server received an invalid response from an upstream server",
        )),
        503 => Some((
            "SERVICE_UNAVAILABLE",
            "Service is temporarily unavailable",
            "The service is currently undergoing maintenance or experiencing high load",
        )),
        _ => None,
    }
}

/// A compiled stub: the mapping record plus, in most cases, the content
/// file its response body lives in.
#[derive(Debug, Clone)]
pub struct CompiledStub {
    pub record: MappingRecord,
    pub content: Option<GeneratedFile>,
}

/// Compiles one (operation, status) pair at a time against the active
/// document. Purely a pipeline: no retries, no partial states.
pub struct MappingCompiler<'a> {
    extractor: ResponseExtractor<'a>,
    api_name: &'a str,
    ids: &'a IdGen,
}

impl<'a> MappingCompiler<'a> {
    pub fn new(document: &'a SpecDocument, api_name: &'a str, ids: &'a IdGen) -> Self {
        Self {
            extractor: ResponseExtractor::new(document),
            api_name,
            ids,
        }
    }

    /// Build the stub for one scenario of one operation.
    ///
    /// Success statuses reference a content file holding the extracted
    /// example, falling back to an inline `{"message":"Success"}` when the
    /// document yields nothing. Error statuses always get a content file:
    /// a spec-provided body when one exists, otherwise the fixed error
    /// table wrapped with timestamp/traceId/status/path.
    pub fn compile(
        &self,
        operation_id: &str,
        method: HttpMethod,
        path: &str,
        operation: &Operation,
        scenario: StatusScenario,
    ) -> CompiledStub {
        let request = build_matcher(method, path, scenario);

        let mut headers = IndexMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let (body, body_file_name, content) = if scenario.is_success() {
            match self.extractor.extract(operation, scenario) {
                Some(value) => {
                    let file = self.content_file(method, operation_id, scenario, "response", &value);
                    (None, Some(file.path.clone()), Some(file))
                }
                None => (Some(json!({"message": "Success"}).to_string()), None, None),
            }
        } else {
            let value = self.error_body(operation, scenario);
            let file = self.content_file(method, operation_id, scenario, "error", &value);
            (None, Some(file.path.clone()), Some(file))
        };

        CompiledStub {
            record: MappingRecord {
                id: self.ids.next(),
                request,
                response: StubResponse {
                    status: scenario.status(),
                    headers,
                    body,
                    body_file_name,
                },
                metadata: MappingMetadata {
                    scenario: scenario.label().to_string(),
                    operation_id: operation_id.to_string(),
                    api_name: self.api_name.to_string(),
                },
            },
            content,
        }
    }

    fn error_body(&self, operation: &Operation, scenario: StatusScenario) -> Value {
        if let Some(value) = self.extractor.extract(operation, scenario) {
            return value;
        }

        let status = scenario.status();
        let detail = match error_detail(status) {
            Some((code, message, details)) => json!({
                "code": code,
                "message": message,
                "details": details,
            }),
            None => json!({
                "code": format!("ERROR_{status}"),
                "message": scenario.name(),
                "details": format!("Test scenario for {status} status code"),
            }),
        };

        json!({
            "errors": [detail],
            "timestamp": EXAMPLE_TIMESTAMP,
            "traceId": self.ids.next(),
            "status": status,
            "path": operation.summary.as_deref().unwrap_or("Unknown operation"),
        })
    }

    fn content_file(
        &self,
        method: HttpMethod,
        operation_id: &str,
        scenario: StatusScenario,
        kind: &str,
        value: &Value,
    ) -> GeneratedFile {
        let path = format!(
            "{}/{}_{}_{}_{}.json",
            self.api_name,
            method.lower(),
            operation_id,
            scenario.status(),
            kind
        );
        let content =
            serde_json::to_string_pretty(value).expect("JSON value serialization cannot fail");
        GeneratedFile { path, content }
    }
}
