use serde_json::Value;

use crate::parse::operation::Operation;
use crate::parse::response::Response;
use crate::parse::spec::SpecDocument;
use crate::scenario::StatusScenario;
use crate::synth::Synthesizer;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Shared `components.responses` names historically used for each error
/// status; the first name present in the document wins.
const RESPONSE_ALIASES: &[(u16, &[&str])] = &[
    (401, &["Unauthorized", "unauthorized"]),
    (403, &["Forbidden", "forbidden"]),
    (404, &["NotFound", "not_found", "NotFoundError"]),
    (500, &["InternalServerError", "internal_server_error", "ServerError"]),
];

/// Finds the best available example body for an operation's response.
pub struct ResponseExtractor<'a> {
    document: &'a SpecDocument,
    synthesizer: Synthesizer<'a>,
}

impl<'a> ResponseExtractor<'a> {
    pub fn new(document: &'a SpecDocument) -> Self {
        Self {
            document,
            synthesizer: Synthesizer::new(document),
        }
    }

    /// Search order: declared response for the status code (literal
    /// example, then first named example's `value`, then schema
    /// synthesis), then the shared `components.responses` aliases.
    /// `None` means the document has nothing to offer; the caller supplies
    /// its own fallback — an error body is never invented here.
    pub fn extract(&self, operation: &Operation, scenario: StatusScenario) -> Option<Value> {
        let status = scenario.status();
        if let Some(response) = operation.responses.get(status.to_string().as_str()) {
            if let Some(value) = self.from_response(response) {
                return Some(value);
            }
        }
        self.from_shared_components(status)
    }

    fn from_response(&self, response: &Response) -> Option<Value> {
        let media = response.content.get(JSON_CONTENT_TYPE)?;

        if let Some(example) = &media.example {
            return Some(example.clone());
        }
        if let Some((_, first)) = media.examples.first() {
            if let Some(value) = first.get("value") {
                return Some(value.clone());
            }
        }

        let schema = media.schema.as_ref()?;
        Some(self.synthesizer.synthesize(schema, 0, None))
    }

    fn from_shared_components(&self, status: u16) -> Option<Value> {
        let aliases = RESPONSE_ALIASES
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, names)| *names)?;
        let responses = &self.document.components.as_ref()?.responses;
        let response = aliases.iter().find_map(|name| responses.get(*name))?;
        self.from_response(response)
    }
}
