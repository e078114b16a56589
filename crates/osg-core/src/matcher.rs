use indexmap::IndexMap;
use serde::Serialize;

use crate::parse::operation::HttpMethod;
use crate::scenario::StatusScenario;

/// Header a test client sets to select a non-default scenario on
/// body-less requests.
pub const SCENARIO_HEADER: &str = "X-Test-Scenario";

/// Header matching predicate in the mock server's mapping dialect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderMatch {
    Contains(String),
    EqualTo(String),
}

/// A JSONPath predicate over the request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyPattern {
    #[serde(rename = "matchesJsonPath")]
    pub matches_json_path: String,
}

/// Request side of a stub mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestMatcher {
    pub method: String,

    #[serde(rename = "urlPathPattern")]
    pub url_path_pattern: String,

    pub headers: IndexMap<String, HeaderMatch>,

    #[serde(rename = "bodyPatterns", skip_serializing_if = "Option::is_none")]
    pub body_patterns: Option<Vec<BodyPattern>>,
}

/// Build the request matcher that makes one scenario selectable among the
/// eight stubs sharing a method + path.
///
/// Status variants must stay pairwise distinguishable: body-bearing
/// methods embed the identifier token anywhere in the JSON body
/// (case-insensitive recursive match), body-less methods name it in the
/// scenario header, and plain 200 stays the default match. The path
/// template passes through unmodified; placeholder normalization is the
/// consumer's job.
pub fn build_matcher(
    method: HttpMethod,
    path_template: &str,
    scenario: StatusScenario,
) -> RequestMatcher {
    let mut headers = IndexMap::new();
    headers.insert("Accept".to_string(), HeaderMatch::Contains("json".to_string()));

    let mut body_patterns = None;
    if method.has_request_body() {
        body_patterns = Some(vec![BodyPattern {
            matches_json_path: format!("$[?(@..* =~ /.*{}.*/i)]", scenario.identifier()),
        }]);
    } else if scenario.status() != 200 {
        headers.insert(
            SCENARIO_HEADER.to_string(),
            HeaderMatch::EqualTo(scenario.identifier().to_string()),
        );
    }

    RequestMatcher {
        method: method.as_str().to_string(),
        url_path_pattern: path_template.to_string(),
        headers,
        body_patterns,
    }
}
