pub mod batch;
pub mod compile;
pub mod error;
pub mod extract;
pub mod ids;
pub mod mapping;
pub mod matcher;
pub mod naming;
pub mod parse;
pub mod resolve;
pub mod scenario;
pub mod synth;

/// A generated file with path and content.
///
/// Library code never touches the output filesystem; everything a
/// compilation produces is expressed as a list of these and written by
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}
