use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::{info, warn};

use crate::GeneratedFile;
use crate::compile::MappingCompiler;
use crate::error::BatchError;
use crate::ids::IdGen;
use crate::mapping::{MappingRecord, MappingSet};
use crate::naming;
use crate::parse;
use crate::parse::operation::HttpMethod;
use crate::parse::spec::SpecDocument;
use crate::scenario::StatusScenario;

/// Directory names inside the output tree. `__files` is the mock
/// server's convention for response-body content.
pub const MAPPINGS_DIR: &str = "mappings";
pub const FILES_DIR: &str = "__files";

/// Extension patterns scanned for spec files, in fixed order.
const SPEC_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// One discovered spec file. This is the descriptor external consumers
/// (scaffolding generators, packaging) work from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecHandle {
    pub file: PathBuf,
    pub api_name: String,
    pub filename: String,
}

/// Outcome of one batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// (api name, record count) per successfully compiled spec.
    pub processed: Vec<(String, usize)>,
    /// (api name, error) per spec that failed to load or parse.
    pub failed: Vec<(String, String)>,
    pub total_records: usize,
}

/// Discover spec files in a directory. Extension patterns are scanned in
/// fixed order and names sorted within each, so repeated runs see the
/// same sequence.
pub fn discover_specs(spec_dir: &Path) -> Result<Vec<SpecHandle>, BatchError> {
    let mut entries: Vec<PathBuf> = fs::read_dir(spec_dir)
        .map_err(|source| BatchError::SpecDir {
            path: spec_dir.display().to_string(),
            source,
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    entries.sort();

    let mut specs = Vec::new();
    for wanted in SPEC_EXTENSIONS {
        for path in &entries {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
            if !ext.eq_ignore_ascii_case(wanted) {
                continue;
            }
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            let api_name = derive_api_name(path, &filename);
            specs.push(SpecHandle {
                file: path.clone(),
                api_name,
                filename,
            });
        }
    }

    info!("discovered {} API specifications", specs.len());
    for spec in &specs {
        info!("  - {}: {}", spec.api_name, spec.filename);
    }
    Ok(specs)
}

/// API name from the filename, with a content-based fallback to the
/// spec's declared title when the filename alone is too generic.
fn derive_api_name(path: &Path, filename: &str) -> String {
    let mut name = naming::api_name_from_filename(filename);
    if naming::is_generic_api_name(&name) {
        if let Ok(document) = parse::load_document(path) {
            if let Some(title) = document.title() {
                name = naming::api_name_from_title(title);
            }
        }
    }
    if name.is_empty() {
        "unknown_api".to_string()
    } else {
        name
    }
}

/// Compile one document into method-grouped mapping records plus the
/// content files their bodies reference.
pub fn process_document(
    document: &SpecDocument,
    api_name: &str,
    ids: &IdGen,
) -> (IndexMap<HttpMethod, Vec<MappingRecord>>, Vec<GeneratedFile>) {
    let compiler = MappingCompiler::new(document, api_name, ids);
    let mut grouped: IndexMap<HttpMethod, Vec<MappingRecord>> = IndexMap::new();
    let mut content_files = Vec::new();

    for (path, item) in &document.paths {
        for (method, operation) in item.operations() {
            let operation_id = operation
                .operation_id
                .clone()
                .unwrap_or_else(|| naming::fallback_operation_id(method, path));
            let operation_id = naming::sanitize_token(&operation_id);

            let records = grouped.entry(method).or_default();
            for scenario in StatusScenario::ALL {
                let stub = compiler.compile(&operation_id, method, path, operation, scenario);
                if let Some(file) = stub.content {
                    content_files.push(file);
                }
                records.push(stub.record);
            }
        }
    }

    (grouped, content_files)
}

/// Consolidated mapping files for one API, one per HTTP method, named
/// `{verb-prefix}_{api}_mappings.json`.
pub fn consolidated_files(
    api_name: &str,
    grouped: IndexMap<HttpMethod, Vec<MappingRecord>>,
) -> Vec<GeneratedFile> {
    let mut files = Vec::new();
    for (method, mappings) in grouped {
        let count = mappings.len();
        let filename = format!("{}_{}_mappings.json", method.mapping_prefix(), api_name);
        let payload = MappingSet { mappings };
        let content =
            serde_json::to_string_pretty(&payload).expect("mapping serialization cannot fail");
        info!(
            "generated {count} {} mappings for {api_name}: {filename}",
            method.as_str()
        );
        files.push(GeneratedFile {
            path: format!("{MAPPINGS_DIR}/{api_name}/{filename}"),
            content,
        });
    }
    files
}

/// Run the whole batch: discover specs, compile each, and emit mapping
/// and content files. A spec that fails to load or parse is logged and
/// skipped; it never aborts the batch.
pub fn run_batch(
    spec_dir: &Path,
    ids: &IdGen,
) -> Result<(Vec<GeneratedFile>, BatchSummary), BatchError> {
    let specs = discover_specs(spec_dir)?;
    let mut files = Vec::new();
    let mut summary = BatchSummary::default();

    for handle in &specs {
        info!("processing API: {}", handle.api_name);
        let document = match parse::load_document(&handle.file) {
            Ok(document) => document,
            Err(err) => {
                warn!("skipping {}: {err}", handle.filename);
                summary.failed.push((handle.api_name.clone(), err.to_string()));
                continue;
            }
        };

        let (grouped, content) = process_document(&document, &handle.api_name, ids);
        let spec_total: usize = grouped.values().map(Vec::len).sum();

        files.extend(content.into_iter().map(|file| GeneratedFile {
            path: format!("{FILES_DIR}/{}", file.path),
            content: file.content,
        }));
        files.extend(consolidated_files(&handle.api_name, grouped));

        summary.processed.push((handle.api_name.clone(), spec_total));
        summary.total_records += spec_total;
        info!("completed {}: {spec_total} mappings", handle.api_name);
    }

    info!("generation complete: {} total mappings", summary.total_records);
    Ok((files, summary))
}
