use std::fs;

use osg_core::batch;
use osg_core::ids::IdGen;
use tempfile::TempDir;

const WIDGETS: &str = include_str!("fixtures/widgets.json");
const PETSTORE: &str = include_str!("fixtures/petstore.yaml");

#[test]
fn discovery_scans_extensions_in_fixed_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("beta.yaml"), PETSTORE).unwrap();
    fs::write(dir.path().join("alpha.json"), WIDGETS).unwrap();
    fs::write(dir.path().join("gamma.yml"), PETSTORE).unwrap();
    fs::write(dir.path().join("notes.txt"), "not a spec").unwrap();

    let specs = batch::discover_specs(dir.path()).unwrap();
    let filenames: Vec<&str> = specs.iter().map(|s| s.filename.as_str()).collect();
    assert_eq!(filenames, vec!["beta.yaml", "gamma.yml", "alpha.json"]);

    let api_names: Vec<&str> = specs.iter().map(|s| s.api_name.as_str()).collect();
    assert_eq!(api_names, vec!["beta", "gamma", "alpha"]);
}

#[test]
fn generic_filenames_fall_back_to_the_spec_title() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("openapi.yaml"), PETSTORE).unwrap();

    let specs = batch::discover_specs(dir.path()).unwrap();
    assert_eq!(specs.len(), 1);
    assert_eq!(specs[0].api_name, "pet_store");
}

#[test]
fn generic_name_without_a_readable_title_is_kept() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("swagger.json"), "{ not valid").unwrap();

    let specs = batch::discover_specs(dir.path()).unwrap();
    assert_eq!(specs[0].api_name, "swagger");
}

#[test]
fn an_empty_derivation_lands_on_unknown_api() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("_api.yaml"), "{ not valid").unwrap();

    let specs = batch::discover_specs(dir.path()).unwrap();
    assert_eq!(specs[0].api_name, "unknown_api");
}

#[test]
fn a_bad_spec_is_skipped_without_aborting_the_batch() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("widgets.json"), WIDGETS).unwrap();
    fs::write(dir.path().join("broken.yaml"), "{ not valid").unwrap();

    let ids = IdGen::seeded();
    let (files, summary) = batch::run_batch(dir.path(), &ids).unwrap();

    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.processed, vec![("widgets".to_string(), 16)]);
    assert_eq!(summary.total_records, 16);
    assert!(!files.is_empty());
}

#[test]
fn batch_output_follows_the_naming_convention() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("widgets.json"), WIDGETS).unwrap();

    let ids = IdGen::seeded();
    let (files, _) = batch::run_batch(dir.path(), &ids).unwrap();

    let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
    assert!(paths.contains(&"mappings/widgets/get_widgets_mappings.json"));
    assert!(paths.contains(&"mappings/widgets/create_widgets_mappings.json"));
    assert!(paths.contains(&"__files/widgets/get_getWidget_200_response.json"));
    assert!(paths.contains(&"__files/widgets/post_createWidget_201_response.json"));
    assert!(paths.contains(&"__files/widgets/get_getWidget_503_error.json"));

    let consolidated = files
        .iter()
        .find(|f| f.path == "mappings/widgets/get_widgets_mappings.json")
        .unwrap();
    let payload: serde_json::Value = serde_json::from_str(&consolidated.content).unwrap();
    assert_eq!(payload["mappings"].as_array().unwrap().len(), 8);
}

#[test]
fn regeneration_emits_the_same_paths() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("widgets.json"), WIDGETS).unwrap();

    let (first, _) = batch::run_batch(dir.path(), &IdGen::seeded()).unwrap();
    let (second, _) = batch::run_batch(dir.path(), &IdGen::seeded()).unwrap();

    assert_eq!(first, second);
}
