use osg_core::parse;
use osg_core::parse::operation::HttpMethod;

const WIDGETS: &str = include_str!("fixtures/widgets.json");
const PETSTORE: &str = include_str!("fixtures/petstore.yaml");

#[test]
fn parse_widgets_json() {
    let document = parse::from_json(WIDGETS).expect("should parse widgets.json");
    assert_eq!(document.openapi.as_deref(), Some("3.0.3"));
    assert_eq!(document.title(), Some("Widgets"));
    assert_eq!(document.paths.len(), 2);

    let item = document.paths.get("/widgets/{id}").expect("path present");
    let get = item.get.as_ref().expect("GET operation");
    assert_eq!(get.operation_id.as_deref(), Some("getWidget"));
    assert_eq!(get.summary.as_deref(), Some("Fetch a widget"));

    let ok = get.responses.get("200").expect("200 response");
    let media = ok.content.get("application/json").expect("json content");
    assert!(media.example.is_some());
}

#[test]
fn parse_petstore_yaml() {
    let document = parse::from_yaml(PETSTORE).expect("should parse petstore.yaml");
    assert_eq!(document.title(), Some("Pet Store"));
    assert_eq!(document.paths.len(), 2);

    let components = document.components.as_ref().expect("components present");
    assert_eq!(components.schemas.len(), 2);
    assert!(components.responses.contains_key("NotFound"));

    let pet = components.schemas.get("Pet").expect("Pet schema");
    let status = pet.properties.get("status").expect("status property");
    assert_eq!(status.enum_values.len(), 3);

    let pet_id = pet.properties.get("petId").expect("petId property");
    assert_eq!(pet_id.minimum, Some(1000.0));
    assert_eq!(pet_id.maximum, Some(9999.0));

    let category = pet.properties.get("category").expect("category property");
    assert_eq!(
        category.ref_path.as_deref(),
        Some("#/components/schemas/Category")
    );
}

#[test]
fn operations_iterate_in_fixed_method_order() {
    let document = parse::from_yaml(PETSTORE).unwrap();
    let pets = document.paths.get("/pets").unwrap();
    let methods: Vec<HttpMethod> = pets.operations().map(|(method, _)| method).collect();
    assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Post]);

    // An operation without declared responses still parses.
    let by_id = document.paths.get("/pets/{petId}").unwrap();
    let (method, delete) = by_id.operations().next().expect("DELETE operation");
    assert_eq!(method, HttpMethod::Delete);
    assert!(delete.responses.is_empty());
    assert!(delete.operation_id.is_none());
}

#[test]
fn unparsable_input_is_an_error() {
    assert!(parse::from_json("{ not valid").is_err());
    assert!(parse::from_yaml("{ not valid").is_err());
}
