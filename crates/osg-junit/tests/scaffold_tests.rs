use osg_junit::{ApiDescriptor, emit_scaffold};

fn descriptors() -> Vec<ApiDescriptor> {
    vec![
        ApiDescriptor {
            api_name: "products".to_string(),
            filename: "products-api.yaml".to_string(),
        },
        ApiDescriptor {
            api_name: "user_service".to_string(),
            filename: "user-service-api.yaml".to_string(),
        },
    ]
}

#[test]
fn emits_shared_and_per_api_artifacts() {
    let files = emit_scaffold(&descriptors());

    // Three shared files plus a config and a test class per API.
    assert_eq!(files.len(), 7);

    let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
    assert!(paths.contains(
        &"java/src/main/java/com/example/wiremock/MultiApiWireMockServer.java"
    ));
    assert!(paths.contains(
        &"java/src/main/java/com/example/wiremock/config/WireMockTestConfig.java"
    ));
    assert!(paths.contains(
        &"java/src/test/java/com/example/wiremock/test/BaseWireMockIntegrationTest.java"
    ));
    assert!(paths.contains(
        &"java/src/main/java/com/example/wiremock/config/ProductsWireMockConfig.java"
    ));
    assert!(paths.contains(
        &"java/src/test/java/com/example/wiremock/test/UserServiceWireMockTest.java"
    ));
}

#[test]
fn per_api_config_is_rendered_for_its_api() {
    let files = emit_scaffold(&descriptors());
    let config = files
        .iter()
        .find(|f| f.path.ends_with("ProductsWireMockConfig.java"))
        .unwrap();

    assert!(config.content.contains("public class ProductsWireMockConfig"));
    assert!(config.content.contains("usingFilesUnderClasspath(\"wiremock/products\")"));
    assert!(config.content.contains("WIREMOCK_PORT = 8089"));
    assert!(config.content.contains("public String productsApiBaseUrl()"));
    assert!(config.content.contains("products-api.yaml"));

    // The second API gets the next standalone port.
    let second = files
        .iter()
        .find(|f| f.path.ends_with("UserServiceWireMockConfig.java"))
        .unwrap();
    assert!(second.content.contains("WIREMOCK_PORT = 8090"));
    assert!(second.content.contains("public String user_serviceApiBaseUrl()"));
}

#[test]
fn multi_server_assigns_sequential_ports() {
    let files = emit_scaffold(&descriptors());
    let server = files
        .iter()
        .find(|f| f.path.ends_with("MultiApiWireMockServer.java"))
        .unwrap();

    assert!(server.content.contains("private static final int BASE_PORT = 8080;"));
    assert!(server.content.contains("int productsPort = BASE_PORT + 0;"));
    assert!(server.content.contains("int user_servicePort = BASE_PORT + 1;"));
    assert!(server.content.contains("Manages WireMock servers for: products, user_service"));
}

#[test]
fn base_test_exposes_a_getter_per_api() {
    let files = emit_scaffold(&descriptors());
    let base = files
        .iter()
        .find(|f| f.path.ends_with("BaseWireMockIntegrationTest.java"))
        .unwrap();

    assert!(base.content.contains("protected String getProductsBaseUrl()"));
    assert!(base.content.contains("protected String getUserServiceBaseUrl()"));
    assert!(base.content.contains("protected String user_serviceApiBaseUrl;"));
}

#[test]
fn emission_is_a_pure_function() {
    assert_eq!(emit_scaffold(&descriptors()), emit_scaffold(&descriptors()));
}

#[test]
fn no_apis_still_yields_the_shared_scaffolding() {
    let files = emit_scaffold(&[]);
    assert_eq!(files.len(), 3);
}
