use heck::ToPascalCase;
use minijinja::{Environment, context};
use serde::Serialize;

use osg_core::GeneratedFile;

use crate::ApiDescriptor;

const JAVA_MAIN: &str = "java/src/main/java/com/example/wiremock";
const JAVA_TEST: &str = "java/src/test/java/com/example/wiremock/test";

/// Port the multi-API server assigns to the first API; the rest count up.
const MULTI_SERVER_BASE_PORT: u16 = 8080;
/// Port block for the standalone per-API configurations.
const CONFIG_BASE_PORT: u16 = 8089;

/// Template-facing view of one API. `api_name` doubles as a Java
/// identifier prefix, so it must stay within `[a-z0-9_]`.
#[derive(Debug, Clone, Serialize)]
struct ApiContext {
    api_name: String,
    filename: String,
    class_name: String,
    index: usize,
    config_port: u16,
}

impl ApiContext {
    fn new(api: &ApiDescriptor, index: usize) -> Self {
        Self {
            api_name: api.api_name.clone(),
            filename: api.filename.clone(),
            class_name: api.api_name.to_pascal_case(),
            index,
            config_port: CONFIG_BASE_PORT + index as u16,
        }
    }
}

/// Emit the JUnit/Spring scaffolding for the given APIs.
///
/// Pure function of its input: the same descriptor list always yields the
/// same artifact set.
pub fn emit_scaffold(apis: &[ApiDescriptor]) -> Vec<GeneratedFile> {
    let contexts: Vec<ApiContext> = apis
        .iter()
        .enumerate()
        .map(|(index, api)| ApiContext::new(api, index))
        .collect();

    let mut files = vec![
        GeneratedFile {
            path: format!("{JAVA_MAIN}/MultiApiWireMockServer.java"),
            content: emit_server(&contexts),
        },
        GeneratedFile {
            path: format!("{JAVA_MAIN}/config/WireMockTestConfig.java"),
            content: emit_shared_config(&contexts),
        },
        GeneratedFile {
            path: format!("{JAVA_TEST}/BaseWireMockIntegrationTest.java"),
            content: emit_base_test(&contexts),
        },
    ];

    for api in &contexts {
        files.push(GeneratedFile {
            path: format!("{JAVA_MAIN}/config/{}WireMockConfig.java", api.class_name),
            content: emit_config(api),
        });
        files.push(GeneratedFile {
            path: format!("{JAVA_TEST}/{}WireMockTest.java", api.class_name),
            content: emit_test(api),
        });
    }

    files
}

fn emit_server(apis: &[ApiContext]) -> String {
    let mut env = Environment::new();
    env.add_template(
        "MultiApiWireMockServer.java.j2",
        include_str!("../templates/MultiApiWireMockServer.java.j2"),
    )
    .expect("template should be valid");
    let tmpl = env.get_template("MultiApiWireMockServer.java.j2").unwrap();
    tmpl.render(context! {
        apis => apis,
        base_port => MULTI_SERVER_BASE_PORT,
    })
    .expect("render should succeed")
}

fn emit_shared_config(apis: &[ApiContext]) -> String {
    let mut env = Environment::new();
    env.add_template(
        "WireMockTestConfig.java.j2",
        include_str!("../templates/WireMockTestConfig.java.j2"),
    )
    .expect("template should be valid");
    let tmpl = env.get_template("WireMockTestConfig.java.j2").unwrap();
    tmpl.render(context! { apis => apis })
        .expect("render should succeed")
}

fn emit_base_test(apis: &[ApiContext]) -> String {
    let mut env = Environment::new();
    env.add_template(
        "BaseWireMockIntegrationTest.java.j2",
        include_str!("../templates/BaseWireMockIntegrationTest.java.j2"),
    )
    .expect("template should be valid");
    let tmpl = env
        .get_template("BaseWireMockIntegrationTest.java.j2")
        .unwrap();
    tmpl.render(context! { apis => apis })
        .expect("render should succeed")
}

fn emit_config(api: &ApiContext) -> String {
    let mut env = Environment::new();
    env.add_template(
        "WireMockConfig.java.j2",
        include_str!("../templates/WireMockConfig.java.j2"),
    )
    .expect("template should be valid");
    let tmpl = env.get_template("WireMockConfig.java.j2").unwrap();
    tmpl.render(context! { api => api })
        .expect("render should succeed")
}

fn emit_test(api: &ApiContext) -> String {
    let mut env = Environment::new();
    env.add_template(
        "WireMockTest.java.j2",
        include_str!("../templates/WireMockTest.java.j2"),
    )
    .expect("template should be valid");
    let tmpl = env.get_template("WireMockTest.java.j2").unwrap();
    tmpl.render(context! { api => api })
        .expect("render should succeed")
}
