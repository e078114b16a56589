use crate::parse::operation::HttpMethod;

/// Spec-file name qualifiers stripped before deriving an API name.
const NAME_SUFFIXES: &[&str] = &[
    "-api", "_api", "-spec", "_spec", "-openapi", "_openapi", "-swagger", "_swagger",
];

const SPEC_FILE_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

/// Derive an API name from a spec filename: drop the extension and any
/// trailing api/spec/openapi/swagger qualifier, then clean the remainder.
/// The result must be filesystem-safe and stable across runs so repeated
/// generation overwrites instead of duplicating.
pub fn api_name_from_filename(filename: &str) -> String {
    let lower = filename.to_lowercase();
    let mut stem = filename;
    for ext in SPEC_FILE_EXTENSIONS {
        if lower.ends_with(ext) {
            stem = &filename[..filename.len() - ext.len()];
            break;
        }
    }

    let stem_lower = stem.to_lowercase();
    for suffix in NAME_SUFFIXES {
        if stem_lower.ends_with(suffix) {
            stem = &stem[..stem.len() - suffix.len()];
            break;
        }
    }

    clean_name(stem)
}

/// Derive an API name from a spec's declared title.
pub fn api_name_from_title(title: &str) -> String {
    clean_name(title)
}

/// Whether a derived name is too generic to identify an API, so the spec
/// title should be consulted instead.
pub fn is_generic_api_name(name: &str) -> bool {
    matches!(name, "api" | "spec" | "openapi" | "swagger" | "")
}

/// Collapse every run of non-alphanumeric characters into a single `_`,
/// trim the ends, lower-case.
fn clean_name(text: &str) -> String {
    let mut name = String::with_capacity(text.len());
    let mut pending_separator = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !name.is_empty() {
                name.push('_');
            }
            pending_separator = false;
            name.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    name
}

/// Replace every character outside `[A-Za-z0-9_]` with `_` and trim the
/// ends. Unlike [`clean_name`], runs are preserved: derived operation ids
/// keep their double underscores.
pub fn sanitize_token(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    replaced.trim_matches('_').to_string()
}

/// Operation id for operations that do not declare one, built from the
/// method and the flattened path template.
pub fn fallback_operation_id(method: HttpMethod, path: &str) -> String {
    let flattened = path.replace('/', "_");
    format!("{}_{}", method.lower(), flattened.trim_matches('_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_api_suffix_and_extension() {
        assert_eq!(api_name_from_filename("user-service-api.yaml"), "user_service");
        assert_eq!(api_name_from_filename("products-api.yaml"), "products");
        assert_eq!(api_name_from_filename("Orders_Spec.JSON"), "orders");
        assert_eq!(api_name_from_filename("billing.yml"), "billing");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(api_name_from_filename("my--weird__name.json"), "my_weird_name");
        assert_eq!(api_name_from_filename("My API.yaml"), "my_api");
    }

    #[test]
    fn generic_names_are_detected() {
        assert!(is_generic_api_name(&api_name_from_filename("openapi.json")));
        assert!(is_generic_api_name(&api_name_from_filename("swagger.yaml")));
        assert!(is_generic_api_name(""));
        assert!(!is_generic_api_name("users"));
    }

    #[test]
    fn title_names_are_cleaned() {
        assert_eq!(api_name_from_title("Widget Store"), "widget_store");
        assert_eq!(api_name_from_title("  Payments (v2)  "), "payments_v2");
    }

    #[test]
    fn sanitize_preserves_underscore_runs() {
        assert_eq!(sanitize_token("widgets__id"), "widgets__id");
        assert_eq!(sanitize_token("get-widget!"), "get_widget");
        assert_eq!(sanitize_token("_trimmed_"), "trimmed");
    }

    #[test]
    fn fallback_id_flattens_the_path() {
        assert_eq!(
            fallback_operation_id(HttpMethod::Get, "/widgets/{id}"),
            "get_widgets_{id}"
        );
        assert_eq!(
            sanitize_token(&fallback_operation_id(HttpMethod::Get, "/widgets/{id}")),
            "get_widgets__id"
        );
        assert_eq!(fallback_operation_id(HttpMethod::Post, "/widgets"), "post_widgets");
    }
}
