use crate::parse::schema::Schema;
use crate::parse::spec::SpecDocument;

const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Looks up `$ref` targets in the document a compilation pass is working
/// on. Only local `#/components/schemas/<name>` references are supported;
/// anything else resolves to `None` and the caller falls through to its
/// default handling.
#[derive(Debug, Clone, Copy)]
pub struct SchemaResolver<'a> {
    document: &'a SpecDocument,
}

impl<'a> SchemaResolver<'a> {
    pub fn new(document: &'a SpecDocument) -> Self {
        Self { document }
    }

    /// Whether a reference points into the local schema components.
    pub fn is_local(ref_path: &str) -> bool {
        ref_path.starts_with(SCHEMA_REF_PREFIX)
    }

    /// The referenced schema, or `None` when the reference is non-local or
    /// names a schema the document does not define.
    pub fn resolve(&self, ref_path: &str) -> Option<&'a Schema> {
        let name = ref_path.strip_prefix(SCHEMA_REF_PREFIX)?;
        self.document.components.as_ref()?.schemas.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn document() -> SpecDocument {
        parse::from_json(
            r#"{
                "openapi": "3.0.0",
                "paths": {},
                "components": {
                    "schemas": {
                        "Widget": {"type": "object", "properties": {"id": {"type": "string"}}}
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn resolves_local_schema() {
        let doc = document();
        let resolver = SchemaResolver::new(&doc);
        let schema = resolver.resolve("#/components/schemas/Widget").unwrap();
        assert!(schema.properties.contains_key("id"));
    }

    #[test]
    fn missing_name_resolves_to_none() {
        let doc = document();
        let resolver = SchemaResolver::new(&doc);
        assert!(resolver.resolve("#/components/schemas/Gadget").is_none());
    }

    #[test]
    fn non_local_refs_are_ignored() {
        let doc = document();
        let resolver = SchemaResolver::new(&doc);
        assert!(resolver.resolve("other.yaml#/components/schemas/Widget").is_none());
        assert!(resolver.resolve("#/components/responses/NotFound").is_none());
        assert!(!SchemaResolver::is_local("#/definitions/Widget"));
    }
}
