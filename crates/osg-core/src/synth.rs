use serde_json::{Value, json};

use crate::parse::schema::Schema;
use crate::parse::spec::SpecDocument;
use crate::resolve::SchemaResolver;

/// Maximum `$ref`/property nesting the synthesizer follows before giving
/// up with an empty object. Sole protection against cyclic references.
pub const MAX_DEPTH: usize = 5;

/// Canned values used wherever the schema gives no better answer.
/// Synthesis must stay a pure function of its inputs, so none of these
/// vary per call.
pub const EXAMPLE_UUID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
pub const EXAMPLE_TIMESTAMP: &str = "2024-01-01T12:00:00Z";
pub const EXAMPLE_DATE: &str = "2024-01-01";
pub const EXAMPLE_EMAIL: &str = "user@example.com";

const EXAMPLE_ORDER_TOKEN: &str = "EPT4C2A91E07BD5";
const EXAMPLE_SIGN_OBJECT_ID: &str = "9b2f0c4e8d1a4f6e8c3b5a7d9e1f2a4c";

/// Turns a schema fragment into a concrete JSON value.
pub struct Synthesizer<'a> {
    resolver: SchemaResolver<'a>,
}

impl<'a> Synthesizer<'a> {
    pub fn new(document: &'a SpecDocument) -> Self {
        Self {
            resolver: SchemaResolver::new(document),
        }
    }

    /// Produce an example value for `schema`.
    ///
    /// `property_name` is the name the fragment is nested under, when any;
    /// it drives the domain heuristics. First match wins: `$ref`, explicit
    /// `example`, first of `examples`, heuristic table, then dispatch on
    /// the declared type.
    pub fn synthesize(&self, schema: &Schema, depth: usize, property_name: Option<&str>) -> Value {
        if depth > MAX_DEPTH {
            return json!({});
        }

        if let Some(ref_path) = schema.ref_path.as_deref() {
            if SchemaResolver::is_local(ref_path) {
                return match self.resolver.resolve(ref_path) {
                    Some(target) => self.synthesize(target, depth + 1, property_name),
                    // Unknown name: treated as an empty object schema.
                    None => self.synthesize(&Schema::default(), depth + 1, property_name),
                };
            }
            // Non-local ref forms are ignored; the node is handled as declared.
        }

        if let Some(example) = &schema.example {
            return example.clone();
        }
        if let Some((_, first)) = schema.examples.first() {
            return first.clone();
        }

        if let Some(name) = property_name {
            if let Some(value) = heuristic_value(name) {
                return value;
            }
        }

        match schema.schema_type.as_deref().unwrap_or("object") {
            "object" => {
                let mut object = serde_json::Map::new();
                for (name, property) in &schema.properties {
                    object.insert(name.clone(), self.synthesize(property, depth + 1, Some(name)));
                }
                Value::Object(object)
            }
            // Always exactly one synthesized item.
            "array" => {
                let item = match &schema.items {
                    Some(items) => self.synthesize(items, depth + 1, property_name),
                    None => self.synthesize(&Schema::default(), depth + 1, property_name),
                };
                Value::Array(vec![item])
            }
            "string" => synthesize_string(schema),
            "integer" => {
                let minimum = schema.minimum.unwrap_or(1.0);
                let maximum = schema.maximum.unwrap_or(1000.0);
                Value::from(maximum.min(minimum.max(123.0)) as i64)
            }
            "number" => {
                let minimum = schema.minimum.unwrap_or(1.0);
                let maximum = schema.maximum.unwrap_or(1000.0);
                Value::from(maximum.min(minimum.max(123.45)))
            }
            "boolean" => Value::Bool(true),
            _ => Value::Null,
        }
    }
}

fn synthesize_string(schema: &Schema) -> Value {
    if let Some(first) = schema.enum_values.first() {
        return first.clone();
    }
    match schema.format.as_deref().unwrap_or("string") {
        "email" => Value::String(EXAMPLE_EMAIL.to_string()),
        "date-time" => Value::String(EXAMPLE_TIMESTAMP.to_string()),
        "date" => Value::String(EXAMPLE_DATE.to_string()),
        "uuid" => Value::String(EXAMPLE_UUID.to_string()),
        other => Value::String(format!("example_{other}")),
    }
}

/// Ordered property-name heuristics for common API field patterns; the
/// first matching arm wins.
fn heuristic_value(name: &str) -> Option<Value> {
    let value = match name {
        "id" | "creditTransferOrderRequestId" => Value::String(EXAMPLE_ORDER_TOKEN.to_string()),
        "signObjectId" => Value::String(EXAMPLE_SIGN_OBJECT_ID.to_string()),
        "transactionType" => Value::String("SCT".to_string()),
        "extraVerificationAction" => Value::String("NOT_REQUIRED".to_string()),
        "messageKey" | "code" => Value::String(format!("API_ERROR_{}", name.to_uppercase())),
        "messageType" | "type" => Value::String("INFO".to_string()),
        "messageText" | "message" => Value::String(format!("Example message for {name}")),
        "traceId" | "trackingId" => Value::String(EXAMPLE_UUID.to_string()),
        "timestamp" => Value::String(EXAMPLE_TIMESTAMP.to_string()),
        "email" => Value::String(EXAMPLE_EMAIL.to_string()),
        "username" | "name" => Value::String(format!("example_{name}")),
        "price" | "amount" => json!(99.99),
        "stock" | "quantity" => json!(10),
        _ => return None,
    };
    Some(value)
}
