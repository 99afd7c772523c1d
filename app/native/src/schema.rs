use crate::config::LayoutConfig;

/// Generates a JSON Schema for the Cardgrid configuration.
///
/// The schema includes all configuration options with their types,
/// descriptions, and default values.
#[must_use]
pub fn generate_schema() -> schemars::Schema {
    let mut schema = schemars::schema_for!(LayoutConfig);

    if let Some(obj) = schema.as_object_mut() {
        obj.insert(
            "$id".to_string(),
            serde_json::json!(
                "https://raw.githubusercontent.com/cardgrid/cardgrid/main/cardgrid.schema.json"
            ),
        );
    }

    schema
}

/// Generates a pretty-printed JSON Schema string for the Cardgrid configuration.
#[must_use]
pub fn generate_schema_json() -> String {
    let schema = generate_schema();
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
