//! Typed response-schema descriptor for constrained decoding.
//!
//! Serialises to the OpenAPI subset the engine accepts (`type` in upper case,
//! `properties`, `items`, `required`, `enum`). Properties live in a
//! `BTreeMap` so two schemas built from the same description serialise to
//! identical bytes.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    Array,
    String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Schema {
    fn of(kind: SchemaType) -> Self {
        Self {
            kind,
            format: None,
            enum_values: Vec::new(),
            properties: BTreeMap::new(),
            items: None,
            required: Vec::new(),
        }
    }

    pub fn string() -> Self {
        Self::of(SchemaType::String)
    }

    pub fn string_enum<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            format: Some("enum"),
            enum_values: values.into_iter().map(Into::into).collect(),
            ..Self::of(SchemaType::String)
        }
    }

    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of(SchemaType::Array)
        }
    }

    pub fn string_list() -> Self {
        Self::array(Self::string())
    }

    pub fn object() -> Self {
        Self::of(SchemaType::Object)
    }

    /// Adds a property the engine must always emit.
    pub fn required(mut self, name: &str, schema: Schema) -> Self {
        self.properties.insert(name.to_string(), schema);
        self.required.push(name.to_string());
        self
    }

    /// Adds a property the engine may omit.
    pub fn optional(mut self, name: &str, schema: Schema) -> Self {
        self.properties.insert(name.to_string(), schema);
        self
    }

    #[cfg(test)]
    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties.get(name)
    }

    #[cfg(test)]
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_and_optional_properties() {
        let schema = Schema::object()
            .required("name", Schema::string())
            .optional("nickname", Schema::string());
        assert!(schema.is_required("name"));
        assert!(!schema.is_required("nickname"));
        assert!(schema.property("nickname").is_some());
        assert_eq!(schema.required, vec!["name".to_string()]);
    }

    #[test]
    fn test_string_list_serializes_items() {
        let json = serde_json::to_value(Schema::string_list()).unwrap();
        assert_eq!(json, serde_json::json!({"type": "ARRAY", "items": {"type": "STRING"}}));
    }

    #[test]
    fn test_string_enum_sets_format() {
        let json = serde_json::to_value(Schema::string_enum(["a", "b"])).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "STRING", "format": "enum", "enum": ["a", "b"]})
        );
    }

    #[test]
    fn test_empty_object_omits_collections() {
        let json = serde_json::to_value(Schema::object()).unwrap();
        assert_eq!(json, serde_json::json!({"type": "OBJECT"}));
    }
}
