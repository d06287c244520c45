use std::collections::BTreeMap;

use schemars::JsonSchema;
use schemars::r#gen::SchemaGenerator;
use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::types::FieldType;

/// A named, typed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub field_type: FieldType,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// Ordered mapping from field name to descriptor.
///
/// On the wire a schema is a JSON object keyed by field name whose values are
/// `{ "type": "<tag>", ... }` objects or bare type tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, rejecting empty or duplicate names.
    pub fn push(&mut self, field: FieldDescriptor) -> Result<()> {
        if field.name.trim().is_empty() {
            return Err(Error::InvalidSchema("field name is empty".to_string()));
        }
        if self.get(&field.name).is_some() {
            return Err(Error::InvalidSchema(format!(
                "duplicate field name: {}",
                field.name
            )));
        }
        self.fields.push(field);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Collects fields in order; the first occurrence of a name wins so a type is
/// never reassigned.
impl FromIterator<FieldDescriptor> for Schema {
    fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for field in iter {
            // Duplicate and blank names are dropped.
            let _ = schema.push(field);
        }
        schema
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[derive(Serialize, JsonSchema)]
struct FieldBody<'a> {
    #[serde(rename = "type")]
    field_type: &'a str,
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(
                &field.name,
                &FieldBody {
                    field_type: field.field_type.as_str(),
                },
            )?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        let mut schema = Schema::new();
        for (name, body) in raw {
            let field_type = match &body {
                Value::String(tag) => FieldType::from_tag(tag),
                Value::Object(object) => match object.get("type") {
                    Some(Value::String(tag)) => FieldType::from_tag(tag),
                    Some(other) => FieldType::Other(other.to_string()),
                    None => FieldType::Other(String::new()),
                },
                other => FieldType::Other(other.to_string()),
            };
            schema
                .push(FieldDescriptor::new(name, field_type))
                .map_err(serde::de::Error::custom)?;
        }
        Ok(schema)
    }
}

impl JsonSchema for Schema {
    fn schema_name() -> String {
        "Schema".to_string()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> schemars::schema::Schema {
        BTreeMap::<String, FieldBody<'static>>::json_schema(generator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_rejects_duplicate_names() {
        let mut schema = Schema::new();
        schema
            .push(FieldDescriptor::new("id", FieldType::Number))
            .expect("first push");
        let err = schema
            .push(FieldDescriptor::new("id", FieldType::String))
            .expect_err("duplicate push");
        assert!(matches!(err, Error::InvalidSchema(_)));
        assert_eq!(schema.get("id").map(|f| &f.field_type), Some(&FieldType::Number));
    }

    #[test]
    fn from_iter_keeps_first_type() {
        let schema: Schema = [
            FieldDescriptor::new("a", FieldType::Number),
            FieldDescriptor::new("a", FieldType::Date),
            FieldDescriptor::new("b", FieldType::Boolean),
        ]
        .into_iter()
        .collect();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.fields()[0].field_type, FieldType::Number);
    }
}
