use datagenesis_core::{FieldDescriptor, FieldType, Schema};

#[test]
fn serializes_schema_deterministically() {
    let mut schema = Schema::new();
    schema
        .push(FieldDescriptor::new("account_id", FieldType::String))
        .expect("push account_id");
    schema
        .push(FieldDescriptor::new("balance", FieldType::Number))
        .expect("push balance");

    let json = serde_json::to_string_pretty(&schema).expect("serialize schema");
    let expected = r#"{
  "account_id": {
    "type": "string"
  },
  "balance": {
    "type": "number"
  }
}"#;
    assert_eq!(json, expected);
}

#[test]
fn deserializes_wire_schema_in_order() {
    let raw = r#"{
        "zeta": { "type": "date", "description": "when", "examples": ["2024-01-01"] },
        "alpha": "boolean",
        "email": { "type": "email" },
        "broken": 7
    }"#;
    let schema: Schema = serde_json::from_str(raw).expect("parse schema");

    let names: Vec<&str> = schema.field_names().collect();
    assert_eq!(names, ["zeta", "alpha", "email", "broken"]);
    assert_eq!(schema.fields()[0].field_type, FieldType::Date);
    assert_eq!(schema.fields()[1].field_type, FieldType::Boolean);
    assert_eq!(
        schema.fields()[2].field_type,
        FieldType::Other("email".to_string())
    );
    assert!(matches!(schema.fields()[3].field_type, FieldType::Other(_)));
}
