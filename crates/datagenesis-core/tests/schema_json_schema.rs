use datagenesis_core::Schema;
use schemars::schema_for;

#[test]
fn schema_json_schema_is_an_object_map() {
    let generated = schema_for!(Schema);
    let json = serde_json::to_value(&generated).expect("serialize generated schema");

    assert_eq!(json["type"], "object");
    assert!(json["additionalProperties"].is_object());
}
