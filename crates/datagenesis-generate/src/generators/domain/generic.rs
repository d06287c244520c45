use datagenesis_core::FieldType;

pub const FIELDS: &[(&str, FieldType)] = &[
    ("id", FieldType::Number),
    ("name", FieldType::String),
    ("value", FieldType::Number),
    ("category", FieldType::String),
    ("created_at", FieldType::Date),
];
