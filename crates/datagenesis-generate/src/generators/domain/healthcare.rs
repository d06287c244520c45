use datagenesis_core::FieldType;

pub const FIELDS: &[(&str, FieldType)] = &[
    ("patient_id", FieldType::String),
    ("patient_name", FieldType::String),
    ("age", FieldType::Number),
    ("diagnosis", FieldType::String),
    ("admission_date", FieldType::Date),
    ("insured", FieldType::Boolean),
];
