use datagenesis_core::FieldType;

pub const FIELDS: &[(&str, FieldType)] = &[
    ("account_id", FieldType::String),
    ("customer_name", FieldType::String),
    ("transaction_amount", FieldType::Number),
    ("transaction_type", FieldType::String),
    ("transaction_date", FieldType::Date),
    ("balance", FieldType::Number),
];
