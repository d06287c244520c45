use datagenesis_core::FieldType;

pub const FIELDS: &[(&str, FieldType)] = &[
    ("product_id", FieldType::String),
    ("product_name", FieldType::String),
    ("category", FieldType::String),
    ("price", FieldType::Number),
    ("stock_quantity", FieldType::Number),
    ("in_stock", FieldType::Boolean),
    ("last_restocked", FieldType::Date),
];
