use datagenesis_core::{Domain, FieldDescriptor, Schema};

pub mod finance;
pub mod generic;
pub mod healthcare;
pub mod retail;

/// Hand-picked schema for a domain; unrecognized domains use the generic one.
pub fn canned_schema(domain: Domain) -> Schema {
    let fields = match domain {
        Domain::Healthcare => healthcare::FIELDS,
        Domain::Finance => finance::FIELDS,
        Domain::Retail => retail::FIELDS,
        Domain::Generic => generic::FIELDS,
    };
    fields
        .iter()
        .map(|(name, field_type)| FieldDescriptor::new(*name, field_type.clone()))
        .collect()
}
