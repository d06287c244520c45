use std::collections::BTreeSet;

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::schema::Schema;

/// Check that every row carries exactly the schema's field set.
pub fn validate_dataset(schema: &Schema, dataset: &Dataset) -> Result<()> {
    let expected: BTreeSet<&str> = schema.field_names().collect();
    for (index, row) in dataset.rows().iter().enumerate() {
        let actual: BTreeSet<&str> = row.keys().map(String::as_str).collect();
        if actual != expected {
            let missing: Vec<&str> = expected.difference(&actual).copied().collect();
            let extra: Vec<&str> = actual.difference(&expected).copied().collect();
            return Err(Error::InvalidSchema(format!(
                "row {index} does not match schema (missing: {missing:?}, extra: {extra:?})"
            )));
        }
    }
    Ok(())
}
