use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::Rng;
use serde_json::Value;

use datagenesis_core::{FieldDescriptor, FieldType};

pub mod domain;

/// Upper bound (exclusive) for generated numbers.
pub const NUMBER_UPPER_BOUND: i64 = 1000;

/// Window, ending at generation time, that generated dates fall into.
pub const DATE_WINDOW_DAYS: i64 = 365;

/// Produce one placeholder value for `field` in the row at `ordinal` (0-based).
///
/// Total over every descriptor: unknown type tags yield a placeholder string.
pub fn synthesize_value(
    field: &FieldDescriptor,
    ordinal: usize,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Value {
    match &field.field_type {
        FieldType::String => Value::String(format!("Generated {} {}", field.name, ordinal + 1)),
        FieldType::Number => Value::from(rng.random_range(0..NUMBER_UPPER_BOUND)),
        FieldType::Boolean => Value::Bool(rng.random_bool(0.5)),
        FieldType::Date => Value::String(random_past_timestamp(now, rng)),
        FieldType::Other(_) => Value::String(format!("{}_{}", field.name, ordinal + 1)),
    }
}

fn random_past_timestamp(now: DateTime<Utc>, rng: &mut impl Rng) -> String {
    let window_ms = Duration::days(DATE_WINDOW_DAYS).num_milliseconds();
    let offset = rng.random_range(0..window_ms);
    (now - Duration::milliseconds(offset)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn unknown_types_get_ordinal_placeholders() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let field = FieldDescriptor::new("contact", FieldType::Other("email".to_string()));
        let value = synthesize_value(&field, 4, Utc::now(), &mut rng);
        assert_eq!(value, Value::String("contact_5".to_string()));
    }

    #[test]
    fn strings_embed_name_and_one_based_ordinal() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let field = FieldDescriptor::new("name", FieldType::String);
        let value = synthesize_value(&field, 0, Utc::now(), &mut rng);
        assert_eq!(value, Value::String("Generated name 1".to_string()));
    }
}
