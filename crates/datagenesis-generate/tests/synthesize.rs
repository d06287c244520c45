use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

use datagenesis_core::{Domain, FieldDescriptor, FieldType, Schema, validate_dataset};
use datagenesis_generate::{GenerationError, RowSynthesizer, SynthesizeOptions};

fn clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0)
        .single()
        .expect("valid clock")
}

fn synthesizer(seed: u64) -> RowSynthesizer {
    RowSynthesizer::new(&SynthesizeOptions { seed: Some(seed) }).with_clock(clock())
}

fn mixed_schema() -> Schema {
    [
        FieldDescriptor::new("label", FieldType::String),
        FieldDescriptor::new("amount", FieldType::Number),
        FieldDescriptor::new("active", FieldType::Boolean),
        FieldDescriptor::new("seen_at", FieldType::Date),
        FieldDescriptor::new("contact", FieldType::Other("email".to_string())),
    ]
    .into_iter()
    .collect()
}

#[test]
fn produces_exactly_n_rows_with_schema_fields() {
    let schema = mixed_schema();
    for rows in [0, 1, 17, 250] {
        let dataset = synthesizer(1)
            .synthesize(&schema, rows)
            .expect("synthesize");
        assert_eq!(dataset.len(), rows);
        validate_dataset(&schema, &dataset).expect("rows match schema");
    }
}

#[test]
fn empty_schema_yields_empty_rows() {
    let dataset = synthesizer(1).synthesize(&Schema::new(), 4)
        .expect("synthesize");
    assert_eq!(dataset.len(), 4);
    assert!(dataset.rows().iter().all(|row| row.is_empty()));
}

#[test]
fn numbers_stay_below_one_thousand() {
    let schema = mixed_schema();
    let dataset = synthesizer(99).synthesize(&schema, 2000)
        .expect("synthesize");
    for row in dataset.rows() {
        let amount = row["amount"].as_i64().expect("integer amount");
        assert!((0..1000).contains(&amount), "amount {amount} out of range");
    }
}

#[test]
fn dates_fall_in_the_preceding_year() {
    let schema = mixed_schema();
    let dataset = synthesizer(5).synthesize(&schema, 500)
        .expect("synthesize");
    let earliest = clock() - Duration::days(365);
    for row in dataset.rows() {
        let text = row["seen_at"].as_str().expect("date string");
        let parsed = DateTime::parse_from_rfc3339(text)
            .expect("rfc3339 timestamp")
            .with_timezone(&Utc);
        assert!(parsed > earliest && parsed <= clock(), "{text} outside window");
    }
}

#[test]
fn booleans_take_both_values() {
    let schema = mixed_schema();
    let dataset = synthesizer(11).synthesize(&schema, 200)
        .expect("synthesize");
    let trues = dataset
        .rows()
        .iter()
        .filter(|row| row["active"] == Value::Bool(true))
        .count();
    assert!(trues > 0 && trues < 200);
}

#[test]
fn string_labels_are_unique_per_field() {
    let schema = mixed_schema();
    let dataset = synthesizer(3).synthesize(&schema, 50)
        .expect("synthesize");
    let labels: std::collections::BTreeSet<&str> = dataset
        .rows()
        .iter()
        .filter_map(|row| row["label"].as_str())
        .collect();
    assert_eq!(labels.len(), 50);
    assert_eq!(dataset.rows()[49]["label"], "Generated label 50");
    assert_eq!(dataset.rows()[0]["contact"], "contact_1");
}

#[test]
fn same_seed_and_clock_reproduce_the_dataset() {
    let schema = mixed_schema();
    let first = synthesizer(42).synthesize(&schema, 30)
        .expect("synthesize");
    let second = synthesizer(42).synthesize(&schema, 30)
        .expect("synthesize");
    assert_eq!(first, second);
}

#[test]
fn finance_fallback_schema_has_expected_fields_and_three_samples() {
    let fallback = synthesizer(8).fallback_schema(Domain::from_tag("finance"))
        .expect("fallback schema");

    let names: Vec<&str> = fallback.schema.field_names().collect();
    assert_eq!(
        names,
        [
            "account_id",
            "customer_name",
            "transaction_amount",
            "transaction_type",
            "transaction_date",
            "balance",
        ]
    );
    assert_eq!(fallback.sample_data.len(), 3);
    assert_eq!(fallback.detected_domain, Domain::Finance);
    assert_eq!(fallback.sample_data[2]["account_id"], "Generated account_id 3");
}

#[test]
fn unrecognized_domain_falls_back_to_generic() {
    let fallback = synthesizer(8).fallback_schema(Domain::from_tag("astronomy"))
        .expect("fallback schema");
    assert_eq!(fallback.detected_domain, Domain::Generic);
    assert_eq!(fallback.schema.len(), 5);
    assert_eq!(fallback.sample_data.len(), 3);
}

#[test]
fn unallocatable_row_count_is_an_error_not_a_panic() {
    let err = synthesizer(1)
        .synthesize(&mixed_schema(), usize::MAX)
        .expect_err("row buffer cannot be allocated");
    assert!(matches!(err, GenerationError::Allocation { rows, .. } if rows == usize::MAX));
}
