//! Tests for the versioned record encoding and the calculation store.
mod common;
use common::*;
use keisan::prelude::*;
use keisan::store::{decode_calculation, encode_calculation};

fn duty_calculation() -> Calculation {
    Calculation::Simple {
        id: "calc-duty".to_string(),
        logic_id: "duty".to_string(),
        operations: vec![op(
            "op-1",
            Operator::Percentage,
            Operand::input("price"),
            Operand::number("20"),
        )],
    }
}

#[test]
fn record_round_trips_through_the_store() {
    let mut store = CalculationStore::new();
    let calc = duty_calculation();
    store.put(&calc).unwrap();

    assert!(store.contains("duty"));
    assert_eq!(store.get("duty").unwrap(), calc);
}

#[test]
fn missing_record_is_not_found() {
    let store = CalculationStore::new();
    let err = store.get("duty").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn deleting_a_logic_field_cascades_to_its_calculation() {
    let mut store = CalculationStore::new();
    store.put(&duty_calculation()).unwrap();
    assert_eq!(store.len(), 1);

    store.remove_logic_field("duty");
    assert!(store.is_empty());
    assert!(matches!(store.get("duty"), Err(StoreError::NotFound(_))));
}

#[test]
fn unknown_record_version_is_rejected() {
    let mut bytes = encode_calculation(&duty_calculation()).unwrap();
    // The record starts with its varint-encoded format version.
    assert_eq!(bytes[0], 1);
    bytes[0] = 9;

    let err = decode_calculation(&bytes).unwrap_err();
    assert!(matches!(
        err,
        StoreError::UnsupportedVersion { found: 9, expected: 1 }
    ));
}

#[test]
fn stored_calculation_accepts_either_shape() {
    let calc = duty_calculation();
    let bytes = encode_calculation(&calc).unwrap();

    let from_decoded = StoredCalculation::from(calc.clone()).into_calculation().unwrap();
    let from_encoded = StoredCalculation::from(bytes).into_calculation().unwrap();
    assert_eq!(from_decoded, calc);
    assert_eq!(from_encoded, calc);
}

#[test]
fn garbage_bytes_fail_to_decode() {
    // A truncated varint cannot be a valid record.
    let err = decode_calculation(&[251]).unwrap_err();
    assert!(matches!(err, StoreError::Decode(_)));
}
