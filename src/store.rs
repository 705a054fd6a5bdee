//! The persistence collaborator: calculations stored as versioned encoded
//! records, keyed by the owning logic field's id.
//!
//! The record is a `bincode`-encoded blob carrying a format version
//! prefix, decoded on read. The core stays type-safe internally;
//! serialized shapes only exist at this boundary.

use crate::error::StoreError;
use crate::model::Calculation;
use ahash::AHashMap;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};

/// Bumped whenever the encoded record layout changes.
pub const FORMAT_VERSION: u16 = 1;

#[derive(Serialize, Deserialize)]
struct CalculationRecord {
    version: u16,
    calculation: Calculation,
}

/// Encodes a calculation into the versioned record format.
pub fn encode_calculation(calculation: &Calculation) -> Result<Vec<u8>, StoreError> {
    let record = CalculationRecord {
        version: FORMAT_VERSION,
        calculation: calculation.clone(),
    };
    encode_to_vec(&record, standard()).map_err(|e| StoreError::Encode(e.to_string()))
}

/// Decodes a versioned record back into a calculation.
pub fn decode_calculation(bytes: &[u8]) -> Result<Calculation, StoreError> {
    let (record, _): (CalculationRecord, _) =
        decode_from_slice(bytes, standard()).map_err(|e| StoreError::Decode(e.to_string()))?;
    if record.version != FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: record.version,
            expected: FORMAT_VERSION,
        });
    }
    Ok(record.calculation)
}

/// A calculation as handed to the core: either already decoded, or still
/// the encoded blob from storage. Consumers call [`StoredCalculation::into_calculation`]
/// and never care which shape arrived.
#[derive(Debug, Clone)]
pub enum StoredCalculation {
    Decoded(Calculation),
    Encoded(Vec<u8>),
}

impl StoredCalculation {
    pub fn into_calculation(self) -> Result<Calculation, StoreError> {
        match self {
            StoredCalculation::Decoded(calculation) => Ok(calculation),
            StoredCalculation::Encoded(bytes) => decode_calculation(&bytes),
        }
    }
}

impl From<Calculation> for StoredCalculation {
    fn from(calculation: Calculation) -> Self {
        StoredCalculation::Decoded(calculation)
    }
}

impl From<Vec<u8>> for StoredCalculation {
    fn from(bytes: Vec<u8>) -> Self {
        StoredCalculation::Encoded(bytes)
    }
}

/// An in-memory key-value store of encoded calculation records.
///
/// One calculation per logic field; putting a second calculation for the
/// same logic id replaces the first, and deleting a logic field
/// cascade-deletes its calculation.
#[derive(Debug, Default)]
pub struct CalculationStore {
    records: AHashMap<String, Vec<u8>>,
}

impl CalculationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, calculation: &Calculation) -> Result<(), StoreError> {
        let bytes = encode_calculation(calculation)?;
        self.records
            .insert(calculation.logic_id().to_string(), bytes);
        Ok(())
    }

    pub fn get(&self, logic_id: &str) -> Result<Calculation, StoreError> {
        let bytes = self
            .records
            .get(logic_id)
            .ok_or_else(|| StoreError::NotFound(logic_id.to_string()))?;
        decode_calculation(bytes)
    }

    pub fn contains(&self, logic_id: &str) -> bool {
        self.records.contains_key(logic_id)
    }

    /// Removes a logic field's calculation along with it.
    pub fn remove_logic_field(&mut self, logic_id: &str) {
        self.records.remove(logic_id);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
