//! Synthetic profile values carved out of a single pseudonym payload
//!
//! Each derived object uses one hash. Its 16 hex payload characters are split
//! into disjoint ranges, one per field. The offsets below are frozen: moving
//! or resizing a range changes every value already handed out.

use crate::pseudonym::{Pseudonym, PAYLOAD_HEX_LEN};
use crate::{PseudonymError, Result, Vocabularies};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

pub(crate) const FIRST_NAME: Range<usize> = 0..8;
pub(crate) const LAST_NAME: Range<usize> = 8..16;

pub(crate) const STREET_NUMBER: Range<usize> = 0..3;
pub(crate) const STREET_NAME: Range<usize> = 3..6;
pub(crate) const CITY: Range<usize> = 6..9;
pub(crate) const STATE: Range<usize> = 9..12;
pub(crate) const ZIP: Range<usize> = 12..16;

const STREET_NUMBER_MODULUS: u64 = 999;
const ZIP_MODULUS: u64 = 99_999;
const ZIP_BASE: u64 = 10_000;

/// Synthetic postal address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FakeAddress {
    /// `"<number> <street name>"`
    pub street: String,
    /// City name
    pub city: String,
    /// State code
    pub state: String,
    /// Five digit postal code
    pub zip: String,
}

impl fmt::Display for FakeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.city, self.state, self.zip)
    }
}

/// Email, display name and address for one identity in one application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FakeProfile {
    /// Synthetic email address
    pub email: String,
    /// Synthetic `"First Last"` display name
    pub display_name: String,
    /// Synthetic postal address
    pub address: FakeAddress,
}

/// Parse `payload[range]` as a base-16 integer
pub(crate) fn slice_value(pseudonym: &Pseudonym, range: Range<usize>) -> Result<u64> {
    debug_assert!(range.end <= PAYLOAD_HEX_LEN);
    let payload = pseudonym.payload();
    let hex = payload.get(range.clone()).ok_or_else(|| {
        PseudonymError::derivation(format!("payload range {range:?} out of bounds"))
    })?;
    u64::from_str_radix(hex, 16)
        .map_err(|e| PseudonymError::derivation(format!("payload is not hex: {e}")))
}

pub(crate) fn display_name(pseudonym: &Pseudonym, vocab: &Vocabularies) -> Result<String> {
    let first = vocab.first_names.pick(slice_value(pseudonym, FIRST_NAME)?);
    let last = vocab.last_names.pick(slice_value(pseudonym, LAST_NAME)?);
    Ok(format!("{first} {last}"))
}

pub(crate) fn address(pseudonym: &Pseudonym, vocab: &Vocabularies) -> Result<FakeAddress> {
    let number = slice_value(pseudonym, STREET_NUMBER)? % STREET_NUMBER_MODULUS + 1;
    let street = vocab.streets.pick(slice_value(pseudonym, STREET_NAME)?);
    let city = vocab.cities.pick(slice_value(pseudonym, CITY)?);
    let state = vocab.states.pick(slice_value(pseudonym, STATE)?);
    let zip = slice_value(pseudonym, ZIP)? % ZIP_MODULUS + ZIP_BASE;

    Ok(FakeAddress {
        street: format!("{number} {street}"),
        city: city.to_owned(),
        state: state.to_owned(),
        zip: format!("{zip:05}"),
    })
}
