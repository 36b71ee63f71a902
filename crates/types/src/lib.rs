//! Value types carried by BEEFY finality justifications.
//!
//! Binary encoding lives in `beefy-codec`; this crate only defines the data
//! and its JSON shape.

use serde::{Deserialize, Serialize};

mod optional;
mod serde_hex;
mod signature;

pub use optional::Optional;
pub use signature::{Signature, SIGNATURE_LEN};

pub type OptionalSignature = Optional<Signature>;

/// Two-byte payload identifier.
pub type PayloadId = [u8; 2];

/// Payload id of the MMR root hash.
pub const MMR_ROOT_ID: PayloadId = *b"mh";

/// One tagged entry of a commitment payload. `data` is opaque to the codec.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayloadItem {
    #[serde(with = "serde_hex")]
    pub id: PayloadId,
    #[serde(with = "serde_hex")]
    pub data: Vec<u8>,
}

impl PayloadItem {
    pub fn new(id: PayloadId, data: impl Into<Vec<u8>>) -> Self {
        Self {
            id,
            data: data.into(),
        }
    }
}

/// Message signed by the validator set. Payload order is significant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment {
    pub payload: Vec<PayloadItem>,
    pub block_number: u32,
    pub validator_set_id: u64,
}

impl Commitment {
    /// Raw data of the first payload item with the given id.
    pub fn payload_data(&self, id: &PayloadId) -> Option<&[u8]> {
        self.payload
            .iter()
            .find(|item| &item.id == id)
            .map(|item| item.data.as_slice())
    }
}

/// A commitment with one signature slot per validator in the active set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignedCommitment {
    pub commitment: Commitment,
    pub signatures: Vec<OptionalSignature>,
}

impl SignedCommitment {
    /// Number of slots that carry a signature.
    pub fn signature_count(&self) -> usize {
        self.signatures.iter().filter(|s| s.is_some()).count()
    }
}
