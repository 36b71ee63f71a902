//! Wire layout of the BEEFY commitment types.
//!
//! Field order is fixed by the chain. Changing it breaks every peer.

use beefy_types::{
    Commitment, Optional, OptionalSignature, PayloadItem, Signature, SignedCommitment,
    SIGNATURE_LEN,
};

use crate::compact::{compact_len, read_compact_len, write_compact_len};
use crate::cursor::{ByteReader, ByteWriter};
use crate::error::{invalid, CodecResult};
use crate::primitives::{prefixed_bytes_len, read_prefixed_bytes, write_prefixed_bytes};
use crate::traits::{Decode, Encode};

impl Encode for Signature {
    fn encode_to(&self, out: &mut ByteWriter) {
        self.0.encode_to(out);
    }

    fn size_hint(&self) -> usize {
        SIGNATURE_LEN
    }
}

impl Decode for Signature {
    fn decode(input: &mut ByteReader<'_>) -> CodecResult<Self> {
        Ok(Signature(input.read_array()?))
    }
}

impl Encode for PayloadItem {
    fn encode_to(&self, out: &mut ByteWriter) {
        self.id.encode_to(out);
        write_prefixed_bytes(out, &self.data);
    }

    fn size_hint(&self) -> usize {
        self.id.len() + prefixed_bytes_len(&self.data)
    }
}

impl Decode for PayloadItem {
    fn decode(input: &mut ByteReader<'_>) -> CodecResult<Self> {
        let id = <[u8; 2]>::decode(input)?;
        let data = read_prefixed_bytes(input)?;
        Ok(PayloadItem { id, data })
    }
}

impl Encode for Commitment {
    fn encode_to(&self, out: &mut ByteWriter) {
        self.payload.encode_to(out);
        self.block_number.encode_to(out);
        self.validator_set_id.encode_to(out);
    }

    fn size_hint(&self) -> usize {
        self.payload.size_hint() + 4 + 8
    }
}

impl Decode for Commitment {
    fn decode(input: &mut ByteReader<'_>) -> CodecResult<Self> {
        let payload = Vec::<PayloadItem>::decode(input)?;
        let block_number = u32::decode(input)?;
        let validator_set_id = u64::decode(input)?;
        Ok(Commitment {
            payload,
            block_number,
            validator_set_id,
        })
    }
}

/// Bitfield marking which slots carry a signature. Slot `i` is bit
/// `7 - i % 8` of byte `i / 8`.
pub fn signers_bitfield(signatures: &[OptionalSignature]) -> Vec<u8> {
    let mut bits = vec![0u8; signatures.len().div_ceil(8)];
    for (i, slot) in signatures.iter().enumerate() {
        if slot.is_some() {
            bits[i / 8] |= 0x80 >> (i % 8);
        }
    }
    bits
}

fn is_signer(bits: &[u8], index: usize) -> bool {
    bits[index / 8] & (0x80 >> (index % 8)) != 0
}

/// Signed commitments travel in compact form: the commitment, a signers
/// bitfield, the number of validator slots as `u32`, then only the present
/// signatures in slot order.
impl Encode for SignedCommitment {
    fn encode_to(&self, out: &mut ByteWriter) {
        debug_assert!(u32::try_from(self.signatures.len()).is_ok());

        self.commitment.encode_to(out);
        write_prefixed_bytes(out, &signers_bitfield(&self.signatures));
        (self.signatures.len() as u32).encode_to(out);

        write_compact_len(out, self.signature_count());
        for sig in self.signatures.iter().filter_map(Optional::as_option) {
            sig.encode_to(out);
        }
    }

    fn size_hint(&self) -> usize {
        let slots = self.signatures.len();
        let present = self.signature_count();
        self.commitment.size_hint()
            + compact_len(slots.div_ceil(8) as u128)
            + slots.div_ceil(8)
            + 4
            + compact_len(present as u128)
            + present * SIGNATURE_LEN
    }
}

impl Decode for SignedCommitment {
    fn decode(input: &mut ByteReader<'_>) -> CodecResult<Self> {
        let commitment = Commitment::decode(input)?;
        let bits = read_prefixed_bytes(input)?;
        let slots = u32::decode(input)? as usize;
        let present_len = read_compact_len(input)?;
        let mut present = Vec::with_capacity(present_len.min(input.remaining() / SIGNATURE_LEN));
        for _ in 0..present_len {
            present.push(Signature::decode(input)?);
        }

        if bits.len() != slots.div_ceil(8) {
            return Err(invalid("signers bitfield does not match the validator set length"));
        }
        if (slots..bits.len() * 8).any(|i| is_signer(&bits, i)) {
            return Err(invalid("signers bitfield marks slots beyond the validator set"));
        }

        let mut present = present.into_iter();
        let mut signatures = Vec::with_capacity(slots);
        for i in 0..slots {
            if is_signer(&bits, i) {
                let sig = present
                    .next()
                    .ok_or_else(|| invalid("fewer signatures than marked signers"))?;
                signatures.push(Optional::some(sig));
            } else {
                signatures.push(Optional::none());
            }
        }
        if present.next().is_some() {
            return Err(invalid("more signatures than marked signers"));
        }

        Ok(SignedCommitment {
            commitment,
            signatures,
        })
    }
}
