//! `0x`-prefixed hex helpers, as used by JSON-RPC payloads.

use crate::error::CodecResult;
use crate::traits::{decode_from_slice, encode_to_vec, Decode, Encode};

/// Decodes hex text; the `0x` prefix is optional.
pub fn decode_hex(s: &str) -> CodecResult<Vec<u8>> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    Ok(hex::decode(digits)?)
}

pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Encodes `value` and renders it as `0x`-prefixed hex.
pub fn encode_to_hex<T: Encode + ?Sized>(value: &T) -> String {
    to_hex(&encode_to_vec(value))
}

/// Decodes a `T` from hex text that must contain exactly one value.
pub fn decode_from_hex<T: Decode>(s: &str) -> CodecResult<T> {
    decode_from_slice(&decode_hex(s)?)
}
