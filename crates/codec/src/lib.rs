//! Binary codec for BEEFY finality types.
//!
//! Encoding appends to a [`ByteWriter`]; decoding consumes from a
//! [`ByteReader`]. Integers are little-endian, lengths are compact integers,
//! optional values carry a one-byte tag, and composites are their fields
//! concatenated in declaration order.

mod beefy;
mod compact;
mod composite;
mod cursor;
mod error;
mod hex_codec;
mod option;
mod primitives;
mod seq;
mod traits;

pub use beefy::signers_bitfield;
pub use compact::{
    compact_len, read_compact, read_compact_len, write_compact, write_compact_len, Compact,
    CompactInt, CompactMode,
};
pub use cursor::{ByteReader, ByteWriter};
pub use error::{CodecError, CodecResult};
pub use hex_codec::{decode_from_hex, decode_hex, encode_to_hex, to_hex};
pub use primitives::{prefixed_bytes_len, read_prefixed_bytes, write_prefixed_bytes};
pub use traits::{decode_from_slice, encode_to_vec, ensure_consumed, Decode, Encode};

pub use beefy_types as types;
