use crate::compact::{compact_len, read_compact_len, write_compact_len};
use crate::cursor::{ByteReader, ByteWriter};
use crate::error::{invalid, CodecResult};
use crate::traits::{Decode, Encode};

macro_rules! impl_fixed_width {
    ($($ty:ty),*) => {$(
        impl Encode for $ty {
            fn encode_to(&self, out: &mut ByteWriter) {
                out.write(&self.to_le_bytes());
            }

            fn size_hint(&self) -> usize {
                core::mem::size_of::<$ty>()
            }
        }

        impl Decode for $ty {
            fn decode(input: &mut ByteReader<'_>) -> CodecResult<Self> {
                Ok(<$ty>::from_le_bytes(input.read_array()?))
            }
        }
    )*};
}

impl_fixed_width!(u8, u16, u32, u64, u128);

impl Encode for bool {
    fn encode_to(&self, out: &mut ByteWriter) {
        out.write_byte(u8::from(*self));
    }

    fn size_hint(&self) -> usize {
        1
    }
}

impl Decode for bool {
    fn decode(input: &mut ByteReader<'_>) -> CodecResult<Self> {
        match input.read_byte()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(invalid("boolean byte is neither 0 nor 1")),
        }
    }
}

// Fixed-size byte arrays are written verbatim, without a length prefix.
impl<const N: usize> Encode for [u8; N] {
    fn encode_to(&self, out: &mut ByteWriter) {
        out.write(self);
    }

    fn size_hint(&self) -> usize {
        N
    }
}

impl<const N: usize> Decode for [u8; N] {
    fn decode(input: &mut ByteReader<'_>) -> CodecResult<Self> {
        input.read_array()
    }
}

/// Writes a compact length prefix followed by `bytes`.
pub fn write_prefixed_bytes(out: &mut ByteWriter, bytes: &[u8]) {
    write_compact_len(out, bytes.len());
    out.write(bytes);
}

/// Reads a compact length prefix and that many bytes into an owned buffer.
pub fn read_prefixed_bytes(input: &mut ByteReader<'_>) -> CodecResult<Vec<u8>> {
    let len = read_compact_len(input)?;
    Ok(input.read(len)?.to_vec())
}

/// Encoded size of a length-prefixed byte string.
pub fn prefixed_bytes_len(bytes: &[u8]) -> usize {
    compact_len(bytes.len() as u128) + bytes.len()
}
