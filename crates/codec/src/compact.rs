//! Variable-width unsigned integers.
//!
//! The two low bits of the first byte select the mode:
//!
//! | mode | range          | layout                                          |
//! |------|----------------|-------------------------------------------------|
//! | 0b00 | `< 2^6`        | 1 byte, `v << 2`                                |
//! | 0b01 | `< 2^14`       | 2 bytes LE, `(v << 2) \| 1`                      |
//! | 0b10 | `< 2^30`       | 4 bytes LE, `(v << 2) \| 2`                      |
//! | 0b11 | `>= 2^30`      | `((n - 4) << 2) \| 3`, then `n` minimal LE bytes |
//!
//! Only the smallest encoding of a value is accepted when decoding, so
//! re-encoding a decoded value always reproduces the input bytes.

use crate::cursor::{ByteReader, ByteWriter};
use crate::error::{invalid, CodecResult};
use crate::traits::{Decode, Encode};

const SINGLE_BYTE_LIMIT: u128 = 1 << 6;
const TWO_BYTE_LIMIT: u128 = 1 << 14;
const FOUR_BYTE_LIMIT: u128 = 1 << 30;

/// Wrapper selecting the compact encoding for an unsigned integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Compact<T>(pub T);

impl<T> From<T> for Compact<T> {
    fn from(value: T) -> Self {
        Compact(value)
    }
}

/// Unsigned integers that can travel as [`Compact`].
pub trait CompactInt: Copy {
    /// Widest mode-3 payload that can still fit the type.
    const MAX_BYTES: usize;

    fn to_u128(self) -> u128;

    fn from_u128(value: u128) -> Option<Self>;
}

macro_rules! impl_compact_int {
    ($($ty:ty),*) => {$(
        impl CompactInt for $ty {
            const MAX_BYTES: usize = core::mem::size_of::<$ty>();

            fn to_u128(self) -> u128 {
                self as u128
            }

            fn from_u128(value: u128) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }
        }
    )*};
}

impl_compact_int!(u8, u16, u32, u64, u128);

/// Encoding mode picked for a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompactMode {
    SingleByte,
    TwoByte,
    FourByte,
    BigInteger,
}

impl CompactMode {
    pub fn of(value: u128) -> Self {
        if value < SINGLE_BYTE_LIMIT {
            CompactMode::SingleByte
        } else if value < TWO_BYTE_LIMIT {
            CompactMode::TwoByte
        } else if value < FOUR_BYTE_LIMIT {
            CompactMode::FourByte
        } else {
            CompactMode::BigInteger
        }
    }
}

fn big_integer_len(value: u128) -> usize {
    let bits = 128 - value.leading_zeros() as usize;
    bits.div_ceil(8).max(4)
}

/// Number of bytes the compact encoding of `value` occupies.
pub fn compact_len(value: u128) -> usize {
    match CompactMode::of(value) {
        CompactMode::SingleByte => 1,
        CompactMode::TwoByte => 2,
        CompactMode::FourByte => 4,
        CompactMode::BigInteger => 1 + big_integer_len(value),
    }
}

pub fn write_compact(out: &mut ByteWriter, value: u128) {
    match CompactMode::of(value) {
        CompactMode::SingleByte => out.write_byte((value as u8) << 2),
        CompactMode::TwoByte => out.write(&(((value as u16) << 2) | 0b01).to_le_bytes()),
        CompactMode::FourByte => out.write(&(((value as u32) << 2) | 0b10).to_le_bytes()),
        CompactMode::BigInteger => {
            let len = big_integer_len(value);
            out.write_byte((((len - 4) as u8) << 2) | 0b11);
            out.write(&value.to_le_bytes()[..len]);
        }
    }
}

/// Reads a compact integer whose mode-3 payload may be at most `max_bytes` wide.
pub fn read_compact(input: &mut ByteReader<'_>, max_bytes: usize) -> CodecResult<u128> {
    let first = input.read_byte()?;
    match first & 0b11 {
        0b00 => Ok(u128::from(first >> 2)),
        0b01 => {
            let second = input.read_byte()?;
            let value = u128::from(u16::from_le_bytes([first, second]) >> 2);
            if value < SINGLE_BYTE_LIMIT {
                return Err(invalid("non-canonical two-byte compact integer"));
            }
            Ok(value)
        }
        0b10 => {
            let rest = input.read_array::<3>()?;
            let value = u128::from(u32::from_le_bytes([first, rest[0], rest[1], rest[2]]) >> 2);
            if value < TWO_BYTE_LIMIT {
                return Err(invalid("non-canonical four-byte compact integer"));
            }
            Ok(value)
        }
        _ => {
            let len = usize::from(first >> 2) + 4;
            if len > max_bytes {
                return Err(invalid("compact integer wider than its target type"));
            }
            let bytes = input.read(len)?;
            if bytes[len - 1] == 0 {
                return Err(invalid("compact integer has non-minimal length"));
            }
            let mut buf = [0u8; 16];
            buf[..len].copy_from_slice(bytes);
            let value = u128::from_le_bytes(buf);
            if value < FOUR_BYTE_LIMIT {
                return Err(invalid("non-canonical big-integer compact"));
            }
            Ok(value)
        }
    }
}

/// Writes a collection length prefix.
pub fn write_compact_len(out: &mut ByteWriter, len: usize) {
    write_compact(out, len as u128);
}

/// Reads a collection length prefix (a `Compact<u32>`).
pub fn read_compact_len(input: &mut ByteReader<'_>) -> CodecResult<usize> {
    let Compact(len) = Compact::<u32>::decode(input)?;
    Ok(len as usize)
}

impl<T: CompactInt> Encode for Compact<T> {
    fn encode_to(&self, out: &mut ByteWriter) {
        write_compact(out, self.0.to_u128());
    }

    fn size_hint(&self) -> usize {
        compact_len(self.0.to_u128())
    }
}

impl<T: CompactInt> Decode for Compact<T> {
    fn decode(input: &mut ByteReader<'_>) -> CodecResult<Self> {
        let value = read_compact(input, T::MAX_BYTES)?;
        T::from_u128(value)
            .map(Compact)
            .ok_or_else(|| invalid("compact integer out of range for its target type"))
    }
}
