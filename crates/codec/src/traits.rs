use crate::cursor::{ByteReader, ByteWriter};
use crate::error::{CodecError, CodecResult};

/// Types with a canonical binary encoding. Encoding never fails.
pub trait Encode {
    /// Appends the encoding of `self` to `out`.
    fn encode_to(&self, out: &mut ByteWriter);

    /// Expected encoded size, used to pre-size buffers. May be an estimate.
    fn size_hint(&self) -> usize {
        0
    }

    fn encode(&self) -> Vec<u8> {
        let mut out = ByteWriter::with_capacity(self.size_hint());
        self.encode_to(&mut out);
        out.into_inner()
    }
}

/// Types that can be read back from their binary encoding.
pub trait Decode: Sized {
    fn decode(input: &mut ByteReader<'_>) -> CodecResult<Self>;
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode_to(&self, out: &mut ByteWriter) {
        (**self).encode_to(out)
    }

    fn size_hint(&self) -> usize {
        (**self).size_hint()
    }
}

/// Fails with `TrailingBytes` unless the reader is exhausted.
pub fn ensure_consumed(input: &ByteReader<'_>) -> CodecResult<()> {
    match input.remaining() {
        0 => Ok(()),
        remaining => {
            tracing::debug!(
                position = input.position(),
                remaining,
                "rejecting input with trailing bytes"
            );
            Err(CodecError::TrailingBytes { remaining })
        }
    }
}

/// Decodes a `T` that must span the whole of `bytes`.
pub fn decode_from_slice<T: Decode>(bytes: &[u8]) -> CodecResult<T> {
    let mut input = ByteReader::new(bytes);
    let value = T::decode(&mut input)?;
    ensure_consumed(&input)?;
    Ok(value)
}

pub fn encode_to_vec<T: Encode + ?Sized>(value: &T) -> Vec<u8> {
    let mut out = ByteWriter::with_capacity(value.size_hint());
    value.encode_to(&mut out);
    out.into_inner()
}
