use crate::compact::{compact_len, read_compact_len, write_compact_len};
use crate::cursor::{ByteReader, ByteWriter};
use crate::error::CodecResult;
use crate::traits::{Decode, Encode};

impl<T: Encode> Encode for [T] {
    fn encode_to(&self, out: &mut ByteWriter) {
        write_compact_len(out, self.len());
        for item in self {
            item.encode_to(out);
        }
    }

    fn size_hint(&self) -> usize {
        compact_len(self.len() as u128) + self.iter().map(Encode::size_hint).sum::<usize>()
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode_to(&self, out: &mut ByteWriter) {
        self.as_slice().encode_to(out)
    }

    fn size_hint(&self) -> usize {
        self.as_slice().size_hint()
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(input: &mut ByteReader<'_>) -> CodecResult<Self> {
        let count = read_compact_len(input)?;
        // The count is untrusted; every element takes at least one byte.
        let mut out = Vec::with_capacity(count.min(input.remaining()));
        for _ in 0..count {
            out.push(T::decode(input)?);
        }
        Ok(out)
    }
}
