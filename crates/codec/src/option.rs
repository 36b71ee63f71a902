//! Tagged encoding of optional values: `0x00` for absent, `0x01` followed by
//! the value for present. The JSON form of [`Optional`] is untagged and lives
//! with the type in `beefy-types`.

use beefy_types::Optional;

use crate::cursor::{ByteReader, ByteWriter};
use crate::error::{invalid, CodecResult};
use crate::traits::{Decode, Encode};

const NONE_TAG: u8 = 0x00;
const SOME_TAG: u8 = 0x01;

fn write_option<T: Encode>(out: &mut ByteWriter, value: Option<&T>) {
    match value {
        Some(inner) => {
            out.write_byte(SOME_TAG);
            inner.encode_to(out);
        }
        None => out.write_byte(NONE_TAG),
    }
}

fn read_option<T: Decode>(input: &mut ByteReader<'_>) -> CodecResult<Option<T>> {
    match input.read_byte()? {
        NONE_TAG => Ok(None),
        SOME_TAG => Ok(Some(T::decode(input)?)),
        _ => Err(invalid("optional tag is neither 0x00 nor 0x01")),
    }
}

impl<T: Encode> Encode for Optional<T> {
    fn encode_to(&self, out: &mut ByteWriter) {
        write_option(out, self.as_option());
    }

    fn size_hint(&self) -> usize {
        1 + self.as_option().map_or(0, Encode::size_hint)
    }
}

impl<T: Decode> Decode for Optional<T> {
    fn decode(input: &mut ByteReader<'_>) -> CodecResult<Self> {
        read_option(input).map(Optional::from)
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode_to(&self, out: &mut ByteWriter) {
        write_option(out, self.as_ref());
    }

    fn size_hint(&self) -> usize {
        1 + self.as_ref().map_or(0, Encode::size_hint)
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(input: &mut ByteReader<'_>) -> CodecResult<Self> {
        read_option(input)
    }
}
