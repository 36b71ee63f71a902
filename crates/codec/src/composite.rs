//! Composites are their fields' encodings concatenated in declaration order,
//! with no padding or field tags. Tuples get this for free; domain structs
//! spell it out in `beefy.rs`.

use crate::cursor::{ByteReader, ByteWriter};
use crate::error::CodecResult;
use crate::traits::{Decode, Encode};

macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name: Encode),+> Encode for ($($name,)+) {
            #[allow(non_snake_case)]
            fn encode_to(&self, out: &mut ByteWriter) {
                let ($($name,)+) = self;
                $($name.encode_to(out);)+
            }

            #[allow(non_snake_case)]
            fn size_hint(&self) -> usize {
                let ($($name,)+) = self;
                0 $(+ $name.size_hint())+
            }
        }

        impl<$($name: Decode),+> Decode for ($($name,)+) {
            fn decode(input: &mut ByteReader<'_>) -> CodecResult<Self> {
                Ok(($($name::decode(input)?,)+))
            }
        }
    };
}

impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
