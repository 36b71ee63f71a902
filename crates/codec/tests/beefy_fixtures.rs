use beefy_codec::types::{
    Commitment, Optional, OptionalSignature, PayloadItem, Signature, SignedCommitment,
    MMR_ROOT_ID,
};
use beefy_codec::{
    decode_from_hex, decode_from_slice, decode_hex, encode_to_hex, CodecError, Compact, Decode,
    Encode,
};

const COMMITMENT_HEX: &str = "0x046d68343048656c6c6f20576f726c6421050000000000000000000000";

const SIGNED_COMMITMENT_HEX: &str = "0x046d68343048656c6c6f20576f726c642105000000000000000000000004300400000008558455ad81279df0795cc985580e4fb75d72d948d1107b2ac80a09abed4da8480c746cc321f2319a5e99a830e314d10dd3cd68ce3dc0c33c86e99bcb7816f9ba012d6e1f8105c337a86cdd9aaacdc496577f3db8c55ef9e6fd48f2c5c05a2274707491635d8ba3df64f324575b7b2a34487bca2324b6a0046395a71681be3d0c2a00";

const SIG1: [u8; 65] = [
    85, 132, 85, 173, 129, 39, 157, 240, 121, 92, 201, 133, 88, 14, 79, 183, 93, 114, 217, 72,
    209, 16, 123, 42, 200, 10, 9, 171, 237, 77, 168, 72, 12, 116, 108, 195, 33, 242, 49, 154, 94,
    153, 168, 48, 227, 20, 209, 13, 211, 205, 104, 206, 61, 192, 195, 60, 134, 233, 155, 203, 120,
    22, 249, 186, 1,
];

const SIG2: [u8; 65] = [
    45, 110, 31, 129, 5, 195, 55, 168, 108, 221, 154, 170, 205, 196, 150, 87, 127, 61, 184, 197,
    94, 249, 230, 253, 72, 242, 197, 192, 90, 34, 116, 112, 116, 145, 99, 93, 139, 163, 223, 100,
    243, 36, 87, 91, 123, 42, 52, 72, 123, 202, 35, 36, 182, 160, 4, 99, 149, 167, 22, 129, 190,
    61, 12, 42, 0,
];

fn make_commitment() -> Commitment {
    // The payload data is itself an encoded byte string.
    let data = b"Hello World!".to_vec().encode();
    Commitment {
        payload: vec![PayloadItem::new(MMR_ROOT_ID, data)],
        block_number: 5,
        validator_set_id: 0,
    }
}

fn make_signed_commitment(slots: Vec<OptionalSignature>) -> SignedCommitment {
    SignedCommitment {
        commitment: make_commitment(),
        signatures: slots,
    }
}

fn sig1() -> OptionalSignature {
    Optional::some(Signature(SIG1))
}

fn sig2() -> OptionalSignature {
    Optional::some(Signature(SIG2))
}

fn empty() -> OptionalSignature {
    Optional::none()
}

fn assert_truncations_fail<T: Decode + std::fmt::Debug>(bytes: &[u8]) {
    for cut in 0..bytes.len() {
        let err = decode_from_slice::<T>(&bytes[..cut]).unwrap_err();
        assert!(
            matches!(err, CodecError::UnexpectedEnd { .. }),
            "prefix of {cut} bytes gave {err:?}"
        );
    }
}

#[test]
fn commitment_encodes_to_fixture() {
    assert_eq!(encode_to_hex(&make_commitment()), COMMITMENT_HEX);
}

#[test]
fn commitment_decodes_from_fixture() {
    let decoded: Commitment = decode_from_hex(COMMITMENT_HEX).unwrap();
    assert_eq!(decoded, make_commitment());
    assert_eq!(decoded.payload[0].data[0], 0x30);
}

#[test]
fn commitment_reencodes_identically() {
    let bytes = decode_hex(COMMITMENT_HEX).unwrap();
    let decoded: Commitment = decode_from_slice(&bytes).unwrap();
    assert_eq!(decoded.encode(), bytes);
}

#[test]
fn large_commitment_payload_uses_single_byte_length() {
    let data = decode_hex("0xb5bb9d8014a0f9b1d61e21e796d78dccdf1352f23cd32812f4850b878ae4944c")
        .unwrap();
    let c = Commitment {
        payload: vec![PayloadItem::new(*b"mh", data.clone())],
        block_number: 5,
        validator_set_id: 3,
    };
    let bytes = c.encode();
    assert_eq!(&bytes[..4], &[0x04, 0x6d, 0x68, 0x80]);
    assert_eq!(&bytes[4..36], data.as_slice());
    assert_eq!(&bytes[36..], &[5, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(decode_from_slice::<Commitment>(&bytes).unwrap(), c);
}

#[test]
fn signed_commitment_decodes_from_fixture() {
    let decoded: SignedCommitment = decode_from_hex(SIGNED_COMMITMENT_HEX).unwrap();
    let expected = make_signed_commitment(vec![empty(), empty(), sig1(), sig2()]);
    assert_eq!(decoded, expected);
    assert_eq!(decoded.signatures.len(), 4);
    assert!(decoded.signatures[0].is_none());
    assert!(decoded.signatures[1].is_none());
    assert_eq!(decoded.signatures[2], sig1());
    assert_eq!(decoded.signatures[3], sig2());
}

#[test]
fn signed_commitment_encodes_to_fixture() {
    let signed = make_signed_commitment(vec![empty(), empty(), sig1(), sig2()]);
    assert_eq!(encode_to_hex(&signed), SIGNED_COMMITMENT_HEX);
}

#[test]
fn sparse_signed_commitment_roundtrip() {
    let signed = make_signed_commitment(vec![
        empty(),
        empty(),
        sig1(),
        sig1(),
        empty(),
        empty(),
        empty(),
        empty(),
        empty(),
        sig1(),
    ]);
    let bytes = signed.encode();
    let decoded: SignedCommitment = decode_from_slice(&bytes).unwrap();
    assert_eq!(decoded, signed);
    assert_eq!(decoded.encode(), bytes);
}

#[test]
fn truncated_encodings_fail_with_unexpected_end() {
    assert_truncations_fail::<Commitment>(&decode_hex(COMMITMENT_HEX).unwrap());
    assert_truncations_fail::<SignedCommitment>(&decode_hex(SIGNED_COMMITMENT_HEX).unwrap());
    assert_truncations_fail::<PayloadItem>(&make_commitment().payload[0].encode());
    assert_truncations_fail::<Compact<u64>>(&Compact(u64::MAX).encode());
}

#[test]
fn plain_signature_slots_use_tagged_options() {
    let slots = vec![empty(), empty(), sig1(), sig2()];
    let bytes = slots.encode();
    assert_eq!(&bytes[..4], &[0x10, 0x00, 0x00, 0x01]);
    assert_eq!(&bytes[4..69], &SIG1[..]);
    assert_eq!(bytes[69], 0x01);
    assert_eq!(&bytes[70..], &SIG2[..]);
    assert_eq!(decode_from_slice::<Vec<OptionalSignature>>(&bytes).unwrap(), slots);
}

#[test]
fn invalid_optional_tag_is_rejected() {
    let mut bytes = vec![empty(), sig1()].encode();
    bytes[2] = 0x02;
    let err = decode_from_slice::<Vec<OptionalSignature>>(&bytes).unwrap_err();
    assert!(matches!(err, CodecError::InvalidEncoding(_)), "{err:?}");
}

#[test]
fn trailing_bytes_are_rejected() {
    let mut bytes = decode_hex(COMMITMENT_HEX).unwrap();
    bytes.push(0);
    assert_eq!(
        decode_from_slice::<Commitment>(&bytes).unwrap_err(),
        CodecError::TrailingBytes { remaining: 1 }
    );
}

#[test]
fn optional_signature_json_is_bare_signature() {
    let some = serde_json::to_string(&sig1()).unwrap();
    assert_eq!(some, serde_json::to_string(&Signature(SIG1)).unwrap());
    assert!(some.starts_with("[85,132,85,"));

    let none = serde_json::to_string(&empty()).unwrap();
    assert_eq!(none, "null");
}

#[test]
fn optional_signature_json_roundtrip() {
    for value in [sig1(), empty()] {
        let json = serde_json::to_string(&value).unwrap();
        let back: OptionalSignature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}

#[test]
fn optional_signature_accessors() {
    let mut slot = OptionalSignature::some(Signature::default());
    slot.set_none();
    assert!(slot.is_none());
    slot.set_some(Signature(SIG2));
    assert!(slot.is_some());
    let (value, ok) = slot.unwrap();
    assert!(ok);
    assert_eq!(value.recovery_id(), 0);
    assert_eq!(value.encode(), SIG2.to_vec());
}
