//! `0x`-prefixed hex strings for byte fields.

use serde::{de, Deserialize, Deserializer, Serializer};

pub fn serialize<S, T>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: AsRef<[u8]>,
{
    serializer.serialize_str(&format!("0x{}", hex::encode(bytes.as_ref())))
}

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<Vec<u8>>,
{
    let s = String::deserialize(deserializer)?;
    let digits = s.strip_prefix("0x").unwrap_or(&s);
    let bytes = hex::decode(digits).map_err(de::Error::custom)?;
    let len = bytes.len();
    T::try_from(bytes).map_err(|_| de::Error::custom(format!("unexpected byte length {len}")))
}
