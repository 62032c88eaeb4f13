//! JSON encoding for base-unit amounts.
//!
//! u128 does not survive a round trip through JavaScript numbers, so amounts
//! travel as decimal strings (the same convention as NEAR's `U128`).

pub mod u128_string {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<u128>().map_err(de::Error::custom)
    }
}
