//! The `is_active` flag travels as `0`/`1` on the wire. Incoming payloads may
//! also use a JSON boolean.

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

impl Flag {
    fn into_bool<E: serde::de::Error>(self) -> Result<bool, E> {
        match self {
            Flag::Bool(value) => Ok(value),
            Flag::Int(0) => Ok(false),
            Flag::Int(1) => Ok(true),
            Flag::Int(other) => Err(E::custom(format!("invalid is_active value: {}", other))),
        }
    }
}

pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Flag::deserialize(deserializer)?.into_bool()
}

pub mod optional {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(flag) => serializer.serialize_some(&u8::from(*flag)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
        match Option::<Flag>::deserialize(deserializer)? {
            Some(flag) => flag.into_bool().map(Some),
            None => Ok(None),
        }
    }
}
