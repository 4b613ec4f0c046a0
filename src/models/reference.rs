//! Foreign-key ids in request bodies. Form selectors post the id as a string
//! (`"1"`), so a numeric string is accepted alongside a JSON integer. An empty
//! string or `null` means nothing was selected and reads as `0`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Reference {
    Id(i64),
    Text(String),
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match Option::<Reference>::deserialize(deserializer)? {
        Some(Reference::Id(id)) => Ok(id),
        Some(Reference::Text(text)) if text.trim().is_empty() => Ok(0),
        Some(Reference::Text(text)) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid id: {:?}", text))),
        None => Ok(0),
    }
}
