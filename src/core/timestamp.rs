use std::borrow::Cow;

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer, de};
use serde_with::{DeserializeAs, SerializeAs};

/// ISO 8601 document representation of a local timestamp.
///
/// A timestamp with a `Z` or `±hh:mm` suffix is converted into the local time.
pub struct Timestamp;

impl Timestamp {
    const FORMAT: &'static str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn parse(text: &str) -> Option<NaiveDateTime> {
        let text = text.trim();
        text.parse::<NaiveDateTime>().ok().or_else(|| {
            DateTime::parse_from_rfc3339(text).ok().map(|timestamp| timestamp.with_timezone(&Local).naive_local())
        })
    }
}

impl SerializeAs<NaiveDateTime> for Timestamp {
    fn serialize_as<S: Serializer>(source: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&source.format(Self::FORMAT))
    }
}

impl<'de> DeserializeAs<'de, NaiveDateTime> for Timestamp {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let text = Cow::<str>::deserialize(deserializer)?;
        Self::parse(&text).ok_or_else(|| {
            de::Error::invalid_value(de::Unexpected::Str(&text), &"a timestamp like `2030-01-01T23:00:00`")
        })
    }
}
