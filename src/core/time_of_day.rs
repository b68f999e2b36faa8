use std::borrow::Cow;

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer, de};
use serde_with::{DeserializeAs, SerializeAs};

/// `HH:mm` document representation of a recurring time of day.
///
/// Seconds are accepted on input but never written.
pub struct TimeOfDay;

impl TimeOfDay {
    const FORMAT: &'static str = "%H:%M";
    const FORMAT_WITH_SECONDS: &'static str = "%H:%M:%S";

    pub fn parse(text: &str) -> Option<NaiveTime> {
        let text = text.trim();
        NaiveTime::parse_from_str(text, Self::FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(text, Self::FORMAT_WITH_SECONDS))
            .ok()
    }
}

impl SerializeAs<NaiveTime> for TimeOfDay {
    fn serialize_as<S: Serializer>(source: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&source.format(Self::FORMAT))
    }
}

impl<'de> DeserializeAs<'de, NaiveTime> for TimeOfDay {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let text = Cow::<str>::deserialize(deserializer)?;
        Self::parse(&text).ok_or_else(|| {
            de::Error::invalid_value(de::Unexpected::Str(&text), &"a time of day like `HH:mm`")
        })
    }
}
