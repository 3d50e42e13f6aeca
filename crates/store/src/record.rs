use chrono::{DateTime, SubsecRound, Utc};
use properties::{analyze, PropertyBundle};
use serde::{Deserialize, Serialize};

/// A stored string with its derived properties.
///
/// Identity is the exact original text; `id` is the SHA-256 of that text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Hex SHA-256 of `value`.
    pub id: String,
    /// Original text, byte for byte.
    pub value: String,
    pub properties: PropertyBundle,
    /// Creation time, UTC with whole-second precision.
    #[serde(with = "rfc3339_seconds")]
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// Analyze `value` and stamp it with the current time.
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_timestamp(value, Utc::now())
    }

    pub fn with_timestamp(value: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let value = value.into();
        let properties = analyze(&value);
        Self {
            id: properties.sha256_hash.clone(),
            value,
            properties,
            // Sub-second precision would not survive the wire format.
            created_at: created_at.trunc_subsecs(0),
        }
    }
}

/// `DateTime<Utc>` as an RFC 3339 string such as `2025-01-02T03:04:05Z`.
mod rfc3339_seconds {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::de::Error as DeError;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn record_fields_follow_the_text() {
        let record = Record::new("level");
        assert_eq!(record.value, "level");
        assert_eq!(record.id, properties::hash_text("level"));
        assert_eq!(record.properties, analyze("level"));
    }

    #[test]
    fn created_at_serializes_as_rfc3339_seconds() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let record = Record::with_timestamp("abc", ts);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["created_at"], "2025-01-02T03:04:05Z");
        assert_eq!(json["id"], record.id);
        assert_eq!(json["value"], "abc");
        assert_eq!(json["properties"]["length"], 3);

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn subseconds_are_truncated() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
            + chrono::Duration::milliseconds(750);
        let record = Record::with_timestamp("abc", ts);
        assert_eq!(record.created_at.timestamp_subsec_nanos(), 0);
    }
}
