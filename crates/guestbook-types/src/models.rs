use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One guestbook record, exactly as the store returns it. The gateway never
/// mints `id` or `created_at` — both are store-assigned on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub name: String,
    pub message: String,
    #[serde(deserialize_with = "store_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// The store hands back RFC 3339 with an offset for `timestamptz` columns,
/// but a bare `YYYY-MM-DDTHH:MM:SS[.ffffff]` for plain `timestamp`.
/// Accept both; bare timestamps are taken as UTC.
fn store_timestamp<'de, D>(de: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(de)?;
    raw.parse::<DateTime<Utc>>()
        .or_else(|_| {
            NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f").map(|ndt| ndt.and_utc())
        })
        .map_err(serde::de::Error::custom)
}
