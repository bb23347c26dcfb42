use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn de_u64_from_any_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AnyNumber {
        U64(u64),
        F64(f64),
    }

    match AnyNumber::deserialize(deserializer)? {
        AnyNumber::U64(u) => Ok(u),
        AnyNumber::F64(f) => {
            if f.fract() == 0.0 && f >= 0.0 && f <= u64::MAX as f64 {
                Ok(f as u64)
            } else {
                Err(serde::de::Error::custom(format!(
                    "cannot convert float {f} to u64"
                )))
            }
        }
    }
}

/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DD HH:MM:SS` (taken as UTC) and bare dates.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub(crate) fn de_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp '{raw}'")))
}
