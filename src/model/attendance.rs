use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceRecord {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "check-in")]
    pub record_type: String,

    #[schema(example = "2026-01-01T08:00:00Z", format = "date-time", value_type = String)]
    pub timestamp: DateTime<Utc>,
}

/// Kind of attendance event. The Persian labels sent by the kiosk client are
/// accepted as aliases and stored as the canonical value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
pub enum RecordType {
    #[serde(alias = "ورود")]
    #[strum(to_string = "check-in", serialize = "ورود")]
    CheckIn,
    #[serde(alias = "خروج")]
    #[strum(to_string = "check-out", serialize = "خروج")]
    CheckOut,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_round_trip_through_strum() {
        assert_eq!(RecordType::CheckIn.as_ref(), "check-in");
        assert_eq!(RecordType::CheckOut.to_string(), "check-out");
        assert_eq!("check-out".parse::<RecordType>().unwrap(), RecordType::CheckOut);
    }

    #[test]
    fn persian_labels_are_aliases() {
        let parsed: RecordType = serde_json::from_str("\"ورود\"").unwrap();
        assert_eq!(parsed, RecordType::CheckIn);
        assert_eq!("خروج".parse::<RecordType>().unwrap(), RecordType::CheckOut);
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!(serde_json::from_str::<RecordType>("\"lunch\"").is_err());
        assert!("lunch".parse::<RecordType>().is_err());
    }
}
