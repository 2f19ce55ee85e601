//! Task record and its on-disk serde contract.
//!
//! The JSON field names (`Task`, `Done`, `CreatedAt`, `CompletedAt`) and the
//! zero-time sentinel for uncompleted tasks are compatibility requirements:
//! files written by earlier versions of this tool must keep loading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do item: description, completion flag, and two timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "Task")]
    pub description: String,
    #[serde(rename = "Done")]
    pub done: bool,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "CompletedAt", with = "zero_time")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create an open task timestamped now.
    pub fn new(description: impl Into<String>) -> Self {
        Task {
            description: description.into(),
            done: false,
            created_at: Utc::now(),
            completed_at: None,
        }
    }
}

/// Serde adapter mapping `None` to the RFC3339 zero time `0001-01-01T00:00:00Z`
/// and back. The sentinel stays an on-disk detail; in memory an uncompleted
/// task simply has no completion timestamp.
mod zero_time {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    fn zero() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap()
    }

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        ser: S,
    ) -> Result<S::Ok, S::Error> {
        (*value).unwrap_or_else(zero).serialize(ser)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        de: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let ts = DateTime::<Utc>::deserialize(de)?;
        Ok(if ts == zero() { None } else { Some(ts) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_task_is_open() {
        let t = Task::new("water the plants");
        assert_eq!(t.description, "water the plants");
        assert!(!t.done);
        assert!(t.completed_at.is_none());
    }

    #[test]
    fn serializes_with_contract_field_names() {
        let t = Task {
            description: "ship it".into(),
            done: false,
            created_at: Utc.with_ymd_and_hms(2026, 8, 23, 10, 0, 0).unwrap(),
            completed_at: None,
        };
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["Task"], "ship it");
        assert_eq!(json["Done"], false);
        assert_eq!(json["CreatedAt"], "2026-08-23T10:00:00Z");
        assert_eq!(json["CompletedAt"], "0001-01-01T00:00:00Z");
    }

    #[test]
    fn zero_time_sentinel_round_trips_to_none() {
        let json = r#"{"Task":"x","Done":false,"CreatedAt":"2026-08-23T10:00:00Z","CompletedAt":"0001-01-01T00:00:00Z"}"#;
        let t: Task = serde_json::from_str(json).unwrap();
        assert!(t.completed_at.is_none());

        let back = serde_json::to_value(&t).unwrap();
        assert_eq!(back["CompletedAt"], "0001-01-01T00:00:00Z");
    }

    #[test]
    fn real_completion_timestamp_survives() {
        let done_at = Utc.with_ymd_and_hms(2026, 8, 23, 11, 30, 0).unwrap();
        let t = Task {
            description: "x".into(),
            done: true,
            created_at: Utc.with_ymd_and_hms(2026, 8, 23, 10, 0, 0).unwrap(),
            completed_at: Some(done_at),
        };
        let back: Task = serde_json::from_str(&serde_json::to_string(&t).unwrap()).unwrap();
        assert_eq!(back.completed_at, Some(done_at));
    }
}
