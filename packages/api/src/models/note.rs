use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use store::{Note, NoteDraft};

/// Body of `POST /notes` and `PUT /notes/{id}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NoteRequest {
    pub note_title: String,
    pub note_content: String,
}

impl From<&NoteDraft> for NoteRequest {
    fn from(draft: &NoteDraft) -> Self {
        Self {
            note_title: draft.title.clone(),
            note_content: draft.content.clone(),
        }
    }
}

/// A note as the backend returns it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NoteResponse {
    pub note_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub note_title: String,
    pub note_content: String,
    #[serde(deserialize_with = "timestamp")]
    pub created_on: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp")]
    pub last_update: DateTime<Utc>,
}

impl From<NoteResponse> for Note {
    fn from(n: NoteResponse) -> Self {
        Note {
            id: n.note_id,
            title: n.note_title,
            content: n.note_content,
            created_at: n.created_on,
            updated_at: n.last_update,
        }
    }
}

/// The backend stores naive UTC datetimes and serialises them without an
/// offset; RFC 3339 with an offset is accepted too.
fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = raw.parse::<NaiveDateTime>().ok()?;
    Some(Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_note_response_into_note() {
        let json = r#"{
            "note_id": "6f1c",
            "user_id": "u1",
            "note_title": "Groceries",
            "note_content": "- milk",
            "last_update": "2024-01-06T10:00:00.123456",
            "created_on": "2024-01-05T09:30:00"
        }"#;
        let note: Note = serde_json::from_str::<NoteResponse>(json).unwrap().into();
        assert_eq!(note.id, "6f1c");
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.created_at, Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap());
        assert_eq!(note.updated_at.day(), 6);
    }

    #[test]
    fn test_parse_timestamp_forms() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2024-01-05T09:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-05T09:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-05T11:30:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_request_from_draft() {
        let body = serde_json::to_value(NoteRequest::from(&NoteDraft::new("T", "C"))).unwrap();
        assert_eq!(body, serde_json::json!({"note_title": "T", "note_content": "C"}));
    }
}
