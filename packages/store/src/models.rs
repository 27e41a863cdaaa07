//! # Domain models for notes and users
//!
//! These are the client-side shapes the rest of the workspace works with. The
//! backend's wire format (`note_id`, `note_title`, ...) is translated into these
//! types by the `api` crate, so views and stores never see backend field names.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Note`] | A note owned by the signed-in user. `id` is opaque and server-assigned. |
//! | [`NoteDraft`] | The editable part of a note (title + content), used as the body of create and update calls. |
//! | [`UserSummary`] | The user returned by sign-up, and optionally by sign-in. |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// A note as held in the client-side collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Server-assigned identifier
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// The editable fields of this note, e.g. to prefill the edit modal.
    pub fn draft(&self) -> NoteDraft {
        NoteDraft {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }

    /// Date shown on note cards: `"Jan 5, 2024"`.
    pub fn created_label(&self) -> String {
        self.created_at.format("%b %-d, %Y").to_string()
    }
}

/// Title and content of a note being created or edited.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Every field-level problem with this draft, in display order.
    /// An empty vector means the draft can be submitted.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(ValidationError::TitleRequired);
        }
        if self.content.trim().is_empty() {
            errors.push(ValidationError::ContentRequired);
        }
        errors
    }
}

/// Public profile of a user account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl UserSummary {
    /// Name to show in the header, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn note() -> Note {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap();
        Note {
            id: "n1".to_string(),
            title: "Groceries".to_string(),
            content: "- milk".to_string(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_created_label() {
        assert_eq!(note().created_label(), "Jan 5, 2024");
    }

    #[test]
    fn test_draft_copies_editable_fields() {
        let draft = note().draft();
        assert_eq!(draft, NoteDraft::new("Groceries", "- milk"));
    }

    #[test]
    fn test_draft_validation() {
        assert!(NoteDraft::new("a", "b").validate().is_empty());
        assert_eq!(
            NoteDraft::new("  ", "b").validate(),
            vec![ValidationError::TitleRequired]
        );
        assert_eq!(
            NoteDraft::default().validate(),
            vec![ValidationError::TitleRequired, ValidationError::ContentRequired]
        );
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user = UserSummary {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        assert_eq!(user.display_name(), "Ada");
        user.name.clear();
        assert_eq!(user.display_name(), "ada@example.com");
    }
}
