//! Application record types and the form field key table.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the nine draft fields. The wire name doubles as the database
/// column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Name,
    ScNo,
    Branch,
    Vertical1,
    Vertical2,
    MobNo,
    Section,
    Mail,
    Portfolio,
}

impl FieldKey {
    /// The seven fields that must be non-empty before submission proceeds.
    pub const REQUIRED: [FieldKey; 7] = [
        FieldKey::Name,
        FieldKey::ScNo,
        FieldKey::Branch,
        FieldKey::Vertical1,
        FieldKey::MobNo,
        FieldKey::Section,
        FieldKey::Mail,
    ];

    /// Wire/database key.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::ScNo => "sc_no",
            FieldKey::Branch => "branch",
            FieldKey::Vertical1 => "vertical1",
            FieldKey::Vertical2 => "vertical2",
            FieldKey::MobNo => "mob_no",
            FieldKey::Section => "section",
            FieldKey::Mail => "mail",
            FieldKey::Portfolio => "portfolio",
        }
    }

    /// Human-readable label used in validation banners and the form.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::Name => "Name",
            FieldKey::ScNo => "Scholar Number",
            FieldKey::Branch => "Branch",
            FieldKey::Vertical1 => "Vertical 1",
            FieldKey::Vertical2 => "Vertical 2",
            FieldKey::MobNo => "Mobile Number",
            FieldKey::Section => "Section",
            FieldKey::Mail => "Email",
            FieldKey::Portfolio => "Portfolio",
        }
    }

    /// Parse a wire key back to a field key.
    pub fn parse(key: &str) -> Option<FieldKey> {
        match key {
            "name" => Some(FieldKey::Name),
            "sc_no" => Some(FieldKey::ScNo),
            "branch" => Some(FieldKey::Branch),
            "vertical1" => Some(FieldKey::Vertical1),
            "vertical2" => Some(FieldKey::Vertical2),
            "mob_no" => Some(FieldKey::MobNo),
            "section" => Some(FieldKey::Section),
            "mail" => Some(FieldKey::Mail),
            "portfolio" => Some(FieldKey::Portfolio),
            _ => None,
        }
    }
}

/// A portfolio file attached to the draft, buffered in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Result of a successful portfolio upload, consumed once when the record
/// is assembled. Only `url` is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub url: String,
    pub file_id: String,
    pub file_name: String,
}

/// The trimmed, assembled record sent to the database in one atomic insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub name: String,
    pub sc_no: String,
    pub branch: String,
    pub vertical1: String,
    pub vertical2: Option<String>,
    pub mob_no: String,
    pub section: String,
    pub mail: String,
    pub portfolio: Option<String>,
}

/// A persisted application row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Application {
    pub id: Uuid,
    pub name: String,
    pub sc_no: String,
    pub branch: String,
    pub vertical1: String,
    pub vertical2: Option<String>,
    pub mob_no: String,
    pub section: String,
    pub mail: String,
    pub portfolio: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        assert_eq!(FieldKey::REQUIRED.len(), 7);
        assert!(!FieldKey::REQUIRED.contains(&FieldKey::Vertical2));
        assert!(!FieldKey::REQUIRED.contains(&FieldKey::Portfolio));
    }

    #[test]
    fn test_wire_key_roundtrip() {
        for key in [
            FieldKey::Name,
            FieldKey::ScNo,
            FieldKey::Branch,
            FieldKey::Vertical1,
            FieldKey::Vertical2,
            FieldKey::MobNo,
            FieldKey::Section,
            FieldKey::Mail,
            FieldKey::Portfolio,
        ] {
            assert_eq!(FieldKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(FieldKey::parse("unknown"), None);
    }

    #[test]
    fn test_mail_label_is_email() {
        assert_eq!(FieldKey::Mail.label(), "Email");
    }
}
