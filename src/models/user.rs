//! User model mirrored from the fitness API.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::record::{Identified, RecordId};

/// User record as returned by `GET /users/`.
///
/// All non-identifier fields are tolerant: a malformed element never fails
/// collection decode, fallbacks apply field-by-field at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Raw document identifier
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<RecordId>,
    /// Serializer identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Role within the team
    #[serde(default)]
    pub role: Role,
    /// Team foreign key (nullable)
    #[serde(default)]
    pub team_id: Option<RecordId>,
}

impl Identified for User {
    fn record_id(&self) -> Option<&RecordId> {
        self.doc_id.as_ref().or(self.id.as_ref())
    }
}

/// User role. Absent, empty, and unknown values all read as `Unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Member,
    Admin,
    Coach,
    #[default]
    Unset,
}

impl Role {
    /// Wire representation; `Unset` is the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Admin => "admin",
            Role::Coach => "coach",
            Role::Unset => "",
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref() {
            Some("member") => Role::Member,
            Some("admin") => Role::Admin,
            Some("coach") => Role::Coach,
            _ => Role::Unset,
        })
    }
}

/// Full-record PUT body for `PUT /users/{id}/`.
///
/// The identifier is always sent as `_id`, whichever field it was read from.
#[derive(Debug, Clone, Serialize)]
pub struct UserUpdate {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Integer team id, or null for "No Team"
    pub team_id: Option<i64>,
}
