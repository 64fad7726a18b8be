//! # Identity model
//!
//! Defines the authenticated principal and the record that mirrors it into
//! durable storage.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Role`] | One of exactly two roles, `marketer` or `user`. Serialised lowercase. |
//! | [`Identity`] | The signed-in principal: id, display name, contact address, role and optional profile fields. Field names match the JSON the dashboard has always written (`avatar`, `phone`, `dob`). |
//! | [`StoredIdentity`] | The versioned durable record. [`StoredIdentity::decode`] also accepts the older bare-`Identity` document. |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Avatar shown when an identity has none of its own.
pub const DEFAULT_AVATAR: &str = "https://i.pravatar.cc/150?u=default";

/// The two roles an identity can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Marketer,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Marketer => "marketer",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "marketer" => Ok(Role::Marketer),
            "user" => Ok(Role::User),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// The authenticated principal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    /// Contact address; the lookup key at sign-in.
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Date of birth as entered on the profile form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
}

impl Identity {
    pub fn new(id: &str, name: &str, email: &str, role: Role) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            avatar: None,
            phone: None,
            dob: None,
        }
    }

    pub fn with_avatar(mut self, avatar: &str) -> Self {
        self.avatar = Some(avatar.to_string());
        self
    }

    /// Get display name, falling back to the contact address if the name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    pub fn avatar_or_default(&self) -> &str {
        self.avatar.as_deref().unwrap_or(DEFAULT_AVATAR)
    }
}

/// Versioned durable copy of an [`Identity`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredIdentity {
    pub schema_version: u32,
    pub identity: Identity,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnyRecord {
    Versioned(StoredIdentity),
    Legacy(Identity),
}

impl StoredIdentity {
    pub const SCHEMA_VERSION: u32 = 1;

    pub fn new(identity: Identity) -> Self {
        Self {
            schema_version: Self::SCHEMA_VERSION,
            identity,
        }
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a stored record.
    ///
    /// Accepts the current versioned layout and the legacy bare-identity layout.
    /// Returns `None` for anything malformed or written by a newer schema.
    pub fn decode(raw: &str) -> Option<Identity> {
        match serde_json::from_str::<AnyRecord>(raw).ok()? {
            AnyRecord::Versioned(record) if record.schema_version <= Self::SCHEMA_VERSION => {
                Some(record.identity)
            }
            AnyRecord::Versioned(_) => None,
            AnyRecord::Legacy(identity) => Some(identity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marketer() -> Identity {
        Identity::new("1", "John Marketer", "marketer@example.com", Role::Marketer)
            .with_avatar("https://i.pravatar.cc/150?u=marketer")
    }

    #[test]
    fn test_role_serialises_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Marketer).unwrap(), "\"marketer\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!("user".parse::<Role>(), Ok(Role::User));
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_stored_identity_roundtrip() {
        let encoded = StoredIdentity::new(marketer()).encode().unwrap();
        assert!(encoded.contains("\"schema_version\":1"));
        assert_eq!(StoredIdentity::decode(&encoded), Some(marketer()));
    }

    #[test]
    fn test_decode_legacy_bare_identity() {
        // The format written before the record carried a schema version
        let legacy = r#"{"id":"2","name":"Jane User","email":"user@example.com","role":"user","avatar":"https://i.pravatar.cc/150?u=user"}"#;
        let identity = StoredIdentity::decode(legacy).unwrap();
        assert_eq!(identity.role, Role::User);
        assert_eq!(identity.email, "user@example.com");
        assert!(identity.phone.is_none());
    }

    #[test]
    fn test_decode_rejects_malformed_and_future_records() {
        assert!(StoredIdentity::decode("").is_none());
        assert!(StoredIdentity::decode("not json").is_none());
        assert!(StoredIdentity::decode("null").is_none());
        assert!(StoredIdentity::decode(r#"{"id":"1","name":"x","email":"x@y","role":"admin"}"#).is_none());

        let future = r#"{"schema_version":2,"identity":{"id":"1","name":"x","email":"x@y","role":"user"}}"#;
        assert!(StoredIdentity::decode(future).is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut identity = marketer();
        assert_eq!(identity.display_name(), "John Marketer");
        identity.name = "  ".to_string();
        assert_eq!(identity.display_name(), "marketer@example.com");
    }

    #[test]
    fn test_avatar_or_default() {
        let identity = Identity::new("3", "No Avatar", "none@example.com", Role::User);
        assert_eq!(identity.avatar_or_default(), DEFAULT_AVATAR);
        assert_eq!(marketer().avatar_or_default(), "https://i.pravatar.cc/150?u=marketer");
    }
}
