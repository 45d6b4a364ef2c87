//! User domain model.
//!
//! This module defines the [`User`] record held by the directory, the [`Role`]
//! enumeration, and [`NewUser`], the id-less shape accepted by
//! [`DirectoryStore::add`](crate::directory::DirectoryStore::add).
//!
//! The password is opaque, write-only data: it is accepted from forms and seed
//! files but never serialized back out and never shown by `Debug`.

use super::error::DirectoryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a user record. Always `>= 1` for records in a directory.
pub type UserId = u64;

/// Placeholder printed instead of a password.
const REDACTED: &str = "<redacted>";

/// Access level of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Editor,
    /// Default role preselected in the add form.
    #[default]
    Viewer,
}

impl Role {
    /// All roles in the order they are offered to the user.
    pub const ALL: [Self; 3] = [Self::Admin, Self::Editor, Self::Viewer];

    /// Returns the canonical display name (`Admin`, `Editor`, `Viewer`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Editor => "Editor",
            Self::Viewer => "Viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DirectoryError;

    /// Parses a role name, ignoring surrounding whitespace and ASCII case.
    ///
    /// ```
    /// use userdeck::Role;
    ///
    /// assert_eq!("editor".parse::<Role>().unwrap(), Role::Editor);
    /// assert!("Owner".parse::<Role>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DirectoryError::Validation("Role must be one of Admin, Editor, Viewer.".to_string())
            })
    }
}

/// A user record in the directory.
///
/// `id` is assigned by the directory and unique across the live collection.
/// Updates replace the whole record; there is no partial patch.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone: String,
    pub address: String,
    /// Opaque, write-only. Never serialized on output.
    #[serde(default, skip_serializing)]
    pub password: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("phone", &self.phone)
            .field("address", &self.address)
            .field("password", &REDACTED)
            .finish()
    }
}

/// A user record that has not been assigned an id yet.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone: String,
    pub address: String,
    pub password: String,
}

impl NewUser {
    /// Finalizes the record with a system-assigned id.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            phone: self.phone,
            address: self.address,
            password: self.password,
        }
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("phone", &self.phone)
            .field("address", &self.address)
            .field("password", &REDACTED)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        NewUser {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            role: Role::Admin,
            phone: "555".to_string(),
            address: "Rd".to_string(),
            password: "hunter2".to_string(),
        }
        .into_user(7)
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!(" admin ".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("VIEWER".parse::<Role>().unwrap(), Role::Viewer);
    }

    #[test]
    fn unknown_role_is_a_validation_error() {
        let err = "".parse::<Role>().unwrap_err();
        assert!(matches!(err, DirectoryError::Validation(_)));
    }

    #[test]
    fn password_is_not_serialized() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(!json.contains("password"));
        assert!(json.contains("\"role\":\"Admin\""));
    }

    #[test]
    fn password_is_accepted_on_input() {
        let user: User = serde_json::from_str(
            r#"{"id":3,"name":"B","email":"b@x.com","role":"Editor","phone":"1","address":"A","password":"pw"}"#,
        )
        .unwrap();
        assert_eq!(user.password, "pw");
        assert_eq!(user.role, Role::Editor);
    }

    #[test]
    fn debug_redacts_password() {
        let rendered = format!("{:?}", sample());
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains(REDACTED));
    }
}
