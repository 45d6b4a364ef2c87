//! Seed data loading.
//!
//! The initial directory comes from a static JSON array of user records. Ids in
//! the seed are kept exactly as supplied; records without an id get one after the
//! largest supplied id, in file order. Duplicate and zero ids are rejected by
//! [`DirectoryStore::from_seed`].
//!
//! ```json
//! [
//!   { "id": 1, "name": "Ann", "email": "a@x.com", "role": "Admin",
//!     "phone": "555-0100", "address": "1 Main St" },
//!   { "name": "Bob", "email": "b@x.com", "role": "Viewer" }
//! ]
//! ```

use crate::directory::DirectoryStore;
use crate::domain::error::{DirectoryError, Result};
use crate::domain::{NewUser, Role, User, UserId};
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Seed shipped with the binary, used when no seed file is configured.
pub const BUILTIN_SEED: &str = include_str!("../../data/users.json");

/// A user as written in a seed file. Only `name` and `email` are required.
#[derive(Debug, Deserialize)]
struct SeedUser {
    #[serde(default)]
    id: Option<UserId>,
    name: String,
    email: String,
    #[serde(default, deserialize_with = "role_from_str")]
    role: Role,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    password: String,
}

/// Reads a role the same way form input does, ignoring ASCII case.
fn role_from_str<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Role, D::Error> {
    let value = String::deserialize(deserializer)?;
    value.parse().map_err(serde::de::Error::custom)
}

/// Parses a JSON seed into user records, allocating ids only where missing.
///
/// # Errors
///
/// Returns [`DirectoryError::Seed`] if the JSON is malformed, or if a record
/// without an id would need one past `u64::MAX`.
pub fn parse_seed(json: &str) -> Result<Vec<User>> {
    let seeds: Vec<SeedUser> = serde_json::from_str(json)
        .map_err(|e| DirectoryError::Seed(format!("failed to parse seed JSON: {e}")))?;

    let mut next = seeds.iter().filter_map(|seed| seed.id).max().unwrap_or(0).checked_add(1);

    let mut users = Vec::with_capacity(seeds.len());
    for seed in seeds {
        let id = match seed.id {
            Some(id) => id,
            None => {
                let allocated = next.ok_or_else(|| {
                    DirectoryError::Seed(format!("no id left to assign to user \"{}\"", seed.name))
                })?;
                next = allocated.checked_add(1);
                allocated
            }
        };
        users.push(
            NewUser {
                name: seed.name,
                email: seed.email,
                role: seed.role,
                phone: seed.phone,
                address: seed.address,
                password: seed.password,
            }
            .into_user(id),
        );
    }

    Ok(users)
}

/// Builds a directory from a seed file, or the built-in seed when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a valid seed, or contains
/// duplicate or zero ids.
pub fn load_directory(path: Option<&Path>) -> Result<DirectoryStore> {
    let _span = tracing::debug_span!("load_directory", path = ?path).entered();

    let users = match path {
        Some(path) => parse_seed(&std::fs::read_to_string(path)?)?,
        None => parse_seed(BUILTIN_SEED)?,
    };

    tracing::debug!(user_count = users.len(), "seed parsed");
    DirectoryStore::from_seed(users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_seed_is_valid() {
        let store = load_directory(None).unwrap();
        assert!(!store.is_empty());
    }

    #[test]
    fn supplied_ids_are_preserved() {
        let users = parse_seed(
            r#"[{"id":7,"name":"A","email":"a@x.com","role":"Admin"},
                {"id":3,"name":"B","email":"b@x.com","role":"Editor"}]"#,
        )
        .unwrap();
        assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![7, 3]);
        assert_eq!(users[1].role, Role::Editor);
    }

    #[test]
    fn missing_ids_follow_the_largest_supplied_id() {
        let users = parse_seed(
            r#"[{"name":"A","email":"a@x.com"},
                {"id":5,"name":"B","email":"b@x.com"},
                {"name":"C","email":"c@x.com"}]"#,
        )
        .unwrap();
        assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![6, 5, 7]);
        assert_eq!(users[0].role, Role::Viewer);
        assert_eq!(users[0].phone, "");
    }

    #[test]
    fn roles_ignore_case_like_form_input() {
        let users = parse_seed(
            r#"[{"name":"A","email":"a@x.com","role":"admin"},
                {"name":"B","email":"b@x.com","role":" EDITOR "}]"#,
        )
        .unwrap();
        assert_eq!(users[0].role, Role::Admin);
        assert_eq!(users[1].role, Role::Editor);
    }

    #[test]
    fn allocation_past_max_id_is_rejected() {
        let json = format!(r#"[{{"id":{},"name":"A","email":"a@x.com"}},{{"name":"B","email":"b@x.com"}}]"#, u64::MAX);
        assert!(matches!(parse_seed(&json), Err(DirectoryError::Seed(_))));
    }

    #[test]
    fn malformed_seed_is_rejected() {
        assert!(matches!(parse_seed("{}"), Err(DirectoryError::Seed(_))));
        assert!(matches!(
            parse_seed(r#"[{"name":"A","email":"a@x.com","role":"Owner"}]"#),
            Err(DirectoryError::Seed(_))
        ));
    }

    #[test]
    fn duplicate_ids_in_file_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":1,"name":"A","email":"a@x.com"}},{{"id":1,"name":"B","email":"b@x.com"}}]"#
        )
        .unwrap();

        let result = load_directory(Some(file.path()));
        assert!(matches!(result, Err(DirectoryError::Seed(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_directory(Some(Path::new("/definitely/not/here/users.json")));
        assert!(matches!(result, Err(DirectoryError::Io(_))));
    }
}
