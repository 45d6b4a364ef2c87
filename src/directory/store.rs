//! The canonical user collection.
//!
//! [`DirectoryStore`] is the single owner of the user records. It is mutated only
//! through [`add`](DirectoryStore::add), [`update`](DirectoryStore::update) and
//! [`delete`](DirectoryStore::delete); everything else reads a settled snapshot
//! through [`list`](DirectoryStore::list).
//!
//! Updating or deleting an id that is not present is a silent no-op: nothing
//! changes and no error is returned. The returned `Option` only tells the caller
//! what, if anything, was replaced or removed.

use super::ids::next_id;
use crate::domain::error::{DirectoryError, Result};
use crate::domain::{NewUser, User, UserId};
use std::collections::HashSet;

/// Ordered, id-unique collection of users.
///
/// Insertion order is preserved: new records append, updates keep their
/// position, deletes remove in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryStore {
    users: Vec<User>,
}

impl DirectoryStore {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from seed records, keeping their ids as supplied.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Seed`] if a record has id `0` or two records
    /// share an id.
    pub fn from_seed(users: Vec<User>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(users.len());
        for user in &users {
            if user.id == 0 {
                return Err(DirectoryError::Seed(format!(
                    "user \"{}\" has id 0; ids start at 1",
                    user.name
                )));
            }
            if !seen.insert(user.id) {
                return Err(DirectoryError::Seed(format!("duplicate user id {}", user.id)));
            }
        }

        tracing::debug!(user_count = users.len(), "directory seeded");
        Ok(Self { users })
    }

    /// Appends a new record with a system-assigned id and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::IdsExhausted`] if the largest id is already
    /// `UserId::MAX`. The directory is left unchanged.
    pub fn add(&mut self, new_user: NewUser) -> Result<&User> {
        let Some(id) = next_id(&self.users) else {
            tracing::warn!("no user id left, add rejected");
            return Err(DirectoryError::IdsExhausted);
        };
        let _span = tracing::debug_span!("directory_add", user_id = id).entered();

        self.users.push(new_user.into_user(id));
        tracing::debug!(user_count = self.users.len(), "user added");

        Ok(&self.users[self.users.len() - 1])
    }

    /// Replaces the record with the same id, keeping its position.
    ///
    /// Every field comes from `user`; nothing is merged from the old record.
    /// Returns the replaced record, or `None` (and changes nothing) if no record
    /// has that id.
    pub fn update(&mut self, user: User) -> Option<User> {
        let _span = tracing::debug_span!("directory_update", user_id = user.id).entered();

        let Some(slot) = self.users.iter_mut().find(|existing| existing.id == user.id) else {
            tracing::debug!("no user with this id, update ignored");
            return None;
        };

        let previous = std::mem::replace(slot, user);
        tracing::debug!("user replaced");
        Some(previous)
    }

    /// Removes the record with `id`.
    ///
    /// Returns the removed record, or `None` (and changes nothing) if absent.
    pub fn delete(&mut self, id: UserId) -> Option<User> {
        let _span = tracing::debug_span!("directory_delete", user_id = id).entered();

        let Some(position) = self.users.iter().position(|user| user.id == id) else {
            tracing::debug!("no user with this id, delete ignored");
            return None;
        };

        let removed = self.users.remove(position);
        tracing::debug!(user_count = self.users.len(), "user deleted");
        Some(removed)
    }

    /// All records in insertion order.
    #[must_use]
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            role: Role::Viewer,
            phone: "555".to_string(),
            address: "Rd".to_string(),
            password: "x".to_string(),
        }
    }

    fn names(store: &DirectoryStore) -> Vec<&str> {
        store.list().iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn add_assigns_sequential_ids_and_appends() {
        let mut store = DirectoryStore::new();
        assert_eq!(store.add(new_user("Bob")).unwrap().id, 1);
        assert_eq!(store.add(new_user("Ann")).unwrap().id, 2);

        let last = store.list().last().unwrap();
        assert_eq!(last.id, 2);
        assert_eq!(last.name, "Ann");
        assert_eq!(last.email, "ann@x.com");
        assert_eq!(last.password, "x");
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = DirectoryStore::new();
        store.add(new_user("Bob")).unwrap();
        store.add(new_user("Ann")).unwrap();
        store.delete(1);
        assert_eq!(store.list().iter().map(|u| u.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(store.add(new_user("Cid")).unwrap().id, 3);
    }

    #[test]
    fn add_continues_after_seeded_ids() {
        let seed = vec![new_user("A").into_user(10), new_user("B").into_user(4)];
        let mut store = DirectoryStore::from_seed(seed).unwrap();
        assert_eq!(store.add(new_user("C")).unwrap().id, 11);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = DirectoryStore::new();
        store.add(new_user("Bob")).unwrap();
        store.add(new_user("Ann")).unwrap();
        store.add(new_user("Cid")).unwrap();

        let replacement = NewUser {
            name: "Annie".to_string(),
            email: "annie@x.com".to_string(),
            role: Role::Admin,
            ..NewUser::default()
        }
        .into_user(2);
        let previous = store.update(replacement).unwrap();

        assert_eq!(previous.name, "Ann");
        assert_eq!(names(&store), vec!["Bob", "Annie", "Cid"]);
        let updated = store.get(2).unwrap();
        assert_eq!(updated.role, Role::Admin);
        assert_eq!(updated.phone, "", "omitted fields are blank, not merged");
        assert_eq!(updated.password, "");
    }

    #[test]
    fn update_of_absent_id_changes_nothing() {
        let mut store = DirectoryStore::new();
        store.add(new_user("Bob")).unwrap();
        let before = store.clone();

        assert!(store.update(new_user("Ghost").into_user(42)).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn delete_removes_exactly_one_and_repeats_are_no_ops() {
        let mut store = DirectoryStore::new();
        store.add(new_user("Bob")).unwrap();
        store.add(new_user("Ann")).unwrap();
        store.add(new_user("Cid")).unwrap();

        assert_eq!(store.delete(2).map(|u| u.name), Some("Ann".to_string()));
        assert_eq!(store.len(), 2);
        assert!(store.delete(2).is_none());
        assert_eq!(names(&store), vec!["Bob", "Cid"]);
    }

    #[test]
    fn seed_rejects_duplicate_ids() {
        let seed = vec![new_user("A").into_user(1), new_user("B").into_user(1)];
        let err = DirectoryStore::from_seed(seed).unwrap_err();
        assert!(matches!(err, DirectoryError::Seed(_)));
    }

    #[test]
    fn seed_rejects_zero_id() {
        let seed = vec![new_user("A").into_user(0)];
        assert!(DirectoryStore::from_seed(seed).is_err());
    }

    #[test]
    fn add_after_max_id_fails_without_duplicating() {
        let seed = vec![new_user("Top").into_user(UserId::MAX)];
        let mut store = DirectoryStore::from_seed(seed).unwrap();

        let err = store.add(new_user("Next")).unwrap_err();
        assert!(matches!(err, DirectoryError::IdsExhausted));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(UserId::MAX).unwrap().name, "Top");
    }

    #[test]
    fn seed_order_is_preserved() {
        let seed = vec![new_user("Z").into_user(3), new_user("Y").into_user(1)];
        let store = DirectoryStore::from_seed(seed).unwrap();
        assert_eq!(names(&store), vec!["Z", "Y"]);
        assert!(!store.is_empty());
    }
}
