//! Search filtering over the directory.
//!
//! The visible table is always derived from the canonical collection and the
//! current query; nothing here keeps state between calls.

use crate::domain::User;

/// Returns the records whose name or email contains `query`, ignoring case.
///
/// An empty query returns every record. Order is preserved.
///
/// ```
/// use userdeck::directory::filter_users;
/// use userdeck::domain::NewUser;
///
/// let users = vec![NewUser { name: "alice smith".into(), ..NewUser::default() }.into_user(1)];
/// assert_eq!(filter_users(&users, "ALICE").len(), 1);
/// assert!(filter_users(&users, "bob").is_empty());
/// ```
#[must_use]
pub fn filter_users<'a>(records: &'a [User], query: &str) -> Vec<&'a User> {
    let _span = tracing::debug_span!("filter_users",
        total_users = records.len(),
        query_len = query.len()
    ).entered();

    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    let filtered: Vec<&User> = records
        .iter()
        .filter(|user| {
            user.name.to_lowercase().contains(&needle) || user.email.to_lowercase().contains(&needle)
        })
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "search filter applied");
    filtered
}

/// Byte range `(start, end)` of the first case-insensitive occurrence of `query`
/// in `text`, for highlighting.
///
/// Returns `None` for an empty query or when there is no match. Both ends fall on
/// character boundaries of `text`.
#[must_use]
pub fn match_range(text: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }
    let needle = query.to_lowercase();

    text.char_indices().find_map(|(start, _)| {
        let mut lowered = String::new();
        for (offset, c) in text[start..].char_indices() {
            lowered.extend(c.to_lowercase());
            if lowered.len() >= needle.len() {
                return (lowered == needle).then_some((start, start + offset + c.len_utf8()));
            }
            if !needle.starts_with(&lowered) {
                return None;
            }
        }
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewUser, Role};

    fn user(id: u64, name: &str, email: &str) -> User {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            role: Role::Viewer,
            ..NewUser::default()
        }
        .into_user(id)
    }

    fn directory() -> Vec<User> {
        vec![
            user(1, "alice smith", "alice@example.com"),
            user(2, "Bob Jones", "bjones@corp.io"),
            user(3, "Carol", "carol@EXAMPLE.com"),
        ]
    }

    fn ids(users: &[&User]) -> Vec<u64> {
        users.iter().map(|u| u.id).collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let users = directory();
        let all = filter_users(&users, "");
        assert_eq!(ids(&all), vec![1, 2, 3]);
    }

    #[test]
    fn name_match_ignores_case() {
        let users = directory();
        assert_eq!(ids(&filter_users(&users, "ALICE")), vec![1]);
    }

    #[test]
    fn email_matches_too() {
        let users = directory();
        assert_eq!(ids(&filter_users(&users, "example.com")), vec![1, 3]);
        assert_eq!(ids(&filter_users(&users, "corp")), vec![2]);
    }

    #[test]
    fn whitespace_is_part_of_the_query() {
        let users = directory();
        assert_eq!(ids(&filter_users(&users, "bob j")), vec![2]);
        assert!(filter_users(&users, " alice").is_empty());
    }

    #[test]
    fn no_match_yields_empty() {
        let users = directory();
        assert!(filter_users(&users, "zed").is_empty());
    }

    #[test]
    fn match_range_finds_first_occurrence() {
        assert_eq!(match_range("Bob Jones", "JO"), Some((4, 6)));
        assert_eq!(match_range("anna", "n"), Some((1, 2)));
        assert_eq!(match_range("Bob", "x"), None);
        assert_eq!(match_range("Bob", ""), None);
    }

    #[test]
    fn match_range_respects_char_boundaries() {
        let text = "Zoë Ölund";
        let (start, end) = match_range(text, "öl").unwrap();
        assert_eq!(&text[start..end], "Öl");
    }
}
