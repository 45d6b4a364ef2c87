//! Identifier allocation for new user records.

use crate::domain::{User, UserId};

/// Returns the id for the next record added to `records`.
///
/// `1` for an empty collection, otherwise one past the largest live id. Ids freed
/// by deletion are not handed out again while a larger id is still alive.
/// Uniqueness holds as long as every id in `records` came from this function or
/// from seed data that was checked for duplicates.
///
/// Returns `None` when the largest id is already [`UserId::MAX`]; no fresh id
/// is left to hand out.
///
/// ```
/// use userdeck::directory::next_id;
///
/// assert_eq!(next_id(&[]), Some(1));
/// ```
#[must_use]
pub fn next_id(records: &[User]) -> Option<UserId> {
    match records.iter().map(|user| user.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}
