//! CSV export of the directory.
//!
//! Fields are joined verbatim. Values containing commas, quotes or newlines are
//! not escaped, so such records produce rows with extra columns.

use crate::domain::User;

/// File name handed to the download collaborator.
pub const EXPORT_FILENAME: &str = "users.csv";

/// Header row of the export.
pub const CSV_HEADER: &str = "ID,Name,Email,Role";

/// Serializes `records` as CSV, one line per record in collection order.
///
/// Lines are joined with `\n`; there is no trailing newline.
///
/// ```
/// use userdeck::directory::to_csv;
/// use userdeck::domain::{NewUser, Role};
///
/// let ann = NewUser {
///     name: "Ann".into(),
///     email: "a@x.com".into(),
///     role: Role::Admin,
///     ..NewUser::default()
/// }
/// .into_user(1);
/// assert_eq!(to_csv(&[ann]), "ID,Name,Email,Role\n1,Ann,a@x.com,Admin");
/// ```
#[must_use]
pub fn to_csv(records: &[User]) -> String {
    let _span = tracing::debug_span!("to_csv", rows = records.len()).entered();

    std::iter::once(CSV_HEADER.to_string())
        .chain(
            records
                .iter()
                .map(|user| format!("{},{},{},{}", user.id, user.name, user.email, user.role)),
        )
        .collect::<Vec<_>>()
        .join("\n")
}
