//! Domain layer for the user directory.
//!
//! This module contains the core domain types, independent of storage, rendering
//! or the console front-end.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`user`]: User record, role and the id-less new-user shape
//! - [`preference`]: Light/dark theme choice
//!
//! # Examples
//!
//! ```
//! use userdeck::domain::{NewUser, Role};
//!
//! let user = NewUser {
//!     name: "Bob".to_string(),
//!     email: "b@x.com".to_string(),
//!     role: Role::Viewer,
//!     ..NewUser::default()
//! }
//! .into_user(1);
//! assert_eq!(user.id, 1);
//! ```

pub mod error;
pub mod preference;
pub mod user;

pub use error::{DirectoryError, Result};
pub use preference::ThemeChoice;
pub use user::{NewUser, Role, User, UserId};
