//! The user directory: canonical collection and the pure algorithms over it.
//!
//! # Modules
//!
//! - `store`: [`DirectoryStore`], owner of the ordered, id-unique collection
//! - `ids`: id allocation (`max + 1`, never reusing freed ids)
//! - `filter`: case-insensitive name/email search
//! - `csv`: CSV export

pub mod csv;
pub mod filter;
pub mod ids;
pub mod store;

pub use csv::{to_csv, CSV_HEADER, EXPORT_FILENAME};
pub use filter::{filter_users, match_range};
pub use ids::next_id;
pub use store::DirectoryStore;
