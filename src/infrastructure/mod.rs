//! Infrastructure layer for filesystem and environment interactions.
//!
//! Everything that reads process environment lives here so the rest of the
//! crate can stay pure and testable.

pub mod paths;

pub use paths::{data_dir_from, expand_tilde, get_data_dir, preferences_path, spans_path};
