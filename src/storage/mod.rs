//! Storage layer: preference persistence and seed data.
//!
//! The directory itself is never persisted; it lives for the process lifetime.
//! What crosses sessions is the theme preference, behind the [`PreferenceStore`]
//! key-value trait, and the static seed the directory starts from.
//!
//! # Modules
//!
//! - `backend`: [`PreferenceStore`] trait
//! - `json`: JSON file implementation with atomic writes
//! - `memory`: in-memory fallback implementation
//! - `preferences`: theme load/save with fallback to `light`
//! - `seed`: JSON seed parsing and directory construction

pub mod backend;
pub mod json;
pub mod memory;
pub mod preferences;
pub mod seed;

pub use backend::PreferenceStore;
pub use json::JsonPreferenceStore;
pub use memory::MemoryPreferenceStore;
pub use preferences::{load_theme, save_theme, THEME_KEY};
pub use seed::{load_directory, parse_seed, BUILTIN_SEED};
