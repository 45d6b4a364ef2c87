//! Terminal rendering layer with component-based architecture.
//!
//! Rendering is pure presentation: it reads a view model and produces
//! ANSI-styled text. No business logic lives here.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: display-ready types
//! - [`renderer`]: frame and notification rendering
//! - `components`: header, search bar, table, empty state, modal and footer
//! - [`helpers`]: padding, centering and match highlighting
//! - [`theme`]: palettes and ANSI escape generation

mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_notification, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, ModalPanel, SearchBarInfo, UIViewModel, UserRow,
};
