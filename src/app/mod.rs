//! Application layer: the view orchestrator and its state.
//!
//! This layer sits between the console front-end (`main.rs`) and the
//! directory/storage layers. Data flows one way:
//!
//! ```text
//! Command → Event → handle_event → state / directory mutation → Actions → front-end
//!                                          ↓
//!                               compute_viewmodel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effects emitted by the handler
//! - [`handler`]: transition table and event processing
//! - [`modes`]: modal state machine types and the form draft
//! - [`state`]: the state container and view model computation
//! - [`validation`]: two-tier form validation
//!
//! # Example
//!
//! ```
//! use userdeck::app::{handle_event, Action, AppState, Event};
//! use userdeck::directory::DirectoryStore;
//! use userdeck::domain::ThemeChoice;
//!
//! let mut state = AppState::new(DirectoryStore::new(), ThemeChoice::Light)?;
//! let (_, actions) = handle_event(&mut state, &Event::Quit)?;
//! assert_eq!(actions, vec![Action::Quit]);
//! # Ok::<(), userdeck::DirectoryError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;
pub mod validation;

pub use actions::{Action, Notification, NotificationKind};
pub use handler::{handle_event, Event};
pub use modes::{FormDraft, FormField, FormMode, Modal, ModalKind};
pub use state::AppState;
pub use validation::validate;
