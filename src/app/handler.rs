//! Event handling and state transition logic.
//!
//! [`handle_event`] is the view orchestrator: it applies one [`Event`] to the
//! [`AppState`], invokes the directory store where a transition calls for it and
//! returns whether the front-end should re-render together with the side effects
//! to run.
//!
//! # Transitions
//!
//! | From          | Event                   | To            | Effect          |
//! |---------------|-------------------------|---------------|-----------------|
//! | None          | `ViewUser(id)`          | Detail        |                 |
//! | None          | `AddUser`               | FormAdd       |                 |
//! | None          | `EditUser(id)`          | FormEdit      |                 |
//! | None          | `DeleteUser(id)`        | DeleteConfirm |                 |
//! | any modal     | `Close`                 | None          |                 |
//! | FormAdd       | `Submit` (valid)        | None          | `store.add`     |
//! | FormEdit      | `Submit` (valid)        | None          | `store.update`  |
//! | DeleteConfirm | `Confirm`               | None          | `store.delete`  |
//!
//! An invalid submission keeps the form open, leaves the store untouched and
//! emits an error notification. Open events while a modal is showing, and
//! events naming an id that is not in the directory, change nothing.
//!
//! # Example
//!
//! ```
//! use userdeck::app::{handle_event, AppState, Event, ModalKind};
//! use userdeck::directory::DirectoryStore;
//! use userdeck::domain::ThemeChoice;
//!
//! let mut state = AppState::new(DirectoryStore::new(), ThemeChoice::Light)?;
//! let (render, actions) = handle_event(&mut state, &Event::AddUser)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! assert_eq!(state.modal.kind(), ModalKind::FormAdd);
//! # Ok::<(), userdeck::DirectoryError>(())
//! ```

use super::actions::{Action, Notification};
use super::modes::{FormDraft, FormField, Modal};
use super::state::AppState;
use super::validation::validate;
use crate::directory::{to_csv, EXPORT_FILENAME};
use crate::domain::error::Result;
use crate::domain::{User, UserId};

/// Things the user can do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Opens the detail view for a record.
    ViewUser(UserId),
    /// Opens an empty add form.
    AddUser,
    /// Opens the edit form prefilled from a record.
    EditUser(UserId),
    /// Asks for confirmation before deleting a record.
    DeleteUser(UserId),
    /// Closes or cancels whatever modal is open.
    Close,

    /// Sets one field of the open form.
    SetField {
        field: FormField,
        value: String,
    },
    /// Replaces the whole draft of the open form.
    FillForm(FormDraft),
    /// Submits the open form.
    Submit,
    /// Confirms the pending delete.
    Confirm,

    /// Replaces the search query.
    Search(String),
    /// Empties the search query.
    ClearSearch,
    /// Switches between light and dark.
    ToggleTheme,
    /// Exports the whole directory as CSV.
    ExportCsv,
    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the visible state changed and the front-end should
/// render again.
///
/// # Errors
///
/// Returns an error only if the theme palette for a toggled theme cannot be
/// loaded. Validation failures are not errors; they come back as an error
/// [`Notification`].
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::ViewUser(id) => Ok((open_for(state, *id, |subject| Modal::Detail { subject }), vec![])),
        Event::EditUser(id) => Ok((
            open_for(state, *id, |subject| Modal::FormEdit {
                draft: FormDraft::from_user(&subject),
                subject,
            }),
            vec![],
        )),
        Event::DeleteUser(id) => Ok((
            open_for(state, *id, |subject| Modal::DeleteConfirm { subject }),
            vec![],
        )),
        Event::AddUser => {
            if state.modal.is_open() {
                tracing::debug!(modal = ?state.modal.kind(), "modal already open, ignoring add");
                return Ok((false, vec![]));
            }
            state.modal = Modal::FormAdd {
                draft: FormDraft::default(),
            };
            Ok((true, vec![]))
        }
        Event::Close => {
            if !state.modal.is_open() {
                return Ok((false, vec![]));
            }
            tracing::debug!(modal = ?state.modal.kind(), "closing modal");
            state.modal = Modal::None;
            Ok((true, vec![]))
        }
        Event::SetField { field, value } => {
            let Some(draft) = state.modal.draft_mut() else {
                tracing::debug!(field = %field, "no form open, ignoring field edit");
                return Ok((false, vec![]));
            };
            draft.set(*field, value.as_str());
            Ok((true, vec![]))
        }
        Event::FillForm(filled) => {
            let Some(draft) = state.modal.draft_mut() else {
                tracing::debug!("no form open, ignoring fill");
                return Ok((false, vec![]));
            };
            draft.clone_from(filled);
            Ok((true, vec![]))
        }
        Event::Submit => Ok(submit(state)),
        Event::Confirm => {
            let Some(id) = pending_delete(&state.modal) else {
                return Ok((false, vec![]));
            };
            state.modal = Modal::None;
            state.directory.delete(id);
            Ok((
                true,
                vec![Action::Notify(Notification::success("User deleted successfully!"))],
            ))
        }
        Event::Search(query) => {
            if state.search_query == *query {
                return Ok((false, vec![]));
            }
            state.search_query.clone_from(query);
            tracing::trace!(query = %state.search_query, "search query updated");
            Ok((true, vec![]))
        }
        Event::ClearSearch => {
            if state.search_query.is_empty() {
                return Ok((false, vec![]));
            }
            state.search_query.clear();
            Ok((true, vec![]))
        }
        Event::ToggleTheme => {
            let choice = state.theme_choice.toggled();
            state.set_theme(choice)?;
            tracing::debug!(theme = %choice, "theme toggled");
            Ok((true, vec![Action::SaveTheme(choice)]))
        }
        Event::ExportCsv => {
            let contents = to_csv(state.directory.list());
            tracing::debug!(user_count = state.directory.len(), "exporting directory");
            Ok((
                false,
                vec![Action::Download {
                    filename: EXPORT_FILENAME.to_string(),
                    contents,
                }],
            ))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

/// Opens a record-bound modal for `id` when no modal is open and the id exists.
/// Returns whether the state changed.
fn open_for(state: &mut AppState, id: UserId, build: impl FnOnce(User) -> Modal) -> bool {
    if state.modal.is_open() {
        tracing::debug!(modal = ?state.modal.kind(), user_id = id, "modal already open, ignoring");
        return false;
    }
    let Some(subject) = state.directory.get(id).cloned() else {
        tracing::debug!(user_id = id, "no user with this id");
        return false;
    };
    state.modal = build(subject);
    tracing::debug!(modal = ?state.modal.kind(), user_id = id, "modal opened");
    true
}

fn pending_delete(modal: &Modal) -> Option<UserId> {
    match modal {
        Modal::DeleteConfirm { subject } => Some(subject.id),
        _ => None,
    }
}

fn submit(state: &mut AppState) -> (bool, Vec<Action>) {
    let Some((mode, draft)) = state.modal.form() else {
        tracing::debug!("no form open, ignoring submit");
        return (false, vec![]);
    };

    let new_user = match validate(draft, mode) {
        Ok(new_user) => new_user,
        Err(e) => return (false, vec![Action::Notify(Notification::error(e.to_string()))]),
    };

    let message = match std::mem::take(&mut state.modal) {
        Modal::FormAdd { draft } => {
            if let Err(e) = state.directory.add(new_user) {
                state.modal = Modal::FormAdd { draft };
                return (false, vec![Action::Notify(Notification::error(e.to_string()))]);
            }
            "User added successfully!"
        }
        Modal::FormEdit { subject, .. } => {
            state.directory.update(new_user.into_user(subject.id));
            "User updated successfully!"
        }
        other => {
            state.modal = other;
            return (false, vec![]);
        }
    };

    (true, vec![Action::Notify(Notification::success(message))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::ModalKind;
    use crate::app::NotificationKind;
    use crate::directory::DirectoryStore;
    use crate::domain::{NewUser, Role, ThemeChoice};

    fn seeded() -> AppState {
        let mut directory = DirectoryStore::new();
        directory.add(NewUser {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            role: Role::Admin,
            phone: "555-0100".to_string(),
            address: "1 Main St".to_string(),
            password: "pw".to_string(),
        })
        .unwrap();
        AppState::new(directory, ThemeChoice::Light).unwrap()
    }

    fn complete_draft() -> FormDraft {
        FormDraft {
            name: "Bob".to_string(),
            email: "b@x.com".to_string(),
            password: "x".to_string(),
            role: "Viewer".to_string(),
            phone: "555".to_string(),
            address: "Rd".to_string(),
        }
    }

    fn notification(actions: &[Action]) -> (NotificationKind, &str) {
        match actions {
            [Action::Notify(n)] => (n.kind, n.message.as_str()),
            other => panic!("expected one notification, got {other:?}"),
        }
    }

    #[test]
    fn view_then_close() {
        let mut state = seeded();
        let (render, _) = handle_event(&mut state, &Event::ViewUser(1)).unwrap();
        assert!(render);
        assert_eq!(state.modal.kind(), ModalKind::Detail);
        assert_eq!(state.modal.subject_id(), Some(1));

        handle_event(&mut state, &Event::Close).unwrap();
        assert_eq!(state.modal, Modal::None);
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let mut state = seeded();
        let (render, actions) = handle_event(&mut state, &Event::EditUser(42)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.modal, Modal::None);
    }

    #[test]
    fn open_events_are_ignored_while_a_modal_is_open() {
        let mut state = seeded();
        handle_event(&mut state, &Event::DeleteUser(1)).unwrap();
        let (render, _) = handle_event(&mut state, &Event::AddUser).unwrap();
        assert!(!render);
        assert_eq!(state.modal.kind(), ModalKind::DeleteConfirm);
    }

    #[test]
    fn valid_add_appends_and_closes() {
        let mut state = seeded();
        handle_event(&mut state, &Event::AddUser).unwrap();
        handle_event(&mut state, &Event::FillForm(complete_draft())).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(render);
        assert_eq!(
            notification(&actions),
            (NotificationKind::Success, "User added successfully!")
        );
        assert_eq!(state.modal, Modal::None);
        assert_eq!(state.directory.len(), 2);
        assert_eq!(state.directory.list()[1].id, 2);
        assert_eq!(state.directory.list()[1].name, "Bob");
    }

    #[test]
    fn add_with_no_ids_left_keeps_form_open() {
        let top = NewUser {
            name: "Top".to_string(),
            ..NewUser::default()
        }
        .into_user(UserId::MAX);
        let mut state =
            AppState::new(DirectoryStore::from_seed(vec![top]).unwrap(), ThemeChoice::Light).unwrap();
        handle_event(&mut state, &Event::AddUser).unwrap();
        handle_event(&mut state, &Event::FillForm(complete_draft())).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(!render);
        assert_eq!(
            notification(&actions),
            (NotificationKind::Error, "No user ids left to assign")
        );
        assert_eq!(state.modal.form().map(|(_, d)| d.name.as_str()), Some("Bob"));
        assert_eq!(state.directory.len(), 1);
    }

    #[test]
    fn invalid_add_keeps_form_open_and_store_unchanged() {
        let mut state = seeded();
        handle_event(&mut state, &Event::AddUser).unwrap();
        handle_event(
            &mut state,
            &Event::SetField {
                field: FormField::Name,
                value: "Bob".to_string(),
            },
        )
        .unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(!render);
        assert_eq!(
            notification(&actions),
            (NotificationKind::Error, "Please fill in the \"email\" field.")
        );
        assert_eq!(state.modal.kind(), ModalKind::FormAdd);
        assert_eq!(state.modal.form().map(|(_, d)| d.name.as_str()), Some("Bob"));
        assert_eq!(state.directory.len(), 1);
    }

    #[test]
    fn edit_replaces_record_without_merging() {
        let mut state = seeded();
        handle_event(&mut state, &Event::EditUser(1)).unwrap();
        assert_eq!(state.modal.form().map(|(_, d)| d.password.as_str()), Some(""));

        handle_event(
            &mut state,
            &Event::SetField {
                field: FormField::Phone,
                value: String::new(),
            },
        )
        .unwrap();
        handle_event(
            &mut state,
            &Event::SetField {
                field: FormField::Role,
                value: "Editor".to_string(),
            },
        )
        .unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert_eq!(
            notification(&actions),
            (NotificationKind::Success, "User updated successfully!")
        );

        let user = state.directory.get(1).unwrap();
        assert_eq!(user.role, Role::Editor);
        assert_eq!(user.phone, "");
        assert_eq!(user.password, "");
        assert_eq!(user.name, "Ann");
    }

    #[test]
    fn invalid_edit_uses_edit_message() {
        let mut state = seeded();
        handle_event(&mut state, &Event::EditUser(1)).unwrap();
        handle_event(
            &mut state,
            &Event::SetField {
                field: FormField::Email,
                value: "  ".to_string(),
            },
        )
        .unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert_eq!(
            notification(&actions),
            (NotificationKind::Error, "Please fill in Name, Email, and Role.")
        );
        assert_eq!(state.directory.get(1).unwrap().email, "ann@x.com");
    }

    #[test]
    fn cancel_delete_keeps_record() {
        let mut state = seeded();
        handle_event(&mut state, &Event::DeleteUser(1)).unwrap();
        handle_event(&mut state, &Event::Close).unwrap();
        assert_eq!(state.directory.len(), 1);
        assert_eq!(state.modal, Modal::None);
    }

    #[test]
    fn confirm_delete_removes_record() {
        let mut state = seeded();
        handle_event(&mut state, &Event::DeleteUser(1)).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::Confirm).unwrap();
        assert!(render);
        assert_eq!(
            notification(&actions),
            (NotificationKind::Success, "User deleted successfully!")
        );
        assert!(state.directory.is_empty());
        assert_eq!(state.modal, Modal::None);
    }

    #[test]
    fn confirm_without_pending_delete_is_ignored() {
        let mut state = seeded();
        handle_event(&mut state, &Event::ViewUser(1)).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::Confirm).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.modal.kind(), ModalKind::Detail);
    }

    #[test]
    fn submit_outside_form_is_ignored() {
        let mut state = seeded();
        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn search_is_independent_of_modal() {
        let mut state = seeded();
        handle_event(&mut state, &Event::ViewUser(1)).unwrap();
        let (render, _) = handle_event(&mut state, &Event::Search("ANN".to_string())).unwrap();
        assert!(render);
        assert_eq!(state.visible_users().len(), 1);
        assert_eq!(state.modal.kind(), ModalKind::Detail);

        let (render, _) = handle_event(&mut state, &Event::Search("ANN".to_string())).unwrap();
        assert!(!render);

        handle_event(&mut state, &Event::ClearSearch).unwrap();
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn toggle_theme_emits_save() {
        let mut state = seeded();
        let (_, actions) = handle_event(&mut state, &Event::ToggleTheme).unwrap();
        assert_eq!(actions, vec![Action::SaveTheme(ThemeChoice::Dark)]);
        assert_eq!(state.theme_choice, ThemeChoice::Dark);

        let (_, actions) = handle_event(&mut state, &Event::ToggleTheme).unwrap();
        assert_eq!(actions, vec![Action::SaveTheme(ThemeChoice::Light)]);
    }

    #[test]
    fn export_covers_whole_directory_not_filtered_view() {
        let mut state = seeded();
        handle_event(&mut state, &Event::Search("nobody".to_string())).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::ExportCsv).unwrap();
        assert!(!render);
        assert_eq!(
            actions,
            vec![Action::Download {
                filename: "users.csv".to_string(),
                contents: "ID,Name,Email,Role\n1,Ann,ann@x.com,Admin".to_string(),
            }]
        );
    }

    #[test]
    fn quit_emits_quit() {
        let mut state = seeded();
        assert_eq!(
            handle_event(&mut state, &Event::Quit).unwrap(),
            (false, vec![Action::Quit])
        );
    }
}
