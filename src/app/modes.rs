//! Modal state types for the view orchestrator.
//!
//! At most one modal is open at a time. [`Modal`] carries the open modal together
//! with its subject record and, for the two form modals, the form draft being
//! edited. [`ModalKind`] is the bare tag, handy for matching and display.
//!
//! # State Machine
//!
//! ```text
//!   None ── view(id) ───► Detail ─────────┐
//!   None ── add ────────► FormAdd ────────┤  close, valid submit,
//!   None ── edit(id) ───► FormEdit ───────┤  or confirm
//!   None ── delete(id) ─► DeleteConfirm ──┴──────────────────────► None
//! ```

use crate::domain::{User, UserId};
use std::fmt;

/// Bare tag of the active modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    None,
    Detail,
    FormAdd,
    FormEdit,
    DeleteConfirm,
}

/// Whether a form submission creates a record or replaces one.
///
/// Add mode requires every field; edit mode only name, email and role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

/// A field of the user form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Password,
    Role,
    Phone,
    Address,
}

impl FormField {
    /// Fields in form order. Add-mode validation reports the first blank one.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Email,
        Self::Password,
        Self::Role,
        Self::Phone,
        Self::Address,
    ];

    /// Lowercase field name as shown in validation messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Role => "role",
            Self::Phone => "phone",
            Self::Address => "address",
        }
    }

    /// Looks up a field by its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text currently entered in the user form.
///
/// Role is kept as text and parsed on submit, so an unfinished form can hold
/// anything the user typed.
#[derive(Clone, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub phone: String,
    pub address: String,
}

impl Default for FormDraft {
    /// An empty form with `Viewer` preselected.
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: crate::domain::Role::default().to_string(),
            phone: String::new(),
            address: String::new(),
        }
    }
}

impl FormDraft {
    /// Prefills the form from an existing record. The password starts blank.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            password: String::new(),
            role: user.role.to_string(),
            phone: user.phone.clone(),
            address: user.address.clone(),
        }
    }

    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::Role => &self.role,
            FormField::Phone => &self.phone,
            FormField::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
            FormField::Role => &mut self.role,
            FormField::Phone => &mut self.phone,
            FormField::Address => &mut self.address,
        };
        *slot = value.into();
    }
}

impl fmt::Debug for FormDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormDraft")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .field("phone", &self.phone)
            .field("address", &self.address)
            .finish()
    }
}

/// The open modal, its subject and its form draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// Only the table is shown.
    #[default]
    None,

    /// Read-only detail view of `subject`.
    Detail { subject: User },

    /// Form for a new record. No subject.
    FormAdd { draft: FormDraft },

    /// Form replacing `subject`, prefilled from it.
    FormEdit { subject: User, draft: FormDraft },

    /// Asks whether `subject` should be deleted.
    DeleteConfirm { subject: User },
}

impl Modal {
    #[must_use]
    pub const fn kind(&self) -> ModalKind {
        match self {
            Self::None => ModalKind::None,
            Self::Detail { .. } => ModalKind::Detail,
            Self::FormAdd { .. } => ModalKind::FormAdd,
            Self::FormEdit { .. } => ModalKind::FormEdit,
            Self::DeleteConfirm { .. } => ModalKind::DeleteConfirm,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// The record the modal operates on. `None` for no modal and for the add form.
    #[must_use]
    pub fn subject(&self) -> Option<&User> {
        match self {
            Self::Detail { subject } | Self::FormEdit { subject, .. } | Self::DeleteConfirm { subject } => {
                Some(subject)
            }
            Self::None | Self::FormAdd { .. } => None,
        }
    }

    /// Id of the subject, if any.
    #[must_use]
    pub fn subject_id(&self) -> Option<UserId> {
        self.subject().map(|user| user.id)
    }

    /// The form draft and its mode, when a form is open.
    #[must_use]
    pub fn form(&self) -> Option<(FormMode, &FormDraft)> {
        match self {
            Self::FormAdd { draft } => Some((FormMode::Add, draft)),
            Self::FormEdit { draft, .. } => Some((FormMode::Edit, draft)),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut FormDraft> {
        match self {
            Self::FormAdd { draft } | Self::FormEdit { draft, .. } => Some(draft),
            _ => None,
        }
    }
}
