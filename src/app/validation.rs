//! Form validation.
//!
//! Validation runs on submit and has two tiers selected by [`FormMode`]: adding a
//! user requires every field, editing requires only name, email and role. A
//! blank field is one that is empty after trimming whitespace. Accepted values are
//! stored exactly as typed.

use super::modes::{FormDraft, FormField, FormMode};
use crate::domain::error::{DirectoryError, Result};
use crate::domain::{NewUser, Role};

/// Fields required when editing an existing user.
const EDIT_REQUIRED: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Role];

/// Checks `draft` against the rules for `mode` and builds the record to store.
///
/// # Errors
///
/// Returns [`DirectoryError::Validation`] with a user-facing message:
/// - add mode: `Please fill in the "<field>" field.` naming the first blank field
/// - edit mode: `Please fill in Name, Email, and Role.`
/// - either mode: a role that is not `Admin`, `Editor` or `Viewer`
///
/// # Examples
///
/// ```
/// use userdeck::app::{validate, FormDraft, FormMode};
///
/// let draft = FormDraft { name: "Ann".into(), email: "a@x.com".into(), ..FormDraft::default() };
/// assert!(validate(&draft, FormMode::Edit).is_ok());
/// assert!(validate(&draft, FormMode::Add).is_err());
/// ```
pub fn validate(draft: &FormDraft, mode: FormMode) -> Result<NewUser> {
    let is_blank = |field: FormField| draft.get(field).trim().is_empty();

    match mode {
        FormMode::Add => {
            if let Some(field) = FormField::ALL.into_iter().find(|&field| is_blank(field)) {
                tracing::debug!(field = %field, "add form rejected");
                return Err(DirectoryError::Validation(format!(
                    "Please fill in the \"{field}\" field."
                )));
            }
        }
        FormMode::Edit => {
            if EDIT_REQUIRED.into_iter().any(is_blank) {
                tracing::debug!("edit form rejected");
                return Err(DirectoryError::Validation(
                    "Please fill in Name, Email, and Role.".to_string(),
                ));
            }
        }
    }

    let role: Role = draft.role.parse()?;

    Ok(NewUser {
        name: draft.name.clone(),
        email: draft.email.clone(),
        role,
        phone: draft.phone.clone(),
        address: draft.address.clone(),
        password: draft.password.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> FormDraft {
        FormDraft {
            name: "Bob".to_string(),
            email: "b@x.com".to_string(),
            password: "x".to_string(),
            role: "Viewer".to_string(),
            phone: "555".to_string(),
            address: "Rd".to_string(),
        }
    }

    fn message(result: Result<NewUser>) -> String {
        match result {
            Err(DirectoryError::Validation(message)) => message,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn complete_add_form_passes() {
        let user = validate(&complete(), FormMode::Add).unwrap();
        assert_eq!(user.name, "Bob");
        assert_eq!(user.role, Role::Viewer);
        assert_eq!(user.password, "x");
    }

    #[test]
    fn add_reports_first_blank_field_in_form_order() {
        let mut draft = complete();
        draft.phone = String::new();
        draft.password = "   ".to_string();
        assert_eq!(
            message(validate(&draft, FormMode::Add)),
            "Please fill in the \"password\" field."
        );
    }

    #[test]
    fn add_requires_address() {
        let mut draft = complete();
        draft.address = "\t".to_string();
        assert_eq!(
            message(validate(&draft, FormMode::Add)),
            "Please fill in the \"address\" field."
        );
    }

    #[test]
    fn edit_only_needs_name_email_role() {
        let draft = FormDraft {
            name: "Bob".to_string(),
            email: "b@x.com".to_string(),
            role: "Admin".to_string(),
            ..FormDraft::default()
        };
        let user = validate(&draft, FormMode::Edit).unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.phone, "");
        assert_eq!(user.password, "");
    }

    #[test]
    fn edit_uses_generic_message() {
        let mut draft = complete();
        draft.email = " ".to_string();
        assert_eq!(
            message(validate(&draft, FormMode::Edit)),
            "Please fill in Name, Email, and Role."
        );
    }

    #[test]
    fn unknown_role_is_rejected_in_both_modes() {
        let mut draft = complete();
        draft.role = "Owner".to_string();
        assert!(message(validate(&draft, FormMode::Add)).contains("Admin, Editor, Viewer"));
        assert!(message(validate(&draft, FormMode::Edit)).contains("Admin, Editor, Viewer"));
    }

    #[test]
    fn values_are_kept_as_typed() {
        let mut draft = complete();
        draft.name = " Bob ".to_string();
        assert_eq!(validate(&draft, FormMode::Add).unwrap().name, " Bob ");
    }
}
