use crate::entry::AddressDraft;
use crate::error::ValidationError;

/// Check a candidate record against the required-field and format rules.
///
/// Rules run in declaration order and the first violation wins, so the
/// reported error is deterministic for a given draft. Holds no state and
/// performs no I/O; callers run it once per create/update request before
/// touching the store.
pub fn validate(draft: &AddressDraft) -> Result<(), ValidationError> {
    if draft.first_name.trim().is_empty() {
        return Err(ValidationError::MissingFirstName);
    }
    if draft.last_name.trim().is_empty() {
        return Err(ValidationError::MissingLastName);
    }
    if draft.email.trim().is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !email_is_well_formed(&draft.email) {
        return Err(ValidationError::MalformedEmail(draft.email.clone()));
    }
    if draft.phone_number == 0 {
        return Err(ValidationError::MissingPhoneNumber);
    }
    Ok(())
}

/// `local@domain.tld`: a non-empty local part before the last `@`, and a
/// `.` somewhere after it with non-empty segments on both sides.
fn email_is_well_formed(email: &str) -> bool {
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> AddressDraft {
        AddressDraft {
            first_name: "Jane".into(),
            last_name: "Austin".into(),
            email: "jane@austin.com".into(),
            phone_number: 123,
        }
    }

    // -----------------------------------------------------------------------
    // 1. Valid drafts pass
    // -----------------------------------------------------------------------

    #[test]
    fn valid_draft_passes() {
        assert_eq!(validate(&valid_draft()), Ok(()));
    }

    // -----------------------------------------------------------------------
    // 2. Required fields
    // -----------------------------------------------------------------------

    #[test]
    fn empty_draft_fails_on_first_name_first() {
        let err = validate(&AddressDraft::default()).unwrap_err();
        assert_eq!(err, ValidationError::MissingFirstName);
    }

    #[test]
    fn missing_first_name_rejected() {
        let mut draft = valid_draft();
        draft.first_name = String::new();
        assert_eq!(
            validate(&draft),
            Err(ValidationError::MissingFirstName)
        );
    }

    #[test]
    fn whitespace_first_name_rejected() {
        let mut draft = valid_draft();
        draft.first_name = "   \t".into();
        assert_eq!(
            validate(&draft),
            Err(ValidationError::MissingFirstName)
        );
    }

    #[test]
    fn missing_last_name_rejected() {
        let mut draft = valid_draft();
        draft.last_name = String::new();
        assert_eq!(validate(&draft), Err(ValidationError::MissingLastName));
    }

    #[test]
    fn missing_email_rejected() {
        let mut draft = valid_draft();
        draft.email = String::new();
        assert_eq!(validate(&draft), Err(ValidationError::MissingEmail));
    }

    #[test]
    fn zero_phone_number_rejected() {
        let mut draft = valid_draft();
        draft.phone_number = 0;
        assert_eq!(validate(&draft), Err(ValidationError::MissingPhoneNumber));
    }

    // -----------------------------------------------------------------------
    // 3. Email format
    // -----------------------------------------------------------------------

    #[test]
    fn email_without_domain_dot_rejected() {
        let mut draft = valid_draft();
        draft.email = "jane@austin".into();
        assert_eq!(
            validate(&draft),
            Err(ValidationError::MalformedEmail("jane@austin".into()))
        );
    }

    #[test]
    fn email_without_at_rejected() {
        let mut draft = valid_draft();
        draft.email = "jane.austin.com".into();
        assert!(matches!(
            validate(&draft),
            Err(ValidationError::MalformedEmail(_))
        ));
    }

    #[test]
    fn email_dot_only_before_at_rejected() {
        let mut draft = valid_draft();
        draft.email = "jane.doe@austin".into();
        assert!(matches!(
            validate(&draft),
            Err(ValidationError::MalformedEmail(_))
        ));
    }

    #[test]
    fn email_with_empty_local_part_rejected() {
        let mut draft = valid_draft();
        draft.email = "@austin.com".into();
        assert!(matches!(
            validate(&draft),
            Err(ValidationError::MalformedEmail(_))
        ));
    }

    #[test]
    fn email_with_trailing_dot_rejected() {
        let mut draft = valid_draft();
        draft.email = "jane@austin.".into();
        assert!(matches!(
            validate(&draft),
            Err(ValidationError::MalformedEmail(_))
        ));
    }

    // -----------------------------------------------------------------------
    // 4. Ordering is deterministic
    // -----------------------------------------------------------------------

    #[test]
    fn first_name_violation_reported_before_email() {
        let draft = AddressDraft {
            first_name: String::new(),
            last_name: "Austin".into(),
            email: "not-valid".into(),
            phone_number: 0,
        };
        assert_eq!(validate(&draft), Err(ValidationError::MissingFirstName));
    }

    #[test]
    fn error_message_names_the_field() {
        let err = validate(&AddressDraft::default()).unwrap_err();
        assert!(err.to_string().contains("first_name"));
    }
}
