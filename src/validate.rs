//! Field validators and the per-field error map
//!
//! Validators are pure functions: each takes the current field value and
//! returns the fixed message on failure. They run only on a submission
//! attempt, never on keystrokes.

use crate::state::{Gender, SignupForm};

/// Fixed failure message for the name field
pub const NAME_ERROR: &str = "Name must be at least 3 characters.";
/// Fixed failure message for the email field
pub const EMAIL_ERROR: &str = "Email must be valid.";
/// Fixed failure message for the terms checkbox
pub const AGREE_TERMS_ERROR: &str = "You must agree to the terms.";
/// Fixed failure message for the gender radio group
pub const GENDER_ERROR: &str = "You must select a gender.";

/// Name passes when its trimmed length is at least 3. No upper bound.
pub fn validate_name(value: &str) -> Result<(), &'static str> {
    if value.trim().chars().count() >= 3 {
        Ok(())
    } else {
        Err(NAME_ERROR)
    }
}

/// Email passes when it has the shape `local@domain.tld`: exactly one `@`,
/// a non-empty local part, a domain of at least two non-empty dot-separated
/// labels, and no whitespace. `+` aliases and multi-label domains like
/// `example.co.uk` are accepted.
pub fn validate_email(value: &str) -> Result<(), &'static str> {
    if email_shape_ok(value) {
        Ok(())
    } else {
        Err(EMAIL_ERROR)
    }
}

fn email_shape_ok(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    let first = labels.next();
    let mut rest = labels.peekable();
    // Domain needs at least two labels, all non-empty
    first.is_some_and(|l| !l.is_empty())
        && rest.peek().is_some()
        && rest.all(|l| !l.is_empty())
}

/// The terms checkbox must be checked.
pub fn validate_agree_terms(checked: bool) -> Result<(), &'static str> {
    if checked {
        Ok(())
    } else {
        Err(AGREE_TERMS_ERROR)
    }
}

/// A gender option must be selected.
pub fn validate_gender(selected: Option<Gender>) -> Result<(), &'static str> {
    if selected.is_some() {
        Ok(())
    } else {
        Err(GENDER_ERROR)
    }
}

/// Per-field validation failure messages from the most recent submission
/// attempt. Replaced wholesale on every attempt; a field carries a message
/// iff its validator rejected the value at that moment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub agree_terms: Option<&'static str>,
    pub gender: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.agree_terms.is_none()
            && self.gender.is_none()
    }
}

/// Run all four validators against the current form values
pub fn validate(form: &SignupForm) -> FieldErrors {
    FieldErrors {
        name: validate_name(form.name.as_text()).err(),
        email: validate_email(form.email.as_text()).err(),
        agree_terms: validate_agree_terms(form.agree_terms.is_checked()).err(),
        gender: validate_gender(form.gender.selected()).err(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_rejects_empty() {
            assert_eq!(validate_name(""), Err(NAME_ERROR));
        }

        #[test]
        fn test_rejects_blank() {
            assert_eq!(validate_name("   "), Err(NAME_ERROR));
        }

        #[test]
        fn test_rejects_two_chars() {
            assert_eq!(validate_name("Jo"), Err(NAME_ERROR));
        }

        #[test]
        fn test_rejects_padded_short_name() {
            // Trimmed length is what counts
            assert_eq!(validate_name("  Jo  "), Err(NAME_ERROR));
        }

        #[test]
        fn test_accepts_three_chars() {
            assert_eq!(validate_name("Joe"), Ok(()));
        }

        #[test]
        fn test_accepts_full_name() {
            assert_eq!(validate_name("John Doe"), Ok(()));
        }

        #[test]
        fn test_accepts_very_long_name() {
            let long = "a".repeat(1000);
            assert_eq!(validate_name(&long), Ok(()));
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_accepts_simple_address() {
            assert_eq!(validate_email("johndoe@gmail.com"), Ok(()));
        }

        #[test]
        fn test_accepts_plus_alias_and_multi_label_domain() {
            assert_eq!(validate_email("test.name+alias@example.co.uk"), Ok(()));
        }

        #[test]
        fn test_rejects_missing_at() {
            assert_eq!(validate_email("testexample.com"), Err(EMAIL_ERROR));
        }

        #[test]
        fn test_rejects_empty() {
            assert_eq!(validate_email(""), Err(EMAIL_ERROR));
        }

        #[test]
        fn test_rejects_missing_local_part() {
            assert_eq!(validate_email("@example.com"), Err(EMAIL_ERROR));
        }

        #[test]
        fn test_rejects_domain_without_dot() {
            assert_eq!(validate_email("test@example"), Err(EMAIL_ERROR));
        }

        #[test]
        fn test_rejects_empty_domain_label() {
            assert_eq!(validate_email("test@example..com"), Err(EMAIL_ERROR));
            assert_eq!(validate_email("test@.com"), Err(EMAIL_ERROR));
            assert_eq!(validate_email("test@example.com."), Err(EMAIL_ERROR));
        }

        #[test]
        fn test_rejects_double_at() {
            assert_eq!(validate_email("test@foo@example.com"), Err(EMAIL_ERROR));
        }

        #[test]
        fn test_rejects_whitespace() {
            assert_eq!(validate_email("test @example.com"), Err(EMAIL_ERROR));
        }
    }

    mod agree_terms {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_rejects_unchecked() {
            assert_eq!(validate_agree_terms(false), Err(AGREE_TERMS_ERROR));
        }

        #[test]
        fn test_accepts_checked() {
            assert_eq!(validate_agree_terms(true), Ok(()));
        }
    }

    mod gender {
        use super::*;
        use pretty_assertions::assert_eq;
        use crate::state::Gender;

        #[test]
        fn test_rejects_unselected() {
            assert_eq!(validate_gender(None), Err(GENDER_ERROR));
        }

        #[test]
        fn test_accepts_either_option() {
            assert_eq!(validate_gender(Some(Gender::Male)), Ok(()));
            assert_eq!(validate_gender(Some(Gender::Female)), Ok(()));
        }
    }

    mod aggregate {
        use super::*;
        use pretty_assertions::assert_eq;
        use crate::state::{Gender, SignupForm};

        fn valid_form() -> SignupForm {
            let mut form = SignupForm::new();
            form.name.set_text("John Doe".to_string());
            form.email.set_text("johndoe@gmail.com".to_string());
            form.agree_terms.toggle();
            form.gender.select(Gender::Male);
            form
        }

        #[test]
        fn test_valid_form_has_no_errors() {
            let errors = validate(&valid_form());
            assert!(errors.is_empty());
            assert_eq!(errors, FieldErrors::default());
        }

        #[test]
        fn test_pristine_form_fails_everything() {
            let errors = validate(&SignupForm::new());
            assert_eq!(
                errors,
                FieldErrors {
                    name: Some(NAME_ERROR),
                    email: Some(EMAIL_ERROR),
                    agree_terms: Some(AGREE_TERMS_ERROR),
                    gender: Some(GENDER_ERROR),
                }
            );
        }

        #[test]
        fn test_short_name_is_the_only_error() {
            let mut form = valid_form();
            form.name.set_text("Jo".to_string());
            let errors = validate(&form);
            assert_eq!(errors.name, Some(NAME_ERROR));
            assert_eq!(errors.email, None);
            assert_eq!(errors.agree_terms, None);
            assert_eq!(errors.gender, None);
        }

        #[test]
        fn test_unchecked_terms_flagged_even_when_rest_valid() {
            let mut form = valid_form();
            form.agree_terms.toggle();
            let errors = validate(&form);
            assert_eq!(errors.agree_terms, Some(AGREE_TERMS_ERROR));
            assert!(!errors.is_empty());
        }

        #[test]
        fn test_missing_gender_flagged_even_when_rest_valid() {
            let mut form = valid_form();
            form.gender.clear();
            let errors = validate(&form);
            assert_eq!(errors.gender, Some(GENDER_ERROR));
        }

        #[test]
        fn test_revalidation_supersedes_prior_errors() {
            let mut form = SignupForm::new();
            let first = validate(&form);
            assert_eq!(first.name, Some(NAME_ERROR));

            form.name.set_text("John Doe".to_string());
            form.email.set_text("johndoe@gmail.com".to_string());
            form.agree_terms.toggle();
            form.gender.select(Gender::Female);
            let second = validate(&form);
            assert!(second.is_empty());
        }
    }
}
