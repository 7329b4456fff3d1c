//! Signup form state and the submitted record

use super::field::{FormField, Gender};
use serde::Serialize;

/// Row indices for the signup form. The submit button occupies the last row.
pub const FIELD_NAME: usize = 0;
pub const FIELD_EMAIL: usize = 1;
pub const FIELD_AGREE_TERMS: usize = 2;
pub const FIELD_GENDER: usize = 3;
pub const SUBMIT_ROW: usize = 4;

/// Current values of all input fields. Persists across submissions; nothing
/// clears it implicitly.
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub name: FormField,
    pub email: FormField,
    pub agree_terms: FormField,
    pub gender: FormField,
    pub active_field_index: usize,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name"),
            email: FormField::text("email", "Email"),
            agree_terms: FormField::checkbox("agreeTerms", "I agree to the terms"),
            gender: FormField::choice("gender", "Gender"),
            active_field_index: FIELD_NAME,
        }
    }

    /// Total navigable rows (four fields plus the submit button)
    pub fn field_count(&self) -> usize {
        5
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Returns true if the active row is a text field
    pub fn is_text_row_active(&self) -> bool {
        matches!(self.active_field_index, FIELD_NAME | FIELD_EMAIL)
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            FIELD_NAME => Some(&self.name),
            FIELD_EMAIL => Some(&self.email),
            FIELD_AGREE_TERMS => Some(&self.agree_terms),
            FIELD_GENDER => Some(&self.gender),
            _ => None,
        }
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            FIELD_NAME => Some(&mut self.name),
            FIELD_EMAIL => Some(&mut self.email),
            FIELD_AGREE_TERMS => Some(&mut self.agree_terms),
            FIELD_GENDER => Some(&mut self.gender),
            _ => None,
        }
    }

    /// Build the record for emission. Returns None until a gender has been
    /// selected; validation guarantees one is before this is used.
    pub fn record(&self) -> Option<SubmittedRecord> {
        Some(SubmittedRecord {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            agree_terms: self.agree_terms.is_checked(),
            gender: self.gender.selected()?,
        })
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

/// The structured output emitted on a fully valid submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedRecord {
    pub name: String,
    pub email: String,
    #[serde(rename = "agreeTerms")]
    pub agree_terms: bool,
    pub gender: Gender,
}
