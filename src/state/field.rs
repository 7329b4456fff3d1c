//! Form field value objects

use serde::{Deserialize, Serialize};

/// Gender selection for the radio group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Label shown next to the radio option
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Checkbox(bool),
    /// Single-select radio group. Holding at most one `Gender` makes
    /// "only one option selected" impossible to violate.
    Choice(Option<Gender>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new checkbox field (unchecked)
    pub fn checkbox(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Checkbox(false),
        }
    }

    /// Create a new radio-group field (nothing selected)
    pub fn choice(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Choice(None),
        }
    }

    /// Get the text value (returns empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Whether the checkbox is checked (false for non-checkbox fields)
    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Checkbox(true))
    }

    /// The currently selected choice (None for non-choice fields)
    pub fn selected(&self) -> Option<Gender> {
        match self.value {
            FieldValue::Choice(g) => g,
            _ => None,
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Toggle the checkbox value
    pub fn toggle(&mut self) {
        if let FieldValue::Checkbox(checked) = &mut self.value {
            *checked = !*checked;
        }
    }

    /// Select a radio option, replacing any previous selection
    pub fn select(&mut self, gender: Gender) {
        if let FieldValue::Choice(current) = &mut self.value {
            *current = Some(gender);
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Checkbox(checked) => *checked = false,
            FieldValue::Choice(g) => *g = None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Checkbox(checked) => {
                let mark = if *checked { "[x]" } else { "[ ]" };
                mark.to_string()
            }
            FieldValue::Choice(g) => match g {
                Some(g) => g.label().to_string(),
                None => "(none)".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_editing() {
        let mut field = FormField::text("name", "Name");
        field.push_char('J');
        field.push_char('o');
        assert_eq!(field.as_text(), "Jo");
        field.pop_char();
        assert_eq!(field.as_text(), "J");
        field.clear();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_checkbox_toggles() {
        let mut field = FormField::checkbox("agreeTerms", "I agree to the terms");
        assert!(!field.is_checked());
        field.toggle();
        assert!(field.is_checked());
        field.toggle();
        assert!(!field.is_checked());
    }

    #[test]
    fn test_checkbox_ignores_text_input() {
        let mut field = FormField::checkbox("agreeTerms", "I agree to the terms");
        field.push_char('x');
        assert_eq!(field.as_text(), "");
        assert!(!field.is_checked());
    }

    #[test]
    fn test_choice_starts_unselected() {
        let field = FormField::choice("gender", "Gender");
        assert!(field.selected().is_none());
    }

    #[test]
    fn test_choice_select_replaces_previous() {
        let mut field = FormField::choice("gender", "Gender");
        field.select(Gender::Male);
        assert_eq!(field.selected(), Some(Gender::Male));
        field.select(Gender::Female);
        assert_eq!(field.selected(), Some(Gender::Female));
    }

    #[test]
    fn test_clear_resets_choice() {
        let mut field = FormField::choice("gender", "Gender");
        field.select(Gender::Male);
        field.clear();
        assert!(field.selected().is_none());
    }

    #[test]
    fn test_display_values() {
        let mut text = FormField::text("name", "Name");
        text.set_text("John".to_string());
        assert_eq!(text.display_value(), "John");

        let mut checkbox = FormField::checkbox("agreeTerms", "I agree to the terms");
        assert_eq!(checkbox.display_value(), "[ ]");
        checkbox.toggle();
        assert_eq!(checkbox.display_value(), "[x]");

        let mut choice = FormField::choice("gender", "Gender");
        assert_eq!(choice.display_value(), "(none)");
        choice.select(Gender::Female);
        assert_eq!(choice.display_value(), "Female");
    }

    #[test]
    fn test_gender_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Gender::Male).unwrap(),
            "\"male\"".to_string()
        );
        assert_eq!(
            serde_json::to_string(&Gender::Female).unwrap(),
            "\"female\"".to_string()
        );
    }
}
