//! Application state and core logic

use crate::config::TuiConfig;
use crate::sink::{JsonlSink, SubmitSink, TracingSink};
use crate::state::{Gender, SignupForm, FIELD_AGREE_TERMS, FIELD_GENDER};
use crate::validate::{validate, FieldErrors};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current form values; persists across submissions
    pub form: SignupForm,
    /// Validation messages from the most recent submission attempt
    pub errors: FieldErrors,
    /// Feedback message for the status bar
    pub status_message: Option<String>,
    /// User configuration
    pub config: TuiConfig,
    /// Output channel for submitted records
    sink: Box<dyn SubmitSink>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance, picking the sink from config
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load()?;
        let sink: Box<dyn SubmitSink> = match &config.submit_log {
            Some(path) => Box::new(JsonlSink::new(path.clone())),
            None => Box::new(TracingSink),
        };
        Ok(Self::with_sink(config, sink))
    }

    /// Create an App with an explicit sink
    pub fn with_sink(config: TuiConfig, sink: Box<dyn SubmitSink>) -> Self {
        Self {
            form: SignupForm::new(),
            errors: FieldErrors::default(),
            status_message: None,
            config,
            sink,
            quit: false,
        }
    }

    /// Whether the app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_checkbox = self.form.active_field_index == FIELD_AGREE_TERMS;
        let on_gender = self.form.active_field_index == FIELD_GENDER;

        match key.code {
            // Global quit
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Esc => {
                self.quit = true;
            }
            // Submit shortcut works from anywhere
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await;
            }
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Enter => {
                if self.form.is_submit_row_active() {
                    self.submit().await;
                } else {
                    self.form.next_field();
                }
            }
            KeyCode::Char(' ') if on_checkbox => self.form.agree_terms.toggle(),
            KeyCode::Left if on_gender => self.form.gender.select(Gender::Male),
            KeyCode::Right if on_gender => self.form.gender.select(Gender::Female),
            KeyCode::Char('m') if on_gender => self.form.gender.select(Gender::Male),
            KeyCode::Char('f') if on_gender => self.form.gender.select(Gender::Female),
            // Text input (only when a text field is active)
            KeyCode::Char(c) if self.form.is_text_row_active() => {
                if let Some(field) = self.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace if self.form.is_text_row_active() => {
                if let Some(field) = self.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Run all validators against the current form values and, if every
    /// field passes, emit the collected record through the sink.
    ///
    /// The error map is replaced wholesale on every attempt, and the form
    /// itself is never mutated here: the user may edit and resubmit.
    pub async fn submit(&mut self) {
        self.errors = validate(&self.form);

        if !self.errors.is_empty() {
            tracing::debug!("submission blocked by validation");
            self.status_message = Some("Please fix the highlighted fields".to_string());
            return;
        }

        // A passing gender validator guarantees record() is Some
        if let Some(record) = self.form.record() {
            match self.sink.emit(&record).await {
                Ok(()) => {
                    self.status_message = Some("Submitted!".to_string());
                }
                Err(e) => {
                    tracing::warn!("submit sink failed: {e}");
                    self.status_message = Some(format!("Failed to record submission: {e}"));
                }
            }
        }
    }
}
