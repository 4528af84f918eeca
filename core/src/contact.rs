//! Contact form.
//!
//! Validation is a pure function of the [`ContactDraft`].
//! [`ContactForm`] tracks a single mount of the form:
//! editing until a valid submission, then submitted for good.
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Valid email is required";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Minimal `local@domain.tld` shape check.
const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

// *************
// *** Field ***
// *************

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Form field name, as posted.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// *************
// *** Draft ***
// *************

/// In progress contents of the contact form.
#[derive(Serialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Field name and value pairs, in form order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        Field::ALL
            .into_iter()
            .map(move |field| (field.as_str(), self.get(field)))
    }
}

// ******************
// *** Validation ***
// ******************

/// Error messages of invalid fields.
/// Empty if the draft is valid.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ValidationErrors(IndexMap<Field, &'static str>);

impl ValidationErrors {
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, *msg))
    }

    fn remove(&mut self, field: Field) {
        self.0.shift_remove(&field);
    }
}

impl FromIterator<(Field, &'static str)> for ValidationErrors {
    fn from_iter<T: IntoIterator<Item = (Field, &'static str)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates the shape of the draft.
pub fn validate(draft: &ContactDraft) -> ValidationErrors {
    let mut errors = IndexMap::new();
    if is_blank(&draft.name) {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    if draft.email.is_empty() || !email_regex().is_match(&draft.email) {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    }

    if is_blank(&draft.message) {
        errors.insert(Field::Message, MESSAGE_REQUIRED);
    }

    ValidationErrors(errors)
}

/// Validates the draft for submission.
pub fn submit(draft: &ContactDraft) -> Result<(), ValidationErrors> {
    let errors = validate(draft);
    if errors.is_valid() {
        Ok(())
    } else {
        Err(errors)
    }
}

// ************
// *** Form ***
// ************

#[derive(Clone, PartialEq, Debug)]
pub enum FormState {
    Editing {
        draft: ContactDraft,
        errors: ValidationErrors,
    },

    /// Terminal.
    Submitted,
}

/// Contact form for a single mount.
#[derive(Clone, PartialEq, Debug)]
pub struct ContactForm {
    state: FormState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            state: FormState::Editing {
                draft: ContactDraft::default(),
                errors: ValidationErrors::default(),
            },
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state, FormState::Submitted)
    }

    /// Current draft.
    /// `None` once submitted.
    pub fn draft(&self) -> Option<&ContactDraft> {
        match &self.state {
            FormState::Editing { draft, .. } => Some(draft),
            FormState::Submitted => None,
        }
    }

    /// Errors of the last submit attempt.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        match &self.state {
            FormState::Editing { errors, .. } => errors.get(field),
            FormState::Submitted => None,
        }
    }

    /// Updates a field of the draft, clearing its stale error.
    /// Ignored once submitted.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        match &mut self.state {
            FormState::Editing { draft, errors } => {
                draft.set(field, value);
                errors.remove(field);
            }
            FormState::Submitted => {
                tracing::debug!(%field, "ignoring edit of submitted form");
            }
        }
    }

    /// Attempts to submit the draft.
    ///
    /// # Returns
    /// + `Ok(Some(draft))` with the validated draft to hand off; the form is now submitted.
    /// + `Ok(None)` if the form was already submitted.
    /// + `Err(errors)` if the draft is invalid; the draft is kept as is.
    pub fn submit(&mut self) -> Result<Option<ContactDraft>, ValidationErrors> {
        let FormState::Editing { draft, errors } = &mut self.state else {
            return Ok(None);
        };

        if let Err(invalid) = submit(draft) {
            *errors = invalid.clone();
            return Err(invalid);
        }

        let draft = std::mem::take(draft);
        self.state = FormState::Submitted;
        Ok(Some(draft))
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "./contact_test.rs"]
mod contact_test;
