//! Contact form state.
use portfolio_core::contact::{ContactDraft, ContactForm, Field};
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

/// Actions available to modify the [`ContactFormState`].
#[derive(Debug)]
pub enum ContactFormAction {
    /// Sets the value of a field.
    SetField(Field, String),

    /// Validates the draft, submitting it if valid.
    Submit,
}

/// Contact form state for a single mount of the form.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ContactFormState {
    form: ContactForm,

    /// Draft handed off by a successful submit, to be delivered.
    submitted: Option<ContactDraft>,
}

impl ContactFormState {
    /// Draft accepted on submit.
    /// `None` until the form is submitted.
    pub fn submitted(&self) -> Option<&ContactDraft> {
        self.submitted.as_ref()
    }
}

impl Deref for ContactFormState {
    type Target = ContactForm;

    fn deref(&self) -> &Self::Target {
        &self.form
    }
}

impl Reducible for ContactFormState {
    type Action = ContactFormAction;

    #[tracing::instrument(level = "debug", skip(self))]
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut current = (*self).clone();
        match action {
            ContactFormAction::SetField(field, value) => {
                current.form.set_field(field, value);
            }
            ContactFormAction::Submit => match current.form.submit() {
                Ok(Some(draft)) => current.submitted = Some(draft),
                Ok(None) => {}
                Err(errors) => tracing::debug!(?errors, "invalid contact form"),
            },
        };

        current.into()
    }
}

pub type ContactFormReducer = UseReducerHandle<ContactFormState>;

/// Creates the state of a contact form, discarded when the component unmounts.
#[hook]
pub fn use_contact_form() -> ContactFormReducer {
    use_reducer(ContactFormState::default)
}

#[cfg(test)]
#[path = "./contact_form_test.rs"]
mod contact_form_test;
