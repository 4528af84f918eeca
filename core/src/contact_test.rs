use super::*;
use fake::faker::internet::raw::SafeEmail;
use fake::faker::lorem::raw::Sentence;
use fake::faker::name::raw::Name;
use fake::locales::EN;
use fake::Fake;

fn errors(expected: &[(Field, &'static str)]) -> ValidationErrors {
    expected.iter().copied().collect()
}

#[test]
fn validate_should_match_table() {
    let cases = [
        (
            ContactDraft::new("", "a@b.com", "hi"),
            errors(&[(Field::Name, NAME_REQUIRED)]),
        ),
        (
            ContactDraft::new("Sai", "not-an-email", "hi"),
            errors(&[(Field::Email, EMAIL_REQUIRED)]),
        ),
        (
            ContactDraft::new("Sai", "a@b.com", ""),
            errors(&[(Field::Message, MESSAGE_REQUIRED)]),
        ),
        (ContactDraft::new("Sai", "a@b.com", "hi"), errors(&[])),
    ];

    for (draft, expected) in cases {
        assert_eq!(expected, validate(&draft), "draft {draft:?}");
    }
}

#[test]
fn validate_empty_draft_should_fail_every_field() {
    let result = validate(&ContactDraft::default());
    assert_eq!(3, result.len());
    for field in Field::ALL {
        assert!(result.contains(field), "{field} should be invalid");
    }

    assert_eq!(Some("Name is required"), result.get(Field::Name));
    assert_eq!(Some("Valid email is required"), result.get(Field::Email));
    assert_eq!(Some("Message is required"), result.get(Field::Message));
}

#[test]
fn whitespace_only_fields_should_be_invalid() {
    let result = validate(&ContactDraft::new("  \t", " ", "\n\n"));
    assert!(result.contains(Field::Name));
    assert!(result.contains(Field::Email));
    assert!(result.contains(Field::Message));
}

#[test]
fn email_shape_should_be_checked() {
    let valid = ["a@b.co", "first.last@example.org", "x+tag@sub.domain.io"];
    for email in valid {
        let draft = ContactDraft::new("Sai", email, "hi");
        assert!(validate(&draft).is_valid(), "`{email}` should be valid");
    }

    let invalid = ["", "@b.com", "a@", "a@b", "a@.com", "a b@c", "a.b.c"];
    for email in invalid {
        let draft = ContactDraft::new("Sai", email, "hi");
        assert_eq!(
            Some(EMAIL_REQUIRED),
            validate(&draft).get(Field::Email),
            "`{email}` should be invalid"
        );
    }
}

#[test]
fn generated_drafts_should_be_valid() {
    for _ in 0..20 {
        let draft = ContactDraft::new(
            Name(EN).fake::<String>(),
            SafeEmail(EN).fake::<String>(),
            Sentence(EN, 1..10).fake::<String>(),
        );

        assert_eq!(Ok(()), submit(&draft), "draft {draft:?}");
    }
}

#[test]
fn draft_fields_should_be_in_form_order() {
    let draft = ContactDraft::new("Sai", "a@b.com", "hi");
    let fields = draft.fields().collect::<Vec<_>>();
    assert_eq!(
        vec![("name", "Sai"), ("email", "a@b.com"), ("message", "hi")],
        fields
    );
}

// ************
// *** form ***
// ************

#[test]
fn invalid_submit_should_keep_draft() {
    let mut form = ContactForm::new();
    form.set_field(Field::Name, "Sai");
    form.set_field(Field::Email, "not-an-email");
    form.set_field(Field::Message, "hi");
    let before = form.draft().cloned();

    let result = form.submit();
    assert_eq!(Err(errors(&[(Field::Email, EMAIL_REQUIRED)])), result);
    assert!(!form.is_submitted());
    assert_eq!(before.as_ref(), form.draft(), "draft should not be modified");
    assert_eq!(Some(EMAIL_REQUIRED), form.error(Field::Email));
    assert_eq!(None, form.error(Field::Name));
}

#[test]
fn editing_field_should_clear_only_its_error() {
    let mut form = ContactForm::new();
    assert!(form.submit().is_err());
    for field in Field::ALL {
        assert!(form.error(field).is_some());
    }

    form.set_field(Field::Name, "Sai");
    assert_eq!(None, form.error(Field::Name));
    assert_eq!(Some(EMAIL_REQUIRED), form.error(Field::Email));
    assert_eq!(Some(MESSAGE_REQUIRED), form.error(Field::Message));
}

#[test]
fn corrected_draft_should_resubmit() {
    let mut form = ContactForm::new();
    form.set_field(Field::Name, "Sai");
    form.set_field(Field::Email, "a@b");
    form.set_field(Field::Message, "hi");
    assert!(form.submit().is_err());

    form.set_field(Field::Email, "a@b.com");
    let draft = form.submit().expect("draft should be valid");
    assert_eq!(Some(ContactDraft::new("Sai", "a@b.com", "hi")), draft);
    assert!(form.is_submitted());
}

#[test]
fn submitted_should_be_terminal() {
    let mut form = ContactForm::new();
    form.set_field(Field::Name, "Sai");
    form.set_field(Field::Email, "a@b.com");
    form.set_field(Field::Message, "hi");
    assert!(matches!(form.submit(), Ok(Some(_))));
    assert_eq!(&FormState::Submitted, form.state());

    form.set_field(Field::Name, "");
    form.set_field(Field::Message, "another");
    assert!(form.is_submitted(), "edits should not revert submission");
    assert_eq!(None, form.draft());
    assert_eq!(Ok(None), form.submit(), "second submit should not hand off");
    assert!(form.is_submitted());
}
