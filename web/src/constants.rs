//! Constant values.
/// Id of the element the splash screen renders into.
pub static SPLASH_ID: &str = "splash";

/// Displayed once the contact form is submitted.
pub static SUBMITTED_MESSAGE: &str = "Thank you! Your message has been sent.";
