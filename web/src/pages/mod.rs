//! Content pages.
pub mod about;
pub mod contact;
pub mod experience;
pub mod home;
pub mod not_found;
pub mod projects;
pub mod skills;

pub use about::About;
pub use contact::Contact;
pub use experience::Experience;
pub use home::Home;
pub use not_found::NotFound;
pub use projects::Projects;
pub use skills::Skills;
