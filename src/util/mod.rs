//! Pure helpers shared by the page controllers.

pub mod greeting;
pub mod validate;
