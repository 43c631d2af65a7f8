pub mod error;
pub mod formatting;
pub mod logger;
pub mod validation;
pub mod validators;
