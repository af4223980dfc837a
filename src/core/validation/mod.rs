//! Validation and filtering system
//!
//! A declarative way of validating and filtering record payloads before they
//! reach the handlers, and before any record store call is made.

pub mod config;
pub mod extractor;
pub mod filters;
pub mod validators;

pub use config::EntityValidationConfig;
pub use extractor::{Operation, ValidatableEntity, Validated};
