//! Utility functions for code generation and input checking.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Redirect target validation

pub mod code_generator;
pub mod url_validator;
