//! CLI command implementations

pub mod filename;
pub mod inspect;
pub mod json_output;
pub mod say;
