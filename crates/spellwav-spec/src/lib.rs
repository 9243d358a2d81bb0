//! spellwav request types
//!
//! This crate holds the types shared by the spellwav audio backend and its
//! command-line front end: render options, render requests, request
//! validation, and the error-code trait every backend error implements.
//!
//! # Example
//!
//! ```
//! use spellwav_spec::{CapitalPlacement, OutputSpec, RenderOptions};
//!
//! let options = RenderOptions::distorted()
//!     .with_sound_dir("/usr/share/spellwav/en")
//!     .with_capital(CapitalPlacement::After);
//! let spec = OutputSpec::with_options("abC123#", options);
//!
//! assert!(spec.validate().is_ok());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error codes, validation results, and the [`BackendError`] trait
//! - [`options`]: [`RenderOptions`] and [`CapitalPlacement`]
//! - [`request`]: [`OutputSpec`] and validation

pub mod error;
pub mod options;
pub mod request;

pub use error::{
    BackendError, ErrorCode, GenerationError, SpecError, ValidationError, ValidationResult,
    ValidationWarning, WarningCode,
};
pub use options::{CapitalPlacement, RenderOptions, DEFAULT_CONTENT_TYPE};
pub use request::{validate_options, OutputSpec};
