//! Render requests and their validation.

use serde::{Deserialize, Serialize};

use crate::error::{
    ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
use crate::options::RenderOptions;

/// A text to render together with the options to render it with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSpec {
    /// Characters to spell out, in order.
    pub text: String,
    /// Render options.
    #[serde(default)]
    pub options: RenderOptions,
}

impl OutputSpec {
    /// Creates a request with default options.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: RenderOptions::default(),
        }
    }

    /// Creates a request with the given options.
    pub fn with_options(text: impl Into<String>, options: RenderOptions) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    /// Validates the request.
    ///
    /// Errors make the request unrenderable; warnings are informational.
    pub fn validate(&self) -> ValidationResult {
        let mut result = validate_options(&self.options);
        if self.text.is_empty() {
            result.add_error(ValidationError::with_path(
                ErrorCode::EmptyText,
                "text to render must contain at least one character",
                "text",
            ));
        }
        result
    }
}

/// Validates render options on their own.
pub fn validate_options(options: &RenderOptions) -> ValidationResult {
    let mut result = ValidationResult::default();

    if options.sound_dir.is_none() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::SoundDirUnset,
            "no clip directory configured",
            "options.sound_dir",
        ));
    }

    let content_type = options.content_type.trim();
    if content_type.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyContentType,
            "content type must not be empty",
            "options.content_type",
        ));
    } else {
        match content_type.split_once('/') {
            Some((kind, subtype)) if !kind.is_empty() && !subtype.is_empty() => {
                if !kind.eq_ignore_ascii_case("audio") {
                    result.add_warning(ValidationWarning::with_path(
                        WarningCode::NonAudioContentType,
                        format!("'{}' is not an audio media type", content_type),
                        "options.content_type",
                    ));
                }
            }
            _ => result.add_error(ValidationError::with_path(
                ErrorCode::InvalidContentType,
                format!("'{}' is not of the form type/subtype", content_type),
                "options.content_type",
            )),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let spec = OutputSpec::with_options(
            "abC123#",
            RenderOptions::distorted().with_sound_dir("clips"),
        );
        let result = spec.validate();
        assert!(result.is_ok());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_empty_text() {
        let result = OutputSpec::new("").validate();
        assert!(!result.is_ok());
        assert_eq!(result.errors[0].code, ErrorCode::EmptyText);
    }

    #[test]
    fn test_missing_sound_dir_warns() {
        let result = OutputSpec::new("a").validate();
        assert!(result.is_ok());
        assert_eq!(result.warnings[0].code, WarningCode::SoundDirUnset);
    }

    #[test]
    fn test_content_type_checks() {
        let mut options = RenderOptions::default().with_sound_dir("clips");

        options.content_type = "  ".to_string();
        assert_eq!(
            validate_options(&options).errors[0].code,
            ErrorCode::EmptyContentType
        );

        options.content_type = "wav".to_string();
        assert_eq!(
            validate_options(&options).errors[0].code,
            ErrorCode::InvalidContentType
        );

        options.content_type = "application/octet-stream".to_string();
        let result = validate_options(&options);
        assert!(result.is_ok());
        assert_eq!(result.warnings[0].code, WarningCode::NonAudioContentType);

        options.content_type = "audio/wav".to_string();
        assert!(validate_options(&options).warnings.is_empty());
    }

    #[test]
    fn test_request_json_defaults_options() {
        let spec: OutputSpec = serde_json::from_str(r#"{ "text": "Ab" }"#).unwrap();
        assert_eq!(spec, OutputSpec::new("Ab"));
    }
}
