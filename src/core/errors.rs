//! Shared error types for text-to-value conversion.

use thiserror::Error;

use crate::context::{ArgumentHandle, ParserContext};

/// Two-tier error for conversion attempts.
///
/// `InvalidValue` is the recoverable tier: the person typing the
/// argument supplied text the target type rejects, and the message is
/// meant to be shown to them. `Configuration` is the fatal tier: the
/// target type was registered without a usable conversion path, which
/// no end user can fix. Callers display the first and let the second
/// propagate.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The supplied text could not be converted to the target type.
    ///
    /// The display shape is fixed and rendered with `std::fmt`, which
    /// is locale-invariant, so the message is stable across
    /// environments.
    #[error("could not convert '{value}' to {type_name} ({cause})")]
    InvalidValue {
        value: String,
        type_name: &'static str,
        cause: String,
        parser: ParserContext,
        argument: ArgumentHandle,
    },

    /// The target type offers no usable conversion path.
    #[error("no usable text conversion for {type_name} ({cause})")]
    Configuration {
        type_name: &'static str,
        cause: String,
    },
}

impl ConvertError {
    /// Create a user-input error carrying the caller's context.
    pub fn invalid_value(
        value: impl Into<String>,
        type_name: &'static str,
        cause: impl Into<String>,
        parser: ParserContext,
        argument: ArgumentHandle,
    ) -> Self {
        Self::InvalidValue {
            value: value.into(),
            type_name,
            cause: cause.into(),
            parser,
            argument,
        }
    }

    /// Create a configuration error.
    pub fn configuration(type_name: &'static str, cause: impl Into<String>) -> Self {
        Self::Configuration {
            type_name,
            cause: cause.into(),
        }
    }

    /// True for errors caused by what the user typed.
    pub fn is_user_input(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }

    /// True for errors caused by how the argument was registered.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Simple name of the target type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::InvalidValue { type_name, .. } => type_name,
            Self::Configuration { type_name, .. } => type_name,
        }
    }

    /// Message of the underlying cause.
    pub fn cause(&self) -> &str {
        match self {
            Self::InvalidValue { cause, .. } => cause,
            Self::Configuration { cause, .. } => cause,
        }
    }

    /// The rejected input text, for user-input errors.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { value, .. } => Some(value),
            Self::Configuration { .. } => None,
        }
    }

    pub fn parser(&self) -> Option<&ParserContext> {
        match self {
            Self::InvalidValue { parser, .. } => Some(parser),
            Self::Configuration { .. } => None,
        }
    }

    pub fn argument(&self) -> Option<&ArgumentHandle> {
        match self {
            Self::InvalidValue { argument, .. } => Some(argument),
            Self::Configuration { .. } => None,
        }
    }

    /// Message with the argument identity prepended, the way the
    /// surrounding parser presents conversion failures to the user.
    pub fn contextual_message(&self) -> String {
        match self.argument().and_then(ArgumentHandle::label) {
            Some(label) => format!("argument {label}: {self}"),
            None => self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_display_has_fixed_shape() {
        let err = ConvertError::invalid_value(
            "0x100",
            "i32",
            "invalid digit found in string",
            ParserContext::anonymous(),
            ArgumentHandle::anonymous(),
        );
        assert_eq!(
            "could not convert '0x100' to i32 (invalid digit found in string)",
            err.to_string()
        );
    }

    #[test]
    fn classification_is_disjoint() {
        let user = ConvertError::invalid_value(
            "x",
            "u8",
            "bad",
            ParserContext::anonymous(),
            ArgumentHandle::anonymous(),
        );
        let setup = ConvertError::configuration("Widget", "no conversion path");
        assert!(user.is_user_input() && !user.is_configuration());
        assert!(setup.is_configuration() && !setup.is_user_input());
    }

    #[test]
    fn accessors_expose_error_parts() {
        let err = ConvertError::invalid_value(
            "zzz",
            "u16",
            "invalid digit found in string",
            ParserContext::new("prog"),
            ArgumentHandle::new("--port"),
        );
        assert_eq!(Some("zzz"), err.value());
        assert_eq!("u16", err.type_name());
        assert_eq!("invalid digit found in string", err.cause());
        assert_eq!(Some("prog"), err.parser().unwrap().label());
        assert_eq!(Some("--port"), err.argument().unwrap().label());
    }

    #[test]
    fn contextual_message_prefixes_argument_label() {
        let err = ConvertError::invalid_value(
            "five",
            "u8",
            "invalid digit found in string",
            ParserContext::new("prog"),
            ArgumentHandle::new("--retries"),
        );
        assert_eq!(
            "argument --retries: could not convert 'five' to u8 (invalid digit found in string)",
            err.contextual_message()
        );
    }

    #[test]
    fn contextual_message_without_label_is_the_plain_message() {
        let err = ConvertError::invalid_value(
            "five",
            "u8",
            "invalid digit found in string",
            ParserContext::anonymous(),
            ArgumentHandle::anonymous(),
        );
        assert_eq!(err.to_string(), err.contextual_message());

        let setup = ConvertError::configuration("Widget", "no conversion path");
        assert_eq!(setup.to_string(), setup.contextual_message());
    }
}
