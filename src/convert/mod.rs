//! The conversion dispatcher.
//!
//! Strategies run in a fixed priority order: enumeration lookup first
//! and exclusively for enum types, otherwise the factory, then the
//! constructor for whatever the factory declines. Every fault passes
//! through exactly one translation point into [`ConvertError`].

pub mod constructor;
pub mod enumeration;
pub mod factory;

use std::sync::Arc;

use crate::context::{ArgumentHandle, ParserContext};
use crate::core::errors::{ConvertError, Result};
use crate::core::types::{Fault, Resolution, TypeSpec};

/// Converts raw argument text into `T` according to an immutable
/// [`TypeSpec`].
///
/// A converter is created once per registered argument and reused for
/// every value that argument receives. It holds no mutable state, so a
/// single instance may serve concurrent conversions without locking.
pub struct TypedConverter<T> {
    spec: Arc<TypeSpec<T>>,
}

impl<T> TypedConverter<T> {
    pub fn new(spec: TypeSpec<T>) -> Self {
        Self {
            spec: Arc::new(spec),
        }
    }

    /// Build a converter around a spec that is already shared.
    pub fn from_shared(spec: Arc<TypeSpec<T>>) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &TypeSpec<T> {
        &self.spec
    }

    /// Convert `value`, walking the strategies in priority order.
    ///
    /// Exactly one of a typed value, a user-input error, or a
    /// configuration error comes out of every call. Repeated calls with
    /// the same input produce equal outcomes.
    pub fn convert(
        &self,
        parser: &ParserContext,
        argument: &ArgumentHandle,
        value: &str,
    ) -> Result<T> {
        let outcome = if let Some(table) = self.spec.enum_table() {
            // Enumerations are terminal: no other strategy runs for them.
            enumeration::resolve(table, value)
        } else {
            match factory::resolve(self.spec.factory(), value) {
                Resolution::Resolved(converted) => Ok(converted),
                Resolution::Failed(fault) => Err(fault),
                Resolution::Declined => {
                    log::debug!(
                        "factory declined for {}, trying constructor",
                        self.spec.simple_name()
                    );
                    constructor::resolve(self.spec.constructor(), value)
                }
            }
        };
        outcome.map_err(|fault| self.translate(parser, argument, value, fault))
    }

    /// Single translation point from strategy faults to the public
    /// error type.
    fn translate(
        &self,
        parser: &ParserContext,
        argument: &ArgumentHandle,
        value: &str,
        fault: Fault,
    ) -> ConvertError {
        match fault {
            Fault::Input { cause } => ConvertError::invalid_value(
                value,
                self.spec.simple_name(),
                cause,
                parser.clone(),
                argument.clone(),
            ),
            Fault::Setup { cause } => {
                ConvertError::configuration(self.spec.simple_name(), cause)
            }
        }
    }
}

impl<T> Clone for TypedConverter<T> {
    fn clone(&self) -> Self {
        Self {
            spec: Arc::clone(&self.spec),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{FactoryMethod, StringConstructor};

    fn anon<T>(converter: &TypedConverter<T>, value: &str) -> Result<T> {
        converter.convert(
            &ParserContext::anonymous(),
            &ArgumentHandle::anonymous(),
            value,
        )
    }

    #[test]
    fn enumeration_is_terminal_even_with_other_capabilities() {
        // A spec that is an enumeration never reaches its factory or
        // constructor, whatever the input.
        let spec = TypeSpec::builder("Color")
            .enumeration([("RED", 0u8), ("BLUE", 1u8)])
            .factory(FactoryMethod::parsing(|raw: &str| raw.parse::<u8>()))
            .constructor(StringConstructor::new(|_| 99u8))
            .build();
        let converter = TypedConverter::new(spec);

        assert_eq!(0, anon(&converter, "RED").unwrap());
        // "7" would parse through the factory; the enum table rejects it.
        let err = anon(&converter, "7").unwrap_err();
        assert!(err.is_user_input());
    }

    #[test]
    fn factory_wins_over_constructor() {
        let spec = TypeSpec::builder("Num")
            .factory(FactoryMethod::fallible(|_| Ok(1u8)))
            .constructor(StringConstructor::new(|_| 2u8))
            .build();
        let converter = TypedConverter::new(spec);
        assert_eq!(1, anon(&converter, "anything").unwrap());
    }

    #[test]
    fn translation_embeds_caller_context() {
        let converter = TypedConverter::new(
            TypeSpec::builder("u8")
                .factory(FactoryMethod::parsing(|raw: &str| raw.parse::<u8>()))
                .build(),
        );
        let err = converter
            .convert(
                &ParserContext::new("prog"),
                &ArgumentHandle::new("--count"),
                "many",
            )
            .unwrap_err();
        assert_eq!(Some("--count"), err.argument().unwrap().label());
        assert_eq!(Some("prog"), err.parser().unwrap().label());
    }

    #[test]
    fn cloned_converters_share_one_spec() {
        let converter = TypedConverter::new(
            TypeSpec::builder("u8")
                .factory(FactoryMethod::parsing(|raw: &str| raw.parse::<u8>()))
                .build(),
        );
        let clone = converter.clone();
        assert_eq!(anon(&converter, "7").unwrap(), anon(&clone, "7").unwrap());
    }
}
