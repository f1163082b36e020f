//! Builtin specs for standard library types.
//!
//! Numeric and similar types go through the factory path with their
//! `FromStr` implementation as the parse function; text-like types go
//! through the constructor path, where construction cannot fail.

use std::path::PathBuf;
use std::str::FromStr;

use crate::core::types::{FactoryMethod, StringConstructor, TypeSpec};
use crate::registry::ConverterRegistry;

/// Spec for any type whose `FromStr` implementation is its parse
/// factory.
pub fn from_str_spec<T>(simple_name: &'static str) -> TypeSpec<T>
where
    T: FromStr + 'static,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    TypeSpec::builder(simple_name)
        .factory(FactoryMethod::parsing(T::from_str))
        .build()
}

/// Spec for a type constructed infallibly from text.
fn owned_text_spec<T, F>(simple_name: &'static str, construct: F) -> TypeSpec<T>
where
    F: Fn(&str) -> T + Send + Sync + 'static,
{
    TypeSpec::builder(simple_name)
        .constructor(StringConstructor::new(construct))
        .build()
}

macro_rules! register_parsed {
    ($registry:expr, $($ty:ty => $name:literal),+ $(,)?) => {
        $($registry.register(from_str_spec::<$ty>($name));)+
    };
}

/// Register specs for the standard types into `registry`.
pub fn register_builtins(registry: &ConverterRegistry) {
    register_parsed!(registry,
        i8 => "i8",
        i16 => "i16",
        i32 => "i32",
        i64 => "i64",
        i128 => "i128",
        isize => "isize",
        u8 => "u8",
        u16 => "u16",
        u32 => "u32",
        u64 => "u64",
        u128 => "u128",
        usize => "usize",
        f32 => "f32",
        f64 => "f64",
        bool => "bool",
        char => "char",
    );
    registry.register(owned_text_spec("String", |raw| raw.to_string()));
    registry.register(owned_text_spec("PathBuf", |raw| PathBuf::from(raw)));
}
