// Export modules for library usage
pub mod context;
pub mod convert;
pub mod core;
pub mod registry;
pub mod specs;

// Re-export commonly used types
pub use crate::context::{ArgumentHandle, ParserContext};

pub use crate::convert::TypedConverter;

pub use crate::core::errors::{ConvertError, Result};

pub use crate::core::types::{
    ConstructorFault, EnumTable, FactoryFault, FactoryFn, FactoryMethod, Fault, Resolution,
    StringConstructor, TypeSpec, TypeSpecBuilder,
};

pub use crate::registry::{default_registry, ConverterRegistry};

pub use crate::specs::from_str_spec;
