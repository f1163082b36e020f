pub mod errors;
pub mod types;

pub use errors::{ConvertError, Result};
pub use types::{
    ConstructorFault, EnumTable, FactoryFault, FactoryFn, FactoryMethod, Fault, Resolution,
    StringConstructor, TypeSpec, TypeSpecBuilder,
};
