//! Target type descriptors and resolution primitives.
//!
//! A [`TypeSpec`] records, at argument-registration time, every way a
//! target type can be produced from raw text: an enumeration constant
//! table, a type-level factory function, a single-text constructor. The
//! converter walks these capabilities in a fixed priority order; nothing
//! is discovered at conversion time.
//!
//! Fallback between strategies is ordinary data flow, not error
//! propagation: each strategy yields a [`Resolution`], and only a
//! strategy that actually owns the conversion may fail it.

use std::fmt;
use std::sync::Arc;

/// Signature of an eligible factory: a type-level function from raw text
/// to the target type.
pub type FactoryFn<T> = Arc<dyn Fn(&str) -> Result<T, FactoryFault> + Send + Sync>;

type ConstructorFn<T> = Arc<dyn Fn(&str) -> Result<T, ConstructorFault> + Send + Sync>;
type ConstantFn<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// Why a factory invocation produced no value.
#[derive(Debug)]
pub enum FactoryFault {
    /// Access to the function was refused. The converter moves on to the
    /// constructor instead of reporting anything.
    AccessDenied,
    /// The factory's own logic rejected the input text.
    Rejected(anyhow::Error),
    /// The call itself was malformed, independent of the text being
    /// converted. A registration defect.
    BadInvocation(String),
}

/// Why a constructor invocation produced no value.
#[derive(Debug)]
pub enum ConstructorFault {
    /// The type cannot be instantiated through this constructor at all.
    Unavailable(String),
    /// The constructor's own logic rejected the input text.
    Rejected(anyhow::Error),
}

/// A factory candidate discovered on the target type at registration.
///
/// Only `TypeLevel` is invokable. The other shapes are recorded so the
/// converter can skip them and give the constructor its turn, the same
/// way a signature mismatch would be skipped during reflective lookup.
pub enum FactoryMethod<T> {
    /// Type-level function taking a single piece of text and yielding
    /// the target type. For trait-object targets the function may yield
    /// any narrower implementation; assignability is checked by the
    /// compiler when the spec is built.
    TypeLevel(FactoryFn<T>),
    /// Requires a receiver; not usable as a conversion entry point.
    InstanceLevel,
    /// Declared output is unrelated to the target type.
    ForeignOutput,
    /// Does not accept a single piece of text.
    MismatchedParams,
}

impl<T> FactoryMethod<T> {
    /// Wrap a plain parsing function, such as a `FromStr::from_str`.
    /// Parse failures surface as [`FactoryFault::Rejected`] with the
    /// parser's own error as the cause.
    pub fn parsing<F, E>(parse: F) -> Self
    where
        F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
        E: Into<anyhow::Error>,
    {
        Self::TypeLevel(Arc::new(move |raw| {
            parse(raw).map_err(|e| FactoryFault::Rejected(e.into()))
        }))
    }

    /// Wrap a function with full control over the invocation outcome.
    pub fn fallible<F>(invoke: F) -> Self
    where
        F: Fn(&str) -> Result<T, FactoryFault> + Send + Sync + 'static,
    {
        Self::TypeLevel(Arc::new(invoke))
    }
}

impl<T> fmt::Debug for FactoryMethod<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = match self {
            Self::TypeLevel(_) => "TypeLevel",
            Self::InstanceLevel => "InstanceLevel",
            Self::ForeignOutput => "ForeignOutput",
            Self::MismatchedParams => "MismatchedParams",
        };
        write!(f, "FactoryMethod::{shape}")
    }
}

/// The single-text constructor capability of a target type.
pub struct StringConstructor<T> {
    invoke: ConstructorFn<T>,
}

impl<T> StringConstructor<T> {
    /// Construction that cannot fail, e.g. owned text from borrowed text.
    pub fn new<F>(construct: F) -> Self
    where
        F: Fn(&str) -> T + Send + Sync + 'static,
    {
        Self {
            invoke: Arc::new(move |raw| Ok(construct(raw))),
        }
    }

    /// Construction whose logic may reject the text.
    pub fn parsing<F, E>(construct: F) -> Self
    where
        F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
        E: Into<anyhow::Error>,
    {
        Self {
            invoke: Arc::new(move |raw| {
                construct(raw).map_err(|e| ConstructorFault::Rejected(e.into()))
            }),
        }
    }

    /// Full control over the invocation outcome.
    pub fn fallible<F>(invoke: F) -> Self
    where
        F: Fn(&str) -> Result<T, ConstructorFault> + Send + Sync + 'static,
    {
        Self {
            invoke: Arc::new(invoke),
        }
    }

    pub(crate) fn invoke(&self, raw: &str) -> Result<T, ConstructorFault> {
        (self.invoke)(raw)
    }
}

impl<T> fmt::Debug for StringConstructor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StringConstructor")
    }
}

/// Fixed table of enumeration constants, keyed by declared name.
pub struct EnumTable<T> {
    constants: Vec<(&'static str, ConstantFn<T>)>,
}

impl<T> EnumTable<T> {
    pub fn new<I>(constants: I) -> Self
    where
        T: Clone + Send + Sync + 'static,
        I: IntoIterator<Item = (&'static str, T)>,
    {
        let constants = constants
            .into_iter()
            .map(|(name, value)| {
                let produce: ConstantFn<T> = Arc::new(move || value.clone());
                (name, produce)
            })
            .collect();
        Self { constants }
    }

    /// Exact-match constant lookup. Case-sensitive, no trimming, no
    /// aliasing.
    pub fn lookup(&self, name: &str) -> Option<T> {
        self.constants
            .iter()
            .find(|(declared, _)| *declared == name)
            .map(|(_, produce)| produce())
    }

    /// Declared constant names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.constants.iter().map(|(name, _)| *name)
    }
}

impl<T> fmt::Debug for EnumTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Immutable description of how a target type can be produced from text.
///
/// A spec is assembled once, when the surrounding library registers an
/// argument, and never mutated afterwards. Converters share it behind an
/// `Arc`, so one spec serves any number of concurrent conversions.
pub struct TypeSpec<T> {
    simple_name: &'static str,
    enumeration: Option<EnumTable<T>>,
    factory: Option<FactoryMethod<T>>,
    constructor: Option<StringConstructor<T>>,
}

impl<T> TypeSpec<T> {
    pub fn builder(simple_name: &'static str) -> TypeSpecBuilder<T> {
        TypeSpecBuilder {
            simple_name,
            enumeration: None,
            factory: None,
            constructor: None,
        }
    }

    /// Shorthand for an enumeration type: constants only, no factory or
    /// constructor paths.
    pub fn enumeration<I>(simple_name: &'static str, constants: I) -> Self
    where
        T: Clone + Send + Sync + 'static,
        I: IntoIterator<Item = (&'static str, T)>,
    {
        Self::builder(simple_name).enumeration(constants).build()
    }

    /// Short display name used in conversion messages.
    pub fn simple_name(&self) -> &'static str {
        self.simple_name
    }

    pub fn is_enumeration(&self) -> bool {
        self.enumeration.is_some()
    }

    pub fn enum_table(&self) -> Option<&EnumTable<T>> {
        self.enumeration.as_ref()
    }

    pub fn factory(&self) -> Option<&FactoryMethod<T>> {
        self.factory.as_ref()
    }

    pub fn constructor(&self) -> Option<&StringConstructor<T>> {
        self.constructor.as_ref()
    }
}

impl<T> fmt::Debug for TypeSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeSpec")
            .field("simple_name", &self.simple_name)
            .field("is_enumeration", &self.is_enumeration())
            .field("factory", &self.factory)
            .field("has_constructor", &self.constructor.is_some())
            .finish()
    }
}

/// Builder for [`TypeSpec`].
pub struct TypeSpecBuilder<T> {
    simple_name: &'static str,
    enumeration: Option<EnumTable<T>>,
    factory: Option<FactoryMethod<T>>,
    constructor: Option<StringConstructor<T>>,
}

impl<T> TypeSpecBuilder<T> {
    /// Declare the type an enumeration with the given constants. An
    /// enumeration spec resolves exclusively through its constant table.
    pub fn enumeration<I>(mut self, constants: I) -> Self
    where
        T: Clone + Send + Sync + 'static,
        I: IntoIterator<Item = (&'static str, T)>,
    {
        self.enumeration = Some(EnumTable::new(constants));
        self
    }

    /// Record the factory candidate found on the type.
    pub fn factory(mut self, factory: FactoryMethod<T>) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Record the single-text constructor found on the type.
    pub fn constructor(mut self, constructor: StringConstructor<T>) -> Self {
        self.constructor = Some(constructor);
        self
    }

    pub fn build(self) -> TypeSpec<T> {
        TypeSpec {
            simple_name: self.simple_name,
            enumeration: self.enumeration,
            factory: self.factory,
            constructor: self.constructor,
        }
    }
}

/// Outcome of a single resolution strategy.
#[derive(Debug)]
pub enum Resolution<T> {
    /// The strategy produced a value.
    Resolved(T),
    /// The strategy does not apply here; try the next one.
    Declined,
    /// The strategy owns this conversion and it failed.
    Failed(Fault),
}

/// A strategy failure, before translation into the public error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// The supplied text was rejected by the type's own parsing logic.
    Input { cause: String },
    /// The target type is not usable for conversion.
    Setup { cause: String },
}
