//! Constructor resolution, the last conversion path.

use crate::core::types::{ConstructorFault, Fault, StringConstructor};

/// Invoke the single-text constructor. A type that reaches this point
/// with no constructor has no conversion path at all, which is a
/// registration mistake rather than a user one.
pub(crate) fn resolve<T>(
    constructor: Option<&StringConstructor<T>>,
    value: &str,
) -> Result<T, Fault> {
    let Some(constructor) = constructor else {
        return Err(Fault::Setup {
            cause: "no factory and no single-text constructor".to_string(),
        });
    };

    match constructor.invoke(value) {
        Ok(constructed) => Ok(constructed),
        Err(ConstructorFault::Unavailable(cause)) => Err(Fault::Setup { cause }),
        Err(ConstructorFault::Rejected(cause)) => Err(Fault::Input {
            cause: cause.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn missing_constructor_is_a_setup_fault() {
        let fault = resolve::<u8>(None, "1").unwrap_err();
        assert_eq!(
            Fault::Setup {
                cause: "no factory and no single-text constructor".to_string()
            },
            fault
        );
    }

    #[test]
    fn constructor_builds_from_text() {
        let constructor = StringConstructor::new(str::to_owned);
        assert_eq!("foo", resolve(Some(&constructor), "foo").unwrap());
    }

    #[test]
    fn unavailable_constructor_is_a_setup_fault() {
        let constructor = StringConstructor::<u8>::fallible(|_| {
            Err(ConstructorFault::Unavailable(
                "type cannot be instantiated".to_string(),
            ))
        });
        match resolve(Some(&constructor), "1") {
            Err(Fault::Setup { cause }) => assert_eq!("type cannot be instantiated", cause),
            other => panic!("expected setup fault, got {other:?}"),
        }
    }

    #[test]
    fn constructor_rejection_is_an_input_fault() {
        let constructor = StringConstructor::<u8>::parsing(|raw| {
            if raw.is_empty() {
                Err(anyhow!("empty input"))
            } else {
                Ok(1)
            }
        });
        match resolve(Some(&constructor), "") {
            Err(Fault::Input { cause }) => assert_eq!("empty input", cause),
            other => panic!("expected input fault, got {other:?}"),
        }
    }
}
