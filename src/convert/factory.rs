//! Factory resolution: a type-level parse function, when eligible.

use crate::core::types::{FactoryFault, FactoryMethod, Fault, Resolution};

/// Try the factory candidate.
///
/// Everything that makes the candidate unusable for reasons unrelated
/// to the input text declines, so the constructor gets its turn. A
/// rejection from the factory's own logic is final: the constructor is
/// not consulted about text the type has already refused.
pub(crate) fn resolve<T>(factory: Option<&FactoryMethod<T>>, value: &str) -> Resolution<T> {
    let invoke = match factory {
        None => return Resolution::Declined,
        Some(FactoryMethod::InstanceLevel) => {
            log::debug!("factory candidate requires a receiver, skipping");
            return Resolution::Declined;
        }
        Some(FactoryMethod::ForeignOutput) => {
            log::debug!("factory candidate yields an unrelated type, skipping");
            return Resolution::Declined;
        }
        Some(FactoryMethod::MismatchedParams) => {
            log::debug!("factory candidate does not take a single text parameter, skipping");
            return Resolution::Declined;
        }
        Some(FactoryMethod::TypeLevel(invoke)) => invoke,
    };

    match invoke(value) {
        Ok(converted) => Resolution::Resolved(converted),
        Err(FactoryFault::AccessDenied) => {
            log::debug!("factory invocation denied, falling through to constructor");
            Resolution::Declined
        }
        Err(FactoryFault::Rejected(cause)) => Resolution::Failed(Fault::Input {
            cause: cause.to_string(),
        }),
        Err(FactoryFault::BadInvocation(cause)) => Resolution::Failed(Fault::Setup { cause }),
    }
}
