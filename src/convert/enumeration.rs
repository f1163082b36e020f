//! Enumeration constant lookup, the terminal strategy for enum types.

use crate::core::types::{EnumTable, Fault};

/// Resolve `value` against the declared constants. The match is exact;
/// the table does no trimming or case folding, so an enumeration spec
/// doubles as a closed choice set.
pub(crate) fn resolve<T>(table: &EnumTable<T>, value: &str) -> Result<T, Fault> {
    match table.lookup(value) {
        Some(constant) => Ok(constant),
        None => {
            log::debug!("no enumeration constant matches '{value}'");
            Err(Fault::Input {
                cause: format!("no constant named '{value}'"),
            })
        }
    }
}
