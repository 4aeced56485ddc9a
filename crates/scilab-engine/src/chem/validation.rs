use serde::Serialize;

use crate::chem::element::Element;

/// Outcome of a pairwise bond check. `reason` is empty when valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BondValidation {
    pub valid: bool,
    pub reason: String,
}

impl BondValidation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: String::new(),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: reason.into(),
        }
    }
}

/// Advisory check: noble gases are rejected, every other pairing passes.
///
/// Enforcement is the caller's decision (the session only enforces it in quiz mode).
pub fn validate_bond(a: &Element, b: &Element) -> BondValidation {
    let noble = if a.is_noble_gas() {
        a
    } else if b.is_noble_gas() {
        b
    } else {
        return BondValidation::ok();
    };

    BondValidation::rejected(format!(
        "{} is a noble gas and rarely forms bonds (stable octet).",
        noble.name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chem::element::{periodic_table, ElementCategory};

    #[test]
    fn hydrogen_oxygen_valid() {
        let table = periodic_table();
        let result = validate_bond(table.lookup("H").unwrap(), table.lookup("O").unwrap());
        assert!(result.valid);
        assert_eq!(result.reason, "");
    }

    #[test]
    fn noble_gas_named_in_reason() {
        let table = periodic_table();
        let ar = table.lookup("Ar").unwrap();
        let na = table.lookup("Na").unwrap();

        let result = validate_bond(na, ar);
        assert!(!result.valid);
        assert_eq!(result.reason, "Argon is a noble gas and rarely forms bonds (stable octet).");

        let swapped = validate_bond(ar, na);
        assert_eq!(swapped, result);
    }

    #[test]
    fn first_noble_gas_is_named() {
        let table = periodic_table();
        let result = validate_bond(table.lookup("He").unwrap(), table.lookup("Ne").unwrap());
        assert!(result.reason.starts_with("Helium"));
    }

    #[test]
    fn exhaustive_over_catalog() {
        let table = periodic_table();
        for a in table.all() {
            for b in table.all() {
                let expect_valid = a.category != ElementCategory::NobleGas
                    && b.category != ElementCategory::NobleGas;
                let result = validate_bond(a, b);
                assert_eq!(result.valid, expect_valid, "{} + {}", a.symbol, b.symbol);
                assert_eq!(result.reason.is_empty(), expect_valid);
            }
        }
    }
}
