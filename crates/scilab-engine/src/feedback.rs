//! Natural-language status for the current sandbox contents.
//!
//! Rules are checked in a fixed order and the first match wins. A known
//! compound beats every structural rule, including "no bonds". A purely
//! metallic bond set has no rule of its own and reaches the mixed fallback.

use crate::api::types::Feedback;
use crate::chem::atom::PlacedAtom;
use crate::chem::bonds::{distinct_types, Bond, BondOrder, BondType, BOND_THRESHOLD};
use crate::chem::compounds::known_compounds;

pub const EMPTY_SANDBOX_MESSAGE: &str =
    "Drag atoms from the periodic table into the sandbox to begin building molecules!";

/// Classify the sandbox using the default bonding threshold in messages.
pub fn generate_feedback(atoms: &[PlacedAtom], bonds: &[Bond], formula: &str) -> Feedback {
    generate_feedback_with(atoms, bonds, formula, BOND_THRESHOLD)
}

/// Classify the sandbox; `threshold` is only quoted in the "too far apart" hint.
pub fn generate_feedback_with(
    atoms: &[PlacedAtom],
    bonds: &[Bond],
    formula: &str,
    threshold: f32,
) -> Feedback {
    match atoms {
        [] => return Feedback::info(EMPTY_SANDBOX_MESSAGE),
        [only] => {
            return Feedback::info(format!(
                "{} added. Add more atoms to form bonds. Valence electrons: {}",
                only.element.name, only.element.valence_electrons
            ));
        }
        _ => {}
    }

    if let Some(compound) = known_compounds().lookup(formula) {
        let types: Vec<&str> = distinct_types(bonds).iter().map(BondType::as_str).collect();
        return Feedback::success(format!(
            "✨ {} ({}) — {} bonding | Geometry: {} | Bond Angle: {}",
            compound.name,
            formula,
            types.join(" & "),
            compound.geometry,
            compound.bond_angle
        ));
    }

    if bonds.is_empty() {
        return Feedback::warning(format!(
            "{} atoms present but no bonds detected. Bring atoms closer together (within {}px).",
            atoms.len(),
            threshold
        ));
    }

    let ionic = bonds.iter().filter(|b| b.bond_type == BondType::Ionic).count();
    let covalent = bonds.iter().filter(|b| b.bond_type == BondType::Covalent).count();

    if ionic > 0 && covalent == 0 {
        return Feedback::info(format!(
            "Formula: {formula} — Ionic bonding detected (metal + nonmetal electron transfer)."
        ));
    }

    if covalent > 0 && ionic == 0 {
        let doubles = bonds.iter().filter(|b| b.order == BondOrder::Double).count();
        let triples = bonds.iter().filter(|b| b.order == BondOrder::Triple).count();
        let mut desc = String::from("Covalent bonding (electron sharing)");
        if triples > 0 {
            desc.push_str(&format!(" | {triples} triple bond(s)"));
        } else if doubles > 0 {
            desc.push_str(&format!(" | {doubles} double bond(s)"));
        }
        return Feedback::info(format!("Formula: {formula} — {desc}."));
    }

    Feedback::info(format!(
        "Formula: {formula} — {} bond(s) detected (mixed ionic/covalent).",
        bonds.len()
    ))
}
