//! Quiz mode: challenge data and answer diagnostics.

pub mod challenges;

use std::collections::BTreeMap;

use crate::chem::atom::PlacedAtom;
use challenges::QuizChallenge;

pub const NO_ATOMS_MESSAGE: &str =
    "❌ No atoms placed! Drag atoms from the periodic table into the sandbox first.";

/// Count placed atoms per element symbol.
pub fn count_symbols(atoms: &[PlacedAtom]) -> BTreeMap<&str, u32> {
    let mut counts = BTreeMap::new();
    for atom in atoms {
        *counts.entry(atom.symbol()).or_insert(0) += 1;
    }
    counts
}

/// Explain why the sandbox does not answer `challenge`.
///
/// Lists every required symbol whose count is off ("Need N×Sym"), every
/// placed symbol the challenge does not use ("Remove: ..."), then the hint.
pub fn diagnose(challenge: &QuizChallenge, atoms: &[PlacedAtom], formula: &str) -> String {
    let counts = count_symbols(atoms);
    let current = if formula.is_empty() { "—" } else { formula };
    let mut diag = format!(
        "❌ Not quite! Current: {current}, Target: {}.",
        challenge.target_formula
    );

    let wrong: Vec<String> = challenge
        .required_atoms
        .iter()
        .filter(|(symbol, need)| counts.get(symbol.as_str()).copied().unwrap_or(0) != **need)
        .map(|(symbol, need)| format!("Need {need}×{symbol}"))
        .collect();
    if !wrong.is_empty() {
        diag.push_str(&format!(" {}.", wrong.join(", ")));
    }

    let mut extra: Vec<&str> = Vec::new();
    for atom in atoms {
        let symbol = atom.symbol();
        if !challenge.required_atoms.contains_key(symbol) && !extra.contains(&symbol) {
            extra.push(symbol);
        }
    }
    if !extra.is_empty() {
        diag.push_str(&format!(" Remove: {}.", extra.join(", ")));
    }

    diag.push_str(&format!(" Hint: {}", challenge.hint));
    diag
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::AtomId;
    use crate::chem::element::periodic_table;
    use crate::chem::formula::compute_formula;
    use challenges::quiz_challenges;
    use glam::Vec2;

    fn atoms(symbols: &[&str]) -> Vec<PlacedAtom> {
        symbols
            .iter()
            .enumerate()
            .map(|(i, s)| {
                PlacedAtom::new(AtomId(i as u32), periodic_table().lookup(s).unwrap(), Vec2::ZERO)
            })
            .collect()
    }

    #[test]
    fn counts_per_symbol() {
        let binding = atoms(&["H", "O", "H"]);
        let counts = count_symbols(&binding);
        assert_eq!(counts.get("H"), Some(&2));
        assert_eq!(counts.get("O"), Some(&1));
        assert_eq!(counts.get("N"), None);
    }

    #[test]
    fn missing_and_extra_atoms() {
        let water = quiz_challenges().get(4).unwrap();
        let placed = atoms(&["H", "C", "C", "H", "H"]);
        let diag = diagnose(water, &placed, &compute_formula(&placed));
        assert_eq!(
            diag,
            format!(
                "❌ Not quite! Current: C2H3, Target: H2O. Need 2×H, Need 1×O. Remove: C. Hint: {}",
                water.hint
            )
        );
    }

    #[test]
    fn only_wrong_counts() {
        let salt = quiz_challenges().get(3).unwrap();
        let placed = atoms(&["Na", "Cl", "Cl"]);
        let diag = diagnose(salt, &placed, &compute_formula(&placed));
        assert!(diag.starts_with("❌ Not quite! Current: NaCl2, Target: NaCl. Need 1×Cl. Hint: "));
        assert!(!diag.contains("Remove"));
    }

    #[test]
    fn empty_formula_shows_dash() {
        let hydrogen = quiz_challenges().first().unwrap();
        let diag = diagnose(hydrogen, &[], "");
        assert!(diag.starts_with("❌ Not quite! Current: —, Target: H2. Need 2×H."));
    }
}
