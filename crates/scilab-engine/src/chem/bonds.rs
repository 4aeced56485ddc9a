//! Distance-based bond inference.
//!
//! Bonds are recomputed from scratch over every unordered pair whenever the
//! atom set changes. There is no incremental graph and no spatial index;
//! sandbox atom counts are in the tens.

use std::fmt;

use serde::Serialize;

use crate::api::config::BondOrderPolicy;
use crate::api::types::AtomId;
use crate::chem::atom::PlacedAtom;
use crate::chem::element::Element;

/// Default bonding distance in sandbox units. Pairs at this distance or
/// farther do not bond.
pub const BOND_THRESHOLD: f32 = 130.0;

/// Bond type, decided by the metal flags of the two elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BondType {
    Covalent,
    Ionic,
    Metallic,
}

impl BondType {
    /// Both metal: metallic. Exactly one metal: ionic. Neither: covalent.
    pub fn classify(a: &Element, b: &Element) -> Self {
        match (a.is_metal, b.is_metal) {
            (true, true) => Self::Metallic,
            (false, false) => Self::Covalent,
            _ => Self::Ionic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Covalent => "covalent",
            Self::Ionic => "ionic",
            Self::Metallic => "metallic",
        }
    }
}

impl fmt::Display for BondType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bond multiplicity. Serialized as the number 1, 2 or 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub enum BondOrder {
    Single,
    Double,
    Triple,
}

impl BondOrder {
    /// Clamp any pair count into 1..=3.
    pub fn from_pairs(pairs: i32) -> Self {
        match pairs.clamp(1, 3) {
            1 => Self::Single,
            2 => Self::Double,
            _ => Self::Triple,
        }
    }

    pub fn value(self) -> u8 {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }

    /// Estimate the order of a bond between `a` and `b`.
    pub fn estimate(policy: BondOrderPolicy, a: &Element, b: &Element) -> Self {
        match policy {
            BondOrderPolicy::PerPairOctetHeuristic => {
                Self::from_pairs(needed_pairs(a).min(needed_pairs(b)))
            }
        }
    }
}

impl From<BondOrder> for u8 {
    fn from(order: BondOrder) -> u8 {
        order.value()
    }
}

/// Electron pairs an element "wants" to complete an octet: `floor((8 - ve) / 2)`.
/// Negative for elements listed with more than 8 valence electrons.
pub fn needed_pairs(element: &Element) -> i32 {
    (8 - element.valence_electrons as i32).div_euclid(2)
}

/// A bond between two placed atoms. `from` is the atom that comes first in
/// the input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bond {
    pub from: AtomId,
    pub to: AtomId,
    #[serde(rename = "type")]
    pub bond_type: BondType,
    pub order: BondOrder,
}

impl Bond {
    pub fn involves(&self, id: AtomId) -> bool {
        self.from == id || self.to == id
    }
}

/// Detect bonds with the default threshold and order policy.
pub fn detect_bonds(atoms: &[PlacedAtom]) -> Vec<Bond> {
    detect_bonds_with(atoms, BOND_THRESHOLD, BondOrderPolicy::default())
}

/// Detect bonds between every pair closer than `threshold`.
///
/// One bond per qualifying pair, emitted in pair-enumeration order
/// (`i < j` over the input sequence).
pub fn detect_bonds_with(
    atoms: &[PlacedAtom],
    threshold: f32,
    policy: BondOrderPolicy,
) -> Vec<Bond> {
    let mut bonds = Vec::new();

    for (i, a) in atoms.iter().enumerate() {
        for b in &atoms[i + 1..] {
            // NaN distances compare false and never bond.
            let in_range = a.distance_to(b) < threshold;
            if !in_range {
                continue;
            }
            bonds.push(Bond {
                from: a.id,
                to: b.id,
                bond_type: BondType::classify(a.element, b.element),
                order: BondOrder::estimate(policy, a.element, b.element),
            });
        }
    }

    log::debug!("detected {} bond(s) among {} atom(s)", bonds.len(), atoms.len());
    bonds
}

/// Per-type and per-order bond counts, as shown in the molecule panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BondSummary {
    pub covalent: usize,
    pub ionic: usize,
    pub metallic: usize,
    pub double: usize,
    pub triple: usize,
}

impl BondSummary {
    pub fn of(bonds: &[Bond]) -> Self {
        let mut summary = Self::default();
        for bond in bonds {
            match bond.bond_type {
                BondType::Covalent => summary.covalent += 1,
                BondType::Ionic => summary.ionic += 1,
                BondType::Metallic => summary.metallic += 1,
            }
            match bond.order {
                BondOrder::Double => summary.double += 1,
                BondOrder::Triple => summary.triple += 1,
                BondOrder::Single => {}
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.covalent + self.ionic + self.metallic
    }
}

/// Distinct bond types in first-seen order.
pub fn distinct_types(bonds: &[Bond]) -> Vec<BondType> {
    let mut types = Vec::with_capacity(3);
    for bond in bonds {
        if !types.contains(&bond.bond_type) {
            types.push(bond.bond_type);
        }
    }
    types
}
