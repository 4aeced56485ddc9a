//! Known-compound lookup keyed by canonical formula.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

const COMPOUNDS_JSON: &str = include_str!("../../data/compounds.json");

/// Display metadata for a recognised molecule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnownCompound {
    pub name: String,
    pub geometry: String,
    pub bond_angle: String,
}

/// Exact-match registry from formula (as produced by `compute_formula`) to compound.
pub struct CompoundRegistry {
    compounds: HashMap<String, KnownCompound>,
}

impl CompoundRegistry {
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::from_json(COMPOUNDS_JSON)
    }

    /// Parse the registry. Keys are written exactly as `compute_formula`
    /// prints them ("H3N" for ammonia).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let compounds: HashMap<String, KnownCompound> = serde_json::from_str(json)?;
        Ok(Self { compounds })
    }

    /// Case-sensitive exact match; no normalisation.
    pub fn lookup(&self, formula: &str) -> Option<&KnownCompound> {
        self.compounds.get(formula)
    }

    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }
}

/// The process-wide compound registry, parsed on first use.
pub fn known_compounds() -> &'static CompoundRegistry {
    static REGISTRY: OnceLock<CompoundRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| CompoundRegistry::load().expect("embedded compound JSON is valid"))
}
