//! Periodic table data structures and registry.
//!
//! Element data for all 118 elements is embedded as JSON and parsed once
//! per process. `valence_electrons` is the only input the bonding heuristics
//! use; for transition metals it is a teaching value, not real shell data.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Embed the periodic table JSON at compile time.
const PERIODIC_TABLE_JSON: &str = include_str!("../../data/elements.json");

/// Synthetic grid row for the lanthanide block.
pub const LANTHANIDE_ROW: u8 = 9;
/// Synthetic grid row for the actinide block.
pub const ACTINIDE_ROW: u8 = 10;

/// Element category, as shown by the UI legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementCategory {
    NobleGas,
    AlkaliMetal,
    AlkalineEarth,
    TransitionMetal,
    PostTransition,
    Metalloid,
    Nonmetal,
    Halogen,
    Lanthanide,
    Actinide,
    Unknown,
}

impl ElementCategory {
    /// Parse the kebab-case category names used in the data files and UI filters.
    pub fn parse(s: &str) -> Option<Self> {
        let category = match s {
            "noble-gas" => Self::NobleGas,
            "alkali-metal" => Self::AlkaliMetal,
            "alkaline-earth" => Self::AlkalineEarth,
            "transition-metal" => Self::TransitionMetal,
            "post-transition" => Self::PostTransition,
            "metalloid" => Self::Metalloid,
            "nonmetal" => Self::Nonmetal,
            "halogen" => Self::Halogen,
            "lanthanide" => Self::Lanthanide,
            "actinide" => Self::Actinide,
            "unknown" => Self::Unknown,
            _ => return None,
        };
        Some(category)
    }

    /// Get a UI-friendly color for this category.
    pub fn ui_color(&self) -> &'static str {
        match self {
            Self::NobleGas => "#ff9ff3",
            Self::AlkaliMetal => "#ff6b6b",
            Self::AlkalineEarth => "#feca57",
            Self::TransitionMetal => "#48dbfb",
            Self::PostTransition => "#1dd1a1",
            Self::Metalloid => "#5f27cd",
            Self::Nonmetal => "#00d2d3",
            Self::Halogen => "#ff9f43",
            Self::Lanthanide => "#54a0ff",
            Self::Actinide => "#c8d6e5",
            Self::Unknown => "#576574",
        }
    }
}

/// Immutable catalog entry for one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    pub category: ElementCategory,
    pub valence_electrons: u32,
    /// Pauling scale. Absent for most noble gases and the superheavy elements.
    pub electronegativity: Option<f64>,
    pub group: Option<u32>,
    pub period: u32,
    pub is_metal: bool,
}

impl Element {
    pub fn is_noble_gas(&self) -> bool {
        self.category == ElementCategory::NobleGas
    }

    /// Position in the 18-column periodic table layout as `(row, col)`.
    ///
    /// Lanthanides (57-71) and actinides (89-103) are moved to rows 9 and 10,
    /// columns 3-17 in atomic-number order.
    pub fn grid_position(&self) -> (u8, u8) {
        match self.atomic_number {
            57..=71 => (LANTHANIDE_ROW, (self.atomic_number - 57 + 3) as u8),
            89..=103 => (ACTINIDE_ROW, (self.atomic_number - 89 + 3) as u8),
            _ => (self.period as u8, self.group.unwrap_or(0) as u8),
        }
    }
}

/// Root structure for the JSON file.
#[derive(Debug, Deserialize)]
struct PeriodicTableJSON {
    elements: Vec<Element>,
}

/// One cell of the periodic table grid.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GridCell<'a> {
    pub element: &'a Element,
    pub row: u8,
    pub col: u8,
    /// Legend colour of the element's category.
    pub color: &'static str,
}

/// Element registry ordered by atomic number, with lookup by symbol.
pub struct ElementRegistry {
    elements: Vec<Element>,
    by_symbol: HashMap<String, usize>,
}

impl ElementRegistry {
    /// Load the registry from embedded JSON.
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::from_json(PERIODIC_TABLE_JSON)
    }

    /// Parse registry from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: PeriodicTableJSON = serde_json::from_str(json)?;
        let mut elements = raw.elements;
        elements.sort_by_key(|e| e.atomic_number);

        let by_symbol = elements
            .iter()
            .enumerate()
            .map(|(idx, e)| (e.symbol.clone(), idx))
            .collect();

        Ok(Self { elements, by_symbol })
    }

    /// Get element by symbol. Case-sensitive ("Na", not "NA").
    pub fn lookup(&self, symbol: &str) -> Option<&Element> {
        self.by_symbol.get(symbol).map(|&idx| &self.elements[idx])
    }

    /// Get element by atomic number.
    pub fn get(&self, atomic_number: u32) -> Option<&Element> {
        self.elements
            .binary_search_by_key(&atomic_number, |e| e.atomic_number)
            .ok()
            .map(|idx| &self.elements[idx])
    }

    /// All elements in atomic-number order.
    pub fn all(&self) -> &[Element] {
        &self.elements
    }

    /// Every element with its periodic table grid position.
    pub fn grid(&self) -> Vec<GridCell<'_>> {
        self.elements
            .iter()
            .map(|element| {
                let (row, col) = element.grid_position();
                GridCell {
                    element,
                    row,
                    col,
                    color: element.category.ui_color(),
                }
            })
            .collect()
    }

    /// Filter elements the way the element picker does.
    ///
    /// An empty `term` matches everything; otherwise the name or symbol must
    /// contain it (case-insensitive) or the atomic number must equal it.
    pub fn search(&self, term: &str, category: Option<ElementCategory>) -> Vec<&Element> {
        let needle = term.to_lowercase();
        self.elements
            .iter()
            .filter(|e| {
                term.is_empty()
                    || e.name.to_lowercase().contains(&needle)
                    || e.symbol.to_lowercase().contains(&needle)
                    || e.atomic_number.to_string() == term
            })
            .filter(|e| category.map_or(true, |c| e.category == c))
            .collect()
    }

    /// Get number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// The process-wide periodic table, parsed on first use.
pub fn periodic_table() -> &'static ElementRegistry {
    static TABLE: OnceLock<ElementRegistry> = OnceLock::new();
    TABLE.get_or_init(|| ElementRegistry::load().expect("embedded periodic table JSON is valid"))
}
