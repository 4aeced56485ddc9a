pub mod api;
pub mod chem;
pub mod feedback;
pub mod quiz;
pub mod session;

// Re-export key types at crate root for convenience
pub use api::config::{BondOrderPolicy, LabConfig, ScoringConfig};
pub use api::error::LabError;
pub use api::types::{AtomId, Feedback, GameMode, Severity};
pub use chem::atom::PlacedAtom;
pub use chem::bonds::{detect_bonds, detect_bonds_with, Bond, BondOrder, BondSummary, BondType, BOND_THRESHOLD};
pub use chem::compounds::{known_compounds, CompoundRegistry, KnownCompound};
pub use chem::element::{periodic_table, Element, ElementCategory, ElementRegistry, GridCell};
pub use chem::formula::{canonicalize, compute_formula};
pub use chem::lewis::{lewis_dots, Dot, DotSlot};
pub use chem::validation::{validate_bond, BondValidation};
pub use feedback::{generate_feedback, generate_feedback_with};
pub use quiz::challenges::{quiz_challenges, ChallengeCatalog, Difficulty, QuizChallenge};
pub use session::snapshot::{Progress, SessionSnapshot};
pub use session::{ChallengeSolved, DropOutcome, LabSession, SubmitOutcome};
