//! Quiz challenge definitions, embedded as JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

const CHALLENGES_JSON: &str = include_str!("../../data/challenges.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One quiz level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizChallenge {
    pub level: u32,
    pub title: String,
    pub description: String,
    /// Formula in the form `compute_formula` prints it ("H3N" for ammonia).
    pub target_formula: String,
    pub required_atoms: BTreeMap<String, u32>,
    pub hint: String,
    pub difficulty: Difficulty,
}

impl QuizChallenge {
    /// True when the sandbox formula is this challenge's target.
    pub fn is_solved_by(&self, formula: &str) -> bool {
        !formula.is_empty() && formula == self.target_formula
    }

    /// Total number of atoms the challenge asks for.
    pub fn required_total(&self) -> u32 {
        self.required_atoms.values().sum()
    }
}

#[derive(Debug, Deserialize)]
struct ChallengesJSON {
    challenges: Vec<QuizChallenge>,
}

/// Challenges ordered by ascending level.
pub struct ChallengeCatalog {
    challenges: Vec<QuizChallenge>,
}

impl ChallengeCatalog {
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::from_json(CHALLENGES_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: ChallengesJSON = serde_json::from_str(json)?;
        let mut challenges = raw.challenges;
        challenges.sort_by_key(|c| c.level);
        Ok(Self { challenges })
    }

    /// The lowest-level challenge.
    pub fn first(&self) -> Option<&QuizChallenge> {
        self.challenges.first()
    }

    pub fn get(&self, level: u32) -> Option<&QuizChallenge> {
        self.challenges.iter().find(|c| c.level == level)
    }

    /// The challenge at `level + 1`, if any. Gaps in numbering end the quiz.
    pub fn next_after(&self, level: u32) -> Option<&QuizChallenge> {
        self.get(level + 1)
    }

    pub fn all(&self) -> &[QuizChallenge] {
        &self.challenges
    }

    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }
}

/// The process-wide challenge list, parsed on first use.
pub fn quiz_challenges() -> &'static ChallengeCatalog {
    static CATALOG: OnceLock<ChallengeCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| ChallengeCatalog::load().expect("embedded challenge JSON is valid"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chem::element::periodic_table;
    use crate::chem::formula::formula_of;

    #[test]
    fn load_catalog() {
        let catalog = ChallengeCatalog::load().unwrap();
        assert_eq!(catalog.len(), 10);
        let levels: Vec<u32> = catalog.all().iter().map(|c| c.level).collect();
        assert_eq!(levels, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn first_is_hydrogen_gas() {
        let first = quiz_challenges().first().unwrap();
        assert_eq!(first.level, 1);
        assert_eq!(first.target_formula, "H2");
        assert_eq!(first.required_atoms.get("H"), Some(&2));
        assert_eq!(first.difficulty, Difficulty::Easy);
    }

    #[test]
    fn next_after_last_is_none() {
        let catalog = quiz_challenges();
        assert_eq!(catalog.next_after(3).unwrap().level, 4);
        assert!(catalog.next_after(10).is_none());
    }

    #[test]
    fn required_atoms_build_the_target() {
        // Every level is solvable: its required atoms produce its target formula.
        let table = periodic_table();
        for challenge in quiz_challenges().all() {
            let elements = challenge.required_atoms.iter().flat_map(|(symbol, &count)| {
                let element = table.lookup(symbol).expect("known symbol");
                std::iter::repeat(element).take(count as usize)
            });
            let formula = formula_of(elements);
            assert_eq!(formula, challenge.target_formula, "level {}", challenge.level);
        }
    }

    #[test]
    fn ammonia_matches_computed_formula_only() {
        let ammonia = quiz_challenges().get(5).unwrap();
        assert_eq!(ammonia.target_formula, "H3N");
        assert!(ammonia.is_solved_by("H3N"));
        assert!(!ammonia.is_solved_by("NH3"));
        assert!(!ammonia.is_solved_by("H3"));
        assert!(!ammonia.is_solved_by(""));
        assert_eq!(ammonia.required_total(), 4);
    }
}
