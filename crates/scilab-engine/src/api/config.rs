use serde::{Deserialize, Serialize};

/// How bond order is estimated for a bonded pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BondOrderPolicy {
    /// `min(floor((8 - ve_a) / 2), floor((8 - ve_b) / 2))` clamped to 1..=3.
    /// Evaluated for each pair on its own: an atom does not spend a valence
    /// budget across its neighbours, so three neighbours can each get a
    /// triple bond to it.
    #[default]
    PerPairOctetHeuristic,
}

/// Quiz scoring parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points for any solved challenge (default: 100).
    pub base_points: u32,
    /// Bonus per unused attempt (default: 25).
    pub bonus_per_attempt: u32,
    /// Wrong attempts after which the bonus reaches zero (default: 3).
    pub max_bonus_attempts: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_points: 100,
            bonus_per_attempt: 25,
            max_bonus_attempts: 3,
        }
    }
}

impl ScoringConfig {
    /// Points awarded for solving a challenge after `attempts` wrong submissions.
    pub fn points_for(&self, attempts: u32) -> u32 {
        let unused = self.max_bonus_attempts - attempts.min(self.max_bonus_attempts);
        self.base_points
            .saturating_add(unused.saturating_mul(self.bonus_per_attempt))
    }
}

/// Configuration for a lab session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Atoms closer than this (strictly) are bonded. Sandbox units (default: 130).
    pub bond_threshold: f32,
    pub bond_order_policy: BondOrderPolicy,
    pub scoring: ScoringConfig,
    /// Reject drops that fail bond validation while in quiz mode (default: true).
    /// Free play never enforces validation.
    pub enforce_validation_in_quiz: bool,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            bond_threshold: 130.0,
            bond_order_policy: BondOrderPolicy::PerPairOctetHeuristic,
            scoring: ScoringConfig::default(),
            enforce_validation_in_quiz: true,
        }
    }
}

impl LabConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LabConfig::default();
        assert_eq!(config.bond_threshold, 130.0);
        assert_eq!(config.bond_order_policy, BondOrderPolicy::PerPairOctetHeuristic);
        assert!(config.enforce_validation_in_quiz);
    }

    #[test]
    fn points_decay_with_attempts() {
        let scoring = ScoringConfig::default();
        assert_eq!(scoring.points_for(0), 175);
        assert_eq!(scoring.points_for(1), 150);
        assert_eq!(scoring.points_for(2), 125);
        assert_eq!(scoring.points_for(3), 100);
        assert_eq!(scoring.points_for(12), 100);
    }

    #[test]
    fn points_saturate() {
        let scoring = ScoringConfig {
            bonus_per_attempt: u32::MAX,
            ..ScoringConfig::default()
        };
        assert_eq!(scoring.points_for(0), u32::MAX);
        assert_eq!(scoring.points_for(3), 100);

        let huge_base = ScoringConfig {
            base_points: u32::MAX,
            ..ScoringConfig::default()
        };
        assert_eq!(huge_base.points_for(0), u32::MAX);
    }

    #[test]
    fn parse_partial_config() {
        let config = LabConfig::from_json(r#"{ "bond_threshold": 90.0, "scoring": { "base_points": 50 } }"#).unwrap();
        assert_eq!(config.bond_threshold, 90.0);
        assert_eq!(config.scoring.base_points, 50);
        assert_eq!(config.scoring.bonus_per_attempt, 25);
        assert!(config.enforce_validation_in_quiz);
    }

    #[test]
    fn parse_empty_config() {
        let config = LabConfig::from_json("{}").unwrap();
        assert_eq!(config, LabConfig::default());
    }

    #[test]
    fn parse_policy_name() {
        let config = LabConfig::from_json(r#"{ "bond_order_policy": "per-pair-octet-heuristic" }"#).unwrap();
        assert_eq!(config.bond_order_policy, BondOrderPolicy::PerPairOctetHeuristic);
        assert!(LabConfig::from_json(r#"{ "bond_order_policy": "global-budget" }"#).is_err());
    }
}
