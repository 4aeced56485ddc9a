//! Lab session: the sandbox state plus quiz orchestration.
//!
//! Every mutation recomputes bonds, formula and feedback from the full atom
//! list. Nothing derived is patched in place.

pub mod snapshot;

use std::collections::BTreeSet;

use glam::Vec2;
use serde::Serialize;

use crate::api::config::LabConfig;
use crate::api::error::LabError;
use crate::api::types::{AtomId, Feedback, GameMode};
use crate::chem::atom::PlacedAtom;
use crate::chem::bonds::{detect_bonds_with, Bond, BondSummary};
use crate::chem::compounds::known_compounds;
use crate::chem::element::periodic_table;
use crate::chem::formula::compute_formula;
use crate::chem::validation::validate_bond;
use crate::feedback::{generate_feedback_with, EMPTY_SANDBOX_MESSAGE};
use crate::quiz::challenges::{quiz_challenges, QuizChallenge};
use crate::quiz::{diagnose, NO_ATOMS_MESSAGE};
use snapshot::{Progress, SessionSnapshot};

pub const CLEARED_MESSAGE: &str = "Sandbox cleared. Start building!";
pub const FREE_PLAY_MESSAGE: &str = "Free Play — explore any combination!";

/// A challenge completed by the last operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeSolved {
    pub level: u32,
    pub points: u32,
    /// `None` when the solved level was the last one.
    pub next_level: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum DropOutcome {
    Placed { id: AtomId },
    /// The new atom completed the active challenge.
    Solved { id: AtomId, solved: ChallengeSolved },
    /// Quiz validation refused the atom; nothing was placed.
    Rejected { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum SubmitOutcome {
    Correct { solved: ChallengeSolved },
    Incorrect { diagnosis: String },
    Empty,
}

pub struct LabSession {
    config: LabConfig,
    mode: GameMode,
    score: u32,
    current_challenge: Option<&'static QuizChallenge>,
    completed: BTreeSet<u32>,
    /// Wrong submissions against the current challenge. Drives the bonus.
    attempts: u32,
    atoms: Vec<PlacedAtom>,
    bonds: Vec<Bond>,
    formula: String,
    feedback: Feedback,
    next_id: u32,
    atoms_placed: u32,
    wrong_submissions: u32,
}

impl LabSession {
    pub fn new() -> Self {
        Self::with_config(LabConfig::default())
    }

    pub fn with_config(config: LabConfig) -> Self {
        Self {
            config,
            mode: GameMode::FreePlay,
            score: 0,
            current_challenge: None,
            completed: BTreeSet::new(),
            attempts: 0,
            atoms: Vec::new(),
            bonds: Vec::new(),
            formula: String::new(),
            feedback: Feedback::info(EMPTY_SANDBOX_MESSAGE),
            next_id: 1,
            atoms_placed: 0,
            wrong_submissions: 0,
        }
    }

    // -- Accessors --

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn current_challenge(&self) -> Option<&'static QuizChallenge> {
        self.current_challenge
    }

    pub fn completed(&self) -> &BTreeSet<u32> {
        &self.completed
    }

    pub fn atoms(&self) -> &[PlacedAtom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    // -- Mode and challenge selection --

    /// Switch mode. Empties the sandbox and resets attempts; quiz mode
    /// starts at the lowest level.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.clear_atoms();
        self.attempts = 0;

        match mode {
            GameMode::Quiz => {
                self.current_challenge = quiz_challenges().first();
                self.feedback = match self.current_challenge {
                    Some(challenge) => Feedback::info(format!("Quiz Mode: {}", challenge.description)),
                    None => Feedback::info("Quiz Mode"),
                };
            }
            GameMode::FreePlay => {
                self.current_challenge = None;
                self.feedback = Feedback::info(FREE_PLAY_MESSAGE);
            }
        }
        log::info!("mode set to {:?}", mode);
    }

    /// Jump to a quiz level. Enters quiz mode, empties the sandbox and resets attempts.
    pub fn select_challenge(&mut self, level: u32) -> Result<&'static QuizChallenge, LabError> {
        let challenge = quiz_challenges()
            .get(level)
            .ok_or(LabError::UnknownLevel(level))?;

        self.mode = GameMode::Quiz;
        self.current_challenge = Some(challenge);
        self.clear_atoms();
        self.attempts = 0;
        self.feedback = Feedback::info(format!("Quiz Mode: {}", challenge.description));
        log::info!("selected quiz level {}", level);
        Ok(challenge)
    }

    // -- Sandbox mutations --

    /// Place an atom of `symbol` at `position`.
    ///
    /// In quiz mode with validation enforced, the new element is checked
    /// against the first placed atom and refused if the pairing is invalid.
    pub fn drop_atom(&mut self, symbol: &str, position: Vec2) -> Result<DropOutcome, LabError> {
        let element = periodic_table()
            .lookup(symbol)
            .ok_or_else(|| LabError::UnknownElement(symbol.to_string()))?;

        if self.mode == GameMode::Quiz && self.config.enforce_validation_in_quiz {
            if let Some(first) = self.atoms.first() {
                let validation = validate_bond(element, first.element);
                if !validation.valid {
                    log::warn!("rejected {} next to {}: {}", symbol, first.symbol(), validation.reason);
                    self.feedback = Feedback::warning(format!("⚠️ {}", validation.reason));
                    return Ok(DropOutcome::Rejected {
                        reason: validation.reason,
                    });
                }
            }
        }

        let id = AtomId(self.next_id);
        self.next_id += 1;
        self.atoms.push(PlacedAtom::new(id, element, position));
        self.atoms_placed += 1;
        self.recompute();

        Ok(match self.check_challenge() {
            Some(solved) => DropOutcome::Solved { id, solved },
            None => DropOutcome::Placed { id },
        })
    }

    /// Remove a placed atom. Removal never completes a challenge.
    pub fn remove_atom(&mut self, id: AtomId) -> Result<(), LabError> {
        let index = self.index_of(id)?;
        self.atoms.remove(index);
        self.recompute();
        Ok(())
    }

    /// Move a placed atom in place, keeping its id.
    pub fn move_atom(&mut self, id: AtomId, position: Vec2) -> Result<Option<ChallengeSolved>, LabError> {
        let index = self.index_of(id)?;
        self.atoms[index].position = position;
        self.recompute();
        Ok(self.check_challenge())
    }

    /// Empty the sandbox and reset attempts.
    pub fn clear_sandbox(&mut self) {
        self.clear_atoms();
        self.attempts = 0;
        self.feedback = Feedback::info(CLEARED_MESSAGE);
    }

    pub fn set_feedback(&mut self, feedback: Feedback) {
        self.feedback = feedback;
    }

    // -- Quiz --

    /// Check the sandbox against the active challenge on request.
    ///
    /// A correct answer scores, advances and empties the sandbox. A wrong or
    /// empty one counts as an attempt and leaves a diagnosis in the feedback.
    pub fn submit_answer(&mut self) -> Result<SubmitOutcome, LabError> {
        let challenge = self.current_challenge.ok_or(LabError::NoActiveChallenge)?;

        if challenge.is_solved_by(&self.formula) {
            let solved = self.complete(challenge);
            self.clear_atoms();
            self.feedback = Feedback::success(format!(
                "✅ Correct! {} — +{} pts",
                challenge.description, solved.points
            ));
            return Ok(SubmitOutcome::Correct { solved });
        }

        self.attempts += 1;
        self.wrong_submissions += 1;

        if self.atoms.is_empty() {
            self.feedback = Feedback::error(NO_ATOMS_MESSAGE);
            return Ok(SubmitOutcome::Empty);
        }

        let diagnosis = diagnose(challenge, &self.atoms, &self.formula);
        self.feedback = Feedback::error(diagnosis.clone());
        Ok(SubmitOutcome::Incorrect { diagnosis })
    }

    // -- Views --

    pub fn progress(&self) -> Progress {
        Progress::new(
            self.score,
            self.completed.len(),
            quiz_challenges().len(),
            self.wrong_submissions,
            self.atoms_placed,
        )
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            mode: self.mode,
            score: self.score,
            attempts: self.attempts,
            current_challenge: self.current_challenge,
            completed_challenges: self.completed.iter().copied().collect(),
            atoms: &self.atoms,
            bonds: &self.bonds,
            bond_summary: BondSummary::of(&self.bonds),
            formula: &self.formula,
            compound: known_compounds().lookup(&self.formula),
            feedback: &self.feedback,
            progress: self.progress(),
        }
    }

    // -- Internal --

    fn index_of(&self, id: AtomId) -> Result<usize, LabError> {
        self.atoms
            .iter()
            .position(|a| a.id == id)
            .ok_or(LabError::UnknownAtom(id))
    }

    fn clear_atoms(&mut self) {
        self.atoms.clear();
        self.bonds.clear();
        self.formula.clear();
    }

    fn recompute(&mut self) {
        self.bonds = detect_bonds_with(
            &self.atoms,
            self.config.bond_threshold,
            self.config.bond_order_policy,
        );
        self.formula = compute_formula(&self.atoms);
        self.feedback =
            generate_feedback_with(&self.atoms, &self.bonds, &self.formula, self.config.bond_threshold);
        log::debug!("sandbox: {} atom(s), formula {:?}", self.atoms.len(), self.formula);
    }

    /// Auto-detect: complete the active quiz challenge if the formula matches.
    /// The atoms stay in place.
    fn check_challenge(&mut self) -> Option<ChallengeSolved> {
        if self.mode != GameMode::Quiz {
            return None;
        }
        let challenge = self.current_challenge?;
        if !challenge.is_solved_by(&self.formula) {
            return None;
        }

        let solved = self.complete(challenge);
        self.feedback = Feedback::success(format!(
            "🎉 Correct! {} solved! +{} pts",
            challenge.description, solved.points
        ));
        Some(solved)
    }

    /// Score `challenge`, mark it completed and move to the next level.
    fn complete(&mut self, challenge: &'static QuizChallenge) -> ChallengeSolved {
        let points = self.config.scoring.points_for(self.attempts);
        self.score = self.score.saturating_add(points);
        self.completed.insert(challenge.level);
        self.attempts = 0;
        self.current_challenge = quiz_challenges().next_after(challenge.level);

        let next_level = self.current_challenge.map(|c| c.level);
        log::info!(
            "level {} solved for {} pts (next: {:?})",
            challenge.level,
            points,
            next_level
        );
        ChallengeSolved {
            level: challenge.level,
            points,
            next_level,
        }
    }
}

impl Default for LabSession {
    fn default() -> Self {
        Self::new()
    }
}
