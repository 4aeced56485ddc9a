//! Serializable views of a session for the UI.

use serde::Serialize;

use crate::api::types::{Feedback, GameMode};
use crate::chem::atom::PlacedAtom;
use crate::chem::bonds::{Bond, BondSummary};
use crate::chem::compounds::KnownCompound;
use crate::quiz::challenges::QuizChallenge;

/// Quiz progress as shown on the progress dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub score: u32,
    pub completed: usize,
    pub total: usize,
    /// `completed / total` as a rounded percentage. Zero when there are no challenges.
    pub percent: u32,
    pub wrong_submissions: u32,
    /// Atoms ever placed, including ones since removed.
    pub atoms_placed: u32,
}

impl Progress {
    pub fn new(
        score: u32,
        completed: usize,
        total: usize,
        wrong_submissions: u32,
        atoms_placed: u32,
    ) -> Self {
        let percent = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        };
        Self {
            score,
            completed,
            total,
            percent,
            wrong_submissions,
            atoms_placed,
        }
    }
}

/// Everything the UI renders after a mutation, borrowed from the session.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot<'a> {
    pub mode: GameMode,
    pub score: u32,
    pub attempts: u32,
    pub current_challenge: Option<&'a QuizChallenge>,
    pub completed_challenges: Vec<u32>,
    pub atoms: &'a [PlacedAtom],
    pub bonds: &'a [Bond],
    pub bond_summary: BondSummary,
    pub formula: &'a str,
    pub compound: Option<&'a KnownCompound>,
    pub feedback: &'a Feedback,
    pub progress: Progress,
}
