//! Presidential candidacy exams and elections
//!
//! Candidates sit a fixed set of exams; only those who pass every required
//! exam may register. The election then picks one registered candidate.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::calendar::SimDate;
use crate::government::president::President;

/// Lowest score that counts as a pass
pub const PASS_MARK: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamType {
    ForeignPolicy,
    History,
    Economy,
    InternalLegislation,
    Medical,
    Language,
}

impl ExamType {
    pub const ALL: [ExamType; 6] = [
        ExamType::ForeignPolicy,
        ExamType::History,
        ExamType::Economy,
        ExamType::InternalLegislation,
        ExamType::Medical,
        ExamType::Language,
    ];

    /// Exams every candidate must pass; foreign candidates also need Language
    pub const REQUIRED: [ExamType; 5] = [
        ExamType::ForeignPolicy,
        ExamType::History,
        ExamType::Economy,
        ExamType::InternalLegislation,
        ExamType::Medical,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExamType::ForeignPolicy => "Foreign Policy",
            ExamType::History => "History",
            ExamType::Economy => "Economy",
            ExamType::InternalLegislation => "Internal Legislation",
            ExamType::Medical => "Medical",
            ExamType::Language => "Language",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExamResult {
    pub exam: ExamType,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresidentialCandidate {
    pub name: String,
    pub is_foreign: bool,
    pub exam_results: Vec<ExamResult>,
}

impl PresidentialCandidate {
    pub fn new(name: impl Into<String>, is_foreign: bool) -> Self {
        Self {
            name: name.into(),
            is_foreign,
            exam_results: Vec::new(),
        }
    }

    /// Sit one exam; scores fall in [0.7, 1.0)
    pub fn take_exam<R: Rng + ?Sized>(&mut self, exam: ExamType, rng: &mut R) -> f64 {
        let score = PASS_MARK + (1.0 - PASS_MARK) * rng.gen::<f64>();
        self.exam_results.push(ExamResult { exam, score });
        score
    }

    /// Sit every exam once
    pub fn take_all_exams<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for exam in ExamType::ALL {
            self.take_exam(exam, rng);
        }
    }

    fn passed(&self, exam: ExamType) -> bool {
        self.exam_results
            .iter()
            .any(|r| r.exam == exam && r.score >= PASS_MARK)
    }

    pub fn has_passed_exams(&self) -> bool {
        let base = ExamType::REQUIRED.iter().all(|exam| self.passed(*exam));
        base && (!self.is_foreign || self.passed(ExamType::Language))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresidentialElection {
    candidates: Vec<PresidentialCandidate>,
}

impl PresidentialElection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a candidate. Returns false when the candidate has not
    /// passed every required exam.
    pub fn register_candidate(&mut self, candidate: PresidentialCandidate) -> bool {
        if !candidate.has_passed_exams() {
            debug!("{} has not passed the candidacy exams", candidate.name);
            return false;
        }
        self.candidates.push(candidate);
        true
    }

    pub fn candidates(&self) -> &[PresidentialCandidate] {
        &self.candidates
    }

    /// Pick the winner among registered candidates; `None` without any
    pub fn conduct_election<R: Rng + ?Sized>(
        &self,
        today: SimDate,
        rng: &mut R,
    ) -> Option<President> {
        let winner = self.candidates.choose(rng)?;
        info!(
            "{} elected President out of {} candidates",
            winner.name,
            self.candidates.len()
        );
        Some(President::new(winner.name.clone(), today))
    }
}
