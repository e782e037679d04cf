//! hipis-assess
//!
//! Screening questionnaire definitions and scoring. Pure data — no I/O.
//! Defines the questions, severity thresholds, and recommendation text for
//! each supported questionnaire, and the sum-then-classify scoring function.

pub mod questionnaires;
pub mod scoring;

use hipis_core::models::assessment::QuestionnaireKind;
use scoring::Classification;

/// Trait implemented by each screening questionnaire.
pub trait Questionnaire: Send + Sync {
    /// URL-safe identifier (e.g. "phq9", "gad7").
    fn id(&self) -> &str;

    /// The wire-level kind stored on assessment records.
    fn kind(&self) -> QuestionnaireKind;

    /// Human-readable name (e.g. "PHQ-9 Depression Scale").
    fn name(&self) -> &str;

    /// Question texts, in presentation order.
    fn questions(&self) -> &[&str];

    /// Highest selectable answer per question. All three questionnaires use
    /// a four-point 0–3 scale.
    fn max_item_score(&self) -> u8 {
        3
    }

    fn max_score(&self) -> u32 {
        self.questions().len() as u32 * u32::from(self.max_item_score())
    }

    /// Map a summed score to its severity band. Thresholds are ascending and
    /// non-overlapping; a score equal to a boundary falls in the upper band.
    fn classify(&self, total: u32) -> Classification;

    /// Fixed advice shown with every result, regardless of band.
    fn recommendations(&self) -> &[&'static str; 4];
}

/// Return all supported questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![
        Box::new(questionnaires::phq9::Phq9),
        Box::new(questionnaires::gad7::Gad7),
        Box::new(questionnaires::ghq12::Ghq12),
    ]
}

/// Look up a questionnaire by its wire kind. Total: every kind has one.
pub fn get_questionnaire(kind: QuestionnaireKind) -> Box<dyn Questionnaire> {
    match kind {
        QuestionnaireKind::Phq9 => Box::new(questionnaires::phq9::Phq9),
        QuestionnaireKind::Gad7 => Box::new(questionnaires::gad7::Gad7),
        QuestionnaireKind::Ghq12 => Box::new(questionnaires::ghq12::Ghq12),
    }
}

/// Look up a questionnaire by URL id.
pub fn find_questionnaire(id: &str) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}
