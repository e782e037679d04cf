use serde::{Deserialize, Serialize};
use ts_rs::TS;

use hipis_core::models::assessment::QuestionnaireKind;

use crate::get_questionnaire;

/// A severity band plus its fixed interpretation sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub severity: &'static str,
    pub interpretation: &'static str,
}

/// The result of scoring one answer list.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scored {
    pub score: u32,
    pub severity: String,
    pub interpretation: String,
    pub recommendations: Vec<String>,
}

/// Score an answer list: the total is the literal sum of whatever was
/// provided. A short list is allowed (the UI submits 0 for a skipped
/// question) and an empty list scores 0; answer values are not clamped to
/// the questionnaire's scale.
pub fn score(kind: QuestionnaireKind, answers: &[u8]) -> Scored {
    let total: u32 = answers.iter().map(|&a| u32::from(a)).sum();

    let questionnaire = get_questionnaire(kind);
    let classification = questionnaire.classify(total);

    Scored {
        score: total,
        severity: classification.severity.to_string(),
        interpretation: classification.interpretation.to_string(),
        recommendations: questionnaire
            .recommendations()
            .iter()
            .map(|r| r.to_string())
            .collect(),
    }
}
