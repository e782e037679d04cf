use hipis_core::models::assessment::QuestionnaireKind;

use crate::scoring::Classification;
use crate::Questionnaire;

/// GHQ-12: General Health Questionnaire, 12-item form, scored on the
/// four-point 0–3 Likert scale. Total 0–36. Higher is worse.
pub struct Ghq12;

const QUESTIONS: [&str; 12] = [
    "Been able to concentrate on what you're doing?",
    "Lost much sleep over worry?",
    "Felt that you are playing a useful part in things?",
    "Felt capable of making decisions about things?",
    "Felt constantly under strain?",
    "Felt you couldn't overcome your difficulties?",
    "Been able to enjoy your normal day-to-day activities?",
    "Been able to face up to your problems?",
    "Been feeling unhappy and depressed?",
    "Been losing confidence in yourself?",
    "Been thinking of yourself as a worthless person?",
    "Been feeling reasonably happy, all things considered?",
];

const RECOMMENDATIONS: [&str; 4] = [
    "Reach out to a counselor",
    "Practice self-care",
    "Build a support network",
    "Seek professional assessment",
];

impl Questionnaire for Ghq12 {
    fn id(&self) -> &str {
        "ghq12"
    }

    fn kind(&self) -> QuestionnaireKind {
        QuestionnaireKind::Ghq12
    }

    fn name(&self) -> &str {
        "GHQ-12 Wellness Check"
    }

    fn questions(&self) -> &[&str] {
        &QUESTIONS
    }

    fn classify(&self, total: u32) -> Classification {
        if total < 12 {
            Classification {
                severity: "Good",
                interpretation: "You appear to be in good mental health.",
            }
        } else if total < 24 {
            Classification {
                severity: "Fair",
                interpretation: "You may be experiencing some psychological distress. Consider support.",
            }
        } else {
            Classification {
                severity: "Poor",
                interpretation: "You appear to be experiencing significant psychological distress.",
            }
        }
    }

    fn recommendations(&self) -> &[&'static str; 4] {
        &RECOMMENDATIONS
    }
}
