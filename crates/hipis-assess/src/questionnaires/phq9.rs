use hipis_core::models::assessment::QuestionnaireKind;

use crate::scoring::Classification;
use crate::Questionnaire;

/// PHQ-9: Patient Health Questionnaire, depression module.
/// 9 items, each rated 0–3. Total 0–27.
pub struct Phq9;

const QUESTIONS: [&str; 9] = [
    "Little interest or pleasure in doing things",
    "Feeling down, depressed, or hopeless",
    "Trouble falling or staying asleep, or sleeping too much",
    "Feeling tired or having little energy",
    "Poor appetite or overeating",
    "Feeling bad about yourself or that you are a failure",
    "Trouble concentrating on things",
    "Moving or speaking so slowly or being fidgety/restless",
    "Thoughts that you would be better off dead or hurting yourself",
];

const RECOMMENDATIONS: [&str; 4] = [
    "Connect with a counsellor",
    "Practice self-care routines",
    "Stay socially connected",
    "Maintain regular sleep schedule",
];

impl Questionnaire for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn kind(&self) -> QuestionnaireKind {
        QuestionnaireKind::Phq9
    }

    fn name(&self) -> &str {
        "PHQ-9 Depression Scale"
    }

    fn questions(&self) -> &[&str] {
        &QUESTIONS
    }

    fn classify(&self, total: u32) -> Classification {
        if total < 5 {
            Classification {
                severity: "Minimal",
                interpretation: "You have minimal depressive symptoms. Continue maintaining good mental health habits.",
            }
        } else if total < 10 {
            Classification {
                severity: "Mild",
                interpretation: "You have mild depressive symptoms. Consider lifestyle changes and monitor your mood.",
            }
        } else if total < 15 {
            Classification {
                severity: "Moderate",
                interpretation: "You have moderate depressive symptoms. Professional support may be helpful.",
            }
        } else if total < 20 {
            Classification {
                severity: "Moderately Severe",
                interpretation: "You have moderately severe depressive symptoms. Please reach out to a counselor.",
            }
        } else {
            Classification {
                severity: "Severe",
                interpretation: "You have severe depressive symptoms. Professional support is recommended.",
            }
        }
    }

    fn recommendations(&self) -> &[&'static str; 4] {
        &RECOMMENDATIONS
    }
}
