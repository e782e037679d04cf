use hipis_core::models::assessment::QuestionnaireKind;

use crate::scoring::Classification;
use crate::Questionnaire;

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items, each rated 0–3. Total 0–21.
pub struct Gad7;

const QUESTIONS: [&str; 7] = [
    "Feeling nervous, anxious, or on edge",
    "Not being able to stop or control worrying",
    "Worrying too much about different things",
    "Trouble relaxing",
    "Being so restless that it's hard to sit still",
    "Becoming easily annoyed or irritable",
    "Feeling afraid as if something awful might happen",
];

const RECOMMENDATIONS: [&str; 4] = [
    "Practice breathing exercises",
    "Try mindfulness meditation",
    "Limit caffeine intake",
    "Seek professional help",
];

impl Questionnaire for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn kind(&self) -> QuestionnaireKind {
        QuestionnaireKind::Gad7
    }

    fn name(&self) -> &str {
        "GAD-7 Anxiety Scale"
    }

    fn questions(&self) -> &[&str] {
        &QUESTIONS
    }

    fn classify(&self, total: u32) -> Classification {
        if total < 5 {
            Classification {
                severity: "Minimal",
                interpretation: "You have minimal anxiety symptoms. Keep up your current coping strategies.",
            }
        } else if total < 10 {
            Classification {
                severity: "Mild",
                interpretation: "You have mild anxiety symptoms. Try relaxation techniques and stress management.",
            }
        } else if total < 15 {
            Classification {
                severity: "Moderate",
                interpretation: "You have moderate anxiety symptoms. Professional support is recommended.",
            }
        } else {
            Classification {
                severity: "Severe",
                interpretation: "You have severe anxiety symptoms. Please reach out to a counselor.",
            }
        }
    }

    fn recommendations(&self) -> &[&'static str; 4] {
        &RECOMMENDATIONS
    }
}
