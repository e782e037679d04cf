use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use hipis_assess::{all_questionnaires, find_questionnaire};
use hipis_core::envelope::Envelope;
use hipis_core::models::assessment::QuestionnaireKind;

use crate::error::ApiError;

#[derive(Serialize)]
pub struct QuestionnaireSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionnaireKind,
    pub name: String,
    pub questions: usize,
}

#[derive(Serialize)]
pub struct QuestionnaireDetail {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionnaireKind,
    pub name: String,
    pub max_score: u32,
    pub questions: Vec<String>,
}

pub async fn list_questionnaires() -> Json<Envelope<Vec<QuestionnaireSummary>>> {
    let summaries: Vec<QuestionnaireSummary> = all_questionnaires()
        .iter()
        .map(|q| QuestionnaireSummary {
            id: q.id().to_string(),
            kind: q.kind(),
            name: q.name().to_string(),
            questions: q.questions().len(),
        })
        .collect();

    Json(Envelope::ok(summaries))
}

pub async fn get_questionnaire_detail(
    Path(id): Path<String>,
) -> Result<Json<Envelope<QuestionnaireDetail>>, ApiError> {
    let questionnaire = find_questionnaire(&id)
        .ok_or_else(|| ApiError::NotFound(format!("questionnaire not found: {id}")))?;

    Ok(Json(Envelope::ok(QuestionnaireDetail {
        id: questionnaire.id().to_string(),
        kind: questionnaire.kind(),
        name: questionnaire.name().to_string(),
        max_score: questionnaire.max_score(),
        questions: questionnaire
            .questions()
            .iter()
            .map(|q| q.to_string())
            .collect(),
    })))
}
