// src/models/evaluation.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{
    quiz::{QuizDefinition, Submission},
    recommendation::RecommendationResult,
};

/// DTO for evaluating a quiz attempt.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EvaluateRequest {
    #[validate(nested)]
    pub quiz: QuizDefinition,

    pub submission: Submission,

    /// District used for college suggestions. Falls back to the configured default.
    #[validate(length(max = 100))]
    pub district: Option<String>,
}

/// DTO returned after evaluation. Result fields are flattened into the top level.
#[derive(Debug, Serialize, ToSchema)]
pub struct EvaluateResponse {
    pub quiz_id: i64,
    pub quiz_title: String,
    pub completed_at: chrono::DateTime<chrono::Utc>,
    #[serde(flatten)]
    pub result: RecommendationResult,
    pub recommended_colleges: Vec<String>,
}
