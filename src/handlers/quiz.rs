// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use chrono::Utc;
use serde_json::{Map, Value, json};
use validator::Validate;

use crate::{
    config::{Config, MAX_RECOMMENDED_STREAMS, MIN_STREAM_MATCH},
    error::AppError,
    models::{
        evaluation::{EvaluateRequest, EvaluateResponse},
        quiz::Aptitude,
        recommendation::Stream,
    },
    scoring,
    utils::college::suggest_colleges,
};

/// Scores a submission and recommends streams.
///
/// * Rejects bodies that fail to deserialize (e.g. an answer key outside A-D).
/// * Validates the quiz definition (unique ids, points in range).
/// * Rejects a submission addressed to a different quiz.
/// * Appends college suggestions for the requested (or default) district.
#[utoipa::path(
    post,
    path = "/api/quiz/evaluate",
    request_body = EvaluateRequest,
    responses(
        (status = 200, description = "Scored submission", body = EvaluateResponse),
        (status = 400, description = "Malformed body, invalid quiz or mismatched submission"),
    ),
    tag = "quiz"
)]
pub async fn evaluate(
    State(config): State<Config>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    req.validate()?;

    if req.submission.quiz_id != req.quiz.id {
        return Err(AppError::BadRequest(format!(
            "Submission is for quiz {} but quiz {} was supplied",
            req.submission.quiz_id, req.quiz.id
        )));
    }

    let result = scoring::evaluate(&req.quiz, &req.submission);

    let district = req
        .district
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(config.default_district.as_str());
    let recommended_colleges = suggest_colleges(result.percentage, district);

    tracing::info!(
        quiz_id = req.quiz.id,
        answers = req.submission.answers.len(),
        score = result.total_score,
        max = result.max_score,
        "Quiz submission evaluated"
    );

    Ok(Json(EvaluateResponse {
        quiz_id: req.quiz.id,
        quiz_title: req.quiz.title,
        completed_at: Utc::now(),
        result,
        recommended_colleges,
    }))
}

/// Describes the aptitude categories, the streams and how streams are scored.
#[utoipa::path(
    get,
    path = "/api/quiz/categories",
    responses((status = 200, description = "Aptitude, stream and scoring information")),
    tag = "quiz"
)]
pub async fn categories() -> impl IntoResponse {
    let aptitude_types: Map<String, Value> = Aptitude::ALL
        .iter()
        .map(|a| (a.label().to_string(), json!(a.description())))
        .collect();

    let stream_information: Map<String, Value> = Stream::ALL
        .iter()
        .map(|s| (s.label().to_string(), json!(s.description())))
        .collect();

    let scoring_info: Map<String, Value> = Stream::ALL
        .iter()
        .map(|s| (s.label().to_string(), json!(s.formula())))
        .collect();

    Json(json!({
        "aptitude_types": aptitude_types,
        "stream_information": stream_information,
        "scoring_info": scoring_info,
        "min_stream_match": MIN_STREAM_MATCH,
        "max_recommended_streams": MAX_RECOMMENDED_STREAMS,
    }))
}
