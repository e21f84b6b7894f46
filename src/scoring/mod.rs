// src/scoring/mod.rs

//! Quiz scoring and stream recommendation.
//!
//! A pure pipeline: [`score`] a submission, [`rank_streams`] from the
//! per-aptitude results, then [`format_recommendation`]. Nothing here performs
//! I/O or holds state, so it is safe to call from any number of handlers at once.

pub mod formatter;
pub mod ranker;
pub mod scorer;

pub use formatter::format_recommendation;
pub use ranker::rank_streams;
pub use scorer::score;

use crate::models::{
    quiz::{QuizDefinition, Submission},
    recommendation::RecommendationResult,
};

/// Runs the full pipeline for one submission.
pub fn evaluate(quiz: &QuizDefinition, submission: &Submission) -> RecommendationResult {
    let score_result = score(quiz, submission);
    let ranked = rank_streams(&score_result);
    let result = format_recommendation(&score_result, &ranked);

    tracing::debug!(
        quiz_id = quiz.id,
        total = result.total_score,
        max = result.max_score,
        top_stream = ranked.first().map(|s| s.stream.label()),
        "Evaluated quiz submission"
    );

    result
}
