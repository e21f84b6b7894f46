// src/scoring/formatter.rs

use crate::{
    config::{MAX_RECOMMENDED_STREAMS, MIN_STREAM_MATCH},
    models::{
        quiz::Aptitude,
        recommendation::{
            CollegeTier, PerformanceLevel, RecommendationResult, ScoreBreakdown, ScoreResult,
            Stream, StreamScore,
        },
    },
};

/// Packages a score and its stream ranking into a display-ready result.
///
/// Recommends up to [`MAX_RECOMMENDED_STREAMS`] of the top streams whose match
/// is strictly above [`MIN_STREAM_MATCH`]. When none qualifies, falls back to
/// the stream of the single strongest aptitude.
pub fn format_recommendation(
    score: &ScoreResult,
    ranked_streams: &[StreamScore],
) -> RecommendationResult {
    let percentage = score.overall_percentage();

    let mut recommended_streams: Vec<String> = ranked_streams
        .iter()
        .take(MAX_RECOMMENDED_STREAMS)
        .filter(|s| s.match_fraction > MIN_STREAM_MATCH)
        .map(|s| format!("{} ({}% match)", s.stream.label(), match_percent(s.match_fraction)))
        .collect();

    if recommended_streams.is_empty() {
        let aptitude = strongest_aptitude(score);
        recommended_streams.push(format!(
            "{} (Based on {} strength)",
            Stream::for_aptitude(aptitude).label(),
            aptitude
        ));
    }

    RecommendationResult {
        total_score: score.total_score,
        max_score: score.max_score,
        percentage,
        performance_level: PerformanceLevel::from_percentage(percentage),
        college_tier: CollegeTier::from_percentage(percentage),
        recommended_streams,
        breakdown: breakdown(score),
    }
}

/// Rounds half up; match fractions are never negative.
fn match_percent(fraction: f64) -> i64 {
    (fraction * 100.0).round() as i64
}

/// Aptitude with the highest percentage. Ties go to the earliest in
/// [`Aptitude::ALL`].
pub fn strongest_aptitude(score: &ScoreResult) -> Aptitude {
    first_max_by(|a| score.percentage_for(a))
}

/// Aptitude with the most raw earned points, same tie-break.
pub fn dominant_aptitude(score: &ScoreResult) -> Aptitude {
    first_max_by(|a| f64::from(score.earned(a)))
}

fn first_max_by(key: impl Fn(Aptitude) -> f64) -> Aptitude {
    let mut best = Aptitude::ALL[0];
    let mut best_value = key(best);
    for &aptitude in &Aptitude::ALL[1..] {
        let value = key(aptitude);
        if value > best_value {
            best = aptitude;
            best_value = value;
        }
    }
    best
}

fn breakdown(score: &ScoreResult) -> ScoreBreakdown {
    ScoreBreakdown {
        mathematical_score: score.earned(Aptitude::Mathematical),
        verbal_score: score.earned(Aptitude::Verbal),
        analytical_score: score.earned(Aptitude::Analytical),
        technical_score: score.earned(Aptitude::Technical),
        dominant_aptitude: dominant_aptitude(score),
    }
}
