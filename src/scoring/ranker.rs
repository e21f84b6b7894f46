// src/scoring/ranker.rs

use crate::models::recommendation::{ScoreResult, Stream, StreamScore};

/// Weighted match of the score profile against one stream.
pub fn stream_match(result: &ScoreResult, stream: Stream) -> f64 {
    stream
        .weights()
        .iter()
        .map(|&(aptitude, weight)| weight * result.percentage_for(aptitude))
        .sum()
}

/// Ranks all streams by match, best first.
///
/// Streams are inserted in priority order and the sort is stable, so equal
/// matches keep Science > Commerce > Arts.
pub fn rank_streams(result: &ScoreResult) -> Vec<StreamScore> {
    let mut ranked: Vec<StreamScore> = Stream::ALL
        .iter()
        .map(|&stream| StreamScore {
            stream,
            match_fraction: stream_match(result, stream),
        })
        .collect();

    ranked.sort_by(|a, b| b.match_fraction.total_cmp(&a.match_fraction));
    ranked
}
