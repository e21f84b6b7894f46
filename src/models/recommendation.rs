// src/models/recommendation.rs

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::quiz::Aptitude;

/// Raw outcome of matching a submission against a quiz's answer key.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ScoreResult {
    pub total_score: u32,
    pub max_score: u32,
    /// Earned points per aptitude. All four aptitudes are always present.
    pub per_category_score: BTreeMap<Aptitude, u32>,
    /// Available points per aptitude. All four aptitudes are always present.
    pub per_category_max: BTreeMap<Aptitude, u32>,
}

impl ScoreResult {
    pub fn earned(&self, aptitude: Aptitude) -> u32 {
        self.per_category_score.get(&aptitude).copied().unwrap_or(0)
    }

    pub fn max(&self, aptitude: Aptitude) -> u32 {
        self.per_category_max.get(&aptitude).copied().unwrap_or(0)
    }

    /// Fraction of the aptitude's points that were earned, in `[0, 1]`.
    /// An aptitude with no questions yields 0.
    pub fn percentage_for(&self, aptitude: Aptitude) -> f64 {
        match self.max(aptitude) {
            0 => 0.0,
            max => f64::from(self.earned(aptitude)) / f64::from(max),
        }
    }

    /// Overall percentage in `[0, 100]`, or 0 for an empty quiz.
    pub fn overall_percentage(&self) -> f64 {
        if self.max_score == 0 {
            return 0.0;
        }
        // Multiply before dividing so whole-number boundaries stay exact.
        f64::from(self.total_score) * 100.0 / f64::from(self.max_score)
    }
}

/// Academic streams the engine chooses between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Stream {
    Science,
    Commerce,
    Arts,
}

impl Stream {
    /// Priority order, also used to break ties between equal matches.
    pub const ALL: [Stream; 3] = [Stream::Science, Stream::Commerce, Stream::Arts];

    pub fn label(self) -> &'static str {
        match self {
            Stream::Science => "Science",
            Stream::Commerce => "Commerce",
            Stream::Arts => "Arts",
        }
    }

    /// Weight of each aptitude in this stream's profile. Weights sum to 1.
    pub fn weights(self) -> &'static [(Aptitude, f64)] {
        match self {
            Stream::Science => &[
                (Aptitude::Mathematical, 0.4),
                (Aptitude::Technical, 0.4),
                (Aptitude::Analytical, 0.2),
            ],
            Stream::Commerce => &[
                (Aptitude::Mathematical, 0.3),
                (Aptitude::Analytical, 0.4),
                (Aptitude::Verbal, 0.3),
            ],
            Stream::Arts => &[(Aptitude::Verbal, 0.6), (Aptitude::Analytical, 0.4)],
        }
    }

    /// The stream conventionally associated with a single aptitude.
    pub fn for_aptitude(aptitude: Aptitude) -> Self {
        match aptitude {
            Aptitude::Mathematical | Aptitude::Technical => Stream::Science,
            Aptitude::Analytical => Stream::Commerce,
            Aptitude::Verbal => Stream::Arts,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Stream::Science => {
                "Mathematics, Physics, Chemistry, Biology - leads to Engineering, Medical, Research"
            }
            Stream::Commerce => {
                "Mathematics, Economics, Accounting, Business Studies - leads to CA, MBA, Finance"
            }
            Stream::Arts => {
                "Languages, Social Sciences, History, Psychology - leads to Literature, Law, Social Work"
            }
        }
    }

    /// Human-readable scoring formula, e.g. "60% Verbal + 40% Analytical".
    pub fn formula(self) -> String {
        self.weights()
            .iter()
            .map(|(aptitude, weight)| format!("{}% {}", (weight * 100.0).round(), aptitude))
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

/// How well a score profile matches one stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct StreamScore {
    pub stream: Stream,
    /// Weighted average of aptitude percentages, in `[0, 1]`.
    pub match_fraction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, ToSchema)]
pub enum PerformanceLevel {
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Average,
    Good,
    #[serde(rename = "Very Good")]
    VeryGood,
    Excellent,
}

impl PerformanceLevel {
    /// Bands have inclusive lower bounds: exactly 85 is `Excellent`.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 85.0 {
            PerformanceLevel::Excellent
        } else if percentage >= 70.0 {
            PerformanceLevel::VeryGood
        } else if percentage >= 55.0 {
            PerformanceLevel::Good
        } else if percentage >= 40.0 {
            PerformanceLevel::Average
        } else {
            PerformanceLevel::NeedsImprovement
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, ToSchema)]
pub enum CollegeTier {
    Foundation,
    #[serde(rename = "Tier-3")]
    Tier3,
    #[serde(rename = "Tier-2")]
    Tier2,
    #[serde(rename = "Tier-1")]
    Tier1,
    Premier,
}

impl CollegeTier {
    /// Same bands as [`PerformanceLevel::from_percentage`].
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 85.0 {
            CollegeTier::Premier
        } else if percentage >= 70.0 {
            CollegeTier::Tier1
        } else if percentage >= 55.0 {
            CollegeTier::Tier2
        } else if percentage >= 40.0 {
            CollegeTier::Tier3
        } else {
            CollegeTier::Foundation
        }
    }
}

/// Earned points per aptitude, plus the aptitude with the most raw points.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ScoreBreakdown {
    pub mathematical_score: u32,
    pub verbal_score: u32,
    pub analytical_score: u32,
    pub technical_score: u32,
    pub dominant_aptitude: Aptitude,
}

/// Final, display-ready outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RecommendationResult {
    pub total_score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub performance_level: PerformanceLevel,
    pub college_tier: CollegeTier,
    /// E.g. `["Science (73% match)"]` or `["Arts (Based on Verbal strength)"]`.
    pub recommended_streams: Vec<String>,
    pub breakdown: ScoreBreakdown,
}
