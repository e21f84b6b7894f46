// src/models/quiz.rs

use std::{collections::HashSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::config::{MAX_QUESTION_POINTS, MAX_QUIZ_QUESTIONS};

/// The four aptitude buckets a question can be scored into.
///
/// Declaration order is significant: it is the tie-break order whenever two
/// aptitudes score equally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum Aptitude {
    Mathematical,
    Verbal,
    Analytical,
    Technical,
}

impl Aptitude {
    pub const ALL: [Aptitude; 4] = [
        Aptitude::Mathematical,
        Aptitude::Verbal,
        Aptitude::Analytical,
        Aptitude::Technical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Aptitude::Mathematical => "Mathematical",
            Aptitude::Verbal => "Verbal",
            Aptitude::Analytical => "Analytical",
            Aptitude::Technical => "Technical",
        }
    }

    /// Short description shown alongside the quiz categories.
    pub fn description(self) -> &'static str {
        match self {
            Aptitude::Mathematical => "Problem-solving, arithmetic, numerical reasoning",
            Aptitude::Verbal => "Reading comprehension, vocabulary, language skills",
            Aptitude::Analytical => "Pattern recognition, logical reasoning, critical thinking",
            Aptitude::Technical => "Science concepts, technical aptitude, applied knowledge",
        }
    }
}

impl fmt::Display for Aptitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category label attached to a question.
///
/// Labels are matched case-insensitively against a small vocabulary of
/// aliases. Anything outside it is kept as `Unrecognized`: such questions still
/// count toward the total and maximum score, but not toward any aptitude.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Known(Aptitude),
    Unrecognized(String),
}

impl Category {
    pub fn aptitude(&self) -> Option<Aptitude> {
        match self {
            Category::Known(aptitude) => Some(*aptitude),
            Category::Unrecognized(_) => None,
        }
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        let aptitude = match raw.trim().to_lowercase().as_str() {
            "mathematical" | "mathematics" | "numerical" => Aptitude::Mathematical,
            "verbal" | "language" | "english" => Aptitude::Verbal,
            "analytical" | "logical" | "reasoning" => Aptitude::Analytical,
            "technical" | "science" | "physics" | "chemistry" => Aptitude::Technical,
            _ => return Category::Unrecognized(raw.to_string()),
        };
        Category::Known(aptitude)
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        Category::from(raw.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Known(aptitude) => aptitude.label().to_string(),
            Category::Unrecognized(raw) => raw,
        }
    }
}

/// One of the four multiple-choice options. Parsing accepts a single letter
/// in either case and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String")]
pub enum AnswerOption {
    A,
    B,
    C,
    D,
}

impl FromStr for AnswerOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(AnswerOption::A),
            "B" => Ok(AnswerOption::B),
            "C" => Ok(AnswerOption::C),
            "D" => Ok(AnswerOption::D),
            _ => Err(format!("'{}' is not one of A, B, C, D", s)),
        }
    }
}

impl TryFrom<String> for AnswerOption {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn default_points() -> u32 {
    1
}

/// A single question of a quiz definition, reduced to what scoring needs.
/// Question and option texts are ignored when deserializing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Question {
    /// Unique within its quiz.
    pub id: i64,

    /// Raw category label, e.g. "mathematical" or "english".
    #[schema(value_type = String)]
    pub category: Category,

    pub correct_option: AnswerOption,

    /// Points awarded for a correct answer. Defaults to 1, at most 1000.
    #[serde(default = "default_points")]
    pub points: u32,
}

/// A quiz as supplied by the caller. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct QuizDefinition {
    pub id: i64,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(custom(function = validate_questions))]
    pub questions: Vec<Question>,
}

fn validate_questions(questions: &[Question]) -> Result<(), ValidationError> {
    if questions.len() > MAX_QUIZ_QUESTIONS {
        return Err(ValidationError::new("too_many_questions"));
    }
    let mut seen = HashSet::with_capacity(questions.len());
    for q in questions {
        if !seen.insert(q.id) {
            return Err(ValidationError::new("duplicate_question_id"));
        }
        if !(1..=MAX_QUESTION_POINTS).contains(&q.points) {
            return Err(ValidationError::new("points_out_of_range"));
        }
    }
    Ok(())
}

/// One submitted answer. `selected_option` is kept as raw text: anything that
/// is not a valid option simply scores as incorrect.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Answer {
    pub question_id: i64,
    pub selected_option: String,
}

/// A user's answers to one quiz. Questions may be left out; if a question id
/// appears more than once, the last answer wins.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Submission {
    pub quiz_id: i64,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_aliases_are_case_insensitive() {
        assert_eq!(Category::from("Mathematics"), Category::Known(Aptitude::Mathematical));
        assert_eq!(Category::from("ENGLISH"), Category::Known(Aptitude::Verbal));
        assert_eq!(Category::from("reasoning"), Category::Known(Aptitude::Analytical));
        assert_eq!(Category::from(" Physics "), Category::Known(Aptitude::Technical));
        assert_eq!(
            Category::from("history"),
            Category::Unrecognized("history".to_string())
        );
    }

    #[test]
    fn answer_option_parsing() {
        assert_eq!("b".parse::<AnswerOption>(), Ok(AnswerOption::B));
        assert_eq!("D".parse::<AnswerOption>(), Ok(AnswerOption::D));
        assert!(" b ".parse::<AnswerOption>().is_err());
        assert!("E".parse::<AnswerOption>().is_err());
        assert!("".parse::<AnswerOption>().is_err());
    }

    #[test]
    fn question_points_default_to_one() {
        let q: Question = serde_json::from_value(serde_json::json!({
            "id": 7,
            "category": "logical",
            "correct_option": "c",
            "text": "ignored"
        }))
        .unwrap();
        assert_eq!(q.points, 1);
        assert_eq!(q.correct_option, AnswerOption::C);
        assert_eq!(q.category.aptitude(), Some(Aptitude::Analytical));
    }

    #[test]
    fn invalid_answer_key_fails_to_deserialize() {
        let parsed: Result<Question, _> = serde_json::from_value(serde_json::json!({
            "id": 1,
            "category": "verbal",
            "correct_option": "Z"
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn duplicate_question_ids_fail_validation() {
        let quiz = QuizDefinition {
            id: 1,
            title: "Aptitude".to_string(),
            questions: vec![
                Question {
                    id: 1,
                    category: Category::from("verbal"),
                    correct_option: AnswerOption::A,
                    points: 1,
                },
                Question {
                    id: 1,
                    category: Category::from("verbal"),
                    correct_option: AnswerOption::B,
                    points: 1,
                },
            ],
        };
        assert!(quiz.validate().is_err());
    }

    #[test]
    fn out_of_range_points_fail_validation() {
        let quiz_with_points = |points: u32| QuizDefinition {
            id: 1,
            title: "Aptitude".to_string(),
            questions: vec![Question {
                id: 1,
                category: Category::from("verbal"),
                correct_option: AnswerOption::A,
                points,
            }],
        };
        assert!(quiz_with_points(0).validate().is_err());
        assert!(quiz_with_points(MAX_QUESTION_POINTS).validate().is_ok());
        assert!(quiz_with_points(MAX_QUESTION_POINTS + 1).validate().is_err());
        assert!(quiz_with_points(u32::MAX).validate().is_err());
    }

    #[test]
    fn empty_quiz_passes_validation() {
        let quiz = QuizDefinition {
            id: 1,
            title: "Empty".to_string(),
            questions: vec![],
        };
        assert!(quiz.validate().is_ok());
    }
}
