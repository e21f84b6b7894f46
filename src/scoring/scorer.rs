// src/scoring/scorer.rs

use std::collections::{BTreeMap, HashMap};

use crate::models::{
    quiz::{Aptitude, AnswerOption, Category, QuizDefinition, Submission},
    recommendation::ScoreResult,
};

/// Matches a submission against the quiz's answer key.
///
/// Every question adds its points to the maximum (and to its aptitude's
/// maximum, if it has one). Points are earned only when the submitted option
/// equals the correct one; missing or unparseable answers earn nothing.
/// Sums saturate at `u32::MAX` rather than overflow.
pub fn score(quiz: &QuizDefinition, submission: &Submission) -> ScoreResult {
    // Later entries overwrite earlier ones: last answer wins.
    let answers: HashMap<i64, &str> = submission
        .answers
        .iter()
        .map(|a| (a.question_id, a.selected_option.as_str()))
        .collect();

    let mut total_score = 0;
    let mut max_score = 0;
    let mut per_category_score: BTreeMap<Aptitude, u32> =
        Aptitude::ALL.iter().map(|&a| (a, 0)).collect();
    let mut per_category_max = per_category_score.clone();

    for question in &quiz.questions {
        max_score = u32::saturating_add(max_score, question.points);

        let aptitude = question.category.aptitude();
        match &question.category {
            Category::Known(aptitude) => {
                let max = per_category_max.entry(*aptitude).or_default();
                *max = max.saturating_add(question.points);
            }
            Category::Unrecognized(raw) => {
                tracing::debug!(
                    quiz_id = quiz.id,
                    question_id = question.id,
                    "Unrecognized category '{}', counted toward total only",
                    raw
                );
            }
        }

        let correct = answers
            .get(&question.id)
            .and_then(|raw| raw.parse::<AnswerOption>().ok())
            .is_some_and(|selected| selected == question.correct_option);

        if correct {
            total_score = u32::saturating_add(total_score, question.points);
            if let Some(aptitude) = aptitude {
                let earned = per_category_score.entry(aptitude).or_default();
                *earned = earned.saturating_add(question.points);
            }
        }
    }

    ScoreResult {
        total_score,
        max_score,
        per_category_score,
        per_category_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quiz::{Answer, Question};

    fn question(id: i64, category: &str, correct: AnswerOption, points: u32) -> Question {
        Question {
            id,
            category: Category::from(category),
            correct_option: correct,
            points,
        }
    }

    fn submission(answers: &[(i64, &str)]) -> Submission {
        Submission {
            quiz_id: 1,
            answers: answers
                .iter()
                .map(|(id, opt)| Answer {
                    question_id: *id,
                    selected_option: opt.to_string(),
                })
                .collect(),
        }
    }

    fn mixed_quiz() -> QuizDefinition {
        QuizDefinition {
            id: 1,
            title: "General Aptitude".to_string(),
            questions: vec![
                question(1, "mathematical", AnswerOption::A, 2),
                question(2, "verbal", AnswerOption::B, 2),
                question(3, "analytical", AnswerOption::A, 3),
                question(4, "technical", AnswerOption::C, 2),
            ],
        }
    }

    #[test]
    fn test_score_all_correct() {
        let quiz = mixed_quiz();
        let result = score(&quiz, &submission(&[(1, "A"), (2, "B"), (3, "A"), (4, "C")]));

        assert_eq!(result.total_score, 9);
        assert_eq!(result.max_score, 9);
        for aptitude in Aptitude::ALL {
            assert_eq!(result.earned(aptitude), result.max(aptitude));
        }
    }

    #[test]
    fn test_score_case_insensitive_options() {
        let quiz = mixed_quiz();
        let result = score(&quiz, &submission(&[(1, "a"), (2, "b")]));

        assert_eq!(result.total_score, 4);
        assert_eq!(result.earned(Aptitude::Mathematical), 2);
        assert_eq!(result.earned(Aptitude::Verbal), 2);
    }

    #[test]
    fn test_score_missing_and_invalid_answers_are_incorrect() {
        let quiz = mixed_quiz();
        let result = score(&quiz, &submission(&[(1, "E"), (2, ""), (3, " A "), (99, "A")]));

        assert_eq!(result.total_score, 0);
        assert_eq!(result.max_score, 9);
    }

    #[test]
    fn test_score_last_duplicate_answer_wins() {
        let quiz = mixed_quiz();

        let result = score(&quiz, &submission(&[(1, "B"), (1, "A")]));
        assert_eq!(result.earned(Aptitude::Mathematical), 2);

        let result = score(&quiz, &submission(&[(1, "A"), (1, "B")]));
        assert_eq!(result.earned(Aptitude::Mathematical), 0);
    }

    #[test]
    fn test_score_unrecognized_category_counts_toward_total_only() {
        let quiz = QuizDefinition {
            id: 2,
            title: "Mixed".to_string(),
            questions: vec![
                question(1, "history", AnswerOption::A, 5),
                question(2, "english", AnswerOption::D, 1),
            ],
        };
        let result = score(&quiz, &submission(&[(1, "A"), (2, "D")]));

        assert_eq!(result.total_score, 6);
        assert_eq!(result.max_score, 6);
        assert_eq!(result.max(Aptitude::Verbal), 1);
        let category_max: u32 = result.per_category_max.values().sum();
        assert_eq!(category_max, 1);
    }

    #[test]
    fn test_score_category_max_sums_to_max_score() {
        let quiz = mixed_quiz();
        let result = score(&quiz, &submission(&[]));

        let category_max: u32 = result.per_category_max.values().sum();
        assert_eq!(category_max, result.max_score);
        assert_eq!(result.per_category_max.len(), 4);
        assert_eq!(result.total_score, 0);
    }

    #[test]
    fn test_score_huge_points_saturate() {
        let quiz = QuizDefinition {
            id: 4,
            title: "Oversized".to_string(),
            questions: vec![
                question(1, "verbal", AnswerOption::A, u32::MAX),
                question(2, "verbal", AnswerOption::B, 1),
                question(3, "history", AnswerOption::C, u32::MAX),
            ],
        };
        let result = score(&quiz, &submission(&[(1, "A"), (2, "B"), (3, "C")]));

        assert_eq!(result.max_score, u32::MAX);
        assert_eq!(result.total_score, u32::MAX);
        assert_eq!(result.max(Aptitude::Verbal), u32::MAX);
        assert_eq!(result.earned(Aptitude::Verbal), u32::MAX);
        assert_eq!(result.overall_percentage(), 100.0);
    }

    #[test]
    fn test_score_empty_quiz() {
        let quiz = QuizDefinition {
            id: 3,
            title: "Empty".to_string(),
            questions: vec![],
        };
        let result = score(&quiz, &submission(&[(1, "A")]));

        assert_eq!(result.total_score, 0);
        assert_eq!(result.max_score, 0);
        assert_eq!(result.overall_percentage(), 0.0);
    }
}
