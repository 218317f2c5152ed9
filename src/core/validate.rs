use crate::core::error::ValidationError;
use crate::core::model::{RawEntry, SubjectConfig};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 20.0;
pub const MIN_COEFFICIENT: u32 = 1;
pub const MAX_COEFFICIENT: u32 = 10;
pub const MAX_EXAMS: usize = 4;

/// Parses a raw entry into a score in `[MIN_SCORE, MAX_SCORE]`.
pub fn parse_score(raw: &RawEntry) -> Option<f64> {
    let value = match raw {
        RawEntry::Number(value) => *value,
        RawEntry::Text(text) => text.trim().parse::<f64>().ok()?,
    };

    (value.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&value)).then_some(value)
}

pub fn check_shape(config: &SubjectConfig, exams: &[RawEntry]) -> Result<(), ValidationError> {
    let subject = config.index;

    if !(MIN_COEFFICIENT..=MAX_COEFFICIENT).contains(&config.coefficient) {
        return Err(ValidationError::InvalidCoefficient {
            subject,
            value: config.coefficient,
        });
    }
    if exams.len() > MAX_EXAMS {
        return Err(ValidationError::TooManyExams {
            subject,
            count: exams.len(),
        });
    }
    // An empty list is reported as missing grades by `exam_scores`.
    if !exams.is_empty() && exams.len() != config.exam_count {
        return Err(ValidationError::ExamCountMismatch {
            subject,
            expected: config.exam_count,
            found: exams.len(),
        });
    }

    Ok(())
}

/// Stops at the first entry that fails to parse.
pub fn exam_scores(subject: usize, exams: &[RawEntry]) -> Result<Vec<f64>, ValidationError> {
    let mut scores = Vec::with_capacity(exams.len());

    for (idx, raw) in exams.iter().enumerate() {
        let Some(score) = parse_score(raw) else {
            return Err(ValidationError::InvalidGrade {
                subject,
                exam: idx + 1,
                value: raw.to_string(),
            });
        };
        scores.push(score);
    }

    if scores.is_empty() {
        return Err(ValidationError::MissingGrades { subject });
    }

    Ok(scores)
}

pub fn activity_score(subject: usize, raw: Option<&RawEntry>) -> Result<f64, ValidationError> {
    raw.and_then(parse_score)
        .ok_or_else(|| ValidationError::InvalidActivityScore {
            subject,
            value: raw.map(ToString::to_string),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_numeric_text() {
        assert_eq!(parse_score(&RawEntry::Number(12.5)), Some(12.5));
        assert_eq!(parse_score(&RawEntry::from(" 14 ")), Some(14.0));
        assert_eq!(parse_score(&RawEntry::from("0")), Some(0.0));
        assert_eq!(parse_score(&RawEntry::from("20")), Some(20.0));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert_eq!(parse_score(&RawEntry::Number(21.0)), None);
        assert_eq!(parse_score(&RawEntry::Number(-1.0)), None);
        assert_eq!(parse_score(&RawEntry::from("abc")), None);
        assert_eq!(parse_score(&RawEntry::blank()), None);
        assert_eq!(parse_score(&RawEntry::from("NaN")), None);
        assert_eq!(parse_score(&RawEntry::from("inf")), None);
    }

    #[test]
    fn first_bad_exam_is_reported() {
        let exams = vec![
            RawEntry::Number(10.0),
            RawEntry::from("x"),
            RawEntry::Number(25.0),
        ];
        let err = exam_scores(2, &exams).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidGrade {
                subject: 2,
                exam: 2,
                value: "\"x\"".to_string(),
            }
        );
    }

    #[test]
    fn empty_exam_list_is_missing_grades() {
        assert_eq!(
            exam_scores(4, &[]),
            Err(ValidationError::MissingGrades { subject: 4 })
        );
    }

    #[test]
    fn shape_checks_coefficient_and_counts() {
        let mut config = SubjectConfig::new(1);
        config.coefficient = 0;
        assert!(matches!(
            check_shape(&config, &[RawEntry::Number(1.0)]),
            Err(ValidationError::InvalidCoefficient { value: 0, .. })
        ));

        config.coefficient = 3;
        config.exam_count = 5;
        let five = vec![RawEntry::Number(1.0); 5];
        assert!(matches!(
            check_shape(&config, &five),
            Err(ValidationError::TooManyExams { count: 5, .. })
        ));

        config.exam_count = 2;
        assert!(matches!(
            check_shape(&config, &[RawEntry::Number(1.0)]),
            Err(ValidationError::ExamCountMismatch {
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn empty_exams_skip_count_mismatch() {
        let config = SubjectConfig::new(2);
        assert!(check_shape(&config, &[]).is_ok());
        assert_eq!(
            exam_scores(config.index, &[]),
            Err(ValidationError::MissingGrades { subject: 2 })
        );
    }

    #[test]
    fn missing_activity_is_rejected() {
        assert_eq!(
            activity_score(1, None),
            Err(ValidationError::InvalidActivityScore {
                subject: 1,
                value: None,
            })
        );
        assert_eq!(activity_score(1, Some(&RawEntry::Number(8.0))), Ok(8.0));
    }
}
