use std::fmt;
use thiserror::Error;

/// Which input a [`ValidationError`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// 1-based exam slot.
    Exam(usize),
    Exams,
    Activity,
    Coefficient,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exam(slot) => write!(f, "exam {}", slot),
            Self::Exams => write!(f, "exams"),
            Self::Activity => write!(f, "activity"),
            Self::Coefficient => write!(f, "coefficient"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid exam grade in subject #{subject} (exam {exam}): {value}")]
    InvalidGrade {
        subject: usize,
        exam: usize,
        value: String,
    },

    #[error("enter grades for subject #{subject}")]
    MissingGrades { subject: usize },

    #[error("invalid activity score in subject #{subject}: {}", .value.as_deref().unwrap_or("missing"))]
    InvalidActivityScore {
        subject: usize,
        value: Option<String>,
    },

    #[error("coefficient {value} in subject #{subject} is outside 1..=10")]
    InvalidCoefficient { subject: usize, value: u32 },

    #[error("subject #{subject} has {count} exams, at most 4 are allowed")]
    TooManyExams { subject: usize, count: usize },

    #[error("subject #{subject} declares {expected} exams but {found} were entered")]
    ExamCountMismatch {
        subject: usize,
        expected: usize,
        found: usize,
    },
}

impl ValidationError {
    pub fn subject(&self) -> usize {
        match self {
            Self::InvalidGrade { subject, .. }
            | Self::MissingGrades { subject }
            | Self::InvalidActivityScore { subject, .. }
            | Self::InvalidCoefficient { subject, .. }
            | Self::TooManyExams { subject, .. }
            | Self::ExamCountMismatch { subject, .. } => *subject,
        }
    }

    pub fn field(&self) -> Field {
        match self {
            Self::InvalidGrade { exam, .. } => Field::Exam(*exam),
            Self::MissingGrades { .. }
            | Self::TooManyExams { .. }
            | Self::ExamCountMismatch { .. } => Field::Exams,
            Self::InvalidActivityScore { .. } => Field::Activity,
            Self::InvalidCoefficient { .. } => Field::Coefficient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_subject_and_field() {
        let err = ValidationError::InvalidGrade {
            subject: 3,
            exam: 2,
            value: "21".to_string(),
        };
        assert_eq!(err.subject(), 3);
        assert_eq!(err.field(), Field::Exam(2));
        assert_eq!(
            err.to_string(),
            "invalid exam grade in subject #3 (exam 2): 21"
        );
    }

    #[test]
    fn missing_activity_value_reads_as_missing() {
        let err = ValidationError::InvalidActivityScore {
            subject: 1,
            value: None,
        };
        assert_eq!(err.field(), Field::Activity);
        assert_eq!(
            err.to_string(),
            "invalid activity score in subject #1: missing"
        );
    }
}
