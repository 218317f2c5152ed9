use crate::core::classify::Classification;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A score as typed by the user: either already numeric or free text that
/// still has to parse as a real number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawEntry {
    Number(f64),
    Text(String),
}

impl RawEntry {
    pub fn blank() -> Self {
        Self::Text(String::new())
    }
}

impl From<f64> for RawEntry {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawEntry {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for RawEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Text(text) if text.trim().is_empty() => write!(f, "(empty)"),
            Self::Text(text) => write!(f, "{:?}", text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectConfig {
    /// 1-based position in the request.
    pub index: usize,
    pub name: String,
    pub coefficient: u32,
    pub exam_count: usize,
    pub has_activity: bool,
}

impl SubjectConfig {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            name: default_subject_name(index),
            coefficient: 1,
            exam_count: 1,
            has_activity: false,
        }
    }
}

pub fn default_subject_name(index: usize) -> String {
    format!("Subject {}", index)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectRequest {
    pub config: SubjectConfig,
    pub exams: Vec<RawEntry>,
    pub activity: Option<RawEntry>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreRequest {
    pub subjects: Vec<SubjectRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectResult {
    pub index: usize,
    pub name: String,
    pub coefficient: u32,
    pub has_activity: bool,
    pub exam_average: f64,
    pub final_average: f64,
    pub weighted_contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallResult {
    pub final_average: f64,
    pub total_coefficient: u32,
    pub classification: Classification,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub overall: OverallResult,
    pub subjects: Vec<SubjectResult>,
}
