use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// Continuous tone of a text in [-1.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct PolarityScore(f64);

impl PolarityScore {
    pub const NEUTRAL: PolarityScore = PolarityScore(0.0);

    /// Clamps into [-1.0, 1.0]; NaN collapses to neutral.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::NEUTRAL;
        }
        Self(value.clamp(-1.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for PolarityScore {
    fn from(value: f64) -> Self {
        PolarityScore::new(value)
    }
}

impl From<PolarityScore> for f64 {
    fn from(score: PolarityScore) -> f64 {
        score.0
    }
}

impl fmt::Display for PolarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Display order used by every table and chart.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "😊",
            SentimentLabel::Negative => "😠",
            SentimentLabel::Neutral => "😐",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    MachineLearning,
    DataStructures,
    WebDevelopment,
    DatabaseSystems,
}

impl Course {
    pub const ALL: [Course; 4] = [
        Course::MachineLearning,
        Course::DataStructures,
        Course::WebDevelopment,
        Course::DatabaseSystems,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Course::MachineLearning => "Machine Learning",
            Course::DataStructures => "Data Structures",
            Course::WebDevelopment => "Web Development",
            Course::DatabaseSystems => "Database Systems",
        }
    }

    /// Stable identifier used for command choices and component values.
    pub fn slug(self) -> &'static str {
        match self {
            Course::MachineLearning => "machine_learning",
            Course::DataStructures => "data_structures",
            Course::WebDevelopment => "web_development",
            Course::DatabaseSystems => "database_systems",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Course {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Course::ALL
            .into_iter()
            .find(|course| course.slug() == needle || course.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| InputError::UnknownCourse(needle.to_string()))
    }
}

/// A feedback submission exactly as it was typed in.
#[derive(Debug, Clone)]
pub struct FeedbackForm {
    pub student_id: String,
    pub course: Course,
    pub feedback: String,
}

impl FeedbackForm {
    pub fn new(student_id: impl Into<String>, course: Course, feedback: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            course,
            feedback: feedback.into(),
        }
    }

    /// Student id is checked before the feedback text, matching the form layout.
    pub fn validate(self) -> Result<ValidatedFeedback, InputError> {
        let student_id = self.student_id.trim();
        if student_id.is_empty() {
            return Err(InputError::MissingStudentId);
        }
        let feedback = self.feedback.trim();
        if feedback.is_empty() {
            return Err(InputError::MissingFeedback);
        }
        Ok(ValidatedFeedback {
            student_id: student_id.to_string(),
            course: self.course,
            feedback: feedback.to_string(),
        })
    }
}

/// Only obtainable through [`FeedbackForm::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedFeedback {
    student_id: String,
    course: Course,
    feedback: String,
}

impl ValidatedFeedback {
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn course(&self) -> Course {
        self.course
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackRecord {
    timestamp: DateTime<Utc>,
    student_id: String,
    course: Course,
    feedback: String,
    sentiment: SentimentLabel,
    polarity: PolarityScore,
}

impl FeedbackRecord {
    pub fn new(
        submission: ValidatedFeedback,
        sentiment: SentimentLabel,
        polarity: PolarityScore,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            student_id: submission.student_id,
            course: submission.course,
            feedback: submission.feedback,
            sentiment,
            polarity,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn course(&self) -> Course {
        self.course
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn sentiment(&self) -> SentimentLabel {
        self.sentiment
    }

    pub fn polarity(&self) -> PolarityScore {
        self.polarity
    }
}
