//! A grade book holding `(student, subject, score)` entries in insertion order.

use tracing::{debug, warn};

use crate::error::GradeError;
use crate::grading::{Score, average};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeEntry {
    pub student: String,
    pub subject: String,
    pub score: Score,
}

/// Average, highest and lowest score recorded for one subject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassStats {
    pub average: f64,
    pub highest: Score,
    pub lowest: Score,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeBook {
    entries: Vec<GradeEntry>,
}

impl GradeBook {
    pub fn new() -> Self {
        GradeBook::default()
    }

    /// Record a score. Scores outside `0..=100` are rejected and the book
    /// is left unchanged.
    pub fn add_grade(&mut self, student: &str, subject: &str, raw: i64) -> Result<(), GradeError> {
        let score = match Score::new(raw) {
            Ok(score) => score,
            Err(err) => {
                warn!(student, subject, error = %err, "rejected grade book entry");
                return Err(err);
            }
        };
        self.entries.push(GradeEntry {
            student: student.to_string(),
            subject: subject.to_string(),
            score,
        });
        debug!(student, subject, %score, total = self.entries.len(), "grade recorded");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[GradeEntry] {
        &self.entries
    }

    /// Distinct subjects in first-seen order.
    pub fn subjects(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.subject.as_str()) {
                seen.push(&entry.subject);
            }
        }
        seen
    }

    /// Distinct student names in first-seen order.
    pub fn students(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.student.as_str()) {
                seen.push(&entry.student);
            }
        }
        seen
    }

    fn scores_where(&self, pred: impl Fn(&GradeEntry) -> bool) -> Vec<Score> {
        self.entries
            .iter()
            .filter(|entry| pred(entry))
            .map(|entry| entry.score)
            .collect()
    }

    /// Average over every subject for `student`, `None` if they have no entries.
    pub fn average_for(&self, student: &str) -> Option<f64> {
        average(&self.scores_where(|entry| entry.student == student))
    }

    /// First score recorded for `student` in `subject`.
    pub fn grade_for(&self, student: &str, subject: &str) -> Option<Score> {
        self.entries
            .iter()
            .find(|entry| entry.student == student && entry.subject == subject)
            .map(|entry| entry.score)
    }

    pub fn class_stats(&self, subject: &str) -> Option<ClassStats> {
        let scores = self.scores_where(|entry| entry.subject == subject);
        Some(ClassStats {
            average: average(&scores)?,
            highest: *scores.iter().max()?,
            lowest: *scores.iter().min()?,
            count: scores.len(),
        })
    }
}
