//! Scores, averages and letter grades.
//!
//! `Score` is the only way to hold a grade value, and its constructor
//! rejects anything outside `0..=100`. Averages of an empty sequence are
//! `None` everywhere in this crate.

use std::fmt;

use tracing::{debug, warn};

use crate::error::GradeError;

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;

/// A validated score in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    pub fn new(value: i64) -> Result<Self, GradeError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
            return Err(GradeError::ScoreOutOfRange(value));
        }
        Ok(Score(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn average(scores: &[Score]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let total: u64 = scores.iter().map(|s| u64::from(s.0)).sum();
    Some(total as f64 / scores.len() as f64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// Band mapping: `[90, 100]` is A, then `[80, 90)`, `[70, 80)`,
    /// `[60, 70)`; everything else, NaN included, is F.
    pub fn from_average(average: f64) -> Self {
        match average {
            a if (90.0..=100.0).contains(&a) => LetterGrade::A,
            a if (80.0..90.0).contains(&a) => LetterGrade::B,
            a if (70.0..80.0).contains(&a) => LetterGrade::C,
            a if (60.0..70.0).contains(&a) => LetterGrade::D,
            _ => LetterGrade::F,
        }
    }

    pub fn from_score(score: Score) -> Self {
        Self::from_average(f64::from(score.0))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            LetterGrade::A => "Excellent work, keep it up!",
            LetterGrade::B => "Good job, a little more effort gets you an A.",
            LetterGrade::C => "Fair, review the material you missed.",
            LetterGrade::D => "Needs improvement, consider asking for help.",
            LetterGrade::F => "Needs help! Talk to your teacher about a study plan.",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the grade calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeVerdict {
    pub score: Score,
    pub letter: LetterGrade,
    pub advice: &'static str,
}

/// Validate a raw score and map it to a letter grade with advice.
pub fn grade_score(raw: i64) -> Result<GradeVerdict, GradeError> {
    let score = Score::new(raw)?;
    let letter = LetterGrade::from_score(score);
    Ok(GradeVerdict {
        score,
        letter,
        advice: letter.advice(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
    grades: Vec<Score>,
}

/// Confirmation returned by [`Student::add_grade`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeAdded {
    pub student: String,
    pub score: Score,
    pub count: usize,
}

impl fmt::Display for GradeAdded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Added grade {} for {}", self.score, self.student)
    }
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Student {
            name: name.into(),
            grades: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grades(&self) -> &[Score] {
        &self.grades
    }

    /// Append a grade. Out-of-range values are rejected and the student is
    /// left unchanged.
    pub fn add_grade(&mut self, raw: i64) -> Result<GradeAdded, GradeError> {
        let score = Score::new(raw).inspect_err(|err| {
            warn!(student = %self.name, error = %err, "rejected grade");
        })?;
        self.grades.push(score);
        debug!(student = %self.name, %score, "grade added");
        Ok(GradeAdded {
            student: self.name.clone(),
            score,
            count: self.grades.len(),
        })
    }

    pub fn average(&self) -> Option<f64> {
        average(&self.grades)
    }

    pub fn letter_grade(&self) -> Option<LetterGrade> {
        self.average().map(LetterGrade::from_average)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    fn scores(values: &[i64]) -> Vec<Score> {
        values
            .iter()
            .map(|v| Score::new(*v).expect("valid score"))
            .collect()
    }

    #[test]
    fn empty_average_is_none() {
        assert_eq!(average(&[]), None);
        assert_eq!(Student::new("Nobody").average(), None);
        assert_eq!(Student::new("Nobody").letter_grade(), None);
    }

    #[test]
    fn average_of_three_scores() {
        let avg = average(&scores(&[95, 87, 92])).expect("non-empty");
        assert!((avg - 91.333_333).abs() < 1e-5);
    }

    #[test_case(92.0 => LetterGrade::A; "92 is A")]
    #[test_case(90.0 => LetterGrade::A; "90 is A")]
    #[test_case(100.0 => LetterGrade::A; "100 is A")]
    #[test_case(89.99 => LetterGrade::B; "just below 90 is B")]
    #[test_case(85.0 => LetterGrade::B; "85 is B")]
    #[test_case(80.0 => LetterGrade::B; "80 is B")]
    #[test_case(70.0 => LetterGrade::C; "70 is C")]
    #[test_case(65.0 => LetterGrade::D; "65 is D")]
    #[test_case(59.9 => LetterGrade::F; "just below 60 is F")]
    #[test_case(40.0 => LetterGrade::F; "40 is F")]
    #[test_case(100.5 => LetterGrade::F; "above 100 is F")]
    #[test_case(f64::NAN => LetterGrade::F; "nan is F")]
    fn letter_bands(average: f64) -> LetterGrade {
        LetterGrade::from_average(average)
    }

    #[test]
    fn grade_calculator_validates_input() {
        let verdict = grade_score(85).expect("valid");
        assert_eq!(verdict.letter, LetterGrade::B);
        assert_eq!(verdict.advice, LetterGrade::B.advice());
        assert_eq!(grade_score(101), Err(GradeError::ScoreOutOfRange(101)));
        assert_eq!(grade_score(-1), Err(GradeError::ScoreOutOfRange(-1)));
    }

    #[test]
    fn student_grade_manager() {
        let mut alice = Student::new("Alice");
        for grade in [95, 87, 92] {
            alice.add_grade(grade).expect("valid grade");
        }
        let err = alice.add_grade(150).unwrap_err();
        assert_eq!(err, GradeError::ScoreOutOfRange(150));
        assert_eq!(alice.grades().len(), 3);
        assert_eq!(alice.letter_grade(), Some(LetterGrade::A));
    }

    #[test]
    fn add_grade_confirms() {
        let mut bob = Student::new("Bob");
        let added = bob.add_grade(78).expect("valid");
        assert_eq!(added.count, 1);
        assert_eq!(added.to_string(), "Added grade 78 for Bob");
    }

    proptest! {
        #[test]
        fn in_range_scores_are_accepted(value in 0i64..=100) {
            let mut student = Student::new("Prop");
            let before = student.grades().len();
            prop_assert!(student.add_grade(value).is_ok());
            prop_assert_eq!(student.grades().len(), before + 1);
        }

        #[test]
        fn out_of_range_scores_leave_student_unchanged(
            value in prop_oneof![i64::MIN..0i64, 101i64..=i64::MAX]
        ) {
            let mut student = Student::new("Prop");
            student.add_grade(50).expect("valid");
            let before = student.clone();
            prop_assert_eq!(student.add_grade(value), Err(GradeError::ScoreOutOfRange(value)));
            prop_assert_eq!(student, before);
        }

        #[test]
        fn average_stays_within_bounds(values in proptest::collection::vec(0i64..=100, 1..20)) {
            let avg = average(&scores(&values)).expect("non-empty");
            prop_assert!((0.0..=100.0).contains(&avg));
        }
    }
}
