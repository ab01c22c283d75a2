//! Human-readable rendering of records and summaries.
//!
//! Nothing here prints; callers decide where the text goes.

use crate::basics::NumericReport;
use crate::control::age_status;
use crate::error::{GradeError, UserError};
use crate::gradebook::{ClassStats, GradeBook};
use crate::grading::{GradeVerdict, LetterGrade, Student};
use crate::profile::{UNKNOWN_CITY, User};

pub const NO_DATA: &str = "no data";
pub const OVERFLOW: &str = "overflow";

/// One decimal place, e.g. `91.333..` becomes `"91.3"`.
pub fn format_average(average: f64) -> String {
    format!("{average:.1}")
}

pub fn render_average(average: Option<f64>) -> String {
    average.map_or_else(|| NO_DATA.to_string(), format_average)
}

/// Result of a checked computation; `None` means it overflowed.
pub fn checked_value(value: Option<i64>) -> String {
    value.map_or_else(|| OVERFLOW.to_string(), |v| v.to_string())
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn student_report(student: &Student) -> String {
    let average = student.average();
    let letter = average
        .map(LetterGrade::from_average)
        .map_or(NO_DATA, LetterGrade::as_str);

    format!(
        "=== {}'s Report ===\nGrades: [{}]\nAverage: {}\nLetter Grade: {letter}\n",
        student.name(),
        join(student.grades()),
        render_average(average),
    )
}

pub fn user_summary(user: &User) -> String {
    format!(
        "User {}: {}\n  Age: {} ({})\n  Email: {}\n  City: {}\n",
        user.id(),
        user.name(),
        user.age(),
        age_status(user.age()),
        user.email().unwrap_or("(none)"),
        user.city_or(UNKNOWN_CITY),
    )
}

pub fn class_stats_line(subject: &str, stats: Option<&ClassStats>) -> String {
    match stats {
        Some(stats) => format!(
            "{subject}: average {}, highest {}, lowest {} ({} grades)",
            format_average(stats.average),
            stats.highest,
            stats.lowest,
            stats.count
        ),
        None => format!("{subject}: no grades recorded"),
    }
}

/// Per-student averages followed by per-subject statistics.
pub fn gradebook_summary(book: &GradeBook) -> String {
    let mut out = format!("=== Grade Book ({} entries) ===\n", book.len());
    for student in book.students() {
        let average = book.average_for(student);
        out.push_str(&format!("{student}: {}\n", render_average(average)));
    }
    for subject in book.subjects() {
        let stats = book.class_stats(subject);
        out.push_str(&class_stats_line(subject, stats.as_ref()));
        out.push('\n');
    }
    out
}

pub fn grade_verdict(verdict: &GradeVerdict) -> String {
    format!(
        "Score {}: {} - {}",
        verdict.score, verdict.letter, verdict.advice
    )
}

pub fn grade_rejection(raw: i64, err: &GradeError) -> String {
    format!("Invalid grade: {raw} ({err})")
}

pub fn user_rejection(err: &UserError) -> String {
    format!("UserError: {}", err.message())
}

pub fn numeric_report(report: &NumericReport) -> String {
    match (report.value, report.rounded) {
        (Some(value), Some(rounded)) => {
            format!("{:?}: numeric, value {value}, rounded {rounded}", report.input)
        }
        _ => format!("{:?}: not numeric", report.input),
    }
}
