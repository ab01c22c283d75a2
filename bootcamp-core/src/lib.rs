//! Core library for the Swift basics bootcamp exercises.
//!
//! Each chapter of the bootcamp follows the same shape: a small record,
//! a handful of pure functions that validate, transform or summarise it,
//! and a driver that prints the results. This crate holds the records and
//! the functions; rendering to text lives in [`report`] and the printing
//! driver lives in `bootcamp-cli`.
//!
//!   raw input (&str / i64 / roster TOML)
//!     -> validation   (profile, grading::Score)
//!     -> records      (User, Student, GradeBook)
//!     -> summaries    (average, LetterGrade, ClassStats)
//!     -> report       (String)

// ---------------------------------------------------------------------
// Error handling
// ---------------------------------------------------------------------

pub mod error;

// ---------------------------------------------------------------------
// Language basics: types, control flow, functions, optionals, tuples
// ---------------------------------------------------------------------

pub mod basics;
pub mod control;
pub mod functions;
pub mod optionals;
pub mod tuples;

// ---------------------------------------------------------------------
// Records and their validation
// ---------------------------------------------------------------------

pub mod profile;
pub mod grading;
pub mod gradebook;

// ---------------------------------------------------------------------
// Rendering and roster loading
// ---------------------------------------------------------------------

pub mod report;
pub mod roster;

// ---------------------------------------------------------------------
// Public API re-exports
// ---------------------------------------------------------------------

pub use error::{CoreError, GradeError, UserError};
pub use gradebook::{ClassStats, GradeBook};
pub use grading::{LetterGrade, Score, Student, average, grade_score};
pub use profile::{Address, User, UserId, create_user};
