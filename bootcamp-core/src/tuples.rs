//! Small named records that replace positional tuples.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonInfo {
    pub name: String,
    pub age: u32,
}

impl PersonInfo {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        PersonInfo {
            name: name.into(),
            age,
        }
    }
}

impl fmt::Display for PersonInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person: {}, Age: {}", self.name, self.age)
    }
}

/// Named pair returned from a function instead of a bare tuple.
pub fn person_info() -> PersonInfo {
    PersonInfo::new("Bob", 30)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionResult {
    pub quotient: i64,
    pub remainder: i64,
}

impl fmt::Display for DivisionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} r {}", self.quotient, self.remainder)
    }
}

/// `None` when `b` is zero (or the division overflows).
pub fn divide_with_remainder(a: i64, b: i64) -> Option<DivisionResult> {
    Some(DivisionResult {
        quotient: a.checked_div(b)?,
        remainder: a.checked_rem(b)?,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinMax {
    pub min: i64,
    pub max: i64,
}

pub fn find_min_max(numbers: &[i64]) -> Option<MinMax> {
    let (first, rest) = numbers.split_first()?;
    let (min, max) = rest
        .iter()
        .fold((*first, *first), |(min, max), n| (min.min(*n), max.max(*n)));
    Some(MinMax { min, max })
}

/// Points compare by `x`, then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

pub fn sort_points(points: &mut [Point]) {
    points.sort();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentScore {
    pub name: String,
    pub grade: u32,
}

impl StudentScore {
    pub fn new(name: impl Into<String>, grade: u32) -> Self {
        StudentScore {
            name: name.into(),
            grade,
        }
    }
}

/// Highest grade first; equal grades in name order.
pub fn rank_students(students: &mut [StudentScore]) {
    students.sort_by(|a, b| b.grade.cmp(&a.grade).then_with(|| a.name.cmp(&b.name)));
}
