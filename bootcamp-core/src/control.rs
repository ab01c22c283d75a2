//! Comparison, pattern matching and conditional expressions.

use std::cmp::Ordering;
use std::f64::consts::PI;

/// A person ordered by age. Name breaks ties so the ordering stays total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Person {
            name: name.into(),
            age,
        }
    }
}

impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        self.age
            .cmp(&other.age)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Youngest first.
pub fn sort_by_age(people: &mut [Person]) {
    people.sort();
}

pub fn oldest(people: &[Person]) -> Option<&Person> {
    people.iter().max()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

pub fn parity(n: i64) -> Parity {
    match n {
        n if n % 2 == 0 => Parity::Even,
        _ => Parity::Odd,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
    Outside,
}

/// Classify a point on the `-5..=5` grid. Axis points belong to the first
/// band listed that contains them.
pub fn quadrant(x: i64, y: i64) -> Quadrant {
    match (x, y) {
        (0..=5, 0..=5) => Quadrant::First,
        (-5..=0, 0..=5) => Quadrant::Second,
        (-5..=0, -5..=0) => Quadrant::Third,
        (0..=5, -5..=0) => Quadrant::Fourth,
        _ => Quadrant::Outside,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagonal {
    Diagonal,
    AntiDiagonal,
    Elsewhere,
}

pub fn diagonal(x: i64, y: i64) -> Diagonal {
    match (x, y) {
        (x, y) if x == y => Diagonal::Diagonal,
        (x, y) if y.checked_neg() == Some(x) => Diagonal::AntiDiagonal,
        _ => Diagonal::Elsewhere,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
}

impl Shape {
    pub fn describe(&self) -> String {
        match self {
            Shape::Circle { radius } => format!("Circle with radius {radius}"),
            Shape::Rectangle { width, height } => format!("Rectangle {width}x{height}"),
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Shape::Circle { radius } => PI * radius * radius,
            Shape::Rectangle { width, height } => width * height,
        }
    }
}

pub const ADULT_AGE: u32 = 18;

pub fn age_status(age: u32) -> &'static str {
    if age >= ADULT_AGE { "Adult" } else { "Minor" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn people_sort_by_age() {
        let mut people = vec![Person::new("Bob", 30), Person::new("Alice", 25)];
        assert!(people[0] > people[1]);
        sort_by_age(&mut people);
        assert_eq!(people[0].name, "Alice");
        assert_eq!(oldest(&people).map(|p| p.name.as_str()), Some("Bob"));
        assert_eq!(oldest(&[]), None);
    }

    #[test]
    fn equal_ages_order_by_name() {
        let a = Person::new("Ann", 40);
        let b = Person::new("Ben", 40);
        assert!(a < b);
    }

    #[test_case(15 => Parity::Odd)]
    #[test_case(0 => Parity::Even)]
    #[test_case(-3 => Parity::Odd; "negative odd")]
    #[test_case(-4 => Parity::Even; "negative even")]
    #[test_case(i64::MIN => Parity::Even; "min")]
    #[test_case(i64::MAX => Parity::Odd; "max")]
    fn parity_cases(n: i64) -> Parity {
        parity(n)
    }

    #[test_case(3, 4 => Quadrant::First)]
    #[test_case(-3, 4 => Quadrant::Second)]
    #[test_case(-3, -4 => Quadrant::Third)]
    #[test_case(3, -4 => Quadrant::Fourth)]
    #[test_case(0, 0 => Quadrant::First; "origin matches first band")]
    #[test_case(10, 20 => Quadrant::Outside)]
    fn quadrant_cases(x: i64, y: i64) -> Quadrant {
        quadrant(x, y)
    }

    #[test_case(5, 5 => Diagonal::Diagonal)]
    #[test_case(4, -4 => Diagonal::AntiDiagonal)]
    #[test_case(1, 2 => Diagonal::Elsewhere)]
    #[test_case(0, i64::MIN => Diagonal::Elsewhere; "min has no negation")]
    #[test_case(i64::MIN, i64::MIN => Diagonal::Diagonal; "min on diagonal")]
    #[test_case(i64::MAX, -i64::MAX => Diagonal::AntiDiagonal; "max anti diagonal")]
    fn diagonal_cases(x: i64, y: i64) -> Diagonal {
        diagonal(x, y)
    }

    #[test]
    fn shapes() {
        let circle = Shape::Circle { radius: 5.0 };
        assert_eq!(circle.describe(), "Circle with radius 5");
        assert!((circle.area() - 78.539_816).abs() < 1e-5);
        let rect = Shape::Rectangle {
            width: 2.0,
            height: 3.5,
        };
        assert_eq!(rect.describe(), "Rectangle 2x3.5");
        assert_eq!(rect.area(), 7.0);
    }

    #[test]
    fn adult_boundary() {
        assert_eq!(age_status(20), "Adult");
        assert_eq!(age_status(18), "Adult");
        assert_eq!(age_status(17), "Minor");
    }
}
