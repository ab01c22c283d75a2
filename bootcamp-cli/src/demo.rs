//! Chapter drivers: build sample records, call the core functions in a
//! fixed order and write the rendered text.

use std::io::Write;

use anyhow::{Result, bail};
use bootcamp_core::basics::{self, IntegerArithmetic, TextStats};
use bootcamp_core::control::{self, Person, Shape};
use bootcamp_core::functions;
use bootcamp_core::optionals;
use bootcamp_core::profile::{Address, UNKNOWN_CITY, UserId, create_user, validate_email};
use bootcamp_core::report;
use bootcamp_core::roster::{RosterFile, ingest_all};
use bootcamp_core::tuples::{self, Point, StudentScore};
use bootcamp_core::{GradeBook, Student, grade_score};

pub const CHAPTERS: &[&str] = &[
    "basics",
    "variables",
    "control",
    "functions",
    "optionals",
    "tuples",
];

pub fn run_chapter(name: &str, out: &mut impl Write) -> Result<()> {
    match name {
        "basics" => basics_chapter(out),
        "variables" => variables_chapter(out),
        "control" => control_chapter(out),
        "functions" => functions_chapter(out),
        "optionals" => optionals_chapter(out),
        "tuples" => tuples_chapter(out),
        "all" => {
            for chapter in CHAPTERS {
                run_chapter(chapter, out)?;
            }
            Ok(())
        }
        other => bail!(
            "unknown chapter: {other} (expected one of {}, all)",
            CHAPTERS.join(", ")
        ),
    }
}

fn heading(out: &mut impl Write, title: &str) -> Result<()> {
    writeln!(out, "\n## {title}")?;
    Ok(())
}

fn basics_chapter(out: &mut impl Write) -> Result<()> {
    heading(out, "Chapter 2: Basic Types")?;

    writeln!(out, "number: 2 as text: {:?}", basics::int_to_text(2))?;
    writeln!(out, "\"5\" as integer: {:?}", basics::parse_int("5"))?;
    writeln!(out, "3.99 truncated: {:?}", basics::truncate_to_int(3.99))?;
    writeln!(out, "42 as float: {:?}", basics::int_to_float(42))?;

    let name = "Raghu";
    let stats = TextStats::of(name);
    writeln!(
        out,
        "{name}: {} characters, upper {}, lower {}",
        stats.chars, stats.upper, stats.lower
    )?;
    let term = "Rag";
    if basics::contains_term(name, term) {
        writeln!(out, "yes, the search term {term} was found in {name}")?;
    } else {
        writeln!(out, "no search term in the name")?;
    }

    if let Some(result) = IntegerArithmetic::of(10, 3) {
        writeln!(
            out,
            "10 and 3: sum {}, difference {}, product {}, quotient {}, remainder {}",
            result.sum, result.difference, result.product, result.quotient, result.remainder
        )?;
    }
    if let Some(q) = basics::float_quotient(10, 3) {
        writeln!(out, "10 / 3 as float: {}", basics::round_to_places(q, 4))?;
    }

    for analysis in basics::analyze(&["42", "3.14159", "Hello", "-273.15", ""]) {
        writeln!(out, "{}", report::numeric_report(&analysis))?;
    }
    Ok(())
}

fn variables_chapter(out: &mut impl Write) -> Result<()> {
    heading(out, "Chapter 3: User Profile")?;

    let mut user = match create_user(UserId(12345), "SwiftLearner", 25, Some("learner@example.com")) {
        Ok(user) => user,
        Err(err) => {
            writeln!(out, "{}", report::user_rejection(&err))?;
            return Ok(());
        }
    };
    write!(out, "{}", report::user_summary(&user))?;

    match user.update_age(26) {
        Ok(update) => writeln!(out, "{update}")?,
        Err(err) => writeln!(out, "{}", report::user_rejection(&err))?,
    }
    match user.update_email("not-an-email") {
        Ok(update) => writeln!(out, "{update}")?,
        Err(err) => writeln!(out, "{}", report::user_rejection(&err))?,
    }
    match user.update_age(0) {
        Ok(update) => writeln!(out, "{update}")?,
        Err(err) => writeln!(out, "{}", report::user_rejection(&err))?,
    }
    write!(out, "{}", report::user_summary(&user))?;
    Ok(())
}

fn control_chapter(out: &mut impl Write) -> Result<()> {
    heading(out, "Chapter 4: Control Flow")?;

    let mut people = vec![Person::new("Bob", 30), Person::new("Alice", 25)];
    writeln!(out, "Alice older than Bob: {}", people[1] > people[0])?;
    control::sort_by_age(&mut people);
    let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
    writeln!(out, "sorted by age: {names:?}")?;

    writeln!(out, "15 is {:?}", control::parity(15))?;
    writeln!(out, "(10, 20) is {:?}", control::quadrant(10, 20))?;
    writeln!(out, "(5, 5) is {:?}", control::diagonal(5, 5))?;
    writeln!(out, "{}", Shape::Circle { radius: 5.0 }.describe())?;
    writeln!(out, "Status: {}", control::age_status(20))?;
    writeln!(out, "Display name: {}", optionals::display_name(None, None))?;

    for raw in [95, 85, 72, 64, 30, 120] {
        match grade_score(raw) {
            Ok(verdict) => writeln!(out, "{}", report::grade_verdict(&verdict))?,
            Err(err) => writeln!(out, "{}", report::grade_rejection(raw, &err))?,
        }
    }
    Ok(())
}

fn functions_chapter(out: &mut impl Write) -> Result<()> {
    heading(out, "Chapter 5: Functions")?;

    let add_five = functions::make_adder(5);
    for (label, value) in [
        ("sum(1, 2, 3)", functions::sum(&[1, 2, 3])),
        ("process_number(11)", functions::process_number(11)),
        (
            "calculate(2, 3, multiply)",
            functions::calculate(2, 3, functions::multiply),
        ),
        ("add_five(10)", add_five(10)),
        ("add_five(i64::MAX)", add_five(i64::MAX)),
    ] {
        writeln!(out, "{label} = {}", report::checked_value(value))?;
    }

    let mut alice = Student::new("Alice");
    let mut bob = Student::new("Bob");
    for raw in [95, 87, 92] {
        record_grade(out, &mut alice, raw)?;
    }
    for raw in [78, 85, 82, 105] {
        record_grade(out, &mut bob, raw)?;
    }

    writeln!(out)?;
    write!(out, "{}", report::student_report(&alice))?;
    writeln!(out)?;
    write!(out, "{}", report::student_report(&bob))?;
    Ok(())
}

fn record_grade(out: &mut impl Write, student: &mut Student, raw: i64) -> Result<()> {
    match student.add_grade(raw) {
        Ok(added) => writeln!(out, "{added}")?,
        Err(err) => writeln!(out, "{}", report::grade_rejection(raw, &err))?,
    }
    Ok(())
}

fn optionals_chapter(out: &mut impl Write) -> Result<()> {
    heading(out, "Chapter 6: Optionals")?;

    writeln!(out, "{}", optionals::greeting(Some("raghu"), None))?;
    writeln!(out, "{}", optionals::greeting(None, Some(30)))?;
    writeln!(out, "Display name: {}", optionals::display_name(None, Some("alice@example.com")))?;
    writeln!(
        out,
        "Valid numbers: {:?}",
        optionals::compact(&[Some(1), None, Some(3), None, Some(5)])
    )?;
    let numbers = [1, 2, 3, 4, 5];
    let no_scores: Option<&[i64]> = None;
    writeln!(out, "First number: {}", optionals::first_or(Some(&numbers[..]), 0))?;
    writeln!(out, "First score: {}", optionals::first_or(no_scores, 0))?;
    writeln!(out, "Safe numbers count: {}", optionals::count_or_zero(Some(&numbers[..])))?;
    writeln!(out, "Safe scores count: {}", optionals::count_or_zero(no_scores))?;

    for (name, age, email) in [("Alice", 25, "alice@example.com"), ("", 10, "invalid")] {
        match create_user(UserId(1), name, age, Some(email)) {
            Ok(user) => writeln!(out, "Success: User created: {}", user.name())?,
            Err(err) => writeln!(out, "{}", report::user_rejection(&err))?,
        }
    }
    match validate_email("heshu") {
        Ok(email) => writeln!(out, "valid email: {email}")?,
        Err(err) => writeln!(out, "{}", report::user_rejection(&err))?,
    }

    let alice = create_user(UserId(1), "Alice", 25, None)?
        .with_address(Address::new("Main St", "Boston"));
    let bob = create_user(UserId(2), "Bob", 30, None)?;
    writeln!(out, "User city: {}", alice.city_or(UNKNOWN_CITY))?;
    writeln!(out, "User city: {}", bob.city_or(UNKNOWN_CITY))?;

    let mut book = GradeBook::new();
    for (student, subject, score) in [
        ("Alice", "Math", 95),
        ("Alice", "Science", 87),
        ("Bob", "Math", 78),
        ("Bob", "Science", 92),
        ("Charlie", "Math", 101),
    ] {
        if let Err(err) = book.add_grade(student, subject, score) {
            writeln!(out, "{}", report::grade_rejection(score, &err))?;
        }
    }
    write!(out, "{}", report::gradebook_summary(&book))?;
    let alice_math = book.grade_for("Alice", "Math");
    writeln!(
        out,
        "Alice in Math: {}",
        alice_math.map_or_else(|| report::NO_DATA.to_string(), |s| s.to_string())
    )?;
    Ok(())
}

fn tuples_chapter(out: &mut impl Write) -> Result<()> {
    heading(out, "Chapter 7: Tuples")?;

    writeln!(out, "{}", tuples::person_info())?;

    match tuples::divide_with_remainder(17, 5) {
        Some(result) => writeln!(out, "17 / 5 = {result}")?,
        None => writeln!(out, "cannot divide by zero")?,
    }
    match tuples::divide_with_remainder(17, 0) {
        Some(result) => writeln!(out, "17 / 0 = {result}")?,
        None => writeln!(out, "cannot divide by zero")?,
    }
    if let Some(mm) = tuples::find_min_max(&[2, 34, 1, 45]) {
        writeln!(out, "min {}, max {}", mm.min, mm.max)?;
    }

    let mut points = vec![
        Point::new(1, 3),
        Point::new(2, 1),
        Point::new(1, 2),
        Point::new(3, 1),
    ];
    tuples::sort_points(&mut points);
    let rendered: Vec<String> = points.iter().map(|p| format!("({}, {})", p.x, p.y)).collect();
    writeln!(out, "Sorted points: {}", rendered.join(" "))?;

    let mut students = vec![
        StudentScore::new("Alice", 95),
        StudentScore::new("Bob", 87),
        StudentScore::new("Charlie", 95),
        StudentScore::new("Diana", 92),
    ];
    tuples::rank_students(&mut students);
    for (rank, student) in students.iter().enumerate() {
        writeln!(out, "{}. {} ({})", rank + 1, student.name, student.grade)?;
    }
    Ok(())
}

/// Render reports for every record loaded from roster files.
pub fn run_roster(files: &[RosterFile], out: &mut impl Write) -> Result<()> {
    heading(out, "Roster")?;
    for file in files {
        writeln!(out, "loaded {}", file.path.display())?;
    }

    let ingested = ingest_all(files);
    for student in &ingested.students {
        writeln!(out)?;
        write!(out, "{}", report::student_report(student))?;
    }
    if !ingested.gradebook.is_empty() {
        writeln!(out)?;
        write!(out, "{}", report::gradebook_summary(&ingested.gradebook))?;
    }
    for user in &ingested.users {
        write!(out, "{}", report::user_summary(user))?;
    }
    for rejected in &ingested.rejected {
        writeln!(out, "rejected {}: {}", rejected.source, rejected.reason)?;
    }
    Ok(())
}

/// Grade calculator for a single score from the command line.
pub fn run_score(raw: i64, out: &mut impl Write) -> Result<()> {
    match grade_score(raw) {
        Ok(verdict) => writeln!(out, "{}", report::grade_verdict(&verdict))?,
        Err(err) => writeln!(out, "{}", report::grade_rejection(raw, &err))?,
    }
    Ok(())
}
