//! TOML roster files: sample students, grade book rows and users.
//!
//! A roster only describes raw rows. [`Roster::ingest_into`] pushes every
//! row through the validating constructors; rows that fail are collected
//! as [`Rejected`] entries rather than dropped.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::error::{CoreError, UserError};
use crate::gradebook::GradeBook;
use crate::grading::Student;
use crate::profile::{Address, User, UserId, create_user};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Roster {
    #[serde(default, rename = "student")]
    pub students: Vec<StudentRow>,
    #[serde(default, rename = "grade")]
    pub grades: Vec<GradeRow>,
    #[serde(default, rename = "user")]
    pub users: Vec<UserRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudentRow {
    pub name: String,
    #[serde(default)]
    pub grades: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradeRow {
    pub student: String,
    pub subject: String,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub email: Option<String>,
    pub address: Option<AddressRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddressRow {
    pub street: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterFile {
    pub path: PathBuf,
    pub roster: Roster,
}

/// A row that failed validation, with a short description of where it came from.
#[derive(Debug)]
pub struct Rejected {
    pub source: String,
    pub reason: CoreError,
}

/// Records built from one or more rosters.
#[derive(Debug, Default)]
pub struct Ingested {
    pub students: Vec<Student>,
    pub gradebook: GradeBook,
    pub users: Vec<User>,
    pub rejected: Vec<Rejected>,
}

impl Roster {
    pub fn from_toml_str(path: impl AsRef<Path>, contents: &str) -> Result<Self, CoreError> {
        toml::from_str(contents).map_err(|err| CoreError::RosterParse {
            path: path.as_ref().to_path_buf(),
            message: err.message().to_string(),
        })
    }

    pub fn ingest(&self) -> Ingested {
        let mut ingested = Ingested::default();
        self.ingest_into(&mut ingested);
        ingested
    }

    pub fn ingest_into(&self, out: &mut Ingested) {
        for row in &self.students {
            let mut student = Student::new(row.name.as_str());
            for &raw in &row.grades {
                if let Err(err) = student.add_grade(raw) {
                    out.reject(format!("student {} grade {raw}", row.name), err.into());
                }
            }
            out.students.push(student);
        }

        for row in &self.grades {
            if let Err(err) = out.gradebook.add_grade(&row.student, &row.subject, row.score) {
                out.reject(
                    format!("grade {} / {} = {}", row.student, row.subject, row.score),
                    err.into(),
                );
            }
        }

        for row in &self.users {
            match row.to_user() {
                Ok(user) => out.users.push(user),
                Err(err) => out.reject(format!("user #{}", row.id), err.into()),
            }
        }
    }
}

impl UserRow {
    /// Range-check the raw numbers, then build through [`create_user`].
    pub fn to_user(&self) -> Result<User, UserError> {
        let id = u64::try_from(self.id).map_err(|_| UserError::OutOfRange {
            field: "id",
            value: self.id,
        })?;
        let age = u32::try_from(self.age).map_err(|_| UserError::OutOfRange {
            field: "age",
            value: self.age,
        })?;
        let user = create_user(UserId(id), &self.name, age, self.email.as_deref())?;
        Ok(match &self.address {
            Some(address) => user.with_address(Address::new(&address.street, &address.city)),
            None => user,
        })
    }
}

impl Ingested {
    fn reject(&mut self, source: String, reason: CoreError) {
        warn!(%source, %reason, "roster row rejected");
        self.rejected.push(Rejected { source, reason });
    }
}

/// Bundled sample rosters shipped with the workspace.
pub fn default_roster_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../rosters")
}

/// Load a single roster file, or every `*.toml` file below a directory
/// (sorted by file name).
pub fn load_roster_files(root: impl AsRef<Path>) -> Result<Vec<RosterFile>, CoreError> {
    let root = root.as_ref();
    if !root.exists() {
        return Err(CoreError::MissingRoster(root.to_path_buf()));
    }

    let mut files = Vec::new();
    if root.is_file() {
        files.push(read_roster(root, root)?);
    } else {
        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = entry.inspect_err(|err| {
                warn!(root = %root.display(), error = %err, "failed to scan roster directory");
            })?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
                files.push(read_roster(root, path)?);
            }
        }
    }
    info!(root = %root.display(), count = files.len(), "loaded rosters");
    Ok(files)
}

fn read_roster(root: &Path, path: &Path) -> Result<RosterFile, CoreError> {
    let contents = fs::read_to_string(path)?;
    let relative = path.strip_prefix(root).unwrap_or(path);
    // strip_prefix of a file against itself yields an empty path
    let relative = if relative.as_os_str().is_empty() {
        path.file_name().map_or_else(|| path.to_path_buf(), PathBuf::from)
    } else {
        relative.to_path_buf()
    };
    let roster = Roster::from_toml_str(&relative, &contents)?;
    Ok(RosterFile {
        path: relative,
        roster,
    })
}

/// Ingest every file into one set of records.
pub fn ingest_all(files: &[RosterFile]) -> Ingested {
    let mut ingested = Ingested::default();
    for file in files {
        file.roster.ingest_into(&mut ingested);
    }
    ingested
}
