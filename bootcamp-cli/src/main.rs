use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bootcamp_core::roster::load_roster_files;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod demo;

/// Runs the bootcamp chapters and prints their results.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "NAME",
        default_value = "all",
        help = "Chapter to run: basics, variables, control, functions, optionals, tuples, all"
    )]
    chapter: String,

    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "Roster TOML file, or a directory of roster files, to report on"
    )]
    roster: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "N",
        allow_negative_numbers = true,
        conflicts_with = "roster",
        help = "Only run the grade calculator for this score"
    )]
    score: Option<i64>,

    #[arg(short, long, help = "Log debug events to stderr")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    execute(cli)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn execute(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(score) = cli.score {
        demo::run_score(score, &mut out)?;
        return Ok(());
    }

    // Load before printing anything so a bad path fails cleanly.
    let rosters = match &cli.roster {
        Some(path) => Some(
            load_roster_files(path)
                .with_context(|| format!("failed to load roster {}", path.display()))?,
        ),
        None => None,
    };

    debug!(chapter = %cli.chapter, "running chapter");
    demo::run_chapter(&cli.chapter, &mut out)?;

    if let Some(files) = rosters {
        demo::run_roster(&files, &mut out)?;
    }

    out.flush().context("failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use bootcamp_core::roster::default_roster_root;
    use predicates::prelude::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn runs_all_chapters_by_default() {
        Command::cargo_bin("bootcamp")
            .expect("binary exists")
            .assert()
            .success()
            .stdout(predicate::str::contains("Chapter 2: Basic Types"))
            .stdout(predicate::str::contains("Chapter 7: Tuples"));
    }

    #[test]
    fn prints_student_reports() {
        Command::cargo_bin("bootcamp")
            .expect("binary exists")
            .arg("--chapter")
            .arg("functions")
            .assert()
            .success()
            .stdout(predicate::str::contains("Average: 91.3"))
            .stdout(predicate::str::contains("Letter Grade: A"))
            .stdout(predicate::str::contains("Chapter 6").not());
    }

    #[test]
    fn rejects_unknown_chapter() {
        Command::cargo_bin("bootcamp")
            .expect("binary exists")
            .arg("--chapter")
            .arg("nope")
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown chapter: nope"));
    }

    #[test]
    fn grades_single_score() {
        Command::cargo_bin("bootcamp")
            .expect("binary exists")
            .arg("--score")
            .arg("90")
            .assert()
            .success()
            .stdout(predicate::str::contains("Score 90: A"));
    }

    #[test]
    fn invalid_score_is_reported_not_fatal() {
        Command::cargo_bin("bootcamp")
            .expect("binary exists")
            .arg("--score")
            .arg("120")
            .assert()
            .success()
            .stdout(predicate::str::contains("Invalid grade: 120"));
    }

    #[test]
    fn score_cannot_be_combined_with_roster() {
        let dir = tempdir().expect("tempdir");

        Command::cargo_bin("bootcamp")
            .expect("binary exists")
            .arg("--score")
            .arg("90")
            .arg("--roster")
            .arg(dir.path().join("missing"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot be used with"))
            .stdout(predicate::str::contains("Score 90").not());
    }

    #[test]
    fn verbose_logs_to_stderr_only() {
        Command::cargo_bin("bootcamp")
            .expect("binary exists")
            .arg("--chapter")
            .arg("functions")
            .arg("--verbose")
            .assert()
            .success()
            .stdout(predicate::str::contains("Average: 91.3"))
            .stdout(predicate::str::contains("DEBUG").not())
            .stdout(predicate::str::contains("grade added").not())
            .stderr(predicate::str::contains("DEBUG"))
            .stderr(predicate::str::contains("running chapter"))
            .stderr(predicate::str::contains("grade added"));
    }

    #[test]
    fn quiet_by_default() {
        Command::cargo_bin("bootcamp")
            .expect("binary exists")
            .env_remove("RUST_LOG")
            .arg("--chapter")
            .arg("functions")
            .assert()
            .success()
            .stderr(predicate::str::contains("DEBUG").not());
    }

    #[test]
    fn reports_bundled_roster() {
        Command::cargo_bin("bootcamp")
            .expect("binary exists")
            .arg("--chapter")
            .arg("basics")
            .arg("--roster")
            .arg(default_roster_root())
            .assert()
            .success()
            .stdout(predicate::str::contains("loaded bootcamp.toml"))
            .stdout(predicate::str::contains("Math: average 86.5, highest 95, lowest 78 (2 grades)"))
            .stdout(predicate::str::contains("rejected grade Charlie / Math = 105"));
    }

    #[test]
    fn reports_custom_roster_file() {
        let dir = tempdir().expect("tempdir");
        let roster = dir.path().join("class.toml");
        fs::write(
            &roster,
            "[[student]]\nname = \"Dana\"\ngrades = [60, 70]\n",
        )
        .expect("write roster");

        Command::cargo_bin("bootcamp")
            .expect("binary exists")
            .arg("--chapter")
            .arg("tuples")
            .arg("--roster")
            .arg(&roster)
            .assert()
            .success()
            .stdout(predicate::str::contains("=== Dana's Report ==="))
            .stdout(predicate::str::contains("Average: 65.0"))
            .stdout(predicate::str::contains("Letter Grade: D"));
    }

    #[test]
    fn reports_missing_roster() {
        let dir = tempdir().expect("tempdir");

        Command::cargo_bin("bootcamp")
            .expect("binary exists")
            .arg("--roster")
            .arg(dir.path().join("missing"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("roster was not found"));
    }

    #[test]
    fn reports_malformed_roster() {
        let dir = tempdir().expect("tempdir");
        let roster = dir.path().join("broken.toml");
        fs::write(&roster, "[[student]]\ngrades = \"many\"\n").expect("write roster");

        Command::cargo_bin("bootcamp")
            .expect("binary exists")
            .arg("--roster")
            .arg(&roster)
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid roster broken.toml"));
    }
}
