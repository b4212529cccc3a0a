//! End-to-end tests for the `degrees` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

struct Fixture {
    data: TempDir,
    home: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let data = TempDir::new().unwrap();
        fs::write(
            data.path().join("people.csv"),
            "id,name,birth\n\
             102,Kevin Bacon,1958\n\
             129,Tom Cruise,1962\n\
             163,Dustin Hoffman,1937\n\
             1697,Emma Watson,1990\n\
             1698,Emma Watson,\n\
             999,Loner,\n",
        )
        .unwrap();
        fs::write(
            data.path().join("movies.csv"),
            "id,title,year\n\
             104257,A Few Good Men,1992\n\
             95953,Rain Man,1988\n\
             241527,Harry Potter,2001\n",
        )
        .unwrap();
        fs::write(
            data.path().join("stars.csv"),
            "person_id,movie_id\n\
             102,104257\n\
             129,104257\n\
             129,95953\n\
             163,95953\n\
             1697,241527\n\
             163,241527\n",
        )
        .unwrap();

        Self {
            data,
            home: TempDir::new().unwrap(),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("degrees").unwrap();
        cmd.env("DEGREES_CONFIG", self.home.path().join("config.toml"))
            .env_remove("DEGREES_DATA_DIR")
            .env_remove("RUST_LOG")
            .arg("--data-dir")
            .arg(self.data.path())
            .arg("-q");
        cmd
    }
}

#[test]
fn path_prints_each_hop() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["path", "Kevin Bacon", "Dustin Hoffman"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 degrees of separation."))
        .stdout(predicate::str::contains(
            "1: Kevin Bacon and Tom Cruise starred in A Few Good Men",
        ))
        .stdout(predicate::str::contains(
            "2: Tom Cruise and Dustin Hoffman starred in Rain Man",
        ));
}

#[test]
fn path_reports_not_connected() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["path", "Kevin Bacon", "Loner", "--strategy", "unidirectional"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Not connected.\n"));
}

#[test]
fn every_strategy_finds_a_path() {
    let fixture = Fixture::new();
    for strategy in ["unidirectional", "bidirectional", "heuristic", "depth-first"] {
        fixture
            .cmd()
            .args(["path", "kevin bacon", "tom cruise", "-s", strategy])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("1 degrees of separation."));
    }
}

#[test]
fn path_json_output() {
    let fixture = Fixture::new();
    let output = fixture
        .cmd()
        .args(["--format", "json", "path", "Kevin Bacon", "--target-id", "1697", "Emma Watson"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["connected"], true);
    assert_eq!(value["degrees"], 3);
    assert_eq!(value["hops"][2]["movie"], "Harry Potter");
}

#[test]
fn unknown_name_fails_with_suggestion() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["path", "Kevin Bacn", "Tom Cruise"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Person not found"))
        .stderr(predicate::str::contains("Kevin Bacon"));
}

#[test]
fn ambiguous_name_without_prompt_fails() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["path", "Emma Watson", "Tom Cruise", "--no-prompt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ambiguous"));
}

#[test]
fn ambiguous_name_reads_choice_from_stdin() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["path", "Emma Watson", "Dustin Hoffman"])
        .write_stdin("1697\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Which 'Emma Watson'?"))
        .stdout(predicate::str::contains("1 degrees of separation."));
}

#[test]
fn missing_data_dir_fails() {
    let fixture = Fixture::new();
    Command::cargo_bin("degrees")
        .unwrap()
        .env("DEGREES_CONFIG", fixture.home.path().join("config.toml"))
        .args(["--data-dir", "/definitely/not/here", "info"])
        .assert()
        .failure();
}

#[test]
fn who_lists_namesakes() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["who", "emma watson"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1697"))
        .stdout(predicate::str::contains("1698"));
}

#[test]
fn info_counts_dataset() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["--format", "csv", "info"])
        .assert()
        .success()
        .stdout(predicate::str::diff("people,movies,stars,skipped_stars\n6,3,6,0\n"));
}

#[test]
fn config_set_then_get() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["config", "set", "strategy", "astar"])
        .assert()
        .success();
    fixture
        .cmd()
        .args(["config", "get", "strategy"])
        .assert()
        .success()
        .stdout(predicate::str::diff("heuristic\n"));

    fixture
        .cmd()
        .args(["config", "set", "strategy", "sideways"])
        .assert()
        .failure();
}

#[test]
fn completions_mention_binary() {
    Command::cargo_bin("degrees")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("degrees"));
}

#[test]
fn config_get_shows_built_in_fallbacks() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["config", "get", "data_dir"])
        .assert()
        .success()
        .stdout(predicate::str::diff("large\n"));
    fixture
        .cmd()
        .args(["config", "get", "no.such.key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn hand_edited_zero_scale_is_refused() {
    let fixture = Fixture::new();
    fs::write(
        fixture.home.path().join("config.toml"),
        "[search.heuristic]\nyear_gap_scale = 0.0\n",
    )
    .unwrap();

    fixture
        .cmd()
        .args(["path", "Kevin Bacon", "Tom Cruise", "-s", "heuristic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("year_gap_scale must be positive"));
}
