use assert_cmd::Command;
use predicates::prelude::*;

fn quizbank(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("quizbank").unwrap();
    cmd.env("QUIZBANK_HOME", home);
    cmd
}

#[test]
fn add_list_search_edit_report_cycle() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("questions.csv");

    quizbank(temp.path())
        .arg("add")
        .arg("--file")
        .arg(&file)
        .arg("--question")
        .arg("2+2?")
        .arg("--option1")
        .arg("3")
        .arg("--option2")
        .arg("4")
        .arg("--correct")
        .arg("4")
        .assert()
        .success()
        .stdout(predicates::str::contains("Question added: 2+2?"));

    quizbank(temp.path())
        .arg("list")
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicates::str::contains("2+2?"))
        .stdout(predicates::str::contains("General"));

    quizbank(temp.path())
        .arg("search")
        .arg("2+2")
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicates::str::contains("2+2?"));

    quizbank(temp.path())
        .arg("edit")
        .arg("1")
        .arg("--file")
        .arg(&file)
        .arg("--question")
        .arg("What is 2+2?")
        .assert()
        .success()
        .stdout(predicates::str::contains("Question updated (1): What is 2+2?"));

    // Still one row; the edit overwrote in place and kept the other fields.
    quizbank(temp.path())
        .arg("list")
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicates::str::contains("What is 2+2?"))
        .stdout(predicates::str::contains("2+2?").count(1));

    quizbank(temp.path())
        .arg("report")
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicates::str::contains("Questions by track"))
        .stdout(predicates::str::contains("General"))
        .stdout(predicates::str::contains("Mark vs time"));
}

#[test]
fn invalid_submission_fails_without_touching_the_file() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("questions.csv");

    quizbank(temp.path())
        .arg("add")
        .arg("--file")
        .arg(&file)
        .arg("--question")
        .arg("lonely option")
        .arg("--option1")
        .arg("only one")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Validation error"));

    assert!(!file.exists());
}

#[test]
fn search_with_no_match_warns_but_succeeds() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("questions.csv");

    quizbank(temp.path())
        .arg("add")
        .arg("--file")
        .arg(&file)
        .arg("--question")
        .arg("What is CSS?")
        .arg("--option1")
        .arg("style")
        .arg("--option2")
        .arg("script")
        .arg("--correct")
        .arg("style")
        .assert()
        .success();

    quizbank(temp.path())
        .arg("search")
        .arg("xyz-no-match")
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicates::str::contains("No matching questions found."));
}

#[test]
fn quoted_csv_format_on_disk() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("questions.csv");

    quizbank(temp.path())
        .arg("add")
        .arg("--file")
        .arg(&file)
        .arg("--track")
        .arg("Web Development")
        .arg("--question")
        .arg("Commas, everywhere?")
        .arg("--option1")
        .arg("yes, always")
        .arg("--option2")
        .arg("no")
        .arg("--correct")
        .arg("no")
        .assert()
        .success();

    let raw = std::fs::read_to_string(&file).unwrap();
    assert!(raw.starts_with(
        "\"track\",\"question\",\"option1\",\"option2\",\"option3\",\"option4\",\"correctAnswer\",\"mark\",\"time(seconds)\""
    ));
    assert!(raw.contains("\"yes, always\""));

    // The file written by one invocation reads back in the next.
    quizbank(temp.path())
        .arg("list")
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicates::str::contains("Commas, everywhere?"));
}

#[test]
fn config_shows_and_sets_keys() {
    let temp = tempfile::tempdir().unwrap();

    quizbank(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicates::str::contains("data-file = questions.csv"))
        .stdout(predicates::str::contains("default-track = General"));

    quizbank(temp.path())
        .arg("config")
        .arg("default-track")
        .arg("Data Science")
        .assert()
        .success()
        .stdout(predicates::str::contains("default-track set to Data Science"));

    quizbank(temp.path())
        .arg("config")
        .arg("default-track")
        .assert()
        .success()
        .stdout(predicates::str::contains("default-track = Data Science"));
}
