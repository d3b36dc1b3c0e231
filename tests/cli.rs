#![forbid(unsafe_code)]
use assert_cmd::Command;
use chrono::{Datelike, Local};
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("grafik-cli").unwrap()
}

#[test]
fn show_renders_plain_grid_when_piped() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("grafik.json");
    let year = Local::now().year();
    cli()
        .args(["--store", store.to_str().unwrap(), "show", "--month", "2"])
        .args(["--year", &year.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Luty {year}")))
        .stdout(predicate::str::contains("|Pn |Wt |Sr |Cz |Pt |Sb |Nd |"))
        .stdout(predicate::str::contains("[#] Ranek  [*] Święto  [=] Popołudnie"));
}

#[test]
fn year_outside_picker_range_fails() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("grafik.json");
    let too_old = Local::now().year() - 6;
    cli()
        .args(["--store", store.to_str().unwrap(), "show"])
        .args(["--year", &too_old.to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside picker range"));
}

#[test]
fn swap_yes_persists_and_status_reads_it() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("grafik.json");
    let store = store.to_str().unwrap();

    cli()
        .args(["--store", store, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("isShiftSwapped = false"));

    cli()
        .args(["--store", store, "swap", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kolory zamienione"));

    cli()
        .args(["--store", store, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("isShiftSwapped = true"));

    cli()
        .args(["--store", store, "show", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kolory zamienione"));
}

#[test]
fn swap_declined_on_stdin_changes_nothing() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("grafik.json");
    let store = store.to_str().unwrap();

    cli()
        .args(["--store", store, "swap"])
        .write_stdin("NIE\n")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Anulowano"));

    cli()
        .args(["--store", store, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("isShiftSwapped = false"));

    cli()
        .args(["--store", store, "swap"])
        .write_stdin("tak\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kolory zamienione"));
}

#[test]
fn export_writes_csv_and_json() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("grafik.json");
    let csv = dir.path().join("month.csv");
    let json = dir.path().join("month.json");
    let year = Local::now().year();

    cli()
        .args(["--store", store.to_str().unwrap(), "export", "--month", "12"])
        .args(["--year", &year.to_string()])
        .args(["--out-csv", csv.to_str().unwrap()])
        .args(["--out-json", json.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("31 jours"));

    let raw = std::fs::read_to_string(&csv).unwrap();
    assert!(raw.starts_with("date,weekday,category,first_shift,holiday"));
    assert!(raw.contains(&format!("{year}-12-25")));
    assert!(json.exists());
}

#[test]
fn export_without_target_fails() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("grafik.json");
    cli()
        .args(["--store", store.to_str().unwrap(), "export"])
        .assert()
        .failure();
}

#[test]
fn years_lists_sixteen_values() {
    let out = cli().arg("years").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.split_whitespace().count(), 16);
}
