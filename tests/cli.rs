use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const LEDGER: &str = "\
Date,Type,Amount,Category,Description
2024-01-01,Income,1000,Salary,January pay
2024-01-05,Expense,600,Rent,Flat
2024-01-10,Expense,100,Food,Groceries
";

fn write_ledger(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("ledger.csv");
    std::fs::write(&path, contents).unwrap();
    path
}

fn coach(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("coach").unwrap();
    cmd.env("LEDGER_COACH_DATA_DIR", data_dir);
    cmd
}

#[test]
fn no_subcommand_prints_usage_hint() {
    let dir = TempDir::new().unwrap();
    coach(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("coach --help"));
}

#[test]
fn summary_reports_totals() {
    let dir = TempDir::new().unwrap();
    let file = write_ledger(dir.path(), LEDGER);

    coach(&dir.path().join("data"))
        .arg("summary")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("₦1,000.00"))
        .stdout(predicate::str::contains("₦700.00"))
        .stdout(predicate::str::contains("₦300.00"));
}

#[test]
fn tips_flag_dominant_category() {
    let dir = TempDir::new().unwrap();
    let file = write_ledger(dir.path(), LEDGER);

    coach(&dir.path().join("data"))
        .arg("tips")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Over 50% of your expenses went to Rent.",
        ))
        .stdout(predicate::str::contains("saving rate").not())
        .stdout(predicate::str::contains("Great job tracking"));
}

#[test]
fn category_filter_narrows_rows() {
    let dir = TempDir::new().unwrap();
    let file = write_ledger(dir.path(), LEDGER);

    coach(&dir.path().join("data"))
        .args(["summary", "-c", "Food"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("₦100.00"))
        .stdout(predicate::str::contains("-₦100.00"));
}

#[test]
fn date_range_filter_on_list() {
    let dir = TempDir::new().unwrap();
    let file = write_ledger(dir.path(), LEDGER);

    coach(&dir.path().join("data"))
        .args(["list", "--start", "2024-01-05", "--end", "2024-01-31"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Flat"))
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("January pay").not())
        .stdout(predicate::str::contains("2 row(s)"));
}

#[test]
fn invalid_date_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_ledger(dir.path(), LEDGER);

    coach(&dir.path().join("data"))
        .args(["summary", "--start", "31/31/2024"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn missing_columns_fail() {
    let dir = TempDir::new().unwrap();
    let file = write_ledger(dir.path(), "Date,Amount\n2024-01-01,5\n");

    coach(&dir.path().join("data"))
        .arg("summary")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required column(s)"))
        .stderr(predicate::str::contains("Category"));
}

#[test]
fn header_only_file_has_no_data() {
    let dir = TempDir::new().unwrap();
    let file = write_ledger(dir.path(), "Date,Type,Amount,Category,Description\n");
    let data = dir.path().join("data");

    coach(&data)
        .arg("tips")
        .arg(&file)
        .assert()
        .success()
        .stdout("No data to analyze.\n");

    coach(&data)
        .arg("categories")
        .arg(&file)
        .assert()
        .success()
        .stdout("No categories found.\n");
}

#[test]
fn categories_are_sorted() {
    let dir = TempDir::new().unwrap();
    let file = write_ledger(dir.path(), LEDGER);

    coach(&dir.path().join("data"))
        .arg("categories")
        .arg(&file)
        .assert()
        .success()
        .stdout("Food\nRent\nSalary\n");
}

#[test]
fn breakdown_lists_expense_categories() {
    let dir = TempDir::new().unwrap();
    let file = write_ledger(dir.path(), LEDGER);

    coach(&dir.path().join("data"))
        .arg("breakdown")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Salary").not());
}

#[test]
fn history_records_loads_and_filters() {
    let dir = TempDir::new().unwrap();
    let file = write_ledger(dir.path(), LEDGER);
    let data = dir.path().join("data");

    coach(&data)
        .args(["summary", "-c", "Rent"])
        .arg(&file)
        .assert()
        .success();

    coach(&data)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("LOAD"))
        .stdout(predicate::str::contains("FILTER"))
        .stdout(predicate::str::contains("(1 rows)"));
}

#[test]
fn history_is_empty_on_fresh_install() {
    let dir = TempDir::new().unwrap();

    coach(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No activity recorded yet."));
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");

    coach(&data)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written"));
    assert!(data.join("config.json").exists());

    coach(&data)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exist"));

    coach(&data)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: ₦"));
}
