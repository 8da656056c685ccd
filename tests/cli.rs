use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fincalc() -> Command {
    let mut cmd = Command::cargo_bin("fincalc").unwrap();
    cmd.env_remove("FINCALC_CONFIG").env_remove("FINCALC_LOG");
    cmd
}

#[test]
fn format_uses_default_settings() {
    fincalc()
        .args(["money", "format", "1234567.5"])
        .assert()
        .success()
        .stdout("₹12,34,567.50\n");
}

#[test]
fn format_with_explicit_currency_and_locale() {
    fincalc()
        .args(["money", "format", "-1234.5", "--currency", "USD", "--locale", "en-US"])
        .assert()
        .success()
        .stdout("-$1,234.50\n");
}

#[test]
fn format_compact() {
    fincalc()
        .args(["money", "format", "2500000", "--compact"])
        .assert()
        .success()
        .stdout("₹25.0L\n");
}

#[test]
fn format_unknown_locale_falls_back() {
    fincalc()
        .args(["money", "format", "10", "-c", "GBP", "-l", "xx-XX"])
        .assert()
        .success()
        .stdout("£ 10.00\n");
}

#[test]
fn parse_is_lossy_but_total() {
    fincalc()
        .args(["money", "parse", "₹12,34,567.89"])
        .assert()
        .success()
        .stdout("1234567.89\n");

    fincalc()
        .args(["money", "parse", "n/a"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn percentage_change_zero_baseline() {
    fincalc()
        .args(["money", "change", "0", "50"])
        .assert()
        .success()
        .stdout("100.00%\n");
}

#[test]
fn sip_report() {
    fincalc()
        .args(["growth", "sip", "5000", "10", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹11,61,695.00"))
        .stdout(predicate::str::contains("₹6,00,000.00"));
}

#[test]
fn lumpsum_csv_export() {
    fincalc()
        .args(["growth", "lumpsum", "100000", "3", "10", "--export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Year,Invested,Value,Returns"))
        .stdout(predicate::str::contains("3,100000.00,133100.00,33100.00"));
}

#[test]
fn unknown_export_format_is_rejected() {
    fincalc()
        .args(["growth", "sip", "5000", "10", "12", "--export", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown export format"));
}

#[test]
fn cagr_guard() {
    fincalc()
        .args(["growth", "cagr", "100", "200", "1"])
        .assert()
        .success()
        .stdout("100.00%\n");

    fincalc()
        .args(["growth", "cagr", "0", "200", "1"])
        .assert()
        .success()
        .stdout("0.00%\n");
}

#[test]
fn financial_year_boundaries() {
    fincalc()
        .args(["date", "fy", "2024-03-31"])
        .assert()
        .success()
        .stdout("2023-2024\n");

    fincalc()
        .args(["date", "fy", "2024-04-01"])
        .assert()
        .success()
        .stdout("2024-2025\n");
}

#[test]
fn date_format_and_arithmetic() {
    fincalc()
        .args(["date", "format", "2024-01-05", "--format", "dd MMM yyyy"])
        .assert()
        .success()
        .stdout("05 Jan 2024\n");

    fincalc()
        .args(["date", "add", "2024-01-31", "--months", "1"])
        .assert()
        .success()
        .stdout("29/02/2024\n");
}

#[test]
fn invalid_date_fails() {
    fincalc()
        .args(["date", "fy", "31-31-2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn settings_file_changes_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("fincalc.yaml");
    let yaml = "currency: EUR\nlocale: de-DE\ndate_format: yyyy-mm-dd\n";
    std::fs::write(&path, yaml).unwrap();

    fincalc()
        .args(["money", "format", "1234.5"])
        .env("FINCALC_CONFIG", &path)
        .assert()
        .success()
        .stdout("1.234,50 €\n");

    fincalc()
        .args(["--config"])
        .arg(&path)
        .args(["date", "add", "2024-02-28", "--days", "2"])
        .assert()
        .success()
        .stdout("2024-03-01\n");
}

#[test]
fn missing_settings_file_warns_and_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.yaml");

    fincalc()
        .arg("--config")
        .arg(&path)
        .args(["money", "format", "10"])
        .assert()
        .success()
        .stdout("₹10.00\n")
        .stderr(predicate::str::contains("settings file not found"));

    fincalc()
        .args(["money", "format", "10"])
        .assert()
        .success()
        .stderr(predicate::str::contains("settings file not found").not());
}
