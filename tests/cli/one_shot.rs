use predicates::prelude::*;

use crate::common::{country_table, json_stdout};

#[test]
fn shows_help() {
    country_table()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--rows-per-page"));
}

#[test]
fn default_table_shows_first_ten_of_all() {
    country_table()
        .arg("--ascii")
        .assert()
        .success()
        .stdout(predicate::str::contains("Afghanistan"))
        .stdout(predicate::str::contains("Rows per page: 10   1–10 of 194"))
        .stdout(predicate::str::contains("Bahamas").not());
}

#[test]
fn continent_filter_in_json() {
    let output = country_table().args(["--continent", "AF", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let value = json_stdout(&output);
    assert_eq!(value["total"], 54);
    assert_eq!(value["view"]["continent"], "AF");
    let rows = value["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert!(rows.iter().all(|r| r["continent"] == "AF"));
}

#[test]
fn continent_accepts_display_name() {
    let output = country_table()
        .args(["--continent", "south-america", "--all-rows", "--format", "json"])
        .output()
        .unwrap();
    let value = json_stdout(&output);
    assert_eq!(value["total"], 12);
    assert_eq!(value["rows"].as_array().unwrap().len(), 12);
    assert!(value["view"]["pageSize"].is_null());
}

#[test]
fn has_states_filter_counts_federations() {
    let output = country_table().args(["--has-states", "true", "--format", "json"]).output().unwrap();
    let value = json_stdout(&output);
    assert_eq!(value["total"], 18);
    assert_eq!(value["view"]["hasStates"], true);
}

#[test]
fn sort_and_page_select_window() {
    let output = country_table()
        .args(["--sort", "name:desc", "--rows-per-page", "5", "--page", "1", "--format", "csv"])
        .output()
        .unwrap();
    let text = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = text.lines().skip(1).map(|l| l.split(',').nth(2).unwrap()).collect();
    assert_eq!(names, vec!["Zimbabwe", "Zambia", "Yemen", "Viet Nam", "Venezuela (Bolivarian Republic of)"]);
}

#[test]
fn page_past_end_renders_empty_body() {
    let output = country_table()
        .args(["--continent", "AN", "--page", "3", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value = json_stdout(&output);
    assert_eq!(value["total"], 1);
    assert_eq!(value["rows"].as_array().unwrap().len(), 0);
}

#[test]
fn jsonl_ends_with_page_record() {
    let output = country_table().args(["--continent", "OC", "--format", "jsonl"]).output().unwrap();
    let text = String::from_utf8(output.stdout).unwrap();
    let last: serde_json::Value = serde_json::from_str(text.lines().last().unwrap()).unwrap();
    assert_eq!(last["type"], "page");
    assert_eq!(last["total"], 14);
    assert_eq!(text.lines().count(), 11);
}

#[test]
fn markdown_marks_sorted_column() {
    country_table()
        .args(["--sort", "continent", "--format", "md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Name | Continent ▲ | Has States |"));
}

#[test]
fn rejects_page_size_outside_presets() {
    country_table()
        .args(["--rows-per-page", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid page size"));
}

#[test]
fn rejects_page_zero() {
    country_table()
        .args(["--page", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:").and(predicate::str::contains("--page")));
}

#[test]
fn rejects_unknown_continent() {
    country_table()
        .args(["--continent", "Atlantis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown continent"));
}

#[test]
fn lists_continents_with_counts() {
    country_table()
        .arg("--list-continents")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"AF\s+Africa\s+54").unwrap())
        .stdout(predicate::str::is_match(r"All\s+194").unwrap());
}

#[test]
fn name_sort_places_accented_names_among_neighbours() {
    let output = country_table()
        .args(["--sort", "name", "--all-rows", "--format", "csv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = text.lines().skip(1).map(|l| l.split(',').nth(2).unwrap()).collect();
    assert_eq!(names.len(), 194);
    let pos = |name: &str| names.iter().position(|n| *n == name).unwrap();

    assert!(pos("Costa Rica") < pos("Côte d'Ivoire"));
    assert!(pos("Côte d'Ivoire") < pos("Croatia"));
    assert!(pos("Tunisia") < pos("Türkiye"));
    assert!(pos("Türkiye") < pos("Turkmenistan"));
    assert_eq!(names.first(), Some(&"Afghanistan"));
    assert_eq!(names.last(), Some(&"Zimbabwe"));
}
