mod common;

use common::TestFixture;
use predicates::prelude::*;

fn run_list_json(fixture: &TestFixture, extra: &[&str]) -> serde_json::Value {
    let mut cmd = fixture.command();
    cmd.arg("project").arg("list").arg("--format").arg("json");
    for arg in extra {
        cmd.arg(arg);
    }
    let output = cmd.output().expect("Failed to run project list");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Parse failed")
}

fn ids(result: &serde_json::Value) -> Vec<u64> {
    result
        .as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|p| p["id"].as_u64().expect("Project should have numeric id"))
        .collect()
}

#[test]
fn test_default_listing_is_newest_first() {
    let fixture = TestFixture::new();

    let result = run_list_json(&fixture, &[]);

    assert_eq!(ids(&result), vec![4, 3, 1, 2]);
}

#[test]
fn test_category_filter_keeps_only_matching_type() {
    let fixture = TestFixture::new();

    let result = run_list_json(&fixture, &["--category", "web"]);

    assert_eq!(ids(&result), vec![4, 1]);
    for project in result.as_array().unwrap() {
        assert_eq!(project["type"], "web");
    }
}

#[test]
fn test_search_matches_stack_entries() {
    let fixture = TestFixture::new();

    let result = run_list_json(&fixture, &["--search", "d3"]);

    assert_eq!(ids(&result), vec![2]);
}

#[test]
fn test_search_is_case_insensitive() {
    let fixture = TestFixture::new();

    let result = run_list_json(&fixture, &["--search", "FIGMA"]);

    assert_eq!(ids(&result), vec![3]);
}

#[test]
fn test_title_sort_is_alphabetical() {
    let fixture = TestFixture::new();

    let result = run_list_json(&fixture, &["--sort", "title-asc"]);

    let titles: Vec<&str> = result
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec![
            "API Dashboard",
            "Data Explorer",
            "Portfolio Redesign",
            "Responsive Web Landing"
        ]
    );
}

#[test]
fn test_search_and_sort_compose() {
    let fixture = TestFixture::new();

    let result = run_list_json(&fixture, &["--search", "js", "--sort", "title-asc"]);

    let titles: Vec<&str> = result
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec!["API Dashboard", "Data Explorer", "Responsive Web Landing"]
    );
}

#[test]
fn test_combined_filters_can_empty_the_result() {
    let fixture = TestFixture::new();

    let result = run_list_json(&fixture, &["--category", "design", "--search", "responsive"]);

    assert_eq!(result.as_array().unwrap().len(), 0);
}

#[test]
fn test_empty_result_is_still_a_json_array() {
    let fixture = TestFixture::new();

    let result = run_list_json(&fixture, &["--category", "video"]);

    assert!(result.is_array());
    assert!(result.as_array().unwrap().is_empty());
}

#[test]
fn test_unknown_category_prints_empty_state() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("project")
        .arg("list")
        .arg("--category")
        .arg("video")
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects match your filters."));
}

#[test]
fn test_plain_listing_shows_one_line_per_project() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .arg("project")
        .arg("list")
        .output()
        .expect("Failed to run project list");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 4);
    assert!(stdout.lines().next().unwrap().contains("API Dashboard"));
}
