//! Integration tests for the cs help command
//!
//! These drive the built binary end to end; no server is required.

use std::process::{Command, Output};

use cs_testkit::{
    assert_regex_matches_with_flags, RegexFlags, TestApiConfig, TestFiles, TestFixtures,
};

/// Run the cs binary with the given arguments
fn run_cs(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cs"))
        .args(args)
        .output()
        .expect("Failed to execute cs binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn help_lists_all_topics() {
    let output = run_cs(&["help"]);
    assert!(output.status.success());

    let text = stdout(&output);
    for topic in ["apis", "crc32c", "encoding", "projects", "security", "wildcards"] {
        assert!(text.contains(topic), "missing topic {topic} in:\n{text}");
    }
}

#[test]
fn help_renders_topic_by_name() {
    let output = run_cs(&["help", "wildcards"]);
    assert!(output.status.success());
    assert_regex_matches_with_flags(&stdout(&output), "wildcards - Wildcard", RegexFlags::NONE);
}

#[test]
fn help_resolves_aliases_case_insensitively() {
    let output = run_cs(&["help", "JSON"]);
    assert!(output.status.success());
    assert_regex_matches_with_flags(
        &stdout(&output),
        "cloud storage apis",
        RegexFlags::IGNORECASE,
    );
}

#[test]
fn help_unknown_topic_exits_not_found() {
    let output = run_cs(&["help", "nonesuch"]);
    assert_eq!(output.status.code(), Some(5));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nonesuch"));
}

#[test]
fn help_json_listing_is_valid_json() {
    let output = run_cs(&["--json", "help"]);
    assert!(output.status.success());

    let topics: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let topics = topics.as_array().unwrap();
    assert_eq!(topics.len(), 6);
    assert!(topics.iter().any(|t| t["name"] == "security"));
}

#[test]
fn help_quiet_suppresses_listing() {
    let output = run_cs(&["--quiet", "help"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn completions_emit_script() {
    let output = run_cs(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("complete"));
}

// The testkit is exercised from here as well so a CLI-side regression in
// fixture handling shows up in this suite.
#[test]
fn fixture_files_feed_future_upload_tests() {
    let mut fixtures = TestFixtures::new(
        "fixture_files_feed_future_upload_tests",
        TestApiConfig::default(),
    );
    let dir = fixtures.create_temp_dir(TestFiles::Count(2), None).unwrap();
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 2);

    fixtures.teardown();
    assert!(!dir.exists());
}
