//! End-to-end tests for the `trip` binary.
//!
//! Runs the built binary against itinerary files and stdin, the way the page
//! layer and the AI import path drive the engine.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use serde_json::{Value, json};
use tempfile::TempDir;

fn trip_binary() -> String {
    env!("CARGO_BIN_EXE_trip").to_string()
}

/// A `trip` command isolated from the user's config and environment.
fn trip(home: &Path) -> Command {
    let mut cmd = Command::new(trip_binary());
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("TRIP_PRETTY");
    cmd
}

fn write_input(dir: &Path, value: &Value) -> std::path::PathBuf {
    let path = dir.join("trip.json");
    std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "trip should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn slots(day: &Value) -> Vec<String> {
    day["places"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["time_slot"].as_str().unwrap_or("").to_string())
        .collect()
}

/// Imported documents with mixed encodings are normalized.
#[test]
fn test_recalc_normalizes_imported_itinerary() {
    let temp = TempDir::new().unwrap();
    let input = write_input(
        temp.path(),
        &json!([
            {"day": 1, "places": [
                {"id": "a", "start_time": "23:00", "duration_hours": 3}
            ]},
            {"day": 2, "places": [
                {"id": "b", "duration": "45"},
                {"id": "LUNCH", "category": "Ăn uống"},
                {"id": "c", "time_slot": "8:00-10:00"},
                {"id": "d"}
            ]}
        ]),
    );

    let output = trip(temp.path())
        .arg("recalc")
        .arg("--input")
        .arg(&input)
        .output()
        .unwrap();
    let result = stdout_json(&output);

    assert_eq!(slots(&result[0]), vec!["23:00-26:00"]);
    assert_eq!(
        slots(&result[1]),
        vec!["08:00-08:45", "08:45-09:45", "8:00-10:00", "10:00-11:30"]
    );
}

/// The persistence envelope is read from stdin and written back unchanged in shape.
#[test]
fn test_stdin_draft_envelope_round_trips() {
    let temp = TempDir::new().unwrap();
    let doc = json!({
        "itinerary_draft": [{"day": 1, "places": [{"id": "a", "duration": 30}]}],
        "trip_id": "abc"
    });

    let mut child = trip(temp.path())
        .arg("recalc")
        .arg("--compact")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(doc.to_string().as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 1);
    let result = stdout_json(&output);
    assert_eq!(result["trip_id"], "abc");
    assert_eq!(slots(&result["itinerary_draft"][0]), vec!["08:00-08:30"]);
}

/// Drag, then duration change, then removal, each feeding the next.
#[test]
fn test_edit_sequence() {
    let temp = TempDir::new().unwrap();
    let input = write_input(
        temp.path(),
        &json!([
            {"day": 1, "places": [
                {"id": "A", "time_slot": "08:00-10:00"},
                {"id": "B", "time_slot": "10:00-12:00"},
                {"id": "C", "time_slot": "12:00-14:00"}
            ]}
        ]),
    );

    let output = trip(temp.path())
        .args(["drag", "--from", "day-1", "--from-index", "0"])
        .args(["--to", "day-1", "--to-index", "2"])
        .arg("--input")
        .arg(&input)
        .output()
        .unwrap();
    let dragged = stdout_json(&output);
    let ids: Vec<_> = dragged[0]["places"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["B", "C", "A"]);
    assert_eq!(
        slots(&dragged[0]),
        vec!["08:00-10:00", "12:00-14:00", "12:00-14:00"]
    );

    let input = write_input(temp.path(), &dragged);
    let output = trip(temp.path())
        .args(["set-duration", "--day", "1", "--index", "0", "--minutes", "67"])
        .arg("--input")
        .arg(&input)
        .output()
        .unwrap();
    let resized = stdout_json(&output);
    assert_eq!(
        slots(&resized[0]),
        vec!["08:00-09:05", "12:00-14:00", "14:00-16:00"]
    );
    assert_eq!(resized[0]["places"][0]["duration"], 65);

    let input = write_input(temp.path(), &resized);
    let output = trip(temp.path())
        .args(["remove", "--day", "1", "--index", "1"])
        .arg("--input")
        .arg(&input)
        .output()
        .unwrap();
    let removed = stdout_json(&output);
    assert_eq!(slots(&removed[0]), vec!["08:00-09:05", "14:00-16:00"]);
}

/// Anchors are refused with a non-zero exit and nothing on stdout.
#[test]
fn test_anchor_drag_fails() {
    let temp = TempDir::new().unwrap();
    let input = write_input(
        temp.path(),
        &json!([{"day": 1, "places": [
            {"id": "a"},
            {"id": "TRAVEL", "category": "Di chuyển"}
        ]}]),
    );

    let output = trip(temp.path())
        .args(["drag", "--from", "day-1", "--from-index", "1"])
        .args(["--to", "day-1", "--to-index", "0"])
        .arg("--input")
        .arg(&input)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("TRAVEL is an anchor activity"));
}

/// The user config file sets the scheduling policy.
#[test]
fn test_config_file_sets_day_start() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".config/trip");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[schedule]\nday_start = \"07:00\"\ndefault_minutes = 60\n",
    )
    .unwrap();
    let input = write_input(temp.path(), &json!([{"day": 1, "places": [{"id": "a"}]}]));

    let output = trip(temp.path())
        .arg("recalc")
        .arg("--input")
        .arg(&input)
        .output()
        .unwrap();
    let result = stdout_json(&output);
    assert_eq!(slots(&result[0]), vec!["07:00-08:00"]);

    // Environment beats the config file.
    let output = trip(temp.path())
        .env("TRIP_SCHEDULE__DEFAULT_MINUTES", "30")
        .arg("recalc")
        .arg("--input")
        .arg(&input)
        .output()
        .unwrap();
    let result = stdout_json(&output);
    assert_eq!(slots(&result[0]), vec!["07:00-07:30"]);
}

/// Malformed input is reported, not panicked on.
#[test]
fn test_invalid_input_reports_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.json");
    std::fs::write(&path, "{\"days\": 1}").unwrap();

    let output = trip(temp.path())
        .arg("recalc")
        .arg("--input")
        .arg(&path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read itinerary from"), "{stderr}");
}
