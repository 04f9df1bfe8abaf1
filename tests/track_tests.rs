use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{setup, tt};

#[test]
fn test_track_creates_file_with_header() {
    let (data, _) = setup("track_creates");

    tt(&data)
        .args(["track", "2.5", "-p", "acme", "-t", "2024-01-10T09:00"])
        .assert()
        .success()
        .stdout(contains("Tracked 2.5h on 'acme' at 2024-01-10T09:00"));

    let content = fs::read_to_string(&data).expect("read data file");
    assert_eq!(
        content,
        "datetime,hours,project,message\n2024-01-10T09:00,2.5,acme,\n"
    );
}

#[test]
fn test_track_alias_and_header_once() {
    let (data, _) = setup("track_alias");

    for i in 0..3 {
        tt(&data)
            .args(["t", "1", "-m", &format!("task {i}"), "-t", "2024-02-01T10:00"])
            .assert()
            .success();
    }

    let content = fs::read_to_string(&data).expect("read data file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "datetime,hours,project,message");
    assert_eq!(lines[1], "2024-02-01T10:00,1.0,,task 0");
    assert_eq!(lines[3], "2024-02-01T10:00,1.0,,task 2");
}

#[test]
fn test_track_now_uses_minute_precision() {
    let (data, _) = setup("track_now");

    tt(&data).args(["track", "0.25"]).assert().success();

    let content = fs::read_to_string(&data).expect("read data file");
    let row = content.lines().nth(1).expect("one data row");
    let stamp = row.split(',').next().unwrap();
    // YYYY-MM-DDTHH:MM
    assert_eq!(stamp.len(), 16);
    assert_eq!(&stamp[10..11], "T");
}

#[test]
fn test_track_malformed_time_writes_nothing() {
    let (data, _) = setup("track_malformed");

    tt(&data)
        .args(["track", "1", "-t", "yesterday-ish"])
        .assert()
        .failure()
        .stderr(contains("Invalid datetime"));

    assert!(!Path::new(&data).exists());
}

#[test]
fn test_track_rejects_non_numeric_hours() {
    let (data, _) = setup("track_bad_hours");

    tt(&data).args(["track", "lots"]).assert().failure();
    assert!(!Path::new(&data).exists());
}

#[test]
fn test_track_rejects_infinite_hours() {
    let (data, _) = setup("track_inf_hours");

    for raw in ["inf", "infinity", "NaN"] {
        tt(&data)
            .args(["track", raw, "-p", "acme"])
            .assert()
            .failure()
            .stderr(contains("finite"));
    }
    assert!(!Path::new(&data).exists());
}

#[test]
fn test_track_custom_delimiter() {
    let (data, _) = setup("track_delimiter");

    tt(&data)
        .args([
            "--delimiter",
            ";",
            "track",
            "3",
            "-p",
            "a;b",
            "-t",
            "2024-03-01 08:15",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&data).expect("read data file");
    assert_eq!(
        content,
        "datetime;hours;project;message\n2024-03-01T08:15;3.0;\"a;b\";\n"
    );
}

#[test]
fn test_track_rejects_multi_char_delimiter() {
    let (data, _) = setup("track_bad_delimiter");

    tt(&data)
        .args(["--delimiter", "||", "track", "1"])
        .assert()
        .failure()
        .stderr(contains("Invalid delimiter"));

    assert!(!Path::new(&data).exists());
}
