#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Config path that never exists, so the user's real config is never read
fn no_config(data: &str) -> String {
    Path::new(data)
        .with_file_name("absent.conf")
        .to_string_lossy()
        .to_string()
}

/// `tt` bound to a private data file
pub fn tt(data: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("tt");
    cmd.args(["--data", data, "--config-file", &no_config(data)]);
    cmd
}

/// `tt-report` bound to a private data file
pub fn tt_report(data: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("tt-report");
    cmd.args(["--data", data, "--config-file", &no_config(data)]);
    cmd
}

/// Fresh directory for one test; returns (data file, output dir)
pub fn setup(name: &str) -> (String, String) {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("{name}_tt_test"));
    fs::remove_dir_all(&dir).ok();

    let data = dir.join("data").join("time.csv");
    let out = dir.join("report");
    (
        data.to_string_lossy().to_string(),
        out.to_string_lossy().to_string(),
    )
}

/// Track a small dataset spread over two days
pub fn track_sample(data: &str) {
    for (hours, project, time) in [
        ("2.5", "acme", "2024-01-10T09:00"),
        ("1.5", "beta", "2024-01-10T13:00"),
        ("6", "acme", "2024-01-11T09:00"),
    ] {
        tt(data)
            .args(["track", hours, "-p", project, "-t", time])
            .assert()
            .success();
    }
}

pub fn is_png(path: &str) -> bool {
    fs::read(path)
        .map(|b| b.starts_with(&[0x89, b'P', b'N', b'G']))
        .unwrap_or(false)
}
