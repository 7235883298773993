#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SAMPLE_LOG: [&str; 11] = [
    "14:02:03 ALICE99 Start",
    "14:02:05 CHARLIE End",
    "14:02:34 ALICE99 End",
    "14:02:58 ALICE99 Start",
    "14:03:02 CHARLIE Start",
    "14:03:33 ALICE99 Start",
    "14:03:35 ALICE99 End",
    "14:03:37 CHARLIE End",
    "14:04:05 ALICE99 End",
    "14:04:23 ALICE99 End",
    "14:04:41 CHARLIE Start",
];

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn create_test_log(dir: &Path, filename: &str, lines: &[&str]) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, lines.join("\n"))?;
    Ok(file_path)
}

pub fn setup_test_log(lines: &[&str]) -> Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let path = create_test_log(temp_dir.path(), "billing.log", lines)?;
    Ok((temp_dir, path))
}
