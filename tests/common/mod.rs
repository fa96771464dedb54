// tests/common/mod.rs
//! 共通テストユーティリティ

use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Command for the built binary with logging kept quiet.
pub fn country_table() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_country_table"));
    cmd.env_remove("COUNTRY_TABLE_LOG");
    cmd
}

/// Writes a small dataset in the bundled document shape and returns its path.
#[allow(dead_code)]
pub fn write_dataset(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

#[allow(dead_code)]
pub const THREE_COUNTRIES: &str = r#"{
  "countries": [
    { "id": "a", "name": "Chad", "nameUn": "Chad", "code": "TD", "continent": "AF", "hasStates": false },
    { "id": "b", "name": "France", "nameUn": "France", "code": "FR", "continent": "EU", "hasStates": true },
    { "id": "c", "name": "Benin", "nameUn": "Benin", "code": "BJ", "continent": "AF", "hasStates": false }
  ]
}"#;

/// Parses stdout as JSON.
#[allow(dead_code)]
pub fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}
