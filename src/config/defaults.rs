//! Built-in baseline configuration.

/// Conventional location of the project config file.
///
/// A missing file at this path is not an error.
pub const DEFAULT_CONFIG_FILE: &str = "stampli.json";

/// Baseline document applied before any config file or flag.
pub const DEFAULT_CONFIG: &str = r#"{
  "testCommand": "go test ./... -coverprofile=coverage.out",
  "outputFile": "coverage-badge.svg",
  "template": "",
  "levels": "0=#e05d44,40=#dfb317,60=#97ca00,80=#44cc11",
  "dumpTemplate": false,
  "dumpConfig": false,
  "quiet": false,
  "autoClean": false
}
"#;
