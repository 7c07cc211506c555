//! End-to-end tests for the `fnt2lua` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const FONT_XML: &str = r#"<font>
  <info face="Arial" size="32"/>
  <chars count="2">
    <char id="65" x="0" y="0" width="10" height="12" xoffset="0" yoffset="0" xadvance="11"/>
    <char id="66" x="10" y="0" width="9" height="12" xoffset="1" yoffset="0" xadvance="10"/>
  </chars>
</font>"#;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fnt2lua"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run fnt2lua")
}

fn write_font(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path_str(&path)
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_converts_to_stdout() {
    let dir = TempDir::new().unwrap();
    let path = write_font(&dir, "arial.fnt", FONT_XML);

    let output = run(&[path.as_str()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("{\n\tSize = 32,"));
    assert!(stdout.contains("\t\t[\"A\"] = {10, 12, Vector2.new(0, 0), 0, 0, 11},\n"));
    assert!(stdout.contains("\t\t[\"B\"] = {9, 12, Vector2.new(10, 0), 1, 0, 10}\n"));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Selected file: arial.fnt ("));
    assert!(stderr.contains("Conversion successful!"));
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_font(&dir, "arial.xml", FONT_XML);

    let output = run(&[path.as_str(), "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["metadata"]["size"], 32);
    assert_eq!(json["glyphs"][1]["character"], "B");
    assert_eq!(json["glyphs"][1]["x"], 10);
}

#[test]
fn test_json_output_includes_diagnostics() {
    let dir = TempDir::new().unwrap();
    let stray = FONT_XML.replace("</chars>", "<char x=\"1\"/></chars>");
    let path = write_font(&dir, "stray.fnt", &stray);

    let output = run(&[path.as_str(), "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["glyphs"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["diagnostics"][0]["kind"], "stray_glyph_element");
    assert_eq!(json["diagnostics"][0]["element"], r#"<char x="1"/>"#);

    let clean = write_font(&dir, "clean.fnt", FONT_XML);
    let output = run(&[clean.as_str(), "--json"]);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["diagnostics"], serde_json::json!([]));
}

#[test]
fn test_indent_option() {
    let dir = TempDir::new().unwrap();
    let path = write_font(&dir, "arial.txt", FONT_XML);

    let output = run(&[path.as_str(), "--indent", "2"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\n  Size = 32,\n"));
    assert!(stdout.contains("\n    [\"A\"]"));
}

#[test]
fn test_content_error_exit_code() {
    let dir = TempDir::new().unwrap();
    let path = write_font(&dir, "broken.fnt", &FONT_XML.replace(" width=\"9\"", ""));

    let output = run(&[path.as_str()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: Character data (id=66) is missing or invalid."));
}

#[test]
fn test_wrong_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_font(&dir, "arial.png", FONT_XML);

    let output = run(&[path.as_str()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid file type"));
}

#[test]
fn test_warnings_and_strict_mode() {
    let dir = TempDir::new().unwrap();
    let path = write_font(&dir, "empty.fnt", r#"<font><info face="Arial" size="32"/></font>"#);

    let lenient = run(&[path.as_str()]);
    assert!(lenient.status.success());
    let stderr = String::from_utf8(lenient.stderr).unwrap();
    assert!(stderr.contains("warning: No <char../> elements found"));

    let strict = run(&[path.as_str(), "--strict"]);
    assert_eq!(strict.status.code(), Some(1));
}

#[test]
fn test_usage_error() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage: fnt2lua"));
}
