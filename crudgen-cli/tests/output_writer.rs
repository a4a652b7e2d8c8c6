//! Integration tests for writing generated files

use crudgen::generate;
use crudgen_cli_lib::{OutputWriter, WriteOutcome};
use std::fs;
use tempfile::TempDir;

const WIDGET: &str = r#"{"EntityName":"Widget","Properties":[{"Name":"Id","Type":"int"},{"Name":"Name","Type":"string"}]}"#;

/// Test that every generated path is written with its content
#[test]
fn test_write_creates_all_files() {
    let temp_dir = TempDir::new().unwrap();
    let result = generate(WIDGET).unwrap();
    let writer = OutputWriter::new(temp_dir.path(), false);

    let written = writer.write_all(&result).unwrap();
    assert_eq!(written.len(), 6);
    assert!(written.iter().all(|file| file.outcome == WriteOutcome::Created));

    for (path, content) in &result.files {
        let on_disk = fs::read_to_string(temp_dir.path().join(path)).unwrap();
        assert_eq!(&on_disk, content, "content mismatch for {path}");
    }

    assert!(temp_dir.path().join("Output/Api/Controllers/WidgetController.cs").is_file());
}

/// Test that writing the same result twice leaves files unchanged
#[test]
fn test_rewrite_is_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let result = generate(WIDGET).unwrap();
    let writer = OutputWriter::new(temp_dir.path(), false);

    writer.write_all(&result).unwrap();
    let second = writer.write_all(&result).unwrap();
    assert!(second.iter().all(|file| file.outcome == WriteOutcome::Unchanged));
}

/// Test that modified files are not overwritten without force, and nothing is written
#[test]
fn test_conflict_aborts_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let result = generate(WIDGET).unwrap();

    let program = temp_dir.path().join("Output/Api/Program.cs");
    fs::create_dir_all(program.parent().unwrap()).unwrap();
    fs::write(&program, "// hand edited\n").unwrap();

    let writer = OutputWriter::new(temp_dir.path(), false);
    let err = writer.write_all(&result).unwrap_err();
    assert!(err.to_string().contains("Refusing to overwrite"));

    assert_eq!(fs::read_to_string(&program).unwrap(), "// hand edited\n");
    assert!(!temp_dir.path().join("Output/Domain/Entities/Widget.cs").exists());
}

/// Test that force replaces modified files
#[test]
fn test_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let result = generate(WIDGET).unwrap();

    let program = temp_dir.path().join("Output/Api/Program.cs");
    fs::create_dir_all(program.parent().unwrap()).unwrap();
    fs::write(&program, "// hand edited\n").unwrap();

    let writer = OutputWriter::new(temp_dir.path(), true);
    let written = writer.write_all(&result).unwrap();

    let program_outcome = written
        .iter()
        .find(|file| file.path == "Output/Api/Program.cs")
        .unwrap()
        .outcome;
    assert_eq!(program_outcome, WriteOutcome::Overwritten);
    assert_eq!(fs::read_to_string(&program).unwrap(), result.files["Output/Api/Program.cs"]);
}

/// Test that plan reports outcomes without touching the disk
#[test]
fn test_plan_is_read_only() {
    let temp_dir = TempDir::new().unwrap();
    let result = generate(WIDGET).unwrap();
    let writer = OutputWriter::new(temp_dir.path(), false);

    let planned = writer.plan(&result).unwrap();
    assert_eq!(planned.len(), 6);
    assert!(planned.iter().all(|file| file.outcome == WriteOutcome::Created));
    assert!(!temp_dir.path().join("Output").exists());
}

/// Test that an entity name with separators cannot escape the output directory
#[test]
fn test_entity_name_cannot_escape() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");
    let result = generate(r#"{"EntityName":"../../Evil","Properties":[{"Name":"Id","Type":"int"}]}"#).unwrap();

    let writer = OutputWriter::new(&out, false);
    let written = writer.write_all(&result).unwrap();
    assert!(written.iter().all(|file| file.full_path.starts_with(&out)));
    assert!(out.join("Output/Domain/Entities/.._.._Evil.cs").is_file());
}
