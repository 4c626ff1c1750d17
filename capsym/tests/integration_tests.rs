//! Integration tests for the capsym library

use capsym::prelude::*;
use std::path::{Path, PathBuf};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture_options(output_dir: &Path) -> GenerateOptions {
    GenerateOptions {
        output_dir: output_dir.to_path_buf(),
        horizontal_template: fixture_path("capsym_h.tpl"),
        vertical_template: fixture_path("capsym_v.tpl"),
    }
}

#[test]
fn test_generate_creates_both_orientations() {
    let dir = tempfile::tempdir().unwrap();
    let result = CapsymCore::generate(
        &fixture_path("capsym.conf"),
        &fixture_options(dir.path()),
    )
    .unwrap();

    assert_eq!(result.base_name, "1u0_x7r_50v_1206");
    assert_eq!(result.value_label, "1.0u");
    assert_eq!(result.created(), 2);
    assert_eq!(result.skipped(), 0);

    assert!(dir.path().join("1u0_x7r_50v_1206_horz.sym").exists());
    assert!(dir.path().join("1u0_x7r_50v_1206_vert.sym").exists());
}

#[test]
fn test_generated_symbol_starts_with_template_bytes() {
    let dir = tempfile::tempdir().unwrap();
    CapsymCore::generate(
        &fixture_path("capsym.conf"),
        &fixture_options(dir.path()),
    )
    .unwrap();

    let template = std::fs::read_to_string(fixture_path("capsym_h.tpl")).unwrap();
    let written =
        std::fs::read_to_string(dir.path().join("1u0_x7r_50v_1206_horz.sym")).unwrap();

    assert!(written.starts_with(&template));
    assert!(written.contains("footprint=1206_capacitor.fp"));
    assert!(written.contains("part=GRM188R61E105KA12D"));
    assert!(written.contains("value=1.0u"));
}

#[test]
fn test_orientations_use_their_own_anchors() {
    let dir = tempfile::tempdir().unwrap();
    CapsymCore::generate(
        &fixture_path("capsym.conf"),
        &fixture_options(dir.path()),
    )
    .unwrap();

    let horz =
        std::fs::read_to_string(dir.path().join("1u0_x7r_50v_1206_horz.sym")).unwrap();
    let vert =
        std::fs::read_to_string(dir.path().join("1u0_x7r_50v_1206_vert.sym")).unwrap();

    assert!(horz.contains("T 0 1400 8 10 0 0 0 0 1\nfootprint="));
    assert!(horz.contains("T 1200 0 8 10 1 1 0 0 1\nvalue="));
    assert!(vert.contains("T 100 1400 8 10 0 0 0 0 1\nfootprint="));
    assert!(vert.contains("T 500 400 8 10 1 1 0 0 1\nvalue="));
}

#[test]
fn test_rerun_skips_existing_symbols() {
    let dir = tempfile::tempdir().unwrap();
    let options = fixture_options(dir.path());
    let config = fixture_path("capsym.conf");

    let first = CapsymCore::generate(&config, &options).unwrap();
    assert_eq!(first.created(), 2);

    // Replace one output so an overwrite would be detectable.
    let horz = dir.path().join("1u0_x7r_50v_1206_horz.sym");
    std::fs::write(&horz, "sentinel\n").unwrap();

    let second = CapsymCore::generate(&config, &options).unwrap();
    assert_eq!(second.created(), 0);
    assert_eq!(second.skipped(), 2);
    assert_eq!(std::fs::read_to_string(&horz).unwrap(), "sentinel\n");
}

#[test]
fn test_missing_config_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = CapsymCore::generate(
        &fixture_path("no_such.conf"),
        &fixture_options(dir.path()),
    );
    assert!(matches!(result, Err(CapsymError::Config(_))));
}

#[test]
fn test_missing_template_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let options = GenerateOptions {
        output_dir: dir.path().to_path_buf(),
        horizontal_template: fixture_path("no_such.tpl"),
        vertical_template: fixture_path("capsym_v.tpl"),
    };
    let result = CapsymCore::generate(&fixture_path("capsym.conf"), &options);
    assert!(matches!(result, Err(CapsymError::Io(_))));
}

#[test]
fn test_convenience_wrappers() {
    let config = capsym::parse_config(&fixture_path("capsym.conf")).unwrap();
    assert_eq!(config.precision, 2);
    assert_eq!(capsym::format_value(2.2e-9, 2).unwrap(), "2.2n");
}
