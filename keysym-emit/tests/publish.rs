//! Publishing tests: raw write, formatter success, formatter failure.
//!
//! `cat`, `false` and `sed` stand in for clang-format; tests that need one
//! return early where it isn't installed.

use keysym_emit::{
    publish, render, DocumentLayout, FormatError, Formatter, GuardRule, NamingPreset,
    PublishOutcome,
};
use keysym_parser::{Classifier, ParsedTable};
use std::fs;
use std::path::Path;

const HEADER: &str = "\
#define XK_Aacute 0x0100 /* U+00C1 LATIN CAPITAL LETTER A WITH ACUTE */
#define XK_Ooblique 0x00d8  /*(U+00D8 LATIN CAPITAL LETTER O WITH STROKE)*/
";

fn document(output: &Path, root: &Path) -> keysym_emit::GeneratedDocument {
    let table = ParsedTable::parse_str(HEADER, &Classifier::default()).unwrap();
    let guard = GuardRule::new(Some(root.to_path_buf()), 0)
        .derive(output)
        .unwrap();
    render(
        &table,
        &NamingPreset::CodePoint.naming(),
        &guard,
        &DocumentLayout::default(),
    )
}

#[test]
fn writes_raw_document_without_formatter() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("libowl/detail/x11/keysym_to_code_point_table.hpp");
    let doc = document(&output, dir.path());

    let outcome = publish(&doc, &output, None).unwrap();

    assert!(matches!(outcome, PublishOutcome::FormatterDisabled));
    assert_eq!(fs::read_to_string(&output).unwrap(), doc.as_str());
    assert!(doc
        .as_str()
        .starts_with("#ifndef LIBOWL_DETAIL_X11_KEYSYM_TO_CODE_POINT_TABLE_HPP_\n"));
}

#[test]
fn formatter_output_replaces_raw_document() {
    let Ok(sed) = Formatter::locate("sed", vec!["s/^ *//".to_string()]) else {
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("table.hpp");
    let doc = document(&output, dir.path());

    let outcome = publish(&doc, &output, Some(&sed)).unwrap();

    assert!(outcome.is_formatted());
    let written = fs::read_to_string(&output).unwrap();
    assert_ne!(written, doc.as_str());
    assert!(written.lines().all(|line| !line.starts_with(' ')));
    assert!(written.contains("{.keysym = keysym_t(0x0100u), .code_point = code_point_t(0x00C1u)},"));
}

#[test]
fn staging_file_is_moved_into_place() {
    let Ok(cat) = Formatter::locate("cat", Vec::new()) else {
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("table.hpp");
    let doc = document(&output, dir.path());

    assert!(publish(&doc, &output, Some(&cat)).unwrap().is_formatted());
    assert_eq!(fs::read_to_string(&output).unwrap(), doc.as_str());

    // Only the output remains; the staging file was moved into place.
    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["table.hpp".to_string()]);
}

#[test]
fn failing_formatter_keeps_raw_document() {
    let Ok(failing) = Formatter::locate("false", Vec::new()) else {
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("table.hpp");
    fs::write(&output, "stale contents\n").unwrap();
    let doc = document(&output, dir.path());

    let outcome = publish(&doc, &output, Some(&failing)).unwrap();

    match outcome {
        PublishOutcome::Unformatted { reason } => {
            assert!(matches!(reason, FormatError::Failed { .. }))
        }
        other => panic!("expected unformatted outcome, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(&output).unwrap(), doc.as_str());
}

#[test]
fn missing_formatter_binary_keeps_raw_document() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("table.hpp");
    let doc = document(&output, dir.path());
    let ghost = Formatter::new(dir.path().join("no-such-clang-format"), Vec::new());

    let outcome = publish(&doc, &output, Some(&ghost)).unwrap();

    assert!(matches!(
        outcome,
        PublishOutcome::Unformatted {
            reason: FormatError::Spawn { .. }
        }
    ));
    assert_eq!(fs::read_to_string(&output).unwrap(), doc.as_str());
}

#[test]
fn republishing_fully_replaces_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("table.hpp");
    fs::write(&output, "x".repeat(10_000)).unwrap();
    let doc = document(&output, dir.path());

    publish(&doc, &output, None).unwrap();
    publish(&doc, &output, None).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), doc.as_str());
}

#[cfg(unix)]
#[test]
fn new_output_is_world_readable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("table.hpp");
    let doc = document(&output, dir.path());

    publish(&doc, &output, None).unwrap();

    let mode = fs::metadata(&output).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
}
