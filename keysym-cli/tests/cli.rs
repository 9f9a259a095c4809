use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const OUTPUT: &str = "libowl/libowl/detail/x11/keysym_to_code_point_table.hpp";
const GUARD: &str = "LIBOWL_DETAIL_X11_KEYSYM_TO_CODE_POINT_TABLE_HPP_";

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// keysym-gen running inside `dir`, with logging left to the flags.
fn keysym_gen(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("keysym-gen");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn read_output(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join(OUTPUT)).expect("generated header")
}

#[test]
fn generates_header_from_sample() {
    let dir = tempfile::tempdir().unwrap();
    keysym_gen(dir.path())
        .arg("--input")
        .arg(fixture_path("keysymdef_sample.h"))
        .arg("--no-format")
        .assert()
        .success();

    let text = read_output(&dir);
    assert!(text.starts_with(&format!("#ifndef {GUARD}\n#define {GUARD}\n")));
    assert!(text.ends_with(&format!("#endif // {GUARD}\n")));
    assert!(text.contains("#include <libowl/types.hpp>"));
    assert!(text.contains("#include <array>"));
    assert!(text.contains(
        "static constexpr std::array<keysym_codepoint_pair, 9> keysym_to_code_point_table"
    ));
    assert!(text.contains("{.keysym = keysym_t(0x0020u), .code_point = code_point_t(0x0020u)}"));
    assert!(text.contains("{.keysym = keysym_t(0x01a1u), .code_point = code_point_t(0x0104u)}"));
    // parenthesized annotation
    assert!(text.contains("{.keysym = keysym_t(0x04a1u), .code_point = code_point_t(0x3002u)}"));
    assert!(text.contains("{.keysym = keysym_t(0x1000d82u), .code_point = code_point_t(0x0D82u)}"));
    // lines without a code point annotation are skipped
    assert!(!text.contains("0xff08"));
    assert!(!text.contains("0xff7e"));
}

#[test]
fn entries_keep_header_order() {
    let dir = tempfile::tempdir().unwrap();
    keysym_gen(dir.path())
        .arg("--input")
        .arg(fixture_path("keysymdef_sample.h"))
        .arg("--no-format")
        .assert()
        .success();

    let text = read_output(&dir);
    let codes = ["0x0020u", "0x0021u", "0x00c1u", "0x01a2u", "0x047eu", "0x1000d82u"];
    let positions: Vec<usize> = codes
        .iter()
        .map(|code| text.find(&format!("keysym_t({code})")).expect(code))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn stdout_prints_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    keysym_gen(dir.path())
        .arg("--input")
        .arg(fixture_path("keysymdef_sample.h"))
        .arg("--stdout")
        .assert()
        .success()
        .stdout(
            predicate::str::contains(format!("#ifndef {GUARD}"))
                .and(predicate::str::contains("keysym_to_code_point_table")),
        );

    assert!(!dir.path().join(OUTPUT).exists());
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    keysym_gen(dir.path())
        .arg("--input")
        .arg(dir.path().join("absent.h"))
        .arg("--no-format")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read keysym header"));

    assert!(!dir.path().join(OUTPUT).exists());
}

#[cfg(unix)]
#[test]
fn failing_formatter_keeps_unformatted_output() {
    let dir = tempfile::tempdir().unwrap();
    keysym_gen(dir.path())
        .arg("--input")
        .arg(fixture_path("keysymdef_sample.h"))
        .arg("--formatter")
        .arg("false")
        .assert()
        .success()
        .stderr(predicate::str::contains("keeping unformatted output"));

    let text = read_output(&dir);
    assert!(text.contains("keysym_to_code_point_table"));
}

#[test]
fn missing_formatter_writes_unformatted_output() {
    let dir = tempfile::tempdir().unwrap();
    keysym_gen(dir.path())
        .arg("--input")
        .arg(fixture_path("keysymdef_sample.h"))
        .arg("--formatter")
        .arg("keysym-gen-no-such-formatter")
        .assert()
        .success()
        .stderr(predicate::str::contains("writing unformatted output"));

    assert!(read_output(&dir).contains("keysym_codepoint_pair"));
}

#[test]
fn empty_header_emits_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.h");
    fs::write(&input, "/* nothing here */\n#define XK_Tab 0xff09\n").unwrap();

    keysym_gen(dir.path())
        .arg("--input")
        .arg(&input)
        .arg("--no-format")
        .assert()
        .success()
        .stderr(predicate::str::contains("the generated table is empty"));

    let text = read_output(&dir);
    assert!(text.contains("std::array<keysym_codepoint_pair, 0> keysym_to_code_point_table = {{}};"));
}

#[test]
fn quiet_silences_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.h");
    fs::write(&input, "").unwrap();

    keysym_gen(dir.path())
        .arg("--input")
        .arg(&input)
        .arg("--no-format")
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn ucs_naming_preset() {
    let dir = tempfile::tempdir().unwrap();
    keysym_gen(dir.path())
        .arg("--input")
        .arg(fixture_path("keysymdef_sample.h"))
        .arg("--naming")
        .arg("ucs")
        .arg("--no-format")
        .assert()
        .success();

    let text = read_output(&dir);
    assert!(text.contains("struct keysym_ucs_pair"));
    assert!(text.contains("keysym_to_UCS_table"));
    assert!(text.contains(".code_point = detail::code_point_t(0x00C1u)"));
}

#[test]
fn unknown_naming_preset_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    keysym_gen(dir.path())
        .arg("--naming")
        .arg("utf16")
        .assert()
        .failure();
}

#[test]
fn guard_follows_project_root_and_strip_components() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("include/x11/table.hpp");

    keysym_gen(dir.path())
        .arg("--input")
        .arg(fixture_path("keysymdef_sample.h"))
        .arg("--output")
        .arg(&output)
        .arg("--project-root")
        .arg(dir.path())
        .arg("--strip-components")
        .arg("0")
        .arg("--no-format")
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("#ifndef INCLUDE_X11_TABLE_HPP_\n"));
}

#[test]
fn output_outside_project_root_fails() {
    let dir = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();

    keysym_gen(dir.path())
        .arg("--input")
        .arg(fixture_path("keysymdef_sample.h"))
        .arg("--output")
        .arg(elsewhere.path().join("table.hpp"))
        .arg("--project-root")
        .arg(dir.path())
        .arg("--no-format")
        .assert()
        .failure();
}

#[test]
fn config_file_layers_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(
        &config,
        format!(
            r#"
[input]
path = "{}"

[output]
path = "gen/keysyms.hpp"

[guard]
strip_components = 0

[document]
banner = "Generated by keysym-gen. Do not edit."

[formatter]
enabled = false
"#,
            fixture_path("keysymdef_sample.h").display()
        ),
    )
    .unwrap();

    keysym_gen(dir.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let text = fs::read_to_string(dir.path().join("gen/keysyms.hpp")).unwrap();
    assert!(text.starts_with("/**\n * Generated by keysym-gen. Do not edit.\n */\n"));
    assert!(text.contains("#ifndef GEN_KEYSYMS_HPP_"));
}

#[test]
fn local_config_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("keysym-gen.toml"),
        "[naming]\npreset = \"ucs\"\n\n[formatter]\nenabled = false\n",
    )
    .unwrap();

    keysym_gen(dir.path())
        .arg("--input")
        .arg(fixture_path("keysymdef_sample.h"))
        .assert()
        .success();

    assert!(read_output(&dir).contains("keysym_to_UCS_table"));
}

#[test]
fn default_level_hides_info() {
    let dir = tempfile::tempdir().unwrap();
    keysym_gen(dir.path())
        .arg("--input")
        .arg(fixture_path("keysymdef_sample.h"))
        .arg("--no-format")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn verbose_reports_definition_count() {
    let dir = tempfile::tempdir().unwrap();
    keysym_gen(dir.path())
        .arg("--input")
        .arg(fixture_path("keysymdef_sample.h"))
        .arg("--no-format")
        .arg("-v")
        .assert()
        .success()
        .stderr(
            predicate::str::contains("9 definitions in")
                .and(predicate::str::contains("(8 spaced, 1 parenthesized)"))
                .and(predicate::str::contains("scanned").not()),
        );
}

#[test]
fn very_verbose_adds_debug_output() {
    let dir = tempfile::tempdir().unwrap();
    keysym_gen(dir.path())
        .arg("--input")
        .arg(fixture_path("keysymdef_sample.h"))
        .arg("--no-format")
        .arg("-vv")
        .assert()
        .success()
        .stderr(
            predicate::str::contains("9 definitions in")
                .and(predicate::str::contains("8 spaced, 1 parenthesized definitions")),
        );
}

#[test]
fn parent_component_in_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("build");
    fs::create_dir(&nested).unwrap();

    keysym_gen(&nested)
        .arg("--input")
        .arg(fixture_path("keysymdef_sample.h"))
        .arg("--output")
        .arg("../gen/table.hpp")
        .arg("--no-format")
        .assert()
        .failure()
        .stderr(predicate::str::contains("`..` component"));

    assert!(!dir.path().join("gen/table.hpp").exists());
}
