//! Scenario contract tests.
//!
//! Walks each mode from a realistic kernel command line through expectation
//! derivation and outcome classification, mirroring what the controller does
//! at boot.

use std::io::Write;

use imatest_core::{
    ChildOutcome, ConfigError, EXEC_DENIED_EXIT, ScenarioMode, Verdict, classify, cmdline,
};

fn cmdline_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp cmdline");
    file.write_all(contents.as_bytes()).expect("write cmdline");
    file
}

#[test]
fn test_every_mode_parses_from_a_full_cmdline() {
    for mode in ScenarioMode::ALL {
        // Given: A command line the VM driver would actually pass
        let line = format!("console=ttyS0 panic=-1 ima_test_mode={} quiet", mode.token());
        let file = cmdline_file(&line);

        // When: Parsing the scenario
        let parsed = cmdline::parse(file.path()).expect("mode should parse");

        // Then: The parsed mode matches the token
        assert_eq!(parsed, mode);
    }
}

#[test]
fn test_missing_key_is_a_config_error() {
    let file = cmdline_file("console=ttyS0 panic=-1");

    let err = cmdline::parse(file.path()).expect_err("missing key should fail");
    assert!(matches!(err, ConfigError::MissingKey));
}

#[test]
fn test_enforce_unsigned_full_path() {
    // Given: The exec-denial scenario
    let file = cmdline_file("ima_test_mode=enforce_unsigned");
    let mode = cmdline::parse(file.path()).expect("mode should parse");

    // Then: Only the permission-denied exit passes
    let expect = mode.expectation();
    assert_eq!(
        classify(expect, ChildOutcome::Exited(EXEC_DENIED_EXIT)),
        Verdict::Pass
    );
    for outcome in [
        ChildOutcome::Exited(0),
        ChildOutcome::Exited(2),
        ChildOutcome::Signaled(9),
    ] {
        assert_eq!(
            classify(expect, outcome),
            Verdict::Fail,
            "{outcome:?} must not pass exec denial"
        );
    }
}

#[test]
fn test_file_unsigned_passes_on_probe_exit_3() {
    // The probe exits with an arbitrary non-zero status when its data file
    // read is denied; any such exit is a pass for file_unsigned.
    let file = cmdline_file("ima_test_mode=file_unsigned");
    let mode = cmdline::parse(file.path()).expect("mode should parse");

    assert_eq!(
        classify(mode.expectation(), ChildOutcome::Exited(3)),
        Verdict::Pass
    );
    assert_eq!(
        classify(mode.expectation(), ChildOutcome::Exited(0)),
        Verdict::Fail
    );
}

#[test]
fn test_signed_modes_pass_on_clean_probe_exit() {
    for token in ["enforce_signed", "file_signed", "noima"] {
        let file = cmdline_file(&format!("ima_test_mode={token}"));
        let mode = cmdline::parse(file.path()).expect("mode should parse");

        assert_eq!(
            classify(mode.expectation(), ChildOutcome::Exited(0)),
            Verdict::Pass,
            "{token} should pass on exit 0"
        );
        assert_eq!(
            classify(mode.expectation(), ChildOutcome::Exited(1)),
            Verdict::Fail,
            "{token} should fail on exit 1"
        );
    }
}
