//! Library integration tests.

use rocm_smoke::results::TestResults;
use rocm_smoke::SmokeError;

#[test]
fn error_types_are_public() {
    let err = SmokeError::UnknownProbe {
        name: "cublas".into(),
        available: "hip, hsa".into(),
    };
    assert!(err.to_string().contains("cublas"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> rocm_smoke::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn empty_run_succeeds_with_zero_totals() {
    let results = TestResults::new();
    let summary = results.render_summary();

    assert!(summary.contains("Total tests: 0"));
    assert!(summary.contains("Passed: 0"));
    assert!(summary.contains("Failed: 0"));
    assert_eq!(results.exit_code(), 0);
}

#[test]
fn one_failure_fails_the_run() {
    let mut results = TestResults::new();
    results.add_test("A", true, "");
    results.add_test("B", false, "boom");

    let summary = results.render_summary();
    assert!(summary.contains("✓ PASS: A\n"));
    assert!(summary.contains("✗ FAIL: B - boom\n"));
    assert!(summary.find("PASS: A") < summary.find("FAIL: B"));
    assert_eq!(results.exit_code(), 1);
}

#[test]
fn registry_keeps_standard_order() {
    use rocm_smoke::probes::ProbeRegistry;

    assert_eq!(
        ProbeRegistry::standard().ids(),
        vec!["hip", "hsa", "rocblas", "hipblas", "rocfft", "rocrand", "rocsparse", "rocsolver"]
    );
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use rocm_smoke::cli::{Cli, Commands};

    let cli = Cli::parse_from(["rocm-smoke", "run", "--extended", "--json"]);
    match cli.command {
        Some(Commands::Run(args)) => {
            assert!(args.extended);
            assert!(args.json);
        }
        other => panic!("Expected Run, got {:?}", other),
    }
}
