// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests: JSON source in, rendered value or driver error out.

use cinder_eval::{EvalErrorKind, ScopingMode};
use cinderc::{run_source, DriverError, Options};
const FACTORIAL: &str = include_str!("programs/factorial.json");
const SCOPING: &str = include_str!("programs/scoping.json");
const DEFINES: &str = include_str!("programs/defines.json");
const COUNTDOWN: &str = include_str!("programs/countdown.json");

fn eval(source: &str) -> String {
    eval_with(source, &Options::default())
}

fn eval_with(source: &str, options: &Options) -> String {
    run_source(source, options, None)
        .expect("program should evaluate")
        .to_string()
}

fn fail(source: &str) -> DriverError {
    run_source(source, &Options::default(), None).expect_err("program should fail")
}

fn dynamic() -> Options {
    Options {
        scoping: Some(ScopingMode::Dynamic),
        ..Options::default()
    }
}

mod programs {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn factorial() {
        assert_eq!(eval(FACTORIAL), "3628800");
        assert_eq!(eval_with(FACTORIAL, &dynamic()), "3628800");
    }

    #[test]
    fn scoping_divergence() {
        assert_eq!(eval(SCOPING), "1");
        assert_eq!(eval_with(SCOPING, &dynamic()), "2");
    }

    #[test]
    fn scoping_from_environment_variable() {
        let value = run_source(SCOPING, &Options::default(), Some("dynamic")).unwrap();
        assert_eq!(value.to_string(), "2");

        let flagged = Options {
            scoping: Some(ScopingMode::Lexical),
            ..Options::default()
        };
        let value = run_source(SCOPING, &flagged, Some("dynamic")).unwrap();
        assert_eq!(value.to_string(), "1");
    }

    #[test]
    fn defines_seed_constants() {
        let options = Options {
            defines: vec![
                ("x".to_string(), 10),
                ("v".to_string(), 5),
                ("i".to_string(), 1),
            ],
            ..Options::default()
        };
        assert_eq!(eval_with(DEFINES, &options), "15");
    }

    #[test]
    fn defines_absent_means_unbound() {
        let err = fail(DEFINES);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "unbound identifier: x");
    }

    #[test]
    fn deep_recursion_within_default_limit() {
        assert_eq!(eval(COUNTDOWN), "done");
    }

    #[test]
    fn deeply_nested_lets() {
        // Let x = 0 in Let x = add(x, 1) in ... x
        let depth = 1_000;
        let mut source = String::from(r#"{"Let": [{"Identifier": "x"}, 0, "#);
        for _ in 1..depth {
            source.push_str(
                r#"{"Let": [{"Identifier": "x"}, {"Application": [{"Identifier": "add"}, {"Identifier": "x"}, 1]}, "#,
            );
        }
        source.push_str(r#"{"Identifier": "x"}"#);
        for _ in 0..depth {
            source.push_str("]}");
        }
        assert_eq!(eval(&source), (depth - 1).to_string());
    }

    #[test]
    fn depth_limit_from_options() {
        let options = Options {
            max_depth: Some(Some(100)),
            ..Options::default()
        };
        let err = run_source(COUNTDOWN, &options, None).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        let DriverError::Eval(eval) = err else {
            panic!("expected an evaluation error");
        };
        assert_eq!(eval.kind, EvalErrorKind::StackOverflow { depth: 100 });
        assert!(eval.backtrace.is_some());
    }
}

mod values {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn literals() {
        assert_eq!(eval("7"), "7");
        assert_eq!(eval(r#""plain text""#), "plain text");
        assert_eq!(eval(r#"{"Identifier": "true"}"#), "true");
    }

    #[test]
    fn empty_forms_are_false() {
        assert_eq!(eval(r#"{"Block": []}"#), "false");
        assert_eq!(eval(r#"{"Cond": []}"#), "false");
    }

    #[test]
    fn callables_render_by_kind() {
        assert_eq!(eval(r#"{"Identifier": "add"}"#), "<native add>");
        assert_eq!(
            eval(r#"{"Lambda": [{"Parameters": [{"Identifier": "a"}]}, 0]}"#),
            "<closure/1>"
        );
    }

    #[test]
    fn untaken_unknown_branch_is_fine() {
        let source = r#"{"Cond": [
            {"Clause": [{"Identifier": "true"}, 1]},
            {"Clause": [{"While": []}, {"While": []}]}
        ]}"#;
        assert_eq!(eval(source), "1");
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_errors_exit_with_two() {
        for source in ["{", r#"{"Let": [1, 2, 3]}"#, r#"{"Block": 1}"#] {
            assert_eq!(fail(source).exit_code(), 2, "{source}");
        }
    }

    #[test]
    fn evaluation_errors_exit_with_one() {
        let cases = [
            (r#"{"While": [1]}"#, "unknown expression type: While"),
            ("9223372036854775807", "improper number 9223372036854775807: not a 64-bit integer"),
            (r#"{"Application": [1, 2]}"#, "int is not callable"),
            (
                r#"{"Assignment": [{"Identifier": "nope"}, 1]}"#,
                "cannot assign to nope: no existing binding",
            ),
            (
                r#"{"Cond": [{"Clause": [0, 1]}]}"#,
                "conditional test must be boolean: expected bool, got int",
            ),
            (
                r#"{"Application": [{"Identifier": "add"}, 1]}"#,
                "add expects 2 arguments, got 1",
            ),
        ];
        for (source, message) in cases {
            let err = fail(source);
            assert_eq!(err.exit_code(), 1, "{source}");
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn usage_error_from_bad_environment_variable() {
        let err = run_source("1", &Options::default(), Some("sideways")).unwrap_err();
        assert!(matches!(err, DriverError::Usage(_)));
        assert_eq!(err.exit_code(), 2);
    }
}
