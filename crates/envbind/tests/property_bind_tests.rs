//! Property-based tests for environment binding.
//!
//! These tests verify resolution semantics over randomized environments:
//! set variables bind exactly, everything else falls back, and loading is
//! repeatable without mutating its source.
//!
//! Test coverage:
//! - String fields: bound verbatim when set, zero-valued when not
//! - Integer fields: decimal roundtrip and fallback on unparseable input
//! - Boolean fields: the exact recognized token set, nothing more
//! - Table walk: repeatability, read-only source, annotation position

use proptest::prelude::*;

use envbind::{BindError, Bindable, Binder, EnvSource, Field, MapEnv, Slot, bindable};

/// The twelve tokens the boolean grammar accepts.
const BOOL_TOKENS: [(&str, bool); 12] = [
    ("1", true),
    ("t", true),
    ("T", true),
    ("true", true),
    ("TRUE", true),
    ("True", true),
    ("0", false),
    ("f", false),
    ("F", false),
    ("false", false),
    ("FALSE", false),
    ("False", false),
];

bindable! {
    #[derive(Debug, Default, PartialEq)]
    struct Sample {
        text: String => "SAMPLE_TEXT",
        number: i64 => "SAMPLE_NUMBER",
        flag: bool => "SAMPLE_FLAG",
    }
}

/// Three integer fields whose annotations can be blanked one at a time.
struct SlidingEnv {
    values: [i64; 3],
    vars: [&'static str; 3],
}

impl SlidingEnv {
    fn with_vars(vars: [&'static str; 3]) -> Self {
        Self {
            values: [0; 3],
            vars,
        }
    }
}

impl Bindable for SlidingEnv {
    fn fields(&mut self) -> Vec<Field<'_>> {
        let [first, second, third] = &mut self.values;
        vec![
            Field {
                name: "first",
                var: self.vars[0],
                slot: Slot::Int {
                    place: first,
                    fallback: 0,
                },
            },
            Field {
                name: "second",
                var: self.vars[1],
                slot: Slot::Int {
                    place: second,
                    fallback: 0,
                },
            },
            Field {
                name: "third",
                var: self.vars[2],
                slot: Slot::Int {
                    place: third,
                    fallback: 0,
                },
            },
        ]
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Test that a string field binds the set value verbatim, or the empty
    /// string when unset.
    #[test]
    fn test_string_binds_value_or_fallback(value in proptest::option::of("[ -~]{0,24}")) {
        let mut env = MapEnv::new();
        if let Some(text) = &value {
            env.insert("SAMPLE_TEXT", text.clone());
        }

        let mut sample = Sample::default();
        Binder::new(env).load(&mut sample).unwrap();

        prop_assert_eq!(sample.text, value.unwrap_or_default());
    }

    /// Test that any integer written in decimal binds back to itself.
    #[test]
    fn test_integer_decimal_roundtrip(number in any::<i64>()) {
        let env = MapEnv::new().with_var("SAMPLE_NUMBER", number.to_string());

        let mut sample = Sample::default();
        Binder::new(env).load(&mut sample).unwrap();

        prop_assert_eq!(sample.number, number);
    }

    /// Test that a set-but-unparseable integer resolves to zero.
    #[test]
    fn test_unparseable_integer_falls_back(
        raw in "[ -~]{1,24}".prop_filter(
            "value must not parse as i64",
            |s| s.parse::<i64>().is_err()
        )
    ) {
        let env = MapEnv::new().with_var("SAMPLE_NUMBER", raw);

        let mut sample = Sample::default();
        Binder::new(env).load(&mut sample).unwrap();

        prop_assert_eq!(sample.number, 0);
    }

    /// Test that every recognized boolean token binds its value.
    #[test]
    fn test_recognized_bool_tokens_bind(
        (token, expected) in proptest::sample::select(BOOL_TOKENS.to_vec())
    ) {
        let env = MapEnv::new().with_var("SAMPLE_FLAG", token);

        let mut sample = Sample::default();
        Binder::new(env).load(&mut sample).unwrap();

        prop_assert_eq!(sample.flag, expected);
    }

    /// Test that anything outside the token set resolves to the fallback.
    #[test]
    fn test_unrecognized_bool_falls_back(
        raw in "[ -~]{1,8}".prop_filter(
            "value must not be a recognized token",
            |s| BOOL_TOKENS.iter().all(|(token, _)| *token != s.as_str())
        )
    ) {
        let env = MapEnv::new().with_var("SAMPLE_FLAG", raw);

        let mut sample = Sample::default();
        Binder::new(env).load(&mut sample).unwrap();

        prop_assert!(!sample.flag);
    }

    /// Test that loading twice from the same source gives identical results
    /// and leaves the source unchanged.
    #[test]
    fn test_load_is_repeatable_and_read_only(
        text in "[ -~]{0,16}",
        number in any::<i64>(),
        token in proptest::sample::select(BOOL_TOKENS.to_vec()),
    ) {
        let env = MapEnv::new()
            .with_var("SAMPLE_TEXT", text)
            .with_var("SAMPLE_NUMBER", number.to_string())
            .with_var("SAMPLE_FLAG", token.0);
        let binder = Binder::new(env);

        let mut first = Sample::default();
        let mut second = Sample::default();
        binder.load(&mut first).unwrap();
        binder.load(&mut second).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(binder.env().len(), 3);
        prop_assert_eq!(binder.env().get("SAMPLE_NUMBER"), Some(number.to_string()));
    }

    /// Test that a blanked annotation is reported for the right field no
    /// matter where it sits in the table.
    #[test]
    fn test_missing_annotation_reports_the_right_field(position in 0usize..3) {
        let mut vars = ["SLIDE_A", "SLIDE_B", "SLIDE_C"];
        vars[position] = "";

        let mut target = SlidingEnv::with_vars(vars);
        let err = Binder::new(MapEnv::new()).load(&mut target).unwrap_err();

        let expected = ["first", "second", "third"][position];
        match err {
            BindError::MissingAnnotation { field } => prop_assert_eq!(field, expected),
            other => prop_assert!(false, "expected missing annotation, got {other:?}"),
        }
    }
}
