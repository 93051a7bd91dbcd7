// tests/property/ordering_test.rs

//! Property-based tests for execution order
//! Tests that lower priorities take effect strictly before higher ones

use crate::test_helpers::{init_tracing, letter_pipeline};
use handlerchain::core::handler::actions::{RemoveChars, Replace};
use handlerchain::core::{HandlerRegistry, Pipeline, Request};
use proptest::prelude::*;

fn letter_table() -> impl Strategy<Value = Vec<(char, i64)>> {
    prop::collection::btree_map(prop::char::range('a', 'z'), -100i64..100, 0..10)
        .prop_map(|m| m.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 100,
        max_shrink_iters: 1000,
        ..ProptestConfig::default()
    })]

    #[test]
    fn test_steps_follow_priority_then_declaration_order(
        letters in letter_table(),
        text in "[a-z]{0,40}"
    ) {
        let pipeline = letter_pipeline(&letters);
        let mut request = Request::new(text);
        let report = pipeline.run(&mut request).unwrap();

        prop_assert_eq!(report.steps.len(), letters.len());
        for pair in report.steps.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.priority < b.priority || (a.priority == b.priority && a.id < b.id),
                "{} ({}) ran before {} ({})", a.handler, a.priority, b.handler, b.priority
            );
        }
        for pair in report.steps.windows(2) {
            prop_assert_eq!(&pair[0].after, &pair[1].before);
        }
    }

    #[test]
    fn test_earlier_handler_effect_is_seen_by_later_handler(
        replace_priority in -50i64..50,
        strip_priority in -50i64..50,
        text in "[abc]{0,30}"
    ) {
        prop_assume!(replace_priority != strip_priority);
        init_tracing();

        let mut registry = HandlerRegistry::new();
        registry
            .register("a-to-b", replace_priority, Replace::new("a-to-b", "a", "b").unwrap())
            .unwrap();
        registry
            .register("strip-b", strip_priority, RemoveChars::new(['b']))
            .unwrap();
        let pipeline = Pipeline::new(registry);

        let mut request = Request::new(text.clone());
        pipeline.run(&mut request).unwrap();
        let out = request.into_string();

        let a_count = text.matches('a').count();
        let c_count = text.matches('c').count();
        prop_assert_eq!(out.matches('c').count(), c_count);
        prop_assert_eq!(out.matches('a').count(), 0);
        if replace_priority < strip_priority {
            prop_assert_eq!(out.matches('b').count(), 0);
        } else {
            prop_assert_eq!(out.matches('b').count(), a_count);
        }
    }

    #[test]
    fn test_removals_match_model(
        letters in letter_table(),
        text in "[a-z]{0,60}"
    ) {
        let pipeline = letter_pipeline(&letters);
        let mut request = Request::new(text.clone());
        pipeline.run(&mut request).unwrap();

        let expected: String = text
            .chars()
            .filter(|c| !letters.iter().any(|(l, _)| l == c))
            .collect();
        prop_assert_eq!(request.as_str(), expected.as_str());
    }
}
