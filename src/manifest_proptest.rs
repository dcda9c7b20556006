//! Property-based tests for manifest de-duplication.
//!
//! These tests use proptest to generate random module lists and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::manifest::{dedup_modules, DedupPolicy};
    use proptest::prelude::*;

    fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec("[a-z./#ated ]{0,12}", 0..20)
    }

    proptest! {
        /// Property: output is always sorted, under either policy.
        #[test]
        fn dedup_output_is_sorted(lines in lines_strategy(), prefix_collapse: bool) {
            let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
            let result = dedup_modules(refs, DedupPolicy { prefix_collapse });
            let mut sorted = result.clone();
            sorted.sort();
            prop_assert_eq!(result, sorted);
        }

        /// Property: every output entry is a trimmed input line.
        #[test]
        fn dedup_output_drawn_from_input(lines in lines_strategy(), prefix_collapse: bool) {
            let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
            let result = dedup_modules(refs, DedupPolicy { prefix_collapse });
            for module in &result {
                prop_assert!(
                    lines.iter().any(|line| line.trim() == module),
                    "output entry '{}' not found in input",
                    module
                );
            }
        }

        /// Property: no output entry is a prefix of a later one when
        /// prefix-collapse is enabled.
        #[test]
        fn dedup_collapse_leaves_no_prefix_pairs(lines in lines_strategy()) {
            let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
            let result = dedup_modules(refs, DedupPolicy { prefix_collapse: true });
            for pair in result.windows(2) {
                prop_assert!(
                    !pair[1].starts_with(&pair[0]),
                    "'{}' should have collapsed into '{}'",
                    pair[1],
                    pair[0]
                );
            }
        }

        /// Property: de-duplication is idempotent.
        #[test]
        fn dedup_is_idempotent(lines in lines_strategy(), prefix_collapse: bool) {
            let policy = DedupPolicy { prefix_collapse };
            let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
            let once = dedup_modules(refs, policy);
            let twice = dedup_modules(once.iter().map(String::as_str), policy);
            prop_assert_eq!(once, twice);
        }

        /// Property: output never contains blanks, comments, or exact
        /// duplicates.
        #[test]
        fn dedup_output_is_clean(lines in lines_strategy(), prefix_collapse: bool) {
            let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
            let result = dedup_modules(refs, DedupPolicy { prefix_collapse });
            for module in &result {
                prop_assert!(!module.is_empty());
                prop_assert!(!module.starts_with('#'));
                prop_assert_eq!(module.trim(), module);
            }
            let mut deduped = result.clone();
            deduped.dedup();
            prop_assert_eq!(result, deduped);
        }
    }
}
