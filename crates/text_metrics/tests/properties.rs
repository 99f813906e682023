//! Property-based tests for the word counter.

use proptest::prelude::*;
use text_metrics::{strip_markup, word_count, WhitespaceWordCounter, WordCounter};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Counting is pure.
    #[test]
    fn count_is_idempotent(text in ".{0,200}") {
        prop_assert_eq!(word_count(Some(&text)), word_count(Some(&text)));
    }

    /// Widening existing whitespace never changes the count.
    #[test]
    fn extra_whitespace_is_ignored(words in prop::collection::vec("[a-z]{1,8}", 0..20)) {
        let tight = words.join(" ");
        let loose = format!("  {}\n\t", words.join(" \t\n  "));
        prop_assert_eq!(word_count(Some(&tight)), words.len());
        prop_assert_eq!(word_count(Some(&loose)), words.len());
    }

    /// Input made only of tags and whitespace has no words.
    #[test]
    fn tags_only_count_zero(tags in prop::collection::vec("<[^>]{0,10}>[ \n\t]{0,3}", 0..10)) {
        prop_assert_eq!(word_count(Some(&tags.concat())), 0);
    }

    /// Wrapping words in tags does not change their count.
    #[test]
    fn wrapping_in_tags_preserves_count(words in prop::collection::vec("[a-z0-9]{1,8}", 0..20)) {
        let html: String = words.iter().map(|w| format!("<span>{w}</span>")).collect();
        prop_assert_eq!(word_count(Some(&html)), words.len());
    }

    /// Each stripped tag can split at most one token into two.
    #[test]
    fn stripping_adds_at_most_one_token_per_tag(text in "[a-z <>/]{0,120}") {
        let tag_count = text.matches('>').count();
        prop_assert!(word_count(Some(&text)) <= WhitespaceWordCounter.count(&text) + tag_count);
    }

    /// No complete tag survives stripping.
    #[test]
    fn stripped_text_has_no_tags(text in "[a-z <>/]{0,120}") {
        let stripped = strip_markup(&text);
        if let Some(open) = stripped.find('<') {
            prop_assert!(!stripped[open..].contains('>'));
        }
    }
}
