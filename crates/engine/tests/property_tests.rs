use bookbot_engine::config::{Config, ConfigBuilder};
use bookbot_engine::options::{CharClass, SortMode};
use bookbot_engine::report::build_entries;
use bookbot_engine::stats::{character_frequency, word_count};
use bookbot_engine::trim::trim_gutenberg;
use proptest::prelude::*;

fn config() -> ConfigBuilder {
    let mut builder = ConfigBuilder::default();
    builder.book_path("book.txt");
    builder
}

fn entries_for(text: &str, config: &Config) -> Vec<bookbot_engine::stats::FrequencyEntry> {
    build_entries(character_frequency(text), config)
}

proptest! {
    #[test]
    fn frequency_counts_sum_to_lowercased_length(text in "\\PC{0,500}") {
        let frequencies = character_frequency(&text);
        let total: usize = frequencies.values().sum();
        prop_assert_eq!(total, text.to_lowercase().chars().count());
    }

    #[test]
    fn word_count_equals_nonempty_token_count(text in "[a-zA-Z'!,. \\t\\n]{0,500}") {
        let tokens = text
            .split([' ', '\t', '\n'])
            .filter(|t| !t.is_empty())
            .count();
        prop_assert_eq!(word_count(&text), tokens);
    }

    #[test]
    fn default_count_order_is_nonincreasing(text in "\\PC{0,300}") {
        let entries = entries_for(&text, &config().build().unwrap());
        for pair in entries.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn reversed_count_order_is_nondecreasing(text in "\\PC{0,300}") {
        let entries = entries_for(&text, &config().reverse(true).build().unwrap());
        for pair in entries.windows(2) {
            prop_assert!(pair[0].count <= pair[1].count);
        }
    }

    #[test]
    fn reverse_of_unique_counts_is_the_exact_reverse(text in "[a-f ]{0,200}") {
        let forward = entries_for(&text, &config().build().unwrap());
        let backward = entries_for(&text, &config().reverse(true).build().unwrap());

        // Only meaningful when no two characters tie on count.
        let mut counts: Vec<usize> = forward.iter().map(|e| e.count).collect();
        counts.sort_unstable();
        counts.dedup();
        if counts.len() == forward.len() {
            let mut reversed = forward.clone();
            reversed.reverse();
            prop_assert_eq!(backward, reversed);
        }
    }

    #[test]
    fn codepoint_order_is_strictly_increasing(text in "\\PC{0,300}") {
        let entries = entries_for(&text, &config().sort(SortMode::ByCodepoint).build().unwrap());
        for pair in entries.windows(2) {
            prop_assert!(pair[0].character < pair[1].character);
        }
    }

    #[test]
    fn trim_without_markers_only_strips_outer_whitespace(text in "[a-zA-Z0-9,.!? \\n]{0,300}") {
        prop_assert_eq!(trim_gutenberg(&text), text.trim());
    }

    #[test]
    fn numeric_and_alpha_classes_are_disjoint(text in "\\PC{0,300}") {
        let numeric = entries_for(&text, &config().char_class(CharClass::Numeric).build().unwrap());
        prop_assert!(numeric.iter().all(|e| !e.character.is_alphabetic()));

        let alpha = entries_for(&text, &config().char_class(CharClass::Alpha).build().unwrap());
        prop_assert!(alpha.iter().all(|e| !e.character.is_numeric()));
    }

    #[test]
    fn top_never_yields_more_than_n_entries(text in "\\PC{0,300}", n in 0usize..20) {
        let entries = entries_for(&text, &config().top(n).build().unwrap());
        prop_assert!(entries.len() <= n);
    }
}
