use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single character and how often it recurs in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub character: char,
    pub count: usize,
}

/// Final result of a report run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub book_path: PathBuf,
    pub words: usize,
    pub entries: Vec<FrequencyEntry>,
}

/// Count whitespace-delimited words. Runs of whitespace never produce
/// empty tokens and punctuation is not normalized.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Build the frequency mapping over the lowercased text.
///
/// Every character is counted, whitespace and punctuation included; the
/// sum of all counts equals the char length of the lowercased text.
#[must_use]
pub fn character_frequency(text: &str) -> HashMap<char, usize> {
    let mut frequencies = HashMap::new();
    for ch in text.to_lowercase().chars() {
        *frequencies.entry(ch).or_insert(0) += 1;
    }
    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_splits_on_whitespace_runs() {
        assert_eq!(word_count("one two  three\tfour\nfive"), 5);
        assert_eq!(word_count("  leading and trailing  "), 3);
    }

    #[test]
    fn word_count_of_blank_text_is_zero() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count(" \t\n"), 0);
    }

    #[test]
    fn word_count_keeps_punctuation_attached() {
        assert_eq!(word_count("don't stop -- ever!"), 4);
    }

    #[test]
    fn frequency_counts_every_character_lowercased() {
        let frequencies = character_frequency("Aa1! aa");

        assert_eq!(frequencies.get(&'a'), Some(&4));
        assert_eq!(frequencies.get(&'1'), Some(&1));
        assert_eq!(frequencies.get(&'!'), Some(&1));
        assert_eq!(frequencies.get(&' '), Some(&1));
        assert_eq!(frequencies.get(&'A'), None);
    }

    #[test]
    fn frequency_counts_sum_to_lowercased_length() {
        let text = "The Quick Brown Fox!\n1234";
        let frequencies = character_frequency(text);
        let total: usize = frequencies.values().sum();
        assert_eq!(total, text.to_lowercase().chars().count());
    }

    #[test]
    fn frequency_handles_unicode_case_folding() {
        // 'Σ' lowercases to 'σ'; both spellings land in one bucket.
        let frequencies = character_frequency("Σσ");
        assert_eq!(frequencies.get(&'σ'), Some(&2));
    }

    #[test]
    fn report_serializes_and_round_trips() {
        let report = Report {
            book_path: PathBuf::from("books/frankenstein.txt"),
            words: 2,
            entries: vec![FrequencyEntry {
                character: 'a',
                count: 4,
            }],
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
