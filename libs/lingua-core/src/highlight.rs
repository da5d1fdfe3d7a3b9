//! Alphabet-aware word segmentation for letter highlighting.
//!
//! A word is split into alphabet units so that multi-character letters
//! ("ng", "аь") stay whole, then the units equal to a target letter are
//! flagged.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::error::HighlightError;
use crate::types::AlphabetItem;

/// One segment of a highlighted word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub text: &'a str,
    pub is_target: bool,
}

/// Splits words into the letters of one alphabet.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    /// Build the pattern for an alphabet. Longer letters are tried first so
    /// "ng" wins over "n" followed by "g".
    pub fn new(alphabet: &[AlphabetItem]) -> Result<Self, HighlightError> {
        let mut letters: Vec<&str> = alphabet
            .iter()
            .map(|item| item.letter.as_str())
            .filter(|letter| !letter.is_empty())
            .collect();

        if letters.is_empty() {
            return Ok(Self { pattern: None });
        }

        // stable: equal lengths keep alphabet order
        letters.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        let alternation = letters
            .iter()
            .map(|letter| regex::escape(letter))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Split a word into alphabet units, keeping unmatched runs between them.
    /// Empty pieces are dropped.
    pub fn segment<'a>(&self, word: &'a str) -> Vec<&'a str> {
        let Some(pattern) = &self.pattern else {
            return if word.is_empty() { Vec::new() } else { vec![word] };
        };

        let mut pieces = Vec::new();
        let mut last = 0;
        for m in pattern.find_iter(word) {
            if m.start() > last {
                pieces.push(&word[last..m.start()]);
            }
            if !m.as_str().is_empty() {
                pieces.push(m.as_str());
            }
            last = m.end();
        }
        if last < word.len() {
            pieces.push(&word[last..]);
        }
        pieces
    }

    /// Segment a word and flag the units equal to `target`, ignoring case.
    pub fn highlight<'a>(&self, word: &'a str, target: &str) -> Vec<Token<'a>> {
        let target = target.to_lowercase();
        self.segment(word)
            .into_iter()
            .map(|text| Token {
                text,
                is_target: !target.is_empty() && text.to_lowercase() == target,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn alphabet(letters: &[&str]) -> Vec<AlphabetItem> {
        letters
            .iter()
            .enumerate()
            .map(|(i, l)| AlphabetItem::new(*l, "", i as i32 + 1))
            .collect()
    }

    #[test]
    fn test_longest_letter_first() {
        let h = Highlighter::new(&alphabet(&["a", "ng"])).unwrap();
        assert_eq!(h.segment("nga"), vec!["ng", "a"]);
    }

    #[test]
    fn test_single_letters_when_no_digraph() {
        let h = Highlighter::new(&alphabet(&["a", "n", "g", "ng"])).unwrap();
        assert_eq!(h.segment("gan"), vec!["g", "a", "n"]);
        assert_eq!(h.segment("nang"), vec!["n", "a", "ng"]);
    }

    #[test]
    fn test_unmatched_runs_are_kept() {
        let h = Highlighter::new(&alphabet(&["a"])).unwrap();
        assert_eq!(h.segment("banana"), vec!["b", "a", "n", "a", "n", "a"]);
        assert_eq!(h.segment("xyz"), vec!["xyz"]);
    }

    #[test]
    fn test_empty_alphabet_returns_whole_word() {
        let h = Highlighter::new(&[]).unwrap();
        assert_eq!(h.segment("nga"), vec!["nga"]);
        assert!(h.segment("").is_empty());
    }

    #[test]
    fn test_empty_letters_are_ignored() {
        let h = Highlighter::new(&alphabet(&["", "a"])).unwrap();
        assert_eq!(h.segment("ba"), vec!["b", "a"]);
    }

    #[test]
    fn test_regex_metacharacters_are_escaped() {
        let h = Highlighter::new(&alphabet(&["a.", "b"])).unwrap();
        assert_eq!(h.segment("a.ab"), vec!["a.", "a", "b"]);
    }

    #[test]
    fn test_multibyte_letters() {
        let h = Highlighter::new(&alphabet(&["а", "аь", "д"])).unwrap();
        assert_eq!(h.segment("даьд"), vec!["д", "аь", "д"]);
    }

    #[test]
    fn test_highlight_case_insensitive() {
        let h = Highlighter::new(&alphabet(&["a", "ng"])).unwrap();
        let tokens = h.highlight("NGang", "ng");
        assert_eq!(
            tokens,
            vec![
                Token { text: "NG", is_target: true },
                Token { text: "a", is_target: false },
                Token { text: "ng", is_target: true },
            ]
        );
    }

    #[test]
    fn test_highlight_empty_target() {
        let h = Highlighter::new(&alphabet(&["a"])).unwrap();
        assert!(h.highlight("a", "").iter().all(|t| !t.is_target));
    }
}
