//! Unigram log-probability models
//!
//! A corpus here is a text file with one candidate token per line. Lines that
//! are entirely alphabetic are counted, everything else (numbers, punctuation,
//! embedded spaces, empty lines) is dropped, and each distinct token gets the
//! natural log of its relative frequency. Splitting is on `\n` alone, so a
//! Windows-style line ends in `\r` and is dropped with the other non-words.
use std::fs;
use std::path::Path;

use errors::*;
use farm::{self, TokenMap};

/// Occurrence counts for distinct tokens, remembering first-appearance order
pub struct FrequencyTable {
    counts: TokenMap<u64>,
    order: Vec<String>,
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> FrequencyTable {
        FrequencyTable {
            counts: farm::new_token_map(),
            order: vec![],
            total: 0,
        }
    }

    /// Count one occurrence of a token
    pub fn record(&mut self, token: &str) {
        // Look before inserting so repeats don't allocate a new key
        if let Some(count) = self.counts.get_mut(token) {
            *count += 1;
        } else {
            self.counts.insert(token.to_owned(), 1);
            self.order.push(token.to_owned());
        }
        self.total += 1;
    }

    /// How many times one token was recorded
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).cloned().unwrap_or(0)
    }

    /// How many tokens were recorded, repeats included
    pub fn total(&self) -> u64 {
        self.total
    }

    /// How many distinct tokens were recorded
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// The natural log of each token's relative frequency, in the order the
    /// tokens first appeared. Empty when nothing was recorded, since there is
    /// no total to divide by.
    pub fn log_probabilities(&self) -> Vec<(String, f64)> {
        let total = self.total as f64;
        self.order
            .iter()
            .map(|token| {
                let count = self.counts[token.as_str()] as f64;
                (token.clone(), (count / total).ln())
            })
            .collect()
    }
}

/// A line qualifies as a token when it is non-empty and entirely alphabetic.
/// `all` is true for the empty string, hence the explicit check.
fn is_token(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_alphabetic())
}

/// Read a token-per-line corpus and model it as `(token, log probability)`
/// pairs in first-appearance order.
///
/// A corpus where no line qualifies is an error rather than an empty model,
/// because the relative frequencies would be divisions by zero.
pub fn build<P: AsRef<Path>>(path: P) -> Result<Vec<(String, f64)>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let mut table = FrequencyTable::new();
    for line in content.split('\n') {
        if is_token(line) {
            table.record(line);
        }
    }
    if table.total() == 0 {
        return Err(Error::NoTokens(path.display().to_string()));
    }
    info!(
        "{}: {} tokens, {} distinct",
        path.display(),
        table.total(),
        table.distinct()
    );
    Ok(table.log_probabilities())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn corpus(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn single_token_is_certain() {
        let file = corpus("a\na\na\n");
        let pairs = build(file.path()).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "a");
        assert_abs_diff_eq!(pairs[0].1, 0.0);
    }

    #[test]
    fn log_probabilities_match_relative_frequency() {
        let file = corpus("a\nb\na\n");
        let pairs = build(file.path()).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, "a");
        assert_abs_diff_eq!(pairs[0].1, (2.0f64 / 3.0).ln());
        assert_eq!(pairs[1].0, "b");
        assert_abs_diff_eq!(pairs[1].1, (1.0f64 / 3.0).ln());
    }

    #[test]
    fn probabilities_sum_to_one() {
        let mut table = FrequencyTable::new();
        for token in &["the", "quick", "the", "brown", "the", "fox"] {
            table.record(token);
        }
        assert_eq!(table.total(), 6);
        assert_eq!(table.count("the"), 3);
        let sum: f64 = table.log_probabilities().iter().map(|&(_, lp)| lp.exp()).sum();
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn log_probabilities_never_exceed_zero() {
        let file = corpus("ink\nquill\nink\nparchment\nwax\nink\nquill\n");
        for (token, log_probability) in build(file.path()).unwrap() {
            assert!(log_probability <= 0.0, "{}: {}", token, log_probability);
        }
    }

    #[test]
    fn tokens_keep_first_appearance_order() {
        let file = corpus("zebra\napple\nzebra\nmango\napple\nzebra\n");
        let tokens: Vec<String> = build(file.path())
            .unwrap()
            .into_iter()
            .map(|(token, _)| token)
            .collect();
        assert_eq!(tokens, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn builds_are_deterministic() {
        let file = corpus("delta\necho\ndelta\nfoxtrot\n");
        let first = build(file.path()).unwrap();
        let second = build(file.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn non_alphabetic_lines_are_dropped() {
        let file = corpus("a1\na\n12\ntwo words\nhalf-baked\n");
        let pairs = build(file.path()).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "a");
        assert_abs_diff_eq!(pairs[0].1, 0.0);
    }

    #[test]
    fn accented_letters_are_alphabetic() {
        let file = corpus("héllo\nnaïve\nhéllo\n");
        let pairs = build(file.path()).unwrap();
        assert_eq!(pairs[0].0, "héllo");
        assert_abs_diff_eq!(pairs[0].1, (2.0f64 / 3.0).ln());
        assert_eq!(pairs[1].0, "naïve");
    }

    #[test]
    fn carriage_returns_disqualify_lines() {
        // Splitting is on \n alone, so a CRLF line keeps its \r and is dropped
        let file = corpus("word\r\nother\n");
        let pairs = build(file.path()).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "other");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let file = corpus("a\n\nb\n");
        let pairs = build(file.path()).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_abs_diff_eq!(pairs[0].1, (1.0f64 / 2.0).ln());
    }

    #[test]
    fn final_line_counts_without_trailing_newline() {
        let file = corpus("a\nb");
        let pairs = build(file.path()).unwrap();
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn corpus_without_tokens_is_an_error() {
        let file = corpus("123\n456\n");
        assert!(matches!(build(file.path()), Err(Error::NoTokens(_))));

        let empty = corpus("");
        assert!(matches!(build(empty.path()), Err(Error::NoTokens(_))));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = build("/no/such/corpus.txt").unwrap_err();
        assert!(matches!(err, Error::IOError(_)));
    }
}
