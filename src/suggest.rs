//! Spelling suggestions backed by a corpus model
//!
//! A suggester loads a corpus into a trie keyed by word, with each word's
//! log probability as its value, then answers lookups with the stored words
//! within a fixed number of edits. Suggestions rank by fewest edits first,
//! then by how common the word was in the corpus.
use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use errors::*;
use parser::{CorpusParser, ProbabilityParser, WordListParser};
use search::{self, Found};
use trie::Trie;

pub struct Suggester {
    words: Trie<f64>,
    max_edits: u32,
}

impl Suggester {
    /// Load a `word<TAB>log-probability` corpus, as written by `rsp-corpus`
    pub fn from_probability_corpus<P: AsRef<Path>>(path: P, max_edits: u32) -> Result<Suggester> {
        let path = path.as_ref();
        let parser = ProbabilityParser::new(&path.display().to_string());
        Suggester::read_corpus(path, parser, max_edits)
    }

    /// Load a plain word list, weighting every word the same
    pub fn from_word_list<P: AsRef<Path>>(path: P, max_edits: u32) -> Result<Suggester> {
        let path = path.as_ref();
        let parser = WordListParser::new(&path.display().to_string());
        Suggester::read_corpus(path, parser, max_edits)
    }

    fn read_corpus<C: CorpusParser>(path: &Path, mut parser: C, max_edits: u32) -> Result<Suggester> {
        let reader = BufReader::new(File::open(path)?);
        let mut words = Trie::new();
        for line in reader.lines() {
            if let Some((word, weight)) = parser.parse_line(&line?)? {
                words.insert(&word, weight);
            }
        }
        info!(
            "{}: {} words from {} lines",
            path.display(),
            words.word_count(),
            parser.lines_consumed()
        );
        Ok(Suggester { words, max_edits })
    }

    /// Every suggestion within the edit cutoff, best first
    pub fn all(&self, word: &str) -> Vec<String> {
        let mut found = search::find_within(&self.words, word, self.max_edits);
        found.sort_by(rank);
        found.into_iter().map(|found| found.word).collect()
    }

    /// The single best suggestion, if anything is within the edit cutoff
    pub fn best(&self, word: &str) -> Option<String> {
        search::find_within(&self.words, word, self.max_edits)
            .into_iter()
            .min_by(rank)
            .map(|found| found.word)
    }

    /// How many distinct words the corpus provided
    pub fn word_count(&self) -> usize {
        self.words.word_count()
    }
}

/// Fewest edits win; among equals, the likelier corpus word wins
fn rank(a: &Found<f64>, b: &Found<f64>) -> Ordering {
    a.edits
        .cmp(&b.edits)
        .then(b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal))
}
