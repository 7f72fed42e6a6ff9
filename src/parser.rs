//! Line parsers for the two corpus flavors
//!
//! A probability corpus is what `rsp-corpus` writes: one
//! `word<TAB>log-probability` pair per line. A word list is plainer, one
//! alphabetic word per line, and every word gets the same weight. Either way
//! empty lines are skipped and anything else malformed is an error naming the
//! file and 1-based line number.
use regex::Regex;

use errors::*;

lazy_static! {
    /// word, a tab, then a signed integer with an optional decimal part
    static ref ANNOTATED_LINE: Regex =
        Regex::new(r"^(\p{Alphabetic}+)\t(-?[0-9]+(?:\.[0-9]+)?)$").unwrap();
    static ref WORD_LINE: Regex = Regex::new(r"^\p{Alphabetic}+$").unwrap();
}

/// One corpus line at a time, with bookkeeping for error messages
pub trait CorpusParser {
    /// Parse one line, without its newline. `None` means the line carries
    /// nothing (it was empty) but still counts toward line numbering.
    fn parse_line(&mut self, line: &str) -> Result<Option<(String, f64)>>;

    /// How many lines have been consumed so far
    fn lines_consumed(&self) -> usize;
}

/// Where a parser is in its file. The filename is never opened here, it only
/// labels error messages.
struct Position {
    file: String,
    line: usize,
}

impl Position {
    fn new(file: &str) -> Position {
        Position {
            file: file.to_owned(),
            line: 0,
        }
    }

    fn advance(&mut self) {
        self.line += 1;
    }

    fn malformed(&self, message: &str) -> Error {
        Error::CorpusError {
            file: self.file.clone(),
            line: self.line,
            message: message.to_owned(),
        }
    }
}

/// Parser for `word<TAB>log-probability` lines
pub struct ProbabilityParser {
    at: Position,
}

impl ProbabilityParser {
    pub fn new(file: &str) -> ProbabilityParser {
        ProbabilityParser { at: Position::new(file) }
    }
}

impl CorpusParser for ProbabilityParser {
    fn parse_line(&mut self, line: &str) -> Result<Option<(String, f64)>> {
        self.at.advance();
        if line.is_empty() {
            return Ok(None);
        }
        match ANNOTATED_LINE.captures(line) {
            Some(caps) => {
                let weight: f64 = caps[2].parse()?;
                Ok(Some((caps[1].to_owned(), weight)))
            }
            None => Err(self.at.malformed("expected `word<TAB>log-probability`")),
        }
    }

    fn lines_consumed(&self) -> usize {
        self.at.line
    }
}

/// Parser for plain word lists, one word per line, all equally likely
pub struct WordListParser {
    at: Position,
}

impl WordListParser {
    pub fn new(file: &str) -> WordListParser {
        WordListParser { at: Position::new(file) }
    }
}

impl CorpusParser for WordListParser {
    fn parse_line(&mut self, line: &str) -> Result<Option<(String, f64)>> {
        self.at.advance();
        if line.is_empty() {
            return Ok(None);
        }
        if WORD_LINE.is_match(line) {
            Ok(Some((line.to_owned(), 1.0)))
        } else {
            Err(self.at.malformed("expected a single alphabetic word"))
        }
    }

    fn lines_consumed(&self) -> usize {
        self.at.line
    }
}
