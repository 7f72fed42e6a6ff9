//! Unigram corpus models and spelling suggestions
//!
//! This code backs the included binaries: `rsp-corpus` turns a token-per-line
//! text file into a `word<TAB>log-probability` model, and `rsp-suggest` reads
//! such a model back to offer corrections for misspelled words. The binaries
//! are thin; the interesting parts live here so they can be reused and tested.

#[macro_use] extern crate log;
#[macro_use] extern crate lazy_static;
extern crate regex;
extern crate farmhash;
extern crate hash_hasher;

#[cfg(test)] #[macro_use] extern crate approx;
#[cfg(test)] extern crate tempfile;

pub mod errors;
pub mod farm;
pub mod model;
pub mod parser;
pub mod trie;
pub mod search;
pub mod suggest;
