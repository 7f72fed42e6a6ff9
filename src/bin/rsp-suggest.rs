//! Suggest corrections for misspelled words
//!
//! Loads a corpus model, then reads words from stdin one per line and prints
//! the suggestions for each, best first, followed by a blank line. An empty
//! input line (or the end of input) quits. With -b only the single best
//! suggestion is printed, with an empty line standing in when nothing is
//! within reach.

// Argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// lastly, this library
extern crate respell;

use std::io::{self, BufRead};

use clap::Arg;
use respell::errors::*;
use respell::suggest::Suggester;

pub fn main() {
    // Main can't return a Result, and the ? operator needs the enclosing function to return Result
    inner_main().expect("Could not recover. Exiting.");
}
pub fn inner_main() -> Result<()> {
    env_logger::init().unwrap();
    let args = app_from_crate!()
        .arg_from_usage("<corpus> 'corpus model written by rsp-corpus, or a word list with -s'")
        .arg_from_usage("-a, --all 'print every suggestion within reach, best first (default)'")
        .arg_from_usage("-b, --best 'print only the single best suggestion'")
        .arg_from_usage("-p, --probability 'corpus lines are word<TAB>log-probability (default)'")
        .arg_from_usage("-s, --simple 'corpus lines are bare words, all equally likely'")
        .arg(Arg::from_usage("-e, --edits [count] 'how many edits away a suggestion may be'")
            .default_value("1"))
        .get_matches();
    let max_edits = value_t!(args, "edits", u32).unwrap_or_else(|e| e.exit());
    let corpus = args.value_of("corpus").unwrap();

    let suggester = if args.is_present("simple") {
        Suggester::from_word_list(corpus, max_edits)?
    } else {
        Suggester::from_probability_corpus(corpus, max_edits)?
    };
    info!("{}: {} words loaded, suggesting within {} edits",
        corpus, suggester.word_count(), max_edits);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let word = line?;
        if word.is_empty() {
            break;
        }
        if args.is_present("best") {
            match suggester.best(&word) {
                Some(suggestion) => println!("{}", suggestion),
                None => println!(),
            }
        } else {
            for suggestion in suggester.all(&word) {
                println!("{}", suggestion);
            }
        }
        // a blank line closes each answer
        println!();
    }
    Ok(())
}
