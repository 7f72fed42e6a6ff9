//! Build a unigram log-probability model from a corpus
//!
//! The corpus is a text file with one candidate token per line. Lines that
//! are entirely alphabetic count as tokens and everything else is dropped.
//! Each distinct token is printed to stdout as `token<TAB>ln(count/total)`,
//! in the order the tokens first appeared, ready for rsp-suggest to read.

// Argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// lastly, this library
extern crate respell;

use respell::errors::*;
use respell::model;

pub fn main() {
    // Main can't return a Result, and the ? operator needs the enclosing function to return Result
    inner_main().expect("Could not recover. Exiting.");
}
pub fn inner_main() -> Result<()> {
    env_logger::init().unwrap();
    let args = app_from_crate!()
        .arg_from_usage("<corpus> 'text file with one candidate token per line'")
        .get_matches();

    let pairs = model::build(args.value_of("corpus").unwrap())?;
    info!("writing {} distinct tokens", pairs.len());
    for &(ref token, log_probability) in &pairs {
        println!("{}\t{}", token, log_probability);
    }
    Ok(())
}
