use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::sync::Arc;

use find_neardup::feature::{Normalizer, Wordlist};
use find_neardup::summary::DEFAULT_MAX_WORDS;
use find_neardup::RandomSummary;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    name = "find-neardup-summarize",
    about = "A program to summarize documents into short full-text queries by random words."
)]
struct Args {
    /// File path to a document file, one document per line.
    #[clap(short = 'i', long)]
    document_path: PathBuf,

    /// Maximum number of words in a summary.
    #[clap(short = 'n', long, default_value_t = DEFAULT_MAX_WORDS)]
    max_words: usize,

    /// Seed value for random values.
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// Minimum number of characters in an admitted word.
    #[clap(short = 'm', long, default_value = "3")]
    min_token_length: usize,

    /// File path to a list of admitted words, one word per line.
    /// If None, all words are admitted.
    #[clap(short = 'l', long)]
    wordlist_path: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let wordlist = match &args.wordlist_path {
        Some(path) => Some(Arc::new(Wordlist::from_reader(File::open(path)?)?)),
        None => None,
    };
    let normalizer = Normalizer::new(args.min_token_length).wordlist(wordlist);
    let mut summary = RandomSummary::new(args.max_words, args.seed);

    let reader = BufReader::new(File::open(&args.document_path)?);
    for line in reader.lines() {
        let words = normalizer.word_set(&line?);
        println!("{}", summary.summarize(&words));
    }

    Ok(())
}
