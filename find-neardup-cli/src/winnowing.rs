use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use find_neardup::feature::{Normalizer, Wordlist};
use find_neardup::{Config, WinnowingSearcher};

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    name = "find-neardup-winnowing",
    about = "A program to find documents sharing word sequences with winnowing fingerprints."
)]
struct Args {
    /// File path to a document file to be indexed, one document per line.
    /// Empty lines must not be included.
    #[clap(short = 'i', long)]
    document_path: PathBuf,

    /// File path to a query file, one query per line.
    /// If None, every indexed document is used as a query and self-matches are omitted.
    #[clap(short = 'q', long)]
    query_path: Option<PathBuf>,

    /// Number of words in a k-gram (must be more than 0).
    #[clap(short = 'k', long, default_value = "3")]
    k: usize,

    /// Window size of winnowing (must be more than 0).
    #[clap(short = 'w', long, default_value = "4")]
    w: usize,

    /// Minimum number of characters in an admitted word.
    #[clap(short = 'm', long, default_value = "3")]
    min_token_length: usize,

    /// File path to a list of admitted words, one word per line.
    /// If None, all words are admitted.
    #[clap(short = 'l', long)]
    wordlist_path: Option<PathBuf>,

    /// Prints the number of shared fingerprints as the third column.
    #[clap(short = 'r', long)]
    ranked: bool,

    /// Disables parallel construction.
    #[clap(short = 'p', long)]
    disable_parallel: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let config = Config {
        k: args.k,
        w: args.w,
        min_token_length: args.min_token_length,
        ..Config::default()
    };
    let wordlist = match &args.wordlist_path {
        Some(path) => Some(Arc::new(Wordlist::from_reader(File::open(path)?)?)),
        None => None,
    };
    let normalizer = Normalizer::new(config.min_token_length).wordlist(wordlist);
    let mut searcher = WinnowingSearcher::with_normalizer(config, normalizer)?.shows_progress(true);

    let documents = load_texts(File::open(&args.document_path)?)?;
    {
        eprintln!("Converting documents into fingerprints...");
        let start = Instant::now();
        let pairs = documents.iter().enumerate();
        searcher = if args.disable_parallel {
            searcher.build(pairs)?
        } else {
            searcher.build_in_parallel(pairs)?
        };
        eprintln!(
            "Indexed {} documents in {} sec",
            searcher.len(),
            start.elapsed().as_secs_f64()
        );
    }

    let queries: Vec<String> = match &args.query_path {
        Some(path) => load_texts(File::open(path)?)?,
        None => documents,
    };
    let omits_self = args.query_path.is_none();

    eprintln!("Finding documents for {} queries...", queries.len());
    let start = Instant::now();
    if args.ranked {
        println!("i,j,count");
    } else {
        println!("i,j");
    }
    for (i, query) in queries.iter().enumerate() {
        let mut results = searcher.find_ranked(query);
        results.retain(|&(j, _)| !omits_self || i != j);
        results.sort_unstable_by_key(|&(j, _)| j);
        for (j, cnt) in results {
            if args.ranked {
                println!("{i},{j},{cnt}");
            } else {
                println!("{i},{j}");
            }
        }
    }
    eprintln!("Done in {} sec", start.elapsed().as_secs_f64());

    Ok(())
}

fn load_texts<R>(rdr: R) -> std::io::Result<Vec<String>>
where
    R: Read,
{
    BufReader::new(rdr).lines().collect()
}
