use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use docsig::Signature;
use find_neardup::feature::{Normalizer, Wordlist};
use find_neardup::signer::Signer;
use find_neardup::{Config, SimHashSearcher};

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    name = "find-neardup-simhash",
    about = "A program to find documents with similar word sets in the Hamming space of simhash."
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

    /// Number of bits in a signature, in the range of [1,32].
    /// Documents within Hamming distance 2 are reported.
    #[clap(short = 'b', long, default_value = "24")]
    bit_width: usize,

    /// Minimum number of characters in an admitted word.
    #[clap(short = 'm', long, default_value = "3")]
    min_token_length: usize,

    /// File path to a list of admitted words, one word per line.
    /// If None, all words are admitted.
    #[clap(short = 'l', long)]
    wordlist_path: Option<PathBuf>,

    /// Disables parallel construction.
    #[clap(short = 'p', long)]
    disable_parallel: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let config = Config {
        bit_width: args.bit_width,
        min_token_length: args.min_token_length,
        ..Config::default()
    };
    let wordlist = match &args.wordlist_path {
        Some(path) => Some(Arc::new(Wordlist::from_reader(File::open(path)?)?)),
        None => None,
    };
    let normalizer = Normalizer::new(config.min_token_length).wordlist(wordlist);
    let mut searcher = SimHashSearcher::with_normalizer(config, normalizer)?.shows_progress(true);

    let documents = load_texts(File::open(&args.document_path)?)?;
    let signatures = {
        eprintln!("Converting documents into signatures...");
        let start = Instant::now();
        let signatures = if args.disable_parallel {
            searcher.sign_all(&documents)?
        } else {
            searcher.sign_all_in_parallel(&documents)?
        };
        searcher = searcher.build_from_signatures(signatures.iter().cloned().enumerate())?;
        eprintln!(
            "Indexed {} documents in {} sec",
            searcher.len(),
            start.elapsed().as_secs_f64()
        );
        signatures
    };
    let signer = searcher.signer();

    let queries: Vec<String> = match &args.query_path {
        Some(path) => load_texts(File::open(path)?)?,
        None => documents,
    };
    let omits_self = args.query_path.is_none();

    eprintln!("Finding documents for {} queries...", queries.len());
    let start = Instant::now();
    println!("i,j,dist");
    for (i, query) in queries.iter().enumerate() {
        let signature = if omits_self {
            signatures[i]
        } else {
            signer.sign(query)
        };
        // Candidates are not deduplicated by the index.
        let mut results = searcher.find_signature(signature);
        results.retain(|&j| !omits_self || i != j);
        results.sort_unstable();
        results.dedup();
        for j in results {
            let dist = signature.hamdist(signatures[j]);
            println!("{i},{j},{dist}");
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
