use find_neardup::{Config, WinnowingSearcher};

fn main() {
    let documents = vec![
        "Welcome to Jimbocho, the town of books and curry!",
        "Welcome to Jimbocho, the city of books and curry!",
        "We welcome you to Jimbocho, the town of books and curry.",
        "Welcome to the town of books and curry, Jimbocho!",
    ];

    // Creates a searcher for word trigrams winnowed in windows of 4 trigrams,
    let searcher = WinnowingSearcher::new(Config::default())
        .unwrap()
        // and indexes the documents with their positions as identifiers.
        .build_in_parallel(documents.iter().enumerate())
        .unwrap();

    // Any document shares at least one fingerprint with itself.
    let found = searcher.find(documents[2]);
    assert!(found.contains(&2));
    // "jimbocho the town books and curry" is a shared run of 6 words.
    assert!(found.contains(&0));

    for (i, doc) in documents.iter().enumerate() {
        let mut ranked = searcher.find_ranked(doc);
        ranked.sort_by_key(|&(j, cnt)| (std::cmp::Reverse(cnt), j));
        println!("{i}: {ranked:?}");
    }
}
