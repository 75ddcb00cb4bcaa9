use find_neardup::{Config, SimHashSearcher};

fn main() {
    let documents = vec![
        "Welcome to Jimbocho, the town of books and curry!",
        "Welcome to Jimbocho, the city of books and curry!",
        "We welcome you to Jimbocho, the town of books and curry.",
        "Welcome to the town of books and curry, Jimbocho!",
    ];

    // Creates a searcher for 24-bit simhash signatures of word sets,
    let searcher = SimHashSearcher::new(Config::default())
        .unwrap()
        // and indexes the documents with their positions as identifiers.
        .build_in_parallel(documents.iter().enumerate())
        .unwrap();

    // The first and last documents have the same word set.
    let found = searcher.find(documents[0]);
    assert!(found.contains(&0));
    assert!(found.contains(&3));

    // Candidates may be duplicated, so that they can be re-ranked by the count.
    for (i, doc) in documents.iter().enumerate() {
        println!("{i}: {:?}", searcher.find(doc));
    }
}
