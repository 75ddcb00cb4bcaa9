//! Property-based tests of rolling hashing and winnowing.
//!
//! - The rolling hasher yields exactly `max(0, n-k+1)` fingerprints
//! - Every window minimum is selected, and nothing else is
//! - A shared run of `k+w-1` words always gives a shared selected fingerprint
//! - Signatures do not vary between invocations

use docsig::{rolling_hashes, winnow, SimHasher, Winnower};
use proptest::prelude::*;

fn arb_tokens(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,3}", 0..max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn rolling_len(tokens in arb_tokens(40), k in 1usize..8) {
        let n = rolling_hashes(&tokens, k).count();
        prop_assert_eq!(n, (tokens.len() + 1).saturating_sub(k));
    }

    #[test]
    fn rolling_deterministic(tokens in arb_tokens(40), k in 1usize..8) {
        let x: Vec<_> = rolling_hashes(&tokens, k).collect();
        let y: Vec<_> = rolling_hashes(&tokens, k).collect();
        prop_assert_eq!(x, y);
    }

    #[test]
    fn winnowing_coverage(fps in prop::collection::vec(0u32..64, 0..50), w in 1usize..8) {
        let result = winnow(fps.iter().cloned(), w);
        prop_assert_eq!(result.all.len(), fps.iter().collect::<std::collections::HashSet<_>>().len());
        if fps.is_empty() {
            prop_assert!(result.selected.is_empty());
        } else if fps.len() < w {
            let min = *fps.iter().min().unwrap();
            prop_assert_eq!(result.selected.len(), 1);
            prop_assert!(result.selected.contains(&min));
        } else {
            for window in fps.windows(w) {
                let min = window.iter().min().unwrap();
                prop_assert!(result.selected.contains(min));
            }
            for fp in &result.selected {
                prop_assert!(fps.windows(w).any(|window| window.iter().min() == Some(fp)));
            }
        }
    }

    #[test]
    fn winnowing_shared_run(
        prefix in arb_tokens(20),
        shared in prop::collection::vec("[a-z]{3,6}", 6..20),
        suffix in arb_tokens(20),
        other in arb_tokens(20),
    ) {
        let (k, w) = (3, 4);
        prop_assume!(shared.len() >= k + w - 1);
        let winnower = Winnower::new(k, w);

        let mut x = prefix.clone();
        x.extend(shared.iter().cloned());
        x.extend(suffix);
        let mut y = other;
        y.extend(shared.iter().cloned());
        y.extend(prefix);

        let fx = winnower.fingerprints(&x);
        let fy = winnower.fingerprints(&y);
        prop_assert!(fx.selected.intersection(&fy.selected).next().is_some());
    }

    #[test]
    fn simhash_deterministic(words in prop::collection::hash_set("[a-z]{3,8}", 0..30)) {
        let x: u32 = SimHasher::default().sign(&words);
        let y: u32 = SimHasher::default().sign(&words);
        prop_assert_eq!(x, y);
        prop_assert!(x < 1 << 24);
    }
}
