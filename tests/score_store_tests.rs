use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use brick_breaker::ScoreStore;
use proptest::prelude::*;

static CASE: AtomicUsize = AtomicUsize::new(0);

fn fresh_path() -> PathBuf {
    let n = CASE.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!(
        "brick-breaker-prop-{}-{}.txt",
        std::process::id(),
        n
    ));
    let _ = fs::remove_file(&path);
    path
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn file_stays_top_five_descending(scores in prop::collection::vec(0u64..10_000, 0..20)) {
        let store = ScoreStore::new(fresh_path());

        for &score in &scores {
            store.save(score).unwrap();

            let text = fs::read_to_string(store.path()).unwrap();
            let lines: Vec<u64> = text.lines().map(|l| l.parse().unwrap()).collect();
            prop_assert!(lines.len() <= 5);
            prop_assert!(lines.windows(2).all(|w| w[0] >= w[1]));
        }

        let mut expected = scores.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        expected.truncate(5);
        prop_assert_eq!(store.load().unwrap(), expected);

        let _ = fs::remove_file(store.path());
    }
}

#[test]
fn save_sequence_scenario() {
    let store = ScoreStore::new(fresh_path());

    store.save(50).unwrap();
    assert_eq!(fs::read_to_string(store.path()).unwrap().lines().collect::<Vec<_>>(), ["50"]);

    store.save(30).unwrap();
    store.save(80).unwrap();
    assert_eq!(
        fs::read_to_string(store.path()).unwrap().lines().collect::<Vec<_>>(),
        ["80", "50", "30"]
    );

    let _ = fs::remove_file(store.path());
}
