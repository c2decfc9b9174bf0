// sensiword-core/tests/detector_properties_tests.rs
//! Behavioural properties of the trie and scanner, exercised through the
//! public API only.

use sensiword_core::{filter, scan, search, DetectionEngine, Detector, DetectorConfig, MatchSpan, Trie};

const NOISE: &str = "#@$%^&*";

fn trie_of(words: &[&str], case_insensitive: bool, noise: &str) -> Trie {
    let mut trie = Trie::with_options(case_insensitive, noise.chars());
    for w in words {
        trie.insert(w);
    }
    trie
}

fn sorted_words(trie: &Trie) -> Vec<String> {
    let mut words = trie.list_words();
    words.sort();
    words
}

#[test_log::test]
fn insert_twice_is_idempotent() {
    let mut once = trie_of(&["he", "she"], false, "");
    let before = sorted_words(&once);
    once.insert("she");
    assert_eq!(sorted_words(&once), before);
    assert_eq!(once.len(), 2);
}

#[test_log::test]
fn lone_word_round_trips_through_scan() {
    for (word, case_insensitive) in [("hers", false), ("敏感词", false), ("TmD", true)] {
        let trie = trie_of(&[word], case_insensitive, NOISE);
        let spans = scan(&trie, word);
        assert_eq!(spans.len(), 1, "word {:?}", word);
        let span = &spans[0];
        let folded = if case_insensitive { word.to_lowercase() } else { word.to_string() };
        assert_eq!(span.hit_word, folded);
        assert_eq!(span.byte_start, 0);
        assert_eq!(span.byte_end, word.len());
        assert_eq!(span.matched, word);
        assert_eq!(span.char_start, 1);
        assert_eq!(span.char_end, word.chars().count());
    }
}

#[test_log::test]
fn delete_restores_node_count_and_stops_matching() {
    let mut trie = trie_of(&["he", "she"], false, "");
    let nodes_before = trie.node_count();

    trie.insert("hello");
    assert_eq!(scan(&trie, "hello").len(), 2);

    assert!(trie.delete("hello"));
    assert_eq!(trie.node_count(), nodes_before);
    assert!(!trie.list_words().contains(&"hello".to_string()));
    assert_eq!(search(&trie, "hello"), vec!["he"]);

    trie.insert("敏感词");
    assert!(trie.delete("敏感词"));
    assert!(scan(&trie, "敏感词").is_empty());
    assert_eq!(trie.node_count(), nodes_before);
}

#[test_log::test]
fn filter_is_identity_exactly_when_nothing_matches() {
    let trie = trie_of(&["he", "she", "hers", "his"], false, NOISE);
    for text in ["", "xyz", "ahishers", "h*e", "*he", "a h e", "敏感词"] {
        let spans = scan(&trie, text);
        assert_eq!(filter(&trie, text, None) == text, spans.is_empty(), "text {:?}", text);
    }
}

#[test_log::test]
fn overlapping_matches_are_all_reported_in_order() {
    let trie = trie_of(&["he", "she", "hers", "his"], false, "");
    let got: Vec<(String, usize, usize)> = scan(&trie, "ahishers")
        .into_iter()
        .map(|s| (s.hit_word, s.char_start, s.char_end))
        .collect();
    assert_eq!(
        got,
        vec![
            ("his".to_string(), 2, 4),
            ("she".to_string(), 4, 6),
            ("he".to_string(), 5, 6),
            ("hers".to_string(), 5, 8),
        ]
    );
}

#[test_log::test]
fn noise_inside_a_word_is_tolerated() {
    let trie = trie_of(&["敏感词1", "敏感词3"], false, NOISE);
    let spans: Vec<MatchSpan> = scan(&trie, "#@这$是#%一^&段包^&**含敏感词*#3和敏&*感#词1的文本@#");
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].hit_word, "敏感词3");
    assert_eq!(spans[0].matched, "敏感词*#3");
    assert_eq!(spans[1].hit_word, "敏感词1");
    assert_eq!(spans[1].matched, "敏&*感#词1");
}

#[test_log::test]
fn case_insensitive_matching_reports_folded_word() {
    let trie = trie_of(&["tmd"], true, "");
    for text in ["TMD", "Tmd", "tmd"] {
        let spans = scan(&trie, text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].hit_word, "tmd");
        assert_eq!(spans[0].matched, text);
    }
}

#[test_log::test]
fn filter_replaces_merged_run_per_character() {
    let trie = trie_of(&["he", "she", "hers", "his"], false, "");
    assert_eq!(filter(&trie, "ahishers", Some("*")), "a*******");
}

#[test_log::test]
fn byte_starts_are_monotonic() {
    let trie = trie_of(&["ab", "b", "bc", "abc", "c"], false, NOISE);
    let spans = scan(&trie, "xa*bcab#c");
    assert!(!spans.is_empty());
    assert!(spans.windows(2).all(|w| w[0].byte_start <= w[1].byte_start));
    for s in &spans {
        assert_eq!(&"xa*bcab#c"[s.byte_start..s.byte_end], s.matched);
    }
}

#[test_log::test]
fn detector_facade_matches_pure_functions() {
    let config = DetectorConfig {
        case_insensitive: Some(true),
        noise_characters: Some(NOISE.to_string()),
        ..Default::default()
    };
    let detector = Detector::new(&config);
    let words = ["脑残", "tmd", "傻x"];
    detector.add_words(&words);
    let trie = trie_of(&words, true, NOISE);

    let text = "这篇文章真tmd傻X，脑残，tmd瞎逼带节奏~";
    assert_eq!(detector.find_matches(text), scan(&trie, text));
    assert_eq!(detector.search(text), search(&trie, text));
    assert_eq!(detector.filter(text, None), filter(&trie, text, None));
    assert!(detector.detect(text));
}
