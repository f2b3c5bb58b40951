use std::collections::{HashMap, VecDeque};

use word_chain::{find_chain, hamming, load_dictionary, neighbors, WordIndex};

/// Small three-letter dictionary with one well-connected cluster and one
/// isolated word.
fn get_ladder_words() -> Vec<String> {
    [
        "cat", "cot", "cog", "dog", "dot", "cut", "cub", "cob", "bat", "bad", "bed", "bud",
        "but", "big", "bag", "bog", "fix",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Unweighted shortest-distance oracle: plain breadth-first search over the
/// same neighbor relation the solver uses.
fn bfs_distance(index: &WordIndex, source: &str, target: &str) -> Option<usize> {
    if !index.contains(source) || !index.contains(target) {
        return None;
    }
    if source == target {
        return Some(0);
    }
    let mut dist: HashMap<String, usize> = HashMap::new();
    dist.insert(source.to_string(), 0);
    let mut queue: VecDeque<String> = VecDeque::new();
    queue.push_back(source.to_string());

    while let Some(current) = queue.pop_front() {
        let d = dist[&current];
        for neighbor in neighbors(&current, index) {
            if !dist.contains_key(neighbor) {
                if neighbor == target {
                    return Some(d + 1);
                }
                dist.insert(neighbor.to_string(), d + 1);
                queue.push_back(neighbor.to_string());
            }
        }
    }
    None
}

fn assert_valid_chain(index: &WordIndex, chain: &[String], source: &str, target: &str) {
    assert_eq!(chain.first().map(String::as_str), Some(source));
    assert_eq!(chain.last().map(String::as_str), Some(target));
    for word in chain {
        assert!(index.contains(word), "{} not in the index", word);
    }
    for pair in chain.windows(2) {
        assert_eq!(
            hamming(&pair[0], &pair[1]),
            1,
            "{} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_four_word_ladder() {
    let index = WordIndex::build(&["abcde", "abcdf", "abcxf", "xbcxf"], 5);
    let chain = find_chain(&index, "abcde", "xbcxf").unwrap();
    assert_eq!(chain, vec!["abcde", "abcdf", "abcxf", "xbcxf"]);
}

#[test]
fn test_single_substitution_ladder() {
    let index = WordIndex::build(&["apple", "apply"], 5);
    let chain = find_chain(&index, "apple", "apply").unwrap();
    assert_eq!(chain, vec!["apple", "apply"]);
}

#[test]
fn test_disconnected_words_have_no_chain() {
    let index = WordIndex::build(&["apple", "mango"], 5);
    assert_eq!(find_chain(&index, "apple", "mango"), None);
}

#[test]
fn test_empty_dictionary_has_no_chain() {
    let index = WordIndex::build(Vec::<String>::new(), 5);
    assert_eq!(find_chain(&index, "apple", "mango"), None);
}

#[test]
fn test_source_equals_target() {
    let index = WordIndex::build(&["apple", "apply"], 5);
    let chain = find_chain(&index, "apple", "apple").unwrap();
    assert_eq!(chain, vec!["apple"]);
}

#[test]
fn test_absent_endpoints_have_no_chain() {
    let index = WordIndex::build(&["apple", "apply"], 5);
    assert_eq!(find_chain(&index, "zzzzz", "apple"), None);
    assert_eq!(find_chain(&index, "apple", "zzzzz"), None);
}

#[test]
fn test_length_mismatch_is_rejected_defensively() {
    let index = WordIndex::build(&["apple", "apply"], 5);
    assert_eq!(find_chain(&index, "app", "apple"), None);
    assert_eq!(find_chain(&index, "apple", "app"), None);
    assert_eq!(find_chain(&index, "applesauce", "apple"), None);
}

#[test]
fn test_chains_are_valid_ladders() {
    let words = get_ladder_words();
    let index = WordIndex::build(&words, 3);

    for source in index.iter() {
        for target in index.iter() {
            if let Some(chain) = find_chain(&index, source, target) {
                assert_valid_chain(&index, &chain, source, target);
            }
        }
    }
}

#[test]
fn test_chain_length_matches_bfs_oracle() {
    let words = get_ladder_words();
    let index = WordIndex::build(&words, 3);

    for source in index.iter() {
        for target in index.iter() {
            let expected = bfs_distance(&index, source, target);
            let found = find_chain(&index, source, target).map(|c| c.len() - 1);
            assert_eq!(
                found, expected,
                "distance mismatch for {} -> {}",
                source, target
            );
        }
    }
}

#[test]
fn test_isolated_word_is_unreachable() {
    let words = get_ladder_words();
    let index = WordIndex::build(&words, 3);
    assert_eq!(find_chain(&index, "cat", "fix"), None);
    assert_eq!(find_chain(&index, "fix", "cat"), None);
}

#[test]
fn test_hamming_never_exceeds_graph_distance() {
    let words = get_ladder_words();
    let index = WordIndex::build(&words, 3);

    for a in index.iter() {
        for b in index.iter() {
            if let Some(dist) = bfs_distance(&index, a, b) {
                assert!(
                    hamming(a, b) <= dist,
                    "hamming({}, {}) = {} exceeds graph distance {}",
                    a,
                    b,
                    hamming(a, b),
                    dist
                );
            }
        }
    }
}

#[test]
fn test_reconstructed_chain_walks_back_to_the_source() {
    // Long single corridor: reconstruction must traverse every predecessor
    // link from the target back to the source, in order.
    let words = get_ladder_words();
    let index = WordIndex::build(&words, 3);
    let chain = find_chain(&index, "dog", "bed").unwrap();
    assert_valid_chain(&index, &chain, "dog", "bed");
    assert_eq!(chain.len() - 1, bfs_distance(&index, "dog", "bed").unwrap());
}

#[test]
fn test_hamming_counts_differing_positions() {
    assert_eq!(hamming("abcde", "abcde"), 0);
    assert_eq!(hamming("abcde", "abcdf"), 1);
    assert_eq!(hamming("abcde", "xbcxf"), 3);
}

#[test]
#[should_panic]
fn test_hamming_rejects_unequal_lengths() {
    hamming("ab", "abcde");
}

#[test]
fn test_solver_is_deterministic() {
    let words = get_ladder_words();
    let index = WordIndex::build(&words, 3);
    let first = find_chain(&index, "cat", "bud");
    let second = find_chain(&index, "cat", "bud");
    assert_eq!(first, second);
}

#[test]
fn test_with_full_dictionary() {
    let words = load_dictionary();
    let index = WordIndex::build(&words, 5);

    let chain = find_chain(&index, "stone", "spine").unwrap();
    assert_valid_chain(&index, &chain, "stone", "spine");
    assert!(chain.len() >= 2);
}
