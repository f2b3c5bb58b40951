//! The chain solver: A* shortest path over the implicit ladder graph.
//!
//! Nodes are the index's words, edges connect words differing in exactly one
//! character, every edge costs 1. The heuristic is Hamming distance to the
//! target, which is admissible and consistent for unit-cost substitutions:
//! each differing position needs at least one substitution of its own. A*
//! with a consistent heuristic finalizes each word at its true distance, so
//! the first time the target is popped the reconstructed chain is shortest.
//!
//! All search state (frontier, scores, predecessors, closed set) is created
//! per call and discarded with it; the only shared input is the immutable
//! index, read without coordination.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::index::WordIndex;
use crate::neighbors::neighbors;

/// Hamming distance: count of positions where two equal-length words differ.
/// Both words must have the same character length.
pub fn hamming(a: &str, b: &str) -> usize {
    debug_assert_eq!(a.chars().count(), b.chars().count());
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}

/// A frontier entry. The heap cannot decrease a key in place, so relaxing a
/// word re-pushes it and stale entries linger; the pop loop discards any
/// entry whose word is already finalized. `seq` is a push counter that makes
/// equal-priority pops FIFO within one call, keeping runs reproducible.
struct Open<'a> {
    f: usize,
    seq: usize,
    word: &'a str,
}

impl PartialEq for Open<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for Open<'_> {}

impl Ord for Open<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap, we pop lowest f
        // first and, among equals, the earliest push.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Open<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a shortest chain from `source` to `target`, or `None` when no chain
/// exists. "No chain" is a normal outcome, not an error: it covers absent
/// endpoints, an empty index, a length mismatch, and an exhausted frontier.
///
/// Both endpoints must already be normalized the same way the index was.
/// `source == target` yields the single-element chain.
pub fn find_chain(index: &WordIndex, source: &str, target: &str) -> Option<Vec<String>> {
    let length = index.word_length();
    if source.chars().count() != length || target.chars().count() != length {
        return None;
    }
    let source = index.get(source)?;
    let target = index.get(target)?;
    if source == target {
        return Some(vec![source.to_string()]);
    }

    let mut g_score: HashMap<&str, usize> = HashMap::new();
    let mut came_from: HashMap<&str, &str> = HashMap::new();
    let mut closed: HashSet<&str> = HashSet::new();
    let mut open = BinaryHeap::new();
    let mut seq = 0usize;

    g_score.insert(source, 0);
    open.push(Open { f: hamming(source, target), seq, word: source });

    while let Some(Open { word: current, .. }) = open.pop() {
        if closed.contains(current) {
            continue;
        }
        if current == target {
            return Some(reconstruct(&came_from, current));
        }
        closed.insert(current);

        let current_g = g_score[current];
        for neighbor in neighbors(current, index) {
            if closed.contains(neighbor) {
                continue;
            }
            let tentative = current_g + 1;
            let known = g_score.get(neighbor).copied();
            if known.map_or(true, |best| tentative < best) {
                g_score.insert(neighbor, tentative);
                came_from.insert(neighbor, current);
                seq += 1;
                open.push(Open {
                    f: tentative + hamming(neighbor, target),
                    seq,
                    word: neighbor,
                });
            }
        }
    }

    None
}

/// Walk the predecessor map backward from the target, then reverse into
/// source-to-target order.
fn reconstruct<'a>(came_from: &HashMap<&'a str, &'a str>, mut current: &'a str) -> Vec<String> {
    let mut path = vec![current.to_string()];
    while let Some(&parent) = came_from.get(current) {
        current = parent;
        path.push(current.to_string());
    }
    path.reverse();
    path
}
