//! Ratcliff/Obershelp string similarity.
//!
//! The score of two strings is `2 * M / (len(a) + len(b))`, where `M` is the
//! total length of the matching blocks found by taking the longest common
//! contiguous substring and recursing into the unmatched text on either side
//! of it. Lengths are counted in `char`s.

use std::collections::HashMap;

/// A maximal common substring: `a[a_start..a_start + len] == b[b_start..b_start + len]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

/// Similarity ratio in `[0.0, 1.0]`. Two empty strings score `1.0`.
pub fn score(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched: usize = matching_blocks(&a, &b).iter().map(|block| block.len).sum();
    2.0 * matched as f64 / total as f64
}

/// All matching blocks between `a` and `b`, ordered by position in `a`.
pub fn matching_blocks(a: &[char], b: &[char]) -> Vec<MatchingBlock> {
    let positions = char_positions(b);

    let mut blocks = Vec::new();
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        let block = longest_match(a, &positions, a_lo, a_hi, b_lo, b_hi);
        if block.len == 0 {
            continue;
        }

        if a_lo < block.a_start && b_lo < block.b_start {
            pending.push((a_lo, block.a_start, b_lo, block.b_start));
        }
        let a_end = block.a_start + block.len;
        let b_end = block.b_start + block.len;
        if a_end < a_hi && b_end < b_hi {
            pending.push((a_end, a_hi, b_end, b_hi));
        }

        blocks.push(block);
    }

    blocks.sort_by_key(|block| (block.a_start, block.b_start));
    blocks
}

/// Ascending positions of every char of `b`.
fn char_positions(b: &[char]) -> HashMap<char, Vec<usize>> {
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, c) in b.iter().enumerate() {
        positions.entry(*c).or_default().push(j);
    }
    positions
}

/// Longest common substring of `a[a_lo..a_hi]` and `b[b_lo..b_hi]`.
///
/// Among equally long candidates the one starting earliest in `a` wins, then
/// the one starting earliest in `b`. Returns a zero-length block at
/// `(a_lo, b_lo)` when nothing matches.
fn longest_match(
    a: &[char],
    b_positions: &HashMap<char, Vec<usize>>,
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> MatchingBlock {
    let mut best = MatchingBlock {
        a_start: a_lo,
        b_start: b_lo,
        len: 0,
    };

    // run_ending_at[j] = length of the common run ending at a[i - 1], b[j]
    let mut run_ending_at: HashMap<usize, usize> = HashMap::new();

    for i in a_lo..a_hi {
        let mut next_runs: HashMap<usize, usize> = HashMap::new();

        if let Some(positions) = b_positions.get(&a[i]) {
            for &j in positions {
                if j < b_lo {
                    continue;
                }
                if j >= b_hi {
                    break;
                }

                let run = match j.checked_sub(1) {
                    Some(prev) => run_ending_at.get(&prev).copied().unwrap_or(0) + 1,
                    None => 1,
                };
                next_runs.insert(j, run);

                if run > best.len {
                    best = MatchingBlock {
                        a_start: i + 1 - run,
                        b_start: j + 1 - run,
                        len: run,
                    };
                }
            }
        }

        run_ending_at = next_runs;
    }

    best
}
