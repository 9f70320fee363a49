//! Gestalt (Ratcliff/Obershelp) sequence matching.
//!
//! The similarity of two sequences is `2 * M / T`, where `T` is their combined
//! length and `M` is the number of elements covered by matching blocks. Blocks
//! are found by taking the longest common contiguous run, then recursing into
//! the regions to its left and to its right. The bias toward long contiguous
//! runs is what makes the score robust to inserted filler while still catching
//! pasted code.
//!
//! # Autojunk
//!
//! With autojunk enabled and a second sequence of at least 200 elements, any
//! element occurring more than `len / 100 + 1` times in it is "popular": it
//! can no longer seed a match, although a match that is already found still
//! extends through it. On short alphabets (normalized code is mostly ASCII)
//! this discards most characters and drastically lowers scores, and it makes
//! the ratio orientation-dependent, so it is off unless asked for.
//!
//! ```rust
//! use matcher::SequenceMatcher;
//!
//! let a: Vec<char> = "abcd".chars().collect();
//! let b: Vec<char> = "bcde".chars().collect();
//! let sm = SequenceMatcher::new(&a, &b);
//! assert_eq!(sm.matching_characters(), 3);
//! assert_eq!(sm.ratio(), 0.75);
//! ```

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Second-sequence length from which autojunk takes effect.
pub const AUTOJUNK_MIN_LEN: usize = 200;

/// A matching block: `a[a..a + size] == b[b..b + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

/// Compares two sequences of hashable elements.
///
/// Construction indexes the positions of every element of `b`; autojunk is
/// decided on `b` alone.
pub struct SequenceMatcher<'a, T: Eq + Hash> {
    a: &'a [T],
    b: &'a [T],
    b2j: HashMap<&'a T, Vec<usize>>,
    popular: HashSet<&'a T>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    /// Matcher with autojunk disabled.
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self::with_autojunk(a, b, false)
    }

    /// Matcher with explicit autojunk policy.
    pub fn with_autojunk(a: &'a [T], b: &'a [T], autojunk: bool) -> Self {
        let mut b2j: HashMap<&'a T, Vec<usize>> = HashMap::new();
        for (j, elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(j);
        }

        let mut popular = HashSet::new();
        if autojunk && b.len() >= AUTOJUNK_MIN_LEN {
            let ntest = b.len() / 100 + 1;
            b2j.retain(|elt, positions| {
                if positions.len() > ntest {
                    popular.insert(*elt);
                    false
                } else {
                    true
                }
            });
        }

        Self { a, b, b2j, popular }
    }

    /// Number of distinct elements autojunk removed from the index.
    pub fn popular_count(&self) -> usize {
        self.popular.len()
    }

    /// Longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among equally long blocks, the one starting earliest in `a` wins, and
    /// among those the one starting earliest in `b`. If nothing matches, the
    /// result is `Match { a: alo, b: blo, size: 0 }`.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let (a, b) = (self.a, self.b);
        let mut best_i = alo;
        let mut best_j = blo;
        let mut best_size = 0;

        // j2len[j] = length of the longest block ending at a[i - 1], b[j].
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        let mut new_j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            if let Some(positions) = self.b2j.get(&a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let prev = match j.checked_sub(1) {
                        Some(p) => j2len.get(&p).copied().unwrap_or(0),
                        None => 0,
                    };
                    let k = prev + 1;
                    new_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            std::mem::swap(&mut j2len, &mut new_j2len);
            new_j2len.clear();
        }

        // Popular elements cannot seed a block but may extend one, even an
        // empty one.
        while best_i > alo && best_j > blo && a[best_i - 1] == b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && a[best_i + best_size] == b[best_j + best_size]
        {
            best_size += 1;
        }

        Match {
            a: best_i,
            b: best_j,
            size: best_size,
        }
    }

    /// All non-overlapping matching blocks, ascending in both sequences.
    ///
    /// Adjacent blocks are merged, and the list always ends with the sentinel
    /// `Match { a: a.len(), b: b.len(), size: 0 }`.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (la, lb) = (self.a.len(), self.b.len());

        let mut queue = vec![(0, la, 0, lb)];
        let mut blocks = Vec::new();
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            blocks.push(m);
            if alo < m.a && blo < m.b {
                queue.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
        }
        blocks.sort();

        let mut collapsed = Vec::with_capacity(blocks.len() + 1);
        let mut current = Match { a: 0, b: 0, size: 0 };
        for m in blocks {
            if current.a + current.size == m.a && current.b + current.size == m.b {
                current.size += m.size;
            } else {
                if current.size > 0 {
                    collapsed.push(current);
                }
                current = m;
            }
        }
        if current.size > 0 {
            collapsed.push(current);
        }
        collapsed.push(Match {
            a: la,
            b: lb,
            size: 0,
        });
        collapsed
    }

    /// `M`: elements covered by matching blocks.
    pub fn matching_characters(&self) -> usize {
        self.matching_blocks().iter().map(|m| m.size).sum()
    }

    /// Similarity in `[0, 1]`; two empty sequences are identical (1.0).
    pub fn ratio(&self) -> f64 {
        calculate_ratio(self.matching_characters(), self.a.len() + self.b.len())
    }

    /// Upper bound on [`ratio`](Self::ratio) from element multiplicities alone.
    pub fn quick_ratio(&self) -> f64 {
        let mut avail: HashMap<&T, usize> = HashMap::new();
        for elt in self.b {
            *avail.entry(elt).or_insert(0) += 1;
        }

        let mut matches = 0;
        for elt in self.a {
            if let Some(count) = avail.get_mut(elt) {
                if *count > 0 {
                    *count -= 1;
                    matches += 1;
                }
            }
        }
        calculate_ratio(matches, self.a.len() + self.b.len())
    }

    /// Upper bound on [`ratio`](Self::ratio) from lengths alone.
    pub fn real_quick_ratio(&self) -> f64 {
        let (la, lb) = (self.a.len(), self.b.len());
        calculate_ratio(la.min(lb), la + lb)
    }
}

fn calculate_ratio(matches: usize, length: usize) -> f64 {
    if length == 0 {
        return 1.0;
    }
    2.0 * matches as f64 / length as f64
}

/// Gestalt similarity of two strings, compared character by character, with
/// autojunk disabled.
///
/// ```rust
/// assert_eq!(matcher::ratio("abcdefghijklmnopqrst", "abcdefghijklmnopqxyz"), 0.85);
/// ```
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    SequenceMatcher::new(&a, &b).ratio()
}
