//! Lazy index combinators.
//!
//! Both iterators stream index vectors into a caller-owned pool, so the
//! combinations themselves are never materialized up front.

/// k-subsets of `0..n` in lexicographic order.
///
/// ```
/// use entity::Combinations;
///
/// let picks: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
/// assert_eq!(picks[0], vec![0, 1]);
/// assert_eq!(picks[5], vec![2, 3]);
/// assert_eq!(picks.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        let done = k > n;
        Self {
            n,
            indices: if done { Vec::new() } else { (0..k).collect() },
            started: false,
            done,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let k = self.indices.len();
        // Rightmost position that has not reached its final value
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] != i + self.n - k) else {
            self.done = true;
            return None;
        };

        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// k-multisets of `0..n` (non-decreasing index vectors) in lexicographic order.
///
/// Yields `C(n + k - 1, k)` items; for `n = 0` and `k > 0` nothing.
#[derive(Debug, Clone)]
pub struct CombinationsWithReplacement {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl CombinationsWithReplacement {
    pub fn new(n: usize, k: usize) -> Self {
        let done = n == 0 && k > 0;
        Self {
            n,
            indices: if done { Vec::new() } else { vec![0; k] },
            started: false,
            done,
        }
    }
}

impl Iterator for CombinationsWithReplacement {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let last = self.n.saturating_sub(1);
        let Some(i) = self.indices.iter().rposition(|&index| index != last) else {
            self.done = true;
            return None;
        };

        let next = self.indices[i] + 1;
        for index in &mut self.indices[i..] {
            *index = next;
        }
        Some(self.indices.clone())
    }
}
