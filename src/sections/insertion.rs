//! Insertion section - breaks runs with the characters a short password must gain anyway.

use super::RunLengths;
use crate::policy::MIN_RUN;

/// Reduces run lengths using up to `insertions` inserted characters.
///
/// Runs are processed shortest first. A run of length `r` disappears after
/// `(r - 1) / 2` insertions; when the remaining budget is smaller the run
/// shrinks by two per insertion and every later run is left untouched.
///
/// Only runs still long enough to break the policy are returned, in processing order.
pub fn reduce_by_insertion(runs: &[usize], insertions: usize) -> RunLengths {
    let mut sorted: Vec<usize> = runs.iter().copied().filter(|&run| run >= MIN_RUN).collect();
    sorted.sort();

    let mut remaining = insertions;
    let mut reduced = Vec::with_capacity(sorted.len());

    for run in sorted {
        if remaining == 0 {
            reduced.push(run);
            continue;
        }

        let cost = run.saturating_sub(1) / 2;
        let left = if remaining >= cost {
            0
        } else {
            run.saturating_sub(2 * remaining)
        };
        remaining = remaining.saturating_sub(cost);

        if left >= MIN_RUN {
            reduced.push(left);
        }
    }

    reduced
}
