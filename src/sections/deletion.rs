//! Deletion section - spends the deletions a long password needs anyway on its runs.
//!
//! A deletion is worth the most on a run whose length is a multiple of three:
//! one deletion there saves one later replacement. Runs with `len % 3 == 1`
//! need two deletions for the same saving, and every other run needs three.
//! The budget is therefore spent in three passes, one per remainder class,
//! over the runs sorted shortest first. Every pass maps the previous sequence
//! slot by slot, so a run keeps its position across passes.

use super::RunLengths;
use crate::policy::MIN_RUN;

/// Reduces run lengths using exactly the `deletions` the password must lose.
///
/// Returns the runs still long enough to break the policy, ordered by their length before reduction.
pub fn reduce_by_deletion(runs: &[usize], deletions: usize) -> RunLengths {
    let mut sorted: Vec<usize> = runs.iter().copied().filter(|&run| run >= MIN_RUN).collect();
    // Stable: equal runs keep their scan order.
    sorted.sort();

    let mut remaining = deletions;
    let first = deletion_pass(sorted, &mut remaining, |run, _| usize::from(run % 3 == 0));
    let second = deletion_pass(first, &mut remaining, |run, budget| {
        if run % 3 == 1 { budget.min(2) } else { 0 }
    });
    let third = deletion_pass(second, &mut remaining, |run, budget| {
        budget.min(run.saturating_sub(2))
    });

    third.into_iter().filter(|&run| run >= MIN_RUN).collect()
}

/// Maps every run through `cost`, which returns how many deletions to spend on
/// it given the remaining budget. Once the budget is empty, runs pass through.
fn deletion_pass<F>(runs: Vec<usize>, remaining: &mut usize, cost: F) -> Vec<usize>
where
    F: Fn(usize, usize) -> usize,
{
    runs.into_iter()
        .map(|run| {
            if *remaining == 0 {
                return run;
            }
            let used = cost(run, *remaining).min(*remaining);
            *remaining -= used;
            run.saturating_sub(used)
        })
        .collect()
}
