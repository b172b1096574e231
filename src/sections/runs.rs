//! Run section - detects repetitions of three or more identical characters.

use super::RunLengths;
use crate::policy::MIN_RUN;

/// Scans the password for runs of identical consecutive characters.
///
/// Run lengths are accumulated per character, not per position: a later run
/// of an already seen character extends the existing bucket by its length
/// minus two (`"aaaXaaa"` yields `[4]`, not `[3, 3]`).
/// Buckets are returned in the order their character first formed a run.
pub fn scan_runs(password: &str) -> RunLengths {
    let mut buckets: Vec<(char, usize)> = Vec::new();
    let mut prev: Option<char> = None;
    let mut prev_prev: Option<char> = None;

    for c in password.chars() {
        if prev == Some(c) && prev_prev == Some(c) {
            match buckets.iter_mut().find(|(key, _)| *key == c) {
                Some((_, len)) => *len += 1,
                None => buckets.push((c, MIN_RUN)),
            }
        }
        prev_prev = prev;
        prev = Some(c);
    }

    buckets.into_iter().map(|(_, len)| len).collect()
}
