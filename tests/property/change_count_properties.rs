use pwd_change_count::policy::{MAX_LEN, MIN_LEN, MIN_RUN};
use pwd_change_count::{
    count_changes, missing_character_classes, reduce_by_deletion, reduce_by_insertion, scan_runs,
};
use proptest::prelude::*;
use secrecy::SecretString;
use std::collections::HashSet;

fn secret(pwd: &str) -> SecretString {
    SecretString::new(pwd.to_string().into())
}

/// Direct check of the strong policy, independent of the counter.
fn meets_policy(pwd: &str) -> bool {
    let chars: Vec<char> = pwd.chars().collect();
    let has_run = chars.windows(MIN_RUN).any(|w| w.iter().all(|&c| c == w[0]));
    (MIN_LEN..=MAX_LEN).contains(&chars.len())
        && chars.iter().any(|c| c.is_ascii_lowercase())
        && chars.iter().any(|c| c.is_ascii_uppercase())
        && chars.iter().any(|c| c.is_ascii_digit())
        && !has_run
}

/// Characters tried by the brute-force search: two per class, so an edit can
/// always pick a class and still differ from both neighbours.
const EDIT_ALPHABET: [char; 6] = ['a', 'b', 'A', 'B', '1', '2'];

fn single_edits(pwd: &str) -> Vec<String> {
    let chars: Vec<char> = pwd.chars().collect();
    let mut out = Vec::new();
    for i in 0..=chars.len() {
        for &c in &EDIT_ALPHABET {
            let mut inserted = chars.clone();
            inserted.insert(i, c);
            out.push(inserted.into_iter().collect());
        }
        if i < chars.len() {
            let mut deleted = chars.clone();
            deleted.remove(i);
            out.push(deleted.into_iter().collect());
            for &c in &EDIT_ALPHABET {
                if c != chars[i] {
                    let mut replaced = chars.clone();
                    replaced[i] = c;
                    out.push(replaced.into_iter().collect());
                }
            }
        }
    }
    out
}

/// Breadth-first search for the fewest edits reaching the policy, up to `limit`.
fn brute_force_changes(pwd: &str, limit: usize) -> Option<usize> {
    let mut seen: HashSet<String> = HashSet::from([pwd.to_string()]);
    let mut frontier = vec![pwd.to_string()];
    for depth in 0..=limit {
        if frontier.iter().any(|candidate| meets_policy(candidate)) {
            return Some(depth);
        }
        if depth == limit {
            break;
        }
        let mut next = Vec::new();
        for candidate in &frontier {
            for edited in single_edits(candidate) {
                if seen.insert(edited.clone()) {
                    next.push(edited);
                }
            }
        }
        frontier = next;
    }
    None
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn count_matches_brute_force_near_bounds(
        s in "[aA1]{8,9}|[aA]{17}|[a1]{17}|[aA1]{17}",
    ) {
        prop_assume!(scan_runs(&s).is_empty());
        let count = count_changes(Some(&secret(&s)));
        prop_assert!(count <= 2, "unexpected count {} for {:?}", count, s);
        prop_assert_eq!(brute_force_changes(&s, count), Some(count), "password {:?}", s);
    }
}

#[test]
fn brute_force_agrees_on_known_cases() {
    for (pwd, expected) in [("aAaAaAaAa", 1), ("a1a1a1a1", 2), ("aAaAaAaAaAaAaAaAa", 2)] {
        assert_eq!(count_changes(Some(&secret(pwd))), expected, "count for {}", pwd);
        assert_eq!(brute_force_changes(pwd, expected), Some(expected), "search for {}", pwd);
    }
}

proptest! {
    #[test]
    fn zero_changes_iff_policy_met(s in "[aA1!]{0,20}") {
        let count = count_changes(Some(&secret(&s)));
        prop_assert_eq!(count == 0, meets_policy(&s), "password {:?} count {}", s, count);
    }

    #[test]
    fn count_covers_length_changes(s in ".{0,40}") {
        let len = s.chars().count();
        let floor = MIN_LEN.saturating_sub(len).max(len.saturating_sub(MAX_LEN));
        let count = count_changes(Some(&secret(&s)));
        prop_assert!(count >= floor, "{} < {} for {:?}", count, floor, s);
    }

    #[test]
    fn missing_classes_ignores_order(s in "[a-zA-Z0-9#]{0,30}") {
        let reversed: String = s.chars().rev().collect();
        let missing = missing_character_classes(&s);
        prop_assert!(missing <= 3);
        prop_assert_eq!(missing, missing_character_classes(&reversed));
    }

    #[test]
    fn scanned_runs_are_long(s in "[ab]{0,30}") {
        let runs = scan_runs(&s);
        prop_assert!(runs.len() <= 2);
        prop_assert!(runs.iter().all(|&run| run >= MIN_RUN));
    }

    #[test]
    fn reducers_never_grow_runs(
        runs in prop::collection::vec(3usize..20, 0..6),
        budget in 0usize..12,
    ) {
        let total: usize = runs.iter().sum();
        for reduced in [reduce_by_insertion(&runs, budget), reduce_by_deletion(&runs, budget)] {
            prop_assert!(reduced.len() <= runs.len());
            prop_assert!(reduced.iter().all(|&run| run >= MIN_RUN));
            prop_assert!(reduced.iter().sum::<usize>() <= total);
        }
    }
}

#[test]
fn absent_password_costs_minimum_length() {
    assert_eq!(count_changes(None), MIN_LEN);
}
