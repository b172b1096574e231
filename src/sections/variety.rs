//! Character variety section - counts missing lowercase, uppercase and digit classes.

/// Returns how many of the three required character classes are absent.
///
/// Only ASCII letters and digits count; position and frequency are irrelevant.
pub fn missing_character_classes(password: &str) -> usize {
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    [has_lower, has_upper, has_digit]
        .iter()
        .filter(|&&present| !present)
        .count()
}
