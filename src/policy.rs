//! Strong password policy bounds.

/// Minimum number of characters of a strong password.
pub const MIN_LEN: usize = 10;

/// Maximum number of characters of a strong password.
pub const MAX_LEN: usize = 16;

/// Shortest repetition of one character that breaks the policy.
pub const MIN_RUN: usize = 3;
