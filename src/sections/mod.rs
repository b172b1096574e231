//! Password analysis sections
//!
//! Each section measures one aspect of the distance to the strong policy.
//! The counter composes them.

mod deletion;
mod insertion;
mod runs;
mod variety;

pub use deletion::reduce_by_deletion;
pub use insertion::reduce_by_insertion;
pub use runs::scan_runs;
pub use variety::missing_character_classes;

/// Lengths of the runs of identical characters found in a password.
/// Every element is at least [`crate::policy::MIN_RUN`].
pub type RunLengths = Vec<usize>;
