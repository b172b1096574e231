//! Strong password change counting library
//!
//! This library computes the minimum number of single-character edits
//! (insertion, deletion, replacement) that turn a password into a strong one:
//! 10 to 16 characters, at least one lowercase letter, one uppercase letter
//! and one digit, and no character repeated three or more times in a row.
//!
//! # Features
//!
//! - `async` (default): Enables batch cancellation and channel streaming
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_change_count::{analyze_password, count_changes};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("aaaaaAAAA".to_string().into());
//!
//! assert_eq!(count_changes(Some(&password)), 2);
//!
//! let report = analyze_password(Some(&password));
//! println!("Runs: {:?}", report.runs);
//! println!("Replacements: {}", report.replacements);
//! ```

// Internal modules
mod counter;
mod sections;
mod validation;

pub mod policy;

// Public API
pub use counter::{
    ChangeCountReport, LengthRegime, analyze_password, count_changes, count_changes_batch,
};
pub use sections::{
    RunLengths, missing_character_classes, reduce_by_deletion, reduce_by_insertion, scan_runs,
};
pub use validation::{DEFAULT_DISPLAY_NAME, PasswordPolicyError, validate_password_strength};

#[cfg(feature = "async")]
pub use counter::count_changes_tx;
