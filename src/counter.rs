//! Change counter - combines the sections into the number of edits a password needs.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::{MAX_LEN, MIN_LEN};
use crate::sections::{
    RunLengths, missing_character_classes, reduce_by_deletion, reduce_by_insertion, scan_runs,
};

/// How the password length relates to the policy bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRegime {
    /// Shorter than [`MIN_LEN`]: `insertions` characters must be added.
    TooShort { insertions: usize },
    WithinBounds,
    /// Longer than [`MAX_LEN`]: `deletions` characters must be removed.
    TooLong { deletions: usize },
}

impl LengthRegime {
    pub fn for_length(length: usize) -> Self {
        if length < MIN_LEN {
            LengthRegime::TooShort {
                insertions: MIN_LEN - length,
            }
        } else if length > MAX_LEN {
            LengthRegime::TooLong {
                deletions: length - MAX_LEN,
            }
        } else {
            LengthRegime::WithinBounds
        }
    }

    /// Number of edits forced by the length alone.
    pub fn changes(&self) -> usize {
        match *self {
            LengthRegime::TooShort { insertions } => insertions,
            LengthRegime::WithinBounds => 0,
            LengthRegime::TooLong { deletions } => deletions,
        }
    }
}

/// Diagnostics of a single change count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeCountReport {
    /// Password length in characters.
    pub length: usize,
    pub regime: LengthRegime,
    /// Missing character classes before any insertion.
    pub missing_classes: usize,
    /// Runs as found by the scanner.
    pub runs: RunLengths,
    /// Missing classes left after insertions supplied what they could.
    pub remaining_missing: usize,
    /// Runs left after insertions or deletions broke what they could.
    pub remaining_runs: RunLengths,
    /// Replacements still needed once the length is within bounds.
    pub replacements: usize,
}

impl ChangeCountReport {
    /// Total number of insertions, deletions and replacements.
    pub fn total(&self) -> usize {
        self.regime.changes() + self.replacements
    }

    pub fn is_strong(&self) -> bool {
        self.total() == 0
    }
}

/// Analyzes a password and returns the full breakdown of required changes.
///
/// An absent password is treated as empty.
pub fn analyze_password(password: Option<&SecretString>) -> ChangeCountReport {
    let pwd = password.map(|p| p.expose_secret()).unwrap_or("");
    analyze(pwd)
}

/// Returns the minimum number of character changes that make the password strong.
///
/// # Example
///
/// ```rust
/// use pwd_change_count::count_changes;
/// use secrecy::SecretString;
///
/// let password = SecretString::new("Abc123".to_string().into());
/// assert_eq!(count_changes(Some(&password)), 4);
/// assert_eq!(count_changes(None), 10);
/// ```
pub fn count_changes(password: Option<&SecretString>) -> usize {
    analyze_password(password).total()
}

fn analyze(pwd: &str) -> ChangeCountReport {
    let length = pwd.chars().count();
    let regime = LengthRegime::for_length(length);
    let missing_classes = missing_character_classes(pwd);
    let runs = scan_runs(pwd);

    // Inserted characters can each supply a missing class and split a run;
    // deleted ones only shorten runs.
    let (remaining_missing, remaining_runs) = match regime {
        LengthRegime::TooShort { insertions } => (
            missing_classes.saturating_sub(insertions),
            reduce_by_insertion(&runs, insertions),
        ),
        LengthRegime::TooLong { deletions } => {
            (missing_classes, reduce_by_deletion(&runs, deletions))
        }
        LengthRegime::WithinBounds => (missing_classes, runs.clone()),
    };

    // One replacement every third character breaks a run, and the same
    // replacement can carry a missing class.
    let run_replacements: usize = remaining_runs.iter().map(|run| run / 3).sum();
    let replacements = remaining_missing.max(run_replacements);

    let report = ChangeCountReport {
        length,
        regime,
        missing_classes,
        runs,
        remaining_missing,
        remaining_runs,
        replacements,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        length = report.length,
        missing = report.missing_classes,
        runs = ?report.runs,
        total = report.total(),
        "password change count computed"
    );

    report
}

/// Counts changes for many independent passwords, in order.
///
/// With the `async` feature, the token is checked before each password; passwords
/// skipped after cancellation yield `None`.
pub fn count_changes_batch(
    passwords: &[Option<SecretString>],
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Vec<Option<usize>> {
    let mut counts = Vec::with_capacity(passwords.len());

    for password in passwords {
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    #[cfg(feature = "tracing")]
                    tracing::info!(
                        "batch cancelled after {} of {} passwords",
                        counts.len(),
                        passwords.len()
                    );
                    break;
                }
            }
        }

        counts.push(Some(count_changes(password.as_ref())));
    }

    counts.resize(passwords.len(), None);
    counts
}

/// Async version that streams `(index, report)` pairs via channel.
///
/// Stops at cancellation or when the receiver is gone.
#[cfg(feature = "async")]
pub async fn count_changes_tx(
    passwords: Vec<Option<SecretString>>,
    token: CancellationToken,
    tx: mpsc::Sender<(usize, ChangeCountReport)>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("change counting is about to start for {} passwords", passwords.len());

    for (index, password) in passwords.iter().enumerate() {
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::info!("change counting cancelled at index {}", index);
            return;
        }

        let report = analyze_password(password.as_ref());
        if let Err(_e) = tx.send((index, report)).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send change count report: {}", _e);
            return;
        }
    }
}
