//! Decide whether a target needs rewriting.
//!
//! Check mode and apply mode share [`plan`]; the only difference between the
//! two is whether the caller acts on [`Decision::write`].

use super::types::Observed;

/// Planned action for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Value reported to the caller as `changed`.
    pub changed: bool,
    /// Whether a write must be performed.
    pub write: bool,
}

/// True when the observed state does not already match `desired`.
///
/// Comparison is byte-exact: no newline or whitespace normalization.
pub fn needs_change(observed: &Observed, desired: &str) -> bool {
    match observed {
        Observed::Absent => true,
        Observed::Present(current) => current.as_slice() != desired.as_bytes(),
    }
}

pub fn plan(observed: &Observed, desired: &str, dry_run: bool) -> Decision {
    let changed = needs_change(observed, desired);
    Decision {
        changed,
        write: changed && !dry_run,
    }
}
