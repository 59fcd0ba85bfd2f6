//! Narrowing a static display list by remote search results.
//!
//! Display records and store records share no key. A display record is kept
//! when its normalized name contains, or is contained in, at least one
//! normalized name returned by the remote search. This is a heuristic: a
//! short remote name like `"Leche"` corroborates every display name that
//! includes it, and an empty remote name corroborates everything.

use catalogo_core::normalize::{names_overlap, normalize};

use crate::display::DisplayRecord;

/// Keep the records of `baseline` corroborated by `remote_names`.
///
/// Order follows `baseline`; the result is always a subset of it.
pub fn reconcile<S: AsRef<str>>(baseline: &[DisplayRecord], remote_names: &[S]) -> Vec<DisplayRecord> {
    let remote: Vec<String> = remote_names.iter().map(|n| normalize(n.as_ref())).collect();

    baseline
        .iter()
        .filter(|record| {
            let local = normalize(record.nombre);
            remote.iter().any(|n| names_overlap(&local, n))
        })
        .copied()
        .collect()
}
