//! File naming conventions for restart snapshots.
//!
//! A snapshot is named `<prefix>.<anything>.restart.<iteration>`. For the k-th snapshot of
//! a batch, the intermediate atom dump is `<prefix>.<iteration>.<k>.atom` and the mesh is
//! `<prefix>.<k>.obj`. Both carry `k`, so no two jobs of one batch share a file even when
//! prefix and iteration repeat.

const RESTART_MARKER: &str = ".restart";

pub fn is_restart_name(name: &str) -> bool {
    name.contains(RESTART_MARKER)
}

/// Iteration number: the text after the last `.`.
pub fn iteration_of(name: &str) -> Option<u64> {
    let (_, suffix) = name.rsplit_once('.')?;
    suffix.parse().ok()
}

fn prefix_of(name: &str) -> Option<&str> {
    name.split_once('.').map(|(prefix, _)| prefix)
}

/// `<prefix>.<iteration>.<index>.atom` for the `index`-th snapshot of a batch.
pub fn intermediate_name(name: &str, index: usize) -> Option<String> {
    let prefix = prefix_of(name)?;
    let iteration = iteration_of(name)?;
    Some(format!("{}.{}.{}.atom", prefix, iteration, index))
}

/// `<prefix>.<index>.obj` for the `index`-th snapshot of a batch.
pub fn output_name(name: &str, index: usize) -> Option<String> {
    let prefix = prefix_of(name)?;
    Some(format!("{}.{}.obj", prefix, index))
}
