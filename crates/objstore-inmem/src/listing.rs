//! Directory emulation over a flat key space.
//!
//! A listing of `dir` contains one entry per distinct child of `dir`: the
//! key cut off right after the first segment below `dir`. Entries ending in
//! [`DIR_DELIM`] are directories and sort before leaves; each group is
//! ordered byte-wise.

use std::cmp::Ordering;

use objstore::DIR_DELIM;

/// Number of path segments in `dir`.
///
/// A trailing delimiter does not open a new segment, so `"a/b"` and
/// `"a/b/"` both have depth 2.
pub fn prefix_depth(dir: &str) -> usize {
    dir.split_inclusive(DIR_DELIM).count()
}

/// The listing entry `key` contributes to a listing at `depth`.
///
/// Segments keep their trailing delimiter, so the result ends in the
/// delimiter exactly when `key` continues below the entry.
pub fn entry_for(key: &str, depth: usize) -> String {
    key.split_inclusive(DIR_DELIM).take(depth + 1).collect()
}

/// Orders directory entries before leaves, then byte-wise.
pub fn compare_entries(a: &str, b: &str) -> Ordering {
    let a_dir = a.ends_with(DIR_DELIM);
    let b_dir = b.ends_with(DIR_DELIM);
    b_dir.cmp(&a_dir).then_with(|| a.cmp(b))
}

/// Compute the sorted, deduplicated children of `dir` among `keys`.
///
/// A key equal to `dir` is never its own child.
pub fn list_entries<'a, I>(keys: I, dir: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let depth = prefix_depth(dir);
    let mut entries: Vec<String> = keys
        .into_iter()
        .filter(|key| key.starts_with(dir) && *key != dir)
        .map(|key| entry_for(key, depth))
        .collect();
    entries.sort_unstable_by(|a, b| compare_entries(a, b));
    entries.dedup();
    entries
}
