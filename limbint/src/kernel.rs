//! Data-parallel building blocks shared by the arithmetic operators.
//!
//! Kernels are written as "compute every output position independently,
//! then resolve carries". The position pass fans out over rayon once the
//! range is long enough ([`KernelConfig::min_parallel_len`]). Carry
//! resolution runs in rounds: each round reads a snapshot of the result,
//! computes one update per distinct position in parallel, then writes the
//! updates back. Values aimed at the same position are merged before that
//! single write, so no two workers ever touch the same cell.
//!
//! [`KernelConfig::min_parallel_len`]: crate::config::KernelConfig::min_parallel_len

use rayon::prelude::*;
use smallvec::{smallvec, SmallVec};

use crate::config;
use crate::limb::{carry_words, Limb};

/// A word waiting to be added into the limb at `.0`.
pub(crate) type Pending<W> = (usize, W);

/// Evaluate `f` at every index in `0..len`, preserving order.
pub(crate) fn map_range<T, F>(len: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    let min_len = config::current().min_parallel_len;
    if len < min_len {
        (0..len).map(f).collect()
    } else {
        (0..len).into_par_iter().with_min_len(min_len).map(f).collect()
    }
}

/// Evaluate `f` on every item of `items`, preserving order.
pub(crate) fn map_slice<I, T, F>(items: &[I], f: F) -> Vec<T>
where
    I: Sync,
    T: Send,
    F: Fn(&I) -> T + Sync + Send,
{
    let min_len = config::current().min_parallel_len;
    if items.len() < min_len {
        items.iter().map(f).collect()
    } else {
        items.par_iter().with_min_len(min_len).map(f).collect()
    }
}

/// Evaluate `f` at every index in `0..len` and concatenate the emitted items.
pub(crate) fn flat_map_range<T, F, It>(len: usize, f: F) -> Vec<T>
where
    T: Send,
    It: IntoIterator<Item = T>,
    F: Fn(usize) -> It + Sync + Send,
{
    let min_len = config::current().min_parallel_len;
    if len < min_len {
        (0..len).flat_map(f).collect()
    } else {
        (0..len)
            .into_par_iter()
            .with_min_len(min_len)
            .flat_map_iter(f)
            .collect()
    }
}

/// Position plus every pending word aimed at it.
type Group<W> = (usize, SmallVec<[W; 4]>);

fn group_by_position<W: Limb>(mut pending: Vec<Pending<W>>) -> Vec<Group<W>> {
    pending.par_sort_unstable_by_key(|&(pos, _)| pos);
    let mut groups: Vec<Group<W>> = Vec::new();
    for (pos, word) in pending {
        match groups.last_mut() {
            Some((last, words)) if *last == pos => words.push(word),
            _ => groups.push((pos, smallvec![word])),
        }
    }
    groups
}

/// Sum `words` into `start`, counting how many times the word wrapped.
#[inline]
fn accumulate<W: Limb>(start: W, words: &[W]) -> (W, u128) {
    let mut sum = start;
    let mut wraps = 0u128;
    for word in words {
        match sum.checked_add(word) {
            Some(s) => sum = s,
            None => {
                sum = sum.wrapping_add(word);
                wraps += 1;
            }
        }
    }
    (sum, wraps)
}

/// Fold pending words into `result` until no position overflows.
///
/// Each round merges the words aimed at each position, adds them to the
/// current limb, and turns every wrap into a carry for the following
/// position(s). Carries past the end of `result` are dropped: callers size
/// the buffer so that the dropped part is pure two's-complement wrap.
pub(crate) fn resolve_carries<W: Limb>(result: &mut [W], mut pending: Vec<Pending<W>>) {
    let len = result.len();
    let mut round = 0usize;
    loop {
        pending.retain(|&(pos, word)| pos < len && word != W::ZERO);
        if pending.is_empty() {
            break;
        }
        round += 1;
        let groups = group_by_position(pending);
        tracing::trace!(round, positions = groups.len(), "carry round");

        let snapshot: &[W] = result;
        let updates = map_slice(&groups, |(pos, words)| {
            let (value, wraps) = accumulate(snapshot[*pos], words);
            (*pos, value, wraps)
        });

        pending = Vec::new();
        for (pos, value, wraps) in updates {
            result[pos] = value;
            pending.extend(
                carry_words::<W>(wraps)
                    .enumerate()
                    .map(|(offset, word)| (pos + 1 + offset, word)),
            );
        }
    }
}
