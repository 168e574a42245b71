//! Threshold-based parallel dispatch for per-pixel passes.
//!
//! Small buffers run sequentially; anything past the threshold fans out
//! through rayon. Keeping the dispatch in one place avoids repeating the
//! size check in every analyzer and transform.

use rayon::prelude::*;

/// Minimum number of pixels to trigger parallel processing.
pub(crate) const PARALLEL_THRESHOLD: usize = 30_000;

/// Fold/reduce over fixed-size chunks (e.g. RGB triplets).
pub(crate) fn parallel_fold_reduce<T, A, I, F, R>(
    data: &[T],
    chunk_size: usize,
    init: I,
    fold_fn: F,
    reduce_fn: R,
) -> A
where
    T: Sync,
    A: Send + Clone,
    I: Fn() -> A + Sync,
    F: Fn(A, &[T]) -> A + Sync,
    R: Fn(A, A) -> A + Sync,
{
    let num_elements = data.len() / chunk_size;

    if num_elements >= PARALLEL_THRESHOLD {
        data.par_chunks_exact(chunk_size)
            .fold(&init, &fold_fn)
            .reduce(&init, &reduce_fn)
    } else {
        let mut acc = init();
        for chunk in data.chunks_exact(chunk_size) {
            acc = fold_fn(acc, chunk);
        }
        acc
    }
}

/// Mutate fixed-size chunks in place.
pub(crate) fn parallel_for_each_chunk_mut<T, F>(data: &mut [T], chunk_size: usize, f: F)
where
    T: Send + Sync,
    F: Fn(&mut [T]) + Sync,
{
    let num_elements = data.len() / chunk_size;

    if num_elements >= PARALLEL_THRESHOLD {
        data.par_chunks_exact_mut(chunk_size).for_each(&f);
    } else {
        for chunk in data.chunks_exact_mut(chunk_size) {
            f(chunk);
        }
    }
}

/// Map fixed-size chunks into a new vector.
pub(crate) fn parallel_map_chunks<T, U, F>(data: &[T], chunk_size: usize, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&[T]) -> U + Sync,
{
    let num_elements = data.len() / chunk_size;

    if num_elements >= PARALLEL_THRESHOLD {
        data.par_chunks_exact(chunk_size).map(&f).collect()
    } else {
        data.chunks_exact(chunk_size).map(|chunk| f(chunk)).collect()
    }
}
