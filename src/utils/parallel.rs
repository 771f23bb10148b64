extern crate rayon;

use rayon::prelude::*;

/// Specifies a degree of data parallelism.
#[derive(Clone, Copy)]
pub enum ParallelismDegree {
    /// Use all available cpus.
    Full,
    /// Limit amount of chunks processed simultaneously.
    Limited {
        /// Max amount of chunks.
        max: usize,
    },
}

/// Maps collection and collects results into vector in parallel.
pub fn parallel_collect<T, F, R>(source: &[T], degree: ParallelismDegree, map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    match get_min_len(source.len(), degree) {
        Some(min_len) => source.par_iter().with_min_len(min_len).map(map_op).collect(),
        None => source.par_iter().map(map_op).collect(),
    }
}

/// Maps collection and collects results into vector in parallel, consuming the source.
pub fn parallel_into_collect<T, F, R>(source: Vec<T>, degree: ParallelismDegree, map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(T) -> R + Sync + Send,
    R: Send,
{
    match get_min_len(source.len(), degree) {
        Some(min_len) => source.into_par_iter().with_min_len(min_len).map(map_op).collect(),
        None => source.into_par_iter().map(map_op).collect(),
    }
}

fn get_min_len(items: usize, degree: ParallelismDegree) -> Option<usize> {
    match degree {
        ParallelismDegree::Full => None,
        ParallelismDegree::Limited { max } => Some((items as f64 / max as f64).ceil() as usize),
    }
}
