use std::thread;

use crate::Sorter;

use super::partition::partition;

/// Randomized quicksort that forks sub-ranges onto worker threads while a
/// thread budget lasts.
///
/// - `thread_budget` caps the additional threads the whole call tree may
///   create; one top-level call runs on at most `thread_budget + 1` threads.
/// - Every invocation partitions first. With budget left, one unit is spent
///   spawning a worker for the greater-than zone and the remainder is split
///   between the two recursive calls; with the budget exhausted, both zones
///   go to the `fallback` sequential sorter.
/// - If the OS refuses to spawn a worker, the affected sub-range is sorted
///   on the current thread instead; the sort still completes.
pub struct ParallelQuickSorter<S> {
    thread_budget: usize,
    fallback: S,
}

impl<S> ParallelQuickSorter<S> {
    pub fn new(thread_budget: usize, fallback: S) -> Self {
        Self {
            thread_budget,
            fallback,
        }
    }
}

impl<S: Sorter + Sync> Sorter for ParallelQuickSorter<S> {
    fn sort<T, F>(&self, data: &mut [T], less: &F)
    where
        T: Clone + Send,
        F: Fn(&T, &T) -> bool + Sync,
    {
        sort_budgeted(data, less, self.thread_budget, &self.fallback);
    }
}

// Left gets the floor share, right the remainder.
pub(crate) fn split_budget(budget: usize) -> (usize, usize) {
    debug_assert!(budget > 0);
    let left = (budget - 1) / 2;
    (left, budget - 1 - left)
}

fn sort_budgeted<T, F, S>(data: &mut [T], less: &F, budget: usize, fallback: &S)
where
    T: Clone + Send,
    F: Fn(&T, &T) -> bool + Sync,
    S: Sorter + Sync,
{
    if data.len() < 2 {
        return;
    }

    let (left_bound, right_bound) = partition(data, less, &mut rand::rng());

    if budget == 0 {
        let (left, rest) = data.split_at_mut(left_bound);
        let (_, right) = rest.split_at_mut(right_bound - left_bound);
        fallback.sort(left, less);
        fallback.sort(right, less);
        return;
    }

    let (left_budget, right_budget) = split_budget(budget);

    let spawned = thread::scope(|scope| {
        let (left, rest) = data.split_at_mut(left_bound);
        let (_, right) = rest.split_at_mut(right_bound - left_bound);

        let worker = thread::Builder::new()
            .spawn_scoped(scope, move || sort_budgeted(right, less, right_budget, fallback));
        sort_budgeted(left, less, left_budget, fallback);
        worker.is_ok()
        // The scope joins the worker before returning.
    });

    if !spawned {
        // The spawn failed and the right zone is still untouched; sort it
        // on this thread with the budget it was assigned.
        sort_budgeted(&mut data[right_bound..], less, right_budget, fallback);
    }
}
