mod algorithms;
mod generators;

pub use algorithms::heap_sort::HeapSorter;
pub use algorithms::inplace_merge_sort::InplaceMergeSorter;
pub use algorithms::insertion_sort::InsertionSorter;
pub use algorithms::merge_sort::MergeSorter;
pub use algorithms::parallel_quick_sort::ParallelQuickSorter;
pub use algorithms::partition::partition;
pub use algorithms::std_sort::{StdSorter, StdStableSorter};
pub use generators::{ALL_CASES, DataCase, generate_case};

/// In-place comparison sort over a caller-owned slice.
///
/// - `less` must be a strict weak ordering over the elements. Under that
///   precondition, `!less(&data[i + 1], &data[i])` holds for every adjacent
///   pair after `sort` returns; a comparator that breaks it leaves the
///   elements in an unspecified order.
/// - Sorting reorders `data` in place; there is no other observable effect.
/// - `T: Clone` admits implementations that copy into scratch storage;
///   `T: Send` and `F: Sync` admit implementations that hand disjoint
///   sub-ranges to worker threads.
pub trait Sorter {
    fn sort<T, F>(&self, data: &mut [T], less: &F)
    where
        T: Clone + Send,
        F: Fn(&T, &T) -> bool + Sync;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    StdSort,
    StdStableSort,
    HeapSort,
    MergeSort,
    InplaceMergeSort,
    InsertionSort,
    ParallelQuickSort { thread_budget: usize },
}

pub const SEQUENTIAL_ALGORITHMS: [SortAlgorithm; 6] = [
    SortAlgorithm::StdSort,
    SortAlgorithm::StdStableSort,
    SortAlgorithm::HeapSort,
    SortAlgorithm::MergeSort,
    SortAlgorithm::InplaceMergeSort,
    SortAlgorithm::InsertionSort,
];

pub fn sequential_algorithms() -> &'static [SortAlgorithm] {
    &SEQUENTIAL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::StdSort => "std_sort",
        SortAlgorithm::StdStableSort => "std_stable_sort",
        SortAlgorithm::HeapSort => "heap_sort",
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::InplaceMergeSort => "inplace_merge_sort",
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::ParallelQuickSort { .. } => "parallel_quick_sort",
    }
}

pub fn sort_by<T, F>(algo: SortAlgorithm, data: &mut [T], less: &F)
where
    T: Clone + Send,
    F: Fn(&T, &T) -> bool + Sync,
{
    match algo {
        SortAlgorithm::StdSort => StdSorter.sort(data, less),
        SortAlgorithm::StdStableSort => StdStableSorter.sort(data, less),
        SortAlgorithm::HeapSort => HeapSorter.sort(data, less),
        SortAlgorithm::MergeSort => MergeSorter.sort(data, less),
        SortAlgorithm::InplaceMergeSort => InplaceMergeSorter.sort(data, less),
        SortAlgorithm::InsertionSort => InsertionSorter.sort(data, less),
        SortAlgorithm::ParallelQuickSort { thread_budget } => {
            ParallelQuickSorter::new(thread_budget, StdSorter).sort(data, less)
        }
    }
}

/// Entry point consumed by the benchmark driver: budgeted parallel
/// quicksort with the builtin unstable sort as its sequential fallback.
pub fn parallel_quick_sort<T, F>(data: &mut [T], less: &F, thread_budget: usize)
where
    T: Clone + Send,
    F: Fn(&T, &T) -> bool + Sync,
{
    ParallelQuickSorter::new(thread_budget, StdSorter).sort(data, less);
}
