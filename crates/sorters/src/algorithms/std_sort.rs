use std::cmp::Ordering;

use crate::Sorter;

/// Delegates to the standard library's unstable sort.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdSorter;

/// Delegates to the standard library's stable sort.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdStableSorter;

impl Sorter for StdSorter {
    fn sort<T, F>(&self, data: &mut [T], less: &F)
    where
        T: Clone + Send,
        F: Fn(&T, &T) -> bool + Sync,
    {
        data.sort_unstable_by(|a, b| order(a, b, less));
    }
}

impl Sorter for StdStableSorter {
    fn sort<T, F>(&self, data: &mut [T], less: &F)
    where
        T: Clone + Send,
        F: Fn(&T, &T) -> bool + Sync,
    {
        data.sort_by(|a, b| order(a, b, less));
    }
}

#[inline]
fn order<T, F>(a: &T, b: &T, less: &F) -> Ordering
where
    F: Fn(&T, &T) -> bool,
{
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
