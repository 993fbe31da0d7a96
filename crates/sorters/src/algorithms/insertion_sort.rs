use crate::Sorter;

/// Insertion sort; quadratic, kept for small inputs and as a minimal
/// conforming fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct InsertionSorter;

impl Sorter for InsertionSorter {
    fn sort<T, F>(&self, data: &mut [T], less: &F)
    where
        T: Clone + Send,
        F: Fn(&T, &T) -> bool + Sync,
    {
        insertion_sort(data, less);
    }
}

pub(crate) fn insertion_sort<T, F>(data: &mut [T], less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && less(&data[j], &data[j - 1]) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}
