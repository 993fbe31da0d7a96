use crate::Sorter;

/// Heapsort: builds a max-heap, then pops the maximum to the back.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeapSorter;

impl Sorter for HeapSorter {
    fn sort<T, F>(&self, data: &mut [T], less: &F)
    where
        T: Clone + Send,
        F: Fn(&T, &T) -> bool + Sync,
    {
        heap_sort(data, less);
    }
}

pub(crate) fn heap_sort<T, F>(data: &mut [T], less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut start = (len - 2) / 2;
    loop {
        sift_down(data, start, len, less);
        if start == 0 {
            break;
        }
        start -= 1;
    }

    let mut end = len - 1;
    while end > 0 {
        data.swap(0, end);
        sift_down(data, 0, end, less);
        end -= 1;
    }
}

#[inline]
fn sift_down<T, F>(data: &mut [T], mut root: usize, end: usize, less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    loop {
        let child = root * 2 + 1;
        if child >= end {
            break;
        }

        let mut swap_idx = child;
        if child + 1 < end && less(&data[child], &data[child + 1]) {
            swap_idx = child + 1;
        }

        if !less(&data[root], &data[swap_idx]) {
            break;
        }

        data.swap(root, swap_idx);
        root = swap_idx;
    }
}
