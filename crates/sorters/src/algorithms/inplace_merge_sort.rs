use crate::Sorter;

/// Top-down merge sort whose merge step works in place, trading extra
/// comparisons and rotations for zero auxiliary storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct InplaceMergeSorter;

impl Sorter for InplaceMergeSorter {
    fn sort<T, F>(&self, data: &mut [T], less: &F)
    where
        T: Clone + Send,
        F: Fn(&T, &T) -> bool + Sync,
    {
        merge_sort_inplace(data, less);
    }
}

fn merge_sort_inplace<T, F>(data: &mut [T], less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    merge_sort_inplace(&mut data[..mid], less);
    merge_sort_inplace(&mut data[mid..], less);
    merge_adjacent(data, mid, less);
}

// Merges the sorted runs `[0, mid)` and `[mid, len)` without a buffer:
// cut the longer run in half, binary-search the matching cut in the other
// run, rotate the middle blocks past each other, recurse on both sides.
fn merge_adjacent<T, F>(data: &mut [T], mid: usize, less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    let len = data.len();
    let left_len = mid;
    let right_len = len - mid;
    if left_len == 0 || right_len == 0 {
        return;
    }
    if len == 2 {
        if less(&data[1], &data[0]) {
            data.swap(0, 1);
        }
        return;
    }

    let (first_cut, second_cut);
    if left_len >= right_len {
        first_cut = left_len / 2;
        second_cut = mid + {
            let (head, tail) = data.split_at(mid);
            let key = &head[first_cut];
            tail.partition_point(|x| less(x, key))
        };
    } else {
        second_cut = mid + right_len / 2;
        first_cut = {
            let (head, tail) = data.split_at(mid);
            let key = &tail[second_cut - mid];
            head.partition_point(|x| !less(key, x))
        };
    }

    data[first_cut..second_cut].rotate_left(mid - first_cut);
    let new_mid = first_cut + (second_cut - mid);

    let (left, right) = data.split_at_mut(new_mid);
    merge_adjacent(left, first_cut, less);
    merge_adjacent(right, second_cut - new_mid, less);
}
