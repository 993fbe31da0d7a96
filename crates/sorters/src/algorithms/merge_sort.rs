use crate::Sorter;

/// Top-down merge sort that copies both halves into an auxiliary arena
/// before sorting them.
///
/// The arena is sized up front by the recursive estimate, so its length
/// equals the total number of elements copied across all recursive calls,
/// and every call carves its copies off the front bump-allocator style.
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeSorter;

impl Sorter for MergeSorter {
    fn sort<T, F>(&self, data: &mut [T], less: &F)
    where
        T: Clone + Send,
        F: Fn(&T, &T) -> bool + Sync,
    {
        let len = data.len();
        if len < 2 {
            return;
        }

        let mut arena_vec = vec![data[0].clone(); arena_len(len)];
        let mut arena: &mut [T] = &mut arena_vec;
        merge_sort(data, &mut arena, less);
        // The recursion consumes the arena exactly.
        debug_assert!(arena.is_empty());
    }
}

fn arena_len(len: usize) -> usize {
    if len < 2 {
        return 0;
    }
    let left = len / 2;
    len + arena_len(left) + arena_len(len - left)
}

fn merge_sort<'a, T, F>(data: &mut [T], arena: &mut &'a mut [T], less: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return;
    }
    let left_len = len / 2;

    let (copies, rest) = std::mem::take(arena).split_at_mut(len);
    *arena = rest;
    let (left_buf, right_buf) = copies.split_at_mut(left_len);
    left_buf.clone_from_slice(&data[..left_len]);
    right_buf.clone_from_slice(&data[left_len..]);

    merge_sort(left_buf, arena, less);
    merge_sort(right_buf, arena, less);

    merge_into(left_buf, right_buf, data, less);
}

fn merge_into<T, F>(left: &[T], right: &[T], out: &mut [T], less: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    debug_assert_eq!(left.len() + right.len(), out.len());

    let mut i = 0;
    let mut j = 0;
    for slot in out.iter_mut() {
        if i < left.len() && (j >= right.len() || !less(&right[j], &left[i])) {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}
