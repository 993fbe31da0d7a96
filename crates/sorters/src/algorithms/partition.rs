use rand::Rng;

/// Three-way partition of `data` around a randomly chosen pivot.
///
/// Returns `(left_bound, right_bound)` such that `[0, left_bound)` holds the
/// elements strictly less than the pivot, `[left_bound, right_bound)` the
/// elements equal to it (at least the pivot itself), and
/// `[right_bound, len)` the elements strictly greater. The rearrangement is
/// a permutation of the input. Requires `data.len() >= 2`.
pub fn partition<T, F, R>(data: &mut [T], less: &F, rng: &mut R) -> (usize, usize)
where
    F: Fn(&T, &T) -> bool,
    R: Rng + ?Sized,
{
    let len = data.len();
    debug_assert!(len >= 2);

    // The pivot parks at the last slot; neither scan moves it until the
    // second scan folds it into the equal zone.
    let pivot = len - 1;
    data.swap(rng.random_range(0..len), pivot);

    let mut left_bound = 0;
    for i in 0..len {
        if less(&data[i], &data[pivot]) {
            data.swap(left_bound, i);
            left_bound += 1;
        }
    }

    let mut right_bound = left_bound;
    for i in left_bound..len {
        if !less(&data[pivot], &data[i]) {
            data.swap(right_bound, i);
            right_bound += 1;
        }
    }

    (left_bound, right_bound)
}
