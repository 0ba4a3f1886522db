/// Move every value of `array` at position `i` to position `order[i]`, in place.
///
/// `order` must be a permutation of `0..array.len()`.
///
/// # Example
///
/// ```
/// use meshx_dsort::utils::slice::scatter_permutation;
/// let order = vec![8, 5, 2, 3, 4, 7, 6, 0, 1];
/// let mut values = String::from("tightsemi").into_bytes();
/// scatter_permutation(&order, &mut values);
/// assert_eq!(values, b"mightiest");
/// ```
#[inline]
pub fn scatter_permutation<T>(order: &[usize], array: &mut [T]) {
    let mut seen = vec![false; array.len()];
    scatter_permutation_with_seen(order, array, &mut seen);
}

/// Move every value of `array` at position `i` to position `order[i]`, in place.
///
/// This version of `scatter_permutation` accepts a workspace `seen` vector of `bool`s, which must
/// be all `false` and have the same length as `array`. This is useful when the same workspace is
/// reused for several arrays.
pub fn scatter_permutation_with_seen<T>(order: &[usize], array: &mut [T], seen: &mut [bool]) {
    let nelem = seen.len();

    assert_eq!(order.len(), nelem);
    assert_eq!(array.len(), nelem);
    assert!(order.iter().all(|&i| i < nelem));

    for start in 0..nelem {
        if seen[start] {
            continue;
        }
        seen[start] = true;

        // Rotate the cycle through `start`: the value parked at `start` always belongs at `dst`.
        let mut dst = order[start];
        while dst != start {
            array.swap(start, dst);
            seen[dst] = true;
            dst = order[dst];
        }
    }
}
