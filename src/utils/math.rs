use crate::Real;

/// Component-wise sum of two points.
#[inline]
pub fn add<T: Real>(a: [T; 3], b: [T; 3]) -> [T; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// Scale a point by a scalar.
#[inline]
pub fn scale<T: Real>(a: [T; 3], s: T) -> [T; 3] {
    [a[0] * s, a[1] * s, a[2] * s]
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn distance_squared<T: Real>(a: [T; 3], b: [T; 3]) -> T {
    let d = [a[0] - b[0], a[1] - b[1], a[2] - b[2]];
    d[0] * d[0] + d[1] * d[1] + d[2] * d[2]
}

/// Midpoint of the segment between `a` and `b`.
#[inline]
pub fn midpoint<T: Real>(a: [T; 3], b: [T; 3]) -> [T; 3] {
    let half = T::one() / (T::one() + T::one());
    scale(add(a, b), half)
}

/// Arithmetic mean of the given points. The mean of no points is the origin.
pub fn mean<T: Real>(points: impl IntoIterator<Item = [T; 3]>) -> [T; 3] {
    let mut sum = [T::zero(); 3];
    let mut count = T::zero();
    for p in points {
        sum = add(sum, p);
        count = count + T::one();
    }
    if count == T::zero() {
        sum
    } else {
        scale(sum, T::one() / count)
    }
}

/// Arithmetic mean of the given scalars. The mean of no values is zero.
pub fn mean_scalar<T: Real>(values: impl IntoIterator<Item = T>) -> T {
    let mut sum = T::zero();
    let mut count = T::zero();
    for v in values {
        sum = sum + v;
        count = count + T::one();
    }
    if count == T::zero() {
        sum
    } else {
        sum / count
    }
}
