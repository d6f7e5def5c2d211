//! Closed counts for the enumerations, used for size hints and in tests.
//!
//! All functions are generic over the primitive integer type and return
//! `None` when the count does not fit.

use num_traits::PrimInt;

/// Returns the number of partitions of a set with `n` elements (the Bell number).
///
/// Computed with the Bell triangle, so `bell_number::<u64>(n)` is `Some` up to `n == 25`.
pub fn bell_number<T: PrimInt>(n: usize) -> Option<T> {
    if n == 0 {
        return Some(T::one());
    }
    // the last entry of row i is B(i + 1)
    let mut row: Vec<T> = vec![T::one()];
    for _ in 1..n {
        let mut next = Vec::with_capacity(row.len() + 1);
        next.push(*row.last()?);
        for x in &row {
            let v = next.last()?.checked_add(x)?;
            next.push(v);
        }
        row = next;
    }
    row.last().copied()
}

/// Returns the number of partitions of a set with `n` elements into exactly `k`
/// non-empty subsets (the Stirling number of the second kind).
pub fn stirling2<T: PrimInt>(n: usize, k: usize) -> Option<T> {
    if k > n {
        return Some(T::zero());
    }
    // s[j] holds S(i, j) for the current row i
    let mut s: Vec<T> = vec![T::zero(); k + 1];
    s[0] = T::one();
    for i in 1..=n {
        let top = i.min(k);
        for j in (1..=top).rev() {
            let jt = T::from(j)?;
            s[j] = jt.checked_mul(&s[j])?.checked_add(&s[j - 1])?;
        }
        s[0] = T::zero();
    }
    Some(s[k])
}

/// Returns the number of subsets of an `n`-element set with more than one element,
/// i.e. `2^n - n - 1`.
pub fn num_subsets_larger_than_one_element<T: PrimInt>(n: usize) -> Option<T> {
    let total: T = num_traits::checked_pow(T::one() + T::one(), n)?;
    total.checked_sub(&T::from(n)?)?.checked_sub(&T::one())
}
