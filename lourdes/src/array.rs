//! Slice lookups and chunking.

use std::num::NonZeroUsize;

/// Element at `index`, or `None` when the slice is too short.
pub fn nth<T>(index: usize, items: &[T]) -> Option<&T> {
    items.get(index)
}

/// Index of the first element equal to `item`.
pub fn index_of<T: PartialEq>(item: &T, items: &[T]) -> Option<usize> {
    items.iter().position(|candidate| candidate == item)
}

/// Split `items` into consecutive chunks of `size` elements.
///
/// The last chunk carries the remainder and may be shorter. No element is
/// ever dropped, and an empty slice yields no chunks.
pub fn split_each<T>(size: NonZeroUsize, items: &[T]) -> Vec<&[T]> {
    items.chunks(size.get()).collect()
}

/// `items` with a clone of `separator` between every two elements.
pub fn intersperse<T: Clone>(separator: &T, items: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len().saturating_mul(2).saturating_sub(1));
    for (position, item) in items.iter().enumerate() {
        if position > 0 {
            out.push(separator.clone());
        }
        out.push(item.clone());
    }
    out
}
