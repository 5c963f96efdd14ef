//! Adapters from plain values into futures of `Result`, plus a
//! bounded-parallel map.
//!
//! A "rejected" future resolves to `Err`, a "resolved" one to `Ok`.

use crate::either::to_either;
use futures::future::{self, Ready, TryFutureExt};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::future::Future;
use std::num::NonZeroUsize;

/// Already-settled future: `Ok(value)` when `predicate` holds, otherwise
/// `Err(on_reject(value))`.
pub fn to_future<A, B, P, L>(predicate: P, on_reject: L, value: A) -> Ready<Result<A, B>>
where
    P: FnOnce(&A) -> bool,
    L: FnOnce(A) -> B,
{
    future::ready(to_either(predicate, on_reject, value))
}

/// Lift an `Option` into a settled future, rejecting with `on_none`.
pub fn maybe_to_future<A, B>(on_none: B, value: Option<A>) -> Ready<Result<A, B>> {
    future::ready(value.ok_or(on_none))
}

/// Lift a `Result` into a settled future.
pub fn either_to_future<A, B>(value: Result<A, B>) -> Ready<Result<A, B>> {
    future::ready(value)
}

/// Map `f` over `items` with at most `limit` futures in flight.
///
/// Results keep the order of `items`. The first error to settle ends the
/// run, whatever its position: it is returned and the remaining futures
/// are dropped without being polled further.
pub async fn fl_map<I, F, Fut, C, E>(limit: NonZeroUsize, mut f: F, items: I) -> Result<Vec<C>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<C, E>>,
{
    let mut settled: Vec<(usize, C)> = stream::iter(items.into_iter().enumerate())
        .map(|(index, item)| f(item).map_ok(move |value| (index, value)))
        .buffer_unordered(limit.get())
        .try_collect()
        .await?;

    settled.sort_unstable_by_key(|(index, _)| *index);
    Ok(settled.into_iter().map(|(_, value)| value).collect())
}
