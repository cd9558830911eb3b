//! Aggregate the outcomes of an ordered set of fallible tasks.
//!
//! The `aggregate` operation waits for every task in the set to complete
//! successfully and yields their results in input order, or settles with the
//! failure reason of the first task to fail while later outcomes are
//! silently discarded. The aggregate outcome settles exactly once.
//!
//! # Examples
//!
//! ```rust
//! use futures_aggregate::prelude::*;
//! use futures_lite::future::block_on;
//! use std::future;
//!
//! block_on(async {
//!     let a = future::ready(Ok::<_, ()>(1));
//!     let b = future::ready(Ok(2));
//!     let c = future::ready(Ok(3));
//!     assert_eq!(vec![a, b, c].aggregate().await.unwrap(), vec![1, 2, 3]);
//! })
//! ```

pub(crate) mod vec;

use core::future::{Future, IntoFuture};

/// Wait for an ordered set of tasks to complete successfully, or abort early
/// on the first error.
///
/// Results are yielded in the order the tasks were supplied, no matter in
/// which order they complete. When a task fails, its failure reason is
/// returned right away; tasks which have not settled yet are not awaited any
/// further, and outcomes settling after the first failure have no effect.
pub trait Aggregate {
    /// The resulting output type.
    type Output;

    /// The resulting error type.
    type Error;

    /// Which kind of future are we turning this into?
    type Future: Future<Output = Result<Self::Output, Self::Error>>;

    /// Waits for the whole set to complete successfully, or returns early
    /// when any task fails.
    fn aggregate(self) -> Self::Future;
}

/// Aggregate an ordered sequence of tasks into a single future.
///
/// Accepts any iterable of tasks: plain futures with a `Result` output, or
/// [`Task`][crate::Task] values mixing immediate values with pending work.
/// The returned future resolves to the tasks' results in input order once
/// all of them succeed, or to the first failure to settle. An empty
/// sequence resolves to an empty `Vec` on the first poll.
///
/// The input must be a provably finite sequence: if its iterator cannot
/// report an upper bound (for example [`iter::repeat`][core::iter::repeat]),
/// the returned future settles to
/// [`AggregateError::InvalidInput`][crate::AggregateError::InvalidInput]
/// without constructing or polling any task.
///
/// # Examples
///
/// ```rust
/// use futures_aggregate::aggregate;
/// use futures_lite::future::block_on;
/// use std::future;
///
/// block_on(async {
///     let tasks = vec![
///         future::ready(Ok::<_, ()>("hello")),
///         future::ready(Ok("world")),
///     ];
///     assert_eq!(aggregate(tasks).await.unwrap(), vec!["hello", "world"]);
/// })
/// ```
pub fn aggregate<I, T, E>(tasks: I) -> vec::Aggregate<<I::Item as IntoFuture>::IntoFuture, T, E>
where
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
{
    let tasks = tasks.into_iter();
    match tasks.size_hint().1 {
        Some(_) => vec::Aggregate::new(tasks.map(IntoFuture::into_future).collect()),
        None => vec::Aggregate::invalid(),
    }
}
