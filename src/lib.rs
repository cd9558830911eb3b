//! Await an ordered set of fallible futures, preserving input order and
//! failing fast.
//!
//! The [`aggregate`] operation turns an ordered set of independently-running
//! fallible tasks into a single future. It resolves with every task's result
//! in input order once all of them succeed, no matter in which order they
//! complete; or it settles with the failure reason of the first task to
//! fail, right away, while outcomes settling later are silently discarded.
//! The aggregate outcome settles exactly once.
//!
//! # Examples
//!
//! Await a set of similarly-typed fallible futures:
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
//!
//! Mix already-available values with pending work using [`Task`]:
//!
//! ```rust
//! use futures_aggregate::{aggregate, Task};
//! use futures_lite::future::block_on;
//! use std::future;
//!
//! block_on(async {
//!     let tasks = vec![
//!         Task::ready(1),
//!         Task::from_future(future::ready(Ok::<_, ()>(2))),
//!         Task::ready(3),
//!     ];
//!     assert_eq!(aggregate(tasks).await.unwrap(), vec![1, 2, 3]);
//! })
//! ```

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

mod error;
mod task;
mod utils;

pub mod aggregate;

pub use aggregate::aggregate;
pub use error::AggregateError;
pub use task::Task;

/// The futures aggregate prelude.
pub mod prelude {
    pub use super::aggregate::Aggregate as _;
}

/// Helper types for aggregating a contiguous growable array type with
/// heap-allocated contents, written `Vec<T>`.
pub mod vec {
    pub use crate::aggregate::vec::Aggregate;
}
