use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project::pin_project;

/// A single unit of work in a task set: either a value which is already
/// available, or a future still working towards one.
///
/// An already-available value is treated as a trivially-successful task, so
/// immediate values and pending work can share one `Vec` handed to
/// [`aggregate`]. `Task` implements [`Future`] and settles exactly once;
/// polling it after it has settled is a programmer error and panics.
///
/// Plain futures with a `Result` output are valid tasks on their own;
/// reach for this type when mixing them with immediate values.
///
/// [`aggregate`]: crate::aggregate()
///
/// # Examples
///
/// ```rust
/// use futures_aggregate::{aggregate, Task};
/// use futures_lite::future::block_on;
/// use std::future;
///
/// block_on(async {
///     let tasks = vec![
///         Task::ready(1),
///         Task::from_future(future::ready(Ok::<_, ()>(2))),
///     ];
///     assert_eq!(aggregate(tasks).await.unwrap(), vec![1, 2]);
/// })
/// ```
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
#[derive(Debug)]
pub struct Task<T, Fut> {
    #[pin]
    inner: Inner<T, Fut>,
}

#[pin_project(project = InnerProj)]
#[derive(Debug)]
enum Inner<T, Fut> {
    Ready(Option<T>),
    Future(#[pin] Fut),
}

impl<T, Fut> Task<T, Fut> {
    /// Create a task which settles immediately with `value`.
    pub fn ready(value: T) -> Self {
        Self {
            inner: Inner::Ready(Some(value)),
        }
    }

    /// Create a task backed by `future`.
    pub fn from_future(future: Fut) -> Self {
        Self {
            inner: Inner::Future(future),
        }
    }
}

impl<T, E, Fut> Future for Task<T, Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project().inner.project() {
            InnerProj::Ready(value) => {
                let value = value.take().expect("Task polled after completing");
                Poll::Ready(Ok(value))
            }
            InnerProj::Future(future) => future.poll(cx),
        }
    }
}
