use super::Aggregate as AggregateTrait;
use crate::utils::{OutcomeVec, StateVec, TaskVec, WakerSet};
use crate::AggregateError;

use core::fmt;
use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};
use std::mem::ManuallyDrop;
use std::ops::DerefMut;

use pin_project::{pin_project, pinned_drop};

/// A future which waits for every task in an ordered set to complete
/// successfully, or settles with the first failure.
///
/// This `struct` is created by the [`aggregate`] function and by the
/// [`aggregate`][AggregateTrait::aggregate] method on the [`Aggregate`]
/// trait. See their documentation for more.
///
/// [`aggregate`]: crate::aggregate()
/// [`Aggregate`]: crate::aggregate::Aggregate
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project(PinnedDrop)]
pub struct Aggregate<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    /// A boolean which holds whether the outcome has been settled and
    /// handed out.
    consumed: bool,
    /// Set when the input failed the finite-sequence check; the outcome
    /// then settles to `InvalidInput` on the first poll.
    invalid: bool,
    /// The number of tasks which have not yet settled.
    pending: usize,
    /// The results buffer, written slot-by-slot as tasks succeed.
    items: OutcomeVec<T>,
    /// A structure holding the waker passed to this future, and the various
    /// sub-wakers passed to the contained tasks.
    wakers: WakerSet,
    /// The individual settlement state of each task slot.
    state: StateVec,
    #[pin]
    /// The tasks themselves.
    tasks: TaskVec<Fut>,
}

impl<Fut, T, E> Aggregate<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    #[inline]
    pub(crate) fn new(tasks: Vec<Fut>) -> Self {
        let len = tasks.len();
        Self {
            consumed: false,
            invalid: false,
            pending: len,
            items: OutcomeVec::uninit(len),
            wakers: WakerSet::new(len),
            state: StateVec::new(len),
            tasks: TaskVec::new(tasks),
        }
    }

    /// Create an instance which settles to `InvalidInput` on first poll,
    /// holding no tasks at all.
    #[inline]
    pub(crate) fn invalid() -> Self {
        let mut this = Self::new(Vec::new());
        this.invalid = true;
        this
    }
}

impl<Fut, T, E> AggregateTrait for Vec<Fut>
where
    Fut: IntoFuture<Output = Result<T, E>>,
{
    type Output = Vec<T>;
    type Error = AggregateError<E>;
    type Future = Aggregate<Fut::IntoFuture, T, E>;

    fn aggregate(self) -> Self::Future {
        Aggregate::new(self.into_iter().map(IntoFuture::into_future).collect())
    }
}

impl<Fut, T, E> fmt::Debug for Aggregate<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.state.iter()).finish()
    }
}

impl<Fut, T, E> Future for Aggregate<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Result<Vec<T>, AggregateError<E>>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        assert!(
            !*this.consumed,
            "futures must not be polled after completing"
        );

        // A rejected input settles before any task is scheduled.
        if *this.invalid {
            *this.consumed = true;
            return Poll::Ready(Err(AggregateError::InvalidInput));
        }

        // An empty set settles on the spot; no waker is registered.
        if this.state.is_empty() {
            *this.consumed = true;
            return Poll::Ready(Ok(Vec::new()));
        }

        let mut readiness = this.wakers.readiness().lock().unwrap();
        readiness.set_waker(cx.waker());
        if !readiness.any_ready() {
            // Nothing has signalled since the last sweep.
            return Poll::Pending;
        }

        // Poll all awake tasks. A settled slot is never polled again, which
        // keeps the pending count accurate no matter how often a task's
        // waker fires.
        for (index, mut task) in this.tasks.as_mut().iter().enumerate() {
            if this.state[index].is_pending() && readiness.clear_ready(index) {
                // unlock readiness so we don't deadlock when polling
                drop(readiness);

                // Obtain the intermediate waker.
                let mut cx = Context::from_waker(this.wakers.get(index).unwrap());

                // SAFETY: the slot's state is "pending", so the task has
                // neither finished nor been dropped; it's safe to poll.
                if let Poll::Ready(outcome) = unsafe {
                    task.as_mut()
                        .map_unchecked_mut(|t| t.deref_mut())
                        .poll(&mut cx)
                } {
                    this.state[index].set_settled();
                    *this.pending -= 1;
                    // SAFETY: the state has been changed to "settled" which
                    // means we'll no longer poll the task, so it's safe to
                    // drop it in place.
                    unsafe { ManuallyDrop::drop(task.get_unchecked_mut()) };

                    match outcome {
                        Ok(value) => this.items.write(index, value),
                        Err(reason) => {
                            // The first failure wins. The reason leaves with
                            // the return value, so the slot holds no output
                            // to drop later.
                            this.state[index].set_taken();
                            *this.consumed = true;
                            return Poll::Ready(Err(AggregateError::Task(reason)));
                        }
                    }
                }

                // Lock readiness so we can use it again
                readiness = this.wakers.readiness().lock().unwrap();
            }
        }

        // Check whether we're all done now or need to keep going.
        if *this.pending == 0 {
            // Mark all slots as taken before we move the results out.
            *this.consumed = true;
            for state in this.state.iter_mut() {
                debug_assert!(state.is_settled(), "every task should have settled");
                state.set_taken();
            }

            // SAFETY: we've checked with the state that all of our slots
            // have been filled, so the whole buffer is initialized.
            Poll::Ready(Ok(unsafe { this.items.take() }))
        } else {
            Poll::Pending
        }
    }
}

/// Drop the stored results and still-pending tasks on cancellation.
#[pinned_drop]
impl<Fut, T, E> PinnedDrop for Aggregate<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    fn drop(self: Pin<&mut Self>) {
        let mut this = self.project();

        // Drop all results which were written but never taken.
        for index in this.state.settled_indexes() {
            // SAFETY: a settled slot holds an initialized result, and this
            // is the only place it is dropped.
            unsafe { this.items.drop(index) };
        }

        // Drop all tasks which never settled; settled slots dropped theirs
        // at settlement time.
        for index in this.state.pending_indexes() {
            // SAFETY: we've just filtered down to *only* the pending slots,
            // whose tasks have not yet been dropped.
            unsafe { this.tasks.as_mut().drop(index) };
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::aggregate;
    use std::future;
    use std::io::{self, Error, ErrorKind};

    #[test]
    fn all_ok() {
        futures_lite::future::block_on(async {
            let res: Result<_, AggregateError<io::Error>> =
                vec![future::ready(Ok("hello")), future::ready(Ok("world"))]
                    .aggregate()
                    .await;
            assert_eq!(res.unwrap(), ["hello", "world"]);
        })
    }

    #[test]
    fn one_err() {
        futures_lite::future::block_on(async {
            let err = Error::new(ErrorKind::Other, "oh no");
            let res: Result<_, AggregateError<io::Error>> =
                vec![future::ready(Ok("hello")), future::ready(Err(err))]
                    .aggregate()
                    .await;
            match res.unwrap_err() {
                AggregateError::Task(reason) => assert_eq!(reason.to_string(), "oh no"),
                AggregateError::InvalidInput => panic!("expected a task failure"),
            }
        });
    }

    #[test]
    fn empty() {
        futures_lite::future::block_on(async {
            let tasks = Vec::<future::Ready<Result<u8, io::Error>>>::new();
            let res = aggregate(tasks).await;
            assert!(res.unwrap().is_empty());
        });
    }
}
