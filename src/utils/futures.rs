use std::mem::ManuallyDrop;
use std::pin::Pin;

/// Pinned task storage which supports dropping individual tasks in place as
/// they settle, intended to be constructed once and then accessed through
/// pin projections.
pub(crate) struct TaskVec<Fut> {
    tasks: Vec<ManuallyDrop<Fut>>,
}

impl<Fut> TaskVec<Fut> {
    /// Create a new instance of `TaskVec`.
    pub(crate) fn new(tasks: Vec<Fut>) -> Self {
        Self {
            tasks: tasks.into_iter().map(ManuallyDrop::new).collect(),
        }
    }

    /// Create an iterator of pinned references.
    pub(crate) fn iter(self: Pin<&mut Self>) -> impl Iterator<Item = Pin<&mut ManuallyDrop<Fut>>> {
        // SAFETY: `std` _could_ make this unsound if it were to decide Pin's
        // invariants aren't required to transmit through slices. Otherwise
        // this has the same safety as a normal field pin projection.
        unsafe { self.get_unchecked_mut() }
            .tasks
            .iter_mut()
            .map(|task| unsafe { Pin::new_unchecked(task) })
    }

    /// Drop the task at `index` in place.
    ///
    /// # Safety
    ///
    /// The task must not have been dropped before, and must not be polled or
    /// dropped afterwards.
    pub(crate) unsafe fn drop(mut self: Pin<&mut Self>, index: usize) {
        unsafe {
            let tasks = self.as_mut().get_unchecked_mut().tasks.as_mut_slice();
            ManuallyDrop::drop(&mut tasks[index]);
        };
    }
}
