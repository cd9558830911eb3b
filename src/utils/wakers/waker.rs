use std::sync::{Arc, Mutex};
use std::task::Wake;

use super::Readiness;

/// The waker handed to a single task.
///
/// Wake events mark the task's bit in the shared readiness set and then
/// delegate to the parent waker.
#[derive(Debug, Clone)]
pub(crate) struct TaskWaker {
    index: usize,
    readiness: Arc<Mutex<Readiness>>,
}

impl TaskWaker {
    /// Create a new instance of `TaskWaker`.
    pub(crate) fn new(index: usize, readiness: Arc<Mutex<Readiness>>) -> Self {
        Self { index, readiness }
    }
}

impl Wake for TaskWaker {
    fn wake(self: Arc<Self>) {
        let mut readiness = self.readiness.lock().unwrap();
        if !readiness.set_ready(self.index) {
            readiness
                .parent_waker()
                .expect("`parent_waker` not available from `Readiness`. Did you forget to call `Readiness::set_waker`?")
                .wake_by_ref()
        }
    }
}
