use std::sync::{Arc, Mutex};
use std::task::Waker;

use super::{Readiness, TaskWaker};

/// One waker per task, all funnelling their wake events into a shared
/// readiness set.
pub(crate) struct WakerSet {
    wakers: Vec<Waker>,
    readiness: Arc<Mutex<Readiness>>,
}

impl WakerSet {
    /// Create a new instance of `WakerSet`.
    pub(crate) fn new(len: usize) -> Self {
        let readiness = Arc::new(Mutex::new(Readiness::new(len)));
        let wakers = (0..len)
            .map(|index| Arc::new(TaskWaker::new(index, readiness.clone())).into())
            .collect();
        Self { wakers, readiness }
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Waker> {
        self.wakers.get(index)
    }

    /// Access the shared `Readiness` set.
    pub(crate) fn readiness(&self) -> &Mutex<Readiness> {
        self.readiness.as_ref()
    }
}
