use core::task::Waker;
use fixedbitset::FixedBitSet;

/// Tracks which tasks have signalled a wake-up and should be polled.
#[derive(Debug)]
pub(crate) struct Readiness {
    ready_count: usize,
    awake: FixedBitSet,
    parent_waker: Option<Waker>,
}

impl Readiness {
    /// Create a new instance with every bit set, so each task receives an
    /// initial poll.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            ready_count: len,
            // See https://github.com/petgraph/fixedbitset/issues/101
            awake: FixedBitSet::with_capacity_and_blocks(len, core::iter::repeat(!0)),
            parent_waker: None,
        }
    }

    /// Mark the task at `index` as awake.
    ///
    /// Returns the previous state for this index, so duplicate wake-ups can
    /// be told apart from fresh ones.
    pub(crate) fn set_ready(&mut self, index: usize) -> bool {
        if !self.awake[index] {
            self.ready_count += 1;
            self.awake.set(index, true);
            false
        } else {
            true
        }
    }

    /// Clear the wake-up marker for the task about to be polled.
    ///
    /// Returns whether the task was marked awake.
    pub(crate) fn clear_ready(&mut self, index: usize) -> bool {
        if self.awake[index] {
            self.ready_count -= 1;
            self.awake.set(index, false);
            true
        } else {
            false
        }
    }

    /// Returns `true` if any task has signalled since the last sweep.
    pub(crate) fn any_ready(&self) -> bool {
        self.ready_count > 0
    }

    /// Access the waker of whoever is awaiting the aggregate outcome.
    #[inline]
    pub(crate) fn parent_waker(&self) -> Option<&Waker> {
        self.parent_waker.as_ref()
    }

    /// Set the parent `Waker`. This needs to be called at the start of every
    /// `poll` function.
    pub(crate) fn set_waker(&mut self, parent_waker: &Waker) {
        match &mut self.parent_waker {
            Some(prev) => prev.clone_from(parent_waker),
            None => self.parent_waker = Some(parent_waker.clone()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bits() {
        let mut readiness = Readiness::new(3);
        assert!(readiness.any_ready());
        for index in 0..3 {
            assert!(readiness.clear_ready(index));
        }
        assert!(!readiness.any_ready());

        assert!(!readiness.set_ready(1));
        // a duplicate wake-up only reports the bit was already set
        assert!(readiness.set_ready(1));
        assert!(readiness.any_ready());

        assert!(readiness.clear_ready(1));
        assert!(!readiness.clear_ready(1));
        assert!(!readiness.any_ready());
    }
}
