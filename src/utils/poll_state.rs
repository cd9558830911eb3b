use std::ops::{Deref, DerefMut};

/// The settlement state of a single task slot.
#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub(crate) enum TaskState {
    /// The task has not settled and may still be polled.
    Pending,
    /// The task settled and its result was written to the output buffer.
    Settled,
    /// The slot no longer holds anything: its result was either moved out
    /// or never stored (the short-circuiting failure).
    Taken,
}

impl TaskState {
    /// Returns `true` if the state is [`Pending`][Self::Pending].
    #[must_use]
    #[inline]
    pub(crate) fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` if the state is [`Settled`][Self::Settled].
    #[must_use]
    #[inline]
    pub(crate) fn is_settled(&self) -> bool {
        matches!(self, Self::Settled)
    }

    /// Sets the state to [`Settled`][Self::Settled].
    #[inline]
    pub(crate) fn set_settled(&mut self) {
        *self = TaskState::Settled;
    }

    /// Sets the state to [`Taken`][Self::Taken].
    #[inline]
    pub(crate) fn set_taken(&mut self) {
        *self = TaskState::Taken;
    }
}

/// The settlement states of every slot in a task set.
pub(crate) struct StateVec(Box<[TaskState]>);

impl StateVec {
    pub(crate) fn new(len: usize) -> Self {
        Self(vec![TaskState::Pending; len].into_boxed_slice())
    }

    /// Get an iterator over the indexes of all slots which are "settled".
    pub(crate) fn settled_indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter()
            .enumerate()
            .filter(|(_, state)| state.is_settled())
            .map(|(index, _)| index)
    }

    /// Get an iterator over the indexes of all slots which are "pending".
    pub(crate) fn pending_indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter()
            .enumerate()
            .filter(|(_, state)| state.is_pending())
            .map(|(index, _)| index)
    }
}

impl Deref for StateVec {
    type Target = [TaskState];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for StateVec {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn indexes() {
        let mut states = StateVec::new(4);
        states[1].set_settled();
        states[3].set_settled();
        assert_eq!(states.settled_indexes().collect::<Vec<_>>(), [1, 3]);
        assert_eq!(states.pending_indexes().collect::<Vec<_>>(), [0, 2]);

        states[1].set_taken();
        assert_eq!(states.settled_indexes().collect::<Vec<_>>(), [3]);
        assert_eq!(states.pending_indexes().collect::<Vec<_>>(), [0, 2]);
    }
}
