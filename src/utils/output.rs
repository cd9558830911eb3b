use std::mem::{self, MaybeUninit};

/// An index-addressed buffer of results which starts out uninitialized.
///
/// Each slot is written at most once, by the settlement of the task with the
/// matching index. The caller tracks which slots have been written; that
/// bookkeeping is what makes `drop` and `take` sound.
pub(crate) struct OutcomeVec<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> OutcomeVec<T> {
    /// Initialize a new buffer of `capacity` uninitialized slots.
    pub(crate) fn uninit(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Write the result of the task at `index` into its slot.
    pub(crate) fn write(&mut self, index: usize, value: T) {
        let slots = self.data.spare_capacity_mut();
        slots[index] = MaybeUninit::new(value);
    }

    /// Drop the value stored at `index` in place.
    ///
    /// # Safety
    ///
    /// The slot at `index` must have been written, and must not be dropped
    /// or taken afterwards.
    pub(crate) unsafe fn drop(&mut self, index: usize) {
        let slots = self.data.spare_capacity_mut();
        // SAFETY: the caller guarantees the slot is initialized.
        unsafe { slots[index].assume_init_drop() };
    }

    /// Take all values out of the buffer, leaving an empty one behind.
    ///
    /// # Safety
    ///
    /// Every slot must have been written before calling this method.
    pub(crate) unsafe fn take(&mut self) -> Vec<T> {
        let mut data = vec![];
        mem::swap(&mut self.data, &mut data);
        // SAFETY: the caller guarantees all slots are initialized.
        unsafe { data.set_len(self.capacity) };
        data
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn write_out_of_order_take_in_order() {
        let mut buf: OutcomeVec<String> = OutcomeVec::uninit(3);
        buf.write(2, "c".into());
        buf.write(0, "a".into());
        buf.write(1, "b".into());
        // SAFETY: all three slots were written above.
        let values = unsafe { buf.take() };
        assert_eq!(values, ["a", "b", "c"]);
    }
}
