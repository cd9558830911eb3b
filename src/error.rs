use core::fmt;
use std::error::Error;

/// The error type produced by the [`aggregate`] operation.
///
/// A task set either fails the up-front shape check, or it fails because one
/// of its tasks failed. In the latter case the reason of the first task to
/// settle with a failure is carried through untouched; outcomes which settle
/// after that are discarded.
///
/// [`aggregate`]: crate::aggregate()
#[derive(Debug, PartialEq, Eq)]
pub enum AggregateError<E> {
    /// The input could not be treated as a finite ordered sequence of tasks.
    ///
    /// No task was constructed or polled.
    InvalidInput,
    /// A task failed. Carries the reason of the first failure to settle.
    Task(E),
}

impl<E> AggregateError<E> {
    /// Returns the task failure reason, if this error was caused by one.
    pub fn into_task_error(self) -> Option<E> {
        match self {
            Self::Task(reason) => Some(reason),
            Self::InvalidInput => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for AggregateError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "input is not a finite ordered sequence of tasks"),
            Self::Task(reason) => write!(f, "a task failed: {reason}"),
        }
    }
}

impl<E: Error + 'static> Error for AggregateError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput => None,
            Self::Task(reason) => Some(reason),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io;

    #[test]
    fn task_error_passes_through() {
        let err = AggregateError::Task(io::Error::new(io::ErrorKind::Other, "oh no"));
        assert_eq!(err.to_string(), "a task failed: oh no");
        assert_eq!(err.into_task_error().unwrap().to_string(), "oh no");
    }

    #[test]
    fn invalid_input_has_no_source() {
        let err: AggregateError<io::Error> = AggregateError::InvalidInput;
        assert!(err.source().is_none());
        assert!(err.into_task_error().is_none());
    }
}
