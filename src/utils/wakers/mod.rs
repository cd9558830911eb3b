mod readiness;
mod waker;
mod waker_set;

pub(crate) use readiness::Readiness;
pub(crate) use waker::TaskWaker;
pub(crate) use waker_set::WakerSet;
