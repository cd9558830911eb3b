//! Utilities to implement the `aggregate` combinator.

mod futures;
mod output;
mod poll_state;
mod wakers;

pub(crate) use futures::TaskVec;
pub(crate) use output::OutcomeVec;
pub(crate) use poll_state::StateVec;
pub(crate) use wakers::WakerSet;
