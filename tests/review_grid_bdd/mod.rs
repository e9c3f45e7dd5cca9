//! Support code for review grid behavioural tests.

pub(crate) mod state;

pub(crate) use state::ReviewGridState;
