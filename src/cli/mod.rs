//! CLI operation mode handlers.
//!
//! - [`review_tui`]: Interactive grid over a review file

pub mod review_tui;
