//! Platform abstraction layer
//!
//! The simulation never sees raw window events. It consumes:
//! - Input: logical key state queries
//! - Time: milliseconds elapsed since the previous query

pub mod input;
pub mod time;

pub use input::{InputQuery, Key, KeyState};
pub use time::{Clock, ManualClock, WallClock};
