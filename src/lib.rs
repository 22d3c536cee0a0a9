//! # scrubsim
//!
//! A tolerant interpretation crate that turns free-form robot-control scripts
//! (mock-ROS calls, key=value pairs, XML-ish markup, JSON payloads) into a
//! canonical command [`Plan`], and deterministically reconstructs the robot's
//! unicycle-model pose at any query time by replaying the plan from `t = 0`.
//!
//! It decouples *authoring* (whatever notation a script arrives in) from
//! *playback* (time-indexed scrubbing over the resulting trajectory): parse
//! once with [`parse`], then query [`step`] at arbitrary times, forwards or
//! backwards, with no hidden state between calls.

pub mod ir;
pub mod parser;
pub mod sim;

pub use ir::*;
pub use parser::*;
pub use sim::*;
