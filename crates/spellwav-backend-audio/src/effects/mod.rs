//! Voice effects applied to the assembled buffer.
//!
//! Distortion runs on the spoken samples before silence is appended; echo runs
//! after, so its tail rings out into the silence.

pub mod distortion;
pub mod echo;

pub use distortion::{distort, DISTORTION_MIX};
pub use echo::{echo, echo_delay, ECHO_FEEDBACK};
