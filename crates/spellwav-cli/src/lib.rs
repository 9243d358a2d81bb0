//! spellwav CLI library.
//!
//! Command implementations and the option plumbing shared by the `spellwav`
//! binary: default clip directory lookup and log setup.

pub mod commands;
pub mod logging;
pub mod sound_dir;
