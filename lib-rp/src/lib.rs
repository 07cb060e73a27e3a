#![no_std]

// must come first so the logging macros are visible to the other modules
mod fmt;

pub mod audio;
pub mod drivers;
