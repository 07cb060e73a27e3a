pub mod audio;
pub mod switches;
