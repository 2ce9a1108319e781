pub mod command;
pub mod demucs;
pub mod ffmpeg;
pub mod splitter;
