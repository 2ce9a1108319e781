use std::env;

pub const DEMUCS_ENV: &str = "STEM_SPLITTER_DEMUCS";
pub const FFMPEG_ENV: &str = "STEM_SPLITTER_FFMPEG";

pub fn demucs_program() -> String {
    env::var(DEMUCS_ENV).unwrap_or_else(|_| "demucs".to_string())
}

pub fn ffmpeg_program() -> String {
    env::var(FFMPEG_ENV).unwrap_or_else(|_| "ffmpeg".to_string())
}
