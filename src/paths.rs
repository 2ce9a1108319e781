use crate::error::{Result, StemError};
use crate::types::{SplitResult, Stem};
use std::path::{Path, PathBuf};

pub const VOCALS_MP3: &str = "vocals.mp3";
pub const INSTRUMENTAL_MP3: &str = "instrumental.mp3";

/// Final compressed file for `stem`, directly under `output_dir`.
pub fn final_track_path(output_dir: &Path, stem: Stem) -> PathBuf {
    match stem {
        Stem::Vocals => output_dir.join(VOCALS_MP3),
        Stem::Instrumental => output_dir.join(INSTRUMENTAL_MP3),
    }
}

pub fn final_tracks(output_dir: &Path) -> SplitResult {
    SplitResult {
        vocals_path: final_track_path(output_dir, Stem::Vocals),
        instrumental_path: final_track_path(output_dir, Stem::Instrumental),
    }
}

/// File name of `input` without its last extension (`My_Song.wav` -> `My_Song`).
pub fn track_name(input: &Path) -> Result<String> {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| StemError::InvalidInput(input.to_path_buf()))
}

/// Makes `output_dir` absolute against the current directory and creates it.
pub fn prepare_output_dir(output_dir: &Path) -> Result<PathBuf> {
    let abs = std::path::absolute(output_dir)?;
    std::fs::create_dir_all(&abs)?;
    Ok(abs)
}
