use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf};

use crate::utils::{demucs_program, ffmpeg_program};

pub const DEFAULT_MODEL: &str = "demucs_quantized";
pub const DEFAULT_CODEC: &str = "libmp3lame";
pub const DEFAULT_QUALITY: u8 = 2;

/// The two tracks produced by a two-stem split.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stem {
    Vocals,
    Instrumental,
}

impl Stem {
    /// Lowercase label used in logs and progress output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stem::Vocals => "vocals",
            Stem::Instrumental => "instrumental",
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stem::Vocals => f.write_str("Vocals"),
            Stem::Instrumental => f.write_str("Instrumental"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitOptions {
    pub output_dir: PathBuf,
    pub model_name: String,
    pub demucs_program: String,
    pub ffmpeg_program: String,
    pub codec: String,
    pub quality: u8,
    pub overwrite: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            output_dir: ".".into(),
            model_name: DEFAULT_MODEL.into(),
            demucs_program: demucs_program(),
            ffmpeg_program: ffmpeg_program(),
            codec: DEFAULT_CODEC.into(),
            quality: DEFAULT_QUALITY,
            overwrite: false,
        }
    }
}

/// Intermediate WAV locations the separation tool is expected to write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeparatedTracks {
    pub vocals: PathBuf,
    pub accompaniment: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitResult {
    pub vocals_path: PathBuf,
    pub instrumental_path: PathBuf,
}
