use std::path::PathBuf;
use thiserror::Error;

use crate::types::Stem;

/// Central error type for the stem-splitter-mp3 crate.
#[derive(Debug, Error)]
pub enum StemError {
    #[error("Invalid input path (no file name): {}", .0.display())]
    InvalidInput(PathBuf),

    #[error("Failed to launch `{program}`")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Demucs separation failed with {}", exit_label(.code))]
    Separation {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("FFmpeg conversion failed for {} with {}", .input.display(), exit_label(.code))]
    Transcode {
        input: PathBuf,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("{stem} WAV file not found: {}", .path.display())]
    MissingTrack { stem: Stem, path: PathBuf },

    #[error("IO error")]
    Io(#[from] std::io::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("code {c}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl StemError {
    /// Exit code of the failing external tool, if the error came from one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            StemError::Separation { code, .. } | StemError::Transcode { code, .. } => *code,
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StemError>;
